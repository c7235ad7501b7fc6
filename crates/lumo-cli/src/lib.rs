//! CLI logic for the Lumo layout tool.
//!
//! Reads a diagram JSON file, lays it out, and writes a JSON layout report.

pub mod error_adapter;

mod args;
mod config;
mod report;

pub use args::Args;
pub use report::LayoutReport;

use std::fs;

use log::info;

use lumo::{LayoutBuilder, LumoError};

/// Run the Lumo CLI application
///
/// This function lays out the diagram in the input file and writes the
/// resulting layout report to the output file.
///
/// The engine is chosen from `--layout` if given, then the diagram's own
/// `layout` field, then the configured default.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LumoError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - JSON parsing errors
/// - Invalid node ids
/// - Report serialization errors
pub fn run(args: &Args) -> Result<(), LumoError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Lay out the diagram using the LayoutBuilder API
    let builder = LayoutBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let hint = args.layout.or(diagram.layout());
    let layout = builder.layout_with(diagram.nodes(), diagram.edges(), hint);

    // Write output file
    let report = LayoutReport::new(&diagram, &layout, builder.config().layout().padding());
    fs::write(&args.output, report.to_json()?)?;

    info!(
        output_file = args.output,
        nodes = report.node_count(),
        edges = report.edge_count();
        "Layout exported successfully"
    );

    Ok(())
}
