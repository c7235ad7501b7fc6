//! Lumo - Deterministic layout for small concept diagrams.
//!
//! Lumo places the nodes of a directed graph either in layered rows
//! (hierarchical) or on a circle (radial), computes where edges meet node
//! borders, and reports the bounding box a renderer needs for its viewport.
//! The same input always produces the same coordinates.
//!
//! Hierarchical layout is the default. When the edges contain a cycle it
//! cannot be applied, and Lumo quietly falls back to radial layout, so laying
//! out a graph never fails.

pub mod config;
pub mod layout;

mod error;

pub use lumo_core::{geometry, graph};

pub use error::LumoError;
pub use layout::{
    CycleDetected, EdgeAnchors, EngineBuilder, Layout, Positions, compute_layout,
    hierarchical_layout, radial_layout, rect_edge, svg_bounds,
};

use log::{debug, info, trace, warn};

use config::AppConfig;
use graph::{Diagram, Edge, LayoutEngine, Node};

/// Builder for parsing and laying out Lumo diagrams.
///
/// Node size, spacing and the default engine come from the [`AppConfig`]
/// given at construction.
///
/// # Examples
///
/// ```rust
/// use lumo::{LayoutBuilder, config::AppConfig};
///
/// let source = r#"{
///     "nodes": [
///         { "id": "client", "label": "Client" },
///         { "id": "server", "label": "Server" }
///     ],
///     "edges": [{ "from": "client", "to": "server" }]
/// }"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = LayoutBuilder::new(config);
///
/// // Parse source to a diagram
/// let diagram = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Place every node
/// let layout = builder.layout(&diagram);
/// assert_eq!(layout.positions().len(), 2);
///
/// // Or use default config
/// let builder = LayoutBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including node geometry and the default engine
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder lays out with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse diagram JSON into a [`Diagram`].
    ///
    /// Node ids must be non-empty and unique. Edges that reference unknown
    /// nodes are accepted but logged, since layout ignores them.
    ///
    /// # Errors
    ///
    /// Returns [`LumoError::Parse`] for malformed JSON and
    /// [`LumoError::Graph`] for invalid node ids.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lumo::LayoutBuilder;
    ///
    /// let builder = LayoutBuilder::default();
    /// let diagram = builder.parse(r#"{ "nodes": [], "edges": [] }"#)
    ///     .expect("Failed to parse diagram");
    /// assert!(diagram.nodes().is_empty());
    /// ```
    pub fn parse(&self, source: &str) -> Result<Diagram, LumoError> {
        info!("Parsing diagram");

        let diagram: Diagram =
            serde_json::from_str(source).map_err(|err| LumoError::new_parse_error(err, source))?;
        graph::validate_nodes(diagram.nodes())?;

        for edge in graph::dangling_edges(diagram.nodes(), diagram.edges()) {
            warn!(
                from = edge.from(),
                to = edge.to();
                "Edge references an unknown node and will not be drawn"
            );
        }

        debug!(
            nodes = diagram.nodes().len(),
            edges = diagram.edges().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Lay out a diagram.
    ///
    /// The diagram's own `layout` hint wins over the configured default
    /// engine.
    pub fn layout(&self, diagram: &Diagram) -> Layout {
        let hint = diagram.layout().unwrap_or(self.config.layout().engine());
        self.layout_with(diagram.nodes(), diagram.edges(), Some(hint))
    }

    /// Lay out `nodes` and `edges` with an explicit engine hint.
    ///
    /// `None` uses the configured default engine. See
    /// [`EngineBuilder::compute`] for the fallback rules.
    pub fn layout_with(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        hint: Option<LayoutEngine>,
    ) -> Layout {
        let hint = hint.unwrap_or(self.config.layout().engine());
        let layout =
            EngineBuilder::from_config(self.config.layout()).compute(nodes, edges, Some(hint));

        info!(
            engine:% = layout.engine(),
            fallback = layout.is_fallback(),
            nodes = layout.positions().len();
            "Layout calculated"
        );
        layout
    }
}
