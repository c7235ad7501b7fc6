//! Error adapter for converting LumoError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! JSON parse errors point at the failing location in the input file; every
//! other error is rendered as a plain message with an error code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use serde_json::error::Category;

use lumo::{LumoError, graph::GraphError};

/// Adapter for a diagram JSON parse error.
///
/// Wraps the [`serde_json::Error`] together with the source text, so the
/// failing line can be shown with a label under the offending character.
pub struct JsonErrorAdapter<'a> {
    /// The wrapped JSON error
    err: &'a serde_json::Error,
    /// Source code for displaying snippets
    src: &'a str,
    /// Byte offset of the error in `src`, when known
    offset: Option<usize>,
}

impl<'a> JsonErrorAdapter<'a> {
    /// Create a new adapter for a JSON error at `offset` in `src`.
    pub fn new(err: &'a serde_json::Error, src: &'a str, offset: Option<usize>) -> Self {
        Self { err, src, offset }
    }

    fn label(&self) -> &'static str {
        match self.err.classify() {
            Category::Syntax => "invalid JSON here",
            Category::Data => "unexpected value here",
            Category::Eof => "input ends here",
            Category::Io => "read failed here",
        }
    }
}

impl fmt::Debug for JsonErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonErrorAdapter")
            .field("err", &self.err)
            .field("offset", &self.offset)
            .finish()
    }
}

impl fmt::Display for JsonErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid diagram JSON: {}", self.err)
    }
}

impl std::error::Error for JsonErrorAdapter<'_> {}

impl MietteDiagnostic for JsonErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("lumo::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err.classify() {
            Category::Data => Some(Box::new(concat!(
                "nodes need `id` and `label`; ",
                "`type` is one of concept, process, actor, data, decision",
            ))),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        // Truncated input is reported at its end, zero-width.
        let span = if self.err.is_eof() {
            SourceSpan::new(self.src.len().into(), 0)
        } else {
            let offset = self.offset?;
            let len = self
                .src
                .get(offset..)
                .and_then(|rest| rest.chars().next())
                .map_or(0, char::len_utf8);
            SourceSpan::new(offset.into(), len)
        };

        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.label().to_string()), span),
        )))
    }
}

/// Adapter for non-parse [`LumoError`] variants.
///
/// This adapter handles errors that don't have source location information,
/// such as I/O errors, graph errors, configuration errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a LumoError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LumoError::Io(_) => "lumo::io",
            LumoError::Parse { .. } => "lumo::parse",
            LumoError::Graph(_) => "lumo::graph",
            LumoError::Config(_) => "lumo::config",
            LumoError::Export(_) => "lumo::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            LumoError::Graph(GraphError::DuplicateNodeId(_)) => {
                Some(Box::new("every node id must be unique within a diagram"))
            }
            LumoError::Graph(GraphError::EmptyNodeId(_)) => {
                Some(Box::new("give the node a non-empty `id`"))
            }
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a located JSON error or a plain error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A JSON parse error with source location information.
    Json(JsonErrorAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Json(j) => fmt::Display::fmt(j, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Json(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(j) => j.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(j) => j.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Json(j) => j.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Json(j) => j.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`LumoError`] into a reportable error.
pub fn to_reportable(err: &LumoError) -> Reportable<'_> {
    match err {
        LumoError::Parse { err: json_err, src } => {
            Reportable::Json(JsonErrorAdapter::new(json_err, src, err.parse_offset()))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use lumo::LayoutBuilder;

    use super::*;

    fn parse_error(source: &str) -> LumoError {
        LayoutBuilder::default()
            .parse(source)
            .expect_err("source should not parse")
    }

    #[test]
    fn test_json_error_is_located() {
        let source = "{\n  \"nodes\": [ oops ]\n}";
        let err = parse_error(source);

        let reportable = to_reportable(&err);
        let Reportable::Json(adapter) = &reportable else {
            panic!("Expected Json");
        };

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(&source[labels[0].offset()..labels[0].offset() + 1], "o");
        assert_eq!(reportable.code().unwrap().to_string(), "lumo::parse");
    }

    #[test]
    fn test_json_error_at_end_of_input() {
        let source = "{ \"nodes\": [";
        let err = parse_error(source);

        let Reportable::Json(adapter) = to_reportable(&err) else {
            panic!("Expected Json");
        };
        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels[0].offset(), source.len());
        assert_eq!(labels[0].len(), 0);
        assert_eq!(labels[0].label(), Some("input ends here"));
    }

    #[test]
    fn test_data_error_has_help() {
        let err = parse_error(r#"{ "nodes": [{ "id": "a", "label": "A", "type": "cloud" }] }"#);

        let reportable = to_reportable(&err);
        assert!(reportable.help().is_some());
        assert!(reportable.to_string().starts_with("Invalid diagram JSON"));
    }

    #[test]
    fn test_graph_error() {
        let err = LumoError::Graph(GraphError::DuplicateNodeId("a".to_string()));

        let reportable = to_reportable(&err);
        match &reportable {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Graph error: Duplicate node id `a`");
            }
            Reportable::Json(_) => panic!("Expected Error"),
        }
        assert_eq!(reportable.code().unwrap().to_string(), "lumo::graph");
        assert!(reportable.help().is_some());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_config_error_code() {
        let err = LumoError::Config("bad value".to_string());
        let reportable = to_reportable(&err);
        assert_eq!(reportable.code().unwrap().to_string(), "lumo::config");
        assert!(reportable.help().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let source = "{ \"nodes\": [ oops ] }";
        let err = parse_error(source);

        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();

        assert!(out.contains("lumo::parse"), "{out}");
        assert!(out.contains("invalid JSON here"), "{out}");
    }
}
