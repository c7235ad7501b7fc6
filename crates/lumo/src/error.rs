//! Error types for Lumo operations.
//!
//! This module provides the main error type [`LumoError`]. Layout itself never
//! fails; errors come from reading, parsing, and validating diagram input and
//! from configuration problems.

use std::io;

use thiserror::Error;

use lumo_core::graph::GraphError;

/// The main error type for Lumo operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text alongside the JSON error so that
/// callers can render the failing location.
#[derive(Debug, Error)]
pub enum LumoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid diagram JSON: {err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl LumoError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Byte offset into the source where a `Parse` error occurred.
    ///
    /// serde_json reports 1-based line and column numbers; this converts them
    /// to an offset into `src`, clamped to its length. Returns `None` for
    /// other variants or when the error has no location.
    pub fn parse_offset(&self) -> Option<usize> {
        let Self::Parse { err, src } = self else {
            return None;
        };
        if err.line() == 0 {
            return None;
        }

        let line_start: usize = src
            .split_inclusive('\n')
            .take(err.line() - 1)
            .map(str::len)
            .sum();
        Some((line_start + err.column().saturating_sub(1)).min(src.len()))
    }
}
