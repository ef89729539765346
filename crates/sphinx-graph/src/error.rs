//! Error types for sphinx-graph operations.
//!
//! This module provides the main error type [`SphinxGraphError`] which wraps
//! the error conditions of loading, assembling and exporting a graph.

use std::io;

use thiserror::Error;

use sphinx_graph_core::model::ModelError;

/// The main error type for sphinx-graph operations.
///
/// # Diagnostic Variants
///
/// The `Model` variant keeps the description source next to the error so
/// that its span can be shown in context.
#[derive(Debug, Error)]
pub enum SphinxGraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Model { err: ModelError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SphinxGraphError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SphinxGraphError {
    /// Create a new `Model` error with the associated source text.
    pub fn new_model_error(err: ModelError, src: impl Into<String>) -> Self {
        Self::Model {
            err,
            src: src.into(),
        }
    }
}
