//! CLI logic for the sphinx-graph tool.
//!
//! This module contains the core CLI logic: load the configuration, read the
//! description, assemble the graph, report diagnostics and write the output.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{fs, io};

use log::{info, warn};

use sphinx_graph::{
    GraphBuilder, SphinxGraphError,
    diagnostic::{Diagnostic, write_diagnostics},
};

/// Run the sphinx-graph CLI application
///
/// This function processes the input description through the sphinx-graph
/// pipeline, writes every diagnostic to stderr and writes the resulting
/// graph to the output file. The output is written even when diagnostics
/// were raised.
///
/// Returns the reported diagnostics; with `--deny-warnings` they are
/// promoted to errors.
///
/// # Errors
///
/// Returns `SphinxGraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed descriptions
/// - Rendering errors
pub fn run(args: &Args) -> Result<Vec<Diagnostic>, SphinxGraphError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        format:? = args.format;
        "Processing description"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = GraphBuilder::new(app_config);
    let description = builder.parse(&source)?;
    let (graph, diagnostics) = builder.build(&description).into_parts();

    let diagnostics: Vec<Diagnostic> = if args.deny_warnings {
        diagnostics.into_iter().map(Diagnostic::denied).collect()
    } else {
        diagnostics
    };
    write_diagnostics(io::stderr().lock(), &diagnostics)?;
    if !diagnostics.is_empty() {
        warn!(count = diagnostics.len(); "Unresolved references in description");
    }

    builder.render(&graph, args.format.into(), &args.output)?;

    info!(output_file = args.output; "Graph exported successfully");

    Ok(diagnostics)
}
