//! Command-line argument definitions for the sphinx-graph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, logging verbosity and warning handling.

use clap::{Parser, ValueEnum};

use sphinx_graph::export::OutputFormat;

/// Command-line arguments for the sphinx-graph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input description (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "sphinx_graph.svg")]
    pub output: String,

    /// Output format; anything but `dot` requires Graphviz
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Treat diagnostics as errors and exit with a failure status
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Dot,
    Svg,
    Png,
    Pdf,
}

impl From<Format> for OutputFormat {
    fn from(val: Format) -> Self {
        match val {
            Format::Dot => OutputFormat::Dot,
            Format::Svg => OutputFormat::Svg,
            Format::Png => OutputFormat::Png,
            Format::Pdf => OutputFormat::Pdf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sphinx-graph", "build.toml"]).unwrap();

        assert_eq!(args.input, "build.toml");
        assert_eq!(args.output, "sphinx_graph.svg");
        assert_eq!(args.format, Format::Svg);
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
        assert!(!args.deny_warnings);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "sphinx-graph",
            "build.toml",
            "-o",
            "out.dot",
            "-f",
            "dot",
            "-c",
            "config.toml",
            "--log-level",
            "debug",
            "--deny-warnings",
        ])
        .unwrap();

        assert_eq!(args.output, "out.dot");
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Dot);
        assert_eq!(args.config.as_deref(), Some("config.toml"));
        assert_eq!(args.log_level, "debug");
        assert!(args.deny_warnings);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Args::try_parse_from(["sphinx-graph", "build.toml", "-f", "jpeg"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["sphinx-graph"]).is_err());
    }
}
