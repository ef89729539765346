//! sphinx-graph CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use sphinx_graph_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting sphinx-graph");
    debug!(args:?; "Parsed arguments");

    match sphinx_graph_cli::run(&args) {
        Ok(diagnostics) if args.deny_warnings && !diagnostics.is_empty() => {
            error!(count = diagnostics.len(); "Diagnostics denied");
            process::exit(1);
        }
        Ok(_) => info!("Completed successfully"),
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();

            for reportable in to_reportables(&err) {
                let mut writer = String::new();
                reporter
                    .render_report(&mut writer, &reportable)
                    .expect("Writing to String buffer is infallible");

                error!("{writer}");
            }

            process::exit(1);
        }
    }
}
