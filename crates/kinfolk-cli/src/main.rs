//! Kinfolk CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};
use miette::{GraphicalReportHandler, GraphicalTheme};

use kinfolk::KinfolkError;
use kinfolk_cli::{Args, error_adapter::to_reportable};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match kinfolk_cli::run(&args) {
        Ok(()) => info!("Completed successfully"),
        Err(err) => {
            eprintln!("{}", render(&err));
            process::exit(1);
        }
    }
}

/// Logs go to stderr so command output on stdout stays pipeable.
fn init_logging(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    info!(log_level:?; "Starting Kinfolk");
}

/// Renders the error as a miette report.
///
/// Printed to stderr regardless of `--log-level`.
fn render(err: &KinfolkError) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode());
    let mut report = String::new();
    handler
        .render_report(&mut report, &to_reportable(err))
        .expect("Writing to String buffer is infallible");
    report
}
