//! `default_version_for` binary.
//!
//! Prints the default version a buildpack installs for a dependency, as
//! declared in the buildpack's `manifest.yml`. Logging goes to stderr via
//! `tracing` so that stdout carries nothing but the resolved version.

mod cli;
mod command;

use std::process::ExitCode;

use compext_resolver::default_version::{DefaultVersionError, MISCONFIGURED_DEFAULTS_MESSAGE};

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match command::exec(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            if let Some(err) = report.downcast_ref::<DefaultVersionError>() {
                if err.is_unknown_dependency() {
                    tracing::debug!("{err} ({} has no dependencies entries)", err.name());
                } else {
                    tracing::debug!("{err}");
                }
                eprintln!("{MISCONFIGURED_DEFAULTS_MESSAGE}");
            } else {
                eprintln!("{report:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
