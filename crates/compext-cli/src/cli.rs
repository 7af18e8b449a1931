//! CLI argument definitions for `default_version_for`.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "default_version_for",
    version,
    about = "Print the default version of a buildpack dependency",
    long_about = "Reads the buildpack manifest and prints the version declared under \
                  default_versions for the given dependency. Fails if the manifest declares \
                  no default, more than one default, or a default it does not ship."
)]
pub struct Cli {
    /// Path to the buildpack manifest.yml
    pub manifest: PathBuf,

    /// Dependency name, matched exactly (e.g. go, node, ruby)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub dependency: String,

    /// Log resolution details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
