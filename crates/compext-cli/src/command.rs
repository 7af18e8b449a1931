use std::io::Write;

use miette::Result;

use compext_core::manifest::Manifest;
use compext_resolver::default_version;
use compext_util::errors::CompextError;

use crate::cli::Cli;

/// Resolve the requested default and write it to stdout without a newline.
pub fn exec(args: &Cli) -> Result<()> {
    tracing::debug!("Reading manifest {}", args.manifest.display());

    let manifest = Manifest::from_path(&args.manifest)?;
    let version = default_version::resolve(&manifest, &args.dependency)?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{version}").map_err(CompextError::Io)?;
    stdout.flush().map_err(CompextError::Io)?;
    Ok(())
}
