use miette::Diagnostic;
use thiserror::Error;

/// Failures that stop `default_version_for` before or after resolution.
///
/// An inconsistent `default_versions` section is not one of these; the
/// resolver reports it with its own error so operators get a different
/// message for a broken file than for a misconfigured one.
#[derive(Debug, Error, Diagnostic)]
pub enum CompextError {
    /// Writing the resolved version failed (e.g. a closed stdout pipe).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `manifest.yml` is missing, unreadable, or not a valid manifest.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Pass the path of the buildpack's manifest.yml and check it is valid YAML"))]
    Manifest { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type CompextResult<T> = miette::Result<T>;
