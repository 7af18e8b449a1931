//! Resolution of the declared default version for a single dependency.

use miette::Diagnostic;
use thiserror::Error;

use compext_core::manifest::Manifest;

/// Operator-facing text for every default version misconfiguration.
pub const MISCONFIGURED_DEFAULTS_MESSAGE: &str = "The buildpack manifest is misconfigured for defaults. \
     Contact your Cloud Foundry operator/admin. For more information, \
     see https://docs.cloudfoundry.org/buildpacks/specifying-default-versions";

/// Why a manifest cannot supply a default version for a dependency.
///
/// All variants are manifest authoring mistakes and are reported to operators
/// with [`MISCONFIGURED_DEFAULTS_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DefaultVersionError {
    /// No `default_versions` entry names the dependency.
    #[error("No default version configured for {name}")]
    #[diagnostic(
        code(compext::defaults::missing),
        help("Contact your Cloud Foundry operator/admin."),
        url("https://docs.cloudfoundry.org/buildpacks/specifying-default-versions")
    )]
    NoDefaultConfigured { name: String },

    /// More than one `default_versions` entry names the dependency.
    #[error("Multiple default versions configured for {name}: {}", .versions.join(", "))]
    #[diagnostic(
        code(compext::defaults::ambiguous),
        help("Contact your Cloud Foundry operator/admin."),
        url("https://docs.cloudfoundry.org/buildpacks/specifying-default-versions")
    )]
    AmbiguousDefault { name: String, versions: Vec<String> },

    /// The declared default is not listed under `dependencies`.
    ///
    /// `known_versions` holds what the manifest does list for the dependency
    /// and is empty when the dependency is absent altogether.
    #[error("Default version {version} of {name} is not among its dependencies")]
    #[diagnostic(
        code(compext::defaults::not_installable),
        help("Contact your Cloud Foundry operator/admin."),
        url("https://docs.cloudfoundry.org/buildpacks/specifying-default-versions")
    )]
    DefaultNotInstallable {
        name: String,
        version: String,
        known_versions: Vec<String>,
    },
}

impl DefaultVersionError {
    /// Name of the dependency whose default could not be resolved.
    pub fn name(&self) -> &str {
        match self {
            Self::NoDefaultConfigured { name }
            | Self::AmbiguousDefault { name, .. }
            | Self::DefaultNotInstallable { name, .. } => name,
        }
    }

    /// True when the default points at a dependency with no versions at all.
    pub fn is_unknown_dependency(&self) -> bool {
        matches!(
            self,
            Self::DefaultNotInstallable { known_versions, .. } if known_versions.is_empty()
        )
    }
}

/// Resolve the default version of `dependency` declared in `manifest`.
///
/// Exactly one `default_versions` entry must name the dependency, and its
/// version must appear under `dependencies` with the same name. Names and
/// versions are compared exactly.
pub fn resolve(manifest: &Manifest, dependency: &str) -> Result<String, DefaultVersionError> {
    let declared: Vec<&str> = manifest
        .defaults_named(dependency)
        .map(|d| d.version.as_str())
        .collect();

    let version = match declared.as_slice() {
        [] => {
            return Err(DefaultVersionError::NoDefaultConfigured {
                name: dependency.to_string(),
            })
        }
        [version] => *version,
        _ => {
            return Err(DefaultVersionError::AmbiguousDefault {
                name: dependency.to_string(),
                versions: declared.iter().map(|v| v.to_string()).collect(),
            })
        }
    };

    if !manifest.has_dependency(dependency, version) {
        return Err(DefaultVersionError::DefaultNotInstallable {
            name: dependency.to_string(),
            version: version.to_string(),
            known_versions: manifest.versions_of(dependency).map(String::from).collect(),
        });
    }

    tracing::debug!("Default version for {dependency} is {version}");
    Ok(version.to_string())
}
