use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use compext_util::errors::{CompextError, CompextResult};

use crate::MANIFEST_FILE_NAME;

/// The parsed representation of a buildpack `manifest.yml`.
///
/// Only the keys used for default version selection are modelled. Every
/// other top-level key (`language`, `url_to_dependency_map`, ...) and any
/// extra record field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub default_versions: Vec<DefaultVersion>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<Dependency>,
}

/// A declared default from the `default_versions` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultVersion {
    pub name: String,
    pub version: String,
}

/// An installable dependency version from the `dependencies` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

/// `default_versions:` with nothing after it is YAML null, not a sequence.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Manifest {
    /// Load and parse a `manifest.yml` file from the given path.
    pub fn from_path(path: &Path) -> CompextResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CompextError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        let manifest = Self::from_str(&content)?;
        tracing::debug!(
            "Loaded {} ({} defaults, {} dependencies)",
            path.display(),
            manifest.default_versions.len(),
            manifest.dependencies.len()
        );
        Ok(manifest)
    }

    /// Parse a `manifest.yml` from a string.
    pub fn from_str(content: &str) -> CompextResult<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            CompextError::Manifest {
                message: format!("Failed to parse {MANIFEST_FILE_NAME}: {e}"),
            }
            .into()
        })
    }

    /// Declared defaults whose name is exactly `name`, in manifest order.
    pub fn defaults_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DefaultVersion> {
        self.default_versions.iter().filter(move |d| d.name == name)
    }

    /// Versions listed under `dependencies` for exactly `name`, in manifest order.
    ///
    /// Duplicate entries are yielded as many times as they appear.
    pub fn versions_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.dependencies
            .iter()
            .filter(move |d| d.name == name)
            .map(|d| d.version.as_str())
    }

    /// Whether `dependencies` lists `name` at exactly `version`.
    pub fn has_dependency(&self, name: &str, version: &str) -> bool {
        self.dependencies
            .iter()
            .any(|d| d.name == name && d.version == version)
    }
}
