//! Default version resolution for buildpack manifests.
//!
//! Picks the version a buildpack installs for a dependency when the
//! application does not ask for one, and rejects manifests whose defaults are
//! missing, ambiguous, or point at a version the buildpack does not ship.

pub mod default_version;
