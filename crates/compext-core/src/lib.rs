//! Core data types for compile-extensions.
//!
//! This crate defines the buildpack manifest (`manifest.yml`) as seen by the
//! default version tooling, and the loader that reads it from disk.
//!
//! This crate is intentionally free of async code and network I/O.

/// File name of the buildpack manifest at the root of a buildpack.
pub const MANIFEST_FILE_NAME: &str = "manifest.yml";

pub mod manifest;
