//! Shared utilities for compile-extensions.
//!
//! Holds the error type used while loading a buildpack manifest and by the
//! CLI plumbing around it.

pub mod errors;
