//! Configuration types for assembling a `Loader` from data.
//!
//! This module provides:
//! - `LoaderConfig`: Routes, fallback and format settings, deserializable
//!   from YAML or JSON
//! - `SourceConfig`: A single pattern-to-source route
//! - `SourceKind` / `FallbackKind`: The built-in providers a config can name

mod routes;

pub use routes::{FallbackKind, LoaderConfig, SourceConfig, SourceKind};
