//! # contentload
//!
//! Load structured content from a path that might be local or might be a
//! cloud object, without the call site caring which.
//!
//! ## Overview
//!
//! contentload provides:
//! - **Source routing**: Identifiers are matched against ordered patterns to pick a
//!   `SourceProvider` (local files, object storage, memory, or your own), with a fallback
//! - **Format dispatch**: The identifier's suffix picks a decoder (JSON, YAML, XML, or
//!   custom), with a default for unknown or missing suffixes
//! - **Explicit stream lifetimes**: Every stream is tagged closeable or non-closeable and
//!   `Loader::load` releases it exactly once, even when decoding fails
//! - **Configuration**: Routes and format settings can be read from YAML/JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use contentload::Loader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = Loader::with_defaults()?;
//!
//!     // Local file, decoded as YAML because of its suffix
//!     let settings: HashMap<String, i64> = loader.load("settings.yaml")?;
//!
//!     // Object storage, decoded as JSON
//!     let remote: serde_json::Value = loader.load("s3://my-bucket/config/app.json")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Routing and decoding rules
//!
//! - Routes are tried in registration order; the first matching pattern wins even if a
//!   later one would also match. Unmatched identifiers go to the fallback provider, and
//!   without a fallback they fail with `LoadError::NoProviderMatched`.
//! - The format tag is the text after the last `.`, lower-cased, so `a.JSON` and `a.json`
//!   decode the same way. Tags with no registered format use the default (JSON).
//! - Formats are chosen by suffix only. Content is never inspected to guess the format.
//!
//! ## Features
//!
//! - `json` - JSON format support (enabled by default)
//! - `yaml` - YAML format support (enabled by default)
//! - `xml` - XML format support (enabled by default)
//! - `custom` - User-defined formats (enabled by default)
//! - `s3` - Fetch `s3://bucket/key` identifiers with `object_store`
//! - `miette` - Pretty error reporting with miette

use std::sync::Arc;

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod loader;
pub mod source;

// Re-exports for convenience
pub use builder::LoaderBuilder;
pub use config::{LoaderConfig, SourceConfig};
pub use error::{AggregateError, ConfigError, ErrorPolicy, LoadError, Stage};
#[cfg(feature = "custom")]
pub use format::CustomFormat;
pub use format::{FormatDispatcher, FormatError, FormatKind, default_dispatcher, format_tag};
#[cfg(feature = "s3")]
pub use io::S3Fetcher;
pub use io::{
    CloseableRead, FileSource, InMemorySource, ObjectFetcher, ObjectStoreSource, SourceProvider,
    SourceRequest, StreamHandle,
};
pub use loader::Loader;
pub use source::{Pattern, SourceRegistry};

/// Build a Loader from a LoaderConfig on top of the built-in formats.
pub fn loader_from_config(config: LoaderConfig) -> Result<Loader, ConfigError> {
    LoaderBuilder::from_config(config)?.build()
}

/// Build a Loader from a LoaderConfig, allowing the caller to further
/// customize the builder before the configuration is applied. This is the
/// hook point for registering custom formats that the configuration refers
/// to by name.
pub fn loader_from_config_with<F>(
    config: LoaderConfig,
    customize: F,
) -> Result<Loader, ConfigError>
where
    F: FnOnce(LoaderBuilder) -> LoaderBuilder,
{
    let builder = LoaderBuilder::new().with_fallback(Arc::new(FileSource::new()));
    customize(builder).apply_config(config)?.build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::LoadDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
