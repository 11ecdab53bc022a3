//! Loader configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Configuration for an entire loader.
///
/// ```yaml
/// sources:
///   - pattern: '^s3://(?P<bucket>[^/]+)/(?P<key>.*)$'
///     kind: s3
/// fallback: file
/// default_format: json
/// aliases:
///   conf: yaml
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoaderConfig {
    /// Routes, in precedence order
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    /// Fallback provider: "file" or "none". Absent means "file".
    #[serde(default)]
    pub fallback: Option<String>,
    /// Format used for unrecognized suffixes
    #[serde(default)]
    pub default_format: Option<String>,
    /// Extra suffix-to-format mappings
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Configuration for a single route.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Regular expression matched against the raw identifier
    pub pattern: String,
    /// Kind of source: "file" or "s3"
    pub kind: String,
}

impl SourceConfig {
    pub fn new(pattern: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            kind: kind.into(),
        }
    }
}

impl LoaderConfig {
    /// Create a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route after the existing ones.
    pub fn add_source(mut self, source: SourceConfig) -> Self {
        self.sources.push(source);
        self
    }

    /// Set the fallback provider.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Set the default format.
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = Some(format.into());
        self
    }

    /// Map an extra suffix to a format.
    pub fn with_alias(mut self, tag: impl Into<String>, format: impl Into<String>) -> Self {
        self.aliases.insert(tag.into(), format.into());
        self
    }
}

/// Built-in source providers a configuration can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Local filesystem
    File,
    /// Object storage addressed by `bucket` and `key` captures
    S3,
}

impl SourceKind {
    /// Parse a source kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" | "local" => Some(SourceKind::File),
            "s3" => Some(SourceKind::S3),
            _ => None,
        }
    }
}

/// Fallback setting for identifiers no route matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackKind {
    #[default]
    /// Open unmatched identifiers as local files
    File,
    /// Fail unmatched identifiers with `NoProviderMatched`
    None,
}

impl FallbackKind {
    /// Parse a fallback setting from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" | "local" => Some(FallbackKind::File),
            "none" => Some(FallbackKind::None),
            _ => None,
        }
    }
}
