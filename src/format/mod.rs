//! Format abstraction for decoding loaded content.
//!
//! This module provides:
//! - `FormatKind`: Enum representing the supported data formats
//! - `FormatError`: Errors that can occur while decoding
//! - `format_tag`: Derives the lookup tag from an identifier's suffix
//! - `FormatDispatcher`: Maps tags to formats, with a default for everything else
//! - `CustomFormat`: Support for user-defined formats
//!
//! Format selection is purely by suffix. Content is never sniffed, so a
//! `.yml` file holding JSON is decoded as YAML.

use std::collections::HashMap;
use std::io::Read;

#[cfg(feature = "custom")]
mod custom;
#[cfg(feature = "custom")]
pub use custom::{CustomFormat, DeserializeFn};

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::JsonFormat;

#[cfg(feature = "xml")]
mod xml;
#[cfg(feature = "xml")]
pub use xml::XmlFormat;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use yaml::YamlFormat;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Represents different data format types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// XML format
    Xml,
    /// Custom format with a unique name
    Custom(&'static str),
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Json => write!(f, "json"),
            FormatKind::Yaml => write!(f, "yaml"),
            FormatKind::Xml => write!(f, "xml"),
            FormatKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl FormatKind {
    /// Create a custom format kind with the given name.
    pub fn custom(name: &'static str) -> Self {
        FormatKind::Custom(name)
    }

    /// Parse a built-in format kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(FormatKind::Json),
            "yaml" | "yml" => Some(FormatKind::Yaml),
            "xml" => Some(FormatKind::Xml),
            _ => None,
        }
    }

    /// Get file suffixes for this format.
    /// Note: For custom formats, this returns an empty slice.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Json => &["json"],
            FormatKind::Yaml => &["yaml", "yml"],
            FormatKind::Xml => &["xml"],
            FormatKind::Custom(_) => &[],
        }
    }
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The requested format is unknown or not registered
    #[error("Unknown format: {0}")]
    UnknownFormat(FormatKind),

    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(FormatKind),

    /// I/O error while reading the stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deserialization error
    #[error("Serde error: {0}")]
    Serde(Box<dyn std::error::Error + Send + Sync>),

    /// Other format-specific error
    #[error("Format error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// A built-in decoder.
pub trait Format {
    /// Decode a fully buffered document.
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, FormatError>;
}

/// Derive the format tag of an identifier.
///
/// The tag is everything after the last `.`, lower-cased. An identifier
/// without a `.` is its own tag.
pub fn format_tag(identifier: &str) -> String {
    identifier
        .rsplit('.')
        .next()
        .unwrap_or(identifier)
        .to_ascii_lowercase()
}

/// Deserialize from bytes using the specified built-in format.
pub fn deserialize<T: DeserializeOwned>(kind: FormatKind, bytes: &[u8]) -> Result<T, FormatError> {
    match kind {
        #[cfg(feature = "json")]
        FormatKind::Json => JsonFormat.deserialize(bytes),

        #[cfg(feature = "yaml")]
        FormatKind::Yaml => YamlFormat.deserialize(bytes),

        #[cfg(feature = "xml")]
        FormatKind::Xml => XmlFormat.deserialize(bytes),

        FormatKind::Custom(_) => Err(FormatError::UnknownFormat(kind)),

        #[allow(unreachable_patterns)]
        _ => Err(FormatError::NotEnabled(kind)),
    }
}

/// Dispatches decoding by the identifier's suffix.
///
/// Each tag maps to exactly one format; a later registration for the same tag
/// replaces the earlier one. Tags with no mapping, including identifiers
/// without a suffix, use the default format, so selection never fails.
#[derive(Debug, Clone)]
pub struct FormatDispatcher {
    tags: HashMap<String, FormatKind>,
    #[cfg(feature = "custom")]
    custom_formats: Vec<CustomFormat>,
    default: FormatKind,
}

impl Default for FormatDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDispatcher {
    /// Create a dispatcher with no tags and JSON as the default format.
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            #[cfg(feature = "custom")]
            custom_formats: Vec::new(),
            default: FormatKind::Json,
        }
    }

    /// Register a built-in format under all of its suffixes.
    pub fn register(&mut self, kind: FormatKind) {
        for ext in kind.extensions() {
            self.tags.insert((*ext).to_string(), kind);
        }
    }

    /// Register a built-in format (builder pattern).
    pub fn with_format(mut self, kind: FormatKind) -> Self {
        self.register(kind);
        self
    }

    /// Map an extra tag onto an already known format.
    pub fn register_alias(&mut self, tag: &str, kind: FormatKind) {
        self.tags.insert(tag.to_ascii_lowercase(), kind);
    }

    /// Map an extra tag (builder pattern).
    pub fn with_alias(mut self, tag: &str, kind: FormatKind) -> Self {
        self.register_alias(tag, kind);
        self
    }

    /// Register a custom format handler under its suffixes.
    ///
    /// A custom format with the same name replaces the earlier one.
    #[cfg(feature = "custom")]
    pub fn register_custom(&mut self, format: CustomFormat) {
        let kind = FormatKind::Custom(format.name);
        for ext in format.extensions {
            self.tags.insert(ext.to_ascii_lowercase(), kind);
        }
        self.custom_formats.retain(|f| f.name != format.name);
        self.custom_formats.push(format);
    }

    /// Register a custom format handler (builder pattern).
    #[cfg(feature = "custom")]
    pub fn with_custom_format(mut self, format: CustomFormat) -> Self {
        self.register_custom(format);
        self
    }

    /// Get the custom format handler by name.
    #[cfg(feature = "custom")]
    pub fn get_custom(&self, name: &str) -> Option<&CustomFormat> {
        self.custom_formats.iter().find(|f| f.name == name)
    }

    pub fn set_default(&mut self, kind: FormatKind) {
        self.default = kind;
    }

    /// Set the format used for unmapped tags (builder pattern).
    pub fn with_default(mut self, kind: FormatKind) -> Self {
        self.default = kind;
        self
    }

    pub fn default_kind(&self) -> FormatKind {
        self.default
    }

    /// Get the format mapped to a tag, if any.
    pub fn kind_for_tag(&self, tag: &str) -> Option<FormatKind> {
        self.tags.get(&tag.to_ascii_lowercase()).copied()
    }

    /// Select the format for an identifier. Never fails.
    pub fn kind_for(&self, identifier: &str) -> FormatKind {
        let tag = format_tag(identifier);
        match self.tags.get(&tag) {
            Some(kind) => {
                tracing::debug!(
                    identifier,
                    tag = %tag,
                    format = %kind,
                    "format selected by suffix"
                );
                *kind
            }
            None => {
                tracing::debug!(
                    identifier,
                    tag = %tag,
                    format = %self.default,
                    "no format for suffix, using default"
                );
                self.default
            }
        }
    }

    /// Read the whole stream and decode it with the format selected for the identifier.
    ///
    /// The stream is always read to the end before decoding starts.
    pub fn decode<T: DeserializeOwned>(
        &self,
        identifier: &str,
        reader: &mut dyn Read,
    ) -> Result<T, FormatError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.decode_bytes(identifier, &bytes)
    }

    /// Decode already buffered bytes with the format selected for the identifier.
    pub fn decode_bytes<T: DeserializeOwned>(
        &self,
        identifier: &str,
        bytes: &[u8],
    ) -> Result<T, FormatError> {
        self.decode_as(self.kind_for(identifier), bytes)
    }

    /// Decode bytes with an explicit format.
    pub fn decode_as<T: DeserializeOwned>(
        &self,
        kind: FormatKind,
        bytes: &[u8],
    ) -> Result<T, FormatError> {
        #[cfg(feature = "custom")]
        if let FormatKind::Custom(name) = kind {
            let custom = self
                .get_custom(name)
                .ok_or(FormatError::UnknownFormat(kind))?;
            return custom.deserialize(bytes);
        }

        deserialize(kind, bytes)
    }
}

/// Create a dispatcher with all enabled built-in formats and JSON as default.
pub fn default_dispatcher() -> FormatDispatcher {
    let mut dispatcher = FormatDispatcher::new();

    #[cfg(feature = "json")]
    dispatcher.register(FormatKind::Json);

    #[cfg(feature = "yaml")]
    dispatcher.register(FormatKind::Yaml);

    #[cfg(feature = "xml")]
    dispatcher.register(FormatKind::Xml);

    dispatcher
}
