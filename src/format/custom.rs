//! Custom format support for user-defined formats.
//!
//! This module allows developers to register their own decoders without
//! modifying the core library or any call site.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::FormatError;

/// Type alias for custom deserialize function.
///
/// Takes raw bytes and returns a `serde_json::Value` which can then be
/// converted to the target type.
pub type DeserializeFn = Arc<dyn Fn(&[u8]) -> Result<serde_json::Value, FormatError> + Send + Sync>;

/// A custom format handler that can be registered with the `FormatDispatcher`.
///
/// # Example
///
/// ```rust,ignore
/// use contentload::format::{CustomFormat, FormatError};
///
/// let toml_format = CustomFormat::new("toml", &["toml"], |bytes| {
///     let s = String::from_utf8_lossy(bytes);
///     toml::from_str(&s).map_err(|e| FormatError::Serde(Box::new(e)))
/// });
///
/// dispatcher.register_custom(toml_format);
/// ```
#[derive(Clone)]
pub struct CustomFormat {
    /// Unique name for this format
    pub name: &'static str,
    /// File suffixes associated with this format
    pub extensions: &'static [&'static str],
    deserialize_fn: DeserializeFn,
}

impl std::fmt::Debug for CustomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomFormat")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .finish()
    }
}

impl CustomFormat {
    /// Create a new custom format with the given name, suffixes and decoder.
    pub fn new<F>(name: &'static str, extensions: &'static [&'static str], f: F) -> Self
    where
        F: Fn(&[u8]) -> Result<serde_json::Value, FormatError> + Send + Sync + 'static,
    {
        Self {
            name,
            extensions,
            deserialize_fn: Arc::new(f),
        }
    }

    /// Deserialize bytes to a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, FormatError> {
        let value = (self.deserialize_fn)(bytes)?;
        serde_json::from_value(value).map_err(|e| FormatError::Serde(Box::new(e)))
    }
}
