//! YAML format implementation.

use serde::de::DeserializeOwned;

use super::{Format, FormatError};

/// YAML format implementation using serde_yaml.
///
/// Only single-document input is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl Format for YamlFormat {
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, FormatError> {
        serde_yaml::from_slice(bytes).map_err(|e| FormatError::Serde(Box::new(e)))
    }
}
