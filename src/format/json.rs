//! JSON format implementation.

use serde::de::DeserializeOwned;

use super::{Format, FormatError};

/// JSON format implementation using serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, FormatError> {
        serde_json::from_slice(bytes).map_err(|e| FormatError::Serde(Box::new(e)))
    }
}
