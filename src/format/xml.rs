//! XML format implementation.

use serde::de::DeserializeOwned;

use super::{Format, FormatError};

/// XML format implementation using quick-xml.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl Format for XmlFormat {
    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, FormatError> {
        let content = std::str::from_utf8(bytes).map_err(|e| FormatError::Serde(Box::new(e)))?;
        quick_xml::de::from_str(content).map_err(|e| FormatError::Serde(Box::new(e)))
    }
}
