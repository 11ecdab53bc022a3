//! In-memory source for embedding and testing.

use std::collections::BTreeMap;
use std::io::{self, Cursor};
use std::sync::Arc;

use super::{SourceProvider, SourceRequest, StreamHandle};

/// In-memory source keyed by identifier.
///
/// Streams are non-closeable cursors over a shared copy of the stored bytes.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: BTreeMap<String, Arc<Vec<u8>>>,
}

impl InMemorySource {
    /// Create a new empty in-memory source.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Store bytes under an identifier (builder pattern).
    pub fn with_entry(mut self, identifier: impl Into<String>, data: Vec<u8>) -> Self {
        self.insert(identifier, data);
        self
    }

    /// Store a string under an identifier (builder pattern).
    pub fn with_string(self, identifier: impl Into<String>, data: impl Into<String>) -> Self {
        self.with_entry(identifier, data.into().into_bytes())
    }

    /// Store bytes under an identifier, replacing any previous entry.
    pub fn insert(&mut self, identifier: impl Into<String>, data: Vec<u8>) {
        self.entries.insert(identifier.into(), Arc::new(data));
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SourceProvider for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn open(&self, request: &SourceRequest<'_>) -> io::Result<StreamHandle> {
        let data = self.entries.get(request.identifier()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory entry for '{}'", request.identifier()),
            )
        })?;
        Ok(StreamHandle::non_closeable(Cursor::new(data.as_ref().clone())))
    }
}
