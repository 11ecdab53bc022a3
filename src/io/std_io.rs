//! Local filesystem source.

use std::fs::File;
use std::io;

use super::{SourceProvider, SourceRequest, StreamHandle};

/// Source provider that opens the identifier as a local file path.
///
/// There is no existence check before the open; a missing file surfaces as
/// the `NotFound` error from the open itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    /// Create a new file source provider.
    pub fn new() -> Self {
        Self
    }
}

impl SourceProvider for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn open(&self, request: &SourceRequest<'_>) -> io::Result<StreamHandle> {
        let file = File::open(request.identifier())?;
        Ok(StreamHandle::closeable(file))
    }
}
