//! Stream handles returned by source providers.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};

/// A readable stream that owns a resource which must be released explicitly.
pub trait CloseableRead: Read + Send {
    /// Release the underlying resource.
    fn close(self: Box<Self>) -> io::Result<()>;
}

impl CloseableRead for File {
    fn close(self: Box<Self>) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

/// A byte stream produced by a `SourceProvider`.
///
/// Whether the stream holds a releasable resource is part of its type rather
/// than something discovered at runtime, so `release` is an exhaustive match.
pub enum StreamHandle {
    /// The stream owns a resource (open file, connection) that must be closed.
    Closeable(Box<dyn CloseableRead>),
    /// The stream owns nothing that needs closing (e.g. an in-memory buffer).
    NonCloseable(Box<dyn Read + Send>),
}

impl StreamHandle {
    /// Wrap a closeable reader.
    pub fn closeable(reader: impl CloseableRead + 'static) -> Self {
        StreamHandle::Closeable(Box::new(reader))
    }

    /// Wrap a reader that needs no release step.
    pub fn non_closeable(reader: impl Read + Send + 'static) -> Self {
        StreamHandle::NonCloseable(Box::new(reader))
    }

    pub fn is_closeable(&self) -> bool {
        matches!(self, StreamHandle::Closeable(_))
    }

    /// Release the stream. Non-closeable streams are simply dropped.
    pub fn release(self) -> io::Result<()> {
        match self {
            StreamHandle::Closeable(reader) => reader.close(),
            StreamHandle::NonCloseable(reader) => {
                drop(reader);
                Ok(())
            }
        }
    }

    /// Convert into a reader that can always be closed.
    ///
    /// Non-closeable streams are wrapped in a `NopCloser`.
    pub fn into_closeable(self) -> Box<dyn CloseableRead> {
        match self {
            StreamHandle::Closeable(reader) => reader,
            StreamHandle::NonCloseable(reader) => Box::new(NopCloser::new(reader)),
        }
    }
}

impl Read for StreamHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            StreamHandle::Closeable(reader) => reader.read(buf),
            StreamHandle::NonCloseable(reader) => reader.read(buf),
        }
    }
}

impl fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamHandle::Closeable(_) => f.write_str("StreamHandle::Closeable(..)"),
            StreamHandle::NonCloseable(_) => f.write_str("StreamHandle::NonCloseable(..)"),
        }
    }
}

/// Adapts a plain reader to `CloseableRead` with a no-op `close`.
pub struct NopCloser<R> {
    inner: R,
}

impl<R: Read + Send> NopCloser<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Send> Read for NopCloser<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read + Send> CloseableRead for NopCloser<R> {
    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}

impl<R> fmt::Debug for NopCloser<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NopCloser").finish()
    }
}
