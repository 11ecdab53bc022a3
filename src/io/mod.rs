//! I/O abstractions for source providers and the streams they produce.
//!
//! This module provides:
//! - `SourceProvider`: Trait for content sources
//! - `StreamHandle`: A byte stream tagged as closeable or non-closeable
//! - `FileSource`: Local filesystem provider (the default fallback)
//! - `ObjectStoreSource`: Object storage provider behind an `ObjectFetcher`
//! - `InMemorySource`: In-memory provider for embedding and testing

mod handle;
mod input;
mod memory;
mod object;
mod std_io;

pub use handle::{CloseableRead, NopCloser, StreamHandle};
pub use input::{SourceProvider, SourceRequest};
pub use memory::InMemorySource;
#[cfg(feature = "s3")]
pub use object::S3Fetcher;
#[cfg(all(test, feature = "s3"))]
pub(crate) use object::{object_path, run_blocking};
pub use object::{DisabledFetcher, ObjectFetcher, ObjectStoreSource, S3_PATTERN};
pub use std_io::FileSource;
