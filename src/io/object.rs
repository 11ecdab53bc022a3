//! Object storage source.
//!
//! Routing hands this provider a request whose `bucket` and `key` parts were
//! extracted by the matching pattern. The actual network retrieval sits
//! behind `ObjectFetcher`, so credentials, retries and transport details never
//! reach the registry.

use std::fmt::Debug;
use std::io;

use super::{SourceProvider, SourceRequest, StreamHandle};

/// Pattern recognizing `s3://bucket/key` identifiers.
pub const S3_PATTERN: &str = r"^s3://(?P<bucket>[^/]+)/(?P<key>.*)$";

/// Retrieves a single object from a remote store.
pub trait ObjectFetcher: Send + Sync + Debug {
    fn fetch(&self, bucket: &str, key: &str) -> io::Result<StreamHandle>;
}

/// Source provider for object storage identifiers.
#[derive(Debug, Clone, Default)]
pub struct ObjectStoreSource<F> {
    fetcher: F,
}

impl<F: ObjectFetcher> ObjectStoreSource<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: ObjectFetcher> SourceProvider for ObjectStoreSource<F> {
    fn name(&self) -> &str {
        "s3"
    }

    fn open(&self, request: &SourceRequest<'_>) -> io::Result<StreamHandle> {
        let (Some(bucket), Some(key)) = (request.part("bucket"), request.part("key")) else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "'{}' is not a bucket/key object identifier",
                    request.identifier()
                ),
            ));
        };
        self.fetcher.fetch(bucket, key)
    }
}

/// Fetcher used when object storage support is compiled out.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledFetcher;

impl ObjectFetcher for DisabledFetcher {
    fn fetch(&self, bucket: &str, key: &str) -> io::Result<StreamHandle> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("cannot fetch s3://{bucket}/{key}: enable the `s3` feature"),
        ))
    }
}

#[cfg(feature = "s3")]
pub use aws::S3Fetcher;
#[cfg(all(test, feature = "s3"))]
pub(crate) use aws::{object_path, run_blocking};

#[cfg(feature = "s3")]
mod aws {
    use std::future::Future;
    use std::io::{self, Cursor};

    use object_store::ObjectStore;
    use object_store::aws::AmazonS3Builder;
    use object_store::path::Path;

    use super::{ObjectFetcher, StreamHandle};

    /// Fetches objects from AWS S3 using credentials from the environment.
    ///
    /// Credentials, region and endpoint come from the `AWS_*` environment
    /// variables, plus web identity and instance metadata providers. Shared
    /// config and credentials files (`~/.aws/config`, `~/.aws/credentials`)
    /// are not read, so `AWS_PROFILE` has no effect; export the profile's
    /// keys or use a custom `ObjectFetcher` when profiles are required.
    ///
    /// Each fetch runs on a private current-thread runtime and buffers the
    /// whole object body. Called from inside an async runtime, the fetch
    /// moves to a scoped thread and blocks the caller until it finishes.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct S3Fetcher;

    impl S3Fetcher {
        pub fn new() -> Self {
            Self
        }
    }

    impl ObjectFetcher for S3Fetcher {
        fn fetch(&self, bucket: &str, key: &str) -> io::Result<StreamHandle> {
            let location = object_path(key)?;
            let store = AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(to_io)?;

            let bytes = run_blocking(async { store.get(&location).await?.bytes().await })?
                .map_err(to_io)?;

            tracing::debug!(bucket, key, len = bytes.len(), "fetched object");
            Ok(StreamHandle::non_closeable(Cursor::new(bytes.to_vec())))
        }
    }

    /// Convert an object key into a store path without rewriting it.
    ///
    /// Keys the store cannot address verbatim (empty segments, a leading or
    /// trailing `/`, `.` or `..` segments) are rejected.
    pub(crate) fn object_path(key: &str) -> io::Result<Path> {
        let invalid = |reason: String| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("object key '{key}' cannot be fetched unchanged: {reason}"),
            )
        };
        let path = Path::parse(key).map_err(|e| invalid(e.to_string()))?;
        if path.as_ref() != key {
            return Err(invalid(format!("it would be read as '{path}'")));
        }
        Ok(path)
    }

    /// Drive a future to completion on a private current-thread runtime.
    ///
    /// A runtime cannot be started or dropped on a thread that is already
    /// driving one, so inside an async context the work runs on a scoped
    /// thread instead.
    pub(crate) fn run_blocking<F>(future: F) -> io::Result<F::Output>
    where
        F: Future + Send,
        F::Output: Send,
    {
        let run = move || -> io::Result<F::Output> {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            Ok(runtime.block_on(future))
        };

        if tokio::runtime::Handle::try_current().is_err() {
            return run();
        }

        tracing::debug!("inside an async runtime, fetching on a scoped thread");
        std::thread::scope(|scope| scope.spawn(run).join())
            .map_err(|_| io::Error::other("object fetch thread panicked"))?
    }

    fn to_io(err: object_store::Error) -> io::Error {
        match err {
            object_store::Error::NotFound { .. } => io::Error::new(io::ErrorKind::NotFound, err),
            other => io::Error::other(other),
        }
    }
}
