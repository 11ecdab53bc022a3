//! The loader facade composing source routing and format dispatch.

use serde::de::DeserializeOwned;

use crate::error::{AggregateError, ErrorPolicy, LoadError};
use crate::format::FormatDispatcher;
use crate::io::{CloseableRead, StreamHandle};
use crate::source::SourceRegistry;

/// Resolves identifiers to streams and decodes them into typed values.
///
/// A `Loader` is immutable once built, so one instance can be shared by
/// reference across threads as long as its providers allow it.
#[derive(Debug, Clone)]
pub struct Loader {
    sources: SourceRegistry,
    formats: FormatDispatcher,
}

impl Loader {
    /// Create a loader from an explicit registry and dispatcher.
    pub fn new(sources: SourceRegistry, formats: FormatDispatcher) -> Self {
        Self { sources, formats }
    }

    /// Get the source registry.
    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    /// Get the format dispatcher.
    pub fn formats(&self) -> &FormatDispatcher {
        &self.formats
    }

    /// Open a raw stream for the identifier.
    ///
    /// The caller owns the returned handle and is responsible for releasing it.
    pub fn resolve(&self, identifier: &str) -> Result<StreamHandle, LoadError> {
        self.sources.resolve(identifier)
    }

    /// Open a stream for the identifier as an always-closeable reader.
    pub fn resolve_closeable(
        &self,
        identifier: &str,
    ) -> Result<Box<dyn CloseableRead>, LoadError> {
        self.resolve(identifier).map(StreamHandle::into_closeable)
    }

    /// Load the identifier and decode it with the format picked by its suffix.
    ///
    /// Any stream that was opened is released exactly once before returning,
    /// whether or not decoding succeeded. A release failure after a decode
    /// failure is attached to the decode error rather than replacing it.
    pub fn load<T>(&self, identifier: &str) -> Result<T, LoadError>
    where
        T: DeserializeOwned,
    {
        let mut handle = self.resolve(identifier)?;
        let decoded = self.formats.decode::<T>(identifier, &mut handle);
        let released = handle.release();

        match (decoded, released) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(source)) => Err(LoadError::Release {
                identifier: identifier.to_string(),
                source,
            }),
            (Err(source), release) => {
                let release = release.err();
                if let Some(err) = &release {
                    tracing::warn!(
                        identifier,
                        error = %err,
                        "failed to release stream after decode failure"
                    );
                }
                Err(LoadError::Decode {
                    identifier: identifier.to_string(),
                    source,
                    release,
                })
            }
        }
    }

    /// Load every identifier in order.
    ///
    /// With `ErrorPolicy::FastFail`, stops at the first error.
    /// With `ErrorPolicy::Accumulate`, collects all errors.
    pub fn load_all<T, I, S>(
        &self,
        identifiers: I,
        policy: ErrorPolicy,
    ) -> Result<Vec<T>, AggregateError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();
        let mut errors = Vec::new();

        for identifier in identifiers {
            match self.load::<T>(identifier.as_ref()) {
                Ok(value) => results.push(value),
                Err(e) => {
                    errors.push(e);
                    if matches!(policy, ErrorPolicy::FastFail) {
                        return Err(AggregateError { errors });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(results)
        } else {
            Err(AggregateError { errors })
        }
    }
}
