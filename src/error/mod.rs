//! Error types and policies for contentload operations.
//!
//! This module provides:
//! - `LoadError`: A single failed resolve or load, tagged with its identifier
//! - `Stage`: Indicates where in resolve/decode/release an error occurred
//! - `ErrorPolicy`: Controls whether batch loads fail fast or accumulate errors
//! - `AggregateError`: A collection of errors when using `Accumulate` policy
//! - `ConfigError`: Problems found while assembling a `Loader`

use std::fmt;
use std::io;

use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error encountered
    #[default]
    FastFail,
    /// Collect all errors and return them together
    Accumulate,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fast_fail" | "fastfail" => Some(ErrorPolicy::FastFail),
            "accumulate" => Some(ErrorPolicy::Accumulate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No source provider could be selected
    Route,
    /// The selected provider failed to produce a stream
    Open,
    Decode,
    /// Releasing a closeable stream failed
    Release,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Route => write!(f, "Route"),
            Stage::Open => write!(f, "Open"),
            Stage::Decode => write!(f, "Decode"),
            Stage::Release => write!(f, "Release"),
        }
    }
}

/// A failed `resolve` or `load` call.
///
/// Collaborator errors are passed through untouched as the `source`; the only
/// decoration is the identifier that was being loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No pattern matched and no fallback provider is configured.
    #[error("no source provider matched '{identifier}'")]
    NoProviderMatched { identifier: String },

    /// The selected provider could not produce a stream.
    #[error("failed to open '{identifier}': {source}")]
    Source {
        identifier: String,
        #[source]
        source: io::Error,
    },

    /// The selected decoder could not parse the stream.
    ///
    /// If releasing the stream also failed, that error is kept in `release`.
    #[error("failed to decode '{identifier}': {source}")]
    Decode {
        identifier: String,
        #[source]
        source: FormatError,
        release: Option<io::Error>,
    },

    /// The stream was decoded but could not be released.
    #[error("failed to release '{identifier}': {source}")]
    Release {
        identifier: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// The stage at which this error was raised.
    pub fn stage(&self) -> Stage {
        match self {
            LoadError::NoProviderMatched { .. } => Stage::Route,
            LoadError::Source { .. } => Stage::Open,
            LoadError::Decode { .. } => Stage::Decode,
            LoadError::Release { .. } => Stage::Release,
        }
    }

    /// The identifier the failing call was made with.
    pub fn identifier(&self) -> &str {
        match self {
            LoadError::NoProviderMatched { identifier }
            | LoadError::Source { identifier, .. }
            | LoadError::Decode { identifier, .. }
            | LoadError::Release { identifier, .. } => identifier,
        }
    }

    /// A release failure that happened after the primary failure, if any.
    pub fn secondary_release_error(&self) -> Option<&io::Error> {
        match self {
            LoadError::Decode { release, .. } => release.as_ref(),
            _ => None,
        }
    }
}

/// An aggregate of multiple load errors.
///
/// This is returned by `Loader::load_all` and holds one entry per failed identifier.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<LoadError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "load encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: [{}] {}", i + 1, e.stage(), e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: LoadError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<LoadError> for AggregateError {
    fn from(error: LoadError) -> Self {
        Self::single(error)
    }
}

/// Errors raised while building a `Loader` from code or configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid source pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown source kind '{0}' (expected 'file' or 's3')")]
    UnknownSourceKind(String),

    #[error("unknown fallback '{0}' (expected 'file' or 'none')")]
    UnknownFallback(String),

    #[error("unknown format '{0}'")]
    UnknownFormat(String),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
