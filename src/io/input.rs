//! Source provider trait definition.

use std::fmt::Debug;
use std::io;

use super::StreamHandle;

/// A routed request handed to a `SourceProvider`.
///
/// Carries the raw identifier plus any named sub-parts the matching pattern
/// extracted (e.g. `bucket` and `key` for object storage). Requests handed to
/// a fallback provider have no parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRequest<'a> {
    identifier: &'a str,
    parts: Vec<(String, &'a str)>,
}

impl<'a> SourceRequest<'a> {
    /// Create a request with no extracted parts.
    pub fn new(identifier: &'a str) -> Self {
        Self {
            identifier,
            parts: Vec::new(),
        }
    }

    /// Attach a named sub-part (builder pattern).
    pub fn with_part(mut self, name: impl Into<String>, value: &'a str) -> Self {
        self.parts.push((name.into(), value));
        self
    }

    /// The raw identifier being resolved.
    pub fn identifier(&self) -> &'a str {
        self.identifier
    }

    /// Look up a named sub-part.
    pub fn part(&self, name: &str) -> Option<&'a str> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    /// All extracted sub-parts, in capture order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &'a str)> + '_ {
        self.parts.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

/// Trait for synchronous source providers.
///
/// Implementors turn a routed identifier into a readable stream from a
/// backing store such as the local filesystem, object storage, or memory.
/// Providers are shared by reference across threads once registered.
pub trait SourceProvider: Send + Sync + Debug {
    /// Short name for this provider, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Open a fresh stream for the request.
    ///
    /// Failures are returned as-is; the caller attaches the identifier.
    fn open(&self, request: &SourceRequest<'_>) -> io::Result<StreamHandle>;
}
