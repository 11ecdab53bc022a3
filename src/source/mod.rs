//! Source routing.
//!
//! This module provides:
//! - `Pattern`: A regex matcher that also extracts named sub-parts
//! - `Route`: A (pattern, provider) binding
//! - `SourceRegistry`: Ordered routes plus an optional fallback provider

use std::sync::Arc;

use regex::Regex;

use crate::error::{ConfigError, LoadError};
use crate::io::{SourceProvider, SourceRequest, StreamHandle};

/// Matcher for identifiers.
///
/// Named capture groups become sub-parts of the routed `SourceRequest`.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from a regular expression.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, identifier: &str) -> bool {
        self.regex.is_match(identifier)
    }

    /// Match the identifier and build a request carrying the named captures.
    pub fn request<'a>(&self, identifier: &'a str) -> Option<SourceRequest<'a>> {
        let caps = self.regex.captures(identifier)?;
        let mut request = SourceRequest::new(identifier);
        for name in self.regex.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                request = request.with_part(name, m.as_str());
            }
        }
        Some(request)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

/// A single pattern-to-provider binding.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: Pattern,
    pub provider: Arc<dyn SourceProvider>,
}

/// Registry routing identifiers to source providers.
///
/// Routes are tried in registration order and the first match wins; patterns
/// are expected to overlap, so order is part of the contract. Identifiers no
/// route matches go to the fallback, if one is set.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    routes: Vec<Route>,
    fallback: Option<Arc<dyn SourceProvider>>,
}

impl SourceRegistry {
    /// Create a new empty registry with no fallback.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
        }
    }

    /// Append a route after all existing ones.
    pub fn add_route(&mut self, pattern: Pattern, provider: Arc<dyn SourceProvider>) {
        self.routes.push(Route { pattern, provider });
    }

    /// Append a route (builder pattern).
    pub fn with_route(mut self, pattern: Pattern, provider: Arc<dyn SourceProvider>) -> Self {
        self.add_route(pattern, provider);
        self
    }

    pub fn set_fallback(&mut self, provider: Option<Arc<dyn SourceProvider>>) {
        self.fallback = provider;
    }

    /// Set the fallback provider (builder pattern).
    pub fn with_fallback(mut self, provider: Arc<dyn SourceProvider>) -> Self {
        self.fallback = Some(provider);
        self
    }

    /// Get all routes in precedence order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn fallback(&self) -> Option<&Arc<dyn SourceProvider>> {
        self.fallback.as_ref()
    }

    /// Select the provider for an identifier along with its routed request.
    fn select<'a>(
        &self,
        identifier: &'a str,
    ) -> Option<(&Arc<dyn SourceProvider>, SourceRequest<'a>)> {
        for (index, route) in self.routes.iter().enumerate() {
            if let Some(request) = route.pattern.request(identifier) {
                tracing::debug!(
                    identifier,
                    route = index,
                    pattern = route.pattern.as_str(),
                    provider = route.provider.name(),
                    "source route matched"
                );
                return Some((&route.provider, request));
            }
        }

        let fallback = self.fallback.as_ref()?;
        tracing::debug!(
            identifier,
            provider = fallback.name(),
            "no source route matched, using fallback"
        );
        Some((fallback, SourceRequest::new(identifier)))
    }

    /// Get the provider an identifier would be routed to, without opening it.
    pub fn provider_for(&self, identifier: &str) -> Option<&Arc<dyn SourceProvider>> {
        self.select(identifier).map(|(provider, _)| provider)
    }

    /// Open a stream for the identifier from the selected provider.
    pub fn resolve(&self, identifier: &str) -> Result<StreamHandle, LoadError> {
        let (provider, request) = self
            .select(identifier)
            .ok_or_else(|| LoadError::NoProviderMatched {
                identifier: identifier.to_string(),
            })?;

        provider.open(&request).map_err(|source| LoadError::Source {
            identifier: identifier.to_string(),
            source,
        })
    }
}
