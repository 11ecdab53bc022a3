//! Builder for creating Loader instances.

use std::sync::Arc;

use crate::config::{FallbackKind, LoaderConfig, SourceKind};
use crate::error::ConfigError;
#[cfg(feature = "custom")]
use crate::format::CustomFormat;
use crate::format::{FormatDispatcher, FormatKind, default_dispatcher};
use crate::io::{FileSource, ObjectStoreSource, S3_PATTERN, SourceProvider};
use crate::loader::Loader;
use crate::source::{Pattern, SourceRegistry};

/// A route whose pattern may still need compiling.
enum PendingPattern {
    Raw(String),
    Compiled(Pattern),
}

pub struct LoaderBuilder {
    routes: Vec<(PendingPattern, Arc<dyn SourceProvider>)>,
    fallback: Option<Arc<dyn SourceProvider>>,
    formats: FormatDispatcher,
}

impl Default for LoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderBuilder {
    /// A builder with no routes, no fallback and the built-in formats.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
            formats: default_dispatcher(),
        }
    }

    /// A builder preloaded with the default configuration: an `s3://bucket/key`
    /// route to object storage and a local file fallback.
    pub fn defaults() -> Self {
        Self::new()
            .add_source(S3_PATTERN, object_source())
            .with_fallback(Arc::new(FileSource::new()))
    }

    /// Start from a configuration, on top of the built-in formats.
    ///
    /// Unless the configuration says otherwise, unmatched identifiers fall
    /// back to local files.
    pub fn from_config(config: LoaderConfig) -> Result<Self, ConfigError> {
        Self::new()
            .with_fallback(Arc::new(FileSource::new()))
            .apply_config(config)
    }

    /// Append a route whose pattern is compiled at `build` time.
    pub fn add_source(
        mut self,
        pattern: impl Into<String>,
        provider: Arc<dyn SourceProvider>,
    ) -> Self {
        self.routes.push((PendingPattern::Raw(pattern.into()), provider));
        self
    }

    /// Append a route with an already compiled pattern.
    pub fn add_route(mut self, pattern: Pattern, provider: Arc<dyn SourceProvider>) -> Self {
        self.routes.push((PendingPattern::Compiled(pattern), provider));
        self
    }

    pub fn with_fallback(mut self, provider: Arc<dyn SourceProvider>) -> Self {
        self.fallback = Some(provider);
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    /// Replace the whole format dispatcher.
    pub fn with_formats(mut self, formats: FormatDispatcher) -> Self {
        self.formats = formats;
        self
    }

    pub fn with_format(mut self, kind: FormatKind) -> Self {
        self.formats.register(kind);
        self
    }

    pub fn with_alias(mut self, tag: &str, kind: FormatKind) -> Self {
        self.formats.register_alias(tag, kind);
        self
    }

    #[cfg(feature = "custom")]
    pub fn with_custom_format(mut self, format: CustomFormat) -> Self {
        self.formats.register_custom(format);
        self
    }

    pub fn with_default_format(mut self, kind: FormatKind) -> Self {
        self.formats.set_default(kind);
        self
    }

    /// Layer a configuration onto this builder.
    ///
    /// Configured routes are appended after existing ones and the fallback is
    /// only replaced when the configuration names one. Format names may refer
    /// to built-in formats or to custom formats registered beforehand.
    pub fn apply_config(mut self, config: LoaderConfig) -> Result<Self, ConfigError> {
        for source in config.sources {
            let kind = SourceKind::from_str(&source.kind)
                .ok_or_else(|| ConfigError::UnknownSourceKind(source.kind.clone()))?;
            let provider: Arc<dyn SourceProvider> = match kind {
                SourceKind::File => Arc::new(FileSource::new()),
                SourceKind::S3 => object_source(),
            };
            self = self.add_source(source.pattern, provider);
        }

        if let Some(name) = config.fallback {
            let fallback =
                FallbackKind::from_str(&name).ok_or(ConfigError::UnknownFallback(name))?;
            self.fallback = match fallback {
                FallbackKind::File => Some(Arc::new(FileSource::new())),
                FallbackKind::None => None,
            };
        }

        if let Some(name) = config.default_format {
            let kind = self.format_by_name(&name)?;
            self.formats.set_default(kind);
        }

        for (tag, name) in config.aliases {
            let kind = self.format_by_name(&name)?;
            self.formats.register_alias(&tag, kind);
        }

        Ok(self)
    }

    fn format_by_name(&self, name: &str) -> Result<FormatKind, ConfigError> {
        if let Some(kind) = FormatKind::from_str(name) {
            return Ok(kind);
        }

        #[cfg(feature = "custom")]
        if let Some(custom) = self.formats.get_custom(name) {
            return Ok(FormatKind::Custom(custom.name));
        }

        Err(ConfigError::UnknownFormat(name.to_string()))
    }

    pub fn build(self) -> Result<Loader, ConfigError> {
        let mut sources = SourceRegistry::new();
        for (pattern, provider) in self.routes {
            let pattern = match pattern {
                PendingPattern::Raw(raw) => Pattern::new(&raw)?,
                PendingPattern::Compiled(pattern) => pattern,
            };
            sources.add_route(pattern, provider);
        }
        sources.set_fallback(self.fallback);

        Ok(Loader::new(sources, self.formats))
    }
}

impl Loader {
    /// Start building a loader with no routes and no fallback.
    pub fn builder() -> LoaderBuilder {
        LoaderBuilder::new()
    }

    /// A loader with the default configuration: `s3://bucket/key` identifiers
    /// go to object storage, everything else is opened as a local file, and
    /// JSON, YAML and XML are decoded by suffix with JSON as the default.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        LoaderBuilder::defaults().build()
    }
}

#[cfg(feature = "s3")]
fn object_source() -> Arc<dyn SourceProvider> {
    Arc::new(ObjectStoreSource::new(crate::io::S3Fetcher::new()))
}

#[cfg(not(feature = "s3"))]
fn object_source() -> Arc<dyn SourceProvider> {
    Arc::new(ObjectStoreSource::new(crate::io::DisabledFetcher))
}
