//! Tests for LoaderConfig parsing and builder conversion.

use std::sync::Arc;

use crate::builder::LoaderBuilder;
use crate::config::{FallbackKind, LoaderConfig, SourceConfig, SourceKind};
use crate::error::{ConfigError, LoadError};
use crate::format::FormatKind;
use crate::io::InMemorySource;

#[test]
fn source_and_fallback_kinds_parse_case_insensitively() {
    assert_eq!(SourceKind::from_str("S3"), Some(SourceKind::S3));
    assert_eq!(SourceKind::from_str("file"), Some(SourceKind::File));
    assert_eq!(SourceKind::from_str("ftp"), None);
    assert_eq!(FallbackKind::from_str("NONE"), Some(FallbackKind::None));
    assert_eq!(FallbackKind::default(), FallbackKind::File);
}

#[test]
fn config_routes_keep_their_order() {
    let config = LoaderConfig::new()
        .add_source(SourceConfig::new(r"^s3://(?P<bucket>[^/]+)/(?P<key>.*)$", "s3"))
        .add_source(SourceConfig::new(r"^/mnt/", "file"));

    let loader = LoaderBuilder::from_config(config).unwrap().build().unwrap();
    let routes = loader.sources().routes();

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].provider.name(), "s3");
    assert_eq!(routes[1].provider.name(), "file");
    assert_eq!(loader.sources().fallback().unwrap().name(), "file");
}

#[test]
fn fallback_none_disables_fallback() {
    let config = LoaderConfig::new().with_fallback("none");

    let loader = crate::loader_from_config(config).unwrap();
    let err = loader.resolve("anything.json").unwrap_err();

    assert!(matches!(err, LoadError::NoProviderMatched { .. }));
}

#[test]
fn unknown_source_kind_is_rejected() {
    let config = LoaderConfig::new().add_source(SourceConfig::new("^ftp://", "ftp"));

    let err = LoaderBuilder::from_config(config).err().unwrap();

    assert!(matches!(err, ConfigError::UnknownSourceKind(kind) if kind == "ftp"));
}

#[test]
fn unknown_fallback_and_format_are_rejected() {
    let err = LoaderBuilder::from_config(LoaderConfig::new().with_fallback("http"))
        .err()
        .unwrap();
    assert!(matches!(err, ConfigError::UnknownFallback(_)));

    let err = LoaderBuilder::from_config(LoaderConfig::new().with_default_format("toml"))
        .err()
        .unwrap();
    assert!(matches!(err, ConfigError::UnknownFormat(name) if name == "toml"));
}

#[test]
fn bad_pattern_fails_at_build() {
    let config = LoaderConfig::new().add_source(SourceConfig::new("([", "file"));

    let err = LoaderBuilder::from_config(config).unwrap().build().unwrap_err();

    assert!(matches!(err, ConfigError::InvalidPattern { .. }));
}

#[test]
fn apply_config_keeps_existing_fallback_when_unset() {
    let memory = InMemorySource::new().with_string("noext", r#"{"k":"v"}"#);
    let loader = LoaderBuilder::new()
        .with_fallback(Arc::new(memory))
        .apply_config(LoaderConfig::new())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(loader.sources().fallback().unwrap().name(), "memory");
    let value: serde_json::Value = loader.load("noext").unwrap();
    assert_eq!(value["k"], "v");
}

#[cfg(feature = "yaml")]
#[test]
fn parse_yaml_config_with_formats() {
    let yaml = r#"
sources:
  - pattern: '^s3://(?P<bucket>[^/]+)/(?P<key>.*)$'
    kind: s3
fallback: file
default_format: yaml
aliases:
  conf: yaml
  feed: xml
"#;

    let config: LoaderConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.sources.len(), 1);
    assert_eq!(config.aliases.len(), 2);

    let loader = crate::loader_from_config(config).unwrap();
    let formats = loader.formats();

    assert_eq!(formats.default_kind(), FormatKind::Yaml);
    assert_eq!(formats.kind_for("app.conf"), FormatKind::Yaml);
    assert_eq!(formats.kind_for("news.feed"), FormatKind::Xml);
    assert_eq!(formats.kind_for("noext"), FormatKind::Yaml);
}

#[cfg(feature = "custom")]
#[test]
fn config_can_name_custom_formats_registered_first() {
    use crate::format::CustomFormat;

    let json = r#"{ "aliases": { "props": "lines" } }"#;
    let config: LoaderConfig = serde_json::from_str(json).unwrap();

    let loader = crate::loader_from_config_with(config, |builder| {
        builder.with_custom_format(CustomFormat::new("lines", &["lines"], |bytes| {
            let text = String::from_utf8_lossy(bytes);
            Ok(serde_json::Value::Array(
                text.lines().map(|l| serde_json::Value::String(l.into())).collect(),
            ))
        }))
    })
    .unwrap();

    assert_eq!(
        loader.formats().kind_for("app.props"),
        FormatKind::Custom("lines")
    );
    let lines: Vec<String> = loader.formats().decode_bytes("app.props", b"a\nb").unwrap();
    assert_eq!(lines, vec!["a", "b"]);
}
