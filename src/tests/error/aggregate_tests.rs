//! Tests for LoadError accessors and AggregateError formatting.

use std::io;

use crate::error::{AggregateError, ErrorPolicy, LoadError, Stage};
use crate::format::FormatError;

fn source_error(id: &str) -> LoadError {
    LoadError::Source {
        identifier: id.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    }
}

#[test]
fn stages_follow_variants() {
    let no_route = LoadError::NoProviderMatched {
        identifier: "a".into(),
    };
    let decode = LoadError::Decode {
        identifier: "b".into(),
        source: FormatError::Io(io::Error::other("eof")),
        release: None,
    };
    let release = LoadError::Release {
        identifier: "c".into(),
        source: io::Error::other("close"),
    };

    assert_eq!(no_route.stage(), Stage::Route);
    assert_eq!(source_error("x").stage(), Stage::Open);
    assert_eq!(decode.stage(), Stage::Decode);
    assert_eq!(release.stage(), Stage::Release);
    assert_eq!(release.identifier(), "c");
    assert!(decode.secondary_release_error().is_none());
}

#[test]
fn source_error_exposes_underlying_cause() {
    let err = source_error("cfg.json");

    let cause = std::error::Error::source(&err).expect("source is kept");
    assert_eq!(cause.to_string(), "gone");
    assert_eq!(err.to_string(), "failed to open 'cfg.json': gone");
}

#[test]
fn aggregate_lists_each_error_with_stage() {
    let agg = AggregateError {
        errors: vec![source_error("a.json"), source_error("b.json")],
    };

    let text = agg.to_string();

    assert_eq!(agg.len(), 2);
    assert!(!agg.is_empty());
    assert!(text.contains("2 error(s)"));
    assert!(text.contains("#1: [Open] failed to open 'a.json'"));
    assert!(text.contains("#2: [Open] failed to open 'b.json'"));
}

#[test]
fn single_error_converts_into_aggregate() {
    let agg: AggregateError = source_error("a").into();
    assert_eq!(agg.len(), 1);
}

#[test]
fn error_policy_parses_and_defaults_to_fast_fail() {
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::FastFail);
    assert_eq!(ErrorPolicy::from_str("Accumulate"), Some(ErrorPolicy::Accumulate));
    assert_eq!(ErrorPolicy::from_str("fast_fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("sometimes"), None);
}
