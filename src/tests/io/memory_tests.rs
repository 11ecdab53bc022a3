//! Tests for the in-memory source.

use std::io::{ErrorKind, Read};

use crate::io::{InMemorySource, SourceProvider, SourceRequest};

#[test]
fn in_memory_source_serves_entries_repeatedly() {
    let src = InMemorySource::new().with_string("cfg.json", "hello");

    for _ in 0..2 {
        let mut handle = src.open(&SourceRequest::new("cfg.json")).unwrap();
        let mut buf = String::new();
        handle.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
        assert!(!handle.is_closeable());
    }
}

#[test]
fn in_memory_source_missing_entry_is_not_found() {
    let src = InMemorySource::new();

    assert!(src.is_empty());
    let err = src.open(&SourceRequest::new("nope")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn insert_replaces_existing_entry() {
    let mut src = InMemorySource::new().with_string("a", "old");
    src.insert("a", b"new".to_vec());

    assert_eq!(src.len(), 1);
    assert!(src.contains("a"));
    let mut buf = String::new();
    src.open(&SourceRequest::new("a"))
        .unwrap()
        .read_to_string(&mut buf)
        .unwrap();
    assert_eq!(buf, "new");
}
