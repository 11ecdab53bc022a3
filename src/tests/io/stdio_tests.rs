//! Tests for the local file source.

use std::fs;
use std::io::{ErrorKind, Read};

use crate::io::{FileSource, SourceProvider, SourceRequest};

#[test]
fn file_source_opens_closeable_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(&path, b"hello world").unwrap();
    let identifier = path.to_str().unwrap();

    let mut handle = FileSource::new()
        .open(&SourceRequest::new(identifier))
        .unwrap();
    let mut buf = String::new();
    handle.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello world");
    assert!(handle.is_closeable());
    handle.release().unwrap();
}

#[test]
fn missing_file_surfaces_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = FileSource::new()
        .open(&SourceRequest::new(path.to_str().unwrap()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn directory_is_not_readable_content() {
    let dir = tempfile::tempdir().unwrap();

    // Opening a directory may succeed on some platforms; reading it must not
    let result = FileSource::new()
        .open(&SourceRequest::new(dir.path().to_str().unwrap()))
        .and_then(|mut handle| {
            let mut buf = Vec::new();
            handle.read_to_end(&mut buf)
        });

    assert!(result.is_err());
}
