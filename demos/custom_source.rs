//! Register an extra source and an extra format without touching call sites.
//!
//! Run with: cargo run --example custom_source

use std::collections::HashMap;
use std::sync::Arc;

use contentload::{CustomFormat, FileSource, FormatError, InMemorySource, Loader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bundled = InMemorySource::new()
        .with_string("mem://defaults.json", r#"{"retries": 3, "timeout": 30}"#)
        .with_string("mem://hosts.list", "alpha\nbeta\n");

    let lines = CustomFormat::new("lines", &["list"], |bytes| {
        let text = std::str::from_utf8(bytes).map_err(|e| FormatError::Serde(Box::new(e)))?;
        Ok(text.lines().map(|l| serde_json::Value::from(l.trim())).collect())
    });

    let loader = Loader::builder()
        .add_source(r"^mem://", Arc::new(bundled))
        .with_fallback(Arc::new(FileSource::new()))
        .with_custom_format(lines)
        .build()?;

    let defaults: HashMap<String, u32> = loader.load("mem://defaults.json")?;
    let hosts: Vec<String> = loader.load("mem://hosts.list")?;

    println!("defaults: {defaults:?}");
    println!("hosts: {hosts:?}");
    Ok(())
}
