//! Internal unit tests, grouped by module.


mod config;
mod error;
mod format;
