//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, LoadError, Stage};

/// A diagnostic wrapper for load errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct LoadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Route => "Register a source pattern for this identifier or configure a fallback",
        Stage::Open => "Check that the path or object exists and is readable",
        Stage::Decode => "Check that the file suffix matches the content format",
        Stage::Release => "The content was read but the source could not be closed cleanly",
    }
}

impl From<LoadError> for LoadDiagnostic {
    fn from(e: LoadError) -> Self {
        let stage = e.stage();
        let message = format!("[{}] on '{}'", stage, e.identifier());
        let mut help = help_for(stage).to_string();
        if let Some(release) = e.secondary_release_error() {
            help.push_str(&format!(
                ". The stream also failed to close afterwards: {release}"
            ));
        }
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = match e {
            LoadError::NoProviderMatched { .. } => None,
            LoadError::Source { source, .. } | LoadError::Release { source, .. } => {
                Some(Box::new(source))
            }
            LoadError::Decode { source, .. } => Some(Box::new(source)),
        };
        LoadDiagnostic {
            message,
            source,
            help: Some(help),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for LoadDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let first = agg.errors.into_iter().next();
        if let Some(e) = first {
            LoadDiagnostic::from(e)
        } else {
            LoadDiagnostic {
                message: "Unknown load error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            }
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(LoadDiagnostic::from(agg))
    }
}
