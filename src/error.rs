use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort an import run.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error opening file '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading input at line {line}: {source}")]
    SourceReadError {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Per-line conditions. The importer absorbs these and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected {expected} fields, found {found}")]
    InvalidRecordShape { found: usize, expected: usize },

    #[error("Invalid email address '{email}', missing {separator} symbol or domain")]
    InvalidEmailFormat { email: String, separator: char },
}

pub type Result<T> = std::result::Result<T, ImportError>;
