//! Error types for loading ticket documents.

use std::path::PathBuf;
use thiserror::Error;

/// A single field value that could not be parsed into its typed form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("Unable to parse time: {0}")]
    Time(String),

    #[error("Unable to parse date: {0}")]
    Date(String),
}

/// Failure to produce a [`TicketList`](crate::ticket::TicketList).
///
/// A malformed record fails the whole load; there are no partial results.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ticket document: {0}")]
    Json(#[from] serde_json::Error),
}
