//! Unified error types for the Atrium library.
//!
//! This module provides a single error type covering schema building, tree
//! traversal, and sink serialization, presenting a consistent API to users.
use thiserror::Error;

/// Main error type for Atrium operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A classification's metadata specification is missing required fields
    /// or is not the expected JSON array shape.
    #[error("malformed metadata spec in classification '{classification}': {detail}")]
    MalformedSpec {
        classification: String,
        detail: String,
    },

    /// The tabular sink rejected a row or failed to finalize.
    #[error("sink error: {0}")]
    Sink(String),

    /// A space id did not resolve in the tree it was used with.
    #[error("space #{0} not found in tree")]
    SpaceNotFound(usize),
}

/// Result type for Atrium operations.
pub type Result<T> = std::result::Result<T, Error>;
