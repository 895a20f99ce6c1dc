//! Unified error types for the Atrium library.
//!
//! This module provides a single error type shared by schema building,
//! traversal, and sink serialization.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
