//! Common types and utilities shared across the domain model and the
//! export pipeline.

// Submodule declarations
pub mod error;
pub mod locale;

// Re-exports for convenience
pub use error::{Error, Result};
pub use locale::{keys, LabelBundle, Locale, LocalizedText, BUILTIN_LABELS};
