//! Atrium - flatten hierarchical space trees into tabular exports
//!
//! This library takes a tree of spaces (buildings, floors, rooms — any
//! entity with parent/child relationships) and flattens it into a single
//! table. Part of the column schema is fixed; the rest is derived at export
//! time from the metadata fields declared by space classifications,
//! deduplicated across classifications with stable ordering.
//!
//! # Features
//!
//! - **Arena-backed tree**: spaces owned in one place, cheap id references
//! - **Classification-driven columns**: dynamic schema, first-seen key order
//! - **Consistent null handling**: absent values render as a placeholder,
//!   never as nulls
//! - **Pluggable sinks**: rows stream into any [`export::TabularSink`]
//! - **Localized output**: headers and classification names resolve to the
//!   caller's locale
//!
//! # Example - Exporting a tree as CSV
//!
//! ```
//! use atrium::export::{run, ExportConfig};
//! use atrium::space::{ClassificationRegistry, Space, SpaceInfo, SpaceTree};
//!
//! # fn main() -> atrium::common::Result<()> {
//! let mut tree = SpaceTree::new();
//! let campus = tree.add_root(Space::new("Campus"));
//! let building = tree.add_child(campus, Space::new("Building A"))?;
//! tree.add_child(
//!     building,
//!     Space::new("Room 101").with_info(SpaceInfo {
//!         allocatable_capacity: Some(20),
//!         ..SpaceInfo::default()
//!     }),
//! )?;
//!
//! let registry = ClassificationRegistry::new();
//! let mut out = Vec::new();
//! let stats = run(&tree, &registry, campus, ExportConfig::default(), &mut out)?;
//! assert_eq!(stats.rows, 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom sink
//!
//! ```
//! use atrium::export::{MemorySink, TreeExporter};
//! use atrium::space::{ClassificationRegistry, Space, SpaceTree};
//!
//! # fn main() -> atrium::common::Result<()> {
//! let mut tree = SpaceTree::new();
//! let root = tree.add_root(Space::new("Campus"));
//!
//! let registry = ClassificationRegistry::new();
//! let mut sink = MemorySink::new();
//! TreeExporter::new(&tree, &registry).export(root, &mut sink)?;
//! assert_eq!(sink.rows().len(), 1);
//! # Ok(())
//! # }
//! ```

/// Shared types: errors, locales, localized text, label bundles
pub mod common;

/// Domain model: the space tree, classifications, occupations, metadata
pub mod space;

/// The export pipeline: schema building, traversal, formatting, sinks
pub mod export;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use export::{run, ExportConfig, ExportStats, TreeExporter};
pub use space::{ClassificationRegistry, Space, SpaceId, SpaceTree};
