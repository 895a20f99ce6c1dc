//! Flattening a space tree into tabular output.
//!
//! The pipeline has three parts: [`ExportSchema`] derives the column layout
//! (ten fixed columns plus deduplicated classification metadata keys),
//! [`TreeExporter`] walks the active subtree and projects one row per
//! exported space, and a [`TabularSink`] accumulates the rows and serializes
//! them to a byte stream.
//!
//! # Quick Start
//!
//! ```rust
//! use atrium::export::{run, ExportConfig};
//! use atrium::space::{ClassificationRegistry, Space, SpaceTree};
//!
//! let mut tree = SpaceTree::new();
//! let root = tree.add_root(Space::new("Campus"));
//! tree.add_child(root, Space::new("Building A"))?;
//!
//! let registry = ClassificationRegistry::new();
//! let mut out = Vec::new();
//! let stats = run(&tree, &registry, root, ExportConfig::default(), &mut out)?;
//! assert_eq!(stats.rows, 2);
//! # Ok::<(), atrium::common::Error>(())
//! ```

// Submodule declarations
pub mod exporter;
pub mod format;
pub mod schema;
pub mod sink;

// Re-exports
pub use exporter::{
    run, ExportConfig, ExportStats, InactiveDescent, SinkErrorPolicy, TreeExporter, SHEET_TITLE,
};
pub use schema::{ExportSchema, FIXED_HEADER_COUNT};
pub use sink::{DelimitedConfig, DelimitedSink, MemorySink, TabularSink};
