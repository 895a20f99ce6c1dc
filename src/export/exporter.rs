//! Tree traversal and row emission.
//!
//! [`TreeExporter`] flattens the active subtree under a root space into rows
//! aligned to an [`ExportSchema`], handing each row to a [`TabularSink`] in
//! depth-first pre-order. The traversal uses an explicit work stack, so the
//! supported tree depth is bounded by memory rather than call-stack size.

use std::io::Write;

use crate::common::{Error, LabelBundle, Locale, Result, BUILTIN_LABELS};
use crate::space::{ClassificationRegistry, Space, SpaceId, SpaceTree};

use super::format;
use super::schema::ExportSchema;
use super::sink::{DelimitedConfig, DelimitedSink, TabularSink};

/// Fixed sheet title announced to the sink.
pub const SHEET_TITLE: &str = "GestãoDeEspaços";

/// What to do with the subtree under an inactive space.
///
/// An inactive space never produces a row of its own. Whether its
/// descendants are still considered is a policy choice: under `Visit`,
/// active rooms below a decommissioned floor stay visible in the report;
/// under `Prune`, deactivating a space hides its whole subtree. `Visit` is
/// the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InactiveDescent {
    /// Walk into inactive spaces; their active descendants still export.
    #[default]
    Visit,
    /// Skip the entire subtree of an inactive space.
    Prune,
}

/// What to do when the sink or the output stream fails mid-export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkErrorPolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Log the error and return normally, with
    /// [`ExportStats::completed`] set to `false`.
    LogAndSuppress,
}

/// Options for one export call.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Locale used to resolve headers and classification names.
    pub locale: Locale,
    pub inactive_descent: InactiveDescent,
    /// Only consulted by [`run`]; [`TreeExporter::export`] always
    /// propagates.
    pub sink_errors: SinkErrorPolicy,
}

/// Outcome of an export call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    /// Rows accepted by the sink, the root row included.
    pub rows: usize,
    /// `false` only under [`SinkErrorPolicy::LogAndSuppress`] when the
    /// export was cut short; the sink holds a partial table then.
    pub completed: bool,
}

/// Flattens a space tree into rows for a tabular sink.
///
/// The tree and registry are read-only for the duration of a call; the
/// borrow makes concurrent mutation impossible from safe code. Cyclic
/// structures cannot be built through [`SpaceTree`], so the single-pass
/// traversal always terminates.
#[derive(Debug)]
pub struct TreeExporter<'a> {
    tree: &'a SpaceTree,
    registry: &'a ClassificationRegistry,
    labels: &'a LabelBundle,
    config: ExportConfig,
}

impl<'a> TreeExporter<'a> {
    /// Create an exporter with the built-in labels and default config.
    pub fn new(tree: &'a SpaceTree, registry: &'a ClassificationRegistry) -> Self {
        TreeExporter {
            tree,
            registry,
            labels: &BUILTIN_LABELS,
            config: ExportConfig::default(),
        }
    }

    /// Use a caller-supplied label bundle, builder style.
    pub fn with_labels(mut self, labels: &'a LabelBundle) -> Self {
        self.labels = labels;
        self
    }

    /// Use a caller-supplied configuration, builder style.
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Export the subtree rooted at `root` into `sink`.
    ///
    /// The root row is always emitted first, regardless of the root's
    /// active flag; descendants follow in depth-first pre-order. Errors
    /// always propagate here; the sink may hold a partial table afterwards.
    pub fn export(&self, root: SpaceId, sink: &mut dyn TabularSink) -> Result<ExportStats> {
        let schema = self.schema()?;
        let mut rows = 0;
        self.drive(&schema, root, sink, &mut rows)?;
        Ok(ExportStats {
            rows,
            completed: true,
        })
    }

    /// Build the column schema for this exporter's registry and locale.
    pub fn schema(&self) -> Result<ExportSchema> {
        ExportSchema::build(self.registry, self.labels, &self.config.locale)
    }

    fn drive(
        &self,
        schema: &ExportSchema,
        root: SpaceId,
        sink: &mut dyn TabularSink,
        rows: &mut usize,
    ) -> Result<()> {
        log::debug!(
            "space export: {} columns ({} dynamic)",
            schema.column_count(),
            schema.meta_keys().len()
        );
        sink.begin(SHEET_TITLE, &schema.headers())?;

        let root_space = self
            .tree
            .get(root)
            .ok_or(Error::SpaceNotFound(root.index()))?;
        self.emit_row(schema, root, root_space, sink, rows)?;

        // Explicit pre-order stack; children are pushed reversed so they pop
        // in attachment order.
        let mut stack: Vec<SpaceId> = Vec::new();
        stack.extend(root_space.children().iter().rev());
        while let Some(id) = stack.pop() {
            let space = self.tree.get(id).ok_or(Error::SpaceNotFound(id.index()))?;
            if space.is_active() {
                self.emit_row(schema, id, space, sink, rows)?;
            }
            let descend = match self.config.inactive_descent {
                InactiveDescent::Visit => true,
                InactiveDescent::Prune => space.is_active(),
            };
            if descend {
                stack.extend(space.children().iter().rev());
            }
        }
        Ok(())
    }

    fn emit_row(
        &self,
        schema: &ExportSchema,
        id: SpaceId,
        space: &Space,
        sink: &mut dyn TabularSink,
        rows: &mut usize,
    ) -> Result<()> {
        let cells = self.project_row(schema, id, space);
        sink.append_row(&cells)?;
        *rows += 1;
        Ok(())
    }

    /// Project one space into cells aligned with the schema. Absent values
    /// become placeholders; nothing here fails.
    fn project_row(&self, schema: &ExportSchema, id: SpaceId, space: &Space) -> Vec<String> {
        let mut cells = Vec::with_capacity(schema.column_count());
        cells.push(format::path_cell(self.tree, id));
        cells.push(space.name().to_string());
        cells.push(format::text_cell(space.info.identification.as_deref()));
        cells.push(format::date_cell(space.info.valid_from));
        cells.push(format::date_cell(space.info.valid_until));
        cells.push(format::text_cell(space.info.blueprint_number.as_deref()));
        cells.push(format::classification_cell(
            space.info.classification,
            self.registry,
            &self.config.locale,
        ));
        cells.push(format::capacity_cell(space.info.allocatable_capacity));
        cells.push(format::area_cell(space.info.area));
        cells.push(format::occupants_cell(space.occupations()));
        for key in schema.meta_keys() {
            cells.push(format::meta_cell(space.metadata(key)));
        }
        cells
    }
}

/// Export the subtree rooted at `root` as delimited text into `out`.
///
/// Convenience entry point: builds a CSV [`DelimitedSink`], runs the export,
/// and finalizes into the stream. A malformed classification spec and an
/// unknown root always surface as errors; sink and stream failures follow
/// `config.sink_errors` — under [`SinkErrorPolicy::LogAndSuppress`] they are
/// logged and the call returns `Ok` with `completed: false`, so callers can
/// still tell a cut-short export from a successful one.
pub fn run<W: Write>(
    tree: &SpaceTree,
    registry: &ClassificationRegistry,
    root: SpaceId,
    config: ExportConfig,
    out: &mut W,
) -> Result<ExportStats> {
    let policy = config.sink_errors;
    let exporter = TreeExporter::new(tree, registry).with_config(config);
    let schema = exporter.schema()?;
    tree.get(root).ok_or(Error::SpaceNotFound(root.index()))?;

    let mut sink = DelimitedSink::new(DelimitedConfig::default());
    let mut rows = 0;
    let outcome = exporter
        .drive(&schema, root, &mut sink, &mut rows)
        .and_then(|()| sink.finish(out));
    match outcome {
        Ok(()) => Ok(ExportStats {
            rows,
            completed: true,
        }),
        Err(err) => match policy {
            SinkErrorPolicy::Propagate => Err(err),
            SinkErrorPolicy::LogAndSuppress => {
                log::error!("space export failed after {rows} rows: {err}");
                Ok(ExportStats {
                    rows,
                    completed: false,
                })
            }
        },
    }
}
