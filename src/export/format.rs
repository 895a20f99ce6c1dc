//! Row-cell formatting helpers.
//!
//! Every helper is total: an absent value renders as [`PLACEHOLDER`], never
//! as an error or an empty-by-accident cell. Number rendering uses `itoa`
//! and `ryu` to avoid `format!` allocations on the per-row hot path.

use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::common::Locale;
use crate::space::{
    ClassificationId, ClassificationRegistry, MetaValue, Occupation, Space, SpaceId, SpaceTree,
};

/// Cell text for absent values.
pub const PLACEHOLDER: &str = "--";

/// Display format for valid-from/valid-until dates, e.g. `07/03/2024`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Separator between ancestor names in the path column.
pub const PATH_SEPARATOR: &str = " > ";

/// Separator between entries in the occupants column.
pub const OCCUPANT_SEPARATOR: &str = "; ";

/// Render an optional text attribute.
pub fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

/// Render an optional date attribute using [`DATE_FORMAT`].
pub fn date_cell(value: Option<NaiveDate>) -> String {
    match value {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render an optional capacity.
pub fn capacity_cell(value: Option<u32>) -> String {
    match value {
        Some(n) => itoa::Buffer::new().format(n).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render an optional area. Integral values render without a trailing
/// fraction (`20`, not `20.0`).
pub fn area_cell(value: Option<f64>) -> String {
    match value {
        Some(n) => {
            let mut cell = String::with_capacity(16);
            write_float(&mut cell, n);
            cell
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Write a float to a string buffer, itoa for the integral fast path and
/// ryu otherwise.
pub fn write_float(buf: &mut String, n: f64) {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        buf.push_str(itoa::Buffer::new().format(n as i64));
    } else {
        buf.push_str(ryu::Buffer::new().format(n));
    }
}

/// Render an optional metadata value.
pub fn meta_cell(value: Option<&MetaValue>) -> String {
    match value {
        Some(MetaValue::Text(text)) => text.clone(),
        Some(MetaValue::Int(n)) => itoa::Buffer::new().format(*n).to_string(),
        Some(MetaValue::Float(n)) => {
            let mut cell = String::with_capacity(16);
            write_float(&mut cell, *n);
            cell
        }
        Some(MetaValue::Bool(b)) => b.to_string(),
        Some(MetaValue::Date(date)) => date.format(DATE_FORMAT).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render the classification display name at the caller's locale.
///
/// An unset classification, or an id that no longer resolves in the
/// registry, is a missing value rather than an error.
pub fn classification_cell(
    id: Option<ClassificationId>,
    registry: &ClassificationRegistry,
    locale: &Locale,
) -> String {
    id.and_then(|id| registry.get(id))
        .map(|classification| classification.name().content(locale).to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Render the ancestor path of a space, root first, names joined by
/// [`PATH_SEPARATOR`]. The space's own name is not part of its path; a root
/// renders the placeholder.
pub fn path_cell(tree: &SpaceTree, id: SpaceId) -> String {
    let chain: SmallVec<[&Space; 8]> = tree.ancestors(id).collect();
    if chain.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let mut cell = String::new();
    for space in chain.iter().rev() {
        if !cell.is_empty() {
            cell.push_str(PATH_SEPARATOR);
        }
        cell.push_str(space.name());
    }
    cell
}

/// Render the occupants column: all shared, active occupations as
/// `"<display name> (<username>)"` joined by [`OCCUPANT_SEPARATOR`], in
/// stored order. Empty string when no occupation qualifies.
pub fn occupants_cell(occupations: &[Occupation]) -> String {
    let mut cell = String::new();
    for occupation in occupations.iter().filter(|o| o.is_reportable()) {
        if !cell.is_empty() {
            cell.push_str(OCCUPANT_SEPARATOR);
        }
        cell.push_str(&occupation.occupant.display_name);
        cell.push_str(" (");
        cell.push_str(&occupation.occupant.username);
        cell.push(')');
    }
    cell
}
