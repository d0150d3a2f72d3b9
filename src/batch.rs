//! Batch shifting of shape records.
//!
//! Each record carries path data in its own frame and the `(x, y)` where that
//! frame sits on the map. [`apply_shift`] writes the map-frame path back into
//! every record. Records are independent of each other.

use crate::errors::{RecordError, SourceContext};
use crate::shift::shift_path_report;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A record holding path data and the offset it is drawn at.
pub trait PathRecord {
    /// Path data in the record's local frame.
    fn path(&self) -> &str;

    /// Where the local frame sits on the map.
    fn offset(&self) -> DVec2;

    /// Store the shifted path.
    fn set_absolute_path(&mut self, path: String);

    /// Name used in log messages.
    fn label(&self) -> &str {
        "<record>"
    }
}

/// A shape on the crag map, as exported from the design file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CragShape {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub path: String,
    #[serde(default)]
    pub fill: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
}

impl PathRecord for CragShape {
    fn path(&self) -> &str {
        &self.path
    }

    fn offset(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    fn set_absolute_path(&mut self, path: String) {
        self.absolute_path = Some(path);
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Shift every record by its own offset and store the result in it.
pub fn apply_shift<R: PathRecord>(records: &mut [R]) {
    for record in records.iter_mut() {
        shift_record(record);
    }
}

/// [`apply_shift`] on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn apply_shift_par<R: PathRecord + Send>(records: &mut [R]) {
    use rayon::prelude::*;

    records.par_iter_mut().for_each(|record| shift_record(record));
}

fn shift_record<R: PathRecord>(record: &mut R) {
    let report = shift_path_report(record.path(), record.offset());
    if let Some(_truncation) = report.truncation {
        crate::log::warn!(
            "{}: dropped {} trailing token(s) of path data at byte {}",
            record.label(),
            _truncation.discarded,
            _truncation.at
        );
    }
    crate::log::debug!("{}: shifted by {:?}", record.label(), record.offset());
    record.set_absolute_path(report.path);
}

/// Decode a JSON array of shapes. `name` labels diagnostics.
pub fn load_shapes(json: &str, name: &str) -> Result<Vec<CragShape>, RecordError> {
    serde_json::from_str(json).map_err(|e| RecordError::json(&SourceContext::new(name, json), &e))
}

/// Read a JSON file of shapes.
pub fn read_shapes(path: impl AsRef<Path>) -> Result<Vec<CragShape>, RecordError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_shapes(&json, &path.display().to_string())
}

/// Encode shapes as pretty-printed JSON.
pub fn shapes_to_json(shapes: &[CragShape]) -> Result<String, RecordError> {
    serde_json::to_string_pretty(shapes).map_err(RecordError::Encode)
}
