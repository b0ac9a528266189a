// src/export/json.rs

use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::utils::path::ensure_parent;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Flat shape of a session in JSON exports.
#[derive(Serialize, Clone, Debug)]
pub(crate) struct RecordExport {
    pub date_time: String,
    pub minute: u32,
    pub second: u32,
    pub note: Option<String>,
}

impl From<&SessionRecord> for RecordExport {
    fn from(r: &SessionRecord) -> Self {
        Self {
            date_time: r.date_time_str(),
            minute: r.minutes,
            second: r.seconds,
            note: r.note.clone(),
        }
    }
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[SessionRecord], path: &Path) -> AppResult<()> {
    let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    ensure_parent(path)?;
    fs::write(path, json_data)?;
    Ok(())
}
