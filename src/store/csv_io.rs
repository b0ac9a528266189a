//! CSV encoding of the history file.

use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::utils::path::ensure_parent;
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs::File;
use std::io;
use std::path::Path;

/// Header row of every history, import and export file.
pub const HEADER: [&str; 4] = ["date_time", "minute", "second", "note"];

/// Rewrite `path` with the header followed by one row per record.
pub fn write_records(path: &Path, records: &[SessionRecord]) -> AppResult<()> {
    ensure_parent(path)?;

    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(HEADER)?;

    for record in records {
        wtr.write_record(record.to_fields())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read and validate every row of `path`.
///
/// The header must equal [`HEADER`] exactly. Nothing is returned unless
/// every row parses, so callers never see a partial list.
pub fn read_records(path: &Path) -> AppResult<Vec<SessionRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::FileNotFound(path.display().to_string()),
        _ => AppError::Io(e),
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = rdr.records();

    let header = match rows.next() {
        Some(row) => row?,
        None => StringRecord::new(),
    };
    check_header(&header)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 2);

        let fields: Vec<&str> = row.iter().collect();
        records.push(SessionRecord::from_fields(&fields, line)?);
    }

    Ok(records)
}

fn check_header(header: &StringRecord) -> AppResult<()> {
    if header.iter().eq(HEADER.iter().copied()) {
        Ok(())
    } else {
        Err(AppError::FormatMismatch {
            expected: HEADER.join(","),
            found: header.iter().collect::<Vec<_>>().join(","),
        })
    }
}
