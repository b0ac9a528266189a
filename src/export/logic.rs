// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::json::export_json;
use crate::export::target::check_target;
use crate::export::{ExportFormat, notify_export_success};
use crate::store::HistoryStore;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// High level export of the whole history.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every session of `store` to `file`.
    ///
    /// - `format`: csv (same layout as the history file) or json
    /// - `force`: replace an existing file without asking
    pub fn export(
        store: &HistoryStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        check_target(&path, force)?;

        if store.is_empty() {
            warning("History is empty: the exported file will contain no sessions.");
        }

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => store.export(&path)?,
            ExportFormat::Json => export_json(store.records(), &path)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), store.len(), &path);
        Ok(())
    }
}
