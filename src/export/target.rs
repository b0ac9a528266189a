use crate::errors::{AppError, AppResult};
use crate::ui::prompt::confirm;
use std::path::Path;

/// Decide whether the export may write to `path`.
///
/// A new path is always fine. An existing file is replaced only with
/// `force` or when the user agrees at the prompt.
pub(crate) fn check_target(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let question = format!(
        "{} already exists. Replace it with the current history?",
        path.display()
    );
    if confirm(&question) {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "{} already exists, nothing written (use --force to replace it)",
        path.display()
    )))
}
