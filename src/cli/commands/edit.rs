use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, RecordChanges};
use crate::errors::{AppError, AppResult};
use crate::store::HistoryStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Replace fields of an existing session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        number,
        date,
        time,
        minute,
        second,
        note,
    } = cmd
    {
        let date = match date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let changes = RecordChanges {
            date,
            time: parse_optional_time(time.as_ref())?,
            minutes: *minute,
            seconds: *second,
            note: note.clone(),
        };

        if changes.is_empty() {
            warning("Nothing to change: use --date, --time, --min, --sec or --note.");
            return Ok(());
        }

        let mut store = HistoryStore::open(cfg.history_path())?;
        let (_, updated) = EditLogic::apply(&mut store, *number, changes)?;

        success(format!(
            "Session #{} updated: {} ({})",
            number,
            updated.date_time_str(),
            updated.duration_label()
        ));
    }

    Ok(())
}
