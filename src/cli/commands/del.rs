use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, Deleted};
use crate::errors::{AppError, AppResult};
use crate::store::HistoryStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { number, all, yes } = cmd {
        let mut store = HistoryStore::open(cfg.history_path())?;

        let target = if *all { None } else { *number };

        let prompt = match target {
            Some(n) => {
                let index = n.checked_sub(1).ok_or(AppError::RecordNotFound(n))?;
                let record = store.get(index).ok_or(AppError::RecordNotFound(n))?;
                format!(
                    "Delete session #{} ({}, {})? This action is irreversible.",
                    n,
                    record.date_time_str(),
                    record.duration_label()
                )
            }
            None => format!(
                "Delete ALL {} session(s)? This action is irreversible.",
                store.len()
            ),
        };

        if cfg.confirm_delete && !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        match DeleteLogic::apply(&mut store, target)? {
            Deleted::One(record) => success(format!(
                "Session {} has been deleted.",
                record.date_time_str()
            )),
            Deleted::All(count) => success(format!("{count} session(s) have been deleted.")),
        }
    }

    Ok(())
}
