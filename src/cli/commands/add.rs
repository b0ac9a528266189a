use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::store::HistoryStore;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_time;

/// Add a session by hand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        minute,
        second,
        note,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

        let mut store = HistoryStore::open(cfg.history_path())?;
        let record = AddLogic::apply(&mut store, d, t, *minute, *second, note.clone())?;

        success(format!(
            "Session added: {} ({})",
            record.date_time_str(),
            record.duration_label()
        ));
    }

    Ok(())
}
