use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::HistoryStore;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Append the sessions of a CSV file. Nothing is added unless every row
/// is valid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { from } = cmd {
        let path = expand_tilde(from);
        let mut store = HistoryStore::open(cfg.history_path())?;

        info(format!("Importing from {}", path.display()));
        let count = store.import(&path)?;

        success(format!("Imported {count} session(s)."));
    }
    Ok(())
}
