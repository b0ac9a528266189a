use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::HistoryStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, to, force } = cmd {
        let store = HistoryStore::open(cfg.history_path())?;
        ExportLogic::export(&store, *format, to, *force)?;
    }
    Ok(())
}
