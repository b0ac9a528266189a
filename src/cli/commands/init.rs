use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::HistoryStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the history CSV with its header, if missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.as_deref(), cli.test)?;

    info("Initializing craftlog…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }

    let store = HistoryStore::open(cfg.history_path())?;
    info(format!("History     : {}", store.path().display()));

    success(format!(
        "craftlog initialized ({} session(s) in history)",
        store.len()
    ));
    Ok(())
}
