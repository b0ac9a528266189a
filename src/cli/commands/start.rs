use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::HistoryStore;
use crate::timer::{Shutdown, screen};
use crate::ui::messages::{info, success, warning};

/// Open the stopwatch screen.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { note } = cmd {
        let mut store = HistoryStore::open(cfg.history_path())?;

        let outcome = screen::run(&mut store, note.clone(), Shutdown::new())?;

        if outcome.discarded {
            warning("A running session was discarded on exit.");
        }

        match outcome.saved {
            0 => info("No session recorded."),
            n => success(format!("{n} session(s) recorded.")),
        }
    }

    Ok(())
}
