use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::HistoryStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

const NOTE_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let store = HistoryStore::open(cfg.history_path())?;

        if store.is_empty() {
            info("No sessions recorded yet.");
            return Ok(());
        }

        let shown = limit.unwrap_or(store.len()).min(store.len());

        header(format!("History ({} of {})", shown, store.len()));

        let mut table = Table::new(vec![
            Column::right("#", 4),
            Column::left("Date/Time", 19),
            Column::right("Duration", 9),
            Column::left("Note", NOTE_WIDTH),
        ]);

        for (i, record) in store.records().iter().take(shown).enumerate() {
            let note = match &record.note {
                Some(n) => textwrap::wrap(n, NOTE_WIDTH).join("\n"),
                None => colorize_optional(None),
            };

            table.add_row(vec![
                (i + 1).to_string(),
                record.date_time_str(),
                record.duration_label(),
                note,
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
