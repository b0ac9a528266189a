use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsView;
use crate::errors::{AppError, AppResult};
use crate::store::HistoryStore;
use crate::ui::messages::header;
use crate::utils::colors::palette;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { today } = cmd {
        let day = match today {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut store = HistoryStore::open(cfg.history_path())?;
        let mut view = StatsView::new(&mut store);
        let stats = view.stats(&store, day);

        let bullet = palette().info.paint("•");
        header(format!("Statistics ({day})"));
        println!("{bullet} Total sessions:   {}", stats.total);
        println!("{bullet} Average duration: {:.2} min", stats.average_minutes);
        println!("{bullet} This week:        {}", stats.this_week);
        println!("{bullet} This month:       {}", stats.this_month);
    }

    Ok(())
}
