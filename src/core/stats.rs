use crate::models::SessionRecord;
use crate::store::{HistoryEvent, HistoryStore};
use crate::utils::date::{same_iso_week, same_month};
use chrono::NaiveDate;
use std::sync::mpsc::Receiver;
use tracing::trace;

/// Aggregates shown on the home screen and by `craftlog stats`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total: usize,
    /// Mean duration in minutes, rounded to two decimals. `0.0` when the
    /// history is empty.
    pub average_minutes: f64,
    pub this_week: usize,
    pub this_month: usize,
}

impl Stats {
    pub fn compute(records: &[SessionRecord], today: NaiveDate) -> Self {
        let total = records.len();

        let (sum_min, sum_sec) = records.iter().fold((0u64, 0u64), |(m, s), r| {
            (m + u64::from(r.minutes), s + u64::from(r.seconds))
        });

        let average_minutes = if total == 0 {
            0.0
        } else {
            let mins = sum_min as f64 + sum_sec as f64 / 60.0;
            (mins / total as f64 * 100.0).round() / 100.0
        };

        let this_week = records
            .iter()
            .filter(|r| same_iso_week(r.date(), today))
            .count();
        let this_month = records
            .iter()
            .filter(|r| same_month(r.date(), today))
            .count();

        Self {
            total,
            average_minutes,
            this_week,
            this_month,
        }
    }
}

/// Memoised [`Stats`] over a [`HistoryStore`].
///
/// The cached value is dropped as soon as the store reports a change, or
/// when asked for a different `today`.
pub struct StatsView {
    changes: Receiver<HistoryEvent>,
    cache: Option<(NaiveDate, Stats)>,
}

impl StatsView {
    pub fn new(store: &mut HistoryStore) -> Self {
        Self {
            changes: store.subscribe(),
            cache: None,
        }
    }

    pub fn stats(&mut self, store: &HistoryStore, today: NaiveDate) -> Stats {
        self.invalidate_on_change();

        match self.cache {
            Some((day, stats)) if day == today => stats,
            _ => {
                let stats = Stats::compute(store.records(), today);
                trace!(?stats, "stats recomputed");
                self.cache = Some((today, stats));
                stats
            }
        }
    }

    pub fn is_cached(&mut self) -> bool {
        self.invalidate_on_change();
        self.cache.is_some()
    }

    fn invalidate_on_change(&mut self) {
        if self.changes.try_iter().count() > 0 {
            self.cache = None;
        }
    }
}
