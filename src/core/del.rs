use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::store::HistoryStore;
use tracing::info;

pub enum Deleted {
    One(SessionRecord),
    All(usize),
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete session `number` (1-based, list order), or every session
    /// when `number` is `None`.
    pub fn apply(store: &mut HistoryStore, number: Option<usize>) -> AppResult<Deleted> {
        match number {
            Some(n) => {
                let index = n.checked_sub(1).ok_or(AppError::RecordNotFound(n))?;
                let removed = store.delete(index)?;
                info!(number = n, at = %removed.date_time_str(), "session deleted");
                Ok(Deleted::One(removed))
            }
            None => {
                let count = store.delete_all()?;
                info!(count, "history cleared");
                Ok(Deleted::All(count))
            }
        }
    }
}
