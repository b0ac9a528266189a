use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::store::HistoryStore;
use chrono::{NaiveDate, NaiveTime};

/// Fields to change; `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct RecordChanges {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub minutes: Option<u32>,
    pub seconds: Option<u32>,
    /// `Some("")` clears the note.
    pub note: Option<String>,
}

impl RecordChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.minutes.is_none()
            && self.seconds.is_none()
            && self.note.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Replace session `number` (1-based, list order) with the current
    /// values merged with `changes`. Returns `(old, new)`.
    pub fn apply(
        store: &mut HistoryStore,
        number: usize,
        changes: RecordChanges,
    ) -> AppResult<(SessionRecord, SessionRecord)> {
        let index = number
            .checked_sub(1)
            .ok_or(AppError::RecordNotFound(number))?;
        let current = store
            .get(index)
            .ok_or(AppError::RecordNotFound(number))?
            .clone();

        let date = changes.date.unwrap_or(current.timestamp.date());
        let time = changes.time.unwrap_or(current.timestamp.time());
        let note = match changes.note {
            Some(n) => Some(n),
            None => current.note.clone(),
        };

        let updated = SessionRecord::new(
            date.and_time(time),
            changes.minutes.unwrap_or(current.minutes),
            changes.seconds.unwrap_or(current.seconds),
            note,
        )?;

        let old = store.replace(index, updated.clone())?;
        Ok((old, updated))
    }
}
