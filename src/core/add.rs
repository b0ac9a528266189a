use crate::errors::AppResult;
use crate::models::SessionRecord;
use crate::store::HistoryStore;
use chrono::{NaiveDate, NaiveTime};

pub struct AddLogic;

impl AddLogic {
    /// Build a session from its parts and put it at the top of the history.
    pub fn apply(
        store: &mut HistoryStore,
        date: NaiveDate,
        time: NaiveTime,
        minutes: u32,
        seconds: u32,
        note: Option<String>,
    ) -> AppResult<SessionRecord> {
        let record = SessionRecord::new(date.and_time(time), minutes, seconds, note)?;
        store.add(record.clone())?;
        Ok(record)
    }
}
