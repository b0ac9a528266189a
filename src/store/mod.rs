//! The history store: the ordered list of session records and its CSV
//! backing file.
//!
//! Every mutation rewrites the whole file and then notifies subscribers.
//! If the rewrite fails the in-memory list is restored, so memory and
//! disk never disagree.

pub mod csv_io;
pub mod events;

pub use events::HistoryEvent;

use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use csv_io::{read_records, write_records};
use events::Notifier;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use tracing::{debug, info};

pub struct HistoryStore {
    path: PathBuf,
    records: Vec<SessionRecord>,
    notifier: Notifier,
}

impl HistoryStore {
    /// Load the history at `path`.
    ///
    /// A missing (or zero-length) file is an empty history; the file is
    /// created with the default header.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let is_blank = fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(false);

        let records = if is_blank {
            Vec::new()
        } else {
            match read_records(&path) {
                Ok(records) => records,
                Err(AppError::FileNotFound(_)) => {
                    info!(path = %path.display(), "history file missing, creating it");
                    Vec::new()
                }
                Err(e) => return Err(e),
            }
        };

        let store = Self {
            path,
            records,
            notifier: Notifier::default(),
        };

        if is_blank || !store.path.exists() {
            store.save()?;
        }

        debug!(path = %store.path.display(), count = store.records.len(), "history loaded");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in display order, newest first.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&SessionRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Receive a [`HistoryEvent`] after every successful mutation.
    pub fn subscribe(&mut self) -> Receiver<HistoryEvent> {
        self.notifier.subscribe()
    }

    /// Insert at the front of the list.
    pub fn add(&mut self, record: SessionRecord) -> AppResult<()> {
        let previous = self.records.clone();
        self.records.insert(0, record);
        self.commit(previous, HistoryEvent::Added)
    }

    /// Replace the record at `index` with `record`. Returns the old one.
    pub fn replace(&mut self, index: usize, record: SessionRecord) -> AppResult<SessionRecord> {
        if index >= self.records.len() {
            return Err(AppError::RecordNotFound(index + 1));
        }

        let previous = self.records.clone();
        let old = std::mem::replace(&mut self.records[index], record);
        self.commit(previous, HistoryEvent::Replaced { index })?;
        Ok(old)
    }

    /// Remove the record at `index`. Returns it.
    pub fn delete(&mut self, index: usize) -> AppResult<SessionRecord> {
        if index >= self.records.len() {
            return Err(AppError::RecordNotFound(index + 1));
        }

        let previous = self.records.clone();
        let removed = self.records.remove(index);
        self.commit(previous, HistoryEvent::Deleted { index })?;
        Ok(removed)
    }

    /// Remove every record. Returns how many were removed.
    pub fn delete_all(&mut self) -> AppResult<usize> {
        let previous = std::mem::take(&mut self.records);
        let count = previous.len();
        self.commit(previous, HistoryEvent::Cleared)?;
        Ok(count)
    }

    /// Write the full current list to `path`. The store is not modified.
    pub fn export(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        write_records(path, &self.records)?;
        info!(path = %path.display(), count = self.records.len(), "history exported");
        Ok(())
    }

    /// Append every row of `path` to the end of the list.
    ///
    /// All rows are validated before any is added: on error the list and
    /// the backing file are left untouched. Returns the number imported.
    pub fn import(&mut self, path: impl AsRef<Path>) -> AppResult<usize> {
        let path = path.as_ref();
        let incoming = read_records(path)?;
        let count = incoming.len();

        let previous = self.records.clone();
        self.records.extend(incoming);
        self.commit(previous, HistoryEvent::Imported { count })?;

        info!(path = %path.display(), count, "history imported");
        Ok(count)
    }

    /// Rewrite the backing file from the in-memory list.
    pub fn save(&self) -> AppResult<()> {
        write_records(&self.path, &self.records)
    }

    fn commit(&mut self, previous: Vec<SessionRecord>, event: HistoryEvent) -> AppResult<()> {
        if let Err(e) = self.save() {
            self.records = previous;
            return Err(e);
        }

        debug!(?event, count = self.records.len(), "history saved");
        self.notifier.notify(event);
        Ok(())
    }
}
