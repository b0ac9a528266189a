use crate::errors::{AppError, AppResult};
use crate::utils::formatting::duration_label;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Format of the `date_time` column.
pub const DATE_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged session: when it happened, how long it lasted, and an
/// optional free-text note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub timestamp: NaiveDateTime,
    pub minutes: u32,
    pub seconds: u32,
    pub note: Option<String>,
}

impl SessionRecord {
    /// Build a record, rejecting `seconds` outside `0..=59`.
    /// Empty or blank notes are stored as `None`; the timestamp is kept to
    /// whole seconds, as in the file.
    pub fn new(
        timestamp: NaiveDateTime,
        minutes: u32,
        seconds: u32,
        note: Option<String>,
    ) -> AppResult<Self> {
        check_seconds(seconds).map_err(AppError::InvalidDuration)?;

        Ok(Self {
            timestamp: whole_seconds(timestamp),
            minutes,
            seconds,
            note: normalize_note(note),
        })
    }

    /// Split a whole number of elapsed seconds into minutes / seconds.
    pub fn from_elapsed(timestamp: NaiveDateTime, total_secs: u64, note: Option<String>) -> Self {
        Self {
            timestamp: whole_seconds(timestamp),
            minutes: (total_secs / 60) as u32,
            seconds: (total_secs % 60) as u32,
            note: normalize_note(note),
        }
    }

    /// Parse the four CSV fields `date_time, minute, second, note`.
    /// `line` is only used for error reporting.
    pub fn from_fields(fields: &[&str], line: u64) -> AppResult<Self> {
        let invalid = |reason: String| AppError::Validation { line, reason };

        if fields.len() != 4 {
            return Err(invalid(format!(
                "expected 4 fields, found {}",
                fields.len()
            )));
        }

        let timestamp = NaiveDateTime::parse_from_str(fields[0].trim(), DATE_TIME_FMT)
            .map_err(|_| invalid(format!("bad date_time '{}'", fields[0])))?;

        let minutes: u32 = fields[1]
            .trim()
            .parse()
            .map_err(|_| invalid(format!("bad minute '{}'", fields[1])))?;

        let seconds: u32 = fields[2]
            .trim()
            .parse()
            .map_err(|_| invalid(format!("bad second '{}'", fields[2])))?;
        check_seconds(seconds).map_err(invalid)?;

        let note = Some(fields[3].to_string());

        Ok(Self {
            timestamp,
            minutes,
            seconds,
            note: normalize_note(note),
        })
    }

    /// The CSV row for this record, in header order.
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.date_time_str(),
            self.minutes.to_string(),
            self.seconds.to_string(),
            self.note.clone().unwrap_or_default(),
        ]
    }

    pub fn date_time_str(&self) -> String {
        self.timestamp.format(DATE_TIME_FMT).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// "5m 30s"
    pub fn duration_label(&self) -> String {
        duration_label(self.minutes, self.seconds)
    }
}

fn check_seconds(seconds: u32) -> Result<(), String> {
    if seconds > 59 {
        Err(format!("second must be between 0 and 59, got {seconds}"))
    } else {
        Ok(())
    }
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.trim().is_empty())
}

fn whole_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
