//! Formatting utilities used for CLI and timer outputs.

use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// "5m 30s"
pub fn duration_label(minutes: u32, seconds: u32) -> String {
    format!("{}m {}s", minutes, seconds)
}

/// Whole elapsed seconds as "Mm Ss", the string shown by the running clock.
pub fn elapsed_label(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Left-align `s` in a column of `width` terminal cells.
/// Wide characters (CJK notes) count as two cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}
