//! Application-wide settings. Currently only the colour theme.

use crate::models::Theme;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::debug;

static THEME: AtomicU8 = AtomicU8::new(0);

/// Switch the global theme. Every coloured output path reads it on the
/// next write, so the change is visible immediately.
pub fn apply_theme(theme: Theme) {
    THEME.store(theme.to_u8(), Ordering::Relaxed);
    debug!(theme = %theme, "theme applied");
}

pub fn current_theme() -> Theme {
    Theme::from_u8(THEME.load(Ordering::Relaxed))
}
