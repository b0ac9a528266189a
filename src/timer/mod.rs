//! Stopwatch state machine.
//!
//! The timer never reads the clock itself: every operation takes the
//! current `Instant`, so the caller's event loop drives it and tests can
//! simulate time.

pub mod screen;

use crate::models::SessionRecord;
use crate::utils::formatting::elapsed_label;
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

/// How often the screen loop wakes up to refresh the clock.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
    Paused,
}

/// Anything that can show the running clock.
pub trait TimerDisplay {
    fn show(&mut self, text: &str);
}

pub struct Timer {
    phase: Phase,
    elapsed: Duration,
    last_tick: Option<Instant>,
    display: Option<Box<dyn TimerDisplay>>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Stopped,
            elapsed: Duration::ZERO,
            last_tick: None,
            display: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    pub fn attach_display(&mut self, display: Box<dyn TimerDisplay>) {
        self.display = Some(display);
    }

    pub fn detach_display(&mut self) -> Option<Box<dyn TimerDisplay>> {
        self.display.take()
    }

    /// Stopped → Running. Elapsed time starts again from zero.
    /// Ignored when a session is already in progress.
    pub fn start(&mut self, now: Instant) {
        if self.phase != Phase::Stopped {
            return;
        }
        self.phase = Phase::Running;
        self.elapsed = Duration::ZERO;
        self.last_tick = Some(now);
        debug!("timer started");
        self.refresh();
    }

    /// Running → Paused. Time up to `now` is kept.
    pub fn pause(&mut self, now: Instant) {
        if self.phase != Phase::Running {
            return;
        }
        self.accumulate(now);
        self.phase = Phase::Paused;
        debug!(elapsed = ?self.elapsed, "timer paused");
    }

    /// Paused → Running. The paused interval is not counted.
    pub fn resume(&mut self, now: Instant) {
        if self.phase != Phase::Paused {
            return;
        }
        self.last_tick = Some(now);
        self.phase = Phase::Running;
        debug!(elapsed = ?self.elapsed, "timer resumed");
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.phase {
            Phase::Running => self.pause(now),
            Phase::Paused => self.resume(now),
            Phase::Stopped => {}
        }
    }

    /// Accumulate time since the last tick and refresh the display.
    /// Does nothing unless running.
    pub fn tick(&mut self, now: Instant) {
        if self.phase != Phase::Running {
            return;
        }
        self.accumulate(now);
        self.refresh();
    }

    /// Running/Paused → Stopped. Returns the finished session stamped
    /// `at`, or `None` when nothing was running.
    pub fn stop(
        &mut self,
        now: Instant,
        at: NaiveDateTime,
        note: Option<String>,
    ) -> Option<SessionRecord> {
        match self.phase {
            Phase::Stopped => return None,
            Phase::Running => self.accumulate(now),
            Phase::Paused => {}
        }

        let record = SessionRecord::from_elapsed(at, self.elapsed.as_secs(), note);
        debug!(minutes = record.minutes, seconds = record.seconds, "timer stopped");

        self.phase = Phase::Stopped;
        self.elapsed = Duration::ZERO;
        self.last_tick = None;
        Some(record)
    }

    /// Drop the current session without producing a record.
    pub fn discard(&mut self) {
        self.phase = Phase::Stopped;
        self.elapsed = Duration::ZERO;
        self.last_tick = None;
    }

    fn accumulate(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            self.elapsed += now.saturating_duration_since(last);
        }
        self.last_tick = Some(now);
    }

    fn refresh(&mut self) {
        if let Some(display) = self.display.as_mut() {
            display.show(&elapsed_label(self.elapsed));
        }
    }
}

/// Cooperative stop signal for the screen loop. Cloning shares the flag.
#[derive(Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
