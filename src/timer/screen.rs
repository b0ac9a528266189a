//! Interactive timer screen (`craftlog start`).
//!
//! Single-threaded: the loop waits on terminal input with a
//! [`POLL_INTERVAL`] timeout and ticks the timer on every wake-up, so the
//! clock refreshes at least twice a second without a second thread.

use super::{POLL_INTERVAL, Phase, Shutdown, Timer, TimerDisplay};
use crate::core::stats::StatsView;
use crate::errors::{AppError, AppResult};
use crate::store::HistoryStore;
use crate::utils::colors::palette;
use crate::utils::date::today;
use crate::utils::formatting::elapsed_label;
use chrono::Local;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::warn;

const TITLE_ROW: u16 = 0;
const STATUS_ROW: u16 = 2;
const NOTE_ROW: u16 = 4;
const STATS_ROW: u16 = 5;
const HELP_ROW: u16 = 7;
const MESSAGE_ROW: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    TogglePause,
    Stop,
    Quit,
}

/// Map a key press to a timer action, given the current phase.
pub fn action_for(key: KeyEvent, phase: Phase) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match (key.code, phase) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Enter | KeyCode::Char('s'), Phase::Stopped) => Some(Action::Start),
        (KeyCode::Char(' ') | KeyCode::Char('p'), Phase::Running | Phase::Paused) => {
            Some(Action::TogglePause)
        }
        (KeyCode::Enter | KeyCode::Char('e'), Phase::Running | Phase::Paused) => {
            Some(Action::Stop)
        }
        _ => None,
    }
}

/// What happened while the screen was open.
#[derive(Debug, Default)]
pub struct ScreenOutcome {
    pub saved: usize,
    /// A session was still in progress when the screen closed.
    pub discarded: bool,
}

/// Raw mode + alternate screen for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> AppResult<Self> {
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Writes the clock on its own row of the screen.
struct StatusLine {
    row: u16,
}

impl TimerDisplay for StatusLine {
    fn show(&mut self, text: &str) {
        let mut out = io::stdout();
        let painted = palette().accent.paint(text).to_string();
        let res = queue!(
            out,
            MoveTo(2, self.row),
            Clear(ClearType::CurrentLine),
            Print(painted)
        )
        .and_then(|_| out.flush());

        if let Err(e) = res {
            warn!(error = %e, "failed to refresh the clock");
        }
    }
}

/// Run the screen until the user quits or `shutdown` is requested.
/// Each stopped session is added to `store`.
pub fn run(
    store: &mut HistoryStore,
    note: Option<String>,
    shutdown: Shutdown,
) -> AppResult<ScreenOutcome> {
    let mut stats_view = StatsView::new(store);
    let mut timer = Timer::new();
    timer.attach_display(Box::new(StatusLine { row: STATUS_ROW }));

    let mut outcome = ScreenOutcome::default();
    let mut message = String::new();

    let _guard = TerminalGuard::enter()?;
    draw(&timer, store, &mut stats_view, note.as_deref(), &message)?;

    while !shutdown.is_requested() {
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key, timer.phase())
        {
            let now = Instant::now();
            match action {
                Action::Start => timer.start(now),
                Action::TogglePause => timer.toggle_pause(now),
                Action::Stop => {
                    let at = Local::now().naive_local();
                    if let Some(record) = timer.stop(now, at, note.clone()) {
                        let label = record.duration_label();
                        message = match store.add(record) {
                            Ok(()) => {
                                outcome.saved += 1;
                                palette()
                                    .success
                                    .paint(format!("Saved session: {label}"))
                                    .to_string()
                            }
                            Err(e) => palette()
                                .error
                                .paint(format!("Save failed: {e}"))
                                .to_string(),
                        };
                    }
                }
                Action::Quit => shutdown.request(),
            }
            draw(&timer, store, &mut stats_view, note.as_deref(), &message)?;
        }

        timer.tick(Instant::now());
    }

    if timer.is_running() {
        timer.discard();
        outcome.discarded = true;
    }

    Ok(outcome)
}

fn draw(
    timer: &Timer,
    store: &HistoryStore,
    stats_view: &mut StatsView,
    note: Option<&str>,
    message: &str,
) -> AppResult<()> {
    let pal = palette();
    let stats = stats_view.stats(store, today());

    let status = match timer.phase() {
        Phase::Stopped => "Ready".to_string(),
        Phase::Running => elapsed_label(timer.elapsed()),
        Phase::Paused => format!("{} (paused)", elapsed_label(timer.elapsed())),
    };

    let help = match timer.phase() {
        Phase::Stopped => "[Enter/s] start   [q] quit",
        Phase::Running => "[Space/p] pause   [Enter/e] end   [q] quit",
        Phase::Paused => "[Space/p] resume  [Enter/e] end   [q] quit",
    };

    let stats_line = format!(
        "Total {}  ·  Avg {:.2} min  ·  This week {}  ·  This month {}",
        stats.total, stats.average_minutes, stats.this_week, stats.this_month
    );

    let mut out = io::stdout();
    queue!(out, Clear(ClearType::All))?;
    queue!(
        out,
        MoveTo(0, TITLE_ROW),
        Print(pal.accent.paint("craftlog · 记录新的手艺活").to_string())
    )?;
    queue!(
        out,
        MoveTo(2, STATUS_ROW),
        Print(pal.accent.paint(status).to_string())
    )?;
    queue!(
        out,
        MoveTo(0, NOTE_ROW),
        Print(format!("Note: {}", note.unwrap_or("-")))
    )?;
    queue!(
        out,
        MoveTo(0, STATS_ROW),
        Print(pal.muted.paint(stats_line).to_string())
    )?;
    queue!(out, MoveTo(0, HELP_ROW), Print(help))?;
    if !message.is_empty() {
        queue!(out, MoveTo(0, MESSAGE_ROW), Print(message))?;
    }
    out.flush()?;
    Ok(())
}
