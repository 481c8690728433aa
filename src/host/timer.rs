//! Stopwatch driven by the timer operations, and elapsed-time formatting.

use crate::error::GfxError;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Unstarted,
    Running { since: Instant },
    Stopped,
}

/// A start/stop/reset stopwatch accumulating elapsed time while running.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    state: TimerState,
    accumulated: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Creates an unstarted stopwatch with zero elapsed time.
    pub fn new() -> Self {
        Self {
            state: TimerState::Unstarted,
            accumulated: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Starts or resumes accumulation. No-op while already running.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Pauses accumulation. Returns `false`, changing nothing, if not running.
    pub fn stop(&mut self) -> bool {
        self.stop_at(Instant::now())
    }

    /// Returns to the unstarted state with zero elapsed time.
    pub fn reset(&mut self) {
        self.state = TimerState::Unstarted;
        self.accumulated = Duration::ZERO;
    }

    /// Total time spent running, including the current run if any.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub(crate) fn start_at(&mut self, now: Instant) {
        if !self.is_running() {
            self.state = TimerState::Running { since: now };
        }
    }

    pub(crate) fn stop_at(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Running { since } => {
                self.accumulated += now.saturating_duration_since(since);
                self.state = TimerState::Stopped;
                true
            }
            TimerState::Unstarted | TimerState::Stopped => false,
        }
    }

    pub(crate) fn elapsed_at(&self, now: Instant) -> Duration {
        match self.state {
            TimerState::Running { since } => self.accumulated + now.saturating_duration_since(since),
            TimerState::Unstarted | TimerState::Stopped => self.accumulated,
        }
    }
}

/// Formats `elapsed` with a composite format string.
///
/// Placeholders `{0}`..`{3}` stand for the hours (0-23), minutes, seconds and
/// milliseconds components. A placeholder may carry a zero-padding
/// specifier, either a run of zeros (`{1:00}`) or `D`/`d` plus a width
/// (`{3:D3}`). `{{` and `}}` produce literal braces.
///
/// # Errors
/// Returns [`GfxError::Format`] for unbalanced braces, indices above 3 or
/// unsupported specifiers.
pub fn format_elapsed(format: &str, elapsed: Duration) -> Result<String, GfxError> {
    let total_secs = elapsed.as_secs();
    let components = [
        (total_secs / 3600) % 24,
        (total_secs / 60) % 60,
        total_secs % 60,
        u64::from(elapsed.subsec_millis()),
    ];

    let error = |reason: &str| GfxError::Format {
        format: format.to_string(),
        reason: reason.to_string(),
    };

    let mut out = String::with_capacity(format.len() + 8);
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut item = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => item.push(ch),
                        None => return Err(error("unterminated placeholder")),
                    }
                }
                let (index, spec) = match item.split_once(':') {
                    Some((index, spec)) => (index, Some(spec)),
                    None => (item.as_str(), None),
                };
                let index: usize = index
                    .trim()
                    .parse()
                    .map_err(|_| error("placeholder index is not a number"))?;
                let value = *components
                    .get(index)
                    .ok_or_else(|| error("placeholder index out of range"))?;
                let width = match spec {
                    None => 0,
                    Some(spec) => pad_width(spec).ok_or_else(|| error("unsupported specifier"))?,
                };
                if width > MAX_PAD_WIDTH {
                    return Err(error("padding width too large"));
                }
                out.push_str(&format!("{value:0width$}"));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '}' => return Err(error("unmatched '}'")),
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Widest zero padding a placeholder may ask for.
const MAX_PAD_WIDTH: usize = 32;

/// Minimum digit count for a numeric specifier: `00` → 2, `D3` → 3.
fn pad_width(spec: &str) -> Option<usize> {
    if !spec.is_empty() && spec.chars().all(|c| c == '0') {
        return Some(spec.len());
    }
    let digits = spec.strip_prefix('D').or_else(|| spec.strip_prefix('d'))?;
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}
