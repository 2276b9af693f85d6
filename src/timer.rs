//! Countdown state machine.
//!
//! A [`Timer`] counts elapsed time up towards a fixed target. It does no I/O
//! and never reads the clock: the caller measures the time between frames and
//! feeds it in through [`Timer::advance`]. This keeps the countdown fully
//! deterministic and easy to test.
//!
//! # Basic Usage
//!
//! ```rust
//! use egg_timer::timer::Timer;
//! use std::time::Duration;
//!
//! let mut timer = Timer::new(Duration::from_secs(3)).unwrap();
//! timer.start();
//! timer.advance(Duration::from_secs(1));
//!
//! assert!(timer.is_running());
//! assert!((timer.progress() - 1.0 / 3.0).abs() < 1e-9);
//!
//! // Overshooting the target clamps and stops the timer.
//! timer.advance(Duration::from_secs(5));
//! assert!(timer.is_finished());
//! assert!(!timer.is_running());
//! assert_eq!(timer.elapsed(), Duration::from_secs(3));
//! ```
//!
//! # States
//!
//! | State      | elapsed            | running |
//! |------------|--------------------|---------|
//! | `Idle`     | zero               | false   |
//! | `Running`  | below target       | true    |
//! | `Paused`   | between 0 and target | false |
//! | `Finished` | equal to target    | false   |

use crate::error::{Error, Result};
use std::time::Duration;

/// Countdown length used when none is configured.
pub const DEFAULT_TARGET: Duration = Duration::from_secs(3);

/// The phase a [`Timer`] is in, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Nothing has elapsed and the timer is stopped.
    Idle,
    /// The timer accumulates time on every advance.
    Running,
    /// Stopped part way through.
    Paused,
    /// Elapsed time reached the target. Only a reset leaves this state.
    Finished,
}

/// A countdown towards a fixed target duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    elapsed: Duration,
    target: Duration,
    running: bool,
}

impl Timer {
    /// Creates a stopped timer with nothing elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroTarget`] when `target` is zero, since progress
    /// would be undefined.
    pub fn new(target: Duration) -> Result<Self> {
        if target.is_zero() {
            return Err(Error::ZeroTarget);
        }
        Ok(Self {
            elapsed: Duration::ZERO,
            target,
            running: false,
        })
    }

    /// Sets the running flag.
    ///
    /// This does not check whether the timer already finished. A finished
    /// timer that is started reports `is_running() == true` until the next
    /// [`advance`](Self::advance), which clamps it back to stopped.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Clears the running flag, keeping the elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns to the idle state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Whether the timer accumulates time on advance.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the elapsed time reached the target.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.target
    }

    /// Fraction of the target that has elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.elapsed.as_secs_f64() / self.target.as_secs_f64()
    }

    /// Adds `dt` to the elapsed time if the timer is running.
    ///
    /// Reaching or passing the target clamps elapsed to the target and stops
    /// the timer. The timer never overshoots and never restarts by itself.
    pub fn advance(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.target {
            self.elapsed = self.target;
            self.running = false;
        }
    }

    /// Time accumulated since the last reset.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The countdown length this timer was built with.
    pub fn target(&self) -> Duration {
        self.target
    }

    /// Time left until the target is reached.
    pub fn remaining(&self) -> Duration {
        self.target.saturating_sub(self.elapsed)
    }

    /// The current phase of the state machine.
    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.is_finished() {
            TimerState::Finished
        } else if self.elapsed.is_zero() {
            TimerState::Idle
        } else {
            TimerState::Paused
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            target: DEFAULT_TARGET,
            running: false,
        }
    }
}

/// Formats a duration as a short human label.
///
/// - `0s` for zero
/// - `250ms` below one second
/// - `2.5s` below one minute, with the tenths dropped when they are zero
/// - `1m30s`, `2m`, `1h5m` above that
///
/// ```rust
/// use egg_timer::timer::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::ZERO), "0s");
/// assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
/// assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
/// ```
pub fn format_duration(d: Duration) -> String {
    let total_nanos = d.as_nanos();

    if total_nanos == 0 {
        return "0s".to_string();
    }
    if total_nanos < 1_000 {
        return format!("{}ns", total_nanos);
    }
    if total_nanos < 1_000_000 {
        return format!("{}µs", d.as_micros());
    }
    if total_nanos < 1_000_000_000 {
        return format!("{}ms", d.as_millis());
    }

    let secs = d.as_secs();
    if secs < 60 {
        let tenths = d.subsec_millis() / 100;
        return if tenths == 0 {
            format!("{}s", secs)
        } else {
            format!("{}.{}s", secs, tenths)
        };
    }

    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 {
        out.push_str(&format!("{}s", seconds));
    }
    out
}

/// Parses a duration such as `3s`, `250ms`, `1m30s`, `1.5h` or a bare
/// number of seconds.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] for empty input, unknown units,
/// negative or non-finite numbers.
///
/// ```rust
/// use egg_timer::timer::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
/// assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
/// assert!(parse_duration("soon").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration> {
    let s = input.trim();
    let invalid = || Error::InvalidDuration(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(secs) = s.parse::<f64>() {
        return seconds_to_duration(secs).ok_or_else(invalid);
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(invalid)?;
        if number_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..number_len].parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let secs = match &rest[..unit_len] {
            "ms" => value / 1000.0,
            "s" => value,
            "m" => value * 60.0,
            "h" => value * 3600.0,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_len..];

        let part = seconds_to_duration(secs).ok_or_else(invalid)?;
        total = total.checked_add(part).ok_or_else(invalid)?;
    }

    Ok(total)
}

fn seconds_to_duration(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}
