//! Events fed into the timer and the dispatcher that handles them.
//!
//! [`Shell`] is the whole render loop minus the drawing: it owns the
//! [`Timer`] and the timestamp of the previous frame, turns frame
//! timestamps into deltas, applies button presses, and tells the caller
//! whether another frame is needed.
//!
//! ```rust
//! use egg_timer::control::Control;
//! use egg_timer::event::{Event, Flow, Shell};
//! use egg_timer::timer::Timer;
//! use std::time::{Duration, Instant};
//!
//! let mut shell = Shell::new(Timer::new(Duration::from_secs(3)).unwrap());
//! let t0 = Instant::now();
//!
//! shell.handle(Event::FrameTick { now: t0 });
//! let flow = shell.handle(Event::ButtonPressed { control: Control::Start });
//! assert!(matches!(flow, Flow::Redraw));
//!
//! shell.handle(Event::FrameTick { now: t0 + Duration::from_secs(1) });
//! assert_eq!(shell.timer().elapsed(), Duration::from_secs(1));
//! ```

use crate::control::Control;
use crate::error::{Error, Result};
use crate::timer::{Timer, TimerState};
use std::time::{Duration, Instant};

/// Something that happened to the window.
#[derive(Debug, Clone)]
pub enum Event {
    /// The shell wants a frame drawn at `now`.
    FrameTick {
        /// When the frame started.
        now: Instant,
    },
    /// A button was clicked.
    ButtonPressed {
        /// The button that was clicked.
        control: Control,
    },
    /// The window is closing, possibly because of an error.
    Destroy {
        /// Set when the window closed abnormally.
        error: Option<String>,
    },
}

/// What the loop should do after an event.
#[derive(Debug)]
pub enum Flow {
    /// Schedule another frame right away.
    Redraw,
    /// Nothing changes until the next input.
    Idle,
    /// Leave the loop.
    Exit(Result<()>),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Fraction of the countdown done, in `[0, 1]`.
    pub progress: f64,
    /// The one button to draw.
    pub control: Control,
    /// Time left until the target.
    pub remaining: Duration,
    /// Where the countdown is.
    pub state: TimerState,
}

/// Single-threaded dispatcher that owns the timer.
#[derive(Debug, Clone)]
pub struct Shell {
    timer: Timer,
    last_frame: Option<Instant>,
}

impl Shell {
    /// Wraps `timer`. The first frame after this has a zero delta.
    pub fn new(timer: Timer) -> Self {
        Self {
            timer,
            last_frame: None,
        }
    }

    /// The timer being driven.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Applies one event and reports what the loop should do next.
    ///
    /// A frame tick advances the timer by the time since the previous tick.
    /// A button press applies the control without touching the clock.
    /// Either returns [`Flow::Redraw`] while the timer runs and
    /// [`Flow::Idle`] otherwise. [`Event::Destroy`] always returns
    /// [`Flow::Exit`], with [`Error::Shell`] if it carried an error.
    pub fn handle(&mut self, event: Event) -> Flow {
        match event {
            Event::FrameTick { now } => {
                // Zero on the first frame and if the clock ever goes backwards.
                let dt = self
                    .last_frame
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or(Duration::ZERO);
                let was_running = self.timer.is_running();
                self.timer.advance(dt);
                self.last_frame = Some(now);

                if was_running && self.timer.is_finished() && !self.timer.is_running() {
                    log::info!("countdown of {:?} finished", self.timer.target());
                }
                self.redraw_flow()
            }
            Event::ButtonPressed { control } => {
                control.apply(&mut self.timer);
                log::debug!(
                    "{} pressed, timer is {:?} at {:?}",
                    control.label(),
                    self.timer.state(),
                    self.timer.elapsed()
                );
                self.redraw_flow()
            }
            Event::Destroy { error } => match error {
                None => {
                    log::info!("window closed");
                    Flow::Exit(Ok(()))
                }
                Some(msg) => {
                    log::error!("window closed with error: {}", msg);
                    Flow::Exit(Err(Error::Shell(msg)))
                }
            },
        }
    }

    /// Snapshot of what to draw for the current timer state.
    pub fn frame(&self) -> Frame {
        Frame {
            progress: self.timer.progress(),
            control: Control::for_timer(&self.timer),
            remaining: self.timer.remaining(),
            state: self.timer.state(),
        }
    }

    fn redraw_flow(&self) -> Flow {
        if self.timer.is_running() {
            Flow::Redraw
        } else {
            Flow::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(Timer::new(Duration::from_secs(3)).unwrap())
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_idle_frames_do_not_redraw() {
        let mut shell = shell();
        let t0 = Instant::now();
        assert!(matches!(shell.handle(Event::FrameTick { now: t0 }), Flow::Idle));
        assert!(matches!(
            shell.handle(Event::FrameTick { now: t0 + secs(5) }),
            Flow::Idle
        ));
        assert_eq!(shell.timer().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_running_frames_accumulate_deltas() {
        let mut shell = shell();
        let t0 = Instant::now();
        shell.handle(Event::FrameTick { now: t0 });
        shell.handle(Event::ButtonPressed {
            control: Control::Start,
        });

        let flow = shell.handle(Event::FrameTick {
            now: t0 + Duration::from_millis(500),
        });
        assert!(matches!(flow, Flow::Redraw));
        let flow = shell.handle(Event::FrameTick {
            now: t0 + Duration::from_millis(1500),
        });
        assert!(matches!(flow, Flow::Redraw));

        assert_eq!(shell.timer().elapsed(), Duration::from_millis(1500));
        let frame = shell.frame();
        assert_eq!(frame.control, Control::Stop);
        assert_eq!(frame.state, TimerState::Running);
        assert!((frame.progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_finishing_frame_goes_idle() {
        let mut shell = shell();
        let t0 = Instant::now();
        shell.handle(Event::FrameTick { now: t0 });
        shell.handle(Event::ButtonPressed {
            control: Control::Start,
        });
        let flow = shell.handle(Event::FrameTick { now: t0 + secs(10) });

        assert!(matches!(flow, Flow::Idle));
        let frame = shell.frame();
        assert_eq!(frame.progress, 1.0);
        assert_eq!(frame.control, Control::Reset);
        assert_eq!(frame.remaining, Duration::ZERO);
    }

    #[test]
    fn test_idle_gap_before_start_is_not_counted() {
        let mut shell = shell();
        let t0 = Instant::now();
        shell.handle(Event::FrameTick { now: t0 });

        // A long pause, then the press arrives inside a fresh frame.
        let press_at = t0 + secs(60);
        shell.handle(Event::FrameTick { now: press_at });
        shell.handle(Event::ButtonPressed {
            control: Control::Start,
        });
        shell.handle(Event::FrameTick {
            now: press_at + Duration::from_millis(100),
        });

        assert_eq!(shell.timer().elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn test_stopped_timer_ignores_time() {
        let mut shell = shell();
        let t0 = Instant::now();
        shell.handle(Event::FrameTick { now: t0 });
        shell.handle(Event::ButtonPressed {
            control: Control::Start,
        });
        shell.handle(Event::FrameTick { now: t0 + secs(1) });
        let flow = shell.handle(Event::ButtonPressed {
            control: Control::Stop,
        });
        assert!(matches!(flow, Flow::Idle));

        shell.handle(Event::FrameTick { now: t0 + secs(11) });
        assert_eq!(shell.timer().elapsed(), secs(1));
        assert_eq!(shell.frame().control, Control::Start);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut shell = shell();
        let t0 = Instant::now() + secs(5);
        shell.handle(Event::FrameTick { now: t0 });
        shell.handle(Event::ButtonPressed {
            control: Control::Start,
        });
        shell.handle(Event::FrameTick { now: t0 - secs(2) });
        assert_eq!(shell.timer().elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_destroy() {
        let mut shell = shell();
        assert!(matches!(
            shell.handle(Event::Destroy { error: None }),
            Flow::Exit(Ok(()))
        ));
        assert!(matches!(
            shell.handle(Event::Destroy {
                error: Some("display lost".to_string())
            }),
            Flow::Exit(Err(Error::Shell(_)))
        ));
    }
}
