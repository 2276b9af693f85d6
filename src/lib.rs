#![warn(missing_docs)]

//! # egg-timer
//!
//! A small countdown timer for the terminal: a progress bar, the time left,
//! and one button that reads "start", "stop" or "reset" depending on where
//! the countdown is.
//!
//! The crate is split so that everything except drawing is plain data:
//!
//! - [`timer`]: the countdown state machine, advanced by explicit deltas
//! - [`control`]: which button to show and what pressing it does
//! - [`event`]: the event enum and the dispatcher that owns the timer
//! - [`progress`] and [`control::Button`]: the widgets
//! - [`app`]: the [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//!   model that wires terminal input to the dispatcher
//!
//! ```rust
//! use egg_timer::prelude::*;
//! use std::time::{Duration, Instant};
//!
//! let mut shell = Shell::new(Timer::new(Duration::from_secs(3)).unwrap());
//! let t0 = Instant::now();
//! shell.handle(Event::FrameTick { now: t0 });
//! shell.handle(Event::ButtonPressed { control: Control::Start });
//! shell.handle(Event::FrameTick { now: t0 + Duration::from_secs(5) });
//!
//! let frame = shell.frame();
//! assert_eq!(frame.progress, 1.0);
//! assert_eq!(frame.control, Control::Reset);
//! ```

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod event;
pub mod key;
pub mod logging;
pub mod progress;
pub mod timer;

pub use app::{App, DestroyMsg, FrameMsg};
pub use control::{Button, Control};
pub use error::{Error, Result};
pub use event::{Event, Flow, Frame, Shell};
pub use timer::{format_duration, parse_duration, Timer, TimerState};

/// Common imports.
pub mod prelude {
    pub use crate::app::{App, DestroyMsg};
    pub use crate::control::{Button, Control};
    pub use crate::error::{Error, Result};
    pub use crate::event::{Event, Flow, Frame, Shell};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::progress::Model as Progress;
    pub use crate::timer::{Timer, TimerState};
}
