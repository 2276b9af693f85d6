//! The bubbletea-rs program model.
//!
//! [`App`] is the window: it turns terminal messages into [`Event`]s for the
//! [`Shell`], asks for the next frame only while the timer runs, and draws
//! the title, the progress bar, the time left, the one visible button and a
//! help line.
//!
//! # Running
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use egg_timer::App;
//!
//! # async fn run() -> egg_timer::Result<()> {
//! let program = Program::<App>::builder().alt_screen(true).build()?;
//! let app = program.run().await?;
//! app.into_result()
//! # }
//! ```

use crate::config::{self, Config, WINDOW};
use crate::control::{Button, Control};
use crate::error::{Error, Result};
use crate::event::{Event, Flow, Shell};
use crate::key::KeyMap;
use crate::progress::{self, with_default_gradient, with_width};
use crate::timer::{format_duration, Timer, TimerState};
use bubbletea_rs::{
    quit, tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg,
};
use lipgloss_extras::lipgloss::{Color, Style};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Asks the app to draw one frame.
///
/// Each start of a frame chain bumps the app's tag. Messages carrying an
/// older tag belong to a chain that should have ended and are dropped, so a
/// quick stop/start never leaves two chains ticking.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    id: i64,
    tag: i64,
}

/// Tells the app that the window is going away.
///
/// Quit keys produce the same effect with no error. A message carrying an
/// error makes [`App::into_result`] return [`Error::Shell`], which ends the
/// process with a failure status.
///
/// ```rust
/// use egg_timer::app::{App, DestroyMsg};
/// use egg_timer::timer::Timer;
/// use std::time::Duration;
///
/// let mut app = App::new(Timer::default(), Duration::from_millis(16));
/// let cmd = app.update(Box::new(DestroyMsg::with_error("display lost")));
/// assert!(cmd.is_some());
/// assert!(app.into_result().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DestroyMsg {
    /// Why the window closed, if it did not close normally.
    pub error: Option<String>,
}

impl DestroyMsg {
    /// A destroy message carrying `error`.
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }
}

/// The egg timer window.
#[derive(Debug)]
pub struct App {
    id: i64,
    tag: i64,
    shell: Shell,
    keys: KeyMap,
    bar: progress::Model,
    button: Button,
    frame_interval: Duration,
    exit_error: Option<Error>,
}

impl App {
    /// Creates a window around `timer`, drawing a frame every
    /// `frame_interval` while the timer runs.
    ///
    /// The app starts idle: no frame is scheduled until a control is
    /// pressed.
    pub fn new(timer: Timer, frame_interval: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            shell: Shell::new(timer),
            keys: KeyMap::new(),
            bar: progress::new(&[with_default_gradient(), with_width(i32::from(WINDOW.width))]),
            button: Button::default(),
            frame_interval,
            exit_error: None,
        }
    }

    /// Builds the app from command line options.
    pub fn from_config(config: &Config) -> Self {
        let timer = Timer::new(config.duration).unwrap_or_else(|e| {
            log::warn!("{}, falling back to the default countdown", e);
            Timer::default()
        });
        Self::new(timer, config.frame_interval())
    }

    /// The countdown driven by this window.
    pub fn timer(&self) -> &Timer {
        self.shell.timer()
    }

    /// The error the window closed with, if any.
    pub fn exit_error(&self) -> Option<&Error> {
        self.exit_error.as_ref()
    }

    /// Consumes the app once the program has ended.
    ///
    /// # Errors
    ///
    /// Returns the error carried by the destroy event, unchanged.
    pub fn into_result(self) -> Result<()> {
        match self.exit_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Handles one message from the bubbletea-rs runtime.
    ///
    /// - [`FrameMsg`] advances the timer by the time since the previous
    ///   frame and schedules the next one while the timer runs. Messages
    ///   from another app or an older chain are ignored.
    /// - [`KeyMsg`] presses a control or quits.
    /// - [`WindowSizeMsg`] narrows the progress bar, never past the fixed
    ///   window width.
    /// - [`DestroyMsg`] ends the program.
    ///
    /// # Returns
    ///
    /// The next frame tick, a quit command, or `None` when nothing needs
    /// to be drawn until the next input.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame_msg) = msg.downcast_ref::<FrameMsg>() {
            if frame_msg.id != self.id || frame_msg.tag != self.tag {
                return None;
            }
            let flow = self.shell.handle(Event::FrameTick {
                now: Instant::now(),
            });
            return self.follow(flow);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            let width = size.width.min(WINDOW.width);
            self.bar.set_width(i32::from(width));
            return None;
        }

        if let Some(destroy) = msg.downcast_ref::<DestroyMsg>() {
            return self.destroy(destroy.error.clone());
        }

        None
    }

    fn destroy(&mut self, error: Option<String>) -> Option<Cmd> {
        let flow = self.shell.handle(Event::Destroy { error });
        self.follow(flow)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keys.quit.matches(key_msg) {
            return self.destroy(None);
        }

        let control = if self.keys.press.matches(key_msg) {
            Control::for_timer(self.shell.timer())
        } else if self.keys.start.matches(key_msg) {
            Control::Start
        } else if self.keys.stop.matches(key_msg) {
            Control::Stop
        } else if self.keys.reset.matches(key_msg) {
            Control::Reset
        } else {
            return None;
        };

        // Input is handled inside a frame, so the frame clock never spans
        // the idle time before a press.
        self.shell.handle(Event::FrameTick {
            now: Instant::now(),
        });
        let was_running = self.shell.timer().is_running();
        let flow = self.shell.handle(Event::ButtonPressed { control });

        match flow {
            // A chain is already ticking.
            Flow::Redraw if was_running => None,
            Flow::Redraw => {
                self.tag += 1;
                Some(self.next_frame())
            }
            other => self.follow(other),
        }
    }

    fn follow(&mut self, flow: Flow) -> Option<Cmd> {
        match flow {
            Flow::Redraw => Some(self.next_frame()),
            Flow::Idle => None,
            Flow::Exit(result) => {
                if let Err(e) = result {
                    self.exit_error = Some(e);
                }
                Some(quit())
            }
        }
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.frame_interval, move |_| {
            Box::new(FrameMsg { id, tag }) as Msg
        })
    }

    /// Renders the whole window as a fixed-height block of lines.
    pub fn view(&self) -> String {
        let frame = self.shell.frame();

        let title = Style::new()
            .bold(true)
            .foreground(Color::from("#EE6FF8"))
            .render(WINDOW.title);

        let status = match frame.state {
            TimerState::Idle => format!("ready · {}", format_duration(self.timer().target())),
            TimerState::Running => format!("{} left", format_duration(frame.remaining)),
            TimerState::Paused => format!("paused · {} left", format_duration(frame.remaining)),
            TimerState::Finished => "done!".to_string(),
        };
        let status = Style::new().foreground(Color::from("#A8A8A8")).render(&status);
        let help = Style::new()
            .foreground(Color::from("#626262"))
            .render(&self.keys.short_help());

        let mut lines = vec![
            title,
            String::new(),
            self.bar.view_as(frame.progress),
            status,
            String::new(),
        ];
        lines.extend(self.button.view(frame.control).lines().map(str::to_string));
        lines.push(String::new());
        lines.push(help);

        while lines.len() < usize::from(WINDOW.height) {
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let app = App::from_config(&config::current());
        log::info!(
            "starting {:?} countdown at {:?} per frame",
            app.timer().target(),
            app.frame_interval
        );
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
