//! The start, stop and reset buttons.
//!
//! Only one button is ever on screen. [`Control::for_timer`] picks it from
//! the timer state: "stop" while running, "reset" once finished, "start"
//! otherwise.

use crate::timer::Timer;
use lipgloss::{Color, Style};
use lipgloss_extras::lipgloss;

/// A button the user can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Starts or resumes the countdown.
    Start,
    /// Pauses the countdown, keeping the elapsed time.
    Stop,
    /// Clears the elapsed time and stops.
    Reset,
}

impl Control {
    /// The single control to display for the timer's current state.
    pub fn for_timer(timer: &Timer) -> Self {
        if timer.is_running() {
            Control::Stop
        } else if timer.is_finished() {
            Control::Reset
        } else {
            Control::Start
        }
    }

    /// Text drawn on the button.
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "start",
            Control::Stop => "stop",
            Control::Reset => "reset",
        }
    }

    /// Runs the matching timer operation.
    pub fn apply(self, timer: &mut Timer) {
        match self {
            Control::Start => timer.start(),
            Control::Stop => timer.stop(),
            Control::Reset => timer.reset(),
        }
    }

    fn color(self) -> &'static str {
        match self {
            Control::Start => "#04B575",
            Control::Stop => "#FF5F87",
            Control::Reset => "#7571F9",
        }
    }
}

/// Renders a [`Control`] as a bordered button.
#[derive(Debug, Clone)]
pub struct Button {
    /// Inner width of the button; the label is centered in it.
    pub width: usize,
}

impl Button {
    /// A button whose label area is `width` cells wide.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Draws `control` with its label centered and its own border color.
    pub fn view(&self, control: Control) -> String {
        let label = control.label();
        let slack = self.width.saturating_sub(label.len());
        let left = slack / 2;
        let text = format!(
            "{}{}{}",
            " ".repeat(left),
            label,
            " ".repeat(slack - left)
        );

        Style::new()
            .bold(true)
            .foreground(Color::from(control.color()))
            .border_style(lipgloss::normal_border())
            .border_foreground(Color::from(control.color()))
            .padding(0, 1, 0, 1)
            .render(&text)
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new(12)
    }
}
