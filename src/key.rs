//! Key bindings for the timer controls.
//!
//! A [`Binding`] ties one action to the keys that trigger it and carries
//! the text shown in the help line. [`KeyMap`] holds every binding the
//! timer window understands.
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use egg_timer::key::KeyMap;
//!
//! let keys = KeyMap::new();
//! let enter = KeyMsg {
//!     key: KeyCode::Enter,
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(keys.press.matches(&enter));
//! assert!(!keys.quit.matches(&enter));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A key code plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// One action and the keys that trigger it.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Any of these triggers the binding.
    pub keys: Vec<KeyPress>,
    /// Short key name for the help line, e.g. `enter`.
    pub help: String,
    /// What the key does, e.g. `start`.
    pub description: String,
}

impl Binding {
    /// Creates a binding for `keys` with empty help text.
    ///
    /// Accepts bare [`KeyCode`]s or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the key name shown in the help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Sets the action text shown in the help line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether `key_msg` is one of this binding's keys.
    ///
    /// Modifiers must match exactly, so `ctrl+s` does not trigger a plain
    /// `s` binding. Shift is ignored on both sides.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        let held = key_msg.modifiers - KeyModifiers::SHIFT;
        self.keys
            .iter()
            .any(|k| k.code == key_msg.key && k.modifiers - KeyModifiers::SHIFT == held)
    }
}

/// Every binding the timer understands.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Activates whichever control is on screen.
    pub press: Binding,
    /// Starts the countdown.
    pub start: Binding,
    /// Pauses the countdown.
    pub stop: Binding,
    /// Returns to zero.
    pub reset: Binding,
    /// Closes the window.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            press: Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter")
                .with_description("press"),
            start: Binding::new(vec![KeyCode::Char('s')])
                .with_help("s")
                .with_description("start"),
            stop: Binding::new(vec![KeyCode::Char('p')])
                .with_help("p")
                .with_description("stop"),
            reset: Binding::new(vec![KeyCode::Char('r')])
                .with_help("r")
                .with_description("reset"),
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Char('q')),
                KeyPress::from(KeyCode::Esc),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q")
            .with_description("quit"),
        }
    }
}

impl KeyMap {
    /// The default bindings: enter/space, `s`, `p`, `r`, and `q`/esc/ctrl+c.
    pub fn new() -> Self {
        Self::default()
    }

    /// All bindings in help-line order.
    pub fn bindings(&self) -> [&Binding; 5] {
        [&self.press, &self.start, &self.stop, &self.reset, &self.quit]
    }

    /// One line of `key description` pairs separated by bullets.
    pub fn short_help(&self) -> String {
        self.bindings()
            .iter()
            .map(|b| format!("{} {}", b.help, b.description))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
