//! Key bindings for the countdown display.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A key with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
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

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Presses that trigger the action.
    pub keys: Vec<KeyPress>,
    /// Short key hint, e.g. "q".
    pub help: String,
    /// What the action does.
    pub description: String,
}

impl Binding {
    /// Binds the given presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Whether `msg` is one of the bound presses.
    ///
    /// Modifiers must match exactly, so `Alt+q` does not trigger a binding
    /// for plain `q`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == msg.key && msg.modifiers == k.modifiers)
    }

    /// One-line hint such as `q/esc: выход`. Empty when no help is set.
    pub fn help_line(&self) -> String {
        if self.help.is_empty() {
            return String::new();
        }
        format!("{}: {}", self.help, self.description)
    }
}

/// Bindings understood by the display.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Tears the display down and quits the program.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Char('q')),
                KeyPress::from(KeyCode::Esc),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q/esc", "выход"),
        }
    }
}
