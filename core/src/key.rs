//! Key identifiers seen by a field's keydown handler.

use serde::{Deserialize, Serialize};

/// A key as reported by the host's keydown event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Printable character input
    Char(char),
    /// Left arrow key
    ArrowLeft,
    /// Right arrow key
    ArrowRight,
    /// Up arrow key (increments numeric fields)
    ArrowUp,
    /// Down arrow key (decrements numeric fields)
    ArrowDown,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Anything else, by its DOM name (e.g. "Shift", "Process")
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a [`Key`].
    ///
    /// Single-character names become [`Key::Char`]; unknown names are kept
    /// verbatim in [`Key::Other`].
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Spacebar" => Self::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Char(ch),
                    _ => Self::Other(name.to_string()),
                }
            }
        }
    }

    /// Navigation/editing keys that never count against `maxLength`.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft | Self::ArrowRight | Self::Tab | Self::Delete | Self::Backspace
        )
    }

    /// Step direction for numeric fields: `+1` for up, `-1` for down.
    pub fn step_direction(&self) -> Option<i64> {
        match self {
            Self::ArrowUp => Some(1),
            Self::ArrowDown => Some(-1),
            _ => None,
        }
    }
}
