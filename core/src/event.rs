//! Field events consumed from the host UI.
//!
//! Each event carries the raw text the host currently shows; the engine never
//! keeps a copy of the field value between events.

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::length::Selection;

/// A single event from a bound input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldEvent {
    /// The field gained focus.
    Focus,
    /// The field's text changed.
    Change {
        /// Live text of the field
        value: String,
    },
    /// A key was pressed.
    KeyDown {
        key: Key,
        /// Whether shift was held
        #[serde(default)]
        shift: bool,
        /// Live text of the field before the key lands
        #[serde(default)]
        value: String,
        /// Current selection in character offsets (see [`Selection::from_utf16`])
        #[serde(default)]
        selection: Option<Selection>,
    },
    /// The field lost focus.
    Blur {
        /// Live text of the field
        value: String,
    },
    /// `compositionstart`
    CompositionStart,
    /// `compositionupdate`
    CompositionUpdate {
        /// Current preedit
        preedit: String,
    },
    /// `compositionend`
    CompositionEnd {
        /// Full field text once the composition is committed
        value: String,
    },
    /// The host replaced the value out-of-band (e.g. re-render with a new
    /// initial value).
    Reset,
}

impl FieldEvent {
    /// Shorthand for a change event.
    pub fn change(value: impl Into<String>) -> Self {
        Self::Change {
            value: value.into(),
        }
    }

    /// Shorthand for a blur event.
    pub fn blur(value: impl Into<String>) -> Self {
        Self::Blur {
            value: value.into(),
        }
    }

    /// Shorthand for a composition-end event.
    pub fn composition_end(value: impl Into<String>) -> Self {
        Self::CompositionEnd {
            value: value.into(),
        }
    }

    /// Shorthand for a keydown without a selection.
    pub fn key_down(key: Key, shift: bool, value: impl Into<String>) -> Self {
        Self::KeyDown {
            key,
            shift,
            value: value.into(),
            selection: None,
        }
    }

    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Change { .. } => "change",
            Self::KeyDown { .. } => "keydown",
            Self::Blur { .. } => "blur",
            Self::CompositionStart => "compositionstart",
            Self::CompositionUpdate { .. } => "compositionupdate",
            Self::CompositionEnd { .. } => "compositionend",
            Self::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = r#"[
            {"type": "focus"},
            {"type": "key_down", "key": {"char": "a"}, "shift": true},
            {"type": "key_down", "key": "arrow_up", "value": "3"},
            {"type": "change", "value": "a"},
            {"type": "composition_end", "value": "あ"}
        ]"#;
        let events: Vec<FieldEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0], FieldEvent::Focus);
        assert_eq!(events[1], FieldEvent::key_down(Key::Char('a'), true, ""));
        assert_eq!(events[2], FieldEvent::key_down(Key::ArrowUp, false, "3"));
        assert_eq!(events[3], FieldEvent::change("a"));
        assert_eq!(events[4], FieldEvent::composition_end("あ"));
    }

    #[test]
    fn test_names() {
        assert_eq!(FieldEvent::Focus.name(), "focus");
        assert_eq!(FieldEvent::blur("").name(), "blur");
        assert_eq!(FieldEvent::Reset.name(), "reset");
    }
}
