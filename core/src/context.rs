//! Field context for host communication.
//!
//! The `FieldContext` struct is a simple data container with public fields.
//! After handing an event to the controller, the host reads these fields to
//! update the input element and notify its own business logic.
//!
//! Zero abstraction: no callbacks, no traits. The host decides how to apply the
//! write-back (set `.value`, call `preventDefault()`, select the text).

use serde::{Deserialize, Serialize};

/// Payload for the host-level `onChange`/`onBlur` handler.
///
/// Always carries the corrected value, never the raw keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Callback {
    /// Fire the host `onChange` handler
    Change { value: String },
    /// Fire the host `onBlur` handler
    Blur { value: String },
}

impl Callback {
    /// The corrected value carried by the payload.
    pub fn value(&self) -> &str {
        match self {
            Self::Change { value } | Self::Blur { value } => value,
        }
    }
}

/// Outcome of one field event.
///
/// # Fields
///
/// - `value`: text to write into the field (`None` leaves the field alone)
/// - `select_all`: select the whole value (focus)
/// - `prevent_default`: cancel the browser's default action (vetoed
///   keystroke, or an arrow key already handled as a numeric step)
/// - `callback`: payload for the host-level handler, if one should fire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub select_all: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub prevent_default: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

impl FieldContext {
    /// Nothing to do; the event is left to the host's defaults.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Cancel the default action without touching the value.
    pub fn veto() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }

    /// Write `value` back and fire `onChange` with it.
    pub fn changed(value: String) -> Self {
        Self {
            callback: Some(Callback::Change {
                value: value.clone(),
            }),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Write `value` back and fire `onBlur` with it.
    pub fn blurred(value: String) -> Self {
        Self {
            callback: Some(Callback::Blur {
                value: value.clone(),
            }),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Whether the host has to do anything at all.
    pub fn is_noop(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the write-back to a host-side value.
    pub fn apply_to(&self, display: &mut String) {
        if let Some(value) = &self.value {
            display.clone_from(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_is_noop() {
        assert!(FieldContext::pass().is_noop());
        assert!(!FieldContext::veto().is_noop());
    }

    #[test]
    fn test_changed_carries_value_in_callback() {
        let ctx = FieldContext::changed("12".to_string());
        assert_eq!(ctx.value.as_deref(), Some("12"));
        assert_eq!(ctx.callback.as_ref().map(Callback::value), Some("12"));
    }

    #[test]
    fn test_apply_to() {
        let mut display = "old".to_string();
        FieldContext::pass().apply_to(&mut display);
        assert_eq!(display, "old");
        FieldContext::blurred("new".to_string()).apply_to(&mut display);
        assert_eq!(display, "new");
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_string(&FieldContext::veto()).unwrap();
        assert_eq!(json, r#"{"prevent_default":true}"#);
    }
}
