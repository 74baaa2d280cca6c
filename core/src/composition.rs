//! IME composition buffering.
//!
//! While an IME session is open the field shows a preedit that is not yet real
//! text, and the host must not write into the field. When the session ends the
//! composed text is parked here until the next change or blur picks it up,
//! because composition-end and change events do not carry consistent text in
//! every input source.

use serde::{Deserialize, Serialize};

/// Signals that drive the composition buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionSignal {
    /// `compositionstart`
    Start,
    /// `compositionupdate` with the current preedit
    Update(String),
    /// `compositionend` with the finally composed field text
    End(String),
    /// A change/blur cycle used the committed text
    Consume,
    /// The host replaced the value out-of-band
    Reset,
}

/// Composition buffer state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum CompositionState {
    /// No IME session in progress
    #[default]
    Idle,
    /// An IME candidate window is open; the field must not be overwritten
    Composing {
        /// In-progress candidate text
        preedit: String,
    },
    /// The session ended; `text` waits for the next change/blur
    Committed {
        /// Text handed over by `compositionend`
        text: String,
    },
}

impl CompositionState {
    /// Pure transition function.
    pub fn apply(self, signal: CompositionSignal) -> Self {
        use CompositionSignal as S;
        match (self, signal) {
            (_, S::Start) => Self::Composing {
                preedit: String::new(),
            },
            (Self::Composing { .. }, S::Update(preedit)) => Self::Composing { preedit },
            // An update outside a session carries nothing worth keeping
            (state, S::Update(_)) => state,
            // Some sources fire compositionend without a start; still commit
            (_, S::End(text)) => Self::Committed { text },
            (_, S::Consume) | (_, S::Reset) => Self::Idle,
        }
    }

    /// Apply `signal` in place.
    pub fn advance(&mut self, signal: CompositionSignal) {
        let state = std::mem::take(self);
        *self = state.apply(signal);
    }

    /// Whether an IME session is open.
    pub fn is_composing(&self) -> bool {
        matches!(self, Self::Composing { .. })
    }

    /// Whether committed text is waiting to be consumed.
    pub fn has_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// The in-progress preedit, if composing.
    pub fn preedit(&self) -> Option<&str> {
        match self {
            Self::Composing { preedit } => Some(preedit),
            _ => None,
        }
    }

    /// Take the committed text and return to `Idle`.
    ///
    /// Leaves any other state untouched and returns `None`.
    pub fn take_committed(&mut self) -> Option<String> {
        if !self.has_committed() {
            return None;
        }
        match std::mem::take(self) {
            Self::Committed { text } => Some(text),
            _ => None,
        }
    }
}
