//! Input controller: one field, one stream of events.
//!
//! The `InputController` owns the field's `FieldConfig`, its composition
//! buffer and the shift state of the last key event. It never keeps the field
//! value; every event carries the live text and `handle()` returns what the
//! host should write back.
//!
//! Event routing:
//! - focus: select the whole value
//! - change: normalize (buffered composition text first), unless composing
//! - keydown: numeric stepping, max-length veto
//! - composition start/update/end: buffer transitions only
//! - blur: normalize, resolve a lone sign, clamp into `[min, max]`

use tracing::{debug, trace};

use crate::composition::{CompositionSignal, CompositionState};
use crate::context::{Callback, FieldContext};
use crate::event::FieldEvent;
use crate::key::Key;
use crate::length::{truncate_to_max_length, would_overflow, Selection};
use crate::numeric::{canonicalize_number, clamp_integer, resolve_lone_sign, step_integer};
use crate::{normalize, FieldConfig, NullBehavior};

/// Event-driven normalization for a single field.
#[derive(Debug, Clone)]
pub struct InputController {
    /// Read-only after construction
    config: FieldConfig,

    /// IME composition buffer
    composition: CompositionState,

    /// Shift state captured from the most recent keydown
    shift: bool,
}

impl InputController {
    /// Attach a controller to a field with the given configuration.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            composition: CompositionState::Idle,
            shift: false,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn composition(&self) -> &CompositionState {
        &self.composition
    }

    /// Shift state from the most recent keydown.
    pub fn shift_held(&self) -> bool {
        self.shift
    }

    /// Drop any composition state, e.g. after the host replaced the value.
    pub fn reset(&mut self) {
        self.composition.advance(CompositionSignal::Reset);
    }

    /// Process one field event.
    ///
    /// This is the main entry point. The host applies the returned
    /// [`FieldContext`] before dispatching the next event.
    pub fn handle(&mut self, event: FieldEvent) -> FieldContext {
        trace!(event = event.name(), composition = ?self.composition, "field event");

        match event {
            FieldEvent::Focus => FieldContext {
                select_all: true,
                ..FieldContext::default()
            },
            FieldEvent::Change { value } => self.on_change(value),
            FieldEvent::KeyDown {
                key,
                shift,
                value,
                selection,
            } => self.on_key_down(key, shift, &value, selection),
            FieldEvent::Blur { value } => self.on_blur(value),
            FieldEvent::CompositionStart => {
                self.composition.advance(CompositionSignal::Start);
                FieldContext::pass()
            }
            FieldEvent::CompositionUpdate { preedit } => {
                self.composition.advance(CompositionSignal::Update(preedit));
                FieldContext::pass()
            }
            FieldEvent::CompositionEnd { value } => {
                self.composition.advance(CompositionSignal::End(value));
                FieldContext::pass()
            }
            FieldEvent::Reset => {
                self.reset();
                FieldContext::pass()
            }
        }
    }

    /// Live-typing correction: mode normalizer, then the length limit.
    ///
    /// Numeric fields keep a lone `"-"` here.
    pub fn correct(&self, text: &str) -> String {
        let normalized = normalize(self.config.mode, text, self.shift);
        truncate_to_max_length(&normalized, self.config.max_length)
    }

    /// Commit-time correction used on blur.
    ///
    /// Text fields get [`correct`](Self::correct). Numeric fields are not cut to
    /// `max_length`: a value with no digits or sign becomes `min` (or `"0"`),
    /// a lone `"-"` becomes `"-1"`, and the result is clamped into
    /// `[min, max]`, so an out-of-range value is replaced by the nearest bound.
    /// Does not look at `null_behavior`.
    pub fn finalize(&self, text: &str) -> String {
        if !self.config.mode.is_numeric() {
            return self.correct(text);
        }

        let min = self.config.min_bound();
        let max = self.config.max_bound();
        let canonical = canonicalize_number(text);
        let value = if canonical.is_empty() {
            min.clone().unwrap_or_else(|| "0".to_string())
        } else {
            resolve_lone_sign(&canonical)
        };

        let clamped = clamp_integer(&value, min.as_deref(), max.as_deref());
        if clamped != value {
            debug!(%value, %clamped, "value clamped into range");
        }
        clamped
    }

    fn skips_empty(&self, source: &str) -> bool {
        source.is_empty() && self.config.null_behavior == NullBehavior::Nothing
    }

    fn on_change(&mut self, raw: String) -> FieldContext {
        if self.composition.is_composing() {
            debug!("change ignored while composing");
            return FieldContext::pass();
        }

        // compositionend text wins over the live value, which may already be
        // ahead of it in some event orderings.
        let source = self.composition.take_committed().unwrap_or(raw);

        if self.skips_empty(&source) {
            return FieldContext {
                callback: Some(Callback::Change {
                    value: String::new(),
                }),
                ..FieldContext::default()
            };
        }

        FieldContext::changed(self.correct(&source))
    }

    fn on_key_down(
        &mut self,
        key: Key,
        shift: bool,
        value: &str,
        selection: Option<Selection>,
    ) -> FieldContext {
        self.shift = shift;

        // The IME owns the keyboard until compositionend.
        if self.composition.is_composing() || key.is_navigation() {
            return FieldContext::pass();
        }

        if self.config.mode.is_numeric() {
            if let Some(direction) = key.step_direction() {
                return self.step(value, direction);
            }
        }

        if would_overflow(value, selection, self.config.max_length) {
            debug!(?key, max_length = ?self.config.max_length, "keystroke vetoed");
            return FieldContext::veto();
        }

        FieldContext::pass()
    }

    fn step(&mut self, value: &str, direction: i64) -> FieldContext {
        // The stepped value supersedes any composition text still waiting
        // for a change event.
        if self.composition.take_committed().is_some() {
            debug!("pending composition text dropped by numeric step");
        }

        let current = canonicalize_number(value);
        let delta = direction.saturating_mul(self.config.step_or_default());
        let stepped = step_integer(&current, delta);

        let next = if direction > 0 {
            clamp_integer(&stepped, None, self.config.max_bound().as_deref())
        } else {
            clamp_integer(&stepped, self.config.min_bound().as_deref(), None)
        };

        FieldContext {
            prevent_default: true,
            ..FieldContext::changed(next)
        }
    }

    fn on_blur(&mut self, raw: String) -> FieldContext {
        let source = match self.composition.take_committed() {
            Some(text) => text,
            None => {
                if self.composition.is_composing() {
                    debug!("blur during composition, abandoning session");
                    self.composition.advance(CompositionSignal::Reset);
                }
                raw
            }
        };

        if self.skips_empty(&source) {
            return FieldContext {
                callback: Some(Callback::Blur {
                    value: String::new(),
                }),
                ..FieldContext::default()
            };
        }

        FieldContext::blurred(self.finalize(&source))
    }
}
