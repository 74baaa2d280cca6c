// core/tests/field_scenarios.rs
//
// End-to-end field scenarios driven through InputController.
//
// Tests cover:
// - Numeric range correction on blur, including max_length fields
// - Null behavior when a field is cleared
// - Half-width folding and dropped characters
// - IME composition hand-off to the next change
// - Max-length veto in a typing session

use fieldnorm_core::{
    Callback, FieldConfig, FieldContext, FieldEvent, InputController, Key, NormalizationMode,
    NullBehavior,
};

/// Minimal host: keeps the displayed value and applies write-backs.
struct Host {
    controller: InputController,
    display: String,
    callbacks: Vec<Callback>,
}

impl Host {
    fn new(config: FieldConfig, initial: &str) -> Self {
        Self {
            controller: InputController::new(config),
            display: initial.to_string(),
            callbacks: Vec::new(),
        }
    }

    fn dispatch(&mut self, event: FieldEvent) -> FieldContext {
        let ctx = self.controller.handle(event);
        ctx.apply_to(&mut self.display);
        if let Some(cb) = &ctx.callback {
            self.callbacks.push(cb.clone());
        }
        ctx
    }

    /// Type `text` one character at a time, the way a browser reports it.
    fn type_text(&mut self, text: &str, shift: bool) {
        for ch in text.chars() {
            let ctx = self.dispatch(FieldEvent::key_down(Key::Char(ch), shift, self.display.clone()));
            if ctx.prevent_default {
                continue;
            }
            let mut next = self.display.clone();
            next.push(ch);
            self.dispatch(FieldEvent::change(next));
        }
    }

    fn clear(&mut self) {
        self.display.clear();
    }

    fn blur(&mut self) {
        let value = self.display.clone();
        self.dispatch(FieldEvent::blur(value));
    }
}

#[test]
fn numeric_value_above_max_is_clamped_on_blur() {
    let config = FieldConfig::numeric().with_min("-100").with_max("100");
    let mut host = Host::new(config, "10");

    host.dispatch(FieldEvent::Focus);
    host.clear();
    host.type_text("101", false);
    assert_eq!(host.display, "101", "live typing is not clamped");

    host.blur();
    assert_eq!(host.display, "100");
    assert_eq!(
        host.callbacks.last(),
        Some(&Callback::Blur {
            value: "100".to_string()
        })
    );
}

#[test]
fn out_of_range_value_on_short_field_snaps_to_bound() {
    let config = FieldConfig::numeric()
        .with_min("-100")
        .with_max("100")
        .with_max_length(2);
    // Value set by the page, not typed, so no keystroke veto ran
    let mut host = Host::new(config, "-5000");

    host.dispatch(FieldEvent::Focus);
    host.blur();
    assert_eq!(host.display, "-100");

    host.display = "5000".to_string();
    host.blur();
    assert_eq!(host.display, "100");
}

#[test]
fn nothing_null_behavior_keeps_cleared_field_empty() {
    let config = FieldConfig::numeric().with_null_behavior(NullBehavior::Nothing);
    let mut host = Host::new(config, "10");

    host.clear();
    host.dispatch(FieldEvent::change(""));
    assert_eq!(host.display, "");

    host.blur();
    assert_eq!(host.display, "");
}

#[test]
fn default_null_behavior_resets_cleared_field() {
    let mut host = Host::new(FieldConfig::numeric(), "10");

    host.clear();
    host.dispatch(FieldEvent::change(""));
    assert_eq!(host.display, "0");
}

#[test]
fn half_width_field_folds_and_drops() {
    let mut host = Host::new(FieldConfig::new(NormalizationMode::HalfWidth), "");

    host.dispatch(FieldEvent::change("！"));
    assert_eq!(host.display, "!");

    host.clear();
    host.dispatch(FieldEvent::change("ア"));
    assert_eq!(host.display, "");
}

#[test]
fn composition_commit_uses_shift_from_key_event() {
    let mut host = Host::new(FieldConfig::new(NormalizationMode::HalfWidthAlphabet), "");

    host.dispatch(FieldEvent::key_down(
        Key::Other("Process".to_string()),
        true,
        "",
    ));
    host.dispatch(FieldEvent::CompositionStart);
    host.dispatch(FieldEvent::CompositionUpdate {
        preedit: "a".to_string(),
    });
    // Intermediate candidates reach the field but are not normalized
    let ctx = host.dispatch(FieldEvent::change("a"));
    assert!(ctx.is_noop());
    host.dispatch(FieldEvent::CompositionUpdate {
        preedit: "あ".to_string(),
    });
    host.dispatch(FieldEvent::composition_end("あ"));

    host.dispatch(FieldEvent::change("あ"));
    assert_eq!(host.display, "A");
}

#[test]
fn lone_minus_survives_typing_and_resolves_on_blur() {
    let mut host = Host::new(FieldConfig::numeric(), "");

    host.type_text("ー", false);
    assert_eq!(host.display, "-");

    host.blur();
    assert_eq!(host.display, "-1");
}

#[test]
fn full_width_number_is_canonicalized_while_typing() {
    let mut host = Host::new(FieldConfig::numeric(), "");

    host.dispatch(FieldEvent::change("０１２３456789"));
    assert_eq!(host.display, "123456789");

    host.dispatch(FieldEvent::change("－１５"));
    assert_eq!(host.display, "-15");
}

#[test]
fn max_length_stops_typing() {
    let config = FieldConfig::new(NormalizationMode::HalfWidthAlphabetAndNumber).with_max_length(4);
    let mut host = Host::new(config, "");

    host.type_text("abcdef", false);
    assert_eq!(host.display, "abcd");
}

#[test]
fn arrow_keys_step_numeric_field() {
    let config = FieldConfig::numeric().with_min("-2").with_max("2");
    let mut host = Host::new(config, "1");

    for _ in 0..3 {
        let value = host.display.clone();
        host.dispatch(FieldEvent::key_down(Key::ArrowUp, false, value));
    }
    assert_eq!(host.display, "2");

    for _ in 0..6 {
        let value = host.display.clone();
        host.dispatch(FieldEvent::key_down(Key::ArrowDown, false, value));
    }
    assert_eq!(host.display, "-2");
}

#[test]
fn out_of_band_reset_discards_pending_composition() {
    let mut host = Host::new(FieldConfig::new(NormalizationMode::HalfWidth), "");

    host.dispatch(FieldEvent::CompositionStart);
    host.dispatch(FieldEvent::composition_end("ｚ"));
    host.dispatch(FieldEvent::Reset);

    host.dispatch(FieldEvent::change("ｑ"));
    assert_eq!(host.display, "q");
}
