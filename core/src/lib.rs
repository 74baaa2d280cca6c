//! fieldnorm-core
//!
//! Bounded text/number input normalization for form fields: takes raw
//! keystroke and IME input for a constrained field and deterministically
//! produces the canonical display value.
//!
//! Public API:
//! - `normalize` - Full-width to half-width folding per `NormalizationMode`
//! - `canonicalize_number` - Canonical signed-integer strings
//! - `would_overflow` - Max-length veto for pending keystrokes
//! - `CompositionState` - IME composition buffer
//! - `InputController` - Event-driven controller tying the above together
//! - `FieldConfig` - Per-field configuration (TOML loadable)
//!
//! Every transform is total: unsupported characters are dropped, out-of-range
//! numbers are clamped and overflowing keystrokes are vetoed. Nothing here
//! returns an error except configuration I/O.
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

pub mod width;
pub use width::{fold_char, is_accepted, normalize};

pub mod numeric;
pub use numeric::{canonicalize_number, clamp_integer, compare_integers, resolve_lone_sign};

pub mod length;
pub use length::{truncate_to_max_length, would_overflow, Selection};

pub mod composition;
pub use composition::{CompositionSignal, CompositionState};

pub mod key;
pub use key::Key;

pub mod event;
pub use event::FieldEvent;

pub mod context;
pub use context::{Callback, FieldContext};

pub mod controller;
pub use controller::InputController;

/// Which folding/stripping rules a field applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Text passes through untouched
    #[default]
    None,
    /// Latin letters only (full-width folded, hiragana vowels romanized)
    HalfWidthAlphabet,
    /// Digits only (full-width folded)
    HalfWidthNumber,
    /// Letters and digits
    HalfWidthAlphabetAndNumber,
    /// Any printable ASCII
    HalfWidth,
    /// Canonical signed integer
    Numeric,
}

impl NormalizationMode {
    /// All modes, in declaration order.
    pub const ALL: [NormalizationMode; 6] = [
        Self::None,
        Self::HalfWidthAlphabet,
        Self::HalfWidthNumber,
        Self::HalfWidthAlphabetAndNumber,
        Self::HalfWidth,
        Self::Numeric,
    ];

    /// Whether min/max/step apply.
    pub fn is_numeric(self) -> bool {
        self == Self::Numeric
    }

    /// Parse the snake_case name used in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// The snake_case name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HalfWidthAlphabet => "half_width_alphabet",
            Self::HalfWidthNumber => "half_width_number",
            Self::HalfWidthAlphabetAndNumber => "half_width_alphabet_and_number",
            Self::HalfWidth => "half_width",
            Self::Numeric => "numeric",
        }
    }
}

/// What happens when the user empties a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullBehavior {
    /// Always write the corrected value (empty numeric fields become `min` or `0`)
    #[default]
    Default,
    /// Leave an emptied field empty
    Nothing,
}

/// Per-field configuration.
///
/// Built once when a field is attached and read-only afterwards. `min` and
/// `max` are kept as strings, as they arrive from the form schema, and are
/// canonicalized when used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Folding/stripping rules
    pub mode: NormalizationMode,

    /// Lower bound for numeric fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    /// Upper bound for numeric fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,

    /// Maximum length in characters; negative means unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,

    /// Behavior when the field is emptied
    pub null_behavior: NullBehavior,

    /// ArrowUp/ArrowDown increment for numeric fields (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
}

impl FieldConfig {
    /// Create a config for `mode` with everything else at defaults.
    pub fn new(mode: NormalizationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Shorthand for a numeric field.
    pub fn numeric() -> Self {
        Self::new(NormalizationMode::Numeric)
    }

    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn with_max_length(mut self, max_length: i32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_null_behavior(mut self, null_behavior: NullBehavior) -> Self {
        self.null_behavior = null_behavior;
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Canonical lower bound, if configured and usable.
    pub fn min_bound(&self) -> Option<String> {
        canonical_bound("min", self.min.as_deref())
    }

    /// Canonical upper bound, if configured and usable.
    pub fn max_bound(&self) -> Option<String> {
        canonical_bound("max", self.max.as_deref())
    }

    /// Step for ArrowUp/ArrowDown.
    pub fn step_or_default(&self) -> i64 {
        self.step.unwrap_or(1)
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read field config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parse field config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("write field config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn canonical_bound(which: &str, raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let bound = canonicalize_number(raw);
    if numeric::is_complete(&bound) {
        Some(bound)
    } else {
        tracing::warn!(bound = which, raw, "ignoring unusable numeric bound");
        None
    }
}
