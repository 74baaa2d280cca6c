//! Event-script replay.
//!
//! A script is a JSON array of `FieldEvent`s, e.g.
//!
//! ```json
//! [
//!   {"type": "focus"},
//!   {"type": "change", "value": "１０１"},
//!   {"type": "blur", "value": "101"}
//! ]
//! ```
//!
//! Each event's resulting `FieldContext` is written as one JSON line.

use anyhow::{Context, Result};
use fieldnorm_core::{FieldConfig, FieldEvent, InputController};
use std::io::Write;
use std::path::Path;

pub fn load_script(path: &Path) -> Result<Vec<FieldEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read event script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("parse event script {}", path.display()))
}

pub fn parse_script(content: &str) -> Result<Vec<FieldEvent>> {
    let events: Vec<FieldEvent> = serde_json::from_str(content)?;
    if events.is_empty() {
        anyhow::bail!("event script is empty");
    }
    Ok(events)
}

/// Run `events` against a fresh controller, writing one JSON line per event.
///
/// Returns the displayed value after the last event.
pub fn run<W: Write>(
    config: FieldConfig,
    initial: &str,
    events: Vec<FieldEvent>,
    out: &mut W,
) -> Result<String> {
    let mut controller = InputController::new(config);
    let mut display = initial.to_string();

    for (index, event) in events.into_iter().enumerate() {
        let name = event.name();
        let ctx = controller.handle(event);
        ctx.apply_to(&mut display);
        writeln!(
            out,
            "{} {} {}",
            index,
            name,
            serde_json::to_string(&ctx)?
        )?;
    }

    Ok(display)
}
