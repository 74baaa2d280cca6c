//! fieldnorm command-line front end
//!
//! Usage:
//!   cargo run -p fieldnorm-tools -- normalize --mode half_width "ＡＢＣ！"
//!   cargo run -p fieldnorm-tools -- number "－０１５" --commit
//!   cargo run -p fieldnorm-tools -- replay --config field.toml events.json
//!   cargo run -p fieldnorm-tools -- repl --mode numeric --min -100 --max 100

mod replay;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fieldnorm_core::{
    canonicalize_number, normalize, resolve_lone_sign, FieldConfig, FieldEvent, InputController,
    NormalizationMode,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldnorm")]
#[command(about = "Normalize constrained form-field input the way the field engine does")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold text under a normalization mode
    Normalize {
        /// none, half_width_alphabet, half_width_number,
        /// half_width_alphabet_and_number, half_width, numeric
        #[arg(short, long, value_parser = parse_mode)]
        mode: NormalizationMode,
        /// Treat hiragana vowels as typed with shift held
        #[arg(long)]
        shift: bool,
        text: String,
    },
    /// Canonicalize a signed integer
    Number {
        text: String,
        /// Apply commit-time rules (a lone "-" becomes "-1")
        #[arg(long)]
        commit: bool,
    },
    /// Replay a JSON array of field events through a controller
    Replay {
        /// Field configuration (TOML); defaults to mode "none"
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Initial displayed value
        #[arg(long, default_value = "")]
        initial: String,
        /// Event script (JSON)
        script: PathBuf,
    },
    /// Read lines from stdin; print the live and committed value of each
    Repl {
        #[arg(short, long, value_parser = parse_mode, default_value = "none")]
        mode: NormalizationMode,
        #[arg(long, allow_hyphen_values = true)]
        min: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        max: Option<String>,
        #[arg(long)]
        max_length: Option<i32>,
    },
}

fn parse_mode(name: &str) -> Result<NormalizationMode, String> {
    NormalizationMode::from_name(name).ok_or_else(|| format!("unknown mode '{}'", name))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { mode, shift, text } => {
            println!("{}", normalize(mode, &text, shift));
        }
        Commands::Number { text, commit } => {
            let value = canonicalize_number(&text);
            let value = if commit { resolve_lone_sign(&value) } else { value };
            println!("{}", value);
        }
        Commands::Replay {
            config,
            initial,
            script,
        } => {
            let config = match config {
                Some(path) => FieldConfig::load_toml(path)?,
                None => FieldConfig::default(),
            };
            let events = replay::load_script(&script)?;
            log::info!("replaying {} events from {}", events.len(), script.display());

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let display = replay::run(config, &initial, events, &mut out)?;
            writeln!(out, "final: {}", serde_json::to_string(&display)?)?;
        }
        Commands::Repl {
            mode,
            min,
            max,
            max_length,
        } => {
            let config = FieldConfig {
                mode,
                min,
                max,
                max_length,
                ..FieldConfig::default()
            };
            repl(InputController::new(config))?;
        }
    }

    Ok(())
}

fn repl(mut controller: InputController) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let live = controller.handle(FieldEvent::change(line.as_str()));
        let live = live.value.unwrap_or_default();
        let committed = controller.handle(FieldEvent::blur(live.as_str()));
        println!(
            "live: {:?}  committed: {:?}",
            live,
            committed.value.unwrap_or_default()
        );
    }
    Ok(())
}
