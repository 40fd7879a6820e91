//! `feyn`: build, share, and inspect Feynman-technique coaching cards.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use feymantec_core::{
    build_preview_card, extract_jargon_words, safe_trim, PreviewCard, SharePayload,
    DEFAULT_MAX_JARGON,
};
use feymantec_logging::{LogLevel, Telemetry};
use serde_json::json;

mod validate;

use validate::validate_submission;

#[derive(Parser, Debug)]
#[command(name = "feyn", version, about = "Feynman-technique coaching card generator")]
struct Cli {
    /// Append JSONL telemetry to this file.
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Builds a coaching card and prints it as JSON.
    Card(CardArgs),
    /// Builds a card and prints its share token, or a full link.
    Share {
        #[command(flatten)]
        input: CardInput,
        /// Prepend this base URL to the share fragment.
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Decodes a share token back to its payload JSON.
    Decode {
        /// Token from a share link fragment.
        token: String,
    },
    /// Lists jargon words detected in a text, one per line.
    Jargon {
        /// Text to scan; use '-' to read stdin.
        text: String,
        #[arg(long, default_value_t = DEFAULT_MAX_JARGON)]
        max: usize,
    },
}

#[derive(Args, Debug)]
struct CardArgs {
    #[command(flatten)]
    input: CardInput,
    /// Print compact JSON on one line.
    #[arg(long)]
    compact: bool,
}

#[derive(Args, Debug)]
struct CardInput {
    /// Topic the learner is explaining.
    #[arg(long)]
    concept: String,
    /// Explanation text.
    #[arg(long, conflicts_with = "text_file")]
    text: Option<String>,
    /// Read the explanation from a file, or '-' for stdin.
    #[arg(long)]
    text_file: Option<PathBuf>,
}

impl CardInput {
    fn explanation(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let Some(path) = &self.text_file else {
            bail!("provide --text or --text-file");
        };
        if path.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading explanation from stdin")?;
            Ok(buffer)
        } else {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let telemetry = Telemetry::new("feyn", cli.log.as_deref())?;
    match cli.command {
        Commands::Card(args) => run_card(&args, &telemetry),
        Commands::Share { input, base_url } => run_share(&input, base_url.as_deref(), &telemetry),
        Commands::Decode { token } => run_decode(&token),
        Commands::Jargon { text, max } => run_jargon(&text, max),
    }
}

fn run_card(args: &CardArgs, telemetry: &Telemetry) -> Result<()> {
    let card = checked_card(&args.input, telemetry)?;
    let output = if args.compact {
        serde_json::to_string(&card)?
    } else {
        serde_json::to_string_pretty(&card)?
    };
    println!("{output}");
    Ok(())
}

fn run_share(input: &CardInput, base_url: Option<&str>, telemetry: &Telemetry) -> Result<()> {
    let card = checked_card(input, telemetry)?;
    let payload = SharePayload::from_card(&card);
    let line = match base_url {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), payload.share_fragment()),
        None => payload.encode(),
    };
    telemetry.log(
        LogLevel::Info,
        "share.encoded",
        json!({ "concept": payload.concept }),
    )?;
    println!("{line}");
    Ok(())
}

fn run_decode(token: &str) -> Result<()> {
    let payload = SharePayload::decode(token)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn run_jargon(text: &str, max: usize) -> Result<()> {
    let text = if text == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading text from stdin")?;
        buffer
    } else {
        text.to_string()
    };
    for word in extract_jargon_words(&text, max) {
        println!("{word}");
    }
    Ok(())
}

/// Normalizes, validates, and builds one card, logging the outcome.
fn checked_card(input: &CardInput, telemetry: &Telemetry) -> Result<PreviewCard> {
    let concept = safe_trim(&input.concept);
    let v1 = safe_trim(&input.explanation()?);
    if let Err(err) = validate_submission(&concept, &v1) {
        telemetry.log(
            LogLevel::Warn,
            "card.rejected",
            json!({ "reason": err.kind() }),
        )?;
        return Err(err.into());
    }
    let card = build_preview_card(&concept, &v1);
    telemetry.log(
        LogLevel::Info,
        "card.generated",
        json!({ "concept": card.concept, "score": card.score }),
    )?;
    Ok(card)
}
