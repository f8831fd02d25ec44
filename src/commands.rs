//! Subcommand dispatch
//!
//! Each subcommand maps onto exactly one library call.

use std::io::{self, Read};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tracing::debug;

use crate::cli::Commands;
use crate::output::Outcome;

/// Resolve the text input for a subcommand.
///
/// An explicit argument wins; otherwise stdin is read to the end and one
/// trailing line break is dropped.
fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("no input given: pass TEXT as an argument or pipe it on stdin");
    }

    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("Failed to read input from stdin")?;
    Ok(trim_line_break(buf))
}

fn trim_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Run a subcommand and return its outcome.
pub fn run(command: Commands) -> Result<Outcome> {
    let name = command.name();
    debug!(command = name, "dispatching");

    let outcome = match command {
        Commands::Random {
            length,
            digits_only,
        } => Outcome::text(name, textkit::generate_strong_random(length, !digits_only)?),
        Commands::Number { length } => {
            Outcome::text(name, textkit::generate_random_number(length)?)
        }
        Commands::ShortId => Outcome::text(name, textkit::generate_short_id()?),
        Commands::Digits { text } => {
            Outcome::text(name, textkit::convert_numbers_to_english(&input(name, text)?))
        }
        Commands::Unescape { text } => Outcome::text(name, textkit::unescape(&input(name, text)?)),
        Commands::StripTags { text } => {
            Outcome::text(name, textkit::strip_tags(&input(name, text)?))
        }
        Commands::StripEnter { text } => {
            Outcome::text(name, textkit::strip_enter(&input(name, text)?))
        }
        Commands::Mobile { number } => {
            Outcome::text(name, textkit::correct_mobile_no(&input(name, number)?))
        }
        Commands::IsRtl { text } => Outcome::flag(name, textkit::is_rtl(&input(name, text)?)),
        Commands::Reverse { text } => Outcome::text(name, textkit::reverse(&input(name, text)?)),
        Commands::Hello => Outcome::text(name, textkit::greeting()),
    };

    Ok(outcome)
}

fn input(name: &str, text: Option<String>) -> Result<String> {
    let text = read_input(text)?;
    debug!(command = name, chars = text.chars().count(), "input resolved");
    Ok(text)
}
