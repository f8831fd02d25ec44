//! textkit CLI - string helpers for Persian/Arabic text
//!
//! Usage: textkit [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   random       Generate a strong random token
//!   number       Generate a random number string
//!   short-id     Generate an 8-character alphanumeric id
//!   digits       Convert Persian and Arabic digits to ASCII digits
//!   unescape     Decode the basic HTML entities
//!   strip-tags   Decode entities and remove HTML tags
//!   strip-enter  Remove all line breaks
//!   mobile       Normalize an Iranian mobile number
//!   is-rtl       Check whether text is mostly right-to-left
//!   reverse      Reverse text by character
//!   hello        Print a Persian greeting

mod cli;
mod commands;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let outcome = commands::run(cli.command)?;
    output::emit(&outcome, cli.json).context("Failed to write result")?;
    Ok(())
}
