//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.
//! Text subcommands take the input as an argument or read it from stdin.

use clap::{Parser, Subcommand};

/// textkit - string helpers for Persian/Arabic text
#[derive(Parser, Debug)]
#[command(name = "textkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit one JSON object per result
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a strong random token
    Random {
        /// Number of characters
        #[arg(short, long, default_value_t = 16)]
        length: usize,

        /// Use digits only instead of letters and digits
        #[arg(long)]
        digits_only: bool,
    },

    /// Generate a random number string
    Number {
        /// Number of digits
        #[arg(short, long, default_value_t = 6)]
        length: usize,
    },

    /// Generate an 8-character alphanumeric id
    ShortId,

    /// Convert Persian and Arabic digits to ASCII digits
    Digits {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Decode the basic HTML entities
    Unescape {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Decode entities and remove HTML tags
    StripTags {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Remove all line breaks
    StripEnter {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Normalize an Iranian mobile number to 98XXXXXXXXXX
    Mobile {
        /// Mobile number (reads stdin when omitted)
        number: Option<String>,
    },

    /// Check whether text is mostly right-to-left
    IsRtl {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Reverse text by character
    Reverse {
        /// Input text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Print a Persian greeting
    Hello,
}

impl Commands {
    /// Subcommand name as shown in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Random { .. } => "random",
            Commands::Number { .. } => "number",
            Commands::ShortId => "short-id",
            Commands::Digits { .. } => "digits",
            Commands::Unescape { .. } => "unescape",
            Commands::StripTags { .. } => "strip-tags",
            Commands::StripEnter { .. } => "strip-enter",
            Commands::Mobile { .. } => "mobile",
            Commands::IsRtl { .. } => "is-rtl",
            Commands::Reverse { .. } => "reverse",
            Commands::Hello => "hello",
        }
    }
}
