//! Result rendering for CLI commands.
//!
//! Plain mode prints the bare result; JSON mode prints one NDJSON object
//! `{"command": ..., "result": ...}` per invocation.

use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// The result of one subcommand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub result: Value,
}

impl Outcome {
    pub fn text(command: &'static str, result: impl Into<String>) -> Self {
        Self {
            command,
            result: Value::String(result.into()),
        }
    }

    pub fn flag(command: &'static str, result: bool) -> Self {
        Self {
            command,
            result: Value::Bool(result),
        }
    }
}

/// Write an outcome as a single line.
pub fn write_outcome(out: &mut impl Write, outcome: &Outcome, json: bool) -> io::Result<()> {
    if json {
        let line = serde_json::to_string(outcome)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        out.write_all(line.as_bytes())?;
    } else {
        match &outcome.result {
            Value::String(s) => out.write_all(s.as_bytes())?,
            other => write!(out, "{other}")?,
        }
    }
    out.write_all(b"\n")
}

/// Convenience helper that writes an outcome to stdout.
pub fn emit(outcome: &Outcome, json: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_outcome(&mut out, outcome, json)?;
    out.flush()
}
