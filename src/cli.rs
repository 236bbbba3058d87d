//! # Command Line
//!
//! Without a subcommand Numera opens the TUI. Each subcommand runs one
//! engine routine and prints the same text the result panel would show
//! (or JSON with `--json`), then exits.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use crate::core::engine::gcd_lcm::Operation;
use crate::core::engine::{self, EngineError, Limits};
use crate::core::topic::TopicId;

/// Columns used for `show` when the terminal size is unknown.
const FALLBACK_WIDTH: usize = 80;

#[derive(Parser, Debug)]
#[command(name = "numera", version, about = "Elementary number theory in the terminal")]
pub struct Args {
    /// Open the TUI on this topic's definition page
    #[arg(short, long, value_enum)]
    pub topic: Option<TopicId>,

    /// Read settings from this file instead of ~/.numera/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one-shot results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Arguments are kept as text so the CLI rejects bad input with exactly the
/// messages the TUI shows.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check the divisibility rules for 1 to 10 (6 excluded)
    Divisibility { n: String },
    /// Decompose a number into prime powers
    Factor {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// List the primes up to a limit, starting with 1
    Primes { limit: String },
    /// Compute n! recursively
    Factorial { n: String },
    /// Greatest common divisor of two or more numbers
    Gcd {
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },
    /// Least common multiple of two or more numbers
    Lcm {
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },
    /// Print a topic's definition, or its source listing with --code
    Show {
        #[arg(value_enum)]
        topic: TopicId,
        #[arg(long)]
        code: bool,
    },
}

impl Command {
    /// The engine input behind this command. `None` for `show`.
    pub fn engine_input(&self) -> Option<(TopicId, String, Operation)> {
        let single = |topic, raw: &String| Some((topic, raw.clone(), Operation::default()));
        match self {
            Command::Divisibility { n } => single(TopicId::Divisibility, n),
            Command::Factor { n } => single(TopicId::FundamentalTheorem, n),
            Command::Primes { limit } => single(TopicId::Primes, limit),
            Command::Factorial { n } => single(TopicId::Recursion, n),
            Command::Gcd { values } => Some((TopicId::GcdLcm, values.join(" "), Operation::Gcd)),
            Command::Lcm { values } => Some((TopicId::GcdLcm, values.join(" "), Operation::Lcm)),
            Command::Show { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum CliError {
    Engine(EngineError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Engine(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "write failed: {}", e),
            CliError::Json(e) => write!(f, "JSON encoding failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        CliError::Engine(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

/// Run one subcommand, writing its output to `out`.
pub fn execute(
    command: &Command,
    json: bool,
    limits: &Limits,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if let Command::Show { topic, code } = command {
        return show(*topic, *code, json, terminal_width(), out);
    }
    let Some((topic, raw, operation)) = command.engine_input() else {
        return Ok(());
    };

    log::info!("One-shot {:?} with input {:?}", topic, raw);
    let outcome = engine::evaluate(topic, &raw, operation, limits)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &outcome)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", outcome)?;
    }
    Ok(())
}

fn show(
    topic: TopicId,
    code: bool,
    json: bool,
    width: usize,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if json {
        let (key, body) = if code {
            ("source", topic.source_listing())
        } else {
            ("definition", topic.definition())
        };
        let value = json!({ "topic": topic, "title": topic.title(), key: body });
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}\n", topic.title())?;
    if code {
        // Source keeps its own line breaks
        write!(out, "{}", topic.source_listing())?;
    } else {
        let options = textwrap::Options::new(width)
            .break_words(false)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        writeln!(out, "{}", textwrap::fill(topic.definition().trim_end(), options))?;
    }
    Ok(())
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(FALLBACK_WIDTH)
        .max(20)
}
