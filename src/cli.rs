//! Command line and environment configuration.
//!
//! Every flag has an environment variable fallback so the game can be
//! configured from a shell profile:
//!
//! - `MATTESPEL_MODE`: initial mode (default: "easy")
//! - `MATTESPEL_SEED`: RNG seed (default: derived from the clock)
//! - `MATTESPEL_LOG_FILE`: enables file logging
//! - `MATTESPEL_LOG_LEVEL`: log filter level (default: "info"; `RUST_LOG` wins)
//! - `MATTESPEL_SUMMARY`: history summary after exit (default: "text")

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::summary::SummaryFormat;
use crate::types::Mode;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "mattespel",
    version,
    about = "Judge whether the shown sum is right before the clock runs out",
    long_about = None
)]
pub struct Cli {
    /// Initial difficulty (easy = 7s, medium = 5s, hard = 3s per round).
    #[arg(long, env = "MATTESPEL_MODE", default_value = "easy", value_parser = parse_mode)]
    pub mode: Mode,

    /// Seed for the round generator; the same seed deals the same rounds.
    #[arg(long, env = "MATTESPEL_SEED")]
    pub seed: Option<u32>,

    /// Append logs to this file (logging is off without it).
    #[arg(long, env = "MATTESPEL_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, env = "MATTESPEL_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// History summary printed after the terminal is restored.
    #[arg(long, env = "MATTESPEL_SUMMARY", value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter())
    }
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode '{}' (expected easy, medium or hard)", s))
}
