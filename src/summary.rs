//! Session history printed after the terminal is restored.

use std::fmt;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::core::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// One `"<timestamp>: <score> rätta svar"` line per attempt
    Text,
    /// One JSON object per attempt
    Json,
    /// Print nothing
    None,
}

impl SummaryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryFormat::Text => "text",
            SummaryFormat::Json => "json",
            SummaryFormat::None => "none",
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `entries` to `out` in the requested format.
///
/// The text format prints nothing when no attempt ended.
pub fn write_summary<W: Write>(
    entries: &[HistoryEntry],
    format: SummaryFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Text => {
            if !entries.is_empty() {
                writeln!(out, "Historia")?;
                for entry in entries {
                    writeln!(out, "{} ({})", entry.line(), entry.mode.as_str())?;
                }
            }
        }
        SummaryFormat::Json => {
            for entry in entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
