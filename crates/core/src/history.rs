//! Attempt history and end-of-attempt feedback.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::types::Mode;

/// Format used when showing a history timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of a terminated attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub score: u32,
    pub mode: Mode,
}

impl HistoryEntry {
    pub fn new(timestamp: DateTime<Local>, score: u32, mode: Mode) -> Self {
        Self {
            timestamp,
            score,
            mode,
        }
    }

    /// Display line, e.g. `"2026-10-19 14:02:11: 4 rätta svar"`.
    pub fn line(&self) -> String {
        format!(
            "{}: {} rätta svar",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.score
        )
    }
}

/// Append-only list of attempts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Highest recorded score, if any attempt ended.
    pub fn best_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Message shown after an attempt ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The player judged the statement wrongly
    Wrong { score: u32 },
    /// The countdown reached zero
    Timeout { score: u32 },
}

impl Feedback {
    pub fn score(&self) -> u32 {
        match *self {
            Feedback::Wrong { score } | Feedback::Timeout { score } => score,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Feedback::Wrong { score } => {
                format!("Fel, försök igen. Du hade {} rätta svar denna gång.", score)
            }
            Feedback::Timeout { score } => {
                format!("Tiden är ute! Du hade {} rätta svar denna gång.", score)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 10, 19, h, m, s)
            .single()
            .unwrap()
    }

    #[test]
    fn test_entry_line() {
        let entry = HistoryEntry::new(at(14, 2, 11), 4, Mode::Hard);
        assert_eq!(entry.line(), "2026-10-19 14:02:11: 4 rätta svar");
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.best_score(), None);

        history.push(HistoryEntry::new(at(10, 0, 0), 3, Mode::Easy));
        history.push(HistoryEntry::new(at(10, 1, 0), 7, Mode::Medium));
        history.push(HistoryEntry::new(at(10, 2, 0), 1, Mode::Hard));

        let scores: Vec<u32> = history.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![3, 7, 1]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.last().map(|e| e.mode), Some(Mode::Hard));
        assert_eq!(history.best_score(), Some(7));
    }

    #[test]
    fn test_feedback_messages_contain_score() {
        let wrong = Feedback::Wrong { score: 5 };
        assert_eq!(
            wrong.message(),
            "Fel, försök igen. Du hade 5 rätta svar denna gång."
        );
        assert_eq!(wrong.score(), 5);

        let timeout = Feedback::Timeout { score: 0 };
        assert!(timeout.message().starts_with("Tiden är ute!"));
        assert!(timeout.message().contains("0 rätta svar"));
    }
}
