// SPDX-License-Identifier: MIT

//! Append-only activity log shown on the settings activity tab.

use time::OffsetDateTime;
use time::macros::format_description;

/// Oldest entries are dropped past this point.
const MAX_ENTRIES: usize = 100;

/// One human-readable log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub at: OffsetDateTime,
    pub message: String,
}

impl ActivityEntry {
    /// `2026-08-29 14:05 UTC`-style timestamp for display.
    pub fn timestamp(&self) -> String {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
        self.at
            .format(&format)
            .unwrap_or_else(|_| self.at.unix_timestamp().to_string())
    }
}

/// Bounded, most-recent-first log. Entries are only ever prepended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Prepend an entry stamped with the current time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.record_at(OffsetDateTime::now_utc(), message);
    }

    /// Prepend an entry with an explicit timestamp.
    pub fn record_at(&mut self, at: OffsetDateTime, message: impl Into<String>) {
        self.entries.insert(
            0,
            ActivityEntry {
                at,
                message: message.into(),
            },
        );
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_most_recent_first() {
        let mut log = ActivityLog::default();
        log.record("first");
        log.record("second");

        let messages: Vec<_> = log.entries().iter().map(|e| e.message.as_str()).collect();

        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn log_never_exceeds_cap() {
        let mut log = ActivityLog::default();
        for i in 0..(MAX_ENTRIES + 10) {
            log.record(format!("entry {i}"));
        }

        assert_eq!(log.entries().len(), MAX_ENTRIES);
        // Newest entry survives, the oldest ones were dropped.
        assert_eq!(log.entries()[0].message, format!("entry {}", MAX_ENTRIES + 9));
    }
}
