//! Run report: the ordered message stream both operations produce.

/// Severity of a single report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Normal progress ("Created ...", "Deleted ...").
    Info,
    /// Non-fatal condition ("... not found", a failed best-effort step).
    Warn,
}

/// One operator-facing message.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Severity of this entry.
    pub level: Level,
    /// Human-readable message.
    pub message: String,
}

/// Ordered collection of informational and warning messages.
///
/// Library code appends entries; the command layer decides how to print them.
/// Keeping the stream as data lets tests assert on outcomes without capturing
/// stdout.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational message.
    pub fn info(&mut self, message: impl Into<String>) {
        self.entries.push(Entry {
            level: Level::Info,
            message: message.into(),
        });
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.entries.push(Entry {
            level: Level::Warn,
            message: message.into(),
        });
    }

    /// All entries, in the order they were recorded.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// True if any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|entry| entry.level == Level::Warn)
    }
}
