//! Append-only traffic log.
//!
//! Every sent or received payload and every lifecycle event is recorded as
//! one line, in the order it was issued or observed. The log is unbounded
//! for the lifetime of the process; a renderer reads new lines by index so
//! the scroll region only ever appends.

/// In-order log of traffic and lifecycle lines.
#[derive(Debug, Default)]
pub struct TrafficLog {
    lines: Vec<String>,
}

impl TrafficLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line.
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines logged so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines appended at or after `from`, for incremental rendering.
    #[must_use]
    pub fn since(&self, from: usize) -> &[String] {
        self.lines.get(from..).unwrap_or_default()
    }
}
