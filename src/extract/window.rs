//! Fixed-capacity sliding window over the lines of a document.

use std::collections::VecDeque;

/// Number of lines the window holds.
pub const WINDOW_SIZE: usize = 20;

/// Index of the line currently under evaluation.
pub const CENTER: usize = WINDOW_SIZE / 2;

/// The most recently seen `WINDOW_SIZE` lines of a document, oldest first.
///
/// The window starts out filled with empty strings so the early lines of a
/// document can be centered and classified like any others; empty lines
/// participate in the boundary rules exactly like real blank lines.
#[derive(Debug, Clone)]
pub struct LineWindow {
    lines: VecDeque<String>,
}

impl LineWindow {
    pub fn new() -> Self {
        let mut lines = VecDeque::with_capacity(WINDOW_SIZE);
        lines.resize(WINDOW_SIZE, String::new());
        Self { lines }
    }

    /// Push a line, evicting the oldest. The window always holds exactly
    /// `WINDOW_SIZE` lines.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.pop_front();
        self.lines.push_back(line.into());
    }

    /// The line at `index` (0 = oldest).
    pub fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }

    /// The line under evaluation.
    pub fn center_line(&self) -> &str {
        &self.lines[CENTER]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Trim each line in `start..=end` and join them with single spaces,
    /// trimming the result.
    pub fn join_span(&self, start: usize, end: usize) -> String {
        let mut joined = String::new();
        for index in start..=end.min(WINDOW_SIZE - 1) {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(self.lines[index].trim());
        }
        joined.trim().to_string()
    }
}

impl Default for LineWindow {
    fn default() -> Self {
        Self::new()
    }
}
