use std::collections::VecDeque;

/// The number of entries the shell remembers.
pub const CAPACITY: usize = 10;

/// The most recent lines entered into the shell, oldest first.
///
/// A line equal to the most recent entry is not recorded again, and the oldest entry is dropped
/// once there are more than [`CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the given line. Returns true if it was added.
    pub fn push(&mut self, entry: &str) -> bool {
        if self.last() == Some(entry) {
            return false;
        }

        self.entries.push_back(entry.to_owned());
        if self.entries.len() > CAPACITY {
            self.entries.pop_front();
        }
        true
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
