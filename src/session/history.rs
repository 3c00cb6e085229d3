use std::collections::VecDeque;

/// A fixed-capacity log of recent entries. Pushing onto a full history evicts the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl History {
    /// An empty history keeping at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, dropping the oldest one if the history is full.
    pub fn push(&mut self, entry: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most entries this history keeps.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
