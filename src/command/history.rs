// History records kept by the invoker

use std::collections::VecDeque;
use std::fmt;

/// Which half of a command an invocation ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `apply()` was called through `invoke`
    Forward,
    /// `invert()` was called directly through `invoke_inverse`
    Backward,
}

impl Direction {
    /// The direction a rollback has to run to cancel this one
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "apply"),
            Direction::Backward => write!(f, "invert"),
        }
    }
}

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub slot: String,
    pub direction: Direction,
}

impl HistoryEntry {
    pub fn new(slot: impl Into<String>, direction: Direction) -> Self {
        Self {
            slot: slot.into(),
            direction,
        }
    }
}

/// Chronological record of invocations, most recent at the back
///
/// Only `push` and `pop` change the contents during normal use. When a
/// capacity is set the oldest entry falls off the front once it is exceeded.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_len: Option<usize>,
}

impl History {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `max_len` entries
    ///
    /// A cap of zero is treated as unbounded: a history that cannot hold
    /// the entry just recorded would make every invocation irreversible.
    pub fn with_max_len(max_len: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            max_len: max_len.filter(|&max| max > 0),
        }
    }

    /// Append an entry, returning the oldest one if the cap pushed it out
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_back(entry);
        match self.max_len {
            Some(max) if self.entries.len() > max => self.entries.pop_front(),
            _ => None,
        }
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    /// Most recent entry, if any
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
