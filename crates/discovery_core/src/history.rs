use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::QueryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Success,
    Error,
}

impl QueryStatus {
    pub fn label(self) -> &'static str {
        match self {
            QueryStatus::Success => "Success",
            QueryStatus::Error => "Error",
        }
    }
}

/// One recorded outcome of a submitted query. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub id: QueryId,
    pub query: String,
    /// Server text on success, user-facing error message otherwise.
    pub response: String,
    pub timestamp: DateTime<Local>,
    pub status: QueryStatus,
}

/// Query results, newest first.
///
/// Entries are only ever prepended or dropped all at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseHistory {
    entries: VecDeque<QueryResult>,
}

impl ResponseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `result` so it becomes the newest entry.
    pub fn append(&mut self, result: QueryResult) {
        self.entries.push_front(result);
    }

    /// Empties the history and returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&QueryResult> {
        self.entries.front()
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &QueryResult> {
        self.entries.iter()
    }
}
