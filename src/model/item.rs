// File: ./src/model/item.rs
use chrono::NaiveDate;

/// What a task is, and the dates that come with being that kind of task.
///
/// The dates live inside the variant so a `Todo` can never carry a stray
/// deadline and an `Event` always has both ends of its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// Single-letter code used in listings and in the store file.
    pub fn code(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub summary: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(summary: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            summary: summary.into(),
            done: false,
            kind,
        }
    }

    /// True when one of the task's own dates equals `date`.
    /// Todos carry no dates and never match.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { by } => by == date,
            TaskKind::Event { from, to } => from == date || to == date,
        }
    }
}
