// File: ./src/error.rs
//! Everything that can go wrong with one line of user input. The display
//! strings are the exact messages printed back to the session, so the
//! interaction loop prints errors without rewording them.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("I don't know the command '{0}'.")]
    UnknownCommand(String),

    #[error("'{input}' is not a date I understand; use YYYY-MM-DD or YYYY-MM-DDTHH:MM.")]
    InvalidDateFormat {
        input: String,
        /// Whether the datetime form was also tried for this input.
        accepts_datetime: bool,
    },

    #[error("'{0}' is not a valid task number.")]
    MalformedIndex(String),

    #[error("the '{0}' command needs an argument.")]
    MissingArgument(&'static str),

    #[error("a task needs a description.")]
    EmptyDescription,

    #[error("a {kind} takes {expected} date field(s), but {found} were given.")]
    FieldCountMismatch {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// `index` is the 1-based position the user typed.
    #[error("task {index} does not exist; the list has {size} task(s).")]
    IndexOutOfRange { index: usize, size: usize },
}
