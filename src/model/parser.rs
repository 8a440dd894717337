// File: ./src/model/parser.rs
//! Low-level field parsing shared by the command parser: calendar dates,
//! 1-based task numbers, and the `/`-delimited auxiliary segments of an
//! add-form line.
use crate::error::CommandError;
use chrono::{NaiveDate, NaiveDateTime};

/// Parses a calendar date, accepting either a date-only form
/// (`2019-10-15`) or a date-time form (`2019-10-15T18:30`, seconds
/// optional) which is truncated to its date.
pub fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt.date());
        }
    }
    Err(CommandError::InvalidDateFormat {
        input: input.to_string(),
        accepts_datetime: true,
    })
}

/// Parses a user-supplied task number (1-based, strictly positive) into a
/// 0-based container index.
pub fn parse_index(token: &str) -> Result<usize, CommandError> {
    match token.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::MalformedIndex(token.to_string())),
    }
}

/// One `/`-delimited segment after the description of an add-form command,
/// e.g. `by 2019-10-15` or `from 2019-10-15`. The tag is the first word;
/// the value is everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxField {
    pub tag: String,
    pub value: String,
}

/// Splits the text after an add-form keyword into a description and its
/// ordered auxiliary fields. Input is expected to already be rejoined with
/// single spaces; splitting happens on the `/` delimiter.
pub fn split_task_details(rest: &str) -> (String, Vec<AuxField>) {
    let mut segments = rest.split('/');

    let description = segments.next().unwrap_or("").trim().to_string();

    let fields = segments
        .map(|seg| {
            let seg = seg.trim();
            match seg.split_once(char::is_whitespace) {
                Some((tag, value)) => AuxField {
                    tag: tag.to_string(),
                    value: value.trim().to_string(),
                },
                // Tag with no value; the date parse downstream rejects it.
                None => AuxField {
                    tag: seg.to_string(),
                    value: String::new(),
                },
            }
        })
        .collect();

    (description, fields)
}
