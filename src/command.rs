// File: ./src/command.rs
//! Turns one line of user input into exactly one [`Command`] or one
//! [`CommandError`]. Parsing is a pure function of the line: validation of
//! indices, dates, and add-form field counts all happens here, so the
//! dispatcher only ever sees well-formed values.
use crate::error::CommandError;
use crate::model::parser::{parse_date, parse_index, split_task_details};
use crate::model::{Task, TaskKind};
use chrono::NaiveDate;
use std::str::FromStr;
use strum::EnumString;

/// The fixed first-token vocabulary, matched case-insensitively.
/// Task-kind keywords double as the implicit "add" forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    List,
    Find,
    Check,
    Mark,
    Unmark,
    Delete,
    Bye,
    Todo,
    Deadline,
    Event,
}

/// One fully validated, executable action against the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(Task),
    Mark { index: usize, done: bool },
    Delete { index: usize },
    FindText(String),
    FindDate(NaiveDate),
    Bye,
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next().unwrap_or("");

    let keyword = Keyword::from_str(first)
        .map_err(|_| CommandError::UnknownCommand(first.to_uppercase()))?;

    match keyword {
        Keyword::List => Ok(Command::List),
        Keyword::Bye => Ok(Command::Bye),
        Keyword::Mark => Ok(Command::Mark {
            index: next_index(&mut tokens, "mark")?,
            done: true,
        }),
        Keyword::Unmark => Ok(Command::Mark {
            index: next_index(&mut tokens, "unmark")?,
            done: false,
        }),
        Keyword::Delete => Ok(Command::Delete {
            index: next_index(&mut tokens, "delete")?,
        }),
        Keyword::Check => {
            let raw = tokens
                .next()
                .ok_or(CommandError::MissingArgument("check"))?;
            Ok(Command::FindDate(parse_date(raw)?))
        }
        Keyword::Find => {
            let query = tokens.collect::<Vec<_>>().join(" ");
            if query.is_empty() {
                return Err(CommandError::MissingArgument("find"));
            }
            Ok(Command::FindText(query))
        }
        Keyword::Todo => parse_add("todo", 0, tokens),
        Keyword::Deadline => parse_add("deadline", 1, tokens),
        Keyword::Event => parse_add("event", 2, tokens),
    }
}

fn next_index<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<usize, CommandError> {
    let raw = tokens
        .next()
        .ok_or(CommandError::MissingArgument(command))?;
    parse_index(raw)
}

/// Builds the task for an add-form command. The tokens after the kind
/// keyword are rejoined with single spaces, split on `/` into description
/// plus ordered auxiliary fields, and the field count is checked against
/// what the kind requires before any date is parsed.
fn parse_add<'a>(
    label: &'static str,
    expected: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Command, CommandError> {
    let rest = tokens.collect::<Vec<_>>().join(" ");
    let (description, fields) = split_task_details(&rest);

    if description.is_empty() {
        return Err(CommandError::EmptyDescription);
    }
    if fields.len() != expected {
        return Err(CommandError::FieldCountMismatch {
            kind: label,
            expected,
            found: fields.len(),
        });
    }

    let dates = fields
        .iter()
        .map(|f| parse_date(&f.value))
        .collect::<Result<Vec<_>, _>>()?;

    let kind = match label {
        "deadline" => TaskKind::Deadline { by: dates[0] },
        "event" => TaskKind::Event {
            from: dates[0],
            to: dates[1],
        },
        _ => TaskKind::Todo,
    };

    Ok(Command::Add(Task::new(description, kind)))
}
