// File: src/controller.rs
//! Central dispatcher for parsed commands.
//! This is the single source of truth for all list mutations: the
//! interaction loop parses a line, hands the resulting [`Command`] here,
//! and prints whatever comes back. Persistence happens after every
//! mutating command when autosave is on; a failed save is reported in the
//! reply but never fails the command itself.
use crate::command::Command;
use crate::config::Config;
use crate::context::SharedContext;
use crate::error::CommandError;
use crate::model::{Task, TaskDisplay};
use crate::storage::LocalStorage;
use crate::store::TaskStore;
use anyhow::Result;

/// What the interaction loop should do with the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading input.
    Message(String),
    /// Print the farewell and end the session.
    Exit(String),
}

pub struct Controller {
    store: TaskStore,
    ctx: SharedContext,
    config: Config,
    /// Set when the startup load failed. Saving is blocked for the rest of
    /// the session so an unreadable store file is never overwritten.
    load_failed: bool,
}

impl Controller {
    pub fn new(ctx: SharedContext, config: Config) -> Self {
        Self {
            store: TaskStore::new(),
            ctx,
            config,
            load_failed: false,
        }
    }

    /// Replaces the in-memory list with the persisted store's contents.
    /// Returns the number of tasks picked up.
    pub fn load(&mut self) -> Result<usize> {
        match LocalStorage::load(self.ctx.as_ref()) {
            Ok(tasks) => {
                let count = tasks.len();
                self.store = TaskStore::from_tasks(tasks);
                self.load_failed = false;
                Ok(count)
            }
            Err(e) => {
                self.load_failed = true;
                Err(e)
            }
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Executes one command against the task list. Errors leave the list
    /// (and the persisted store) unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::List => {
                if self.store.is_empty() {
                    return Ok(Outcome::Message("There is nothing on your list.".into()));
                }
                let entries: Vec<(usize, &Task)> = self.store.tasks().iter().enumerate().collect();
                Ok(Outcome::Message(format!(
                    "Here is everything on your list:\n{}",
                    render_entries(&entries)
                )))
            }
            Command::Add(task) => {
                let line = task.to_line();
                self.store.add(task);
                let mut reply = format!(
                    "Added to your list:\n    {}\nYou now have {} task(s) on the list.",
                    line,
                    self.store.len()
                );
                self.persist(&mut reply);
                Ok(Outcome::Message(reply))
            }
            Command::Mark { index, done } => {
                let line = self.store.set_done(index, done)?.to_line();
                let heading = if done {
                    "Marked as done:"
                } else {
                    "Marked as not done yet:"
                };
                let mut reply = format!("{}\n    {}", heading, line);
                self.persist(&mut reply);
                Ok(Outcome::Message(reply))
            }
            Command::Delete { index } => {
                let removed = self.store.remove(index)?;
                let mut reply = format!(
                    "Removed from your list:\n    {}\nYou now have {} task(s) on the list.",
                    removed.to_line(),
                    self.store.len()
                );
                self.persist(&mut reply);
                Ok(Outcome::Message(reply))
            }
            Command::FindText(query) => {
                let matches = self.store.find_text(&query);
                if matches.is_empty() {
                    return Ok(Outcome::Message(format!(
                        "Nothing on your list matches '{}'.",
                        query
                    )));
                }
                Ok(Outcome::Message(format!(
                    "Here is what matches '{}':\n{}",
                    query,
                    render_entries(&matches)
                )))
            }
            Command::FindDate(date) => {
                let matches = self.store.find_date(date);
                if matches.is_empty() {
                    return Ok(Outcome::Message(format!(
                        "Nothing on your list falls on {}.",
                        date.format("%Y-%m-%d")
                    )));
                }
                Ok(Outcome::Message(format!(
                    "Here is what falls on {}:\n{}",
                    date.format("%Y-%m-%d"),
                    render_entries(&matches)
                )))
            }
            Command::Bye => Ok(Outcome::Exit(
                "Bye! Your list will be here when you get back.".into(),
            )),
        }
    }

    /// Saves the list after a mutation. Save failures are logged and
    /// appended to the reply as a warning; the mutation itself stands.
    fn persist(&self, reply: &mut String) {
        if !self.config.autosave {
            return;
        }
        if self.load_failed {
            log::warn!("not saving: the existing store file could not be read");
            reply.push_str(
                "\n(warning: not saving, because your existing saved list could not be read)",
            );
            return;
        }
        if let Err(e) = LocalStorage::save(self.ctx.as_ref(), self.store.tasks()) {
            log::warn!("failed to save task list: {:#}", e);
            reply.push_str(&format!("\n(warning: your list could not be saved: {})", e));
        }
    }
}

/// Renders `(0-based index, task)` pairs as 1-based listing lines.
fn render_entries(entries: &[(usize, &Task)]) -> String {
    entries
        .iter()
        .map(|(i, t)| format!("  {}. {}", i + 1, t.to_line()))
        .collect::<Vec<_>>()
        .join("\n")
}
