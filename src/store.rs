// File: src/store.rs
use crate::error::CommandError;
use crate::model::Task;
use chrono::NaiveDate;

/// Ordered, in-memory task container. Indices are 0-based here; the
/// user-facing 1-based numbering is applied at the display boundary.
/// Indices stay stable until a removal shifts everything after it down.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task, CommandError> {
        self.check_index(index)?;
        Ok(&self.tasks[index])
    }

    /// Sets the done flag and returns the task in its new state.
    pub fn set_done(&mut self, index: usize, done: bool) -> Result<&Task, CommandError> {
        self.check_index(index)?;
        self.tasks[index].done = done;
        Ok(&self.tasks[index])
    }

    /// Removes and returns the task at `index`; later tasks shift down.
    pub fn remove(&mut self, index: usize) -> Result<Task, CommandError> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose summary contains `query` as an exact substring,
    /// in original order, paired with their 0-based index.
    pub fn find_text(&self, query: &str) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.summary.contains(query))
            .collect()
    }

    /// Tasks whose associated date equals `date`, in original order.
    pub fn find_date(&self, date: NaiveDate) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.falls_on(date))
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), CommandError> {
        if index >= self.tasks.len() {
            return Err(CommandError::IndexOutOfRange {
                index: index + 1,
                size: self.tasks.len(),
            });
        }
        Ok(())
    }
}
