// Manages the flat-file store for the task list.
//
// Line format, one task per line, fields separated by " | ":
//   T | 0 | read book
//   D | 1 | 2019-10-15 | submit report
//   E | 0 | 2019-10-15 | 2019-10-16 | project meeting
//
// The description is always the final field and is read with a bounded
// split, so it may itself contain the delimiter.
use crate::context::AppContext;
use crate::model::{Task, TaskKind};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

const FIELD_SEP: &str = " | ";

pub struct LocalStorage;

impl LocalStorage {
    /// Sidecar lock file path: `tasks.txt` -> `tasks.txt.lock`.
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive lock on the sidecar lock file.
    /// Guards against another afaire process touching the same store.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp file then rename over the target.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Loads the task list from the store file. A missing file is an empty
    /// list; a malformed line fails the whole load with its line number.
    pub fn load(ctx: &dyn AppContext) -> Result<Vec<Task>> {
        let path = ctx.get_task_file_path()?;
        if !path.exists() {
            return Ok(vec![]);
        }

        let tasks = Self::with_lock(&path, || {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read task file '{}'", path.display()))?;

            let mut tasks = Vec::new();
            for (lineno, line) in contents.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let task = Self::parse_line(line)
                    .with_context(|| format!("line {}: '{}'", lineno + 1, line))?;
                tasks.push(task);
            }
            Ok(tasks)
        })?;

        log::debug!("loaded {} task(s) from {}", tasks.len(), path.display());
        Ok(tasks)
    }

    /// Saves the whole task list, replacing the store file atomically.
    pub fn save(ctx: &dyn AppContext, tasks: &[Task]) -> Result<()> {
        let path = ctx.get_task_file_path()?;
        Self::with_lock(&path, || {
            let mut contents = String::new();
            for task in tasks {
                contents.push_str(&Self::format_line(task));
                contents.push('\n');
            }
            Self::atomic_write(&path, contents)?;
            Ok(())
        })?;

        log::debug!("saved {} task(s) to {}", tasks.len(), path.display());
        Ok(())
    }

    fn format_line(task: &Task) -> String {
        let done = if task.done { '1' } else { '0' };
        match task.kind {
            TaskKind::Todo => format!("T{sep}{done}{sep}{}", task.summary, sep = FIELD_SEP),
            TaskKind::Deadline { by } => format!(
                "D{sep}{done}{sep}{}{sep}{}",
                by.format("%Y-%m-%d"),
                task.summary,
                sep = FIELD_SEP
            ),
            TaskKind::Event { from, to } => format!(
                "E{sep}{done}{sep}{}{sep}{}{sep}{}",
                from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d"),
                task.summary,
                sep = FIELD_SEP
            ),
        }
    }

    fn parse_line(line: &str) -> Result<Task> {
        let (code, rest) = line
            .split_once(FIELD_SEP)
            .ok_or_else(|| anyhow::anyhow!("missing field separator"))?;
        let (done_flag, rest) = rest
            .split_once(FIELD_SEP)
            .ok_or_else(|| anyhow::anyhow!("missing done flag"))?;

        let done = match done_flag {
            "0" => false,
            "1" => true,
            other => bail!("invalid done flag '{}'", other),
        };

        let (kind, summary) = match code {
            "T" => (TaskKind::Todo, rest.to_string()),
            "D" => {
                let (by, summary) = rest
                    .split_once(FIELD_SEP)
                    .ok_or_else(|| anyhow::anyhow!("deadline needs a date field"))?;
                (
                    TaskKind::Deadline {
                        by: Self::parse_stored_date(by)?,
                    },
                    summary.to_string(),
                )
            }
            "E" => {
                let mut fields = rest.splitn(3, FIELD_SEP);
                let from = fields
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("event needs a from date"))?;
                let to = fields
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("event needs a to date"))?;
                let summary = fields
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("event needs a description"))?;
                (
                    TaskKind::Event {
                        from: Self::parse_stored_date(from)?,
                        to: Self::parse_stored_date(to)?,
                    },
                    summary.to_string(),
                )
            }
            other => bail!("unknown task code '{}'", other),
        };

        if summary.is_empty() {
            bail!("empty description");
        }

        Ok(Task {
            summary,
            done,
            kind,
        })
    }

    fn parse_stored_date(s: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid stored date '{}'", s))
    }
}
