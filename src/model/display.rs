// File: ./src/model/display.rs
use crate::model::item::{Task, TaskKind};

pub trait TaskDisplay {
    fn kind_symbol(&self) -> String;
    fn checkbox_symbol(&self) -> &'static str;
    fn to_line(&self) -> String;
}

impl TaskDisplay for Task {
    fn kind_symbol(&self) -> String {
        format!("[{}]", self.kind.code())
    }

    fn checkbox_symbol(&self) -> &'static str {
        if self.done { "[X]" } else { "[ ]" }
    }

    /// One listing line, e.g. `[D][X] submit report (by: 2019-10-15)`.
    fn to_line(&self) -> String {
        let mut s = format!(
            "{}{} {}",
            self.kind_symbol(),
            self.checkbox_symbol(),
            self.summary
        );
        match self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                s.push_str(&format!(" (by: {})", by.format("%Y-%m-%d")));
            }
            TaskKind::Event { from, to } => {
                s.push_str(&format!(
                    " (from: {} to: {})",
                    from.format("%Y-%m-%d"),
                    to.format("%Y-%m-%d")
                ));
            }
        }
        s
    }
}
