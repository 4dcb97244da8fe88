use super::error::{AppError, Result};
use super::formatter::{days_between, format_timestamp, is_storable, FormattedTask};
use chrono::{Local, NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub description: String,
    pub due_date: NaiveDateTime,
    pub task_created_at: Option<NaiveDateTime>,
    pub task_completed_at: Option<NaiveDateTime>,
    /// Comments joined with `|`, as returned by the listing query.
    pub comments: Option<String>,
}

impl Task {
    /// A new task due `days_due` days from now. Zero and negative values are allowed
    /// as long as the due date keeps a four-digit year.
    pub fn new(description: &str, days_due: i64) -> Result<Self> {
        Self::due_from(description, days_due, Local::now().naive_local())
    }

    pub fn due_from(description: &str, days_due: i64, now: NaiveDateTime) -> Result<Self> {
        let due_date = TimeDelta::try_days(days_due)
            .and_then(|delta| now.checked_add_signed(delta))
            .filter(is_storable)
            .ok_or(AppError::DueDateOutOfRange(days_due))?;

        Ok(Task {
            id: None,
            description: description.to_string(),
            due_date,
            task_created_at: None,
            task_completed_at: None,
            comments: None,
        })
    }
}

/// Which tasks `list_task` shows.
///
/// `only_completed` wins over `only_due` when both are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub only_completed: bool,
    pub only_due: bool,
    /// Only tasks created within this many days before now.
    pub last: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion {
    Completed,
    Open,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn completion(&self) -> Option<Completion> {
        if self.only_completed {
            Some(Completion::Completed)
        } else if self.only_due {
            Some(Completion::Open)
        } else {
            None
        }
    }
}

pub trait FormatTasks {
    fn format(&self, now: NaiveDateTime) -> Vec<FormattedTask>;
}

impl FormatTasks for [Task] {
    fn format(&self, now: NaiveDateTime) -> Vec<FormattedTask> {
        self.iter()
            .map(|task| {
                let created = task.task_created_at.unwrap_or(now);
                FormattedTask {
                    id: task.id.unwrap_or_default(),
                    description: task.description.clone(),
                    days_due_elapsed: days_between(now, task.due_date),
                    created: format!("{} ({} days)", format_timestamp(&created), days_between(now, created)),
                    completed: task.task_completed_at.as_ref().map(format_timestamp).unwrap_or_default(),
                    comments: task.comments.clone().unwrap_or_default(),
                }
            })
            .collect()
    }
}
