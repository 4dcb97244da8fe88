use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        formatter::FormattedTask,
        task::{FormatTasks, TaskFilter},
        view::View,
    },
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListTaskArgs {
    #[arg(long = "only-completed", help = "Show only completed tasks")]
    only_completed: bool,
    #[arg(long = "only-due", help = "Show only due tasks")]
    only_due: bool,
    #[arg(long, value_name = "DAYS", help = "Show tasks created in the last N days")]
    last: Option<u32>,
}

impl ListTaskArgs {
    pub fn new(only_completed: bool, only_due: bool, last: Option<u32>) -> Self {
        Self {
            only_completed,
            only_due,
            last,
        }
    }

    pub fn filter(&self) -> TaskFilter {
        TaskFilter {
            only_completed: self.only_completed,
            only_due: self.only_due,
            last: self.last,
        }
    }
}

pub fn cmd(config: &Config, args: ListTaskArgs) -> Result<()> {
    let rows = rows(config, &args.filter())?;
    View::tasks(&rows);
    Ok(())
}

/// Matching tasks with their day deltas computed against the current time.
pub fn rows(config: &Config, filter: &TaskFilter) -> Result<Vec<FormattedTask>> {
    let tasks = Tasks::new(config)?.fetch(filter)?;

    Ok(tasks.format(Local::now().naive_local()))
}
