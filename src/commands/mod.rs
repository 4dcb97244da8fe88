pub mod add_comment;
pub mod add_task;
pub mod delete_task;
pub mod init;
pub mod list_task;
pub mod mark_done;
pub mod task_report;

use crate::libs::{config::Config, messages::Message};
use crate::msg_print;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure database credentials")]
    Init(init::InitArgs),
    #[command(name = "add_task", about = "Create a task")]
    AddTask,
    #[command(name = "delete_task", about = "Delete a task")]
    DeleteTask(delete_task::DeleteTaskArgs),
    #[command(name = "mark_done", about = "Mark a task as done")]
    MarkDone(mark_done::MarkDoneArgs),
    #[command(name = "list_task", about = "List tasks")]
    ListTask(list_task::ListTaskArgs),
    #[command(name = "task_report", about = "Show completion counters")]
    TaskReport(task_report::TaskReportArgs),
    #[command(name = "add_comment", about = "Comment on a task")]
    AddComment(add_comment::AddCommentArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Todo Manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Dispatches to one handler. The configuration is read once here and
    /// passed down by reference; `init` and the bare invocation never read it.
    pub fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            msg_print!(Message::NoCommand);
            return Ok(());
        };

        match command {
            Commands::Init(args) => init::cmd(args),
            Commands::AddTask => add_task::cmd(&Config::read()?),
            Commands::DeleteTask(args) => delete_task::cmd(&Config::read()?, args),
            Commands::MarkDone(args) => mark_done::cmd(&Config::read()?, args),
            Commands::ListTask(args) => list_task::cmd(&Config::read()?, args),
            Commands::TaskReport(args) => task_report::cmd(&Config::read()?, args),
            Commands::AddComment(args) => add_comment::cmd(&Config::read()?, args),
        }
    }
}
