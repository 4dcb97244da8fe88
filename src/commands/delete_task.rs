use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteTaskArgs {
    #[arg(long = "task_id", required = true, help = "Id of the task to delete")]
    pub task_id: i64,
}

/// Deletes the task. The confirmation is printed whether or not a row existed.
pub fn cmd(config: &Config, args: DeleteTaskArgs) -> Result<()> {
    Tasks::new(config)?.delete(args.task_id)?;

    msg_success!(Message::TaskDeleted(args.task_id));
    Ok(())
}
