use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkDoneArgs {
    #[arg(long = "task_id", required = true, help = "Id of the task to mark done")]
    pub task_id: i64,
}

pub fn cmd(config: &Config, args: MarkDoneArgs) -> Result<()> {
    Tasks::new(config)?.mark_done(args.task_id)?;

    msg_success!(Message::TaskMarkedDone(args.task_id));
    Ok(())
}
