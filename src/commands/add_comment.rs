use crate::{
    db::comments::Comments,
    libs::{comment::Comment, config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddCommentArgs {
    #[arg(long = "task_id", required = true, help = "Id of the task to comment on")]
    pub task_id: i64,
}

pub fn cmd(config: &Config, args: AddCommentArgs) -> Result<()> {
    let comment: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptComment.to_string())
        .allow_empty(true)
        .interact_text()?;

    add(config, args.task_id, &comment)?;

    msg_success!(Message::CommentAdded(args.task_id));
    Ok(())
}

/// Appends `comment` to the task and returns the comment id.
pub fn add(config: &Config, task_id: i64, comment: &str) -> Result<i64> {
    let id = Comments::new(config)?.insert(&Comment::new(task_id, comment))?;

    Ok(id)
}
