use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::Task},
    msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompts for a description and a due-in-days count, then stores the task.
pub fn cmd(config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .interact_text()?;

    let days_due: i64 = Input::with_theme(&theme)
        .with_prompt(Message::PromptDaysDue.to_string())
        .interact_text()?;

    add(config, &description, days_due)?;

    msg_success!(Message::TaskAdded);
    Ok(())
}

/// Stores a task due `days_due` days from now and returns its id.
pub fn add(config: &Config, description: &str, days_due: i64) -> Result<i64> {
    let task = Task::new(description, days_due)?;
    let id = Tasks::new(config)?.insert(&task)?;

    Ok(id)
}
