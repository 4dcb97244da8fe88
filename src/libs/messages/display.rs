//! Display implementation for todo-manager messages.
//!
//! Every user-facing string lives here, so wording changes never touch the
//! command handlers.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DISPATCH MESSAGES ===
            Message::NoCommand => "No command provided.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added successfully!".to_string(),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully!", id),
            Message::TaskMarkedDone(id) => format!("Task {} marked as done!", id),

            // === COMMENT MESSAGES ===
            Message::CommentAdded(id) => format!("Comment added to task {} successfully!", id),

            // === REPORT MESSAGES ===
            Message::ReportHeader => "Report:".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted(path) => format!("Configuration file {} removed", path),
            Message::ConfigAlreadyAbsent => "No configuration file to remove".to_string(),
            Message::ConfigModuleDatabase => "Database connection".to_string(),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Enter description".to_string(),
            Message::PromptDaysDue => "Due in how many days (e.g., 4, 5, 6)".to_string(),
            Message::PromptComment => "Enter your comment (press Enter to leave it blank)".to_string(),
            Message::PromptDbUser => "Enter database user".to_string(),
            Message::PromptDbPassword => "Enter database password (leave empty to keep the current one)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_confirmation_names_the_task() {
        assert_eq!(Message::TaskDeleted(7).to_string(), "Task 7 deleted successfully!");
        assert_eq!(Message::TaskMarkedDone(3).to_string(), "Task 3 marked as done!");
        assert_eq!(Message::CommentAdded(12).to_string(), "Comment added to task 12 successfully!");
    }

    #[test]
    fn no_command_notice() {
        assert_eq!(Message::NoCommand.to_string(), "No command provided.");
    }
}
