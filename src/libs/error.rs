//! Error taxonomy shared by the configuration and database layers.
//!
//! Every variant is fatal for the current invocation: nothing is retried and
//! no partial state is cleaned up. Command handlers wrap these into
//! `anyhow::Error` and let `main` print them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The settings file does not exist yet.
    #[error("Configuration file not found at {}. Run `todo-manager init` to create it", .0.display())]
    ConfigNotFound(PathBuf),

    /// The settings file exists but could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid JSON or lacks `user`/`password`.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Any failure reported by the database driver: opening, constraints,
    /// statement execution or row decoding.
    #[error("Data access failed: {0}")]
    DataAccess(#[from] rusqlite::Error),

    /// `now + days` does not fit in a timestamp.
    #[error("Due date {0} days from now is out of range")]
    DueDateOutOfRange(i64),

    /// An interactive prompt could not read from the terminal.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// The application data directory could not be prepared.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),
}
