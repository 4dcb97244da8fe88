//! Connection settings for the todo-manager database.
//!
//! The settings live in `config.json` inside the application data directory
//! and are read exactly once per invocation by the command dispatcher. The
//! resulting [`Config`] is passed by reference into every operation.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "user": "alice",
//!   "password": "secret"
//! }
//! ```
//!
//! Both keys are required. The host and database name are fixed, see
//! [`DB_HOST`] and [`crate::db::db::DB_FILE_NAME`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_manager::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Connecting as {}", config.user);
//! # Ok::<(), todo_manager::libs::error::AppError>(())
//! ```

use super::data_storage::DataStorage;
use super::error::{AppError, Result};
use crate::libs::messages::Message;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database host. Not configurable.
pub const DB_HOST: &str = "localhost";

/// Settings required to open a connection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Database user name
    pub user: String,

    /// Database password. Stored as plain text in the settings file.
    pub password: String,

    /// Where the settings file and the database live. Never serialized.
    #[serde(skip)]
    pub storage: DataStorage,
}

impl Config {
    pub fn new(user: &str, password: &str) -> Self {
        Config {
            user: user.to_string(),
            password: password.to_string(),
            storage: DataStorage::new(),
        }
    }

    /// Rebinds the configuration to another data directory.
    pub fn with_storage(mut self, storage: DataStorage) -> Self {
        self.storage = storage;
        self
    }

    /// Reads the configuration from the default data directory.
    ///
    /// # Errors
    ///
    /// - [`AppError::ConfigNotFound`] when no settings file exists
    /// - [`AppError::ConfigRead`] when the file cannot be read
    /// - [`AppError::ConfigParse`] when the JSON is malformed or a required key is missing
    pub fn read() -> Result<Config> {
        Self::read_from(DataStorage::new())
    }

    /// Reads the configuration stored under `storage`.
    pub fn read_from(storage: DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config = Self::parse_file(&config_file_path)?;
        tracing::debug!(user = %config.user, host = DB_HOST, dir = %storage.base_path().display(), "configuration loaded");

        Ok(config.with_storage(storage))
    }

    fn parse_file(path: &Path) -> Result<Config> {
        let config_str = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AppError::ConfigNotFound(path.to_path_buf()),
            _ => AppError::ConfigRead {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(serde_json::from_str(&config_str)?)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = self.storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the settings file. A missing file is not an error.
    pub fn delete(storage: &DataStorage) -> Result<Option<PathBuf>> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        match fs::remove_file(&config_file_path) {
            Ok(()) => Ok(Some(config_file_path)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Interactive setup wizard.
    ///
    /// Existing values are offered as defaults, so re-running `init` only
    /// changes what the user edits.
    pub fn init() -> Result<Self> {
        let current = Self::read().ok();
        let theme = ColorfulTheme::default();
        msg_print!(Message::ConfigModuleDatabase);

        let mut user_input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptDbUser.to_string());
        if let Some(current) = &current {
            user_input = user_input.default(current.user.clone());
        }
        let user = user_input.interact_text()?;

        let password = Password::with_theme(&theme)
            .with_prompt(Message::PromptDbPassword.to_string())
            .allow_empty_password(true)
            .interact()?;

        // An empty answer keeps the stored password.
        let password = match (password.is_empty(), current) {
            (true, Some(current)) => current.password,
            _ => password,
        };

        Ok(Config::new(&user, &password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_and_user_are_required() {
        let err = serde_json::from_str::<Config>(r#"{"user": "alice"}"#).unwrap_err();
        assert!(err.to_string().contains("password"));

        let err = serde_json::from_str::<Config>(r#"{"password": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("user"));
    }

    #[test]
    fn storage_is_not_serialized() {
        let config = Config::new("alice", "secret").with_storage(DataStorage::at("/nowhere"));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"user":"alice","password":"secret"}"#);
    }

    #[test]
    fn extra_keys_are_tolerated() {
        let config: Config = serde_json::from_str(r#"{"user": "bob", "password": "pw", "host": "ignored"}"#).unwrap();
        assert_eq!(config.user, "bob");
        assert_eq!(config.password, "pw");
    }
}
