//! Core library modules for the todo-manager application.
//!
//! - **Infrastructure**: configuration, data storage, errors, logging, messaging
//! - **Domain**: tasks, comments and completion reports
//! - **Presentation**: day-delta formatting and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_manager::db::tasks::Tasks;
//! use todo_manager::libs::config::Config;
//! use todo_manager::libs::task::Task;
//!
//! let config = Config::read()?;
//! let mut tasks = Tasks::new(&config)?;
//! tasks.insert(&Task::new("Renew passport", 14)?)?;
//! # Ok::<(), todo_manager::libs::error::AppError>(())
//! ```

pub mod comment;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod report;
pub mod task;
pub mod view;
