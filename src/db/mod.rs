//! Database layer for the todo-manager application.
//!
//! Built on SQLite through `rusqlite`. Every repository (`Tasks`,
//! `Comments`, `Reports`) owns its own connection, opened through
//! [`db::Db`] with foreign keys enabled and the schema migrated. Dropping a
//! repository closes its connection.
//!
//! ```rust,no_run
//! use todo_manager::db::{comments::Comments, tasks::Tasks};
//! use todo_manager::libs::{comment::Comment, config::Config, task::{Task, TaskFilter}};
//!
//! let config = Config::read()?;
//! let id = Tasks::new(&config)?.insert(&Task::new("Review code", 2)?)?;
//! Comments::new(&config)?.insert(&Comment::new(id, "check PR #123"))?;
//! let open = Tasks::new(&config)?.fetch(&TaskFilter { only_due: true, ..TaskFilter::all() })?;
//! # Ok::<(), todo_manager::libs::error::AppError>(())
//! ```

/// Connection opening and initialization.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// Comment insertion and lookup.
pub mod comments;

/// WHERE-clause assembly shared by listing and reporting.
pub mod query;

/// Aggregate completion counters.
pub mod reports;

/// Task CRUD and filtered listing.
pub mod tasks;
