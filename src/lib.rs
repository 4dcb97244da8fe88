//! # todo-manager
//!
//! A command-line task tracker backed by SQLite.
//!
//! ## Features
//!
//! - **Tasks**: create tasks due N days from now, mark them done, delete them
//! - **Comments**: attach free-text notes to a task
//! - **Listing**: filter by completion state and creation window
//! - **Reports**: on-time, past-due and pending counters
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_manager::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
