use super::migrations::{get_db_version, init_with_migrations};
use crate::libs::config::{Config, DB_HOST};
use crate::libs::error::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "todo_manager.db";

/// An open, migrated connection.
///
/// The connection is closed when the `Db` is dropped, so a handler releases
/// it on every exit path, including early returns through `?`.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new(config: &Config) -> Result<Db> {
        let mut conn = Self::new_without_migrations(config)?;
        init_with_migrations(&mut conn)?;
        let version = get_db_version(&conn)?;
        tracing::debug!(version, "schema ready");

        Ok(Db { conn })
    }

    /// Opens the database without touching the schema.
    pub fn new_without_migrations(config: &Config) -> Result<Connection> {
        let db_file_path = config.storage.get_path(DB_FILE_NAME)?;
        tracing::debug!(host = DB_HOST, user = %config.user, path = %db_file_path.display(), "opening database");

        let conn = Connection::open(db_file_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(conn)
    }
}
