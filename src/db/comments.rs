use super::db::Db;
use crate::libs::comment::Comment;
use crate::libs::config::Config;
use crate::libs::error::Result;
use rusqlite::{params, Connection};

const INSERT_COMMENT: &str = "INSERT INTO comments (task_id, comment) VALUES (?1, ?2)";
const SELECT_BY_TASK: &str = "SELECT id, task_id, comment FROM comments WHERE task_id = ?1 ORDER BY id";

pub struct Comments {
    pub conn: Connection,
}

impl Comments {
    pub fn new(config: &Config) -> Result<Comments> {
        let db = Db::new(config)?;

        Ok(Comments { conn: db.conn })
    }

    /// Appends a comment. Fails with a foreign key violation when the task does not exist.
    pub fn insert(&mut self, comment: &Comment) -> Result<i64> {
        self.conn.execute(INSERT_COMMENT, params![comment.task_id, comment.comment])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, task_id = comment.task_id, "comment inserted");

        Ok(id)
    }

    pub fn fetch(&mut self, task_id: i64) -> Result<Vec<Comment>> {
        let mut stmt = self.conn.prepare(SELECT_BY_TASK)?;
        let comment_iter = stmt.query_map(params![task_id], |row| {
            Ok(Comment {
                id: row.get(0)?,
                task_id: row.get(1)?,
                comment: row.get(2)?,
            })
        })?;

        let mut comments = Vec::new();
        for comment in comment_iter {
            comments.push(comment?);
        }

        Ok(comments)
    }
}
