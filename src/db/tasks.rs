use super::db::Db;
use super::query::Query;
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::formatter::{format_timestamp, window_start};
use crate::libs::task::{Completion, Task, TaskFilter};
use chrono::Local;
use rusqlite::{params, params_from_iter, Connection, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (description, due_date) VALUES (?1, ?2)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const MARK_DONE: &str = "UPDATE tasks SET task_completed_at = datetime('now', 'localtime') WHERE id = ?1";
const SELECT_TASKS: &str = "
    SELECT t.id, t.description, t.due_date, t.task_created_at, t.task_completed_at, GROUP_CONCAT(c.comment, '|') AS comments
    FROM tasks t
    LEFT JOIN comments c ON t.id = c.task_id";
const GROUP_TASKS: &str = "GROUP BY t.id, t.description, t.due_date, t.task_created_at, t.task_completed_at ORDER BY t.id";

const WHERE_COMPLETED: &str = "t.task_completed_at IS NOT NULL";
const WHERE_OPEN: &str = "t.task_completed_at IS NULL";
pub(crate) const WHERE_CREATED_SINCE: &str = "t.task_created_at >= ?";
const WHERE_ID: &str = "t.id = ?";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new(config: &Config) -> Result<Tasks> {
        let db = Db::new(config)?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a task and returns its new id.
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(INSERT_TASK, params![task.description, format_timestamp(&task.due_date)])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, due_date = %task.due_date, "task inserted");

        Ok(id)
    }

    /// Deletes a task and, through the foreign key, its comments.
    /// Returns the number of removed task rows; 0 for an unknown id.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        tracing::debug!(id, affected, "task delete");

        Ok(affected)
    }

    /// Stamps the completion time with the database clock, overwriting any earlier stamp.
    pub fn mark_done(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(MARK_DONE, params![id])?;
        tracing::debug!(id, affected, "task marked done");

        Ok(affected)
    }

    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = Query::new(SELECT_TASKS).suffix(GROUP_TASKS);
        match filter.completion() {
            Some(Completion::Completed) => {
                query.and_where(WHERE_COMPLETED);
            }
            Some(Completion::Open) => {
                query.and_where(WHERE_OPEN);
            }
            None => {}
        }
        if let Some(days) = filter.last {
            // A window older than any storable timestamp covers every task.
            if let Some(start) = window_start(days, Local::now().naive_local()) {
                query.and_where_bound(WHERE_CREATED_SINCE, format_timestamp(&start));
            }
        }

        self.query(&query)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let mut query = Query::new(SELECT_TASKS).suffix(GROUP_TASKS);
        query.and_where_bound(WHERE_ID, id);

        Ok(self.query(&query)?.into_iter().next())
    }

    fn query(&self, query: &Query) -> Result<Vec<Task>> {
        let sql = query.sql();
        tracing::debug!(%sql, params = ?query.params(), "fetching tasks");

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(query.params()), Self::from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            description: row.get(1)?,
            due_date: row.get(2)?,
            task_created_at: row.get(3)?,
            task_completed_at: row.get(4)?,
            comments: row.get(5)?,
        })
    }
}
