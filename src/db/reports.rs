use super::db::Db;
use super::query::Query;
use super::tasks::WHERE_CREATED_SINCE;
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::formatter::{format_timestamp, window_start};
use crate::libs::report::TaskReport;
use chrono::Local;
use rusqlite::{params_from_iter, Connection};

// Completed tasks are judged against their completion time, open tasks
// against the current time. Open tasks already past due match no bucket.
const SELECT_REPORT: &str = "
    SELECT
        COUNT(*),
        COALESCE(SUM(CASE WHEN t.task_completed_at IS NOT NULL AND t.due_date >= t.task_completed_at THEN 1 ELSE 0 END), 0),
        COALESCE(SUM(CASE WHEN t.task_completed_at IS NOT NULL AND t.due_date < t.task_completed_at THEN 1 ELSE 0 END), 0),
        COALESCE(SUM(CASE WHEN t.task_completed_at IS NULL AND t.due_date >= datetime('now', 'localtime') THEN 1 ELSE 0 END), 0)
    FROM tasks t";

pub struct Reports {
    pub conn: Connection,
}

impl Reports {
    pub fn new(config: &Config) -> Result<Reports> {
        let db = Db::new(config)?;

        Ok(Reports { conn: db.conn })
    }

    /// Aggregates all tasks, or only those created within the last `last` days.
    pub fn fetch(&mut self, last: Option<u32>) -> Result<TaskReport> {
        let mut query = Query::new(SELECT_REPORT);
        if let Some(days) = last {
            // A window older than any storable timestamp covers every task.
            if let Some(start) = window_start(days, Local::now().naive_local()) {
                query.and_where_bound(WHERE_CREATED_SINCE, format_timestamp(&start));
            }
        }

        let sql = query.sql();
        tracing::debug!(%sql, params = ?query.params(), "building report");

        let report = self.conn.query_row(&sql, params_from_iter(query.params()), |row| {
            Ok(TaskReport {
                total: row.get(0)?,
                completed_on_time: row.get(1)?,
                completed_past_due: row.get(2)?,
                to_be_completed: row.get(3)?,
            })
        })?;

        Ok(report)
    }
}
