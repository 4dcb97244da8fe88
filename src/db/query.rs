//! SELECT assembly with optional AND-joined predicates.
//!
//! Predicates are static SQL fragments; any user-supplied value is bound
//! through a `?` placeholder and collected in order in [`Query::params`].

use rusqlite::types::Value;

/// A base statement plus zero or more predicates and a trailing clause.
#[derive(Debug, Clone)]
pub struct Query {
    base: &'static str,
    predicates: Vec<&'static str>,
    params: Vec<Value>,
    suffix: Option<&'static str>,
}

impl Query {
    pub fn new(base: &'static str) -> Self {
        Query {
            base,
            predicates: Vec::new(),
            params: Vec::new(),
            suffix: None,
        }
    }

    /// Clause appended after the WHERE clause, e.g. `GROUP BY ...`.
    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn and_where(&mut self, predicate: &'static str) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds a predicate with exactly one `?` placeholder bound to `value`.
    pub fn and_where_bound(&mut self, predicate: &'static str, value: impl Into<Value>) -> &mut Self {
        self.predicates.push(predicate);
        self.params.push(value.into());
        self
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn sql(&self) -> String {
        let mut sql = self.base.trim().to_string();
        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }
        if let Some(suffix) = self.suffix {
            sql.push(' ');
            sql.push_str(suffix.trim());
        }
        sql
    }
}
