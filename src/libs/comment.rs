/// A free-text note attached to one task. Comments are append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Option<i64>,
    pub task_id: i64,
    pub comment: String,
}

impl Comment {
    pub fn new(task_id: i64, comment: &str) -> Self {
        Comment {
            id: None,
            task_id,
            comment: comment.to_string(),
        }
    }
}
