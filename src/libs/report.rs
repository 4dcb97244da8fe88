/// Completion counters produced by `task_report`.
///
/// Open tasks that are already past due are counted in `total` only; no
/// other bucket covers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskReport {
    pub total: i64,
    /// Completed no later than the due date.
    pub completed_on_time: i64,
    /// Completed after the due date.
    pub completed_past_due: i64,
    /// Still open and not yet due.
    pub to_be_completed: i64,
}

impl TaskReport {
    /// Tasks that fall outside the three classification buckets.
    pub fn unclassified(&self) -> i64 {
        self.total - self.completed_on_time - self.completed_past_due - self.to_be_completed
    }
}
