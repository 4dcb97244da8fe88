#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use std::{thread, time::Duration};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_manager::commands::{add_task, delete_task, mark_done};
    use todo_manager::db::tasks::Tasks;
    use todo_manager::libs::config::Config;
    use todo_manager::libs::data_storage::DataStorage;
    use todo_manager::libs::task::{Task, TaskFilter};

    struct TaskTestContext {
        _temp_dir: TempDir,
        config: Config,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config::new("tester", "secret").with_storage(DataStorage::at(temp_dir.path()));
            TaskTestContext { _temp_dir: temp_dir, config }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_due_date_is_creation_plus_days(ctx: &mut TaskTestContext) {
        for days in [-3, 0, 1, 5] {
            let id = add_task::add(&ctx.config, "Offset task", days).unwrap();
            let task = Tasks::new(&ctx.config).unwrap().get_by_id(id).unwrap().unwrap();

            let created = task.task_created_at.unwrap();
            let drift = task.due_date - created - TimeDelta::days(days);
            assert!(drift.num_seconds().abs() <= 5, "days={} drift={}", days, drift);
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_new_task_is_open(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();
        let id = tasks.insert(&Task::new("Open task", 2).unwrap()).unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.description, "Open task");
        assert!(task.task_completed_at.is_none());
        assert_eq!(task.comments, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();
        let keep = tasks.insert(&Task::new("Keep", 1).unwrap()).unwrap();
        let gone = tasks.insert(&Task::new("Drop", 1).unwrap()).unwrap();

        assert_eq!(tasks.delete(gone).unwrap(), 1);

        let remaining: Vec<i64> = tasks.fetch(&TaskFilter::all()).unwrap().iter().filter_map(|t| t.id).collect();
        assert_eq!(remaining, vec![keep]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task_is_silent(ctx: &mut TaskTestContext) {
        assert_eq!(Tasks::new(&ctx.config).unwrap().delete(999).unwrap(), 0);
        assert!(delete_task::cmd(&ctx.config, delete_task::DeleteTaskArgs { task_id: 999 }).is_ok());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mark_done_twice_keeps_latest(ctx: &mut TaskTestContext) {
        let id = add_task::add(&ctx.config, "Finish me", 3).unwrap();

        mark_done::cmd(&ctx.config, mark_done::MarkDoneArgs { task_id: id }).unwrap();
        let first = Tasks::new(&ctx.config).unwrap().get_by_id(id).unwrap().unwrap().task_completed_at.unwrap();

        thread::sleep(Duration::from_millis(1100));
        mark_done::cmd(&ctx.config, mark_done::MarkDoneArgs { task_id: id }).unwrap();

        let mut tasks = Tasks::new(&ctx.config).unwrap();
        let all = tasks.fetch(&TaskFilter::all()).unwrap();
        assert_eq!(all.len(), 1);
        let second = all[0].task_completed_at.unwrap();
        assert!(second > first);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mark_done_missing_task_is_silent(ctx: &mut TaskTestContext) {
        assert_eq!(Tasks::new(&ctx.config).unwrap().mark_done(404).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_description_with_delimiter_is_verbatim(ctx: &mut TaskTestContext) {
        let description = "buy milk | eggs || bread|";
        let id = add_task::add(&ctx.config, description, 1).unwrap();

        let task = Tasks::new(&ctx.config).unwrap().get_by_id(id).unwrap().unwrap();
        assert_eq!(task.description, description);
    }
}
