#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_manager::commands::add_task;
    use todo_manager::commands::task_report::{self, TaskReportArgs};
    use todo_manager::db::{reports::Reports, tasks::Tasks};
    use todo_manager::libs::config::Config;
    use todo_manager::libs::data_storage::DataStorage;
    use todo_manager::libs::error::AppError;
    use todo_manager::libs::report::TaskReport;
    use todo_manager::libs::task::Task;

    struct ReportTestContext {
        _temp_dir: TempDir,
        config: Config,
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config::new("tester", "secret").with_storage(DataStorage::at(temp_dir.path()));
            ReportTestContext { _temp_dir: temp_dir, config }
        }
    }

    impl ReportTestContext {
        fn add(&self, days_due: i64, done: bool) -> i64 {
            let mut tasks = Tasks::new(&self.config).unwrap();
            let id = tasks.insert(&Task::new("Report task", days_due).unwrap()).unwrap();
            if done {
                tasks.mark_done(id).unwrap();
            }
            id
        }

        fn report(&self, last: Option<u32>) -> TaskReport {
            Reports::new(&self.config).unwrap().fetch(last).unwrap()
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_empty_report(ctx: &mut ReportTestContext) {
        assert_eq!(ctx.report(None), TaskReport::default());
        assert_eq!(ctx.report(Some(7)), TaskReport::default());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_completed_before_due_date(ctx: &mut ReportTestContext) {
        ctx.add(3, true);

        let report = ctx.report(None);
        assert_eq!(report.total, 1);
        assert_eq!(report.completed_on_time, 1);
        assert_eq!(report.completed_past_due, 0);
        assert_eq!(report.to_be_completed, 0);
        assert_eq!(report.unclassified(), 0);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_all_buckets(ctx: &mut ReportTestContext) {
        ctx.add(3, true); // on time
        ctx.add(-2, true); // completed after the due date
        ctx.add(5, false); // open, not yet due
        ctx.add(-1, false); // open and past due

        let report = ctx.report(None);
        assert_eq!(
            report,
            TaskReport {
                total: 4,
                completed_on_time: 1,
                completed_past_due: 1,
                to_be_completed: 1,
            }
        );
        // open past-due tasks have no bucket of their own
        assert_eq!(report.unclassified(), 1);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_window_filters_by_creation(ctx: &mut ReportTestContext) {
        ctx.add(4, false);
        let old = ctx.add(4, true);
        Tasks::new(&ctx.config)
            .unwrap()
            .conn
            .execute(
                "UPDATE tasks SET task_created_at = datetime('now', 'localtime', '-20 days') WHERE id = ?1",
                [old],
            )
            .unwrap();

        let recent = ctx.report(Some(10));
        assert_eq!(recent.total, 1);
        assert_eq!(recent.to_be_completed, 1);
        assert_eq!(recent.completed_on_time, 0);

        assert_eq!(ctx.report(None).total, 2);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_huge_window_counts_every_task(ctx: &mut ReportTestContext) {
        ctx.add(2, false);
        ctx.add(2, true);

        for days in [800_000, 4_000_000, u32::MAX] {
            let report = ctx.report(Some(days));
            assert_eq!(report.total, 2, "last={}", days);
            assert_eq!(report.to_be_completed, 1);
            assert_eq!(report.completed_on_time, 1);
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_far_future_task_is_rejected(ctx: &mut ReportTestContext) {
        let err = add_task::add(&ctx.config, "far", 3_000_000).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::DueDateOutOfRange(3_000_000))
        ));

        // the furthest accepted due date still counts as pending
        ctx.add(2_000_000, false);
        let report = ctx.report(None);
        assert_eq!(report.total, 1);
        assert_eq!(report.to_be_completed, 1);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_report_command_prints(ctx: &mut ReportTestContext) {
        ctx.add(1, false);
        assert!(task_report::cmd(&ctx.config, TaskReportArgs { last: None }).is_ok());
        assert!(task_report::cmd(&ctx.config, TaskReportArgs { last: Some(3) }).is_ok());
    }
}
