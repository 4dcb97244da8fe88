use super::formatter::FormattedTask;
use super::report::TaskReport;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    fn grid() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }

    pub fn tasks_table(tasks: &[FormattedTask]) -> Table {
        let mut table = Self::grid();

        table.set_titles(row!["ID", "DESCRIPTION", "DAYS DUE ELAPSED", "CREATED AT (DAYS AGO)", "COMPLETED AT", "COMMENTS"]);
        for task in tasks {
            table.add_row(row![c->task.id, task.description, c->task.days_due_elapsed, task.created, task.completed, task.comments]);
        }

        table
    }

    pub fn report_table(report: &TaskReport) -> Table {
        let mut table = Self::grid();

        table.set_titles(row!["TOTAL TASKS", "COMPLETED ON TIME", "COMPLETED PAST DUE", "TO BE COMPLETED"]);
        table.add_row(row![
            c->report.total,
            c->report.completed_on_time,
            c->report.completed_past_due,
            c->report.to_be_completed
        ]);

        table
    }

    pub fn tasks(tasks: &[FormattedTask]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn report(report: &TaskReport) {
        Self::report_table(report).printstd();
    }
}
