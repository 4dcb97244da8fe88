use crate::{
    db::reports::Reports,
    libs::{config::Config, messages::Message, view::View},
    msg_debug, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TaskReportArgs {
    #[arg(long, value_name = "DAYS", help = "Show report for tasks created in the last N days")]
    pub last: Option<u32>,
}

pub fn cmd(config: &Config, args: TaskReportArgs) -> Result<()> {
    let report = Reports::new(config)?.fetch(args.last)?;
    msg_debug!(format!("{} open task(s) past due are not classified", report.unclassified()));

    msg_print!(Message::ReportHeader);
    View::report(&report);
    Ok(())
}
