use crossterm::terminal;

use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::views::dashboard;

const DEFAULT_CHART_WIDTH: usize = 30;
const MAX_CHART_WIDTH: usize = 50;
// Label, captions and gaps around each bar.
const CHART_CHROME: usize = 40;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "dashboard",
        "Show totals, balance and spending per category",
        "dashboard",
        cmd_dashboard,
    )]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let fmt = context.formatter();
    output::section("Dashboard");
    output::info(dashboard::render(
        context.repository().all(),
        &fmt,
        chart_width(),
    ));
    Ok(())
}

fn chart_width() -> usize {
    match terminal::size() {
        Ok((columns, _)) => (columns as usize)
            .saturating_sub(CHART_CHROME)
            .clamp(10, MAX_CHART_WIDTH),
        Err(_) => DEFAULT_CHART_WIDTH,
    }
}
