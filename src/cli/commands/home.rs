use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::views::landing;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "home",
        "Show the welcome screen",
        "home",
        cmd_home,
    )]
}

fn cmd_home(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(landing::render(&context.formatter()));
    Ok(())
}
