use fineasy_storage_json::SlotHealth;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "status",
            "Show where records are stored and whether the slot is readable",
            "status",
            cmd_status,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let store = context.repository().store();
    output_section("Status");
    output::info(format!("  Home      : {}", context.home().display()));
    output::info(format!("  Slot key  : {}", store.key()));
    output::info(format!("  Slot file : {}", store.slot_path().display()));
    output::info(format!("  Records   : {}", context.repository().len()));
    match store.health() {
        SlotHealth::Missing => output::info("  Health    : empty (nothing saved yet)"),
        SlotHealth::Valid(count) => output::info(format!("  Health    : ok ({count} on disk)")),
        SlotHealth::Malformed(reason) => {
            output::warning(format!("Slot content is unreadable: {reason}"));
            output::hint("It is treated as empty and will be replaced on the next change.");
        }
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Fineasy {}", meta.version));
    output::info(format!(
        "  Build hash : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::info(format!("  Built at   : {}", meta.timestamp));
    output::info(format!("  Target     : {}", meta.target));
    output::info(format!("  Profile    : {}", meta.profile));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.registry().get(&name) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(args[0]),
        }
        return Ok(());
    }

    help::print_overview(context.registry());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
