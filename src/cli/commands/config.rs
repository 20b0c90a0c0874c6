use fineasy_config::ConfigKey;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <locale|currency|color|storage-key|data-dir> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <locale|currency|color|storage-key|data-dir> <value>"
                        .into(),
                ));
            }
            let key: ConfigKey = args[1].parse()?;
            let value = args[2..].join(" ");
            let mut updated = context.config().clone();
            updated.set(key, &value)?;
            context.update_config(updated)?;
            output::success(format!("{key} updated."));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{other}`"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = context.config();
    let data_dir = config.resolve_data_dir(context.home());
    output::section("Configuration");
    output::info(format!("  File        : {}", context.config_manager().config_path().display()));
    output::info(format!("  locale      : {}", config.locale));
    output::info(format!("  currency    : {}", config.currency));
    output::info(format!(
        "  color       : {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    output::info(format!("  storage-key : {}", config.storage_key));
    output::info(format!("  data-dir    : {}", data_dir.display()));
}
