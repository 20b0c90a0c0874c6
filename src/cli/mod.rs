pub mod chart;
mod commands;
pub mod context;
pub mod format;
pub mod forms;
mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod table;
pub mod views;

pub use context::{CliMode, CommandError, CommandResult, ShellContext};
pub use shell::{run_args, run_cli, run_script_lines};
