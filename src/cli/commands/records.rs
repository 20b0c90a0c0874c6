use fineasy_domain::{DefaultCategory, TransactionDraft, TransactionKind};

use crate::cli::context::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::views::records::{self, Selector};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "edit",
            "Record a transaction through the entry form, then show the history",
            "edit",
            cmd_edit,
        ),
        CommandEntry::new(
            "add",
            "Record a transaction without prompts",
            "add <description> <amount> [entrada|saida] [category] [tag]",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Delete a record by history position or id",
            "remove <#|id|id-prefix>",
            cmd_remove,
        ),
        CommandEntry::new("list", "Show the history, newest first", "list", cmd_list),
        CommandEntry::new(
            "categories",
            "List the predefined categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_edit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode() == CliMode::Script {
        output::hint("The entry form needs a terminal; use `add` in scripts.");
        return print_history(context);
    }

    let mut form = context.form.clone();
    forms::fill_draft(context.theme(), &mut form)?;
    if submit(context, &form) {
        context.form.reset();
    } else {
        context.form = form;
    }
    print_history(context)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = draft_from_args(args)?;
    submit(context, &draft);
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let needle = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: remove <#|id|id-prefix>".into()))?;

    match records::resolve_selector(context.repository().all(), needle) {
        Selector::Found(id) => {
            if let Some(removed) = context.repository_mut().remove(&id) {
                output::success(format!("Removed `{}`.", removed.description));
            }
            Ok(())
        }
        Selector::Missing => {
            output::warning(format!("No record matches `{needle}`."));
            Ok(())
        }
        Selector::Ambiguous(count) => Err(CommandError::InvalidArguments(format!(
            "`{needle}` matches {count} records; type more of the id."
        ))),
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_history(context)
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categorias");
    for label in DefaultCategory::labels() {
        output::info(format!("  {label}"));
    }
    output::hint("Any other text given as category or tag is stored as typed.");
    Ok(())
}

/// Hands `draft` to the repository and reports whether it was recorded.
/// Only `edit` keeps a rejected draft around for the next form.
fn submit(context: &mut ShellContext, draft: &TransactionDraft) -> bool {
    let recorded = context
        .repository_mut()
        .add(draft)
        .map(|txn| (txn.description.clone(), txn.category.clone()));
    match recorded {
        Some((description, category)) => {
            output::success(format!("Recorded `{description}` in {category}."));
            true
        }
        None => false,
    }
}

fn print_history(context: &ShellContext) -> CommandResult {
    output::section("Histórico");
    output::info(records::render_history(
        context.repository().all(),
        &context.formatter(),
    ));
    Ok(())
}

/// Builds a draft from `add` arguments. A category outside the predefined
/// set is kept as a custom tag.
pub(crate) fn draft_from_args(args: &[&str]) -> Result<TransactionDraft, CommandError> {
    let [description, amount, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <description> <amount> [entrada|saida] [category] [tag]".into(),
        ));
    };

    let kind = match rest.first() {
        Some(raw) => raw
            .parse::<TransactionKind>()
            .map_err(CommandError::InvalidArguments)?,
        None => TransactionKind::default(),
    };

    let mut draft = TransactionDraft::new(*description, *amount, kind);
    if let Some(category) = rest.get(1) {
        draft = match DefaultCategory::from_label(category) {
            Some(known) => draft.with_category(known.label()),
            None => draft.with_custom_category(*category),
        };
    }
    if let Some(tag) = rest.get(2) {
        draft = draft.with_custom_category(*tag);
    }
    Ok(draft)
}
