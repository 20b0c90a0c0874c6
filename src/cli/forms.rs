//! Interactive entry form for new transactions.

use dialoguer::theme::ColorfulTheme;
use fineasy_domain::{DefaultCategory, TransactionDraft, TransactionKind};

use crate::cli::context::CommandError;
use crate::cli::io;

const KIND_CHOICES: [TransactionKind; 2] = [TransactionKind::Inflow, TransactionKind::Outflow];

/// Walks the user through every field of `draft`, keeping current values as defaults.
pub fn fill_draft(theme: &ColorfulTheme, draft: &mut TransactionDraft) -> Result<(), CommandError> {
    draft.description = io::prompt_text(theme, "Descrição", &draft.description)?;
    draft.amount = io::prompt_text(theme, "Valor", &draft.amount)?;

    let labels: Vec<&str> = DefaultCategory::labels().collect();
    let selected = labels
        .iter()
        .position(|label| *label == draft.category)
        .unwrap_or(labels.len() - 1);
    let picked = io::prompt_select(theme, "Categoria", &labels, selected)?;
    draft.category = labels[picked].to_string();

    draft.custom_category = io::prompt_text(theme, "Tag extra (opcional)", &draft.custom_category)?;

    let kind_labels: Vec<String> = KIND_CHOICES.iter().map(ToString::to_string).collect();
    let kind_refs: Vec<&str> = kind_labels.iter().map(String::as_str).collect();
    let current = KIND_CHOICES
        .iter()
        .position(|kind| *kind == draft.kind)
        .unwrap_or(1);
    draft.kind = KIND_CHOICES[io::prompt_select(theme, "Tipo", &kind_refs, current)?];
    Ok(())
}
