use colored::Color;
use fineasy_domain::{Transaction, TransactionKind};

use crate::cli::chart::{INFLOW_COLOR, OUTFLOW_COLOR};
use crate::cli::format::Formatter;
use crate::cli::table::{Alignment, Table, TableColumn};

pub const EMPTY_HISTORY: &str = "Nenhum registro ainda.";
const SHORT_ID_LEN: usize = 8;
const DESCRIPTION_WIDTH: usize = 32;
const MIN_PREFIX_LEN: usize = 4;

/// History list, most recent first, numbered from 1.
pub fn render_history(transactions: &[Transaction], fmt: &Formatter) -> String {
    if transactions.is_empty() {
        return fmt.dim(EMPTY_HISTORY);
    }

    let mut table = Table::new(vec![
        TableColumn::new("#", Alignment::Right),
        TableColumn::new("Data", Alignment::Left),
        TableColumn::new("Descrição", Alignment::Left).max_width(DESCRIPTION_WIDTH),
        TableColumn::new("Categoria", Alignment::Left),
        TableColumn::new("Valor", Alignment::Right),
        TableColumn::new("ID", Alignment::Left),
    ]);

    for (idx, txn) in transactions.iter().enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            fmt.date(txn.date),
            txn.description.clone(),
            txn.category.clone(),
            fmt.paint(fmt.signed_money(txn), kind_color(txn.kind)),
            short_id(&txn.id),
        ]);
    }

    table.render()
}

pub fn kind_color(kind: TransactionKind) -> Color {
    match kind {
        TransactionKind::Inflow => INFLOW_COLOR,
        TransactionKind::Outflow => OUTFLOW_COLOR,
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// How a `remove` argument identified its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Found(String),
    Missing,
    Ambiguous(usize),
}

/// Resolves a history position (up to three digits), an exact id, or an id
/// prefix of at least four characters. Ids compare case-insensitively.
pub fn resolve_selector(transactions: &[Transaction], raw: &str) -> Selector {
    let needle = raw.trim().to_lowercase();
    if needle.chars().count() < MIN_PREFIX_LEN {
        return match needle.parse::<usize>() {
            Ok(position) => position
                .checked_sub(1)
                .and_then(|idx| transactions.get(idx))
                .map(|txn| Selector::Found(txn.id.clone()))
                .unwrap_or(Selector::Missing),
            Err(_) => Selector::Missing,
        };
    }
    if let Some(txn) = transactions
        .iter()
        .find(|txn| txn.id.to_lowercase() == needle)
    {
        return Selector::Found(txn.id.clone());
    }
    let matches: Vec<&str> = transactions
        .iter()
        .map(|txn| txn.id.as_str())
        .filter(|id| id.to_lowercase().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [] => Selector::Missing,
        [id] => Selector::Found(id.to_string()),
        many => Selector::Ambiguous(many.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::format::LocaleStyle;
    use chrono::{TimeZone, Utc};

    fn fmt() -> Formatter {
        Formatter::new(LocaleStyle::Brazilian, "BRL", false)
    }

    fn history() -> Vec<Transaction> {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        vec![
            Transaction::new("Rent", 400.0, TransactionKind::Outflow, "Aluguel", date),
            Transaction::new("Salary", 1000.0, TransactionKind::Inflow, "Salário", date),
        ]
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(render_history(&[], &fmt()), EMPTY_HISTORY);
    }

    #[test]
    fn history_lists_signed_amounts_in_order() {
        let txns = history();
        let rendered = render_history(&txns, &fmt());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Rent"));
        assert!(lines[2].contains("- R$ 400,00"));
        assert!(lines[2].contains("Aluguel"));
        assert!(lines[3].contains("+ R$ 1.000,00"));
        assert!(lines[3].contains(&short_id(&txns[1].id)));
    }

    #[test]
    fn selectors_accept_position_id_and_prefix() {
        let txns = history();
        assert_eq!(
            resolve_selector(&txns, "2"),
            Selector::Found(txns[1].id.clone())
        );
        assert_eq!(resolve_selector(&txns, "3"), Selector::Missing);
        assert_eq!(resolve_selector(&txns, "0"), Selector::Missing);
        assert_eq!(
            resolve_selector(&txns, &txns[0].id),
            Selector::Found(txns[0].id.clone())
        );
        assert_eq!(
            resolve_selector(&txns, &txns[0].id[..6]),
            Selector::Found(txns[0].id.clone())
        );
        assert_eq!(resolve_selector(&txns, "ab"), Selector::Missing);
        assert_eq!(
            resolve_selector(&txns, "ffffffff-0000-4000-8000-000000000000"),
            Selector::Missing
        );
    }

    #[test]
    fn selectors_match_foreign_ids() {
        let mut txns = history();
        txns[1].id = "1717000000000".to_string();
        assert_eq!(
            resolve_selector(&txns, "1717000000000"),
            Selector::Found("1717000000000".to_string())
        );
        assert_eq!(
            resolve_selector(&txns, "17170"),
            Selector::Found("1717000000000".to_string())
        );
        assert_eq!(short_id(&txns[1].id), "17170000");
    }
}
