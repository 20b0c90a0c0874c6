//! Aggregations behind the dashboard: totals, balance, and outflow per category.

use std::collections::HashMap;

use fineasy_domain::{Transaction, TransactionKind};

/// Totals shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub balance: f64,
}

/// Outflow summed per category label, in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Portion of total outflow attributed to one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percent: f64,
}

impl CategoryTotals {
    fn accumulate(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&slot) => self.entries[slot].amount += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    amount,
                });
            }
        }
    }

    fn drop_zero_totals(&mut self) {
        if self.entries.iter().all(|entry| entry.amount != 0.0) {
            return;
        }
        self.entries.retain(|entry| entry.amount != 0.0);
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (entry.category.clone(), slot))
            .collect();
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.index
            .get(category)
            .map(|&slot| self.entries[slot].amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across all categories.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount).sum()
    }

    /// Percentage share of each category, for the breakdown chart.
    pub fn shares(&self) -> Vec<CategoryShare> {
        let total = self.total();
        self.entries
            .iter()
            .map(|entry| CategoryShare {
                category: entry.category.clone(),
                amount: entry.amount,
                percent: if total == 0.0 {
                    0.0
                } else {
                    entry.amount / total * 100.0
                },
            })
            .collect()
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn total_inflow(transactions: &[Transaction]) -> f64 {
        Self::total_for(transactions, TransactionKind::Inflow)
    }

    pub fn total_outflow(transactions: &[Transaction]) -> f64 {
        Self::total_for(transactions, TransactionKind::Outflow)
    }

    pub fn balance(transactions: &[Transaction]) -> f64 {
        Self::total_inflow(transactions) - Self::total_outflow(transactions)
    }

    pub fn overview(transactions: &[Transaction]) -> Summary {
        let total_inflow = Self::total_inflow(transactions);
        let total_outflow = Self::total_outflow(transactions);
        Summary {
            total_inflow,
            total_outflow,
            balance: total_inflow - total_outflow,
        }
    }

    /// Groups outflows by category in a single pass.
    pub fn outflow_by_category(transactions: &[Transaction]) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for txn in transactions.iter().filter(|txn| txn.is_outflow()) {
            totals.accumulate(&txn.category, txn.amount);
        }
        totals.drop_zero_totals();
        totals
    }

    fn total_for(transactions: &[Transaction], kind: TransactionKind) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }
}
