//! Entry-form state for a transaction that has not been recorded yet.

use crate::{category::DEFAULT_CATEGORY, transaction::TransactionKind};

/// Raw values captured by the entry form.
///
/// `amount` stays as typed so the form can be re-rendered untouched; parsing
/// happens on submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
    pub custom_category: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Outflow,
            category: DEFAULT_CATEGORY.to_string(),
            custom_category: String::new(),
        }
    }
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_custom_category(mut self, custom: impl Into<String>) -> Self {
        self.custom_category = custom.into();
        self
    }

    /// Parsed amount when it is a positive finite number.
    pub fn parsed_amount(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }

    /// Custom tag wins over the selected category when it has content.
    pub fn resolved_category(&self) -> String {
        if !self.custom_category.trim().is_empty() {
            return self.custom_category.clone();
        }
        if self.category.trim().is_empty() {
            return DEFAULT_CATEGORY.to_string();
        }
        self.category.clone()
    }

    /// Any typed text counts, including blanks.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }

    /// Returns the validated `(description, amount, kind, category)` tuple.
    pub fn validate(&self) -> Option<ValidDraft> {
        if !self.has_description() {
            return None;
        }
        let amount = self.parsed_amount()?;
        Some(ValidDraft {
            description: self.description.clone(),
            amount,
            kind: self.kind,
            category: self.resolved_category(),
        })
    }

    /// Restores the form defaults after a submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Draft values that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

/// Parses user-typed amounts. Accepts `.` or a single `,` as the decimal mark.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        if trimmed.matches(',').count() > 1 {
            return None;
        }
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    let value: f64 = normalized.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
