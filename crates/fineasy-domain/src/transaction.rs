//! Domain model for recorded transactions.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single recorded inflow or outflow.
///
/// Records are immutable once created: the repository either holds a record
/// unchanged or not at all. `id` is opaque; new records get a v4 uuid but any
/// string already in the slot is kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }

    /// Amount with the direction applied: positive for inflows, negative for outflows.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Inflow => self.amount,
            TransactionKind::Outflow => -self.amount,
        }
    }

    pub fn is_inflow(&self) -> bool {
        self.kind == TransactionKind::Inflow
    }

    pub fn is_outflow(&self) -> bool {
        self.kind == TransactionKind::Outflow
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind)
    }
}

/// Direction of a transaction. Serialized with the storage slot's locale tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "entrada")]
    Inflow,
    #[default]
    #[serde(rename = "saida")]
    Outflow,
}

impl TransactionKind {
    /// Tag used in the persisted slot.
    pub fn tag(self) -> &'static str {
        match self {
            TransactionKind::Inflow => "entrada",
            TransactionKind::Outflow => "saida",
        }
    }

    /// Sign prefix shown next to amounts in the history list.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Inflow => '+',
            TransactionKind::Outflow => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Inflow => "Entrada",
            TransactionKind::Outflow => "Saída",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "entrada" | "inflow" | "in" | "income" | "+" => Ok(TransactionKind::Inflow),
            "saida" | "saída" | "outflow" | "out" | "expense" | "-" => {
                Ok(TransactionKind::Outflow)
            }
            other => Err(format!("unknown transaction type `{other}`")),
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Transaction {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        Transaction::new("Rent", 400.0, TransactionKind::Outflow, "Aluguel", date)
    }

    #[test]
    fn serializes_with_slot_field_names() {
        let txn = sample();
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "saida");
        assert_eq!(value["amount"], 400.0);
        assert_eq!(value["category"], "Aluguel");
        assert_eq!(value["date"], "2024-03-05T14:30:00.000Z");
        assert_eq!(value["id"], txn.id.as_str());
    }

    #[test]
    fn parses_browser_style_records() {
        let raw = r#"{
            "id": "0b8f3c1e-6a43-4d55-9a53-3f4f1f9c2f0a",
            "description": "Salary",
            "amount": 1000,
            "type": "entrada",
            "category": "Salário",
            "date": "2024-01-31T09:15:42.123Z"
        }"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.kind, TransactionKind::Inflow);
        assert_eq!(txn.amount, 1000.0);
        assert_eq!(
            txn.date,
            Utc.with_ymd_and_hms(2024, 1, 31, 9, 15, 42).unwrap()
                + chrono::Duration::milliseconds(123)
        );
    }

    #[test]
    fn keeps_ids_that_are_not_uuids() {
        let raw = r#"{"id":"1717000000000","description":"Salary","amount":1000,
            "type":"entrada","category":"Salário","date":"2024-05-29T16:26:40.000Z"}"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.id, "1717000000000");
        assert_eq!(serde_json::to_value(&txn).unwrap()["id"], "1717000000000");
    }

    #[test]
    fn rejects_unknown_type_tag() {
        let raw = r#"{"id":"0b8f3c1e-6a43-4d55-9a53-3f4f1f9c2f0a","description":"x",
            "amount":1,"type":"transfer","category":"Outros","date":"2024-01-01T00:00:00.000Z"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn kind_parses_both_vocabularies() {
        assert_eq!("entrada".parse(), Ok(TransactionKind::Inflow));
        assert_eq!("Saída".parse(), Ok(TransactionKind::Outflow));
        assert_eq!("income".parse(), Ok(TransactionKind::Inflow));
        assert!("sideways".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn signed_amount_follows_direction() {
        let mut txn = sample();
        assert_eq!(txn.signed_amount(), -400.0);
        txn.kind = TransactionKind::Inflow;
        assert_eq!(txn.signed_amount(), 400.0);
    }
}
