//! Persistent store abstraction for the transaction slot.

use fineasy_domain::Transaction;

use crate::CoreError;

/// Durable mirror of the transaction sequence.
///
/// `load` never fails: an absent or unreadable slot yields an empty sequence.
/// `save` overwrites the whole slot.
pub trait TransactionStore {
    fn load(&self) -> Vec<Transaction>;
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), CoreError>;
}

impl<S: TransactionStore + ?Sized> TransactionStore for Box<S> {
    fn load(&self) -> Vec<Transaction> {
        (**self).load()
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), CoreError> {
        (**self).save(transactions)
    }
}

/// Serializes the sequence into the slot's JSON array representation.
pub fn encode_slot(transactions: &[Transaction]) -> Result<String, CoreError> {
    Ok(serde_json::to_string(transactions)?)
}

/// Strict slot decoding. A blank slot decodes to an empty sequence.
pub fn decode_slot(raw: &str) -> Result<Vec<Transaction>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

/// Lenient decoding used by `load`: malformed data is logged and dropped.
pub fn decode_slot_or_empty(raw: &str, origin: &str) -> Vec<Transaction> {
    match decode_slot(raw) {
        Ok(transactions) => transactions,
        Err(err) => {
            tracing::warn!(%origin, error = %err, "discarding malformed transaction slot");
            Vec::new()
        }
    }
}

/// In-memory slot holding the raw JSON text, as a browser storage entry would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with arbitrary slot content, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Number of completed `save` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TransactionStore for MemoryStore {
    fn load(&self) -> Vec<Transaction> {
        self.slot
            .as_deref()
            .map(|raw| decode_slot_or_empty(raw, "memory"))
            .unwrap_or_default()
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), CoreError> {
        self.slot = Some(encode_slot(transactions)?);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fineasy_domain::TransactionKind;

    #[test]
    fn absent_slot_loads_empty() {
        assert!(MemoryStore::new().load().is_empty());
    }

    #[test]
    fn malformed_slot_loads_empty() {
        assert!(MemoryStore::with_raw("{not json").load().is_empty());
        assert!(MemoryStore::with_raw("{\"id\": 1}").load().is_empty());
        assert!(MemoryStore::with_raw("[{\"amount\": 3}]").load().is_empty());
    }

    #[test]
    fn blank_slot_decodes_empty() {
        assert!(decode_slot("  ").unwrap().is_empty());
        assert!(decode_slot("[]").unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_whole_slot() {
        let mut store = MemoryStore::with_raw("garbage");
        let txn = fineasy_domain::Transaction::new(
            "Lunch",
            32.5,
            TransactionKind::Outflow,
            "Alimento",
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        );
        store.save(std::slice::from_ref(&txn)).unwrap();
        assert_eq!(store.load(), vec![txn]);
        store.save(&[]).unwrap();
        assert_eq!(store.raw(), Some("[]"));
        assert_eq!(store.writes(), 2);
    }
}
