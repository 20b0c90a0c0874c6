//! In-memory transaction sequence mirrored to a [`TransactionStore`].

use std::collections::HashSet;

use chrono::SubsecRound;
use fineasy_domain::{Identifiable, Transaction, TransactionDraft};
use uuid::Uuid;

use crate::{Clock, SystemClock, TransactionStore};

/// Ordered (most recent first) sequence of transactions.
///
/// The in-memory sequence is authoritative. The store is read once in
/// [`TransactionRepository::open`] and overwritten after every mutation.
pub struct TransactionRepository<S: TransactionStore> {
    store: S,
    clock: Box<dyn Clock>,
    transactions: Vec<Transaction>,
}

impl<S: TransactionStore> TransactionRepository<S> {
    pub fn open(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        let transactions = store.load();
        tracing::debug!(count = transactions.len(), "transactions loaded");
        Self {
            store,
            clock,
            transactions,
        }
    }

    /// Records a new transaction from the entry form.
    ///
    /// Invalid drafts (blank description, amount not strictly positive) are
    /// ignored and `None` is returned.
    pub fn add(&mut self, draft: &TransactionDraft) -> Option<&Transaction> {
        let Some(valid) = draft.validate() else {
            tracing::debug!("ignoring invalid transaction draft");
            return None;
        };
        let mut transaction = Transaction::new(
            valid.description,
            valid.amount,
            valid.kind,
            valid.category,
            self.clock.now().trunc_subsecs(3),
        );
        transaction.id = self.fresh_id();
        tracing::info!(id = %transaction.id, kind = transaction.kind.tag(), "transaction added");
        self.transactions.insert(0, transaction);
        self.persist();
        self.transactions.first()
    }

    /// Removes the transaction with `id`, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<Transaction> {
        let removed = self
            .transactions
            .iter()
            .position(|txn| txn.id() == id)
            .map(|index| self.transactions.remove(index));
        match &removed {
            Some(_) => tracing::info!(id, "transaction removed"),
            None => tracing::debug!(id, "remove requested for unknown transaction"),
        }
        self.persist();
        removed
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fresh_id(&self) -> String {
        let taken: HashSet<&str> = self.transactions.iter().map(Identifiable::id).collect();
        loop {
            let candidate = Uuid::new_v4().to_string();
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.transactions) {
            tracing::error!(error = %err, "failed to persist transactions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, FixedClock, MemoryStore};
    use chrono::{TimeZone, Utc};
    use fineasy_domain::{TransactionKind, DEFAULT_CATEGORY};

    fn repository() -> TransactionRepository<MemoryStore> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap());
        TransactionRepository::with_clock(MemoryStore::new(), Box::new(clock))
    }

    fn draft(description: &str, amount: &str, kind: TransactionKind) -> TransactionDraft {
        TransactionDraft::new(description, amount, kind)
    }

    #[test]
    fn add_prepends_and_persists() {
        let mut repo = repository();
        repo.add(&draft("Salary", "1000", TransactionKind::Inflow).with_category("Salário"))
            .expect("valid");
        let rent_id = repo
            .add(&draft("Rent", "400", TransactionKind::Outflow).with_category("Aluguel"))
            .expect("valid")
            .id
            .clone();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.all()[0].id, rent_id);
        assert_eq!(repo.all()[1].description, "Salary");

        let reloaded = repo.store().load();
        assert_eq!(reloaded, repo.all());
        assert_eq!(repo.store().writes(), 2);
    }

    #[test]
    fn add_stamps_clock_time_and_category() {
        let mut repo = repository();
        let txn = repo
            .add(&draft("Coffee", "4,50", TransactionKind::Outflow))
            .expect("valid")
            .clone();
        assert_eq!(txn.date, Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap());
        assert_eq!(txn.amount, 4.5);
        assert_eq!(txn.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn invalid_drafts_are_no_ops() {
        let mut repo = repository();
        assert!(repo.add(&draft("Nothing", "0", TransactionKind::Outflow)).is_none());
        assert!(repo.add(&draft("", "10", TransactionKind::Outflow)).is_none());
        assert!(repo.add(&draft("Bad", "ten", TransactionKind::Outflow)).is_none());
        assert!(repo.is_empty());
        assert_eq!(repo.store().writes(), 0);
        assert_eq!(repo.store().raw(), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut repo = repository();
        let mut seen = HashSet::new();
        for n in 1..=50 {
            let id = repo
                .add(&draft("Item", &n.to_string(), TransactionKind::Outflow))
                .expect("valid")
                .id
                .clone();
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn remove_drops_matching_record() {
        let mut repo = repository();
        let id = repo
            .add(&draft("Lunch", "25", TransactionKind::Outflow))
            .expect("valid")
            .id
            .clone();
        repo.add(&draft("Bus", "5", TransactionKind::Outflow));

        let removed = repo.remove(&id).expect("present");
        assert_eq!(removed.description, "Lunch");
        assert!(repo.get(&id).is_none());
        assert!(repo.store().load().iter().all(|txn| txn.id != id));
    }

    #[test]
    fn remove_unknown_id_leaves_sequence_unchanged() {
        let mut repo = repository();
        repo.add(&draft("Lunch", "25", TransactionKind::Outflow));
        let before = repo.all().to_vec();
        assert!(repo.remove(&Uuid::new_v4().to_string()).is_none());
        assert_eq!(repo.all(), before.as_slice());
    }

    #[test]
    fn open_reads_existing_slot() {
        let mut seed = MemoryStore::new();
        let txn = Transaction::new(
            "Gift",
            50.0,
            TransactionKind::Inflow,
            "Outros",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        seed.save(std::slice::from_ref(&txn)).unwrap();
        let repo = TransactionRepository::open(seed);
        assert_eq!(repo.all(), [txn]);
    }

    #[test]
    fn foreign_ids_survive_the_next_write() {
        let raw = r#"[{"id":"1717000000000","description":"Salary","amount":1000,
            "type":"entrada","category":"Salário","date":"2024-05-29T16:26:40.000Z"}]"#;
        let mut repo = TransactionRepository::open(MemoryStore::with_raw(raw));
        assert_eq!(repo.len(), 1);

        repo.add(&draft("Rent", "400", TransactionKind::Outflow));
        let stored: Vec<String> = repo
            .store()
            .load()
            .into_iter()
            .map(|txn| txn.description)
            .collect();
        assert_eq!(stored, ["Rent", "Salary"]);

        assert!(repo.remove("1717000000000").is_some());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn open_on_invalid_json_starts_empty() {
        let repo = TransactionRepository::open(MemoryStore::with_raw("[{oops"));
        assert!(repo.is_empty());
    }

    struct FailingStore;

    impl TransactionStore for FailingStore {
        fn load(&self) -> Vec<Transaction> {
            Vec::new()
        }

        fn save(&mut self, _: &[Transaction]) -> Result<(), CoreError> {
            Err(CoreError::Storage("disk full".into()))
        }
    }

    #[test]
    fn save_failures_keep_memory_authoritative() {
        let mut repo = TransactionRepository::open(FailingStore);
        assert!(repo
            .add(&draft("Lunch", "25", TransactionKind::Outflow))
            .is_some());
        assert_eq!(repo.len(), 1);
    }
}
