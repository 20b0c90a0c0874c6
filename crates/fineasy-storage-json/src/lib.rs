//! fineasy-storage-json
//!
//! File-backed persistent store: one named slot holding the JSON array of
//! transactions.

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use fineasy_core::{decode_slot, decode_slot_or_empty, encode_slot, CoreError, TransactionStore};
use fineasy_domain::Transaction;

/// Slot key shared with the web build of Fineasy.
pub const DEFAULT_SLOT_KEY: &str = "@fineasy:transacoes";
const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// A single slot stored as `<root>/<canonical key>.json`.
#[derive(Debug, Clone)]
pub struct JsonSlotStore {
    root: PathBuf,
    key: String,
}

/// Outcome of a strict slot read, used for diagnostics.
#[derive(Debug)]
pub enum SlotHealth {
    Missing,
    Valid(usize),
    Malformed(String),
}

impl JsonSlotStore {
    pub fn new(root: PathBuf, key: impl Into<String>) -> Result<Self, CoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            key: key.into(),
        })
    }

    pub fn with_default_key(root: PathBuf) -> Result<Self, CoreError> {
        Self::new(root, DEFAULT_SLOT_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot_path(&self) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(&self.key), SLOT_EXTENSION))
    }

    /// Strict read: distinguishes a missing slot from malformed content.
    pub fn try_load(&self) -> Result<Option<Vec<Transaction>>, CoreError> {
        match fs::read_to_string(self.slot_path()) {
            Ok(raw) => decode_slot(&raw).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn health(&self) -> SlotHealth {
        match self.try_load() {
            Ok(None) => SlotHealth::Missing,
            Ok(Some(transactions)) => SlotHealth::Valid(transactions.len()),
            Err(err) => SlotHealth::Malformed(err.to_string()),
        }
    }
}

impl TransactionStore for JsonSlotStore {
    fn load(&self) -> Vec<Transaction> {
        let path = self.slot_path();
        match fs::read_to_string(&path) {
            Ok(raw) => decode_slot_or_empty(&raw, &path.display().to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unable to read transaction slot");
                Vec::new()
            }
        }
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), CoreError> {
        let path = self.slot_path();
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &encode_slot(transactions)?)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), count = transactions.len(), "transaction slot written");
        Ok(())
    }
}

/// Maps a storage key such as `@fineasy:transacoes` to a file-safe stem.
pub fn canonical_name(key: &str) -> String {
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in key.trim().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            sanitized.extend(ch.to_lowercase());
            last_dash = false;
        } else if !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        "transactions".to_string()
    } else {
        trimmed
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
