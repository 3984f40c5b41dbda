//! JSON flat-file persistence.
//!
//! Each collection lives in one JSON array file under the data directory
//! (`users.json`, `accounts.json`, `transactions.json`,
//! `notifications.json`). Every operation is whole-file: load parses the
//! entire array, save rewrites it.
//!
//! # Semantics
//!
//! - A missing or corrupt file degrades to an empty collection. Parse
//!   failures are logged at warn, never surfaced to callers.
//! - Saves replace the file atomically (temp file + rename), so a crashed
//!   write never leaves a half-written collection behind.
//! - There is no locking. Two concurrent requests touching the same
//!   collection race read-modify-write; the last writer wins. This is a
//!   documented consistency gap of the demo, not a guarantee.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;

use crate::models::{Account, Transaction};

/// A record type persisted as one JSON array file.
pub trait Collection: Serialize + DeserializeOwned + Send + Sync {
    /// File name under the data directory.
    const FILE: &'static str;
}

/// Errors that can occur while reading or writing collection files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection failed to serialize. Indicates a bug, not bad data on
    /// disk (corrupt files degrade to empty on load instead).
    #[error("failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Flat-file store rooted at a data directory.
///
/// Cheap to clone; holds only the directory path. All state lives on disk,
/// so nothing survives between requests except through the files.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `data_dir`. The directory is not created
    /// here; the server does that at startup.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load an entire collection.
    ///
    /// Returns an empty collection if the file is absent or does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] only for I/O failures other than the file
    /// not existing.
    pub async fn load<C: Collection>(&self) -> Result<Vec<C>, StoreError> {
        let path = self.path_for(C::FILE);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    file = C::FILE,
                    error = %e,
                    "collection file is corrupt, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite an entire collection atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or any filesystem step fails.
    pub async fn save<C: Collection>(&self, records: &[C]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Serialize {
            file: C::FILE,
            source,
        })?;

        let path = self.path_for(C::FILE);
        let tmp = self.path_for(&format!("{}.tmp", C::FILE));

        fs::write(&tmp, &json).await.map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Io { path, source })
    }

    /// Persist both ledger collections in one call.
    ///
    /// The transaction history is written before the balances: if the first
    /// write fails, no balance has moved, so the two collections cannot
    /// drift apart through a partial save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either write fails.
    pub async fn save_ledger(
        &self,
        accounts: &[Account],
        transactions: &[Transaction],
    ) -> Result<(), StoreError> {
        self.save(transactions).await?;
        self.save(accounts).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ledgerline_core::UserId;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    use super::*;

    fn store() -> (TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let (_dir, store) = store();
        let accounts: Vec<Account> = store.load().await.unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (_dir, store) = store();
        let mut account = Account::open(UserId::from("usr_demo"), "LEDGERLINE CHECKING");
        account.balance = dec!(100.00);

        store.save(std::slice::from_ref(&account)).await.unwrap();
        let loaded: Vec<Account> = store.load().await.unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].account_id, account.account_id);
        assert_eq!(loaded[0].balance, dec!(100.00));
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let (dir, store) = store();
        std::fs::write(dir.path().join(Account::FILE), b"{ not json").unwrap();

        let accounts: Vec<Account> = store.load().await.unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let (dir, store) = store();
        let account = Account::open(UserId::from("usr_demo"), "LEDGERLINE CHECKING");
        store.save(std::slice::from_ref(&account)).await.unwrap();

        assert!(dir.path().join(Account::FILE).exists());
        assert!(!dir.path().join("accounts.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_ledger_writes_both_collections() {
        let (dir, store) = store();
        let account = Account::open(UserId::from("usr_demo"), "LEDGERLINE CHECKING");
        store
            .save_ledger(std::slice::from_ref(&account), &[])
            .await
            .unwrap();

        assert!(dir.path().join(Account::FILE).exists());
        assert!(dir.path().join(Transaction::FILE).exists());
    }
}
