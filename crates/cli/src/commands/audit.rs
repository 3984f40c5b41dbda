//! Ledger audit: recompute each account's balance from its transaction
//! history and report any drift against the stored balance.
//!
//! Transactions carry signed amounts, so the expected balance is a plain
//! sum. A clean run exits zero; any drift is reported per account and the
//! command fails.

use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use ledgerline_core::AccountId;
use ledgerline_server::models::{Account, Transaction};
use ledgerline_server::store::{JsonStore, StoreError};

/// Errors that can occur while auditing.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Collection file read failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// One or more stored balances disagree with their transaction history.
    #[error("{0} account(s) have drifted from their transaction history")]
    Drift(usize),
}

/// Audit the collections in the given directory.
///
/// # Errors
///
/// Returns [`AuditError::Drift`] when any stored balance differs from the
/// sum of that account's transactions.
pub async fn run(data_dir: &str) -> Result<(), AuditError> {
    let store = JsonStore::new(data_dir);
    let accounts: Vec<Account> = store.load().await?;
    let transactions: Vec<Transaction> = store.load().await?;

    let mut sums: HashMap<AccountId, Decimal> = HashMap::new();
    for transaction in &transactions {
        *sums.entry(transaction.account_id.clone()).or_default() += transaction.amount;
    }

    // Transactions referencing no surviving account would otherwise go
    // unnoticed.
    let known: Vec<&AccountId> = accounts.iter().map(|a| &a.account_id).collect();
    for orphan in sums.keys().filter(|id| !known.contains(id)) {
        tracing::warn!(account_id = %orphan, "transactions reference an unknown account");
    }

    let mut drifted = 0;
    for account in &accounts {
        let expected = sums.get(&account.account_id).copied().unwrap_or_default();
        if expected == account.balance {
            tracing::info!(
                account = %account.account_number,
                balance = %account.balance,
                "balance matches history"
            );
        } else {
            drifted += 1;
            tracing::warn!(
                account = %account.account_number,
                stored = %account.balance,
                expected = %expected,
                "balance drift detected"
            );
        }
    }

    if drifted > 0 {
        return Err(AuditError::Drift(drifted));
    }

    tracing::info!(
        accounts = accounts.len(),
        transactions = transactions.len(),
        "audit clean"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use ledgerline_core::{Email, TransactionKind};
    use ledgerline_server::ledger;
    use ledgerline_server::models::User;
    use rust_decimal_macros::dec;

    use super::*;

    #[tokio::test]
    async fn test_audit_passes_after_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        crate::commands::seed::run(path, false).await.unwrap();
        run(path).await.unwrap();
    }

    #[tokio::test]
    async fn test_audit_flags_drifted_balance() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let user = User::signup(
            "Demo".to_owned(),
            "Customer".to_owned(),
            Email::parse("demo@example.com").unwrap(),
            "demo".to_owned(),
            "hunter2".to_owned(),
            Utc::now(),
        );
        let mut account = Account::open(user.user_id.clone(), "LEDGERLINE CHECKING");
        let mut transactions = Vec::new();
        ledger::apply(
            &mut account,
            &mut transactions,
            dec!(100),
            TransactionKind::Credit,
            "Deposit",
            Utc::now(),
        );

        // Corrupt the stored balance.
        account.balance = dec!(250);
        store
            .save_ledger(std::slice::from_ref(&account), &transactions)
            .await
            .unwrap();

        let result = run(dir.path().to_str().unwrap()).await;
        assert!(matches!(result, Err(AuditError::Drift(1))));
    }

    #[tokio::test]
    async fn test_audit_is_clean_on_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path().to_str().unwrap()).await.unwrap();
    }
}
