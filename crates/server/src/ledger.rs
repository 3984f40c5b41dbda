//! The account ledger: balance adjustments and their transaction records.
//!
//! Both mutations happen on in-memory collections; the caller persists them
//! afterwards via [`JsonStore::save_ledger`](crate::store::JsonStore::save_ledger)
//! so balance and history share one write boundary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use ledgerline_core::{AccountNumber, TransactionId, TransactionKind, TransactionStatus};

use crate::models::{Account, Transaction};

/// Errors that can occur while posting a ledger adjustment.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No account matched the given account number. No partial effect.
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),
}

/// Result of a posted adjustment.
#[derive(Debug, Clone)]
pub struct Posting {
    /// The transaction that was prepended to the history.
    pub transaction: Transaction,
    /// The account balance after the adjustment.
    pub new_balance: Decimal,
}

/// Apply a signed adjustment to an already-selected account and prepend the
/// transaction record.
///
/// Credits add to the balance, debits subtract. No lower bound is enforced:
/// an admin debit may drive a balance negative. The amount magnitude is not
/// validated here; callers parse and decide what to pass.
pub fn apply(
    account: &mut Account,
    transactions: &mut Vec<Transaction>,
    amount: Decimal,
    kind: TransactionKind,
    merchant: &str,
    now: DateTime<Utc>,
) -> Transaction {
    let signed = kind.signed(amount);
    account.balance += signed;

    let transaction = Transaction {
        transaction_id: TransactionId::generate(),
        account_id: account.account_id.clone(),
        merchant: merchant.to_owned(),
        date: now,
        amount: signed,
        status: TransactionStatus::Posted,
        kind,
    };
    transactions.insert(0, transaction.clone());
    transaction
}

/// Post an operator adjustment keyed by account number.
///
/// The account is resolved by exact string equality on the account number.
///
/// # Errors
///
/// Returns [`LedgerError::AccountNotFound`] if no account matches; neither
/// collection is touched in that case.
pub fn post_adjustment(
    accounts: &mut [Account],
    transactions: &mut Vec<Transaction>,
    account_number: &AccountNumber,
    amount: Decimal,
    kind: TransactionKind,
    merchant: &str,
    now: DateTime<Utc>,
) -> Result<Posting, LedgerError> {
    let account = accounts
        .iter_mut()
        .find(|a| &a.account_number == account_number)
        .ok_or_else(|| LedgerError::AccountNotFound(account_number.clone()))?;

    let transaction = apply(account, transactions, amount, kind, merchant, now);
    Ok(Posting {
        new_balance: account.balance,
        transaction,
    })
}
