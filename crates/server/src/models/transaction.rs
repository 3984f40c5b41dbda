//! Transaction domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerline_core::{AccountId, TransactionId, TransactionKind, TransactionStatus};

use crate::store::Collection;

/// An immutable ledger record.
///
/// Inserted at the head of the collection (most-recent-first); never
/// mutated or removed. The amount carries the sign convention: positive for
/// credits, negative for debits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction ID (`tx_…`).
    pub transaction_id: TransactionId,
    /// Account this posting applies to.
    pub account_id: AccountId,
    /// Merchant or free-text description.
    pub merchant: String,
    pub date: DateTime<Utc>,
    /// Signed amount: positive = credit, negative = debit.
    pub amount: Decimal,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Collection for Transaction {
    const FILE: &'static str = "transactions.json";
}
