//! Account domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerline_core::{AccountId, AccountNumber, AccountStatus, UserId};

use crate::store::Collection;

/// A deposit account belonging to exactly one user.
///
/// Created once at signup with a zero balance; the balance is mutated only
/// by ledger operations and the record is never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account ID (`acc_<number>`).
    pub account_id: AccountId,
    /// Owning user.
    pub user_id: UserId,
    /// Product label shown in the client.
    pub account_name: String,
    /// Customer-facing ten-digit number; operators key adjustments by it.
    pub account_number: AccountNumber,
    /// Current balance. Exact decimal; may go negative via admin debit.
    pub balance: Decimal,
    pub status: AccountStatus,
}

impl Collection for Account {
    const FILE: &'static str = "accounts.json";
}

impl Account {
    /// Open a fresh account for a user with a zero balance.
    #[must_use]
    pub fn open(user_id: UserId, account_name: &str) -> Self {
        let account_number = AccountNumber::generate();
        Self {
            account_id: AccountId::from_number(&account_number),
            user_id,
            account_name: account_name.to_owned(),
            account_number,
            balance: Decimal::ZERO,
            status: AccountStatus::Active,
        }
    }
}
