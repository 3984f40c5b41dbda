//! Status enums for users, accounts, and transactions.
//!
//! Wire and storage representations match the JSON collection files:
//! user statuses are lowercase (`"frozen"`), account and transaction
//! statuses are capitalized (`"Active"`, `"Posted"`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standing of a customer as set by an operator.
///
/// Anything other than `Successful` blocks outgoing transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account in good standing.
    #[default]
    Successful,
    /// Temporarily barred by an operator.
    Suspended,
    /// Hard-frozen by an operator.
    Frozen,
}

impl UserStatus {
    /// Whether this status prohibits any outgoing transfer.
    #[must_use]
    pub const fn blocks_transfers(self) -> bool {
        matches!(self, Self::Suspended | Self::Frozen)
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Successful => write!(f, "successful"),
            Self::Suspended => write!(f, "suspended"),
            Self::Frozen => write!(f, "frozen"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "successful" => Ok(Self::Successful),
            "suspended" => Ok(Self::Suspended),
            "frozen" => Ok(Self::Frozen),
            _ => Err(format!("invalid user status: {s}")),
        }
    }
}

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum AccountStatus {
    /// Open and usable.
    #[default]
    Active,
    /// Closed; retained for history only.
    Closed,
}

/// Settlement status of a transaction. Every record posts immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum TransactionStatus {
    #[default]
    Posted,
}

/// Direction of a ledger adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Adds to the balance; recorded with a positive amount.
    Credit,
    /// Subtracts from the balance; recorded with a negative amount.
    Debit,
}

impl TransactionKind {
    /// Apply the sign convention to a magnitude: credits stay positive,
    /// debits are negated.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Credit => amount,
            Self::Debit => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Debit => write!(f, "debit"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(format!("invalid transaction kind: {s}")),
        }
    }
}
