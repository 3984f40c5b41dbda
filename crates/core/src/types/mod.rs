//! Shared newtype wrappers and enums.

pub mod email;
pub mod id;
pub mod money;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{AccountId, AccountNumber, NotificationId, TransactionId, UserId};
pub use money::{AmountError, parse_amount};
pub use status::{AccountStatus, TransactionKind, TransactionStatus, UserStatus};
