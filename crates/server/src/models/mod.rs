//! Domain records persisted in the JSON collection files.
//!
//! Field names serialize in camelCase to match the collection file format
//! (`userId`, `accountNumber`, `authVerification`, …).

pub mod account;
pub mod notification;
pub mod transaction;
pub mod user;

pub use account::Account;
pub use notification::Notification;
pub use transaction::Transaction;
pub use user::{StepUpVerification, User, UserProfile};
