//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Identifiers are
//! prefixed strings (`usr_…`, `tx_…`) so they stay readable in the JSON
//! collection files and in log output.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()` producing a fresh `<prefix>_<uuid>` identifier
/// - `as_str()` accessor, `Display`, and `From<String>`/`From<&str>`
///
/// # Example
///
/// ```rust
/// # use ledgerline_core::define_id;
/// define_id!(UserId, "usr");
/// define_id!(TransactionId, "tx");
///
/// let user_id = UserId::generate();
/// assert!(user_id.as_str().starts_with("usr_"));
///
/// // These are different types, so this won't compile:
/// // let _: UserId = TransactionId::generate();
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix applied to every generated identifier.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, ::uuid::Uuid::new_v4().simple()))
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId, "usr");
define_id!(AccountId, "acc");
define_id!(TransactionId, "tx");
define_id!(NotificationId, "notif");

impl AccountId {
    /// Derive the account ID from an account number (`acc_<digits>`).
    ///
    /// The account ID and the account number share digits so that operators
    /// can correlate them at a glance, matching the collection file format.
    #[must_use]
    pub fn from_number(number: &AccountNumber) -> Self {
        Self(format!("{}_{}", Self::PREFIX, number.as_str()))
    }
}

/// A customer-facing account number: ten random decimal digits.
///
/// Separate from [`AccountId`] because operators key ledger adjustments by
/// account number, while transactions reference accounts by ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Generate a fresh ten-digit account number.
    #[must_use]
    pub fn generate() -> Self {
        let digits: u64 = rand::rng().random_range(1_000_000_000..10_000_000_000);
        Self(digits.to_string())
    }

    /// Get the account number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl From<&str> for AccountNumber {
    fn from(number: &str) -> Self {
        Self(number.to_owned())
    }
}
