//! Monetary amount parsing.
//!
//! Balances and transaction amounts use [`Decimal`] for exact arithmetic.
//! Callers supply amounts as strings (form fields) or JSON numbers, so the
//! helpers here accept both.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Errors that can occur when parsing a monetary amount.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AmountError {
    /// The input string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// The input is not a valid decimal number.
    #[error("invalid amount: {0}")]
    Invalid(String),
}

/// Parse a caller-supplied amount string into a [`Decimal`].
///
/// No sign or bound checks are performed here; the ledger applies whatever
/// it is given (an admin debit may drive a balance negative).
///
/// # Errors
///
/// Returns [`AmountError`] if the input is empty or not a decimal number.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    Decimal::from_str(trimmed).map_err(|_| AmountError::Invalid(trimmed.to_owned()))
}

/// Deserialize a [`Decimal`] from either a JSON string or a JSON number.
///
/// The browser clients send amounts inconsistently (`"40"` from form fields,
/// `40` from scripted requests), so request types accept both:
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct TransferRequest {
///     #[serde(deserialize_with = "ledgerline_core::money::lenient_decimal")]
///     amount: Decimal,
/// }
/// ```
///
/// # Errors
///
/// Returns a deserialization error if the value is neither a decimal string
/// nor a number.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = Raw::deserialize(deserializer)?;
    let text = match &raw {
        Raw::Text(s) => s.clone(),
        Raw::Number(n) => n.to_string(),
    };
    Decimal::from_str(text.trim())
        .map_err(|e| serde::de::Error::custom(format!("invalid amount {text:?}: {e}")))
}
