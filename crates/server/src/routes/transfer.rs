//! The transfer endpoint.
//!
//! Gate outcomes are soft failures: the response is 200 with
//! `success: false` and, for BLOCK and AUTH_REQUIRED, an `errorType`
//! discriminator the client uses to pick which follow-up prompt to show.
//! Hard failures (unknown user, no account) surface as [`AppError`].

use axum::{Json, extract::State};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerline_core::{UserId, money};

use crate::error::Result;
use crate::models::{Account, Transaction, User};
use crate::state::AppState;
use crate::transfer::{Receipt, TransferOutcome, TransferRequest};

/// Transfer form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBody {
    pub user_id: UserId,
    #[serde(deserialize_with = "money::lenient_decimal")]
    pub amount: Decimal,
    pub recipient: String,
    /// Step-up code, when the client re-submits after an AUTH_REQUIRED.
    pub auth_code: Option<String>,
}

/// Transfer response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}

impl TransferResponse {
    fn completed(receipt: Receipt) -> Self {
        Self {
            success: true,
            error_type: None,
            auth_name: None,
            message: None,
            receipt: Some(receipt),
        }
    }

    fn failure(error_type: Option<&'static str>, message: String) -> Self {
        Self {
            success: false,
            error_type,
            auth_name: None,
            message: Some(message),
            receipt: None,
        }
    }
}

/// Handle a user-initiated transfer.
pub async fn transfer(
    State(state): State<AppState>,
    Json(body): Json<TransferBody>,
) -> Result<Json<TransferResponse>> {
    let store = state.store();
    let users: Vec<User> = store.load().await?;
    let mut accounts: Vec<Account> = store.load().await?;
    let mut transactions: Vec<Transaction> = store.load().await?;

    let request = TransferRequest {
        user_id: &body.user_id,
        amount: body.amount,
        recipient: &body.recipient,
        auth_code: body.auth_code.as_deref(),
    };

    let outcome = crate::transfer::execute(
        &users,
        &mut accounts,
        &mut transactions,
        &request,
        Utc::now(),
    )?;

    let response = match outcome {
        TransferOutcome::Completed(receipt) => {
            // Only a completed transfer mutates the ledger; persist both
            // collections in one write boundary.
            store.save_ledger(&accounts, &transactions).await?;
            tracing::info!(
                user_id = %body.user_id,
                amount = %body.amount,
                "transfer completed"
            );
            TransferResponse::completed(receipt)
        }
        TransferOutcome::Blocked { status } => TransferResponse::failure(
            Some("BLOCK"),
            format!(
                "Transaction Failed: Your account status is {}. Please contact support.",
                status.to_string().to_uppercase()
            ),
        ),
        TransferOutcome::AuthRequired { auth_name } => {
            let mut response = TransferResponse::failure(
                Some("AUTH_REQUIRED"),
                "Verification Required".to_owned(),
            );
            response.auth_name = Some(auth_name);
            response
        }
        TransferOutcome::InsufficientFunds => {
            TransferResponse::failure(None, "Insufficient funds".to_owned())
        }
    };

    Ok(Json(response))
}
