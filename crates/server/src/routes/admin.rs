//! Admin (operator) route handlers.
//!
//! The operator dashboard fetches all users and accounts, edits a user's
//! standing and step-up config, and posts ledger adjustments.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerline_core::{AccountNumber, TransactionKind, UserId, UserStatus, parse_amount};

use crate::error::{AppError, Result};
use crate::models::{Account, Notification, StepUpVerification, Transaction, User};
use crate::state::AppState;
use crate::{ledger, notify};

// =============================================================================
// Request / Response Types
// =============================================================================

#[derive(Debug, Serialize)]
pub struct AdminDataResponse {
    pub success: bool,
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
}

/// Fields an operator may rewrite on a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: UserId,
    pub status: UserStatus,
    #[serde(default)]
    pub admin_note: String,
    #[serde(default)]
    pub auth_verification: StepUpVerification,
}

/// Operator ledger adjustment.
///
/// The amount arrives as a caller-supplied string and is parsed, not
/// otherwise validated: nothing stops a huge credit or a debit past zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTransactionRequest {
    pub account_number: AccountNumber,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub merchant: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTransactionResponse {
    pub success: bool,
    pub message: &'static str,
    pub new_balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub success: bool,
    pub message: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Fetch all users and accounts for the dashboard.
pub async fn data(State(state): State<AppState>) -> Result<Json<AdminDataResponse>> {
    let store = state.store();
    let users: Vec<User> = store.load().await?;
    let accounts: Vec<Account> = store.load().await?;

    Ok(Json(AdminDataResponse {
        success: true,
        users,
        accounts,
    }))
}

/// Rewrite a user's status, note, and step-up config.
pub async fn update_user(
    State(state): State<AppState>,
    Json(form): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>> {
    let store = state.store();
    let mut users: Vec<User> = store.load().await?;

    let user = users
        .iter_mut()
        .find(|u| u.user_id == form.user_id)
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;

    user.status = form.status;
    user.admin_note = form.admin_note;
    user.auth_verification = form.auth_verification;

    tracing::info!(user_id = %form.user_id, status = %form.status, "admin updated user");

    store.save(&users).await?;

    Ok(Json(UpdateUserResponse {
        success: true,
        message: "User updated successfully",
    }))
}

/// Post an operator ledger adjustment and emit a notification.
///
/// The balance mutation and the transaction record persist through one
/// `save_ledger` call so they cannot drift through a partial save.
pub async fn transaction(
    State(state): State<AppState>,
    Json(form): Json<AdminTransactionRequest>,
) -> Result<Json<AdminTransactionResponse>> {
    let amount = parse_amount(&form.amount)?;

    let store = state.store();
    let mut accounts: Vec<Account> = store.load().await?;
    let mut transactions: Vec<Transaction> = store.load().await?;
    let mut notifications: Vec<Notification> = store.load().await?;

    let now = Utc::now();
    let merchant = form
        .merchant
        .or(form.description)
        .unwrap_or_else(|| "Admin Adjustment".to_owned());

    let posting = ledger::post_adjustment(
        &mut accounts,
        &mut transactions,
        &form.account_number,
        amount,
        form.kind,
        &merchant,
        form.date.unwrap_or(now),
    )?;

    notify::emit_adjustment(&mut notifications, form.kind, amount, now);

    store.save_ledger(&accounts, &transactions).await?;
    store.save(&notifications).await?;

    tracing::info!(
        account = %form.account_number,
        kind = %form.kind,
        %amount,
        "admin posted adjustment"
    );

    Ok(Json(AdminTransactionResponse {
        success: true,
        message: "Transaction processed",
        new_balance: posting.new_balance,
    }))
}
