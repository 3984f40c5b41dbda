//! Per-user data fetch for the customer dashboard.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use ledgerline_core::UserId;

use crate::error::{AppError, Result};
use crate::models::{Account, Notification, Transaction, User, UserProfile};
use crate::state::AppState;

/// Query parameters for the data fetch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyDataQuery {
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct MyDataResponse {
    pub success: bool,
    pub user: UserProfile,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub notifications: Vec<Notification>,
}

/// Fetch everything the customer dashboard renders: the user's profile,
/// their accounts, their transactions (most-recent-first), and the global
/// notification list.
pub async fn my_data(
    State(state): State<AppState>,
    Query(query): Query<MyDataQuery>,
) -> Result<Json<MyDataResponse>> {
    let store = state.store();
    let users: Vec<User> = store.load().await?;
    let accounts: Vec<Account> = store.load().await?;
    let transactions: Vec<Transaction> = store.load().await?;
    let notifications: Vec<Notification> = store.load().await?;

    let user = users
        .iter()
        .find(|u| u.user_id == query.user_id)
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))?;

    let my_accounts: Vec<Account> = accounts
        .into_iter()
        .filter(|a| a.user_id == query.user_id)
        .collect();

    let owned_ids: HashSet<_> = my_accounts.iter().map(|a| a.account_id.clone()).collect();
    let mut my_transactions: Vec<Transaction> = transactions
        .into_iter()
        .filter(|t| owned_ids.contains(&t.account_id))
        .collect();
    // The collection is already head-inserted, but ownership filtering may
    // interleave accounts; sort to guarantee most-recent-first.
    my_transactions.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(MyDataResponse {
        success: true,
        user: user.profile(),
        accounts: my_accounts,
        transactions: my_transactions,
        notifications,
    }))
}
