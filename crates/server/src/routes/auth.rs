//! Authentication route handlers.
//!
//! Signup, customer login, and operator login. Credentials are compared by
//! plain equality against stored values; real authentication is explicitly
//! out of scope for this demo, so there are no sessions or tokens — the
//! client holds on to the returned `userId`.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use ledgerline_core::{Email, UserId};

use crate::error::{AppError, Result};
use crate::models::{Account, User};
use crate::state::AppState;

/// Product label for the account opened at signup.
const DEFAULT_ACCOUNT_NAME: &str = "LEDGERLINE CHECKING";

// =============================================================================
// Request / Response Types
// =============================================================================

/// Signup form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Operator login form data.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: UserId,
    pub first_name: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle signup: create the user plus their single checking account.
///
/// Duplicate username or email → 409.
pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupRequest>,
) -> Result<Json<MessageResponse>> {
    let email =
        Email::parse(&form.email).map_err(|e| AppError::Validation(e.to_string()))?;
    if form.username.trim().is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_owned()));
    }

    let store = state.store();
    let mut users: Vec<User> = store.load().await?;
    let mut accounts: Vec<Account> = store.load().await?;

    if users
        .iter()
        .any(|u| u.username == form.username || u.email == email)
    {
        return Err(AppError::Conflict("User already exists".to_owned()));
    }

    let user = User::signup(
        form.first_name,
        form.last_name,
        email,
        form.username,
        form.password,
        chrono::Utc::now(),
    );
    let account = Account::open(user.user_id.clone(), DEFAULT_ACCOUNT_NAME);

    tracing::info!(user_id = %user.user_id, "user signed up");

    users.push(user);
    accounts.push(account);

    store.save(&users).await?;
    store.save(&accounts).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Account created successfully",
    }))
}

/// Handle customer login: username/password equality check.
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let users: Vec<User> = state.store().load().await?;

    let user = users
        .iter()
        .find(|u| u.username == form.username && u.password == form.password)
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_owned()))?;

    Ok(Json(LoginResponse {
        success: true,
        user_id: user.user_id.clone(),
        first_name: user.first_name.clone(),
    }))
}

/// Handle operator login against the configured admin credentials.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(form): Json<AdminLoginRequest>,
) -> Result<Json<MessageResponse>> {
    if !state
        .config()
        .admin_credentials_match(&form.email, &form.password)
    {
        return Err(AppError::Unauthorized(
            "Invalid Admin credentials".to_owned(),
        ));
    }

    Ok(Json(MessageResponse {
        success: true,
        message: "Welcome back",
    }))
}
