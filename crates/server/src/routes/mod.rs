//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//!
//! # Customer surface
//! POST /api/signup              - Create a user and their account
//! POST /api/login               - Customer login
//! POST /api/transfer            - Funds transfer flow
//! GET  /api/my-data?userId=…    - User, accounts, transactions, notifications
//!
//! # Admin (operator surface)
//! POST /api/admin/login         - Operator login
//! GET  /api/admin/data          - All users and accounts
//! POST /api/admin/update-user   - Set status, note, step-up config
//! POST /api/admin/transaction   - Ledger adjustment + notification
//!
//! # Static assets
//! Anything else falls back to the configured public directory.
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod transfer;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/transfer", post(transfer::transfer))
        .route("/my-data", get(account::my_data))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::admin_login))
        .route("/data", get(admin::data))
        .route("/update-user", post(admin::update_user))
        .route("/transaction", post(admin::transaction))
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    customer_routes().nest("/admin", admin_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create the full application router: API routes, static asset fallback,
/// CORS, and request tracing.
pub fn app(state: AppState) -> Router {
    let public_dir = state.config().public_dir.clone();

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
