//! Ledgerline server library.
//!
//! The binary in `main.rs` is a thin wrapper; everything lives here so the
//! CLI and the integration tests can reuse the store, the domain services,
//! and the router.
//!
//! # Architecture
//!
//! - [`store`] - JSON flat-file persistence (whole-file read/rewrite)
//! - [`models`] - The four persisted collections
//! - [`ledger`] - Balance adjustments and their transaction records
//! - [`transfer`] - The gated funds-transfer flow
//! - [`notify`] - Operator-adjustment notifications
//! - [`routes`] - The axum customer and admin API surfaces

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;
pub mod store;
pub mod transfer;

pub use config::ServerConfig;
pub use error::{AppError, Result};
pub use state::AppState;
pub use store::JsonStore;
