//! Ledgerline Core - Shared types library.
//!
//! This crate provides common types used across all Ledgerline components:
//! - `server` - The HTTP server (customer and admin API surfaces)
//! - `cli` - Command-line tools for seeding and auditing the data store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, amounts, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
