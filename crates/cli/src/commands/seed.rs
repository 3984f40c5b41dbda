//! Seed the data directory with demo users, accounts, and history.
//!
//! Produces a small cast covering the interesting transfer paths: a funded
//! user in good standing, a frozen user, and a funded user with step-up
//! verification enabled (code `1234`).
//!
//! Refuses to touch an already-seeded directory unless `--force` is given.

use std::path::Path;

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use thiserror::Error;

use ledgerline_core::{Email, EmailError, NotificationId, TransactionKind, UserStatus};
use ledgerline_server::ledger;
use ledgerline_server::models::{Account, Notification, Transaction, User};
use ledgerline_server::store::{Collection, JsonStore, StoreError};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The directory already holds collection files and `--force` was not given.
    #[error("data directory already seeded: {0} (use --force to overwrite)")]
    AlreadySeeded(String),

    /// Data directory could not be created.
    #[error("failed to create data directory: {0}")]
    Io(#[from] std::io::Error),

    /// Collection file write failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A built-in demo email failed validation.
    #[error(transparent)]
    Email(#[from] EmailError),
}

/// Seed the given directory with demo data.
///
/// # Errors
///
/// Returns [`SeedError::AlreadySeeded`] if any collection file exists and
/// `force` is false, or an error if a write fails.
pub async fn run(data_dir: &str, force: bool) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let dir = Path::new(data_dir);
    std::fs::create_dir_all(dir)?;

    let existing = [
        User::FILE,
        Account::FILE,
        Transaction::FILE,
        Notification::FILE,
    ]
    .into_iter()
    .find(|file| dir.join(file).exists());

    if let Some(file) = existing {
        if !force {
            return Err(SeedError::AlreadySeeded(
                dir.join(file).display().to_string(),
            ));
        }
        tracing::warn!(data_dir, "overwriting existing collection files");
    }

    let now = Utc::now();
    let mut users = Vec::new();
    let mut accounts = Vec::new();
    let mut transactions = Vec::new();
    let mut notifications = Vec::new();

    // Funded user in good standing.
    let jordan = User::signup(
        "Jordan".to_owned(),
        "Blake".to_owned(),
        Email::parse("jordan@example.com")?,
        "jordan".to_owned(),
        "password123".to_owned(),
        now - Duration::days(90),
    );
    let mut checking = Account::open(jordan.user_id.clone(), "LEDGERLINE CHECKING");
    ledger::apply(
        &mut checking,
        &mut transactions,
        dec!(4200.00),
        TransactionKind::Credit,
        "Payroll Deposit",
        now - Duration::days(14),
    );
    ledger::apply(
        &mut checking,
        &mut transactions,
        dec!(86.40),
        TransactionKind::Debit,
        "Corner Grocery",
        now - Duration::days(3),
    );
    users.push(jordan);
    accounts.push(checking);

    // Frozen user: every transfer attempt is blocked.
    let mut morgan = User::signup(
        "Morgan".to_owned(),
        "Reyes".to_owned(),
        Email::parse("morgan@example.com")?,
        "morgan".to_owned(),
        "password123".to_owned(),
        now - Duration::days(60),
    );
    morgan.status = UserStatus::Frozen;
    morgan.admin_note = "Frozen pending document review.".to_owned();
    let mut frozen_account = Account::open(morgan.user_id.clone(), "LEDGERLINE CHECKING");
    ledger::apply(
        &mut frozen_account,
        &mut transactions,
        dec!(1500.00),
        TransactionKind::Credit,
        "Wire Transfer In",
        now - Duration::days(30),
    );
    users.push(morgan);
    accounts.push(frozen_account);

    // Funded user with the step-up gate enabled.
    let mut casey = User::signup(
        "Casey".to_owned(),
        "Nguyen".to_owned(),
        Email::parse("casey@example.com")?,
        "casey".to_owned(),
        "password123".to_owned(),
        now - Duration::days(30),
    );
    casey.auth_verification.enabled = true;
    casey.auth_verification.auth_name = "Security Code".to_owned();
    casey.auth_verification.auth_code = "1234".to_owned();
    let mut secured_account = Account::open(casey.user_id.clone(), "LEDGERLINE CHECKING");
    ledger::apply(
        &mut secured_account,
        &mut transactions,
        dec!(980.00),
        TransactionKind::Credit,
        "Payroll Deposit",
        now - Duration::days(7),
    );
    users.push(casey);
    accounts.push(secured_account);

    notifications.push(Notification {
        id: NotificationId::generate(),
        kind: "alert".to_owned(),
        title: "Welcome to Ledgerline".to_owned(),
        message: "Your demo environment is ready.".to_owned(),
        date: now,
        read: false,
        icon: "fas fa-university".to_owned(),
    });

    let store = JsonStore::new(dir);
    store.save(&users).await?;
    store.save_ledger(&accounts, &transactions).await?;
    store.save(&notifications).await?;

    tracing::info!(
        data_dir,
        users = users.len(),
        accounts = accounts.len(),
        transactions = transactions.len(),
        "demo data written"
    );
    for user in &users {
        tracing::info!(
            username = %user.username,
            user_id = %user.user_id,
            status = %user.status,
            step_up = user.auth_verification.enabled,
            "seeded user"
        );
    }

    Ok(())
}
