//! End-to-end flows over a temporary data directory: the services mutate
//! loaded collections and the store persists them, exactly as the route
//! handlers do.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use ledgerline_core::{Email, TransactionKind, UserStatus};
use ledgerline_server::models::{Account, Notification, Transaction, User};
use ledgerline_server::store::JsonStore;
use ledgerline_server::transfer::{TransferOutcome, TransferRequest};
use ledgerline_server::{ledger, notify, transfer};

fn seeded_store(status: UserStatus, balance: Decimal) -> (TempDir, JsonStore, User, Account) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    let mut user = User::signup(
        "Demo".to_owned(),
        "Customer".to_owned(),
        Email::parse("demo@example.com").unwrap(),
        "demo".to_owned(),
        "hunter2".to_owned(),
        Utc::now(),
    );
    user.status = status;

    let mut account = Account::open(user.user_id.clone(), "LEDGERLINE CHECKING");
    account.balance = balance;

    (dir, store, user, account)
}

async fn persist(store: &JsonStore, user: &User, account: &Account) {
    store.save(std::slice::from_ref(user)).await.unwrap();
    store.save(std::slice::from_ref(account)).await.unwrap();
}

#[tokio::test]
async fn successful_transfer_persists_debit_and_history() {
    let (_dir, store, user, account) = seeded_store(UserStatus::Successful, dec!(100.00));
    persist(&store, &user, &account).await;

    let users: Vec<User> = store.load().await.unwrap();
    let mut accounts: Vec<Account> = store.load().await.unwrap();
    let mut transactions: Vec<Transaction> = store.load().await.unwrap();

    let outcome = transfer::execute(
        &users,
        &mut accounts,
        &mut transactions,
        &TransferRequest {
            user_id: &user.user_id,
            amount: dec!(40),
            recipient: "Alice",
            auth_code: None,
        },
        Utc::now(),
    )
    .unwrap();

    assert!(matches!(outcome, TransferOutcome::Completed(_)));
    store.save_ledger(&accounts, &transactions).await.unwrap();

    // Reload from disk: the debit and the record both survived.
    let accounts: Vec<Account> = store.load().await.unwrap();
    let transactions: Vec<Transaction> = store.load().await.unwrap();
    assert_eq!(accounts[0].balance, dec!(60.00));
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, dec!(-40));
    assert_eq!(transactions[0].account_id, accounts[0].account_id);
}

#[tokio::test]
async fn blocked_transfer_leaves_store_untouched() {
    let (_dir, store, user, account) = seeded_store(UserStatus::Frozen, dec!(100.00));
    persist(&store, &user, &account).await;

    let users: Vec<User> = store.load().await.unwrap();
    let mut accounts: Vec<Account> = store.load().await.unwrap();
    let mut transactions: Vec<Transaction> = store.load().await.unwrap();

    let outcome = transfer::execute(
        &users,
        &mut accounts,
        &mut transactions,
        &TransferRequest {
            user_id: &user.user_id,
            amount: dec!(1),
            recipient: "Alice",
            auth_code: None,
        },
        Utc::now(),
    )
    .unwrap();

    assert!(matches!(outcome, TransferOutcome::Blocked { .. }));

    // The handler skips save_ledger for non-completed outcomes; verify the
    // in-memory collections were not mutated either.
    assert_eq!(accounts[0].balance, dec!(100.00));
    assert!(transactions.is_empty());
}

#[tokio::test]
async fn step_up_retry_flow() {
    let (_dir, store, mut user, account) = seeded_store(UserStatus::Successful, dec!(100.00));
    user.auth_verification.enabled = true;
    user.auth_verification.auth_code = "1234".to_owned();
    persist(&store, &user, &account).await;

    let users: Vec<User> = store.load().await.unwrap();
    let mut accounts: Vec<Account> = store.load().await.unwrap();
    let mut transactions: Vec<Transaction> = store.load().await.unwrap();

    // First attempt: no code.
    let outcome = transfer::execute(
        &users,
        &mut accounts,
        &mut transactions,
        &TransferRequest {
            user_id: &user.user_id,
            amount: dec!(40),
            recipient: "Alice",
            auth_code: None,
        },
        Utc::now(),
    )
    .unwrap();
    assert!(matches!(outcome, TransferOutcome::AuthRequired { .. }));

    // Retry with the stored code.
    let outcome = transfer::execute(
        &users,
        &mut accounts,
        &mut transactions,
        &TransferRequest {
            user_id: &user.user_id,
            amount: dec!(40),
            recipient: "Alice",
            auth_code: Some("1234"),
        },
        Utc::now(),
    )
    .unwrap();
    assert!(matches!(outcome, TransferOutcome::Completed(_)));
    assert_eq!(accounts[0].balance, dec!(60.00));
}

#[tokio::test]
async fn admin_adjustment_posts_and_notifies() {
    let (_dir, store, user, account) = seeded_store(UserStatus::Successful, dec!(0));
    persist(&store, &user, &account).await;

    let mut accounts: Vec<Account> = store.load().await.unwrap();
    let mut transactions: Vec<Transaction> = store.load().await.unwrap();
    let mut notifications: Vec<Notification> = store.load().await.unwrap();

    let now = Utc::now();
    let posting = ledger::post_adjustment(
        &mut accounts,
        &mut transactions,
        &account.account_number,
        dec!(250.00),
        TransactionKind::Credit,
        "Payroll",
        now,
    )
    .unwrap();
    notify::emit_adjustment(&mut notifications, TransactionKind::Credit, dec!(250.00), now);

    store.save_ledger(&accounts, &transactions).await.unwrap();
    store.save(&notifications).await.unwrap();

    assert_eq!(posting.new_balance, dec!(250.00));

    let notifications: Vec<Notification> = store.load().await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Deposit Received");
    assert!(!notifications[0].read);

    let transactions: Vec<Transaction> = store.load().await.unwrap();
    assert_eq!(transactions[0].merchant, "Payroll");
    assert_eq!(transactions[0].amount, dec!(250.00));
}

#[tokio::test]
async fn credit_then_debit_round_trips_through_disk() {
    let (_dir, store, user, account) = seeded_store(UserStatus::Successful, dec!(100.00));
    persist(&store, &user, &account).await;

    for kind in [TransactionKind::Credit, TransactionKind::Debit] {
        let mut accounts: Vec<Account> = store.load().await.unwrap();
        let mut transactions: Vec<Transaction> = store.load().await.unwrap();
        ledger::post_adjustment(
            &mut accounts,
            &mut transactions,
            &account.account_number,
            dec!(33.33),
            kind,
            "Adjustment",
            Utc::now(),
        )
        .unwrap();
        store.save_ledger(&accounts, &transactions).await.unwrap();
    }

    let accounts: Vec<Account> = store.load().await.unwrap();
    let transactions: Vec<Transaction> = store.load().await.unwrap();
    assert_eq!(accounts[0].balance, dec!(100.00));
    assert_eq!(transactions.len(), 2);
}
