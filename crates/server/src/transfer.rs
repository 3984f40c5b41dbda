//! The transfer authorizer: gates a user-initiated transfer and commits it.
//!
//! Gates run per request, in a fixed order, with nothing persisted between
//! requests:
//!
//! 1. user lookup
//! 2. status gate (frozen/suspended blocks everything)
//! 3. step-up gate (static shared secret, exact match)
//! 4. explicit account selection
//! 5. balance check
//! 6. commit through the ledger
//!
//! The order is significant: a frozen account never reveals whether step-up
//! would have been required, and an unauthenticated transfer never reveals
//! insufficient funds.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use ledgerline_core::{TransactionKind, UserId, UserStatus};

use crate::ledger;
use crate::models::{Account, Transaction, User};

/// Hard failures of the transfer flow (as opposed to gate outcomes, which
/// are ordinary results the client is expected to handle).
#[derive(Debug, Error)]
pub enum TransferError {
    /// No user matched the given ID.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The user has no account on file.
    #[error("no account on file for user {0}")]
    NoAccount(UserId),

    /// The user has more than one account; the flow refuses to guess which
    /// one to debit.
    #[error("user {0} has multiple accounts; transfer source is ambiguous")]
    AmbiguousAccount(UserId),
}

/// Confirmation returned to the caller on successful completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub recipient: String,
    /// Display reference (`Ref: NNNNNNNNN`). Random, not an idempotency
    /// key: resubmitting the same request debits again.
    pub reference: String,
}

impl Receipt {
    fn generate_reference() -> String {
        let digits: u32 = rand::rng().random_range(100_000_000..1_000_000_000);
        format!("Ref: {digits}")
    }
}

/// Outcome of evaluating a transfer request.
#[derive(Debug)]
pub enum TransferOutcome {
    /// The transfer committed; the ledger collections were mutated and must
    /// be persisted by the caller.
    Completed(Receipt),
    /// The user's standing prohibits any transfer.
    Blocked { status: UserStatus },
    /// Step-up verification is required; `auth_name` labels the prompt.
    AuthRequired { auth_name: String },
    /// The requested amount exceeds the balance. Nothing was mutated.
    InsufficientFunds,
}

/// A user-initiated transfer request.
#[derive(Debug)]
pub struct TransferRequest<'a> {
    pub user_id: &'a UserId,
    pub amount: Decimal,
    pub recipient: &'a str,
    /// Step-up code supplied by the caller, if any.
    pub auth_code: Option<&'a str>,
}

/// Evaluate the gates and, if all pass, debit the account and record the
/// transfer.
///
/// On [`TransferOutcome::Completed`] the accounts and transactions
/// collections have been mutated in memory; the caller persists them in one
/// write boundary. Every other outcome leaves both untouched.
///
/// # Errors
///
/// Returns [`TransferError`] for a missing user, a user with no account, or
/// a user with more than one account.
pub fn execute(
    users: &[User],
    accounts: &mut [Account],
    transactions: &mut Vec<Transaction>,
    request: &TransferRequest<'_>,
    now: DateTime<Utc>,
) -> Result<TransferOutcome, TransferError> {
    let user = users
        .iter()
        .find(|u| &u.user_id == request.user_id)
        .ok_or_else(|| TransferError::UserNotFound(request.user_id.clone()))?;

    // Status gate first: a blocked user learns nothing else.
    if user.status.blocks_transfers() {
        return Ok(TransferOutcome::Blocked {
            status: user.status,
        });
    }

    // Step-up gate before the balance check. An empty supplied code counts
    // as missing, and the stored secret is matched exactly.
    let verification = &user.auth_verification;
    if verification.enabled {
        let supplied = request.auth_code.filter(|code| !code.is_empty());
        if supplied != Some(verification.auth_code.as_str()) {
            return Ok(TransferOutcome::AuthRequired {
                auth_name: verification.display_name().to_owned(),
            });
        }
    }

    // Explicit account selection: refuse to guess between multiple accounts.
    let mut owned = accounts
        .iter_mut()
        .filter(|a| &a.user_id == request.user_id);
    let account = owned
        .next()
        .ok_or_else(|| TransferError::NoAccount(request.user_id.clone()))?;
    if owned.next().is_some() {
        return Err(TransferError::AmbiguousAccount(request.user_id.clone()));
    }

    if request.amount > account.balance {
        return Ok(TransferOutcome::InsufficientFunds);
    }

    ledger::apply(
        account,
        transactions,
        request.amount,
        TransactionKind::Debit,
        &format!("Transfer to {}", request.recipient),
        now,
    );

    Ok(TransferOutcome::Completed(Receipt {
        date: now,
        amount: request.amount,
        recipient: request.recipient.to_owned(),
        reference: Receipt::generate_reference(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ledgerline_core::Email;
    use rust_decimal_macros::dec;

    use super::*;

    fn user(username: &str) -> User {
        User::signup(
            username.to_owned(),
            "Tester".to_owned(),
            Email::parse(&format!("{username}@example.com")).unwrap(),
            username.to_owned(),
            "hunter2".to_owned(),
            Utc::now(),
        )
    }

    fn account_for(user: &User, balance: Decimal) -> Account {
        let mut account = Account::open(user.user_id.clone(), "LEDGERLINE CHECKING");
        account.balance = balance;
        account
    }

    fn request<'a>(
        user_id: &'a UserId,
        amount: Decimal,
        auth_code: Option<&'a str>,
    ) -> TransferRequest<'a> {
        TransferRequest {
            user_id,
            amount,
            recipient: "Alice",
            auth_code,
        }
    }

    #[test]
    fn test_successful_transfer_debits_and_records() {
        // Scenario U1: successful status, no step-up, balance 100.00.
        let u1 = user("u1");
        let users = vec![u1.clone()];
        let mut accounts = vec![account_for(&u1, dec!(100.00))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u1.user_id, dec!(40), None),
            Utc::now(),
        )
        .unwrap();

        let TransferOutcome::Completed(receipt) = outcome else {
            panic!("expected completion, got {outcome:?}");
        };
        assert_eq!(receipt.amount, dec!(40));
        assert_eq!(receipt.recipient, "Alice");
        assert!(receipt.reference.starts_with("Ref: "));

        assert_eq!(accounts[0].balance, dec!(60.00));
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, dec!(-40));
        assert!(transactions[0].merchant.contains("Alice"));
    }

    #[test]
    fn test_frozen_user_is_blocked_regardless_of_everything() {
        // Scenario U2: frozen user, even with step-up enabled and plenty of
        // balance, gets BLOCK and nothing moves.
        let mut u2 = user("u2");
        u2.status = UserStatus::Frozen;
        u2.auth_verification.enabled = true;
        u2.auth_verification.auth_code = "1234".to_owned();
        let users = vec![u2.clone()];
        let mut accounts = vec![account_for(&u2, dec!(1000))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u2.user_id, dec!(1), Some("1234")),
            Utc::now(),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            TransferOutcome::Blocked {
                status: UserStatus::Frozen
            }
        ));
        assert_eq!(accounts[0].balance, dec!(1000));
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_suspended_user_is_blocked() {
        let mut u = user("sus");
        u.status = UserStatus::Suspended;
        let users = vec![u.clone()];
        let mut accounts = vec![account_for(&u, dec!(50))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u.user_id, dec!(10), None),
            Utc::now(),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            TransferOutcome::Blocked {
                status: UserStatus::Suspended
            }
        ));
    }

    #[test]
    fn test_step_up_required_before_balance_check() {
        // Step-up outranks the balance check: even an unaffordable request
        // yields AUTH_REQUIRED, not insufficient funds.
        let mut u3 = user("u3");
        u3.auth_verification.enabled = true;
        u3.auth_verification.auth_name = "IMF Code".to_owned();
        u3.auth_verification.auth_code = "1234".to_owned();
        let users = vec![u3.clone()];
        let mut accounts = vec![account_for(&u3, dec!(5))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u3.user_id, dec!(10_000), None),
            Utc::now(),
        )
        .unwrap();

        let TransferOutcome::AuthRequired { auth_name } = outcome else {
            panic!("expected auth required, got {outcome:?}");
        };
        assert_eq!(auth_name, "IMF Code");
        assert_eq!(accounts[0].balance, dec!(5));
    }

    #[test]
    fn test_step_up_wrong_code_is_rejected() {
        let mut u3 = user("u3");
        u3.auth_verification.enabled = true;
        u3.auth_verification.auth_code = "1234".to_owned();
        let users = vec![u3.clone()];
        let mut accounts = vec![account_for(&u3, dec!(100))];
        let mut transactions = Vec::new();

        for wrong in [Some("4321"), Some(""), None] {
            let outcome = execute(
                &users,
                &mut accounts,
                &mut transactions,
                &request(&u3.user_id, dec!(10), wrong),
                Utc::now(),
            )
            .unwrap();
            assert!(matches!(outcome, TransferOutcome::AuthRequired { .. }));
        }
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_step_up_correct_code_proceeds_to_balance_check() {
        // Scenario U3 retry: the right code moves past the gate; here the
        // balance check then fails.
        let mut u3 = user("u3");
        u3.auth_verification.enabled = true;
        u3.auth_verification.auth_code = "1234".to_owned();
        let users = vec![u3.clone()];
        let mut accounts = vec![account_for(&u3, dec!(5))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u3.user_id, dec!(10), Some("1234")),
            Utc::now(),
        )
        .unwrap();

        assert!(matches!(outcome, TransferOutcome::InsufficientFunds));
        assert_eq!(accounts[0].balance, dec!(5));
    }

    #[test]
    fn test_insufficient_funds_leaves_balance_unmodified() {
        let u = user("poor");
        let users = vec![u.clone()];
        let mut accounts = vec![account_for(&u, dec!(39.99))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u.user_id, dec!(40), None),
            Utc::now(),
        )
        .unwrap();

        assert!(matches!(outcome, TransferOutcome::InsufficientFunds));
        assert_eq!(accounts[0].balance, dec!(39.99));
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_exact_balance_transfer_is_allowed() {
        let u = user("exact");
        let users = vec![u.clone()];
        let mut accounts = vec![account_for(&u, dec!(40))];
        let mut transactions = Vec::new();

        let outcome = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u.user_id, dec!(40), None),
            Utc::now(),
        )
        .unwrap();

        assert!(matches!(outcome, TransferOutcome::Completed(_)));
        assert_eq!(accounts[0].balance, dec!(0));
    }

    #[test]
    fn test_unknown_user_is_an_error() {
        let unknown = UserId::from("usr_nobody");
        let result = execute(
            &[],
            &mut [],
            &mut Vec::new(),
            &request(&unknown, dec!(10), None),
            Utc::now(),
        );
        assert!(matches!(result, Err(TransferError::UserNotFound(_))));
    }

    #[test]
    fn test_user_without_account_is_an_error() {
        let u = user("noacct");
        let users = vec![u.clone()];
        let result = execute(
            &users,
            &mut [],
            &mut Vec::new(),
            &request(&u.user_id, dec!(10), None),
            Utc::now(),
        );
        assert!(matches!(result, Err(TransferError::NoAccount(_))));
    }

    #[test]
    fn test_multiple_accounts_is_rejected_not_guessed() {
        let u = user("twins");
        let users = vec![u.clone()];
        let mut accounts = vec![account_for(&u, dec!(100)), account_for(&u, dec!(200))];
        let mut transactions = Vec::new();

        let result = execute(
            &users,
            &mut accounts,
            &mut transactions,
            &request(&u.user_id, dec!(10), None),
            Utc::now(),
        );

        assert!(matches!(result, Err(TransferError::AmbiguousAccount(_))));
        assert_eq!(accounts[0].balance, dec!(100));
        assert_eq!(accounts[1].balance, dec!(200));
        assert!(transactions.is_empty());
    }
}
