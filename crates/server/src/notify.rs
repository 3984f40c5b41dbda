//! The notification emitter.
//!
//! Emits a human-readable notification whenever an operator adjusts the
//! ledger. User-initiated transfers do not notify.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use ledgerline_core::{NotificationId, TransactionKind};

use crate::models::Notification;

/// Prepend a notification describing an operator ledger adjustment.
///
/// The record only describes kind and amount; it carries no reference to
/// the underlying transaction.
pub fn emit_adjustment(
    notifications: &mut Vec<Notification>,
    kind: TransactionKind,
    amount: Decimal,
    now: DateTime<Utc>,
) {
    let (title, icon) = match kind {
        TransactionKind::Credit => ("Deposit Received", "fas fa-arrow-down"),
        TransactionKind::Debit => ("Funds Debited", "fas fa-minus-circle"),
    };

    notifications.insert(
        0,
        Notification {
            id: NotificationId::generate(),
            kind: "alert".to_owned(),
            title: title.to_owned(),
            message: format!(
                "{} of ${amount} processed.",
                match kind {
                    TransactionKind::Credit => "Credit",
                    TransactionKind::Debit => "Debit",
                }
            ),
            date: now,
            read: false,
            icon: icon.to_owned(),
        },
    );
}
