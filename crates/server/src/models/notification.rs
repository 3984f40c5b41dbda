//! Notification domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerline_core::NotificationId;

use crate::store::Collection;

/// A user-facing record of an admin-triggered ledger change.
///
/// Global list, not tied to a specific account. `read` starts false and is
/// only mutated by external means.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID (`notif_…`).
    pub id: NotificationId,
    /// Category tag; always `alert` for ledger adjustments.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
    /// Icon class hint for the client.
    pub icon: String,
}

impl Collection for Notification {
    const FILE: &'static str = "notifications.json";
}
