//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerline_core::{Email, UserId, UserStatus};

use crate::store::Collection;

/// Fallback label shown when a step-up config has no display name.
const DEFAULT_STEP_UP_LABEL: &str = "Verification Code";

/// A customer record.
///
/// Created at signup, mutated only by admin update, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (`usr_…`).
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub username: String,
    /// Opaque credential compared by plain equality. Real authentication is
    /// explicitly out of scope for this demo.
    pub password: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    /// Standing as set by an operator; anything but `successful` blocks
    /// outgoing transfers.
    #[serde(default)]
    pub status: UserStatus,
    /// Step-up verification config, toggled by an operator.
    #[serde(default)]
    pub auth_verification: StepUpVerification,
    /// Free-text operator note.
    #[serde(default)]
    pub admin_note: String,
    /// When the user signed up.
    pub joined: DateTime<Utc>,
}

impl Collection for User {
    const FILE: &'static str = "users.json";
}

fn default_phone() -> String {
    "(555) 000-0000".to_owned()
}

impl User {
    /// Create a new user at signup with default standing and no step-up.
    #[must_use]
    pub fn signup(
        first_name: String,
        last_name: String,
        email: Email,
        username: String,
        password: String,
        joined: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: UserId::generate(),
            first_name,
            last_name,
            email,
            username,
            password,
            phone: default_phone(),
            status: UserStatus::default(),
            auth_verification: StepUpVerification::default(),
            admin_note: String::new(),
            joined,
        }
    }

    /// The sanitized view returned to clients.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            phone: self.phone.clone(),
            status: self.status,
            admin_note: self.admin_note.clone(),
            joined: self.joined,
        }
    }
}

/// Step-up verification config: a static shared secret an operator can
/// require before a transfer proceeds.
///
/// The code is compared for exact string equality, indefinitely: no
/// rotation, no expiry, no rate limiting, no lockout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpVerification {
    /// Whether the step-up gate applies to this user's transfers.
    pub enabled: bool,
    /// Display name for the code, shown in the client prompt.
    #[serde(default)]
    pub auth_name: String,
    /// The stored secret.
    #[serde(default)]
    pub auth_code: String,
}

impl StepUpVerification {
    /// Label to present when prompting for the code.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.auth_name.is_empty() {
            DEFAULT_STEP_UP_LABEL
        } else {
            &self.auth_name
        }
    }
}

/// User view exposed over the API: everything except the stored credential
/// and the step-up secret.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub username: String,
    pub phone: String,
    pub status: UserStatus,
    pub admin_note: String,
    pub joined: DateTime<Utc>,
}
