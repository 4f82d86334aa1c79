//! Identity and session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hear_hut_core::Email;

/// A registered account record.
///
/// Identities are append-only: created on sign-up, never mutated or
/// deleted. The password is stored and compared in plaintext - a
/// deliberate product-level simplification, not a security practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Unique account email.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Plaintext password.
    pub password: String,
}

/// The signed-in identity for this profile, persisted under `auth_user`.
///
/// Absence of the record means guest. At most one session is active at a
/// time; swapping it swaps which cart and order archive are visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Email of the signed-in identity.
    pub email: Email,
    /// Display name of the signed-in identity.
    pub name: String,
}

impl From<&Identity> for CurrentUser {
    fn from(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone(),
            name: identity.name.clone(),
        }
    }
}

/// Kind of audited authentication event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthEventKind {
    SignIn,
    SignUp,
    SignOut,
}

/// One entry in the bounded auth audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEvent {
    /// What happened.
    #[serde(rename = "type")]
    pub kind: AuthEventKind,
    /// The identity involved.
    pub email: Email,
    /// Display name, recorded for sign-ups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the event happened.
    pub time: DateTime<Utc>,
}

impl AuthEvent {
    /// Build an event stamped with the current time.
    #[must_use]
    pub fn now(kind: AuthEventKind, email: Email) -> Self {
        Self {
            kind,
            email,
            name: None,
            time: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_event_serialized_shape() {
        let email = Email::parse("a@gmail.com").unwrap();
        let event = AuthEvent::now(AuthEventKind::SignIn, email);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "signIn");
        assert_eq!(json["email"], "a@gmail.com");
        assert!(json.get("name").is_none());
    }
}
