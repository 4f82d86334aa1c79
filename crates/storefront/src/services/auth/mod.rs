//! Identity service.
//!
//! Sign-up, sign-in and sign-out against the persisted identity list, with
//! an audit trail of successful operations. Passwords are stored and
//! compared in plaintext - deliberately carried over from the product's
//! accepted threat model, not an implementation shortcut to fix silently.

mod error;

pub use error::AuthError;

use hear_hut_core::Email;

use crate::models::{AuthEvent, AuthEventKind, CurrentUser, Identity};
use crate::storage::{self, StorageBackend, keys};

/// The only domain accepted for account emails.
const ACCEPTED_DOMAIN: &str = "gmail.com";

/// Characters allowed in the local part of an account email.
const LOCAL_PART_CHARS: &str = "._%+-";

/// Symbols that satisfy the password policy's special-character rule.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Maximum number of retained audit events; oldest are evicted first.
const AUDIT_RING_CAPACITY: usize = 100;

/// Identity service.
pub struct AuthService<'a> {
    storage: &'a dyn StorageBackend,
}

impl<'a> AuthService<'a> {
    /// Create a new identity service over the given backend.
    #[must_use]
    pub const fn new(storage: &'a dyn StorageBackend) -> Self {
        Self { storage }
    }

    /// The signed-in identity, or `None` for guest.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        storage::read(self.storage, keys::AUTH_USER)
    }

    /// Register a new identity and establish its session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty,
    /// `AuthError::InvalidEmail` / `AuthError::UnsupportedDomain` for a
    /// malformed or non-gmail address, `AuthError::WeakPassword` if the
    /// password fails the policy, and `AuthError::DuplicateAccount` if the
    /// email is already registered.
    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<CurrentUser, AuthError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = parse_account_email(email)?;
        validate_password(password)?;

        let mut users: Vec<Identity> = storage::read_or_default(self.storage, keys::USERS);
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateAccount);
        }

        let identity = Identity {
            email: email.clone(),
            name: name.trim().to_owned(),
            password: password.to_owned(),
        };
        let user = CurrentUser::from(&identity);

        users.push(identity);
        storage::write(self.storage, keys::USERS, &users);
        storage::write(self.storage, keys::AUTH_USER, &user);

        let mut event = AuthEvent::now(AuthEventKind::SignUp, email);
        event.name = Some(user.name.clone());
        self.push_audit_event(event);

        tracing::info!(email = %user.email, "account created");
        Ok(user)
    }

    /// Sign in an existing identity.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Self::sign_up`], plus
    /// `AuthError::NotFound` when no identity matches the email and
    /// `AuthError::IncorrectPassword` on a password mismatch.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = parse_account_email(email)?;
        validate_password(password)?;

        let users: Vec<Identity> = storage::read_or_default(self.storage, keys::USERS);
        let found = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(AuthError::NotFound)?;

        // Plaintext comparison, by product decision.
        if found.password != password {
            return Err(AuthError::IncorrectPassword);
        }

        let user = CurrentUser::from(found);
        storage::write(self.storage, keys::AUTH_USER, &user);
        self.push_audit_event(AuthEvent::now(AuthEventKind::SignIn, email));

        tracing::info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Clear the session. Idempotent: signing out as guest is a no-op
    /// beyond the (skipped) audit event.
    pub fn sign_out(&self) {
        let previous = self.current_user();
        storage::remove(self.storage, keys::AUTH_USER);

        if let Some(user) = previous {
            self.push_audit_event(AuthEvent::now(AuthEventKind::SignOut, user.email.clone()));
            tracing::info!(email = %user.email, "signed out");
        }
    }

    /// The audit trail, oldest first.
    #[must_use]
    pub fn audit_events(&self) -> Vec<AuthEvent> {
        storage::read_or_default(self.storage, keys::AUTH_EVENTS)
    }

    /// Append to the bounded audit ring, evicting the oldest entries.
    fn push_audit_event(&self, event: AuthEvent) {
        let mut events: Vec<AuthEvent> = storage::read_or_default(self.storage, keys::AUTH_EVENTS);
        events.push(event);
        while events.len() > AUDIT_RING_CAPACITY {
            events.remove(0);
        }
        storage::write(self.storage, keys::AUTH_EVENTS, &events);
    }
}

/// Parse and apply the account-email policy: well-formed address whose
/// domain is the single accepted one and whose local part sticks to the
/// allowed character set.
fn parse_account_email(email: &str) -> Result<Email, AuthError> {
    let email = Email::parse(email)?;

    let local_ok = email
        .local_part()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_CHARS.contains(c));

    if !local_ok || !email.domain().eq_ignore_ascii_case(ACCEPTED_DOMAIN) {
        return Err(AuthError::UnsupportedDomain);
    }

    Ok(email)
}

/// Validate the password policy: no whitespace, at least two uppercase
/// letters and at least one symbol from the fixed set.
fn validate_password(password: &str) -> Result<(), AuthError> {
    let no_whitespace = !password.chars().any(char::is_whitespace);
    let uppercase_count = password.chars().filter(char::is_ascii_uppercase).count();
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if no_whitespace && uppercase_count >= 2 && has_symbol {
        Ok(())
    } else {
        Err(AuthError::WeakPassword)
    }
}
