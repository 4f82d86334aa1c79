//! Authentication error types.

use thiserror::Error;

use hear_hut_core::EmailError;

/// Errors that can occur during identity operations.
///
/// All variants are recoverable by the shopper correcting their input and
/// retrying; none leave partial state behind.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was empty.
    #[error("all fields are required")]
    MissingFields,

    /// Structurally invalid email.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Email is outside the accepted sign-up domain.
    #[error("email must be a valid @gmail.com address")]
    UnsupportedDomain,

    /// Password fails the policy.
    #[error("password must have 2 uppercase letters, 1 special character, and no spaces")]
    WeakPassword,

    /// An identity with this email is already registered.
    #[error("account already exists with this email")]
    DuplicateAccount,

    /// No identity matches the email.
    #[error("user not found")]
    NotFound,

    /// Stored password does not match.
    #[error("incorrect password")]
    IncorrectPassword,
}
