//! Unified error handling.
//!
//! Provides a storefront-level `AppError` for the embedding layer. Nothing
//! in this crate is fatal: identity and validation failures are recoverable
//! by the shopper, a gateway that fails to load may be retried, and storage
//! failures are swallowed inside the storage helpers before they ever reach
//! this type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::payment::GatewayError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::services::mailer::MailerError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Identity operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout flow failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Payment gateway failed to come up.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Confirmation mail could not be sent.
    #[error("Mailer error: {0}")]
    Mailer(#[from] MailerError),

    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// The single message shown to the shopper.
    ///
    /// Identity-flow failures surface one line; per-field validation errors
    /// carry their own messages and never reach this type.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(err) => err.to_string(),
            Self::Gateway(_) | Self::Checkout(_) => {
                "Payment gateway failed to load. Please check your connection and try again."
                    .to_owned()
            }
            Self::Config(_) | Self::Mailer(_) | Self::Storage(_) => {
                "Something went wrong. Please try again.".to_owned()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
