//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `EMAILJS_SERVICE_ID` - EmailJS service used for confirmation mail
//! - `EMAILJS_TEMPLATE_ID` - EmailJS template for order confirmations
//! - `EMAILJS_PUBLIC_KEY` - EmailJS public (publishable) key
//! - `RAZORPAY_KEY_ID` - Payment gateway key id
//!
//! ## Optional
//! - `HEARHUT_STORAGE_PATH` - Store file location (default: hearhut-store.json)
//! - `EMAILJS_API_BASE` - EmailJS endpoint override (default: https://api.emailjs.com)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the key-value store file lives.
    pub storage_path: PathBuf,
    /// Confirmation-mail collaborator settings.
    pub mailer: MailerConfig,
    /// Payment gateway settings.
    pub gateway: GatewayConfig,
}

/// EmailJS confirmation-mail configuration.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// EmailJS service id.
    pub service_id: String,
    /// EmailJS template id.
    pub template_id: String,
    /// EmailJS public key. Publishable, not a secret.
    pub public_key: String,
    /// API endpoint base.
    pub api_base: Url,
    /// Sender name stamped on confirmation mail.
    pub from_name: String,
    /// Sender address stamped on confirmation mail.
    pub from_email: String,
}

/// Payment gateway configuration.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Gateway key id.
    pub key_id: SecretString,
    /// Merchant name shown in the gateway sheet.
    pub merchant_name: String,
    /// Accent color for the gateway sheet.
    pub theme_color: String,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("key_id", &"[REDACTED]")
            .field("merchant_name", &self.merchant_name)
            .field("theme_color", &self.theme_color)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path =
            PathBuf::from(get_env_or_default("HEARHUT_STORAGE_PATH", "hearhut-store.json"));

        Ok(Self {
            storage_path,
            mailer: MailerConfig::from_env()?,
            gateway: GatewayConfig::from_env()?,
        })
    }
}

impl MailerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_base = get_env_or_default("EMAILJS_API_BASE", "https://api.emailjs.com");
        let api_base = Url::parse(&api_base)
            .map_err(|e| ConfigError::InvalidEnvVar("EMAILJS_API_BASE".to_owned(), e.to_string()))?;

        Ok(Self {
            service_id: get_required_env("EMAILJS_SERVICE_ID")?,
            template_id: get_required_env("EMAILJS_TEMPLATE_ID")?,
            public_key: get_required_env("EMAILJS_PUBLIC_KEY")?,
            api_base,
            from_name: "HearHut".to_owned(),
            from_email: "no-reply@hearhut.com".to_owned(),
        })
    }
}

impl GatewayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            key_id: SecretString::from(get_required_env("RAZORPAY_KEY_ID")?),
            merchant_name: "HearHut".to_owned(),
            theme_color: "#ff595a".to_owned(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_debug_redacts_key() {
        let config = GatewayConfig {
            key_id: SecretString::from("rzp_test_supersecret"),
            merchant_name: "HearHut".to_owned(),
            theme_color: "#ff595a".to_owned(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("HearHut"));
        assert!(!debug_output.contains("rzp_test_supersecret"));
    }
}
