//! Shared test doubles for the flow tests.

// Not every test binary exercises every double.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use hear_hut_storefront::config::{Config, GatewayConfig, MailerConfig};
use hear_hut_storefront::payment::{
    GatewayError, PaymentConfirmation, PaymentGateway, PaymentOutcome, PaymentRequest,
};
use hear_hut_storefront::services::mailer::{ConfirmationMailer, MailerError, OrderEmail};
use secrecy::SecretString;
use url::Url;

/// What the scripted gateway should do with the next session.
#[derive(Clone, Copy)]
pub enum GatewayScript {
    Confirm,
    Dismiss,
    FailToLoad,
}

/// A gateway that follows a script and records every request it sees.
pub struct ScriptedGateway {
    script: GatewayScript,
    pub requests: Mutex<Vec<PaymentRequest>>,
}

impl ScriptedGateway {
    pub fn new(script: GatewayScript) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl PaymentGateway for ScriptedGateway {
    async fn collect(&self, request: &PaymentRequest) -> Result<PaymentOutcome, GatewayError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        match self.script {
            GatewayScript::Confirm => Ok(PaymentOutcome::Confirmed(PaymentConfirmation {
                payment_ref: format!("pay_test_{}", request.order_id),
            })),
            GatewayScript::Dismiss => Ok(PaymentOutcome::Dismissed),
            GatewayScript::FailToLoad => {
                Err(GatewayError::Load("script did not load".to_owned()))
            }
        }
    }
}

/// A mailer that records sends instead of delivering them.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OrderEmail>>>,
}

impl ConfirmationMailer for RecordingMailer {
    async fn send(&self, email: &OrderEmail) -> Result<(), MailerError> {
        self.sent.lock().expect("sent lock").push(email.clone());
        Ok(())
    }
}

impl RecordingMailer {
    /// Wait (bounded) for the fire-and-forget send to land.
    pub async fn wait_for_send(&self) -> Option<OrderEmail> {
        for _ in 0..200 {
            if let Some(email) = self.sent.lock().expect("sent lock").first().cloned() {
                return Some(email);
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        None
    }
}

/// Config with inert collaborator settings for tests.
pub fn test_config() -> Config {
    Config {
        storage_path: "unused-in-tests.json".into(),
        mailer: MailerConfig {
            service_id: "service_test".to_owned(),
            template_id: "template_test".to_owned(),
            public_key: "public_test".to_owned(),
            api_base: Url::parse("http://127.0.0.1:9").expect("static url"),
            from_name: "HearHut".to_owned(),
            from_email: "no-reply@hearhut.com".to_owned(),
        },
        gateway: GatewayConfig {
            key_id: SecretString::from("rzp_test_key"),
            merchant_name: "HearHut".to_owned(),
            theme_color: "#ff595a".to_owned(),
        },
    }
}
