//! Payment gateway interface.
//!
//! The gateway is an external collaborator: the checkout flow opens a
//! payment session with the rounded payable amount and suspends until the
//! gateway reports success or the shopper dismisses it. The hosted Razorpay
//! checkout sheet is the production collaborator behind this interface; the
//! embedding layer supplies the implementation, tests script one.

use serde::Serialize;
use thiserror::Error;

use hear_hut_core::{OrderId, ShippingMethod};

/// The gateway failed to come up (e.g. its script did not load).
///
/// Recoverable: nothing has been charged and no order exists, so the
/// shopper may retry from the editing state.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway failed to load: {0}")]
    Load(String),
}

/// Contact fields prefilled into the gateway sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPrefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

/// A payment session request handed to the gateway.
///
/// Amounts are in minor currency units (paise). The order id is generated
/// before the session opens and is only archived if the gateway confirms.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    /// Order reference shown in the gateway sheet description.
    pub order_id: OrderId,
    /// Payable amount in minor currency units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: &'static str,
    /// Sheet description, e.g. "Order HH-K3F9XQ2M".
    pub description: String,
    /// Contact fields to prefill.
    pub prefill: ContactPrefill,
    /// Shipping method, passed through as a gateway note.
    pub shipping_method: ShippingMethod,
}

/// Proof of a confirmed payment, as reported by the gateway.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    /// Gateway-side payment reference.
    pub payment_ref: String,
}

/// How a payment session ended.
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    /// The gateway confirmed the charge.
    Confirmed(PaymentConfirmation),
    /// The shopper closed the sheet without paying. No state changed.
    Dismissed,
}

/// An external payment collaborator.
pub trait PaymentGateway: Send + Sync {
    /// Open a payment session and wait for its outcome.
    ///
    /// The wait is user-driven and unbounded; dismissal resolves it with
    /// [`PaymentOutcome::Dismissed`].
    fn collect(
        &self,
        request: &PaymentRequest,
    ) -> impl Future<Output = Result<PaymentOutcome, GatewayError>> + Send;
}
