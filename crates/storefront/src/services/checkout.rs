//! Checkout flow.
//!
//! An explicit state machine over the active cart:
//!
//! ```text
//! Editing -> Validating -> AwaitingPayment -> Finalizing -> Complete
//!     ^          |               |
//!     +----------+---------------+   (validation failure / dismissal /
//!                                      gateway load failure)
//! ```
//!
//! Orders are created at most once per submission: only a gateway
//! confirmation reaches `Finalizing`, where the confirmation mail is fired
//! without being awaited, the order is archived and the cart cleared.
//! Dismissing the gateway sheet changes nothing and returns to `Editing`.
//!
//! The order id is generated client-side from random characters; there is
//! no global uniqueness guarantee and no guard against invoking the
//! gateway twice from two flow instances.

use std::collections::BTreeMap;

use chrono::Utc;
use thiserror::Error;

use hear_hut_core::{OrderId, ShippingMethod};

use crate::models::{CurrentUser, Order, ShippingForm};
use crate::payment::{
    ContactPrefill, GatewayError, PaymentGateway, PaymentOutcome, PaymentRequest,
};
use crate::services::cart::CartStore;
use crate::services::mailer::{ConfirmationMailer, OrderEmail};
use crate::services::orders::OrderArchive;
use crate::services::pricing::{self, Totals};
use crate::storage::{self, StorageBackend, keys};

/// Phase of a checkout flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Form fields mutable; nothing submitted.
    Editing,
    /// Shipping form being checked.
    Validating,
    /// Suspended on the payment gateway.
    AwaitingPayment,
    /// Payment confirmed; archiving and notifying.
    Finalizing,
    /// Terminal; the cart has been consumed.
    Complete,
}

/// Shipping-form fields, for per-field error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShippingField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Country,
    ShippingMethod,
}

/// Per-field validation errors. Empty means the form passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingFormErrors {
    errors: BTreeMap<ShippingField, &'static str>,
}

impl ShippingFormErrors {
    /// Whether the form passed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for one field, if it failed.
    #[must_use]
    pub fn get(&self, field: ShippingField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Iterate failed fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (ShippingField, &'static str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, *msg))
    }

    fn require(&mut self, field: ShippingField, ok: bool, message: &'static str) {
        if !ok {
            self.errors.insert(field, message);
        }
    }
}

/// Validate a shipping form, producing the full per-field error set.
/// No partial submission: any error keeps the whole form in `Editing`.
#[must_use]
pub fn validate_shipping(form: &ShippingForm) -> ShippingFormErrors {
    let mut errors = ShippingFormErrors::default();

    errors.require(
        ShippingField::FirstName,
        !form.first_name.trim().is_empty(),
        "First name is required",
    );
    errors.require(
        ShippingField::LastName,
        !form.last_name.trim().is_empty(),
        "Last name is required",
    );
    errors.require(
        ShippingField::Email,
        is_email_shape(&form.email),
        "Enter a valid email",
    );
    errors.require(
        ShippingField::Phone,
        digit_count(&form.phone) >= 10,
        "Enter a valid phone number",
    );
    errors.require(
        ShippingField::Address,
        !form.address.trim().is_empty(),
        "Address is required",
    );
    errors.require(
        ShippingField::City,
        !form.city.trim().is_empty(),
        "City is required",
    );
    errors.require(
        ShippingField::State,
        !form.state.trim().is_empty(),
        "State is required",
    );
    errors.require(
        ShippingField::ZipCode,
        (5..=6).contains(&digit_count(&form.zip_code)),
        "Enter a valid ZIP/Postal code",
    );
    errors.require(
        ShippingField::Country,
        !form.country.trim().is_empty(),
        "Country is required",
    );
    errors.require(
        ShippingField::ShippingMethod,
        form.shipping_method.is_some(),
        "Select a shipping method",
    );

    errors
}

/// General email shape: some non-space characters, an @, and a dotted
/// domain. Account-level domain policy does not apply here; any deliverable
/// looking address is accepted for shipping contact.
fn is_email_shape(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    let dotted = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1);

    !local.is_empty() && dotted
}

/// Digits remaining after stripping every non-digit character.
fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Payment confirmed: the order is archived and the cart cleared.
    Completed(Order),
    /// Per-field validation failures; flow returned to `Editing`.
    Invalid(ShippingFormErrors),
    /// The shopper dismissed the gateway; flow returned to `Editing`
    /// with no state change.
    Dismissed,
}

/// Errors that abort a submission.
///
/// Recoverable: the flow returns to `Editing` and the shopper may retry.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The payment gateway failed to come up.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// One checkout attempt over the active cart.
pub struct CheckoutFlow<'a, G, M> {
    storage: &'a dyn StorageBackend,
    gateway: &'a G,
    mailer: M,
    state: CheckoutState,
}

impl<'a, G, M> CheckoutFlow<'a, G, M>
where
    G: PaymentGateway,
    M: ConfirmationMailer + Clone + Send + 'static,
{
    /// Enter the checkout flow.
    ///
    /// Returns `None` when the active cart is empty - the caller should
    /// redirect to the cart view. A guard, not an error.
    #[must_use]
    pub fn begin(storage: &'a dyn StorageBackend, gateway: &'a G, mailer: M) -> Option<Self> {
        if CartStore::new(storage).active_cart().is_empty() {
            return None;
        }

        Some(Self {
            storage,
            gateway,
            mailer,
            state: CheckoutState::Editing,
        })
    }

    /// Current phase of this flow instance.
    #[must_use]
    pub const fn state(&self) -> CheckoutState {
        self.state
    }

    /// Totals for the order-summary pane, priced against the live cart.
    #[must_use]
    pub fn summary(&self, method: ShippingMethod) -> Totals {
        pricing::compute_totals(&CartStore::new(self.storage).active_cart(), method)
    }

    /// Submit the shipping form: validate, collect payment, finalize.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Gateway` when the gateway fails to come up;
    /// the flow is back in `Editing` and may be resubmitted.
    pub async fn submit(&mut self, form: &ShippingForm) -> Result<SubmitOutcome, CheckoutError> {
        self.state = CheckoutState::Validating;

        let errors = validate_shipping(form);
        let method = form.shipping_method.filter(|_| errors.is_empty());
        let Some(method) = method else {
            self.state = CheckoutState::Editing;
            return Ok(SubmitOutcome::Invalid(errors));
        };

        let cart = CartStore::new(self.storage);
        let items = cart.active_cart();
        let totals = pricing::compute_totals(&items, method);
        let order_id = OrderId::generate();

        self.state = CheckoutState::AwaitingPayment;
        let request = PaymentRequest {
            order_id: order_id.clone(),
            amount: totals.payable_minor_units(),
            currency: totals.currency.code(),
            description: format!("Order {order_id}"),
            prefill: ContactPrefill {
                name: form.full_name(),
                email: form.email.clone(),
                contact: form.phone.clone(),
            },
            shipping_method: method,
        };

        let outcome = match self.gateway.collect(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.state = CheckoutState::Editing;
                return Err(e.into());
            }
        };

        let confirmation = match outcome {
            PaymentOutcome::Confirmed(confirmation) => confirmation,
            PaymentOutcome::Dismissed => {
                tracing::debug!(order_id = %order_id, "gateway dismissed, nothing charged");
                self.state = CheckoutState::Editing;
                return Ok(SubmitOutcome::Dismissed);
            }
        };

        self.state = CheckoutState::Finalizing;
        tracing::info!(
            order_id = %order_id,
            payment_ref = %confirmation.payment_ref,
            "payment confirmed"
        );

        let order = Order {
            id: order_id,
            items,
            shipping: form.clone(),
            total: totals.payable(),
            placed_at: Utc::now(),
        };

        // Best-effort confirmation mail: fired, never awaited. Delivery
        // failure must not block or fail order completion.
        let email = confirmation_email(&order, method);
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&email).await {
                tracing::warn!(error = %e, "confirmation mail failed");
            }
        });

        let user: Option<CurrentUser> = storage::read(self.storage, keys::AUTH_USER);
        OrderArchive::new(self.storage).append(user.as_ref().map(|u| &u.email), &order);
        cart.clear();

        self.state = CheckoutState::Complete;
        Ok(SubmitOutcome::Completed(order))
    }
}

/// Render the confirmation mail for a finalized order.
fn confirmation_email(order: &Order, method: ShippingMethod) -> OrderEmail {
    let items_list = order
        .items
        .iter()
        .map(|item| {
            format!(
                "\u{2022} {} x{} - {}",
                item.name,
                item.quantity,
                item.line_total().display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let shipping = &order.shipping;
    let message = format!(
        "Hi {first},\n\n\
         Thank you for your purchase! Your order {id} has been placed successfully.\n\n\
         Items:\n{items_list}\n\n\
         Shipping: {method}\n\
         Shipping Address:\n{first} {last}\n{address}\n{city}, {state} {zip}\n{country}\n\n\
         Order Total: {total}\n\n\
         We'll send another email when your items ship.\n\n\
         \u{2014} HearHut Team",
        first = shipping.first_name,
        id = order.id,
        method = method.description(),
        last = shipping.last_name,
        address = shipping.address,
        city = shipping.city,
        state = shipping.state,
        zip = shipping.zip_code,
        country = shipping.country,
        total = order.total.display(),
    );

    OrderEmail {
        to_email: shipping.email.clone(),
        subject: format!("Your HearHut Order {} is Confirmed", order.id),
        message,
    }
}
