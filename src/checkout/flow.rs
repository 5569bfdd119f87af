//! Checkout step sequencing.
//!
//! The storefront checkout walks shipping -> payment -> review; each
//! advance is gated by the current pricing result so a screen can
//! never be reached with an order the next screen would reject.

use crate::checkout::payment::PaymentMethod;
use crate::error::CheckoutError;
use crate::pricing::PricingResult;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Shipping address and tier.
    #[default]
    Shipping,
    /// Payment method selection.
    Payment,
    /// Order review before submission.
    Review,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }
}

/// Position in the checkout flow.
///
/// Holds only the step cursor and the selected payment method.
/// Addresses, items, and order submission live with their owning
/// components; this type exists so the advance gates are applied in
/// one place instead of per screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Payment method, chosen on the payment step.
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutFlow {
    /// Start a flow at the shipping step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a payment method.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Check whether the flow can advance past the current step.
    ///
    /// Leaving shipping requires a payable total; leaving payment
    /// additionally requires a selected method the total allows.
    pub fn can_advance(&self, pricing: &PricingResult) -> bool {
        match self.step {
            CheckoutStep::Shipping => !pricing.grand_total.is_zero(),
            CheckoutStep::Payment => self
                .payment_method
                .map(|m| pricing.can_proceed(m))
                .unwrap_or(false),
            CheckoutStep::Review => false,
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self, pricing: &PricingResult) -> Result<CheckoutStep, CheckoutError> {
        let next = self
            .step
            .next()
            .ok_or_else(|| CheckoutError::InvalidStepTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            })?;

        if !self.can_advance(pricing) {
            return Err(CheckoutError::CheckoutIncomplete(
                self.missing_prerequisite(pricing).to_string(),
            ));
        }

        self.step = next;
        Ok(next)
    }

    fn missing_prerequisite(&self, pricing: &PricingResult) -> &'static str {
        match self.step {
            CheckoutStep::Shipping => "payable total",
            CheckoutStep::Payment => {
                if self.payment_method.is_none() {
                    "payment method"
                } else if !pricing.is_cod_allowed {
                    "order within COD limit"
                } else {
                    "payable total"
                }
            }
            CheckoutStep::Review => "nothing further",
        }
    }

    /// Go back one step. Payment selection is kept.
    pub fn back(&mut self) -> Option<CheckoutStep> {
        let prev = match self.step {
            CheckoutStep::Shipping => return None,
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
        };
        self.step = prev;
        Some(prev)
    }
}
