//! Checkout error types.

use thiserror::Error;

/// Errors that can occur during pricing and checkout sequencing.
///
/// These are contract violations, not business outcomes: an ineligible
/// coupon, an invalid voucher, or an empty cart all produce zero-valued
/// pricing fields, never an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    /// Line item quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// A price, fee, or discount amount was negative.
    #[error("Negative amount for {0}")]
    NegativeAmount(&'static str),

    /// Tax rate must be in [0, 1].
    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(f64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid checkout step transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidStepTransition { from: String, to: String },

    /// Checkout step prerequisites not met.
    #[error("Checkout incomplete: {0}")]
    CheckoutIncomplete(String),
}
