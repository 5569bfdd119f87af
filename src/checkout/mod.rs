//! Checkout module.
//!
//! Step sequencing for the shipping -> payment -> review flow and
//! payment-method availability, both driven by the pricing result.

mod flow;
mod payment;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use payment::PaymentMethod;
