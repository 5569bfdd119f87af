//! Checkout pricing and discount calculation for an e-commerce storefront.
//!
//! This crate is the single source of truth for the storefront's order math.
//! Every checkout screen (cart, shipping, review) previously carried its own
//! copy of the subtotal/discount/shipping/tax formula; they all now call
//! [`compute_pricing`] and render its output.
//!
//! - **Cart**: line items with optional sale prices, coupons, vouchers
//! - **Pricing**: subtotal, discount stacking, shipping fee, tax, grand total
//! - **Checkout**: payment-method gating (COD limit) and step sequencing
//!
//! # Example
//!
//! ```rust
//! use checkout_pricing::prelude::*;
//!
//! let config = PricingConfig {
//!     tax_rate: 0.1,
//!     free_shipping_threshold: Money::new(10_000_000, Currency::VND),
//!     standard_shipping_fee: Money::new(30_000, Currency::VND),
//!     cod_limit: Money::new(100_000_000, Currency::VND),
//! };
//!
//! let input = PricingInput {
//!     items: vec![LineItem::new(
//!         ProductId::new("prod-1"),
//!         2,
//!         Money::new(150_000, Currency::VND),
//!     )],
//!     coupon: None,
//!     voucher: None,
//!     config,
//! };
//!
//! let pricing = compute_pricing(&input).unwrap();
//! assert_eq!(pricing.subtotal.amount_minor, 300_000);
//! ```
//!
//! The calculator is a pure function: no I/O, no clock, no shared state. It
//! may be called concurrently without coordination, and identical inputs
//! always produce identical results.

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod config;
pub mod pricing;

pub use config::PricingConfig;
pub use error::CheckoutError;
pub use ids::*;
pub use money::{Currency, Money};
pub use pricing::{compute_pricing, OrderTotals, PricingInput, PricingResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::PricingConfig;
    pub use crate::error::CheckoutError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Coupon, CouponKind, LineItem, Voucher};

    // Pricing
    pub use crate::pricing::{compute_pricing, OrderTotals, PricingInput, PricingResult};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep, PaymentMethod};
}
