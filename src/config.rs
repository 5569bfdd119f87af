//! Pricing configuration.
//!
//! Checkout screens used to hardcode these constants inline at each
//! call site, with divergent values between pages. They are now
//! supplied once from application configuration; the calculator never
//! embeds a business constant itself.

use crate::error::CheckoutError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Business constants for a pricing calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Tax rate as a fraction in `[0, 1]`.
    pub tax_rate: f64,
    /// Orders at or above this discounted subtotal ship free.
    pub free_shipping_threshold: Money,
    /// Fee charged below the free-shipping threshold.
    pub standard_shipping_fee: Money,
    /// Maximum grand total eligible for cash on delivery.
    pub cod_limit: Money,
}

impl PricingConfig {
    /// The currency all amounts in this configuration are denominated in.
    pub fn currency(&self) -> Currency {
        self.free_shipping_threshold.currency
    }

    /// Validate the configuration.
    ///
    /// Rejects a tax rate outside `[0, 1]`, negative amounts, and
    /// mixed currencies among the three monetary fields.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 || self.tax_rate > 1.0 {
            return Err(CheckoutError::InvalidTaxRate(self.tax_rate));
        }
        if self.free_shipping_threshold.is_negative() {
            return Err(CheckoutError::NegativeAmount("free_shipping_threshold"));
        }
        if self.standard_shipping_fee.is_negative() {
            return Err(CheckoutError::NegativeAmount("standard_shipping_fee"));
        }
        if self.cod_limit.is_negative() {
            return Err(CheckoutError::NegativeAmount("cod_limit"));
        }
        let currency = self.currency();
        for amount in [&self.standard_shipping_fee, &self.cod_limit] {
            if amount.currency != currency {
                return Err(CheckoutError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: amount.currency.code().to_string(),
                });
            }
        }
        Ok(())
    }
}
