//! Coupon and voucher types.
//!
//! A coupon carries eligibility rules and a cap; at most one applies
//! per calculation. A voucher is an independent amount gated only by
//! a validity flag, and stacks with the coupon on the same subtotal.
//! Whether either applies is a business outcome, not an error: an
//! ineligible coupon simply contributes zero.

use crate::error::CheckoutError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Kind and value of a coupon discount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum CouponKind {
    /// Percentage off the subtotal (0.0 - 100.0).
    Percentage(f64),
    /// Fixed amount off the subtotal.
    Fixed(Money),
}

/// A coupon as resolved by the coupon lookup service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Coupon code (e.g., "SALE20").
    pub code: String,
    /// Kind and value of the discount.
    pub kind: CouponKind,
    /// Subtotal required for the coupon to apply.
    pub min_order_amount: Option<Money>,
    /// Cap on a percentage discount.
    pub max_discount_amount: Option<Money>,
}

impl Coupon {
    /// Create a percentage coupon.
    pub fn percentage(code: impl Into<String>, percent: f64) -> Self {
        Self {
            code: code.into(),
            kind: CouponKind::Percentage(percent),
            min_order_amount: None,
            max_discount_amount: None,
        }
    }

    /// Create a fixed-amount coupon.
    pub fn fixed(code: impl Into<String>, amount: Money) -> Self {
        Self {
            code: code.into(),
            kind: CouponKind::Fixed(amount),
            min_order_amount: None,
            max_discount_amount: None,
        }
    }

    /// Require a minimum subtotal.
    pub fn with_min_order(mut self, amount: Money) -> Self {
        self.min_order_amount = Some(amount);
        self
    }

    /// Cap the discount amount.
    pub fn with_max_discount(mut self, amount: Money) -> Self {
        self.max_discount_amount = Some(amount);
        self
    }

    /// Calculate the discount this coupon yields on a subtotal.
    ///
    /// Evaluation order is fixed: eligibility (`min_order_amount`)
    /// first, then the kind branch, then the cap. A subtotal below
    /// the minimum yields zero; reordering the cap ahead of the
    /// eligibility check would change which coupons silently yield
    /// zero, so callers must not re-derive this logic.
    ///
    /// Negative amounts on the coupon are contract violations: a
    /// negative fixed value would flow through the cap as a negative
    /// discount and inflate the payable total.
    pub fn discount_for(&self, subtotal: &Money) -> Result<Money, CheckoutError> {
        let currency = subtotal.currency;

        if let CouponKind::Fixed(amount) = &self.kind {
            if amount.is_negative() {
                return Err(CheckoutError::NegativeAmount("coupon.amount"));
            }
        }
        if let Some(min) = &self.min_order_amount {
            if min.is_negative() {
                return Err(CheckoutError::NegativeAmount("coupon.min_order_amount"));
            }
        }
        if let Some(cap) = &self.max_discount_amount {
            if cap.is_negative() {
                return Err(CheckoutError::NegativeAmount("coupon.max_discount_amount"));
            }
        }

        if let Some(min) = &self.min_order_amount {
            if min.currency != currency {
                return Err(mismatch(currency, min.currency));
            }
            if subtotal.amount_minor < min.amount_minor {
                return Ok(Money::zero(currency));
            }
        }

        match self.kind {
            CouponKind::Percentage(percent) => {
                let raw = subtotal.percentage(percent);
                match &self.max_discount_amount {
                    Some(cap) if cap.currency != currency => Err(mismatch(currency, cap.currency)),
                    Some(cap) => Ok(raw.min(*cap)),
                    None => Ok(raw),
                }
            }
            CouponKind::Fixed(amount) => {
                if amount.currency != currency {
                    return Err(mismatch(currency, amount.currency));
                }
                // A fixed coupon never exceeds the subtotal.
                Ok(amount.min(*subtotal))
            }
        }
    }
}

fn mismatch(expected: Currency, got: Currency) -> CheckoutError {
    CheckoutError::CurrencyMismatch {
        expected: expected.code().to_string(),
        got: got.code().to_string(),
    }
}

/// A voucher as resolved by the voucher lookup service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Voucher {
    /// Voucher code.
    pub code: String,
    /// Amount taken off the subtotal.
    pub amount_off: Money,
    /// Whether the voucher is still valid (unexpired, unredeemed).
    pub is_valid: bool,
}

impl Voucher {
    /// Create a valid voucher.
    pub fn new(code: impl Into<String>, amount_off: Money) -> Self {
        Self {
            code: code.into(),
            amount_off,
            is_valid: true,
        }
    }

    /// The discount this voucher yields. Validity is the only gate;
    /// subtotal magnitude is irrelevant.
    pub fn discount(&self) -> Money {
        if self.is_valid {
            self.amount_off
        } else {
            Money::zero(self.amount_off.currency)
        }
    }
}
