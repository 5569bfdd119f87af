//! Checkout pricing calculation.
//!
//! [`compute_pricing`] is the one place order math happens. It is a
//! pure function over an input snapshot: no I/O, no clock, no global
//! state, so identical inputs always produce identical results and
//! concurrent calls need no coordination. Callers re-invoke it
//! whenever any input changes (item selection, coupon or voucher
//! applied or removed, shipping tier change) and treat the returned
//! breakdown as the sole source of truth.

use crate::cart::{Coupon, LineItem, Voucher};
use crate::config::PricingConfig;
use crate::error::CheckoutError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Everything a pricing calculation needs, snapshotted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingInput {
    /// Selected line items. May be empty.
    pub items: Vec<LineItem>,
    /// At most one coupon applies per order.
    pub coupon: Option<Coupon>,
    /// Voucher, independent of the coupon.
    pub voucher: Option<Voucher>,
    /// Business constants from application configuration.
    pub config: PricingConfig,
}

/// Complete pricing breakdown for an order.
///
/// Built fresh on every call and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingResult {
    /// Sum of effective line prices before discounts.
    pub subtotal: Money,
    /// Discount contributed by the coupon.
    pub coupon_discount: Money,
    /// Discount contributed by the voucher.
    pub voucher_discount: Money,
    /// Coupon and voucher combined. Deliberately NOT clamped to the
    /// subtotal; the `max(.., 0)` on the discounted base absorbs the
    /// pathological overshoot downstream.
    pub total_discount: Money,
    /// Shipping fee, zero at or above the free-shipping threshold.
    pub shipping_fee: Money,
    /// Tax on the discounted subtotal.
    pub tax_amount: Money,
    /// Final payable amount.
    pub grand_total: Money,
    /// Whether cash on delivery is available for this total.
    pub is_cod_allowed: bool,
}

impl PricingResult {
    /// Check if any discount applied.
    pub fn has_discounts(&self) -> bool {
        self.total_discount.amount_minor > 0
    }

    /// The totals block of the order-creation payload.
    pub fn order_payload(&self) -> OrderTotals {
        OrderTotals {
            items_price: self.subtotal,
            coupon_discount: self.coupon_discount,
            voucher_discount: self.voucher_discount,
            shipping_price: self.shipping_fee,
            tax_price: self.tax_amount,
            total_price: self.grand_total,
        }
    }
}

/// Totals submitted to the order-creation endpoint.
///
/// Field names follow the endpoint's JSON contract, so the numbers a
/// screen displays and the numbers it submits can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub items_price: Money,
    pub coupon_discount: Money,
    pub voucher_discount: Money,
    pub shipping_price: Money,
    pub tax_price: Money,
    pub total_price: Money,
}

/// Compute the full pricing breakdown for a selection.
///
/// Expected business conditions (ineligible coupon, invalid voucher,
/// empty selection) produce zero-valued fields, never errors. Errors
/// are reserved for contract violations: non-positive quantity,
/// negative amounts, tax rate outside `[0, 1]`, mixed currencies,
/// `i64` overflow. No partial result is ever returned.
pub fn compute_pricing(input: &PricingInput) -> Result<PricingResult, CheckoutError> {
    input.config.validate()?;
    let currency = input.config.currency();

    let subtotal = sum_items(&input.items, currency)?;

    let coupon_discount = match &input.coupon {
        Some(coupon) => coupon.discount_for(&subtotal)?,
        None => Money::zero(currency),
    };

    let voucher_discount = match &input.voucher {
        Some(voucher) => {
            if voucher.amount_off.is_negative() {
                return Err(CheckoutError::NegativeAmount("voucher.amount_off"));
            }
            expect_currency(&voucher.amount_off, currency)?;
            voucher.discount()
        }
        None => Money::zero(currency),
    };

    let total_discount = coupon_discount
        .try_add(&voucher_discount)
        .ok_or(CheckoutError::Overflow)?;

    // The discounted subtotal may go negative when a large fixed
    // coupon stacks with a large voucher; the shipping threshold
    // sees the signed value, tax and total see it floored at zero.
    let discounted = subtotal
        .try_sub(&total_discount)
        .ok_or(CheckoutError::Overflow)?;

    let shipping_fee = if discounted.amount_minor >= input.config.free_shipping_threshold.amount_minor
    {
        Money::zero(currency)
    } else {
        input.config.standard_shipping_fee
    };

    let taxable = Money::new(discounted.amount_minor.max(0), currency);
    let tax_amount = taxable.scaled(input.config.tax_rate);

    let grand_total = taxable
        .try_add(&shipping_fee)
        .and_then(|t| t.try_add(&tax_amount))
        .ok_or(CheckoutError::Overflow)?;

    let is_cod_allowed = grand_total.amount_minor <= input.config.cod_limit.amount_minor;

    Ok(PricingResult {
        subtotal,
        coupon_discount,
        voucher_discount,
        total_discount,
        shipping_fee,
        tax_amount,
        grand_total,
        is_cod_allowed,
    })
}

fn sum_items(items: &[LineItem], currency: Currency) -> Result<Money, CheckoutError> {
    let mut line_totals = Vec::with_capacity(items.len());
    for item in items {
        item.validate()?;
        expect_currency(&item.unit_price, currency)?;
        line_totals.push(item.line_total()?);
    }
    Money::try_sum(line_totals.iter(), currency).ok_or(CheckoutError::Overflow)
}

fn expect_currency(amount: &Money, currency: Currency) -> Result<(), CheckoutError> {
    if amount.currency != currency {
        return Err(CheckoutError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: amount.currency.code().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn vnd(amount: i64) -> Money {
        Money::new(amount, Currency::VND)
    }

    fn config() -> PricingConfig {
        PricingConfig {
            tax_rate: 0.1,
            free_shipping_threshold: vnd(10_000_000),
            standard_shipping_fee: vnd(30_000),
            cod_limit: vnd(100_000_000),
        }
    }

    fn item(unit: i64, qty: i64) -> LineItem {
        LineItem::new(ProductId::new("p1"), qty, vnd(unit))
    }

    fn input(items: Vec<LineItem>) -> PricingInput {
        PricingInput {
            items,
            coupon: None,
            voucher: None,
            config: config(),
        }
    }

    #[test]
    fn test_empty_selection() {
        let pricing = compute_pricing(&input(vec![])).unwrap();
        assert_eq!(pricing.subtotal, vnd(0));
        assert_eq!(pricing.coupon_discount, vnd(0));
        assert_eq!(pricing.voucher_discount, vnd(0));
        // Discounted subtotal 0 is below the threshold, so the
        // standard fee still applies.
        assert_eq!(pricing.shipping_fee, vnd(30_000));
        assert_eq!(pricing.tax_amount, vnd(0));
        assert_eq!(pricing.grand_total, vnd(30_000));
        assert!(pricing.is_cod_allowed);
    }

    #[test]
    fn test_sale_price_contributes_to_subtotal() {
        let sale = LineItem::on_sale(ProductId::new("p1"), 2, vnd(100), vnd(80));
        let pricing = compute_pricing(&input(vec![sale])).unwrap();
        assert_eq!(pricing.subtotal, vnd(160));
    }

    #[test]
    fn test_subtotal_sums_lines() {
        let pricing =
            compute_pricing(&input(vec![item(150_000, 2), item(200_000, 3)])).unwrap();
        assert_eq!(pricing.subtotal, vnd(900_000));
    }

    #[test]
    fn test_percentage_coupon_capped() {
        let mut inp = input(vec![item(1_000_000, 1)]);
        inp.coupon = Some(Coupon::percentage("SALE20", 20.0).with_max_discount(vnd(150_000)));
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.coupon_discount, vnd(150_000));
        assert_eq!(pricing.total_discount, vnd(150_000));
    }

    #[test]
    fn test_coupon_below_minimum_yields_zero() {
        let mut inp = input(vec![item(100_000, 1)]);
        inp.coupon = Some(Coupon::fixed("OFF50K", vnd(50_000)).with_min_order(vnd(500_000)));
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.coupon_discount, vnd(0));
    }

    #[test]
    fn test_free_shipping_gated_by_discounted_subtotal() {
        // Raw subtotal 10,100,000 exceeds the 10,000,000 threshold,
        // but the voucher pulls the discounted subtotal below it.
        let mut inp = input(vec![item(10_100_000, 1)]);
        inp.voucher = Some(Voucher::new("GIFT200K", vnd(200_000)));
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.voucher_discount, vnd(200_000));
        assert_eq!(pricing.shipping_fee, vnd(30_000));
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let pricing = compute_pricing(&input(vec![item(10_000_000, 1)])).unwrap();
        assert_eq!(pricing.shipping_fee, vnd(0));
    }

    #[test]
    fn test_invalid_voucher_contributes_nothing() {
        let mut inp = input(vec![item(500_000, 1)]);
        let mut voucher = Voucher::new("EXPIRED", vnd(100_000));
        voucher.is_valid = false;
        inp.voucher = Some(voucher);
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.voucher_discount, vnd(0));
    }

    #[test]
    fn test_coupon_and_voucher_stack() {
        let mut inp = input(vec![item(1_000_000, 1)]);
        inp.coupon = Some(Coupon::percentage("SALE10", 10.0));
        inp.voucher = Some(Voucher::new("GIFT50K", vnd(50_000)));
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.coupon_discount, vnd(100_000));
        assert_eq!(pricing.voucher_discount, vnd(50_000));
        assert_eq!(pricing.total_discount, vnd(150_000));
        // tax = (1,000,000 - 150,000) * 0.1
        assert_eq!(pricing.tax_amount, vnd(85_000));
        // 850,000 + 30,000 shipping + 85,000 tax
        assert_eq!(pricing.grand_total, vnd(965_000));
    }

    #[test]
    fn test_discount_overshoot_not_clamped() {
        // A fixed coupon equal to the subtotal plus a voucher drives
        // the discounted subtotal negative. The combined discount is
        // reported as-is; only tax and total floor the base at zero.
        let mut inp = input(vec![item(100_000, 1)]);
        inp.coupon = Some(Coupon::fixed("OFF100K", vnd(100_000)));
        inp.voucher = Some(Voucher::new("GIFT50K", vnd(50_000)));
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.total_discount, vnd(150_000));
        assert_eq!(pricing.tax_amount, vnd(0));
        assert_eq!(pricing.grand_total, vnd(30_000)); // shipping only
    }

    #[test]
    fn test_cod_limit_boundary() {
        // Zero threshold makes shipping free and zero tax keeps the
        // grand total equal to the subtotal, so the boundary is exact.
        let mut inp = input(vec![item(2_000_000, 1)]);
        inp.config.tax_rate = 0.0;
        inp.config.free_shipping_threshold = vnd(0);

        inp.config.cod_limit = vnd(2_000_000);
        let pricing = compute_pricing(&inp).unwrap();
        assert_eq!(pricing.grand_total, inp.config.cod_limit);
        assert!(pricing.is_cod_allowed);

        inp.config.cod_limit = vnd(1_999_999);
        let pricing = compute_pricing(&inp).unwrap();
        assert!(!pricing.is_cod_allowed);
    }

    #[test]
    fn test_determinism() {
        let make = || {
            let mut inp = input(vec![item(750_000, 3), item(120_000, 1)]);
            inp.coupon = Some(Coupon::percentage("SALE15", 15.0).with_max_discount(vnd(300_000)));
            inp.voucher = Some(Voucher::new("GIFT", vnd(40_000)));
            inp
        };
        let first = compute_pricing(&make()).unwrap();
        let second = compute_pricing(&make()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let result = compute_pricing(&input(vec![item(100_000, -1)]));
        assert_eq!(result, Err(CheckoutError::InvalidQuantity(-1)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = compute_pricing(&input(vec![item(-5, 1)]));
        assert_eq!(result, Err(CheckoutError::NegativeAmount("unit_price")));
    }

    #[test]
    fn test_negative_fixed_coupon_rejected() {
        // A negative fixed value must not pass through as a negative
        // discount that inflates the payable total.
        let mut inp = input(vec![item(100_000, 1)]);
        inp.coupon = Some(Coupon::fixed("NEG", vnd(-50_000)));
        assert_eq!(
            compute_pricing(&inp),
            Err(CheckoutError::NegativeAmount("coupon.amount"))
        );
    }

    #[test]
    fn test_negative_voucher_rejected() {
        let mut inp = input(vec![item(100_000, 1)]);
        inp.voucher = Some(Voucher::new("NEG", vnd(-10_000)));
        assert_eq!(
            compute_pricing(&inp),
            Err(CheckoutError::NegativeAmount("voucher.amount_off"))
        );
    }

    #[test]
    fn test_bad_tax_rate_rejected() {
        let mut inp = input(vec![item(100_000, 1)]);
        inp.config.tax_rate = 1.2;
        assert_eq!(
            compute_pricing(&inp),
            Err(CheckoutError::InvalidTaxRate(1.2))
        );
    }

    #[test]
    fn test_item_currency_mismatch_rejected() {
        let foreign = LineItem::new(ProductId::new("p1"), 1, Money::new(100, Currency::USD));
        assert!(matches!(
            compute_pricing(&input(vec![foreign])),
            Err(CheckoutError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_order_payload_field_names() {
        let pricing = compute_pricing(&input(vec![item(500_000, 1)])).unwrap();
        let json = serde_json::to_value(pricing.order_payload()).unwrap();
        for key in [
            "itemsPrice",
            "couponDiscount",
            "voucherDiscount",
            "shippingPrice",
            "taxPrice",
            "totalPrice",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
