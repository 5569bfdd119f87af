//! Line item types.

use crate::error::CheckoutError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product (or variant) and its quantity within a cart or a
/// single "buy now" selection.
///
/// This is an immutable snapshot taken at calculation time; the cart
/// or selection component owns the live state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Variant, when the product has variants.
    pub variant_id: Option<VariantId>,
    /// Quantity.
    pub quantity: i64,
    /// Regular unit price.
    pub unit_price: Money,
    /// Sale unit price, honored only when strictly below the regular price.
    pub sale_unit_price: Option<Money>,
}

impl LineItem {
    /// Create a line item at the regular price.
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> Self {
        Self {
            product_id,
            variant_id: None,
            quantity,
            unit_price,
            sale_unit_price: None,
        }
    }

    /// Create a line item with a sale price.
    pub fn on_sale(
        product_id: ProductId,
        quantity: i64,
        unit_price: Money,
        sale_unit_price: Money,
    ) -> Self {
        Self {
            product_id,
            variant_id: None,
            quantity,
            unit_price,
            sale_unit_price: Some(sale_unit_price),
        }
    }

    /// Check whether the sale price applies.
    pub fn is_on_sale(&self) -> bool {
        self.sale_unit_price
            .map(|sale| {
                sale.currency == self.unit_price.currency
                    && sale.amount_minor < self.unit_price.amount_minor
            })
            .unwrap_or(false)
    }

    /// The price actually charged per unit: the sale price when
    /// present and strictly below the regular price, else the
    /// regular price.
    pub fn effective_unit_price(&self) -> Money {
        if self.is_on_sale() {
            self.sale_unit_price.unwrap_or(self.unit_price)
        } else {
            self.unit_price
        }
    }

    /// Total for the line (effective unit price × quantity).
    ///
    /// Returns `Overflow` if the multiplication exceeds `i64`.
    pub fn line_total(&self) -> Result<Money, CheckoutError> {
        self.effective_unit_price()
            .try_mul(self.quantity)
            .ok_or(CheckoutError::Overflow)
    }

    /// Validate the snapshot.
    ///
    /// The cart should never produce a non-positive quantity or a
    /// negative price; hitting one here is a contract violation, not
    /// a recoverable condition.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity(self.quantity));
        }
        if self.unit_price.is_negative() {
            return Err(CheckoutError::NegativeAmount("unit_price"));
        }
        if let Some(sale) = &self.sale_unit_price {
            if sale.is_negative() {
                return Err(CheckoutError::NegativeAmount("sale_unit_price"));
            }
            if sale.currency != self.unit_price.currency {
                return Err(CheckoutError::CurrencyMismatch {
                    expected: self.unit_price.currency.code().to_string(),
                    got: sale.currency.code().to_string(),
                });
            }
        }
        Ok(())
    }
}
