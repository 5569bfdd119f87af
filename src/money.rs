//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues. For VND the minor unit is the đồng itself; for
//! USD it is the cent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies handled by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    VND,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{20ab}",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            Currency::USD => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "VND" => Some(Currency::VND),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency. All
/// arithmetic is checked; mixing currencies or overflowing `i64`
/// yields `None` rather than a silent wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Return the smaller of two same-currency amounts.
    pub fn min(self, other: Money) -> Money {
        if other.amount_minor < self.amount_minor {
            other
        } else {
            self
        }
    }

    /// Try to add another Money value, returning None on currency
    /// mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_sub(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_sub(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar.
    pub fn try_mul(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on currency
    /// mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }

    /// Scale by a decimal rate, rounding half away from zero.
    ///
    /// Used for tax (`rate` in `[0, 1]`) and percentage discounts
    /// (`percent / 100.0`).
    pub fn scaled(&self, rate: f64) -> Money {
        let amount = (self.amount_minor as f64 * rate).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.scaled(percent / 100.0)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₫30000" or "$49.99").
    ///
    /// Presentation formatting beyond this (locale grouping, symbol
    /// placement) is a caller concern; the calculator itself never
    /// formats amounts.
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(30_000, Currency::VND);
        assert_eq!(m.amount_minor, 30_000);
        assert_eq!(m.currency, Currency::VND);
    }

    #[test]
    fn test_try_add() {
        let a = Money::new(1000, Currency::VND);
        let b = Money::new(500, Currency::VND);
        assert_eq!(a.try_add(&b), Some(Money::new(1500, Currency::VND)));
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let vnd = Money::new(1000, Currency::VND);
        let usd = Money::new(1000, Currency::USD);
        assert_eq!(vnd.try_add(&usd), None);
    }

    #[test]
    fn test_try_add_overflow() {
        let a = Money::new(i64::MAX, Currency::VND);
        let b = Money::new(1, Currency::VND);
        assert_eq!(a.try_add(&b), None);
    }

    #[test]
    fn test_try_sub() {
        let a = Money::new(1000, Currency::VND);
        let b = Money::new(1500, Currency::VND);
        // Subtraction may go negative; the caller decides how to floor.
        assert_eq!(a.try_sub(&b), Some(Money::new(-500, Currency::VND)));
        assert_eq!(a.try_sub(&Money::new(1, Currency::USD)), None);
    }

    #[test]
    fn test_try_mul() {
        let m = Money::new(150_000, Currency::VND);
        assert_eq!(m.try_mul(3), Some(Money::new(450_000, Currency::VND)));
        assert_eq!(Money::new(i64::MAX, Currency::VND).try_mul(2), None);
    }

    #[test]
    fn test_try_sum() {
        let items = vec![
            Money::new(100, Currency::VND),
            Money::new(200, Currency::VND),
            Money::new(300, Currency::VND),
        ];
        let total = Money::try_sum(items.iter(), Currency::VND);
        assert_eq!(total, Some(Money::new(600, Currency::VND)));
    }

    #[test]
    fn test_percentage() {
        let m = Money::new(1_000_000, Currency::VND);
        assert_eq!(m.percentage(20.0).amount_minor, 200_000);
    }

    #[test]
    fn test_scaled_rounds_half_away() {
        let m = Money::new(15, Currency::VND);
        assert_eq!(m.scaled(0.1).amount_minor, 2); // 1.5 rounds to 2
    }

    #[test]
    fn test_min() {
        let a = Money::new(100, Currency::VND);
        let b = Money::new(50, Currency::VND);
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(30_000, Currency::VND).display(), "\u{20ab}30000");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("vnd"), Some(Currency::VND));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("EUR"), None);
    }
}
