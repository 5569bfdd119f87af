//! Payment method types and gating.

use crate::pricing::PricingResult;
use serde::{Deserialize, Serialize};

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Cash on delivery, limited by order value.
    #[default]
    Cod,
    /// MoMo wallet, paid via gateway redirect.
    MoMo,
    /// VNPay, paid via gateway redirect.
    VnPay,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::MoMo => "momo",
            PaymentMethod::VnPay => "vnpay",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::MoMo => "MoMo",
            PaymentMethod::VnPay => "VNPay",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cod" => Some(PaymentMethod::Cod),
            "momo" => Some(PaymentMethod::MoMo),
            "vnpay" => Some(PaymentMethod::VnPay),
            _ => None,
        }
    }

    /// Whether paying with this method navigates away to a gateway.
    pub fn is_gateway_redirect(&self) -> bool {
        matches!(self, PaymentMethod::MoMo | PaymentMethod::VnPay)
    }

    /// Whether this method may be offered for the given pricing.
    /// Only COD is value-limited; gateway methods are always offered.
    pub fn is_available(&self, pricing: &PricingResult) -> bool {
        match self {
            PaymentMethod::Cod => pricing.is_cod_allowed,
            PaymentMethod::MoMo | PaymentMethod::VnPay => true,
        }
    }
}

impl PricingResult {
    /// The "proceed to payment" gate.
    ///
    /// False when there is nothing to pay for, or when COD is
    /// selected on an order above the COD limit.
    pub fn can_proceed(&self, method: PaymentMethod) -> bool {
        !self.grand_total.is_zero() && method.is_available(self)
    }
}
