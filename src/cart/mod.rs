//! Cart module.
//!
//! Contains the line-item snapshot the calculator consumes and the
//! coupon/voucher discount types.

mod discount;
mod item;

pub use discount::{Coupon, CouponKind, Voucher};
pub use item::LineItem;
