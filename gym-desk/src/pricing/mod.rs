//! Pricing Module
//!
//! Loyalty-based discounts and payment loyalty rewards. Independent from
//! the stored full-payment discount of premium members
//! (`PremiumMember::calculate_discount`).

mod discount;

pub use discount::*;
