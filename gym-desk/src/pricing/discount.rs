//! Loyalty Discount Calculator
//!
//! Tiered discount on a member's base price (regular plan price or premium
//! charge):
//!
//! | Loyalty points | Discount |
//! |----------------|----------|
//! | >= 100         | 15%      |
//! | >= 50          | 10%      |
//! | >= 25          | 5%       |
//! | otherwise      | 0%       |
//!
//! Premium members get a flat extra 5%. Each percentage amount is rounded to
//! 2 decimals on its own, then the sum is rounded again.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{GymMember, Member, MemberKind};

use crate::money::{round_money, to_decimal, to_f64};

/// Extra discount percentage for premium members
const PREMIUM_EXTRA_PERCENT: i64 = 5;

/// Payment amount that earns one loyalty point
const AMOUNT_PER_POINT: i64 = 10;

/// Loyalty discount percentage for a points balance
pub fn loyalty_discount_percent(loyalty_points: f64) -> i64 {
    if loyalty_points >= 100.0 {
        15
    } else if loyalty_points >= 50.0 {
        10
    } else if loyalty_points >= 25.0 {
        5
    } else {
        0
    }
}

fn percent_of(base: Decimal, percent: i64) -> Decimal {
    round_money(base * Decimal::new(percent, 2))
}

/// Calculate the loyalty discount for a member
///
/// Pure: the member's stored discount amount is not touched.
pub fn calculate_discount_amount(member: &Member) -> f64 {
    let base = to_decimal(member.base_price());

    let mut discount = percent_of(base, loyalty_discount_percent(member.loyalty_points()));
    if member.kind() == MemberKind::Premium {
        discount += percent_of(base, PREMIUM_EXTRA_PERCENT);
    }

    to_f64(discount)
}

/// Whole loyalty points earned by a payment: one per full 10 paid
///
/// Non-positive payments earn nothing.
pub fn loyalty_points_for_payment(amount: f64) -> u32 {
    let amount = to_decimal(amount);
    if amount <= Decimal::ZERO {
        return 0;
    }
    (amount / Decimal::from(AMOUNT_PER_POINT))
        .trunc()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Discount breakdown for one member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountQuote {
    pub member_id: i64,
    pub name: String,
    pub kind: MemberKind,
    pub base_price: f64,
    pub loyalty_points: f64,
    pub discount: f64,
    pub final_price: f64,
}

impl DiscountQuote {
    pub fn for_member(member: &Member) -> Self {
        let base_price = member.base_price();
        let discount = calculate_discount_amount(member);
        Self {
            member_id: member.id(),
            name: member.name().to_string(),
            kind: member.kind(),
            base_price,
            loyalty_points: member.loyalty_points(),
            discount,
            final_price: to_f64(to_decimal(base_price) - to_decimal(discount)),
        }
    }
}

impl std::fmt::Display for DiscountQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Member ID: {}", self.member_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "Base Price: £{:.2}", self.base_price)?;
        writeln!(f, "Loyalty Points: {:.0}", self.loyalty_points)?;
        writeln!(f, "Discount Amount: £{:.2}", self.discount)?;
        write!(f, "Final Price: £{:.2}", self.final_price)
    }
}
