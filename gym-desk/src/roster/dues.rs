//! Dues settlement
//!
//! Charges a member their base price minus the loyalty discount, credits
//! one loyalty point per full 10 paid and, for premium members, records the
//! payment against the premium charge.

use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{GymMember, MemberKind, PaymentOutcome};
use std::fmt;
use std::str::FromStr;

use super::Roster;
use crate::money::{to_decimal, to_f64};
use crate::pricing::{calculate_discount_amount, loyalty_points_for_payment};

/// How a member settled their dues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0} (expected cash, credit-card, debit-card or bank-transfer)")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    /// Accepts `cash`, `credit-card`, `Credit Card`, `credit_card`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().replace(' ', "").eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

/// Outcome of a dues settlement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuesReceipt {
    pub member_id: i64,
    pub name: String,
    pub kind: MemberKind,
    /// Membership was inactive and got activated for this payment
    pub activated: bool,
    pub due_amount: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub method: PaymentMethod,
    pub points_earned: u32,
    pub total_loyalty_points: f64,
    /// Premium payment outcome; `None` for regular members
    pub payment: Option<PaymentOutcome>,
}

impl fmt::Display for DuesReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.activated {
            writeln!(f, "Membership activated.")?;
        }
        writeln!(f, "Member: {} ({}, {})", self.member_id, self.name, self.kind)?;
        writeln!(f, "Due Amount: £{:.2}", self.due_amount)?;
        writeln!(f, "Discount: £{:.2}", self.discount)?;
        writeln!(f, "Amount Paid: £{:.2}", self.final_amount)?;
        writeln!(f, "Payment Method: {}", self.method)?;
        writeln!(f, "Loyalty Points Earned: {}", self.points_earned)?;
        write!(f, "New Total Loyalty Points: {:.0}", self.total_loyalty_points)?;
        if let Some(payment) = &self.payment {
            write!(f, "\n{payment}")?;
        }
        Ok(())
    }
}

impl Roster {
    /// Settle a member's dues
    ///
    /// An inactive member is activated first when `activate_if_inactive` is
    /// set; otherwise the call fails without changing anything.
    pub fn settle_dues(
        &mut self,
        id: i64,
        method: PaymentMethod,
        activate_if_inactive: bool,
    ) -> AppResult<DuesReceipt> {
        let member = self
            .find_mut(id)
            .ok_or_else(|| AppError::member_not_found(id))?;

        let activated = !member.is_active();
        if activated {
            if !activate_if_inactive {
                return Err(AppError::member_inactive(id));
            }
            member.activate_membership();
        }

        let due_amount = member.base_price();
        let discount = calculate_discount_amount(member);
        let final_amount = to_f64(to_decimal(due_amount) - to_decimal(discount));

        let points_earned = loyalty_points_for_payment(final_amount);
        if points_earned > 0 {
            member.add_loyalty_points(f64::from(points_earned));
        }

        let payment = member
            .as_premium_mut()
            .map(|premium| premium.pay_due_amount(final_amount));

        tracing::info!(
            member_id = id,
            method = %method,
            due_amount,
            discount,
            final_amount,
            points_earned,
            "Dues settled"
        );

        Ok(DuesReceipt {
            member_id: id,
            name: member.name().to_string(),
            kind: member.kind(),
            activated,
            due_amount,
            discount,
            final_amount,
            method,
            points_earned,
            total_loyalty_points: member.loyalty_points(),
            payment,
        })
    }
}
