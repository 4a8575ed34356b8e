//! Member Model
//!
//! Two member variants share the [`GymMember`] capability:
//!
//! - [`RegularMember`]: plan-priced membership with an attendance-based
//!   upgrade eligibility flag
//! - [`PremiumMember`]: charged membership with payment tracking and a
//!   personal trainer
//!
//! [`Member`] is the closed union of both and dispatches the capability
//! statically. Business-rule outcomes ([`PlanChange`], [`PaymentOutcome`])
//! are plain values, never errors.

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::plan::PlanTier;
use super::snapshot::{PremiumSnapshot, RegularSnapshot};

/// Attendance at which a regular member becomes eligible for an upgrade
pub const ATTENDANCE_LIMIT: u32 = 30;

/// Loyalty points awarded for every marked attendance
pub const POINTS_PER_VISIT: f64 = 5.0;

/// Gender placeholder for members rebuilt from a member file
pub const UNSPECIFIED_GENDER: &str = "Not Specified";

const FULL_PAYMENT_DISCOUNT_RATE: f64 = 0.10;

/// Identity fields, fixed at construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub date_of_birth: String,
    pub membership_start_date: String,
}

/// State shared by every member variant
///
/// Fields are only reachable through methods that respect the lifecycle
/// rules: attendance and loyalty points never decrease outside of
/// [`MemberCore::reset`].
#[derive(Debug, Clone, Serialize)]
pub struct MemberCore {
    #[serde(flatten)]
    profile: MemberProfile,
    attendance: u32,
    loyalty_points: f64,
    active: bool,
}

impl MemberCore {
    pub fn new(profile: MemberProfile) -> Self {
        Self {
            profile,
            attendance: 0,
            loyalty_points: 0.0,
            active: false,
        }
    }

    fn restored(profile: MemberProfile, attendance: u32, loyalty_points: f64, active: bool) -> Self {
        Self {
            profile,
            attendance,
            loyalty_points: loyalty_points.max(0.0),
            active,
        }
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn attendance(&self) -> u32 {
        self.attendance
    }

    pub fn loyalty_points(&self) -> f64 {
        self.loyalty_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
        }
    }

    /// Inactive, zero attendance, zero points
    pub fn reset(&mut self) {
        self.active = false;
        self.attendance = 0;
        self.loyalty_points = 0.0;
    }

    /// Non-positive amounts are ignored
    pub fn add_loyalty_points(&mut self, points: f64) {
        if points > 0.0 {
            self.loyalty_points += points;
        }
    }

    fn record_visit(&mut self) {
        self.attendance = self.attendance.saturating_add(1);
        self.loyalty_points += POINTS_PER_VISIT;
    }
}

/// Capability shared by all gym members
#[enum_dispatch]
pub trait GymMember {
    fn core(&self) -> &MemberCore;

    fn core_mut(&mut self) -> &mut MemberCore;

    /// Record one visit: attendance +1, loyalty points +5
    fn mark_attendance(&mut self);

    fn id(&self) -> i64 {
        self.core().profile.id
    }

    fn name(&self) -> &str {
        &self.core().profile.name
    }

    fn location(&self) -> &str {
        &self.core().profile.location
    }

    fn phone(&self) -> &str {
        &self.core().profile.phone
    }

    fn email(&self) -> &str {
        &self.core().profile.email
    }

    fn gender(&self) -> &str {
        &self.core().profile.gender
    }

    fn date_of_birth(&self) -> &str {
        &self.core().profile.date_of_birth
    }

    fn membership_start_date(&self) -> &str {
        &self.core().profile.membership_start_date
    }

    fn attendance(&self) -> u32 {
        self.core().attendance()
    }

    fn loyalty_points(&self) -> f64 {
        self.core().loyalty_points()
    }

    fn is_active(&self) -> bool {
        self.core().is_active()
    }

    fn activate_membership(&mut self) {
        self.core_mut().activate();
    }

    fn deactivate_membership(&mut self) {
        self.core_mut().deactivate();
    }

    fn reset_member(&mut self) {
        self.core_mut().reset();
    }

    fn add_loyalty_points(&mut self, points: f64) {
        self.core_mut().add_loyalty_points(points);
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of a plan upgrade request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanChange {
    /// Requested plan is the current plan; nothing changed
    AlreadySubscribed,
    /// Requested plan is not a known tier; nothing changed
    InvalidPlan,
    /// Regular plan and price updated
    Upgraded { plan: PlanTier, price: f64 },
    /// Premium plan and charge updated
    ChargeChanged {
        plan: PlanTier,
        charge: f64,
        /// Payment state was reset and the member must pay again
        repayment_required: bool,
    },
}

impl PlanChange {
    pub fn is_upgraded(&self) -> bool {
        matches!(self, Self::Upgraded { .. } | Self::ChargeChanged { .. })
    }
}

impl fmt::Display for PlanChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySubscribed => f.write_str("You are already subscribed to this plan."),
            Self::InvalidPlan => f.write_str("Invalid plan selected."),
            Self::Upgraded { plan, price } => {
                write!(f, "Plan upgraded to {plan} at price {price:.2}.")
            }
            Self::ChargeChanged {
                plan,
                charge,
                repayment_required,
            } => {
                write!(f, "Plan upgraded to {plan}. New charge: {charge:.2}")?;
                if *repayment_required {
                    f.write_str(". Please make the new payment.")?;
                }
                Ok(())
            }
        }
    }
}

/// Result of a premium payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// Full payment was already recorded; nothing changed
    AlreadyComplete,
    /// Paid total now exceeds the charge. The amount is kept and full
    /// payment stays unset.
    ExceedsCharge { paid: f64, charge: f64 },
    /// Payment recorded
    Accepted { remaining: f64, fully_paid: bool },
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyComplete => f.write_str("Payment is already complete."),
            Self::ExceedsCharge { .. } => f.write_str("Paid amount exceeds the premium charge."),
            Self::Accepted { remaining, .. } => write!(
                f,
                "Payment successful. Remaining amount to be paid: {remaining:.2}"
            ),
        }
    }
}

// ============================================================================
// Regular member
// ============================================================================

/// Regular member (plan-priced)
#[derive(Debug, Clone, Serialize)]
pub struct RegularMember {
    #[serde(flatten)]
    core: MemberCore,
    eligible_for_upgrade: bool,
    removal_reason: String,
    referral_source: String,
    plan: PlanTier,
    price: f64,
}

impl RegularMember {
    pub fn new(profile: MemberProfile, referral_source: impl Into<String>) -> Self {
        Self {
            core: MemberCore::new(profile),
            eligible_for_upgrade: false,
            removal_reason: String::new(),
            referral_source: referral_source.into(),
            plan: PlanTier::Basic,
            price: PlanTier::Basic.regular_price(),
        }
    }

    /// Rebuild a member from a persisted row
    ///
    /// Eligibility is derived from the restored attendance. Referral
    /// source, removal reason and loyalty points are not persisted.
    pub fn from_snapshot(snapshot: RegularSnapshot) -> Self {
        let RegularSnapshot {
            profile,
            plan,
            price,
            attendance,
            active,
        } = snapshot;
        Self {
            core: MemberCore::restored(profile, attendance, 0.0, active),
            eligible_for_upgrade: attendance >= ATTENDANCE_LIMIT,
            removal_reason: String::new(),
            referral_source: String::new(),
            plan,
            price,
        }
    }

    pub fn attendance_limit(&self) -> u32 {
        ATTENDANCE_LIMIT
    }

    pub fn is_eligible_for_upgrade(&self) -> bool {
        self.eligible_for_upgrade
    }

    pub fn removal_reason(&self) -> &str {
        &self.removal_reason
    }

    pub fn referral_source(&self) -> &str {
        &self.referral_source
    }

    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Switch to another tier at its fixed regular price
    ///
    /// Eligibility is not required and is left untouched.
    pub fn upgrade_plan(&mut self, new_plan: &str) -> PlanChange {
        if self.plan.as_str().eq_ignore_ascii_case(new_plan) {
            return PlanChange::AlreadySubscribed;
        }
        let Some(tier) = PlanTier::parse(new_plan) else {
            return PlanChange::InvalidPlan;
        };

        self.plan = tier;
        self.price = tier.regular_price();
        PlanChange::Upgraded {
            plan: tier,
            price: self.price,
        }
    }

    /// Reset the member to a fresh basic plan and record why
    pub fn revert_regular_member(&mut self, removal_reason: impl Into<String>) {
        self.core.reset();
        self.eligible_for_upgrade = false;
        self.plan = PlanTier::Basic;
        self.price = PlanTier::Basic.regular_price();
        self.removal_reason = removal_reason.into();
    }
}

impl GymMember for RegularMember {
    fn core(&self) -> &MemberCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MemberCore {
        &mut self.core
    }

    fn mark_attendance(&mut self) {
        self.core.record_visit();
        if self.core.attendance >= ATTENDANCE_LIMIT {
            self.eligible_for_upgrade = true;
        }
    }
}

// ============================================================================
// Premium member
// ============================================================================

/// Premium member (charged, with payment tracking)
#[derive(Debug, Clone, Serialize)]
pub struct PremiumMember {
    #[serde(flatten)]
    core: MemberCore,
    premium_charge: f64,
    personal_trainer: String,
    referral_source: String,
    full_payment: bool,
    paid_amount: f64,
    discount_amount: f64,
    plan: PlanTier,
}

impl PremiumMember {
    pub fn new(
        profile: MemberProfile,
        personal_trainer: impl Into<String>,
        referral_source: impl Into<String>,
        premium_charge: f64,
    ) -> Self {
        Self {
            core: MemberCore::new(profile),
            premium_charge,
            personal_trainer: personal_trainer.into(),
            referral_source: referral_source.into(),
            full_payment: false,
            paid_amount: 0.0,
            discount_amount: 0.0,
            plan: PlanTier::Basic,
        }
    }

    /// Rebuild a member from a persisted row
    ///
    /// Payment state, attendance and referral source are not persisted and
    /// start from their defaults.
    pub fn from_snapshot(snapshot: PremiumSnapshot) -> Self {
        let PremiumSnapshot {
            profile,
            personal_trainer,
            plan,
            premium_charge,
            loyalty_points,
            active,
        } = snapshot;
        Self {
            core: MemberCore::restored(profile, 0, loyalty_points, active),
            premium_charge,
            personal_trainer,
            referral_source: String::new(),
            full_payment: false,
            paid_amount: 0.0,
            discount_amount: 0.0,
            plan,
        }
    }

    pub fn premium_charge(&self) -> f64 {
        self.premium_charge
    }

    pub fn personal_trainer(&self) -> &str {
        &self.personal_trainer
    }

    pub fn referral_source(&self) -> &str {
        &self.referral_source
    }

    pub fn is_full_payment(&self) -> bool {
        self.full_payment
    }

    pub fn paid_amount(&self) -> f64 {
        self.paid_amount
    }

    pub fn discount_amount(&self) -> f64 {
        self.discount_amount
    }

    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    pub fn remaining_amount(&self) -> f64 {
        self.premium_charge - self.paid_amount
    }

    /// Record a payment towards the premium charge
    ///
    /// The amount is not sign-checked. An over-payment is kept in the paid
    /// total without setting full payment. Full payment is only set when the
    /// paid total equals the charge exactly.
    #[allow(clippy::float_cmp)]
    pub fn pay_due_amount(&mut self, amount: f64) -> PaymentOutcome {
        if self.full_payment {
            return PaymentOutcome::AlreadyComplete;
        }

        self.paid_amount += amount;

        if self.paid_amount > self.premium_charge {
            return PaymentOutcome::ExceedsCharge {
                paid: self.paid_amount,
                charge: self.premium_charge,
            };
        }

        if self.paid_amount == self.premium_charge {
            self.full_payment = true;
        }

        PaymentOutcome::Accepted {
            remaining: self.remaining_amount(),
            fully_paid: self.full_payment,
        }
    }

    /// Store the full-payment discount: 10% of the charge once fully paid,
    /// zero otherwise
    pub fn calculate_discount(&mut self) {
        if self.full_payment {
            self.discount_amount = FULL_PAYMENT_DISCOUNT_RATE * self.premium_charge;
            tracing::debug!(
                member_id = self.core.profile.id,
                discount = self.discount_amount,
                "Full payment discount calculated"
            );
        } else {
            self.discount_amount = 0.0;
            tracing::debug!(
                member_id = self.core.profile.id,
                "No discount available, payment not full"
            );
        }
    }

    /// Switch to another tier at its fixed premium charge
    ///
    /// Moving to a more expensive tier resets the payment state.
    pub fn upgrade_plan(&mut self, new_plan: &str) -> PlanChange {
        if self.plan.as_str().eq_ignore_ascii_case(new_plan) {
            return PlanChange::AlreadySubscribed;
        }
        let Some(tier) = PlanTier::parse(new_plan) else {
            return PlanChange::InvalidPlan;
        };

        let new_charge = tier.premium_charge();
        let repayment_required = new_charge > self.premium_charge;

        self.plan = tier;
        self.premium_charge = new_charge;
        if repayment_required {
            self.full_payment = false;
            self.paid_amount = 0.0;
        }

        PlanChange::ChargeChanged {
            plan: tier,
            charge: new_charge,
            repayment_required,
        }
    }

    /// Reset the member and clear trainer and payment state
    pub fn revert_premium_member(&mut self) {
        self.core.reset();
        self.personal_trainer.clear();
        self.full_payment = false;
        self.paid_amount = 0.0;
        self.discount_amount = 0.0;
    }
}

impl GymMember for PremiumMember {
    fn core(&self) -> &MemberCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MemberCore {
        &mut self.core
    }

    fn mark_attendance(&mut self) {
        self.core.record_visit();
    }
}

// ============================================================================
// Member union
// ============================================================================

/// Member variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Regular,
    Premium,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => f.write_str("Regular"),
            Self::Premium => f.write_str("Premium"),
        }
    }
}

/// Any gym member
#[enum_dispatch(GymMember)]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Regular(RegularMember),
    Premium(PremiumMember),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Self::Regular(_) => MemberKind::Regular,
            Self::Premium(_) => MemberKind::Premium,
        }
    }

    pub fn as_regular(&self) -> Option<&RegularMember> {
        match self {
            Self::Regular(m) => Some(m),
            Self::Premium(_) => None,
        }
    }

    pub fn as_regular_mut(&mut self) -> Option<&mut RegularMember> {
        match self {
            Self::Regular(m) => Some(m),
            Self::Premium(_) => None,
        }
    }

    pub fn as_premium(&self) -> Option<&PremiumMember> {
        match self {
            Self::Premium(m) => Some(m),
            Self::Regular(_) => None,
        }
    }

    pub fn as_premium_mut(&mut self) -> Option<&mut PremiumMember> {
        match self {
            Self::Premium(m) => Some(m),
            Self::Regular(_) => None,
        }
    }

    pub fn plan(&self) -> PlanTier {
        match self {
            Self::Regular(m) => m.plan(),
            Self::Premium(m) => m.plan(),
        }
    }

    /// Regular plan price or premium charge
    pub fn base_price(&self) -> f64 {
        match self {
            Self::Regular(m) => m.price(),
            Self::Premium(m) => m.premium_charge(),
        }
    }

    pub fn upgrade_plan(&mut self, new_plan: &str) -> PlanChange {
        match self {
            Self::Regular(m) => m.upgrade_plan(new_plan),
            Self::Premium(m) => m.upgrade_plan(new_plan),
        }
    }
}

// ============================================================================
// Create payloads
// ============================================================================

/// Create regular member payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegularMemberCreate {
    pub profile: MemberProfile,
    pub referral_source: String,
}

impl From<RegularMemberCreate> for RegularMember {
    fn from(payload: RegularMemberCreate) -> Self {
        RegularMember::new(payload.profile, payload.referral_source)
    }
}

/// Create premium member payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PremiumMemberCreate {
    pub profile: MemberProfile,
    pub personal_trainer: String,
    pub referral_source: String,
    pub premium_charge: f64,
}

impl From<PremiumMemberCreate> for PremiumMember {
    fn from(payload: PremiumMemberCreate) -> Self {
        PremiumMember::new(
            payload.profile,
            payload.personal_trainer,
            payload.referral_source,
            payload.premium_charge,
        )
    }
}
