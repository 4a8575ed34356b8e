//! Member roster
//!
//! [`Roster`] exclusively owns every member in insertion order. All by-id
//! operations return a not-found error for unknown ids and validate input
//! before touching any state.

mod dues;

pub use dues::{DuesReceipt, PaymentMethod, UnknownPaymentMethod};

use shared::error::{AppError, AppResult};
use shared::models::{
    GymMember, Member, PaymentOutcome, PlanChange, PremiumMember, PremiumMemberCreate,
    RegularMember, RegularMemberCreate,
};

use crate::pricing::DiscountQuote;
use crate::utils::validation::{validate_positive_amount, validate_required_text};

/// Owned, ordered member collection
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn regulars(&self) -> impl Iterator<Item = &RegularMember> {
        self.members.iter().filter_map(Member::as_regular)
    }

    pub fn premiums(&self) -> impl Iterator<Item = &PremiumMember> {
        self.members.iter().filter_map(Member::as_premium)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.members.iter().any(|m| m.id() == id)
    }

    pub fn find(&self, id: i64) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }

    pub fn find_mut(&mut self, id: i64) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id() == id)
    }

    fn get(&self, id: i64) -> AppResult<&Member> {
        self.find(id).ok_or_else(|| AppError::member_not_found(id))
    }

    fn get_mut(&mut self, id: i64) -> AppResult<&mut Member> {
        self.find_mut(id).ok_or_else(|| AppError::member_not_found(id))
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Insert a member, rejecting a duplicate id
    pub fn insert(&mut self, member: Member) -> AppResult<&Member> {
        if self.contains(member.id()) {
            return Err(AppError::duplicate_member_id(member.id()));
        }
        self.members.push(member);
        let index = self.members.len() - 1;
        Ok(&self.members[index])
    }

    /// Replace the whole collection
    ///
    /// Later duplicates of an id are dropped with a warning. Returns the
    /// number of members kept.
    pub fn replace_all(&mut self, members: impl IntoIterator<Item = Member>) -> usize {
        self.members.clear();
        for member in members {
            let id = member.id();
            if self.insert(member).is_err() {
                tracing::warn!(member_id = id, "Duplicate member id dropped");
            }
        }
        self.members.len()
    }

    // ==================== Registration ====================

    /// Add a regular member
    ///
    /// Name, phone and email are required.
    pub fn add_regular(&mut self, payload: RegularMemberCreate) -> AppResult<&Member> {
        let p = &payload.profile;
        validate_required_text(&p.name, "Name")?;
        validate_required_text(&p.phone, "Phone")?;
        validate_required_text(&p.email, "Email")?;

        let member = RegularMember::from(payload);
        tracing::info!(member_id = member.id(), name = %member.name(), "Regular member added");
        self.insert(member.into())
    }

    /// Add a premium member
    ///
    /// Name, location, phone, gender, trainer and referral source are
    /// required; the charge must be positive.
    pub fn add_premium(&mut self, payload: PremiumMemberCreate) -> AppResult<&Member> {
        let p = &payload.profile;
        validate_required_text(&p.name, "Name")?;
        validate_required_text(&p.location, "Location")?;
        validate_required_text(&p.phone, "Phone")?;
        validate_required_text(&p.gender, "Gender")?;
        validate_required_text(&payload.personal_trainer, "Trainer")?;
        validate_required_text(&payload.referral_source, "Referral source")?;
        validate_positive_amount(payload.premium_charge, "Premium charge")?;

        let member = PremiumMember::from(payload);
        tracing::info!(
            member_id = member.id(),
            name = %member.name(),
            charge = member.premium_charge(),
            "Premium member added"
        );
        self.insert(member.into())
    }

    // ==================== Shared operations ====================

    pub fn activate(&mut self, id: i64) -> AppResult<&Member> {
        let member = self.get_mut(id)?;
        member.activate_membership();
        tracing::info!(member_id = id, "Membership activated");
        Ok(member)
    }

    pub fn deactivate(&mut self, id: i64) -> AppResult<&Member> {
        let member = self.get_mut(id)?;
        member.deactivate_membership();
        tracing::info!(member_id = id, "Membership deactivated");
        Ok(member)
    }

    /// Record a visit; returns the new attendance count
    pub fn mark_attendance(&mut self, id: i64) -> AppResult<u32> {
        let member = self.get_mut(id)?;
        member.mark_attendance();
        tracing::debug!(member_id = id, attendance = member.attendance(), "Attendance marked");
        Ok(member.attendance())
    }

    /// Add loyalty points; returns the new balance
    pub fn add_loyalty_points(&mut self, id: i64, points: f64) -> AppResult<f64> {
        let member = self.get_mut(id)?;
        member.add_loyalty_points(points);
        Ok(member.loyalty_points())
    }

    pub fn upgrade_plan(&mut self, id: i64, new_plan: &str) -> AppResult<PlanChange> {
        let member = self.get_mut(id)?;
        let change = member.upgrade_plan(new_plan);
        tracing::info!(member_id = id, requested = new_plan, outcome = %change, "Plan upgrade");
        Ok(change)
    }

    /// Revert a member to a fresh state
    ///
    /// The reason is stored for regular members and ignored for premium
    /// members.
    pub fn revert(&mut self, id: i64, reason: &str) -> AppResult<&Member> {
        let member = self.get_mut(id)?;
        match member {
            Member::Regular(m) => m.revert_regular_member(reason),
            Member::Premium(m) => m.revert_premium_member(),
        }
        tracing::info!(member_id = id, kind = %member.kind(), "Member reverted");
        Ok(member)
    }

    // ==================== Premium operations ====================

    fn premium_mut(&mut self, id: i64) -> AppResult<&mut PremiumMember> {
        self.get_mut(id)?.as_premium_mut().ok_or_else(|| {
            AppError::kind_mismatch(format!("Member {id} is not a premium member"))
        })
    }

    pub fn pay_due_amount(&mut self, id: i64, amount: f64) -> AppResult<PaymentOutcome> {
        let member = self.premium_mut(id)?;
        let outcome = member.pay_due_amount(amount);
        tracing::info!(member_id = id, amount, outcome = %outcome, "Premium payment");
        Ok(outcome)
    }

    /// Store the full-payment discount; returns the stored amount
    pub fn apply_full_payment_discount(&mut self, id: i64) -> AppResult<f64> {
        let member = self.premium_mut(id)?;
        member.calculate_discount();
        Ok(member.discount_amount())
    }

    // ==================== Pricing ====================

    pub fn discount_quote(&self, id: i64) -> AppResult<DiscountQuote> {
        self.get(id).map(DiscountQuote::for_member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::{MemberKind, MemberProfile, PlanTier};

    pub(crate) fn regular_payload(id: i64) -> RegularMemberCreate {
        RegularMemberCreate {
            profile: MemberProfile {
                id,
                name: format!("Regular {id}"),
                location: "Lalitpur".to_string(),
                phone: "9811111111".to_string(),
                email: format!("r{id}@gym.test"),
                gender: "Male".to_string(),
                date_of_birth: "1999-5-5".to_string(),
                membership_start_date: "2025-1-1".to_string(),
            },
            referral_source: "friend".to_string(),
        }
    }

    pub(crate) fn premium_payload(id: i64) -> PremiumMemberCreate {
        PremiumMemberCreate {
            profile: MemberProfile {
                id,
                name: format!("Premium {id}"),
                location: "Pokhara".to_string(),
                phone: "9822222222".to_string(),
                email: format!("p{id}@gym.test"),
                gender: "Female".to_string(),
                date_of_birth: "1995-3-3".to_string(),
                membership_start_date: "2025-2-2".to_string(),
            },
            personal_trainer: "Coach Hari".to_string(),
            referral_source: "website".to_string(),
            premium_charge: 50000.0,
        }
    }

    #[test]
    fn test_add_and_find() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();
        roster.add_premium(premium_payload(2)).unwrap();

        assert_eq!(roster.len(), 2);
        assert!(roster.contains(1));
        assert_eq!(roster.find(2).unwrap().kind(), MemberKind::Premium);
        assert_eq!(roster.regulars().count(), 1);
        assert_eq!(roster.premiums().count(), 1);
        let ids: Vec<i64> = roster.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();

        let err = roster.add_premium(premium_payload(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateMemberId);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find(1).unwrap().kind(), MemberKind::Regular);
    }

    #[test]
    fn test_regular_required_fields() {
        let mut roster = Roster::new();
        for field in ["name", "phone", "email"] {
            let mut payload = regular_payload(1);
            match field {
                "name" => payload.profile.name.clear(),
                "phone" => payload.profile.phone = "  ".to_string(),
                _ => payload.profile.email.clear(),
            }
            let err = roster.add_regular(payload).unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField, "field {field}");
        }
        assert!(roster.is_empty());

        // Location is optional for regular members
        let mut payload = regular_payload(1);
        payload.profile.location.clear();
        assert!(roster.add_regular(payload).is_ok());
    }

    #[test]
    fn test_premium_required_fields() {
        let mut roster = Roster::new();

        let mut payload = premium_payload(1);
        payload.personal_trainer.clear();
        let err = roster.add_premium(payload).unwrap_err();
        assert_eq!(err.message, "Trainer is required");

        let mut payload = premium_payload(1);
        payload.profile.gender.clear();
        assert!(roster.add_premium(payload).is_err());

        let mut payload = premium_payload(1);
        payload.referral_source.clear();
        assert!(roster.add_premium(payload).is_err());

        assert!(roster.is_empty());
    }

    #[test]
    fn test_long_text_fields_accepted() {
        let mut roster = Roster::new();

        let mut payload = regular_payload(1);
        payload.profile.name = "N".repeat(201);
        payload.profile.email = format!("{}@gym.test", "e".repeat(300));
        payload.referral_source = "r".repeat(1000);
        roster.add_regular(payload).unwrap();

        let mut payload = premium_payload(2);
        payload.profile.location = "L".repeat(600);
        payload.personal_trainer = "T".repeat(250);
        roster.add_premium(payload).unwrap();

        assert_eq!(roster.find(1).unwrap().name().chars().count(), 201);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_premium_charge_must_be_positive() {
        let mut roster = Roster::new();
        for charge in [0.0, -100.0, f64::NAN] {
            let mut payload = premium_payload(1);
            payload.premium_charge = charge;
            let err = roster.add_premium(payload).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        }
        assert!(roster.is_empty());
    }

    #[test]
    fn test_unknown_id() {
        let mut roster = Roster::new();
        let err = roster.activate(42).unwrap_err();
        assert_eq!(err.code, ErrorCode::MemberNotFound);
        assert_eq!(err.message, "No member found with ID: 42");
        assert!(roster.mark_attendance(42).is_err());
        assert!(roster.discount_quote(42).is_err());
    }

    #[test]
    fn test_lifecycle_operations() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();

        assert!(roster.activate(1).unwrap().is_active());
        assert_eq!(roster.mark_attendance(1).unwrap(), 1);
        assert_eq!(roster.add_loyalty_points(1, 20.0).unwrap(), 25.0);
        assert_eq!(roster.add_loyalty_points(1, -5.0).unwrap(), 25.0);
        assert!(!roster.deactivate(1).unwrap().is_active());
    }

    #[test]
    fn test_upgrade_plan_either_variant() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();
        roster.add_premium(premium_payload(2)).unwrap();

        assert!(roster.upgrade_plan(1, "standard").unwrap().is_upgraded());
        assert_eq!(roster.find(1).unwrap().plan(), PlanTier::Standard);

        let change = roster.upgrade_plan(2, "deluxe").unwrap();
        assert_eq!(
            change,
            PlanChange::ChargeChanged {
                plan: PlanTier::Deluxe,
                charge: 100000.0,
                repayment_required: true
            }
        );
        assert_eq!(roster.upgrade_plan(2, "gold").unwrap(), PlanChange::InvalidPlan);
    }

    #[test]
    fn test_revert() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();
        roster.add_premium(premium_payload(2)).unwrap();
        roster.activate(1).unwrap();
        roster.activate(2).unwrap();

        let member = roster.revert(1, "left gym").unwrap();
        assert!(!member.is_active());
        assert_eq!(member.as_regular().unwrap().removal_reason(), "left gym");

        let member = roster.revert(2, "ignored").unwrap();
        assert_eq!(member.as_premium().unwrap().personal_trainer(), "");
    }

    #[test]
    fn test_revert_reason_is_unbounded() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();
        roster.add_premium(premium_payload(2)).unwrap();
        roster.activate(1).unwrap();
        roster.activate(2).unwrap();

        let reason = "x".repeat(501);
        let member = roster.revert(1, &reason).unwrap();
        assert!(!member.is_active());
        assert_eq!(member.as_regular().unwrap().removal_reason(), reason);

        let member = roster.revert(2, &reason).unwrap();
        assert!(!member.is_active());
    }

    #[test]
    fn test_premium_only_operations() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(1)).unwrap();
        roster.add_premium(premium_payload(2)).unwrap();

        let err = roster.pay_due_amount(1, 100.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::MemberKindMismatch);
        assert!(roster.apply_full_payment_discount(1).is_err());

        assert_eq!(
            roster.pay_due_amount(2, 50000.0).unwrap(),
            PaymentOutcome::Accepted {
                remaining: 0.0,
                fully_paid: true
            }
        );
        assert_eq!(roster.apply_full_payment_discount(2).unwrap(), 5000.0);
    }

    #[test]
    fn test_replace_all_drops_duplicates() {
        let mut roster = Roster::new();
        roster.add_regular(regular_payload(9)).unwrap();

        let members: Vec<Member> = vec![
            RegularMember::from(regular_payload(1)).into(),
            PremiumMember::from(premium_payload(1)).into(),
            PremiumMember::from(premium_payload(2)).into(),
        ];
        assert_eq!(roster.replace_all(members), 2);
        assert!(!roster.contains(9));
        assert_eq!(roster.find(1).unwrap().kind(), MemberKind::Regular);
    }
}
