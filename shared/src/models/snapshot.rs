//! Persisted member snapshots
//!
//! A snapshot carries only the fields a member-file row stores. Members
//! rebuilt from one lose everything else (see `RegularMember::from_snapshot`
//! and `PremiumMember::from_snapshot`).

use serde::{Deserialize, Serialize};

use super::member::MemberProfile;
use super::plan::PlanTier;

/// Fields of a regular member row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularSnapshot {
    pub profile: MemberProfile,
    pub plan: PlanTier,
    pub price: f64,
    pub attendance: u32,
    pub active: bool,
}

/// Fields of a premium member row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumSnapshot {
    pub profile: MemberProfile,
    pub personal_trainer: String,
    pub plan: PlanTier,
    pub premium_charge: f64,
    pub loyalty_points: f64,
    pub active: bool,
}
