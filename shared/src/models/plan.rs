//! Membership plan tiers and their price tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership plan tier
///
/// Parsed case-insensitively, rendered lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Basic,
    Standard,
    Deluxe,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Basic, PlanTier::Standard, PlanTier::Deluxe];

    /// Match a plan name against the known tiers, ignoring ASCII case
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
        }
    }

    /// Price of this tier for a regular member
    pub fn regular_price(&self) -> f64 {
        match self {
            Self::Basic => 6500.0,
            Self::Standard => 12500.0,
            Self::Deluxe => 18500.0,
        }
    }

    /// Charge of this tier for a premium member
    pub fn premium_charge(&self) -> f64 {
        match self {
            Self::Basic => 50000.0,
            Self::Standard => 75000.0,
            Self::Deluxe => 100000.0,
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a plan name is not one of the known tiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlan(pub String);

impl fmt::Display for UnknownPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown plan: {}", self.0)
    }
}

impl std::error::Error for UnknownPlan {}

impl FromStr for PlanTier {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownPlan(s.to_string()))
    }
}
