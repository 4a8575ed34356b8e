//! Shared types for gym-desk
//!
//! Member model and error types used by the table renderer, the roster
//! service and the desk shell.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{GymMember, Member, MemberKind, PlanTier};
pub use serde::{Deserialize, Serialize};
