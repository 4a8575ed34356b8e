//! Data models
//!
//! Members, plan tiers and the persisted snapshots members are rebuilt from.
//! All IDs are `i64`.

pub mod member;
pub mod plan;
pub mod snapshot;

// Re-exports
pub use member::*;
pub use plan::*;
pub use snapshot::*;
