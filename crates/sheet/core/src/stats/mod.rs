//! Attribute scores, modifiers and skill point allocation.
//!
//! Scores and allocations are the only stored values; modifiers and the
//! skill point budget are recomputed on demand so they always track the
//! current attributes.

pub mod attributes;
pub mod modifiers;
pub mod skills;

pub use attributes::{Attribute, AttributeScores};
pub use modifiers::{calculate_modifier, skill_point_budget};
pub use skills::SkillPoints;
