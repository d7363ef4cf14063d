//! Character snapshots and the roster that holds them.
mod character;
mod roster;

pub use character::{Character, RollOutcome, SkillCheckState};
pub use roster::Roster;
