//! Read-only collaborators of the model.
//!
//! Oracles expose the static rule tables and the random source. They are
//! injected into [`CharacterModel`](crate::engine::CharacterModel) at
//! construction and never mutated afterwards.
mod error;
mod rng;
mod rules;

pub use error::{LookupError, RulesError};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use rules::{ClassDefinition, ClassId, Rules, RulesOracle, SkillDefinition, SkillId};
