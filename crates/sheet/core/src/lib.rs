//! Character sheet rules and the in-memory character model.
//!
//! `sheet-core` defines the attribute/skill/class data model, the derived
//! rules (modifiers, skill point budget, class eligibility, skill checks) and
//! [`engine::CharacterModel`], the single owner of the roster. Every mutation
//! produces a new immutable snapshot. Rule tables and the random source are
//! injected as oracles; this crate performs no I/O.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;
pub mod view;

pub use action::{Intent, IntentOutcome};
pub use config::SheetConfig;
pub use engine::{CharacterModel, ModelError};
pub use env::{
    ClassDefinition, ClassId, LookupError, PcgRng, RngOracle, Rules, RulesError, RulesOracle,
    SkillDefinition, SkillId,
};
pub use error::{ErrorSeverity, SheetError};
pub use state::{Character, RollOutcome, Roster, SkillCheckState};
pub use stats::{Attribute, AttributeScores, SkillPoints, calculate_modifier, skill_point_budget};
pub use view::{
    AttributeLine, CharacterView, ClassLine, SelectedClassView, SkillCheckView, SkillLine,
};
