//! Data-driven rule tables and their loaders.
//!
//! This crate houses the static character-sheet content and loads it from
//! RON/TOML data files:
//! - Class table with per-attribute minimums (RON)
//! - Skill list with governing attributes (RON)
//! - Sheet configuration (TOML)
//!
//! The default data set is embedded in the crate, so a data directory is
//! only needed to override it.

pub mod loaders;

pub use loaders::{ClassLoader, ClassSpec, ConfigLoader, ContentFactory, LoadResult, SkillLoader};
