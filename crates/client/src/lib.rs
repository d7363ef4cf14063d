//! Terminal client for the character sheet builder.
//!
//! ```text
//! main
//!   ├─→ ClientConfig (environment)
//!   ├─→ logging (file subscriber)
//!   └─→ ShellBuilder
//!         ├─→ ContentFactory (rule tables, sheet config)
//!         └─→ Shell ─→ CharacterModel
//! ```
//!
//! The shell owns the model; every mutation goes through
//! [`sheet_core::Intent`] and every sheet is rendered from a
//! [`sheet_core::CharacterView`].

mod builder;
pub mod command;
pub mod config;
pub mod logging;
pub mod render;
mod shell;

pub use builder::ShellBuilder;
pub use config::ClientConfig;
pub use shell::{Reply, Shell};
