//! Errors surfaced by model operations.

use crate::env::LookupError;
use crate::error::{ErrorSeverity, SheetError};

/// Errors surfaced while executing an operation on the roster.
///
/// A failed operation never commits a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("character {index} not found (roster has {len})")]
    CharacterNotFound { index: usize, len: usize },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("character {index} has no skill selected for a check")]
    NoSkillSelected { index: usize },
}

impl ModelError {
    pub fn character_not_found(index: usize, len: usize) -> Self {
        Self::CharacterNotFound { index, len }
    }
}

impl SheetError for ModelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CharacterNotFound { .. } => ErrorSeverity::Validation,
            Self::Lookup(error) => error.severity(),
            Self::NoSkillSelected { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterNotFound { .. } => "character_not_found",
            Self::Lookup(error) => error.error_code(),
            Self::NoSkillSelected { .. } => "no_skill_selected",
        }
    }
}
