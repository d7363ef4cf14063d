//! Rule table errors.
//!
//! Lookup failures for names coming from the presentation layer, and
//! validation failures for tables handed to [`Rules::new`](super::Rules::new).

use crate::error::{ErrorSeverity, SheetError};
use crate::stats::Attribute;

/// A name did not resolve against the static tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookupError {
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("unknown skill '{0}'")]
    UnknownSkill(String),

    #[error("unknown class '{0}'")]
    UnknownClass(String),
}

impl SheetError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAttribute(_) => "unknown_attribute",
            Self::UnknownSkill(_) => "unknown_skill",
            Self::UnknownClass(_) => "unknown_class",
        }
    }
}

/// The class table or skill list is malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    #[error("skill '{0}' is defined more than once")]
    DuplicateSkill(String),

    #[error("class '{0}' is defined more than once")]
    DuplicateClass(String),

    #[error("class '{class}' has no requirement for {attribute}")]
    MissingRequirement { class: String, attribute: Attribute },

    #[error("class '{class}' lists {attribute} more than once")]
    DuplicateRequirement { class: String, attribute: Attribute },
}

impl SheetError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "empty_name",
            Self::DuplicateSkill(_) => "duplicate_skill",
            Self::DuplicateClass(_) => "duplicate_class",
            Self::MissingRequirement { .. } => "missing_requirement",
            Self::DuplicateRequirement { .. } => "duplicate_requirement",
        }
    }
}
