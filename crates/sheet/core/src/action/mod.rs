//! User intents forwarded by the presentation layer.
//!
//! Each variant maps onto one [`CharacterModel`](crate::engine::CharacterModel)
//! operation. Skill and class names are carried as strings and resolved
//! against the rule tables when the intent executes.

use crate::state::RollOutcome;
use crate::stats::Attribute;

/// One discrete user action on the roster.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    IncrementAttribute {
        index: usize,
        attribute: Attribute,
    },
    DecrementAttribute {
        index: usize,
        attribute: Attribute,
    },
    IncrementSkill {
        index: usize,
        skill: String,
    },
    DecrementSkill {
        index: usize,
        skill: String,
    },
    ToggleClass {
        index: usize,
        class: String,
    },
    /// `None` clears the selection.
    SelectCheckSkill {
        index: usize,
        skill: Option<String>,
    },
    SetCheckDc {
        index: usize,
        dc: i32,
    },
    RollSkillCheck {
        index: usize,
    },
    AddCharacter,
}

impl Intent {
    /// Stable snake_case name for logging.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Roster index the intent targets, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::IncrementAttribute { index, .. }
            | Self::DecrementAttribute { index, .. }
            | Self::IncrementSkill { index, .. }
            | Self::DecrementSkill { index, .. }
            | Self::ToggleClass { index, .. }
            | Self::SelectCheckSkill { index, .. }
            | Self::SetCheckDc { index, .. }
            | Self::RollSkillCheck { index } => Some(*index),
            Self::AddCharacter => None,
        }
    }
}

/// What executing an [`Intent`] did to the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A new snapshot was committed.
    Changed,
    /// The intent hit a boundary (score at 0 or 70, exhausted budget, skill
    /// already at zero) and was ignored.
    Unchanged,
    /// A character was appended at this index.
    Added(usize),
    Rolled(RollOutcome),
}

impl IntentOutcome {
    pub(crate) fn from_change(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_snake_case() {
        let intent = Intent::IncrementAttribute {
            index: 0,
            attribute: Attribute::Strength,
        };
        assert_eq!(intent.kind(), "increment_attribute");
        assert_eq!(Intent::AddCharacter.kind(), "add_character");
    }

    #[test]
    fn index_is_reported() {
        assert_eq!(Intent::RollSkillCheck { index: 3 }.index(), Some(3));
        assert_eq!(Intent::AddCharacter.index(), None);
    }
}
