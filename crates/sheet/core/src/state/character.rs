use crate::config::SheetConfig;
use crate::env::{ClassId, SkillId};
use crate::stats::{Attribute, AttributeScores, SkillPoints, skill_point_budget};

/// Result of the most recent skill check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome {
    /// Die face, 1..=20.
    pub roll: u32,
    /// Allocated points plus governing attribute modifier.
    pub total_skill: i32,
    /// Difficulty class the roll was made against.
    pub dc: i32,
    pub success: bool,
}

impl RollOutcome {
    /// Resolves a check: success iff `total_skill + roll >= dc`.
    pub fn resolve(roll: u32, total_skill: i32, dc: i32) -> Self {
        let total = i64::from(total_skill) + i64::from(roll);
        Self {
            roll,
            total_skill,
            dc,
            success: total >= i64::from(dc),
        }
    }

    /// Roll plus total skill, widened so extreme values cannot overflow.
    pub fn total(&self) -> i64 {
        i64::from(self.roll) + i64::from(self.total_skill)
    }

    pub fn verdict(&self) -> &'static str {
        if self.success { "success" } else { "failure" }
    }
}

/// Skill check inputs and the last outcome.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SkillCheckState {
    pub skill: Option<SkillId>,
    pub dc: i32,
    pub last_roll: Option<RollOutcome>,
}

impl Default for SkillCheckState {
    fn default() -> Self {
        Self {
            skill: None,
            dc: SheetConfig::DEFAULT_DC,
            last_roll: None,
        }
    }
}

/// One character snapshot.
///
/// Characters are immutable once shared: every transform returns a new value
/// and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Character {
    attributes: AttributeScores,
    skills: SkillPoints,
    selected_class: Option<ClassId>,
    skill_check: SkillCheckState,
}

impl Character {
    /// A fresh character for a skill list of `skill_count` entries.
    pub fn new(skill_count: usize) -> Self {
        Self {
            attributes: AttributeScores::default(),
            skills: SkillPoints::zeroed(skill_count),
            selected_class: None,
            skill_check: SkillCheckState::default(),
        }
    }

    pub fn attributes(&self) -> &AttributeScores {
        &self.attributes
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn skills(&self) -> &SkillPoints {
        &self.skills
    }

    pub fn selected_class(&self) -> Option<ClassId> {
        self.selected_class
    }

    pub fn skill_check(&self) -> &SkillCheckState {
        &self.skill_check
    }

    /// Current skill point budget, derived from Intelligence.
    pub fn skill_point_budget(&self) -> i32 {
        skill_point_budget(self.attribute(Attribute::Intelligence))
    }

    /// Budget minus points spent. Negative when Intelligence dropped after
    /// points were allocated, or when the budget itself is negative.
    pub fn points_available(&self) -> i64 {
        i64::from(self.skill_point_budget()) - self.skills.spent()
    }

    pub fn can_increment_skill(&self) -> bool {
        self.skills.can_increment(self.skill_point_budget())
    }

    // ===== copy-on-write transforms =====

    pub fn with_attributes(&self, attributes: AttributeScores) -> Self {
        Self {
            attributes,
            ..self.clone()
        }
    }

    pub fn with_skills(&self, skills: SkillPoints) -> Self {
        Self {
            skills,
            ..self.clone()
        }
    }

    pub fn with_selected_class(&self, selected_class: Option<ClassId>) -> Self {
        Self {
            selected_class,
            ..self.clone()
        }
    }

    pub fn with_skill_check(&self, skill_check: SkillCheckState) -> Self {
        Self {
            skill_check,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let character = Character::new(18);
        assert!(character.attributes().iter().all(|(_, v)| v == 10));
        assert_eq!(character.skills().len(), 18);
        assert_eq!(character.skills().spent(), 0);
        assert_eq!(character.selected_class(), None);
        assert_eq!(character.skill_check().skill, None);
        assert_eq!(character.skill_check().dc, 10);
        assert_eq!(character.skill_check().last_roll, None);
        assert_eq!(character.skill_point_budget(), 10);
    }

    #[test]
    fn transforms_leave_original_untouched() {
        let original = Character::new(2);
        let changed = original.with_attributes(
            original
                .attributes()
                .with(Attribute::Intelligence, 20),
        );
        assert_eq!(original.attribute(Attribute::Intelligence), 10);
        assert_eq!(changed.attribute(Attribute::Intelligence), 20);
        assert_eq!(changed.skill_point_budget(), 30);
    }

    #[test]
    fn roll_resolution_boundary() {
        assert!(RollOutcome::resolve(8, 3, 10).success);
        assert!(!RollOutcome::resolve(6, 3, 10).success);
        assert!(RollOutcome::resolve(7, 3, 10).success);
        assert!(RollOutcome::resolve(1, -5, -4).success);
        assert!(!RollOutcome::resolve(20, 0, i32::MAX).success);
    }
}
