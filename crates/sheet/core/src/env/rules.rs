use std::collections::HashSet;

use strum::IntoEnumIterator;

use super::error::{LookupError, RulesError};
use crate::stats::{Attribute, AttributeScores};

/// Position of a skill in the skill list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillId(usize);

impl SkillId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Position of a class in the class table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(usize);

impl ClassId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// A skill and the attribute whose modifier applies to it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    pub attribute: Attribute,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}

/// A class and its minimum score for every attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
    pub requirements: AttributeScores,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>, requirements: AttributeScores) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }

    /// Builds a class from `(attribute, minimum)` pairs.
    ///
    /// Every attribute must appear exactly once.
    pub fn from_requirements<I>(
        name: impl Into<String>,
        requirements: I,
    ) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = (Attribute, i32)>,
    {
        let name = name.into();
        let mut scores = AttributeScores::uniform(0);
        let mut seen = HashSet::new();

        for (attribute, minimum) in requirements {
            if !seen.insert(attribute) {
                return Err(RulesError::DuplicateRequirement {
                    class: name,
                    attribute,
                });
            }
            scores = scores.with(attribute, minimum);
        }

        if let Some(attribute) = Attribute::iter().find(|a| !seen.contains(a)) {
            return Err(RulesError::MissingRequirement {
                class: name,
                attribute,
            });
        }

        Ok(Self::new(name, scores))
    }
}

/// Oracle exposing the static class table and skill list.
///
/// Tables are loaded once at startup and never change afterwards. Name
/// lookups are exact and report unknown names as [`LookupError`]s.
pub trait RulesOracle: Send + Sync {
    fn classes(&self) -> &[ClassDefinition];

    fn skills(&self) -> &[SkillDefinition];

    fn skill_id(&self, name: &str) -> Result<SkillId, LookupError> {
        self.skills()
            .iter()
            .position(|skill| skill.name == name)
            .map(SkillId::new)
            .ok_or_else(|| LookupError::UnknownSkill(name.to_string()))
    }

    fn class_id(&self, name: &str) -> Result<ClassId, LookupError> {
        self.classes()
            .iter()
            .position(|class| class.name == name)
            .map(ClassId::new)
            .ok_or_else(|| LookupError::UnknownClass(name.to_string()))
    }

    fn skill(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills().get(id.index())
    }

    fn class(&self, id: ClassId) -> Option<&ClassDefinition> {
        self.classes().get(id.index())
    }
}

/// In-memory rule tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    classes: Vec<ClassDefinition>,
    skills: Vec<SkillDefinition>,
}

impl Rules {
    /// Validates and wraps the tables. Names must be non-empty and unique.
    pub fn new(
        classes: Vec<ClassDefinition>,
        skills: Vec<SkillDefinition>,
    ) -> Result<Self, RulesError> {
        let mut skill_names = HashSet::new();
        for skill in &skills {
            if skill.name.trim().is_empty() {
                return Err(RulesError::EmptyName { kind: "skill" });
            }
            if !skill_names.insert(skill.name.as_str()) {
                return Err(RulesError::DuplicateSkill(skill.name.clone()));
            }
        }

        let mut class_names = HashSet::new();
        for class in &classes {
            if class.name.trim().is_empty() {
                return Err(RulesError::EmptyName { kind: "class" });
            }
            if !class_names.insert(class.name.as_str()) {
                return Err(RulesError::DuplicateClass(class.name.clone()));
            }
        }

        Ok(Self { classes, skills })
    }
}

impl RulesOracle for Rules {
    fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> ClassDefinition {
        ClassDefinition::new(
            "Wizard",
            AttributeScores::uniform(9).with(Attribute::Intelligence, 14),
        )
    }

    #[test]
    fn lookups_resolve_by_exact_name() {
        let rules = Rules::new(
            vec![wizard()],
            vec![
                SkillDefinition::new("Arcana", Attribute::Intelligence),
                SkillDefinition::new("Stealth", Attribute::Dexterity),
            ],
        )
        .expect("valid tables");

        assert_eq!(rules.skill_id("Stealth"), Ok(SkillId::new(1)));
        assert_eq!(rules.class_id("Wizard"), Ok(ClassId::new(0)));
        assert_eq!(
            rules.skill_id("stealth"),
            Err(LookupError::UnknownSkill("stealth".into()))
        );
        assert_eq!(
            rules.class_id("Paladin"),
            Err(LookupError::UnknownClass("Paladin".into()))
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let skills = vec![
            SkillDefinition::new("Arcana", Attribute::Intelligence),
            SkillDefinition::new("Arcana", Attribute::Wisdom),
        ];
        assert_eq!(
            Rules::new(vec![], skills),
            Err(RulesError::DuplicateSkill("Arcana".into()))
        );
        assert_eq!(
            Rules::new(vec![wizard(), wizard()], vec![]),
            Err(RulesError::DuplicateClass("Wizard".into()))
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        let skills = vec![SkillDefinition::new("  ", Attribute::Wisdom)];
        assert_eq!(
            Rules::new(vec![], skills),
            Err(RulesError::EmptyName { kind: "skill" })
        );
    }

    #[test]
    fn requirements_must_cover_every_attribute() {
        let partial = ClassDefinition::from_requirements(
            "Bard",
            [(Attribute::Charisma, 14), (Attribute::Strength, 9)],
        );
        assert_eq!(
            partial,
            Err(RulesError::MissingRequirement {
                class: "Bard".into(),
                attribute: Attribute::Dexterity,
            })
        );

        let doubled = ClassDefinition::from_requirements(
            "Bard",
            [(Attribute::Charisma, 14), (Attribute::Charisma, 9)],
        );
        assert!(matches!(
            doubled,
            Err(RulesError::DuplicateRequirement { .. })
        ));

        let full = ClassDefinition::from_requirements(
            "Bard",
            Attribute::iter().map(|a| (a, if a == Attribute::Charisma { 14 } else { 9 })),
        )
        .expect("complete requirements");
        assert_eq!(full.requirements.get(Attribute::Charisma), 14);
        assert_eq!(full.requirements.get(Attribute::Wisdom), 9);
    }
}
