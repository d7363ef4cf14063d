//! Read-only projection of a character for the presentation layer.
//!
//! A [`CharacterView`] carries every derived value a sheet displays
//! (modifiers, skill totals, eligibility, remaining points) so renderers
//! never recompute rules themselves.

use crate::env::{RulesOracle, SkillId};
use crate::state::{Character, RollOutcome};
use crate::stats::{Attribute, AttributeScores, calculate_modifier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeLine {
    pub attribute: Attribute,
    pub value: i32,
    pub modifier: i32,
    pub can_increment: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillLine {
    pub name: String,
    pub attribute: Attribute,
    pub points: u32,
    pub modifier: i32,
    pub total: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassLine {
    pub name: String,
    pub eligible: bool,
    pub selected: bool,
}

/// Requirements of the selected class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedClassView {
    pub name: String,
    pub requirements: AttributeScores,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCheckView {
    pub skill: Option<String>,
    pub dc: i32,
    pub last_roll: Option<RollOutcome>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterView {
    pub index: usize,
    pub attributes: Vec<AttributeLine>,
    pub skills: Vec<SkillLine>,
    pub classes: Vec<ClassLine>,
    pub selected_class: Option<SelectedClassView>,
    pub total_skill_points: i32,
    pub points_spent: i64,
    pub points_available: i64,
    pub can_increment_skill: bool,
    pub skill_check: SkillCheckView,
}

impl CharacterView {
    pub fn build(index: usize, character: &Character, rules: &dyn RulesOracle) -> Self {
        let scores = character.attributes();

        let attributes = scores
            .iter()
            .map(|(attribute, value)| AttributeLine {
                attribute,
                value,
                modifier: calculate_modifier(value),
                can_increment: scores.can_increment(attribute),
            })
            .collect();

        let skills = rules
            .skills()
            .iter()
            .enumerate()
            .map(|(slot, skill)| {
                let points = character.skills().get(SkillId::new(slot));
                let modifier = calculate_modifier(character.attribute(skill.attribute));
                SkillLine {
                    name: skill.name.clone(),
                    attribute: skill.attribute,
                    points,
                    modifier,
                    total: i32::try_from(points)
                        .unwrap_or(i32::MAX)
                        .saturating_add(modifier),
                }
            })
            .collect();

        let selected = character.selected_class();
        let classes = rules
            .classes()
            .iter()
            .enumerate()
            .map(|(slot, class)| ClassLine {
                name: class.name.clone(),
                eligible: scores.meets(&class.requirements),
                selected: selected.map(|id| id.index()) == Some(slot),
            })
            .collect();

        let selected_class = selected
            .and_then(|id| rules.class(id))
            .map(|class| SelectedClassView {
                name: class.name.clone(),
                requirements: class.requirements,
            });

        let check = character.skill_check();
        let skill_check = SkillCheckView {
            skill: check
                .skill
                .and_then(|id| rules.skill(id))
                .map(|skill| skill.name.clone()),
            dc: check.dc,
            last_roll: check.last_roll,
        };

        Self {
            index,
            attributes,
            skills,
            classes,
            selected_class,
            total_skill_points: character.skill_point_budget(),
            points_spent: character.skills().spent(),
            points_available: character.points_available(),
            can_increment_skill: character.can_increment_skill(),
            skill_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ClassDefinition, ClassId, Rules, SkillDefinition};

    #[test]
    fn view_reports_derived_values() {
        let rules = Rules::new(
            vec![
                ClassDefinition::new(
                    "Barbarian",
                    AttributeScores::uniform(9).with(Attribute::Strength, 14),
                ),
                ClassDefinition::new("Commoner", AttributeScores::uniform(0)),
            ],
            vec![SkillDefinition::new("Athletics", Attribute::Strength)],
        )
        .expect("valid tables");

        let base = Character::new(1);
        let character = base
            .with_attributes(base.attributes().with(Attribute::Strength, 9))
            .with_selected_class(Some(ClassId::new(1)));

        let view = CharacterView::build(2, &character, &rules);
        assert_eq!(view.index, 2);
        assert_eq!(view.attributes[0].modifier, -1);
        assert_eq!(view.skills[0].total, -1);
        assert!(!view.classes[0].eligible);
        assert!(view.classes[1].eligible);
        assert!(view.classes[1].selected);
        assert_eq!(
            view.selected_class.map(|c| c.name),
            Some("Commoner".to_string())
        );
        assert_eq!(view.points_available, 10);
        assert_eq!(view.skill_check.skill, None);
    }
}
