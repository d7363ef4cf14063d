//! The character model: roster ownership and every operation on it.
//!
//! [`CharacterModel`] is the only writer of the roster. Each mutation reads
//! the current snapshot, builds a new [`Character`], and commits a new
//! [`Roster`]; nothing is edited in place. Boundary conditions (score limits,
//! exhausted skill budget) are silent no-ops reported as `Ok(false)`.

mod errors;

pub use errors::ModelError;

use std::sync::Arc;

use crate::action::{Intent, IntentOutcome};
use crate::config::SheetConfig;
use crate::env::{LookupError, RngOracle, RulesOracle, SkillId, compute_seed};
use crate::state::{Character, RollOutcome, Roster, SkillCheckState};
use crate::stats::{self, Attribute, AttributeScores};
use crate::view::CharacterView;

/// Owner of the roster and the injected oracles.
pub struct CharacterModel {
    rules: Arc<dyn RulesOracle>,
    rng: Box<dyn RngOracle>,
    seed: u64,
    roster: Arc<Roster>,
}

impl CharacterModel {
    /// Creates a model with `config.starting_roster_size()` default characters.
    pub fn new(
        rules: Arc<dyn RulesOracle>,
        config: &SheetConfig,
        rng: Box<dyn RngOracle>,
        seed: u64,
    ) -> Self {
        let skill_count = rules.skills().len();
        let characters = (0..config.starting_roster_size())
            .map(|_| Character::new(skill_count))
            .collect();

        Self {
            rules,
            rng,
            seed,
            roster: Arc::new(Roster::new(characters)),
        }
    }

    pub fn rules(&self) -> &dyn RulesOracle {
        self.rules.as_ref()
    }

    /// Current roster snapshot. Later mutations never affect it.
    pub fn snapshot(&self) -> Arc<Roster> {
        Arc::clone(&self.roster)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn character(&self, index: usize) -> Result<Arc<Character>, ModelError> {
        self.roster
            .get(index)
            .cloned()
            .ok_or_else(|| ModelError::character_not_found(index, self.roster.len()))
    }

    fn commit(&mut self, index: usize, character: Character) -> Result<(), ModelError> {
        let next = self
            .roster
            .replace(index, character)
            .ok_or_else(|| ModelError::character_not_found(index, self.roster.len()))?;
        self.roster = Arc::new(next);
        Ok(())
    }

    // ===== attributes =====

    /// `floor((value - 10) / 2)`.
    pub const fn calculate_modifier(value: i32) -> i32 {
        stats::calculate_modifier(value)
    }

    pub fn attribute(&self, index: usize, attribute: Attribute) -> Result<i32, ModelError> {
        Ok(self.character(index)?.attribute(attribute))
    }

    pub fn modifier(&self, index: usize, attribute: Attribute) -> Result<i32, ModelError> {
        Ok(Self::calculate_modifier(self.attribute(index, attribute)?))
    }

    pub fn can_increment_attribute(
        &self,
        index: usize,
        attribute: Attribute,
    ) -> Result<bool, ModelError> {
        Ok(self.character(index)?.attributes().can_increment(attribute))
    }

    pub fn increment_attribute(
        &mut self,
        index: usize,
        attribute: Attribute,
    ) -> Result<bool, ModelError> {
        let current = self.character(index)?;
        let Some(attributes) = current.attributes().incremented(attribute) else {
            tracing::debug!("character {} {} already at maximum", index, attribute);
            return Ok(false);
        };

        self.commit(index, current.with_attributes(attributes))?;
        tracing::debug!(
            "character {} {} -> {}",
            index,
            attribute,
            attributes.get(attribute)
        );
        Ok(true)
    }

    pub fn decrement_attribute(
        &mut self,
        index: usize,
        attribute: Attribute,
    ) -> Result<bool, ModelError> {
        let current = self.character(index)?;
        let Some(attributes) = current.attributes().decremented(attribute) else {
            tracing::debug!("character {} {} already at minimum", index, attribute);
            return Ok(false);
        };

        self.commit(index, current.with_attributes(attributes))?;
        tracing::debug!(
            "character {} {} -> {}",
            index,
            attribute,
            attributes.get(attribute)
        );
        Ok(true)
    }

    // ===== skills =====

    /// `10 + 4 * modifier(Intelligence)`, recomputed from the live score.
    pub fn total_skill_points(&self, index: usize) -> Result<i32, ModelError> {
        Ok(self.character(index)?.skill_point_budget())
    }

    pub fn points_spent(&self, index: usize) -> Result<i64, ModelError> {
        Ok(self.character(index)?.skills().spent())
    }

    /// Budget minus points spent; may be negative.
    pub fn points_available(&self, index: usize) -> Result<i64, ModelError> {
        Ok(self.character(index)?.points_available())
    }

    pub fn skill_points(&self, index: usize, skill: &str) -> Result<u32, ModelError> {
        let skill = self.rules.skill_id(skill)?;
        Ok(self.character(index)?.skills().get(skill))
    }

    /// Allocated points plus the governing attribute's modifier.
    pub fn skill_total(&self, index: usize, skill: &str) -> Result<i32, ModelError> {
        let skill = self.rules.skill_id(skill)?;
        let character = self.character(index)?;
        self.total_for(&character, skill)
    }

    pub fn can_increment_skill(&self, index: usize) -> Result<bool, ModelError> {
        Ok(self.character(index)?.can_increment_skill())
    }

    /// Adds one point when points spent is still below the budget.
    pub fn increment_skill(&mut self, index: usize, skill: &str) -> Result<bool, ModelError> {
        let skill_id = self.rules.skill_id(skill)?;
        let current = self.character(index)?;
        let budget = current.skill_point_budget();

        let Some(skills) = current.skills().incremented(skill_id, budget) else {
            tracing::debug!(
                "character {} skill budget exhausted ({} of {})",
                index,
                current.skills().spent(),
                budget
            );
            return Ok(false);
        };

        self.commit(index, current.with_skills(skills))?;
        tracing::debug!("character {} {} +1", index, skill);
        Ok(true)
    }

    /// Removes one point, stopping at zero. Not gated by the budget.
    pub fn decrement_skill(&mut self, index: usize, skill: &str) -> Result<bool, ModelError> {
        let skill_id = self.rules.skill_id(skill)?;
        let current = self.character(index)?;

        let Some(skills) = current.skills().decremented(skill_id) else {
            tracing::debug!("character {} {} already at zero", index, skill);
            return Ok(false);
        };

        self.commit(index, current.with_skills(skills))?;
        tracing::debug!("character {} {} -1", index, skill);
        Ok(true)
    }

    fn total_for(&self, character: &Character, skill: SkillId) -> Result<i32, ModelError> {
        let definition = self
            .rules
            .skill(skill)
            .ok_or_else(|| LookupError::UnknownSkill(format!("#{}", skill.index())))?;
        let points = i32::try_from(character.skills().get(skill)).unwrap_or(i32::MAX);
        let modifier = Self::calculate_modifier(character.attribute(definition.attribute));
        Ok(points.saturating_add(modifier))
    }

    // ===== classes =====

    pub fn class_requirements(&self, class: &str) -> Result<AttributeScores, ModelError> {
        let id = self.rules.class_id(class)?;
        self.rules
            .class(id)
            .map(|definition| definition.requirements)
            .ok_or_else(|| LookupError::UnknownClass(class.to_string()).into())
    }

    /// True iff every attribute meets the class minimum.
    pub fn meets_class_requirements(&self, index: usize, class: &str) -> Result<bool, ModelError> {
        let requirements = self.class_requirements(class)?;
        Ok(self.character(index)?.attributes().meets(&requirements))
    }

    /// Selects `class`, or clears the selection if it is already selected.
    ///
    /// Returns whether `class` is selected afterwards.
    pub fn toggle_selected_class(&mut self, index: usize, class: &str) -> Result<bool, ModelError> {
        let class_id = self.rules.class_id(class)?;
        let current = self.character(index)?;

        let next = if current.selected_class() == Some(class_id) {
            None
        } else {
            Some(class_id)
        };

        self.commit(index, current.with_selected_class(next))?;
        let change = if next.is_some() {
            "selected"
        } else {
            "cleared"
        };
        tracing::debug!("character {} class {} {}", index, class, change);
        Ok(next.is_some())
    }

    // ===== skill check =====

    /// Selects the skill used by [`roll_skill_check`](Self::roll_skill_check);
    /// `None` clears it. Always commits, even when the value is unchanged.
    pub fn set_skill_check_skill(
        &mut self,
        index: usize,
        skill: Option<&str>,
    ) -> Result<(), ModelError> {
        let skill_id = skill.map(|name| self.rules.skill_id(name)).transpose()?;
        let current = self.character(index)?;

        let check = SkillCheckState {
            skill: skill_id,
            ..current.skill_check().clone()
        };
        self.commit(index, current.with_skill_check(check))?;
        tracing::debug!("character {} check skill {:?}", index, skill);
        Ok(())
    }

    /// Sets the difficulty class. Any value is accepted.
    pub fn set_skill_check_dc(&mut self, index: usize, dc: i32) -> Result<(), ModelError> {
        let current = self.character(index)?;

        let check = SkillCheckState {
            dc,
            ..current.skill_check().clone()
        };
        self.commit(index, current.with_skill_check(check))?;
        tracing::debug!("character {} check dc {}", index, dc);
        Ok(())
    }

    pub fn can_roll(&self, index: usize) -> Result<bool, ModelError> {
        Ok(self.character(index)?.skill_check().skill.is_some())
    }

    /// Rolls a d20 for the selected skill and stores the outcome.
    ///
    /// Fails with [`ModelError::NoSkillSelected`] when no skill is selected;
    /// the roster is left untouched in that case.
    pub fn roll_skill_check(&mut self, index: usize) -> Result<RollOutcome, ModelError> {
        let current = self.character(index)?;
        let check = current.skill_check();
        let Some(skill) = check.skill else {
            tracing::warn!("character {} rolled without a selected skill", index);
            return Err(ModelError::NoSkillSelected { index });
        };

        let total_skill = self.total_for(&current, skill)?;
        let seed = compute_seed(self.seed, self.roster.rolls(), index);
        let roll = self.rng.roll_die(seed, SheetConfig::DIE_SIDES);
        let outcome = RollOutcome::resolve(roll, total_skill, check.dc);

        let next = current.with_skill_check(SkillCheckState {
            last_roll: Some(outcome),
            ..check.clone()
        });
        let roster = self
            .roster
            .replace_after_roll(index, next)
            .ok_or_else(|| ModelError::character_not_found(index, self.roster.len()))?;
        self.roster = Arc::new(roster);

        tracing::info!(
            "character {} rolled {} + {} vs DC {}: {}",
            index,
            roll,
            total_skill,
            outcome.dc,
            outcome.verdict()
        );
        Ok(outcome)
    }

    // ===== roster =====

    /// Appends a default character and returns its index.
    pub fn add_character(&mut self) -> usize {
        let character = Character::new(self.rules.skills().len());
        self.roster = Arc::new(self.roster.append(character));
        let index = self.roster.len() - 1;
        tracing::debug!("character {} added", index);
        index
    }

    // ===== views =====

    pub fn sheet(&self, index: usize) -> Result<CharacterView, ModelError> {
        let character = self.character(index)?;
        Ok(CharacterView::build(index, &character, self.rules()))
    }

    pub fn sheets(&self) -> Vec<CharacterView> {
        self.roster
            .iter()
            .enumerate()
            .map(|(index, character)| CharacterView::build(index, character, self.rules()))
            .collect()
    }

    // ===== intents =====

    /// Dispatches an intent to the matching operation.
    pub fn execute(&mut self, intent: &Intent) -> Result<IntentOutcome, ModelError> {
        tracing::trace!("executing {} {:?}", intent.kind(), intent.index());

        let outcome = match intent {
            Intent::IncrementAttribute { index, attribute } => {
                IntentOutcome::from_change(self.increment_attribute(*index, *attribute)?)
            }
            Intent::DecrementAttribute { index, attribute } => {
                IntentOutcome::from_change(self.decrement_attribute(*index, *attribute)?)
            }
            Intent::IncrementSkill { index, skill } => {
                IntentOutcome::from_change(self.increment_skill(*index, skill)?)
            }
            Intent::DecrementSkill { index, skill } => {
                IntentOutcome::from_change(self.decrement_skill(*index, skill)?)
            }
            Intent::ToggleClass { index, class } => {
                self.toggle_selected_class(*index, class)?;
                IntentOutcome::Changed
            }
            Intent::SelectCheckSkill { index, skill } => {
                self.set_skill_check_skill(*index, skill.as_deref())?;
                IntentOutcome::Changed
            }
            Intent::SetCheckDc { index, dc } => {
                self.set_skill_check_dc(*index, *dc)?;
                IntentOutcome::Changed
            }
            Intent::RollSkillCheck { index } => {
                IntentOutcome::Rolled(self.roll_skill_check(*index)?)
            }
            Intent::AddCharacter => IntentOutcome::Added(self.add_character()),
        };

        Ok(outcome)
    }
}
