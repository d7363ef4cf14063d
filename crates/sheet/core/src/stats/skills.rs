//! Per-character skill point allocation.

use crate::env::SkillId;

/// Points allocated to each skill of the skill list, indexed by [`SkillId`].
///
/// Storage is unsigned, so a negative allocation is unrepresentable. The
/// budget check lives in [`SkillPoints::incremented`] so the sum can never be
/// pushed past the budget in effect at the time of the increment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SkillPoints(Vec<u32>);

impl SkillPoints {
    /// Zero points for `skill_count` skills.
    pub fn zeroed(skill_count: usize) -> Self {
        Self(vec![0; skill_count])
    }

    pub fn get(&self, skill: SkillId) -> u32 {
        self.0.get(skill.index()).copied().unwrap_or(0)
    }

    /// Total points allocated across all skills.
    pub fn spent(&self) -> i64 {
        self.0.iter().map(|&points| i64::from(points)).sum()
    }

    /// True when one more point fits under `budget`.
    pub fn can_increment(&self, budget: i32) -> bool {
        self.spent() < i64::from(budget)
    }

    /// One more point in `skill`, or `None` when the budget is exhausted.
    pub fn incremented(&self, skill: SkillId, budget: i32) -> Option<Self> {
        if !self.can_increment(budget) {
            return None;
        }
        let mut next = self.clone();
        let slot = next.0.get_mut(skill.index())?;
        *slot += 1;
        Some(next)
    }

    /// One point less in `skill`, or `None` when it already holds zero.
    pub fn decremented(&self, skill: SkillId) -> Option<Self> {
        let current = self.get(skill);
        if current == 0 {
            return None;
        }
        let mut next = self.clone();
        let slot = next.0.get_mut(skill.index())?;
        *slot = current - 1;
        Some(next)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_respects_budget() {
        let arcana = SkillId::new(0);
        let mut points = SkillPoints::zeroed(3);
        for _ in 0..2 {
            points = points.incremented(arcana, 2).expect("within budget");
        }
        assert_eq!(points.spent(), 2);
        assert_eq!(points.incremented(arcana, 2), None);
    }

    #[test]
    fn negative_budget_blocks_everything() {
        let points = SkillPoints::zeroed(3);
        assert!(!points.can_increment(-10));
        assert_eq!(points.incremented(SkillId::new(1), -10), None);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let stealth = SkillId::new(2);
        let points = SkillPoints::zeroed(3);
        assert_eq!(points.decremented(stealth), None);

        let raised = points.incremented(stealth, 10).expect("within budget");
        let lowered = raised.decremented(stealth).expect("one point to remove");
        assert_eq!(lowered.get(stealth), 0);
    }
}
