//! Attribute modifiers and the Intelligence-driven skill point budget.
//!
//! Formula: modifier = floor((score - 10) / 2)

use crate::config::SheetConfig;

/// Calculate the roll modifier for an attribute score.
///
/// Uses floor division so odd negative differences round down:
/// - 10-11 → +0
/// - 12-13 → +1
/// - 8-9 → -1
/// - 20 → +5
/// - 0 → -5
pub const fn calculate_modifier(score: i32) -> i32 {
    (score - SheetConfig::MODIFIER_BASELINE).div_euclid(2)
}

/// Skill points a character may allocate for a given Intelligence score.
///
/// `10 + 4 * modifier(INT)`. Not floored at zero: very low Intelligence
/// produces a negative budget, which simply blocks every allocation.
pub const fn skill_point_budget(intelligence: i32) -> i32 {
    SheetConfig::BASE_SKILL_POINTS
        + SheetConfig::SKILL_POINTS_PER_MODIFIER * calculate_modifier(intelligence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_spot_checks() {
        assert_eq!(calculate_modifier(10), 0);
        assert_eq!(calculate_modifier(11), 0);
        assert_eq!(calculate_modifier(9), -1);
        assert_eq!(calculate_modifier(8), -1);
        assert_eq!(calculate_modifier(7), -2);
        assert_eq!(calculate_modifier(20), 5);
        assert_eq!(calculate_modifier(0), -5);
        assert_eq!(calculate_modifier(70), 30);
    }

    #[test]
    fn modifier_matches_floor_over_full_range() {
        for score in SheetConfig::MIN_ATTRIBUTE..=SheetConfig::MAX_ATTRIBUTE {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(calculate_modifier(score), expected, "score {score}");
        }
    }

    #[test]
    fn budget_follows_intelligence() {
        assert_eq!(skill_point_budget(10), 10);
        assert_eq!(skill_point_budget(20), 30);
        assert_eq!(skill_point_budget(0), -10);
        assert_eq!(skill_point_budget(9), 6);
    }
}
