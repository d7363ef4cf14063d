//! Plain-text rendering of character sheets.

use std::fmt;

use sheet_core::{CharacterView, RollOutcome};

/// Displays a [`CharacterView`] as a multi-line text sheet.
pub struct SheetDisplay<'a>(pub &'a CharacterView);

impl fmt::Display for SheetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "Character {}", view.index)?;

        writeln!(f, "  Attributes")?;
        for line in &view.attributes {
            let cap = if line.can_increment { "" } else { "  (max)" };
            writeln!(
                f,
                "    {:<13} {:>3}  modifier {:+}{}",
                line.attribute, line.value, line.modifier, cap
            )?;
        }

        writeln!(f, "  Classes")?;
        for class in &view.classes {
            let eligibility = if class.eligible {
                "meets requirements"
            } else {
                "requirements not met"
            };
            writeln!(
                f,
                "    [{}] {:<12} {}",
                if class.selected { "x" } else { " " },
                class.name,
                eligibility
            )?;
        }
        if let Some(selected) = &view.selected_class {
            let requirements: Vec<String> = selected
                .requirements
                .iter()
                .map(|(attribute, minimum)| format!("{} {}", attribute, minimum))
                .collect();
            writeln!(f, "    {} requires: {}", selected.name, requirements.join(", "))?;
        }

        writeln!(
            f,
            "  Skills (points available: {} of {})",
            view.points_available, view.total_skill_points
        )?;
        for skill in &view.skills {
            writeln!(
                f,
                "    {:<16} points {:>2}  {} {:+}  total {:+}",
                skill.name, skill.points, skill.attribute, skill.modifier, skill.total
            )?;
        }

        let check = &view.skill_check;
        write!(
            f,
            "  Skill check: {} vs DC {}",
            check.skill.as_deref().unwrap_or("(no skill selected)"),
            check.dc
        )?;
        if let Some(outcome) = &check.last_roll {
            write!(f, "; last roll {}", RollDisplay(outcome))?;
        }
        writeln!(f)
    }
}

/// One-line summary of a roll.
pub struct RollDisplay<'a>(pub &'a RollOutcome);

impl fmt::Display for RollDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        write!(
            f,
            "{} {:+} = {} vs DC {}: {}",
            outcome.roll,
            outcome.total_skill,
            outcome.total(),
            outcome.dc,
            outcome.verdict()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_summary() {
        let outcome = RollOutcome::resolve(8, 3, 10);
        assert_eq!(RollDisplay(&outcome).to_string(), "8 +3 = 11 vs DC 10: success");

        let outcome = RollOutcome::resolve(6, -1, 10);
        assert_eq!(RollDisplay(&outcome).to_string(), "6 -1 = 5 vs DC 10: failure");
    }
}
