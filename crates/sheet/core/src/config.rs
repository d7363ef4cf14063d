/// Character sheet constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Number of default characters the roster starts with. Never below 1.
    pub starting_characters: usize,
}

impl SheetConfig {
    // ===== rule constants =====
    pub const MIN_ATTRIBUTE: i32 = 0;
    pub const MAX_ATTRIBUTE: i32 = 70;
    pub const DEFAULT_ATTRIBUTE: i32 = 10;
    /// Score at which an attribute modifier is zero.
    pub const MODIFIER_BASELINE: i32 = 10;
    pub const BASE_SKILL_POINTS: i32 = 10;
    /// Skill points granted (or taken) per point of Intelligence modifier.
    pub const SKILL_POINTS_PER_MODIFIER: i32 = 4;
    pub const DIE_SIDES: u32 = 20;
    pub const DEFAULT_DC: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_CHARACTERS: usize = 1;

    pub fn new() -> Self {
        Self {
            starting_characters: Self::DEFAULT_STARTING_CHARACTERS,
        }
    }

    pub fn with_starting_characters(starting_characters: usize) -> Self {
        Self {
            starting_characters: starting_characters.max(1),
        }
    }

    /// Starting roster size with the lower bound applied.
    ///
    /// Loaded configuration may carry a zero; the roster always starts with
    /// at least one character.
    pub fn starting_roster_size(&self) -> usize {
        self.starting_characters.max(1)
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_roster_is_never_empty() {
        assert_eq!(SheetConfig::with_starting_characters(0).starting_characters, 1);
        let loaded = SheetConfig {
            starting_characters: 0,
        };
        assert_eq!(loaded.starting_roster_size(), 1);
        assert_eq!(SheetConfig::default().starting_roster_size(), 1);
    }
}
