//! Skill list loader.

use std::path::Path;

use sheet_core::SkillDefinition;

use crate::loaders::{LoadResult, read_file};

/// Loader for the skill list from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load the skill list from a RON file containing a list of
    /// `(name, attribute)` entries.
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a skill list from RON source.
    pub fn parse(content: &str) -> LoadResult<Vec<SkillDefinition>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse skill list RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::Attribute;

    #[test]
    fn parses_in_order() {
        let source = r#"[
            (name: "Stealth", attribute: Dexterity),
            (name: "Arcana", attribute: Intelligence),
        ]"#;
        let skills = SkillLoader::parse(source).expect("valid list");
        assert_eq!(
            skills,
            vec![
                SkillDefinition::new("Stealth", Attribute::Dexterity),
                SkillDefinition::new("Arcana", Attribute::Intelligence),
            ]
        );
    }

    #[test]
    fn rejects_unknown_attribute() {
        let source = r#"[(name: "Haggling", attribute: Greed)]"#;
        assert!(SkillLoader::parse(source).is_err());
    }
}
