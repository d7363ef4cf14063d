//! Content factory for building the rule tables from data files.

use std::path::{Path, PathBuf};

use sheet_core::{Rules, SheetConfig};

use crate::loaders::{ClassLoader, ConfigLoader, LoadResult, SkillLoader};

const EMBEDDED_CLASSES: &str = include_str!("../../data/classes.ron");
const EMBEDDED_SKILLS: &str = include_str!("../../data/skills.ron");
const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Content factory that loads the rule tables and configuration.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── classes.ron
/// ├── skills.ron
/// └── config.toml   (optional)
/// ```
///
/// [`ContentFactory::embedded`] uses the data files compiled into the crate.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a content factory backed by the built-in data set.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Load and validate the class table and skill list.
    pub fn load_rules(&self) -> LoadResult<Rules> {
        let (classes, skills) = match &self.data_dir {
            Some(dir) => (
                ClassLoader::load(&dir.join("classes.ron"))?,
                SkillLoader::load(&dir.join("skills.ron"))?,
            ),
            None => (
                ClassLoader::parse(EMBEDDED_CLASSES)?,
                SkillLoader::parse(EMBEDDED_SKILLS)?,
            ),
        };

        tracing::debug!(
            "Loaded {} classes and {} skills from {}",
            classes.len(),
            skills.len(),
            self.describe()
        );

        Rules::new(classes, skills).map_err(|e| anyhow::anyhow!("Invalid rule tables: {}", e))
    }

    /// Load sheet configuration from `config.toml`.
    ///
    /// A data directory without `config.toml` yields the default config.
    pub fn load_config(&self) -> LoadResult<SheetConfig> {
        match &self.data_dir {
            Some(dir) => {
                let path = dir.join("config.toml");
                if path.exists() {
                    ConfigLoader::load(&path)
                } else {
                    tracing::debug!("No config.toml in {}, using defaults", dir.display());
                    Ok(SheetConfig::default())
                }
            }
            None => ConfigLoader::parse(EMBEDDED_CONFIG),
        }
    }

    fn describe(&self) -> String {
        match &self.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "embedded data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Attribute, RulesOracle};
    use std::fs;

    #[test]
    fn embedded_content_is_standard() {
        let factory = ContentFactory::embedded();
        let rules = factory.load_rules().expect("embedded tables are valid");

        let classes: Vec<_> = rules.classes().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(classes, ["Barbarian", "Wizard", "Bard"]);
        assert_eq!(rules.skills().len(), 18);

        let arcana = rules.skill_id("Arcana").expect("Arcana is listed");
        assert_eq!(
            rules.skill(arcana).map(|s| s.attribute),
            Some(Attribute::Intelligence)
        );

        let config = factory.load_config().expect("embedded config is valid");
        assert_eq!(config, SheetConfig::default());
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("classes.ron"),
            r#"[(name: "Rogue", requirements: {
                Strength: 8, Dexterity: 14, Constitution: 8,
                Intelligence: 8, Wisdom: 8, Charisma: 8,
            })]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("skills.ron"),
            r#"[(name: "Stealth", attribute: Dexterity)]"#,
        )
        .unwrap();
        fs::write(dir.path().join("config.toml"), "starting_characters = 2").unwrap();

        let factory = ContentFactory::new(dir.path());
        let rules = factory.load_rules().expect("valid directory");
        assert_eq!(rules.classes()[0].name, "Rogue");
        assert_eq!(rules.skills()[0].name, "Stealth");
        assert_eq!(factory.load_config().unwrap().starting_characters, 2);
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), SheetConfig::default());
    }

    #[test]
    fn missing_tables_report_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = ContentFactory::new(dir.path())
            .load_rules()
            .expect_err("no tables present");
        assert!(error.to_string().contains("classes.ron"), "{error}");
    }

    #[test]
    fn duplicate_skills_are_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("classes.ron"), "[]").unwrap();
        fs::write(
            dir.path().join("skills.ron"),
            r#"[(name: "Stealth", attribute: Dexterity), (name: "Stealth", attribute: Wisdom)]"#,
        )
        .unwrap();

        let error = ContentFactory::new(dir.path())
            .load_rules()
            .expect_err("duplicate skill");
        assert!(error.to_string().contains("Stealth"), "{error}");
    }
}
