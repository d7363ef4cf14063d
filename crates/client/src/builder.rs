//! Shell builder: loads rule tables and wires the model to the shell.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use sheet_content::ContentFactory;
use sheet_core::{CharacterModel, PcgRng, RngOracle, RulesOracle};

use crate::shell::Shell;

/// Builder for constructing a [`Shell`] with validation.
///
/// Content is required; the build fails fast when it is missing or its
/// tables do not load. The die defaults to [`PcgRng`] and the seed to the
/// current time.
#[derive(Default)]
pub struct ShellBuilder {
    content: Option<ContentFactory>,
    rng: Option<Box<dyn RngOracle>>,
    seed: Option<u64>,
}

impl ShellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule table source (required).
    pub fn content(mut self, content: ContentFactory) -> Self {
        self.content = Some(content);
        self
    }

    /// Replace the default die.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Fix the roll seed. `None` keeps the clock-derived default.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if content is not set or a table fails to load.
    pub fn build(self) -> Result<Shell> {
        let content = self
            .content
            .context("Content is required. Use .content() to set it.")?;

        let rules = content.load_rules().context("failed to load rule tables")?;
        let config = content
            .load_config()
            .context("failed to load sheet configuration")?;

        let seed = self.seed.unwrap_or_else(clock_seed);
        let rng: Box<dyn RngOracle> = self.rng.unwrap_or_else(|| Box::new(PcgRng));

        tracing::info!(
            "Rules loaded: {} classes, {} skills; starting characters={}; seed={}",
            rules.classes().len(),
            rules.skills().len(),
            config.starting_roster_size(),
            seed
        );

        let model = CharacterModel::new(Arc::new(rules), &config, rng, seed);
        Ok(Shell::new(model))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_required() {
        let error = ShellBuilder::new().build().err().expect("missing content");
        assert!(error.to_string().contains("Content is required"));
    }

    #[test]
    fn builds_from_embedded_tables() {
        let shell = ShellBuilder::new()
            .content(ContentFactory::embedded())
            .seed(Some(7))
            .build()
            .expect("embedded tables load");

        assert_eq!(shell.model().len(), 1);
        assert_eq!(shell.model().rules().skills().len(), 18);
        assert_eq!(shell.model().rules().classes().len(), 3);
    }

    #[test]
    fn broken_tables_fail_the_build() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("classes.ron"), "not ron").expect("write");
        std::fs::write(dir.path().join("skills.ron"), "[]").expect("write");

        let result = ShellBuilder::new()
            .content(ContentFactory::new(dir.path()))
            .build();
        assert!(result.is_err());
    }
}
