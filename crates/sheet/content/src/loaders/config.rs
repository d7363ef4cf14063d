//! Sheet configuration loader.

use std::path::Path;

use sheet_core::SheetConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for sheet configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to `SheetConfig::default()` values.
    pub fn load(path: &Path) -> LoadResult<SheetConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<SheetConfig> {
        let config: SheetConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").expect("empty TOML is valid");
        assert_eq!(config, SheetConfig::default());
    }

    #[test]
    fn reads_starting_characters() {
        let config = ConfigLoader::parse("starting_characters = 3").expect("valid TOML");
        assert_eq!(config.starting_characters, 3);
    }

    #[test]
    fn rejects_wrong_type() {
        assert!(ConfigLoader::parse("starting_characters = \"many\"").is_err());
    }
}
