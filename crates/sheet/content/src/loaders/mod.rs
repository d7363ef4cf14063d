//! Content loaders for reading rule tables and configuration from files.
//!
//! Class and skill tables are RON, configuration is TOML. Each loader can
//! parse from a file or from an in-memory string (used for the embedded
//! defaults).

pub mod classes;
pub mod config;
pub mod factory;
pub mod skills;

pub use classes::{ClassLoader, ClassSpec};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
