//! Class table loader.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use sheet_core::{Attribute, ClassDefinition};

use crate::loaders::{LoadResult, read_file};

/// One class entry as written in RON.
///
/// `requirements` keeps every map entry in source order, repeats included,
/// so a repeated attribute is rejected instead of overwriting the first.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassSpec {
    pub name: String,
    #[serde(deserialize_with = "de_requirements")]
    pub requirements: Vec<(Attribute, i32)>,
}

fn de_requirements<'de, D>(deserializer: D) -> Result<Vec<(Attribute, i32)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Entries;

    impl<'de> Visitor<'de> for Entries {
        type Value = Vec<(Attribute, i32)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of attribute minimums")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(Entries)
}

impl ClassSpec {
    /// Converts to a [`ClassDefinition`], rejecting incomplete requirements.
    pub fn into_definition(self) -> LoadResult<ClassDefinition> {
        let name = self.name;
        ClassDefinition::from_requirements(name.clone(), self.requirements)
            .map_err(|e| anyhow::anyhow!("Invalid class '{}': {}", name, e))
    }
}

/// Loader for the class table from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load the class table from a RON file containing a list of `ClassSpec`.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a class table from RON source.
    pub fn parse(content: &str) -> LoadResult<Vec<ClassDefinition>> {
        let specs: Vec<ClassSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class table RON: {}", e))?;

        specs.into_iter().map(ClassSpec::into_definition).collect()
    }
}
