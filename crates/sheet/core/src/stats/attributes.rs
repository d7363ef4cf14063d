//! The fixed attribute list and per-character attribute scores.

use strum::{EnumCount, IntoEnumIterator};

use crate::config::SheetConfig;
use crate::env::LookupError;

/// The six attributes every character carries, in display order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// Resolves an attribute by name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, LookupError> {
        name.trim()
            .parse()
            .map_err(|_| LookupError::UnknownAttribute(name.to_string()))
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// One integer score per [`Attribute`].
///
/// Used both for a character's current scores and for a class's minimum
/// requirements. Mutation helpers keep scores inside
/// `[SheetConfig::MIN_ATTRIBUTE, SheetConfig::MAX_ATTRIBUTE]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttributeScores([i32; Attribute::COUNT]);

impl AttributeScores {
    /// Every attribute set to the same value.
    pub const fn uniform(value: i32) -> Self {
        Self([value; Attribute::COUNT])
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self.0[attribute.slot()]
    }

    /// Returns a copy with one score replaced. Does not clamp.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.0[attribute.slot()] = value;
        self
    }

    /// Iterates `(attribute, score)` pairs in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::iter().map(move |attribute| (attribute, self.get(attribute)))
    }

    /// True iff every score meets or exceeds the matching requirement.
    pub fn meets(&self, requirements: &AttributeScores) -> bool {
        Attribute::iter().all(|attribute| self.get(attribute) >= requirements.get(attribute))
    }

    /// True when the attribute can still be raised by one.
    pub fn can_increment(&self, attribute: Attribute) -> bool {
        self.get(attribute) < SheetConfig::MAX_ATTRIBUTE
    }

    /// Score raised by one, or `None` at the maximum.
    pub fn incremented(&self, attribute: Attribute) -> Option<Self> {
        let value = self.get(attribute);
        (value < SheetConfig::MAX_ATTRIBUTE).then(|| self.with(attribute, value + 1))
    }

    /// Score lowered by one, or `None` at the minimum.
    pub fn decremented(&self, attribute: Attribute) -> Option<Self> {
        let value = self.get(attribute);
        (value > SheetConfig::MIN_ATTRIBUTE).then(|| self.with(attribute, value - 1))
    }
}

impl Default for AttributeScores {
    /// All attributes at `SheetConfig::DEFAULT_ATTRIBUTE`.
    fn default() -> Self {
        Self::uniform(SheetConfig::DEFAULT_ATTRIBUTE)
    }
}
