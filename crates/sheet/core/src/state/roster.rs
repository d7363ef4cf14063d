use std::sync::Arc;

use super::Character;

/// Ordered, append-only list of character snapshots.
///
/// A roster is never edited in place. [`Roster::replace`] and
/// [`Roster::append`] build a new roster that shares every untouched
/// character with the old one, so a reader holding the previous
/// `Arc<Roster>` keeps a consistent view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Arc<Character>>,
    rolls: u64,
}

impl Roster {
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            characters: characters.into_iter().map(Arc::new).collect(),
            rolls: 0,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Character>> {
        self.characters.get(index)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Character>> {
        self.characters.iter()
    }

    /// Number of skill checks rolled so far across the roster.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// New roster with the character at `index` swapped out.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn replace(&self, index: usize, character: Character) -> Option<Self> {
        if index >= self.characters.len() {
            return None;
        }
        let mut characters = self.characters.clone();
        characters[index] = Arc::new(character);
        Some(Self {
            characters,
            rolls: self.rolls,
        })
    }

    /// New roster with the character at `index` swapped out and the roll
    /// counter advanced.
    pub fn replace_after_roll(&self, index: usize, character: Character) -> Option<Self> {
        let mut next = self.replace(index, character)?;
        next.rolls += 1;
        Some(next)
    }

    /// New roster with `character` appended at the end.
    pub fn append(&self, character: Character) -> Self {
        let mut characters = self.characters.clone();
        characters.push(Arc::new(character));
        Self {
            characters,
            rolls: self.rolls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Attribute;

    #[test]
    fn replace_shares_untouched_characters() {
        let roster = Roster::new(vec![Character::new(1), Character::new(1)]);
        let first = roster.get(0).expect("first").clone();
        let edited = first.with_attributes(first.attributes().with(Attribute::Wisdom, 12));

        let next = roster.replace(1, edited).expect("index in range");
        assert!(Arc::ptr_eq(roster.get(0).unwrap(), next.get(0).unwrap()));
        assert_eq!(roster.get(1).unwrap().attribute(Attribute::Wisdom), 10);
        assert_eq!(next.get(1).unwrap().attribute(Attribute::Wisdom), 12);
    }

    #[test]
    fn replace_out_of_range_is_none() {
        let roster = Roster::new(vec![Character::new(1)]);
        assert!(roster.replace(3, Character::new(1)).is_none());
    }

    #[test]
    fn append_and_roll_counter() {
        let roster = Roster::new(vec![Character::new(0)]);
        let grown = roster.append(Character::new(0));
        assert_eq!(roster.len(), 1);
        assert_eq!(grown.len(), 2);

        let rolled = grown
            .replace_after_roll(1, Character::new(0))
            .expect("index in range");
        assert_eq!(rolled.rolls(), 1);
        assert_eq!(grown.rolls(), 0);
    }
}
