use std::collections::{BTreeSet, HashMap};

use rand::Rng;

/// The validated word set: lowercase strings, no whitespace, length-filtered
/// by the loader. Immutable once built; may back multiple concurrent builds.
///
/// A `BTreeSet` rather than a `HashSet` — iteration order must be stable
/// across processes for a build to be reproducible from its seed alone.
pub type Dictionary = BTreeSet<String>;

/// Reverse index from a letter to every `(word, position)` pair where that
/// letter occurs, built once from a [`Dictionary`] and never mutated
/// afterward.
#[derive(Debug, Default, Clone)]
pub struct DictionaryIndex {
    by_letter: HashMap<char, Vec<(String, usize)>>,
}

impl DictionaryIndex {
    /// Scan each word and, for every `(position, letter)` pair, append
    /// `(word, position)` to that letter's bucket. Bucket order reflects
    /// the dictionary's iteration order and is otherwise unspecified.
    pub fn build(dictionary: &Dictionary) -> Self {
        let mut by_letter: HashMap<char, Vec<(String, usize)>> = HashMap::new();
        for word in dictionary {
            for (position, letter) in word.chars().enumerate() {
                by_letter
                    .entry(letter)
                    .or_default()
                    .push((word.clone(), position));
            }
        }
        Self { by_letter }
    }

    /// Uniformly sample one `(word, position)` pair from `letter`'s bucket.
    /// Returns `None` if the bucket is empty or absent (the *no candidate*
    /// condition).
    pub fn sample(&self, letter: char, rng: &mut impl Rng) -> Option<(String, usize)> {
        let bucket = self.by_letter.get(&letter)?;
        if bucket.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..bucket.len());
        Some(bucket[index].clone())
    }

    pub fn bucket_len(&self, letter: char) -> usize {
        self.by_letter.get(&letter).map_or(0, Vec::len)
    }
}
