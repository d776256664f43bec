use crate::{Orientation, Position};
use serde::{Deserialize, Serialize};

/// A word discovered on a committed grid: its text, its leftmost/topmost
/// cell, and the axis it runs along.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub origin: Position,
    pub orientation: Orientation,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, origin: Position, orientation: Orientation) -> Self {
        Self {
            word: word.into(),
            origin,
            orientation,
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// A [`WordRecord`] bound to a hint from the external language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintedWord {
    pub word: String,
    pub origin: Position,
    pub orientation: Orientation,
    pub hint: String,
}

impl HintedWord {
    pub fn new(record: WordRecord, hint: String) -> Self {
        Self {
            word: record.word,
            origin: record.origin,
            orientation: record.orientation,
            hint,
        }
    }
}
