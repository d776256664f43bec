use std::fs;
use std::path::{Path, PathBuf};

use cruciverbal_core::{Grid, HintedWord, Orientation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ExternalError;

/// One hinted word as it appears in the document's `words` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub word_origin: [usize; 2],
    pub orientation: String,
    pub hint: String,
}

impl From<&HintedWord> for WordEntry {
    fn from(hinted: &HintedWord) -> Self {
        Self {
            word: hinted.word.clone(),
            word_origin: hinted.origin.as_array(),
            orientation: hinted.orientation.code().to_string(),
            hint: hinted.hint.clone(),
        }
    }
}

/// The portable puzzle document: `grid` is `grid_len` rows of `grid_len`
/// cells, each either a lowercase letter or `null`; `words` is the hinted
/// word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDocument {
    pub grid: Vec<Vec<Option<char>>>,
    pub words: Vec<WordEntry>,
}

impl PuzzleDocument {
    /// Build the document from a committed grid and its hinted words. Reads
    /// the grid back cell-by-cell through its public accessors rather than
    /// depending on `Grid`'s internal representation.
    pub fn build(grid: &Grid, words: &[HintedWord]) -> Self {
        let grid_len = grid.grid_len();
        let mut rows = vec![vec![None; grid_len]; grid_len];
        for y in 0..grid_len {
            for x in 0..grid_len {
                rows[y][x] = grid
                    .read(cruciverbal_core::Position::new(x, y))
                    .unwrap_or(None);
            }
        }

        Self {
            grid: rows,
            words: words.iter().map(WordEntry::from).collect(),
        }
    }

    /// Write the document as pretty-printed JSON to `dir/crossword-<uuid>.json`,
    /// creating `dir` if it does not already exist. Returns the written path.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExternalError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|_| ExternalError::OutputDirectory(dir.display().to_string()))?;

        let path = dir.join(format!("crossword-{}.json", Uuid::new_v4()));
        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        log::info!("wrote puzzle document to {}", path.display());
        Ok(path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExternalError> {
        let file = fs::File::open(path)?;
        let document = serde_json::from_reader(file)?;
        Ok(document)
    }
}
