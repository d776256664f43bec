use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dictionary::{Dictionary, DictionaryIndex};
use crate::error::GeneratorError;
use crate::flow::FlowTag;
use crate::grid::Grid;
use crate::orientation::{Direction, Orientation};
use crate::scanner;

/// Parameters for one build. Mirrors the original's `create_crossword`
/// defaults (`grid_len=15, n_words=35, timeout=5`).
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub grid_len: usize,
    pub n_words: usize,
    pub time_budget: Duration,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_len: 15,
            n_words: 35,
            time_budget: Duration::from_secs(5),
            seed: None,
        }
    }
}

/// Place a uniform-random seed word horizontally at `(3, grid_len / 2)`.
/// Resamples on failure (e.g. a word too long for the row at that column)
/// up to `attempts` times before giving up.
fn seed(grid: &mut Grid, dictionary: &Dictionary, rng: &mut impl Rng, attempts: usize) -> Result<(), GeneratorError> {
    let words: Vec<&String> = dictionary.iter().collect();
    if words.is_empty() {
        return Err(GeneratorError::SeedingFailed);
    }

    let origin = crate::position::Position::new(3, grid.grid_len() / 2);
    for _ in 0..attempts {
        let word = words[rng.gen_range(0..words.len())];
        if grid.place(origin, Orientation::Horizontal, word, dictionary).is_ok() {
            return Ok(());
        }
    }
    Err(GeneratorError::SeedingFailed)
}

/// Run the pivot-driven stochastic search described by the Generator Loop:
/// seed the grid, then repeatedly pick an occupied pivot, derive the
/// perpendicular orientation from its flow tag, sample a crossing word from
/// the dictionary index, and attempt to place it. Stops once `n_words`
/// distinct runs exist on the grid or the time budget elapses.
pub fn generate(dictionary: &Dictionary, index: &DictionaryIndex, config: &GeneratorConfig) -> Result<Grid, GeneratorError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut grid = Grid::new(config.grid_len);
    seed(&mut grid, dictionary, &mut rng, 64)?;
    log::debug!("seeded {}x{} grid, target {} words", config.grid_len, config.grid_len, config.n_words);

    let start = Instant::now();
    loop {
        if start.elapsed() >= config.time_budget {
            log::debug!("time budget exhausted after {:?}", start.elapsed());
            break;
        }

        let pivot = match grid.pick_random_occupied(&mut rng) {
            Ok(pos) => pos,
            Err(_) => break,
        };
        let pivot_orientation = match grid.flow_at(pivot).and_then(FlowTag::free_orientation) {
            Some(orientation) => orientation,
            None => continue,
        };

        let pivot_letter = match grid.read(pivot) {
            Ok(Some(c)) => c,
            _ => continue,
        };

        let (word, position) = match index.sample(pivot_letter, &mut rng) {
            Some(pair) => pair,
            None => continue,
        };

        let (negative, _) = Direction::axis(pivot_orientation);
        let (dx, dy) = negative.delta();
        let shift = position as i32;
        let origin = match pivot.offset(dx * shift, dy * shift) {
            Some(p) => p,
            None => continue,
        };

        if let Err(reason) = grid.place(origin, pivot_orientation, &word, dictionary) {
            log::trace!("discarding placement of \"{word}\" at pivot {pivot:?}: {reason}");
            continue;
        }

        let word_count = scanner::scan(&grid).len();
        if word_count >= config.n_words {
            log::debug!("reached target word count ({word_count}) after {:?}", start.elapsed());
            break;
        }
    }

    Ok(grid)
}
