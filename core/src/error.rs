use std::fmt;

/// Why a candidate placement was rejected. All four reasons collapse to a
/// single discardable condition from the generator loop's point of view —
/// this type exists for diagnostics and tests, not for `?`-propagation past
/// the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds,
    LetterMismatch { x: usize, y: usize },
    BadPerpendicularWord { run: String },
    ParallelOverrun { run: String },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "placement extends outside the grid"),
            PlacementError::LetterMismatch { x, y } => {
                write!(f, "letter mismatch at ({x}, {y})")
            }
            PlacementError::BadPerpendicularWord { run } => {
                write!(f, "perpendicular run \"{run}\" is not a dictionary word")
            }
            PlacementError::ParallelOverrun { run } => {
                write!(f, "parallel run \"{run}\" overruns the placed word")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Structural and setup-level failures. Unlike [`PlacementError`], these
/// surface to the caller — they indicate a programming error (an empty
/// grid with no occupied cell to pivot from) or an unsatisfiable
/// configuration (no seed word could ever be placed).
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("grid has no occupied cell to pivot from")]
    EmptyGrid,
    #[error("no dictionary word could be seeded onto an empty grid")]
    SeedingFailed,
    #[error("grid coordinate ({x}, {y}) is out of bounds for a grid of length {grid_len}")]
    OutOfBounds {
        x: usize,
        y: usize,
        grid_len: usize,
    },
}
