use std::collections::{HashMap, HashSet, VecDeque};

use rand::Rng;

use crate::dictionary::Dictionary;
use crate::error::{GeneratorError, PlacementError};
use crate::flow::FlowTag;
use crate::orientation::{Direction, Orientation};
use crate::position::Position;

/// The crossword's letter matrix, its occupied-cell set, and a per-cell
/// flow tag. Mutated only by [`Grid::place`] on a successful placement;
/// never cleared during a build. Not serialized directly — `cruciverbal-external`
/// builds the puzzle document's `grid` field from [`Grid::read`] and
/// [`Grid::occupied_cells`].
#[derive(Debug, Clone)]
pub struct Grid {
    grid_len: usize,
    cells: Vec<Vec<Option<char>>>,
    /// Occupied cells in the order they were first written. Indexing into
    /// this (rather than a hash set) keeps `pick_random_occupied` reproducible
    /// across processes given the same RNG seed.
    occupied_order: Vec<Position>,
    occupied: HashSet<Position>,
    flow: HashMap<Position, FlowTag>,
}

impl Grid {
    pub fn new(grid_len: usize) -> Self {
        Self {
            grid_len,
            cells: vec![vec![None; grid_len]; grid_len],
            occupied_order: Vec::new(),
            occupied: HashSet::new(),
            flow: HashMap::new(),
        }
    }

    pub fn grid_len(&self) -> usize {
        self.grid_len
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.grid_len && pos.y < self.grid_len
    }

    /// Returns the letter at `pos`, or `None` if unoccupied. Returns
    /// `Err` when `pos` is out of bounds — a condition distinguishable
    /// from *unoccupied* and used by walk routines as a terminator.
    pub fn read(&self, pos: Position) -> Result<Option<char>, GeneratorError> {
        if !self.in_bounds(pos) {
            return Err(GeneratorError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                grid_len: self.grid_len,
            });
        }
        Ok(self.cells[pos.y][pos.x])
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupied.contains(&pos)
    }

    pub fn flow_at(&self, pos: Position) -> Option<FlowTag> {
        self.flow.get(&pos).copied()
    }

    pub fn occupied_len(&self) -> usize {
        self.occupied.len()
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = &Position> {
        self.occupied_order.iter()
    }

    /// Sets the letter at `pos` and records the cell as occupied. Requires
    /// `pos` to be in bounds.
    pub fn write(&mut self, pos: Position, letter: char) {
        debug_assert!(self.in_bounds(pos));
        self.cells[pos.y][pos.x] = Some(letter);
        if self.occupied.insert(pos) {
            self.occupied_order.push(pos);
        }
    }

    /// If `pos` has no flow tag yet, tags it for `orientation`; if already
    /// tagged with the opposite orientation, upgrades it to `Crossed`;
    /// same-orientation re-tagging is a no-op.
    pub fn set_flow(&mut self, pos: Position, orientation: Orientation) {
        let entry = self
            .flow
            .entry(pos)
            .or_insert_with(|| FlowTag::from_orientation(orientation));
        *entry = entry.upgrade(orientation);
    }

    /// Uniformly sample an occupied cell. Fails with [`GeneratorError::EmptyGrid`]
    /// if the grid has no occupied cell yet (i.e. before seeding).
    pub fn pick_random_occupied(&self, rng: &mut impl Rng) -> Result<Position, GeneratorError> {
        if self.occupied_order.is_empty() {
            return Err(GeneratorError::EmptyGrid);
        }
        let index = rng.gen_range(0..self.occupied_order.len());
        Ok(self.occupied_order[index])
    }

    /// Diagnostic multiline rendering: occupied cells as their letter,
    /// unoccupied as `░`, columns space-joined within a row.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.unwrap_or('░').to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Walk outward from `start` in `direction`, collecting occupied
    /// letters nearest-to-farthest, stopping at the first unoccupied cell
    /// or the grid boundary.
    fn walk(&self, start: Position, direction: Direction) -> Vec<char> {
        let mut letters = Vec::new();
        let (dx, dy) = direction.delta();
        let mut pos = start;
        loop {
            pos = match pos.offset(dx, dy) {
                Some(p) => p,
                None => break,
            };
            if !self.in_bounds(pos) {
                break;
            }
            match self.cells[pos.y][pos.x] {
                Some(c) => letters.push(c),
                None => break,
            }
        }
        letters
    }

    /// The perpendicular run through `pos` in the axis perpendicular to
    /// `orientation`, using `virtual_letter` as the filler at `pos` itself
    /// (relevant even when `pos` is currently unoccupied — it is the
    /// candidate letter about to be placed there).
    fn perpendicular_run(&self, pos: Position, virtual_letter: char, orientation: Orientation) -> String {
        let perpendicular = orientation.perpendicular();
        let (negative, positive) = Direction::axis(perpendicular);

        let mut run: VecDeque<char> = VecDeque::new();
        run.push_back(virtual_letter);
        for letter in self.walk(pos, negative) {
            run.push_front(letter);
        }
        for letter in self.walk(pos, positive) {
            run.push_back(letter);
        }
        run.into_iter().collect()
    }

    /// The parallel run along `orientation`'s own axis: `word` itself,
    /// extended by any occupied cells immediately before `origin` and any
    /// immediately after the word's last cell.
    fn parallel_run(&self, origin: Position, orientation: Orientation, word: &str) -> String {
        let (negative, positive) = Direction::axis(orientation);
        let (dx, dy) = orientation.delta();

        let mut run: VecDeque<char> = word.chars().collect();
        for letter in self.walk(origin, negative) {
            run.push_front(letter);
        }

        let last_index = word.chars().count() as i32 - 1;
        if let Some(end) = origin.offset(dx * last_index, dy * last_index) {
            for letter in self.walk(end, positive) {
                run.push_back(letter);
            }
        }
        run.into_iter().collect()
    }

    /// Attempt to place `word` starting at `origin`, extending rightward
    /// (horizontal) or downward (vertical). Validates in two read-only
    /// phases before committing in a third; on any validation failure the
    /// grid is left unchanged.
    pub fn place(
        &mut self,
        origin: Position,
        orientation: Orientation,
        word: &str,
        dictionary: &Dictionary,
    ) -> Result<(), PlacementError> {
        let (dx, dy) = orientation.delta();
        let letters: Vec<char> = word.chars().collect();

        // Phase 1: cell-wise compatibility and perpendicular-word check.
        let mut cells = Vec::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            let pos = origin
                .offset(dx * i as i32, dy * i as i32)
                .filter(|p| self.in_bounds(*p))
                .ok_or(PlacementError::OutOfBounds)?;

            if let Some(existing) = self.cells[pos.y][pos.x] {
                if existing != letter {
                    return Err(PlacementError::LetterMismatch { x: pos.x, y: pos.y });
                }
            }

            let perpendicular = self.perpendicular_run(pos, letter, orientation);
            if perpendicular.chars().count() >= 2 && !dictionary.contains(&perpendicular) {
                return Err(PlacementError::BadPerpendicularWord { run: perpendicular });
            }

            cells.push(pos);
        }

        // Phase 2: parallel-extension check.
        let parallel = self.parallel_run(origin, orientation, word);
        if parallel.chars().count() > letters.len() {
            return Err(PlacementError::ParallelOverrun { run: parallel });
        }

        // Phase 3: commit.
        for (&pos, &letter) in cells.iter().zip(letters.iter()) {
            if self.cells[pos.y][pos.x].is_none() {
                self.write(pos, letter);
            }
            self.set_flow(pos, orientation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn place_on_empty_grid_always_succeeds() {
        let mut grid = Grid::new(15);
        let d = dict(&["anchor"]);
        grid.place(Position::new(3, 7), Orientation::Horizontal, "anchor", &d)
            .unwrap();
        for (i, c) in "anchor".chars().enumerate() {
            assert_eq!(grid.read(Position::new(3 + i, 7)).unwrap(), Some(c));
            assert_eq!(grid.flow_at(Position::new(3 + i, 7)), Some(FlowTag::HorizontalOnly));
        }
    }

    #[test]
    fn perpendicular_rejection_s1() {
        let mut grid = Grid::new(15);
        let d = dict(&["license", "work"]);
        grid.place(Position::new(1, 1), Orientation::Horizontal, "license", &d)
            .unwrap();
        let err = grid
            .place(Position::new(8, 1), Orientation::Vertical, "work", &d)
            .unwrap_err();
        assert!(matches!(err, PlacementError::BadPerpendicularWord { .. }));
    }

    #[test]
    fn parallel_rejection_s2() {
        let mut grid = Grid::new(15);
        let d = dict(&["license", "work"]);
        grid.place(Position::new(8, 1), Orientation::Vertical, "work", &d)
            .unwrap();
        let err = grid
            .place(Position::new(1, 1), Orientation::Horizontal, "license", &d)
            .unwrap_err();
        assert!(matches!(
            err,
            PlacementError::ParallelOverrun { .. } | PlacementError::BadPerpendicularWord { .. }
        ));
    }

    #[test]
    fn out_of_bounds_placement_fails() {
        let mut grid = Grid::new(5);
        let d = dict(&["anchor"]);
        let err = grid
            .place(Position::new(2, 0), Orientation::Horizontal, "anchor", &d)
            .unwrap_err();
        assert_eq!(err, PlacementError::OutOfBounds);
    }

    #[test]
    fn boundary_placement_exactly_fitting_succeeds() {
        let mut grid = Grid::new(5);
        let d = dict(&["abcde"]);
        grid.place(Position::new(0, 0), Orientation::Horizontal, "abcde", &d)
            .unwrap();
    }

    #[test]
    fn replacing_identical_word_is_noop_not_corruption() {
        let mut grid = Grid::new(15);
        let d = dict(&["anchor"]);
        grid.place(Position::new(3, 7), Orientation::Horizontal, "anchor", &d)
            .unwrap();
        grid.place(Position::new(3, 7), Orientation::Horizontal, "anchor", &d)
            .unwrap();
        assert_eq!(grid.read(Position::new(3, 7)).unwrap(), Some('a'));
    }
}
