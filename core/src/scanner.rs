use std::collections::HashSet;

use crate::grid::Grid;
use crate::orientation::{Direction, Orientation};
use crate::position::Position;
use crate::word::WordRecord;

/// Enumerate every maximal run of length >= 2 on a committed grid.
///
/// For each occupied cell and each orientation, walks outward in both
/// directions until an unoccupied cell or the boundary is hit, then emits
/// the run if it has at least two letters. Runs discovered from multiple
/// starting cells collapse into one record via the `HashSet`.
pub fn scan(grid: &Grid) -> HashSet<WordRecord> {
    let mut words = HashSet::new();

    for &cell in grid.occupied_cells() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(record) = maximal_run(grid, cell, orientation) {
                words.insert(record);
            }
        }
    }

    words
}

fn maximal_run(grid: &Grid, cell: Position, orientation: Orientation) -> Option<WordRecord> {
    let (negative, positive) = Direction::axis(orientation);

    let mut origin = cell;
    let (ndx, ndy) = negative.delta();
    while let Some(prev) = origin.offset(ndx, ndy) {
        if grid.is_occupied(prev) {
            origin = prev;
        } else {
            break;
        }
    }

    let mut letters = String::new();
    let mut cursor = Some(origin);
    let (pdx, pdy) = positive.delta();
    while let Some(pos) = cursor {
        if !grid.is_occupied(pos) {
            break;
        }
        letters.push(
            grid.read(pos)
                .ok()
                .flatten()
                .expect("occupied cell has a letter"),
        );
        cursor = pos.offset(pdx, pdy);
    }

    if letters.chars().count() >= 2 {
        Some(WordRecord::new(letters, origin, orientation))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn trivial_scan_s3() {
        let mut grid = Grid::new(10);
        let d = dict(&["livid", "it"]);
        grid.place(Position::new(0, 0), Orientation::Horizontal, "livid", &d)
            .unwrap();
        grid.place(Position::new(0, 0), Orientation::Vertical, "livid", &d)
            .unwrap();
        grid.place(Position::new(1, 0), Orientation::Vertical, "it", &d)
            .unwrap();

        let words: HashSet<_> = scan(&grid).into_iter().map(|w| (w.word, w.origin, w.orientation)).collect();
        assert_eq!(
            words,
            HashSet::from([
                ("livid".to_string(), Position::new(0, 0), Orientation::Horizontal),
                ("livid".to_string(), Position::new(0, 0), Orientation::Vertical),
                ("it".to_string(), Position::new(1, 0), Orientation::Vertical),
                ("it".to_string(), Position::new(0, 1), Orientation::Horizontal),
            ])
        );
    }

    #[test]
    fn single_letter_cell_yields_no_word() {
        let mut grid = Grid::new(10);
        let d = dict(&["ab"]);
        grid.place(Position::new(0, 0), Orientation::Horizontal, "ab", &d)
            .unwrap();
        let words = scan(&grid);
        assert!(words.iter().all(|w| w.len() >= 2));
    }
}
