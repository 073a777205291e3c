//! This module contains the logic for solving Sudoku grids and counting
//! their solutions.
//!
//! Most importantly, this module contains the definition of the
//! [count_solutions] function, which powers the uniqueness check during
//! puzzle generation, and the [BacktrackingSolver], which finds the solution
//! of a uniquely solvable grid.

use crate::sudoku::{SudokuGrid, SIZE};

/// An enumeration of the different ways a Sudoku grid can be solvable, as
/// determined by the [BacktrackingSolver].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid is not solvable at all.
    Impossible,

    /// Indicates that the grid has a unique solution, which is wrapped in
    /// this instance.
    Unique(SudokuGrid),

    /// Indicates that the grid has multiple solutions.
    Ambiguous
}

fn find_empty_cell(grid: &SudokuGrid) -> Option<(usize, usize)> {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if grid.get_cell(column, row).unwrap().is_none() {
                return Some((column, row));
            }
        }
    }

    None
}

fn count_rec(grid: &mut SudokuGrid, limit: usize, count: usize,
        first: &mut Option<SudokuGrid>) -> usize {
    if count >= limit {
        return count;
    }

    let (column, row) = match find_empty_cell(grid) {
        Some(cell) => cell,
        None => {
            if first.is_none() {
                *first = Some(grid.clone());
            }

            return count + 1;
        }
    };

    let mut count = count;

    for number in 1..=SIZE {
        if grid.is_valid_number(column, row, number).unwrap() {
            grid.set_cell(column, row, number).unwrap();
            count = count_rec(grid, limit, count, first);
            grid.clear_cell(column, row).unwrap();

            if count >= limit {
                break;
            }
        }
    }

    count
}

/// Counts the solutions of the given grid by exhaustive backtracking,
/// stopping as soon as `limit` solutions have been found. The first empty
/// cell in left-to-right, top-to-bottom order is always filled first, with
/// candidate digits tried in ascending order.
///
/// The limit keeps uniqueness checks cheap: deciding whether a grid has
/// exactly one solution only requires searching until a second one turns up,
/// so puzzle generation calls this with a limit of 2. The result is the
/// number of solutions found, which is capped at `limit`.
///
/// This function is total over any grid state and works on a copy of the
/// grid, leaving the input untouched.
pub fn count_solutions(grid: &SudokuGrid, limit: usize) -> usize {
    let mut grid = grid.clone();
    let mut first = None;
    count_rec(&mut grid, limit, 0, &mut first)
}

/// Indicates whether the given grid has exactly one completion under Sudoku
/// rules. This is the defining property of a well-formed puzzle.
pub fn has_unique_solution(grid: &SudokuGrid) -> bool {
    count_solutions(grid, 2) == 1
}

/// A perfect solver which solves Sudoku grids by recursively testing all
/// valid digits for each cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// grid has many missing digits.
/// * It can provide the correct [Solution] for any grid.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Solves the provided grid. If it has exactly one completion, that
    /// completion is wrapped in [Solution::Unique]; grids with no or more
    /// than one completion yield [Solution::Impossible] and
    /// [Solution::Ambiguous] respectively.
    pub fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut grid = grid.clone();
        let mut first = None;

        match count_rec(&mut grid, 2, 0, &mut first) {
            0 => Solution::Impossible,
            1 => Solution::Unique(first.unwrap()),
            _ => Solution::Ambiguous
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // The classic example puzzle used by most Sudoku references.

    const EXAMPLE_PUZZLE: &str = "\
        5,3, , ,7, , , , ,\
        6, , ,1,9,5, , , ,\
         ,9,8, , , , ,6, ,\
        8, , , ,6, , , ,3,\
        4, , ,8, ,3, , ,1,\
        7, , , ,2, , , ,6,\
         ,6, , , , ,2,8, ,\
         , , ,4,1,9, , ,5,\
         , , , ,8, , ,7,9";

    const EXAMPLE_SOLUTION: &str = "\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    #[test]
    fn solves_classic_puzzle() {
        let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        let expected = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();

        assert_eq!(Solution::Unique(expected),
            BacktrackingSolver.solve(&puzzle));
    }

    #[test]
    fn solving_leaves_input_unchanged() {
        let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        let copy = puzzle.clone();
        BacktrackingSolver.solve(&puzzle);
        assert_eq!(copy, puzzle);
    }

    #[test]
    fn full_grid_has_one_solution() {
        let solution = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();
        assert_eq!(1, count_solutions(&solution, 2));
        assert!(has_unique_solution(&solution));
    }

    #[test]
    fn contradictory_grid_impossible() {
        // (8, 0) has no candidate: its row blocks 1 to 8 and its column
        // blocks 9. Every given is individually valid, so this exercises the
        // search rather than an input check.
        let grid = SudokuGrid::parse("\
            1,2,3,4,5,6,7,8, ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , ,9,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ").unwrap();

        assert!(grid.is_valid());
        assert_eq!(0, count_solutions(&grid, 2));
        assert_eq!(Solution::Impossible, BacktrackingSolver.solve(&grid));
    }

    #[test]
    fn two_completions_counted_exactly() {
        // Clearing the corners of a deadly rectangle leaves exactly two
        // completions. In EXAMPLE_SOLUTION, rows 3 and 4 hold the digits 1
        // and 3 crosswise in columns 5 and 8, whose cells pair up into the
        // same two boxes, so swapping them yields the only other completion.
        let mut grid = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();
        grid.clear_cell(5, 3).unwrap();
        grid.clear_cell(8, 3).unwrap();
        grid.clear_cell(5, 4).unwrap();
        grid.clear_cell(8, 4).unwrap();

        assert_eq!(2, count_solutions(&grid, 10));
        assert_eq!(2, count_solutions(&grid, 2));
        assert_eq!(1, count_solutions(&grid, 1));
        assert_eq!(Solution::Ambiguous, BacktrackingSolver.solve(&grid));
        assert!(!has_unique_solution(&grid));
    }

    #[test]
    fn early_termination_caps_count() {
        let empty = SudokuGrid::new_empty();

        // An empty grid has an astronomical number of solutions; the limit
        // must cap the search rather than enumerate them.
        assert_eq!(2, count_solutions(&empty, 2));
        assert_eq!(Solution::Ambiguous, BacktrackingSolver.solve(&empty));
        assert!(!has_unique_solution(&empty));
    }
}
