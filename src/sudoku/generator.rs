//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done in two steps: first a full grid is generated by a
//! [Generator], then a [Reducer] removes clues one at a time, keeping a
//! removal only if the remaining grid still has a unique solution. The
//! result is a [Puzzle](crate::sudoku::Puzzle) bundling the playable grid,
//! its solution, and the given-flags.

use crate::sudoku::{Puzzle, SudokuGrid, SIZE};
use crate::sudoku::solver;
use crate::error::{SudokuError, SudokuResult};

use rand::Rng;
use rand::rngs::ThreadRng;

use rand_distr::Normal;

use std::f64::consts;

/// The number of cells a [Reducer] with default settings attempts to remove.
/// Values between 40 and 60 give reasonable difficulty; if uniqueness
/// prevents reaching the target, the puzzle simply keeps more givens.
pub const DEFAULT_TARGET_REMOVALS: usize = 50;

fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len.saturating_sub(1)) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates a full [SudokuGrid], that is, a grid with
/// no missing digits. It uses a random number generator to decide the
/// content; every call therefore produces a different grid. For most cases,
/// sensible defaults are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SIZE) {
            if grid.is_valid_number(column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits that satisfy the
    /// Sudoku rules and match all already present digits. Cells are
    /// considered in left-to-right, top-to-bottom order and candidate digits
    /// are tried in freshly shuffled order per cell, so all completions are
    /// reachable.
    ///
    /// If no error is returned, it is guaranteed that
    /// [SudokuGrid::is_valid] on `grid` returns `true` after this operation
    /// and the grid is full. Otherwise, it remains unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsatisfiable` If the digits already present in the
    /// grid admit no completion under Sudoku rules.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::Unsatisfiable)
        }
    }

    /// Generates a new random full [SudokuGrid]. Since an empty grid always
    /// has completions, this operation cannot fail, unlike [Generator::fill]
    /// applied to a partial grid.
    pub fn generate(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::new_empty();
        let filled = self.fill_rec(&mut grid, 0, 0);
        debug_assert!(filled, "empty grid could not be filled");
        grid
    }
}

/// A trait for types which can prioritize the order in which cell removals
/// shall be attempted by a [Reducer]. Note that there is some random element
/// to the ordering (see [RemovalPrioritizer::rough_priority] for details on
/// the mathematics). It is blanket-implemented for all types implementing
/// `Fn(&(usize, usize)) -> f64`.
pub trait RemovalPrioritizer {

    /// Determines the approximate priority of removing the cell at the given
    /// `(column, row)` position. Lower numbers indicate cells that are
    /// attempted first. When determining the order of two removals, each of
    /// these scores is added to a normally distributed random number with a
    /// standard deviation of `1 / sqrt(2)`. The removal with the lower sum
    /// will be attempted first.
    ///
    /// For simple priorization where all removals of some kind are attempted
    /// first, separate them by differences of at least 10 to ensure a
    /// negligible probability of overlap. Equal scores everywhere degenerate
    /// to a uniformly random removal order.
    ///
    /// This method must _always_ return finite numbers or infinities.
    fn rough_priority(&mut self, cell: &(usize, usize)) -> f64;
}

struct EqualPrioritizer;

impl RemovalPrioritizer for EqualPrioritizer {
    fn rough_priority(&mut self, _: &(usize, usize)) -> f64 {
        0.0
    }
}

impl<F: Fn(&(usize, usize)) -> f64> RemovalPrioritizer for F {
    fn rough_priority(&mut self, cell: &(usize, usize)) -> f64 {
        self(cell)
    }
}

fn prioritize<P, R>(cell: &(usize, usize), prioritizer: &mut P, rng: &mut R)
    -> f64
where
    P: RemovalPrioritizer,
    R: Rng
{
    let distr = Normal::new(0.0, consts::FRAC_1_SQRT_2).unwrap();
    prioritizer.rough_priority(cell) + rng.sample(distr)
}

fn cell_coordinates() -> impl Iterator<Item = (usize, usize)> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE)
            .map(move |column| (column, row)))
}

/// A reducer derives a playable [Puzzle] from the output of a [Generator] by
/// removing digits from the grid as long as it stays uniquely solvable,
/// which is verified by [solution counting](solver::count_solutions) with
/// early termination. A random number generator decides which digits are
/// removed.
///
/// [Reducer::new_default] yields a reducer which attempts
/// [DEFAULT_TARGET_REMOVALS] removals using a [ThreadRng].
pub struct Reducer<R: Rng> {
    rng: R,
    target_removals: usize
}

impl Reducer<ThreadRng> {

    /// Creates a new reducer with a [ThreadRng] to decide which digits are
    /// removed and a removal target of [DEFAULT_TARGET_REMOVALS].
    pub fn new_default() -> Reducer<ThreadRng> {
        Reducer::new(rand::thread_rng(), DEFAULT_TARGET_REMOVALS)
    }
}

impl<R: Rng> Reducer<R> {

    /// Creates a new reducer with the given random number generator and
    /// removal target.
    ///
    /// # Arguments
    ///
    /// * `rng`: A random number generator that decides which digits are
    /// removed.
    /// * `target_removals`: The number of successful removals after which
    /// the reducer stops. The actual number of removals may be lower if
    /// uniqueness constraints reject too many candidates.
    pub fn new(rng: R, target_removals: usize) -> Reducer<R> {
        Reducer {
            rng,
            target_removals
        }
    }

    /// Derives a [Puzzle] from the given full `solution` grid. Cell removals
    /// are attempted in fully random order; each removal is kept only if the
    /// remaining grid still has exactly one solution, and reverted
    /// otherwise. The reducer stops after its removal target is reached or
    /// all cells have been attempted.
    ///
    /// It is expected that the given `solution` is full and valid, as
    /// produced by [Generator::generate].
    pub fn reduce(&mut self, solution: SudokuGrid) -> Puzzle {
        self.reduce_with_priority(solution, EqualPrioritizer)
    }

    /// Derives a [Puzzle] from the given full `solution` grid like
    /// [Reducer::reduce], but the order in which cell removals are attempted
    /// is influenced by the given `prioritizer`. See the documentation of
    /// [RemovalPrioritizer].
    pub fn reduce_with_priority<P>(&mut self, solution: SudokuGrid,
        mut prioritizer: P) -> Puzzle
    where
        P: RemovalPrioritizer
    {
        let mut removals = cell_coordinates()
            .map(|cell| (prioritize(&cell, &mut prioritizer, &mut self.rng),
                cell))
            .collect::<Vec<_>>();
        removals.sort_by(|(p1, _), (p2, _)| p1.partial_cmp(p2).unwrap());

        let mut puzzle = solution.clone();
        let mut removed = 0;

        for (_, (column, row)) in removals {
            if removed >= self.target_removals {
                break;
            }

            let number = puzzle.get_cell(column, row).unwrap().unwrap();
            puzzle.clear_cell(column, row).unwrap();

            if solver::has_unique_solution(&puzzle) {
                removed += 1;
            }
            else {
                puzzle.set_cell(column, row, number).unwrap();
            }
        }

        Puzzle::new(puzzle, solution)
    }
}

/// Generates a random Sudoku [Puzzle] with default settings: a fresh random
/// solution grid reduced by [DEFAULT_TARGET_REMOVALS] removal attempts. The
/// result is guaranteed to have exactly one completion, which is the bundled
/// solution.
pub fn generate_puzzle() -> Puzzle {
    let solution = Generator::new_default().generate();
    Reducer::new_default().reduce(solution)
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::sudoku::CELL_COUNT;
    use crate::sudoku::solver::{BacktrackingSolver, Solution};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut result = shuffle(&mut rng, 1..=9);
        result.sort();
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], result);
    }

    #[test]
    fn shuffle_reproducible_from_seed() {
        let mut rng_1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng_2 = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(shuffle(&mut rng_1, 0..81), shuffle(&mut rng_2, 0..81));
    }

    #[test]
    fn shuffle_handles_empty_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(Vec::<usize>::new(), shuffle(&mut rng, 0..0));
    }

    #[test]
    fn generated_grid_valid_and_full() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(123));
        let grid = generator.generate();

        assert!(grid.is_full(), "Generated grid is not full.");
        assert!(grid.is_valid(), "Generated grid not valid.");
    }

    #[test]
    fn generation_reproducible_from_seed() {
        let mut generator_1 = Generator::new(ChaCha8Rng::seed_from_u64(99));
        let mut generator_2 = Generator::new(ChaCha8Rng::seed_from_u64(99));
        assert_eq!(generator_1.generate(), generator_2.generate());
    }

    #[test]
    fn filled_grid_keeps_digits() {
        let mut grid = SudokuGrid::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9").unwrap();
        let mut generator = Generator::new_default();
        generator.fill(&mut grid).unwrap();

        assert!(grid.is_valid());
        assert!(grid.is_full());
        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(7), grid.get_cell(4, 0).unwrap());
        assert_eq!(Some(9), grid.get_cell(1, 2).unwrap());
        assert_eq!(Some(9), grid.get_cell(8, 8).unwrap());
    }

    #[test]
    fn unsatisfiable_fill_is_not_changed() {
        // (8, 0) admits no digit: the row blocks 1 to 8, the column blocks 9
        let mut grid = SudokuGrid::parse("\
            1,2,3,4,5,6,7,8, ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , ,9,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ,\
             , , , , , , , , ").unwrap();
        let mut generator = Generator::new_default();
        let grid_before = grid.clone();
        let result = generator.fill(&mut grid);

        assert_eq!(Err(SudokuError::Unsatisfiable), result);
        assert_eq!(grid_before, grid);
    }

    fn reduce_seeded(seed: u64) -> Puzzle {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(seed));
        let solution = generator.generate();
        let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(seed),
            DEFAULT_TARGET_REMOVALS);
        reducer.reduce(solution)
    }

    #[test]
    fn reduced_puzzle_uniquely_solvable() {
        let puzzle = reduce_seeded(1);

        assert_eq!(1, solver::count_solutions(puzzle.puzzle(), 2),
            "Reduced puzzle not uniquely solvable.");
        assert_eq!(Solution::Unique(puzzle.solution().clone()),
            BacktrackingSolver.solve(puzzle.puzzle()));
    }

    #[test]
    fn reduced_puzzle_subset_of_solution() {
        let puzzle = reduce_seeded(2);

        assert!(puzzle.puzzle().is_subset(puzzle.solution()));
        assert!(puzzle.solution().is_full());
        assert!(puzzle.solution().is_valid());
    }

    #[test]
    fn reduced_puzzle_clue_count_in_range() {
        let puzzle = reduce_seeded(3);
        let clues = puzzle.puzzle().count_clues();

        assert!(clues >= CELL_COUNT - DEFAULT_TARGET_REMOVALS,
            "Reducer removed more cells than its target.");
        assert!(clues < CELL_COUNT, "Reducer removed no cell at all.");
    }

    #[test]
    fn reduced_puzzle_givens_match_grid() {
        let puzzle = reduce_seeded(4);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let filled =
                    puzzle.puzzle().get_cell(column, row).unwrap().is_some();
                assert_eq!(filled, puzzle.is_given(column, row).unwrap());
            }
        }
    }

    #[test]
    fn zero_target_keeps_full_grid() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(5));
        let solution = generator.generate();
        let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(5), 0);
        let puzzle = reducer.reduce(solution.clone());

        assert_eq!(&solution, puzzle.puzzle());
        assert!(puzzle.givens().iter().all(|&given| given));
    }

    #[test]
    fn reducer_respects_priorization() {
        // Any single removal from a full grid keeps the solution unique, so
        // with a target of 1 the cell with overwhelming priority must be the
        // one that gets cleared.
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(6));
        let solution = generator.generate();
        let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(6), 1);
        let puzzle = reducer.reduce_with_priority(solution,
            |&(column, row): &(usize, usize)|
                if (column, row) == (4, 4) { -1000.0 } else { 0.0 });

        assert_eq!(None, puzzle.puzzle().get_cell(4, 4).unwrap());
        assert_eq!(CELL_COUNT - 1, puzzle.puzzle().count_clues());
    }

    #[test]
    fn generate_puzzle_produces_consistent_bundle() {
        let puzzle = generate_puzzle();

        assert!(puzzle.puzzle().is_subset(puzzle.solution()));
        assert!(puzzle.solution().is_valid());
        assert!(puzzle.is_valid_solution(puzzle.solution()));
        assert_eq!(1, solver::count_solutions(puzzle.puzzle(), 2));
    }
}
