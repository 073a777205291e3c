//! This module contains the Sudoku engine: the [SudokuGrid] data structure,
//! validity checking according to classic Sudoku rules, and the [Puzzle]
//! produced by the [generator].
//!
//! Solving and solution counting live in the [solver] module, random
//! generation and clue removal in the [generator] module.

pub mod generator;
pub mod solver;

use crate::error::{
    GridParseError,
    GridParseResult,
    SudokuError,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of a Sudoku grid.
pub const SIZE: usize = 9;

/// The number of cells along one axis of a box (sub-square) of a Sudoku grid.
pub const BOX_SIZE: usize = 3;

/// The total number of cells of a Sudoku grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn check_coordinates(column: usize, row: usize) -> SudokuResult<()> {
    if column >= SIZE || row >= SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

/// A 9x9 Sudoku grid. Each cell may or may not be occupied by a digit from 1
/// to 9. The grid tracks only cell contents; whether a configuration is
/// allowed by the rules is queried through [SudokuGrid::is_valid_number] and
/// related methods.
///
/// Grids can be parsed from and printed to a comma-separated code, see
/// [SudokuGrid::parse]. `Display` pretty-prints the grid using box-drawing
/// characters:
///
/// ```text
/// ╔═══╤═══╤═══╦═
/// ║ 5 │ 3 │   ║ …
/// ╟───┼───┼───╫─
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = line('╔', '╦', '╤', |_| '═', '═', '╗', true);
        let thin_separator = line('╟', '╫', '┼', |_| '─', '─', '╢', true);
        let thick_separator = line('╠', '╬', '╪', |_| '═', '═', '╣', true);
        let bottom_row = line('╚', '╩', '╧', |_| '═', '═', '╝', false);

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator.as_str())?;
            }
            else {
                f.write_str(thin_separator.as_str())?;
            }

            let content = line('║', '║', '│',
                |x| to_char(self.get_cell(x, y).unwrap()), ' ', '║', true);
            f.write_str(content.as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new_empty() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries is
    /// ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code `5,3, , ,7, , , , ,6,…` starts a grid whose
    /// first row is `5 3 _ _ 7 _ _ _ _`.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new_empty();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        check_coordinates(column, row)?;
        Ok(self.cells[index(column, row)])
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are greater
    /// than 8.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, 9]`.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        check_coordinates(column, row)?;

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        check_coordinates(column, row)?;
        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        other_cell == &Some(*self_number),
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location, that is, whether it appears neither in the cell's row,
    /// nor its column, nor the 3x3 box containing the cell. The cell itself
    /// is excluded, so a number already present in the checked cell is not
    /// reported as its own duplicate. This method does not change the grid.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is valid in the given cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are greater
    /// than 8.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, 9]`.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        check_coordinates(column, row)?;

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        for i in 0..SIZE {
            if i != column && self.has_number(i, row, number)? {
                return Ok(false);
            }

            if i != row && self.has_number(column, i, number)? {
                return Ok(false);
            }
        }

        let box_column = column / BOX_SIZE * BOX_SIZE;
        let box_row = row / BOX_SIZE * BOX_SIZE;

        for r in box_row..(box_row + BOX_SIZE) {
            for c in box_column..(box_column + BOX_SIZE) {
                if (c, r) != (column, row) &&
                        self.has_number(c, r, number)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Indicates whether the cell at the given location matches the rules,
    /// that is, its content (if any) does not repeat in the cell's row,
    /// column, or box. Empty cells are always valid.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if let Some(number) = self.get_cell(column, row)? {
            self.is_valid_number(column, row, number)
        }
        else {
            Ok(true)
        }
    }

    /// Indicates whether the entire grid matches the rules, i.e. no digit
    /// repeats in any row, column, or box. Full valid grids therefore contain
    /// each of 1 to 9 exactly once per row, column, and box.
    pub fn is_valid(&self) -> bool {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if !self.is_valid_cell(column, row).unwrap() {
                    return false;
                }
            }
        }

        true
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

/// A playable Sudoku puzzle as produced by a
/// [Reducer](generator::Reducer). It bundles the puzzle grid itself, the
/// unique solution it was derived from, and the given-flags marking the cells
/// that are pre-filled and immutable to the player.
///
/// The puzzle grid is a subset of the solution and, at generation time, has
/// exactly one completion under Sudoku rules. The given-flags are computed
/// once, after clue removal has finished, and are never recomputed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    puzzle: SudokuGrid,
    solution: SudokuGrid,
    givens: Vec<bool>
}

impl Puzzle {

    pub(crate) fn new(puzzle: SudokuGrid, solution: SudokuGrid) -> Puzzle {
        let givens = puzzle.cells.iter()
            .map(|cell| cell.is_some())
            .collect();

        Puzzle {
            puzzle,
            solution,
            givens
        }
    }

    /// Gets a reference to the playable grid, where removed cells are empty.
    pub fn puzzle(&self) -> &SudokuGrid {
        &self.puzzle
    }

    /// Gets a reference to the full solution grid this puzzle was derived
    /// from.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }

    /// Gets the given-flags of all cells in left-to-right, top-to-bottom
    /// order, where rows are together. A cell is a given if and only if it is
    /// filled in the puzzle grid.
    pub fn givens(&self) -> &Vec<bool> {
        &self.givens
    }

    /// Indicates whether the cell at the specified position is a given, i.e.
    /// pre-filled and immutable to the player.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, column: usize, row: usize) -> SudokuResult<bool> {
        check_coordinates(column, row)?;
        Ok(self.givens[index(column, row)])
    }

    /// Indicates whether the given [SudokuGrid] is a valid solution to this
    /// puzzle. That is the case if all givens of this puzzle can be found in
    /// the `candidate`, it matches the rules, and it is full.
    pub fn is_valid_solution(&self, candidate: &SudokuGrid) -> bool {
        self.puzzle.is_subset(candidate) &&
            candidate.is_valid() &&
            candidate.is_full()
    }
}
