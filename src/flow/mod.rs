//! This module contains the Flow engine: the [FlowBoard] data structure, the
//! fixed color palette, and the [FlowPuzzle] produced by the [generator].
//!
//! Randomized board generation lives in the [generator] module, win checking
//! of player grids in the [check] module.

pub mod check;
pub mod generator;

use crate::error::{
    FlowError,
    FlowResult,
    GridParseError,
    GridParseResult
};

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// One of the fixed palette of colors that can occupy Flow board cells. The
/// palette order determines which colors a
/// [BoardGenerator](generator::BoardGenerator) uses when fewer than all
/// colors are requested.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Color {

    /// Displayed as `R`.
    Red,

    /// Displayed as `G`.
    Green,

    /// Displayed as `B`.
    Blue,

    /// Displayed as `O`.
    Orange,

    /// Displayed as `C`.
    Cyan,

    /// Displayed as `P`.
    Purple,

    /// Displayed as `Y`.
    Yellow
}

impl Color {

    /// All colors in palette order.
    pub const PALETTE: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Cyan,
        Color::Purple,
        Color::Yellow
    ];

    /// Gets the single uppercase letter representing this color in board
    /// codes and pretty prints.
    pub fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Cyan => 'C',
            Color::Purple => 'P',
            Color::Yellow => 'Y'
        }
    }

    /// Parses the color represented by the given letter, ignoring case. If
    /// the letter does not name a palette color, `None` is returned.
    pub fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'O' => Some(Color::Orange),
            'C' => Some(Color::Cyan),
            'P' => Some(Color::Purple),
            'Y' => Some(Color::Yellow),
            _ => None
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rectangular Flow board whose cells may or may not be occupied by a
/// [Color]. The same type represents filled boards (no empty cell, as
/// produced by generation), starting boards (endpoint dots only), and player
/// grids in any intermediate state.
///
/// Boards can be parsed from and printed to a code of the form
/// `<columns>x<rows>;<cells>`, see [FlowBoard::parse]. `Display`
/// pretty-prints one row of color letters per line, with `.` for empty
/// cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct FlowBoard {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Color>>
}

fn parse_dimensions(code: &str) -> GridParseResult<(usize, usize)> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 2 {
        return Err(GridParseError::MalformedDimensions);
    }

    Ok((parts[0].trim().parse()?, parts[1].trim().parse()?))
}

impl FlowBoard {

    /// Creates a new, empty board with the given dimensions.
    ///
    /// # Arguments
    ///
    /// * `columns`: The number of columns (width) of the board. Must be
    /// greater than 0.
    /// * `rows`: The number of rows (height) of the board. Must be greater
    /// than 0.
    ///
    /// # Errors
    ///
    /// If `columns` or `rows` is zero. In that case,
    /// `FlowError::InvalidParameters` is returned.
    pub fn new_empty(columns: usize, rows: usize) -> FlowResult<FlowBoard> {
        if columns == 0 || rows == 0 {
            return Err(FlowError::InvalidParameters);
        }

        Ok(FlowBoard {
            columns,
            rows,
            cells: vec![None; columns * rows]
        })
    }

    /// Parses a code encoding a Flow board. The code has to be of the format
    /// `<columns>x<rows>;<cells>` where `<cells>` is a comma-separated list
    /// of entries, which are either empty or a color letter (see
    /// [Color::to_char]). The entries are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. Whitespace in the entries is ignored.
    ///
    /// As an example, the code `3x1;R,R,R` parses to a board with a single
    /// row of three red cells.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<FlowBoard> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(GridParseError::WrongNumberOfParts);
        }

        let (columns, rows) = parse_dimensions(parts[0])?;
        let mut board = FlowBoard::new_empty(columns, rows)
            .map_err(|_| GridParseError::InvalidDimensions)?;
        let entries: Vec<&str> = parts[1].split(',').collect();

        if entries.len() != columns * rows {
            return Err(GridParseError::WrongNumberOfCells);
        }

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let mut chars = entry.chars();
            let color = match (chars.next(), chars.next()) {
                (Some(c), None) => Color::from_char(c),
                _ => None
            };

            board.cells[i] = Some(color
                .ok_or(GridParseError::InvalidColor)?);
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [FlowBoard::parse]. That is, a board that is converted to a string
    /// and parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{}x{};", self.columns, self.rows);
        let cells = self.cells.iter()
            .map(|cell| match cell {
                Some(color) => color.to_char().to_string(),
                None => String::from("")
            })
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the number of columns (width) of this board.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Gets the number of rows (height) of this board.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, column: usize, row: usize) -> FlowResult<usize> {
        if column >= self.columns || row >= self.rows {
            Err(FlowError::OutOfBounds)
        }
        else {
            Ok(row * self.columns + column)
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, columns[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, rows[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `FlowError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> FlowResult<Option<Color>> {
        Ok(self.cells[self.index(column, row)?])
    }

    /// Sets the content of the cell at the specified position to the given
    /// color. If the cell was not empty, the old color will be overwritten.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `FlowError::OutOfBounds` is returned.
    pub fn set_cell(&mut self, column: usize, row: usize, color: Color)
            -> FlowResult<()> {
        let index = self.index(column, row)?;
        self.cells[index] = Some(color);
        Ok(())
    }

    /// Clears the content of the cell at the specified position. If the cell
    /// is already empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `FlowError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> FlowResult<()> {
        let index = self.index(column, row)?;
        self.cells[index] = None;
        Ok(())
    }

    /// Indicates whether this board is full, i.e. every cell is occupied by
    /// a color.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Gets the coordinates of all empty cells in left-to-right,
    /// top-to-bottom order, in the form `(column, row)`.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();

        for row in 0..self.rows {
            for column in 0..self.columns {
                if self.get_cell(column, row).unwrap().is_none() {
                    empty.push((column, row));
                }
            }
        }

        empty
    }

    /// Counts how often each color occurs on this board. Colors that do not
    /// occur are absent from the result.
    pub fn color_counts(&self) -> HashMap<Color, usize> {
        let mut counts = HashMap::new();

        for cell in &self.cells {
            if let Some(color) = cell {
                *counts.entry(*color).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Gets the coordinates of all orthogonal neighbors of the specified
    /// cell that lie within the board, in the form `(column, row)`. Interior
    /// cells have four neighbors, edge and corner cells fewer.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `FlowError::OutOfBounds` is returned.
    pub fn neighbors(&self, column: usize, row: usize)
            -> FlowResult<Vec<(usize, usize)>> {
        self.index(column, row)?;
        let mut neighbors = Vec::with_capacity(4);

        if row > 0 {
            neighbors.push((column, row - 1));
        }

        if row + 1 < self.rows {
            neighbors.push((column, row + 1));
        }

        if column > 0 {
            neighbors.push((column - 1, row));
        }

        if column + 1 < self.columns {
            neighbors.push((column + 1, row));
        }

        Ok(neighbors)
    }

    /// Counts the orthogonal neighbors of the specified cell which hold the
    /// given color.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `FlowError::OutOfBounds` is returned.
    pub fn neighbors_of_color(&self, column: usize, row: usize, color: Color)
            -> FlowResult<usize> {
        Ok(self.neighbors(column, row)?.into_iter()
            .filter(|&(c, r)| self.get_cell(c, r).unwrap() == Some(color))
            .count())
    }

    /// Counts the orthogonal neighbors of the specified cell which hold the
    /// same color as the cell itself. For empty cells, this is 0.
    ///
    /// A cell of a filled board is an *endpoint* of its color's path if and
    /// only if this count is exactly 1.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are out of bounds. In that case,
    /// `FlowError::OutOfBounds` is returned.
    pub fn same_color_neighbors(&self, column: usize, row: usize)
            -> FlowResult<usize> {
        match self.get_cell(column, row)? {
            Some(color) => self.neighbors_of_color(column, row, color),
            None => Ok(0)
        }
    }
}

impl Display for FlowBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                match self.get_cell(column, row).unwrap() {
                    Some(color) => write!(f, "{}", color.to_char())?,
                    None => write!(f, ".")?
                }
            }

            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl From<FlowBoard> for String {
    fn from(board: FlowBoard) -> String {
        board.to_parseable_string()
    }
}

impl TryFrom<String> for FlowBoard {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<FlowBoard> {
        FlowBoard::parse(code.as_str())
    }
}

/// A playable Flow puzzle as produced by a
/// [BoardGenerator](generator::BoardGenerator). It bundles the starting
/// board presented to the player, which contains only the two endpoint dots
/// of each color, and the filled board it was derived from, which is
/// retained for the lifetime of the puzzle to support showing the solution.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FlowPuzzle {
    filled: FlowBoard,
    starting: FlowBoard
}

impl FlowPuzzle {

    pub(crate) fn new(filled: FlowBoard, starting: FlowBoard) -> FlowPuzzle {
        FlowPuzzle {
            filled,
            starting
        }
    }

    /// Gets a reference to the fully tiled board, which is one solution to
    /// this puzzle.
    pub fn filled(&self) -> &FlowBoard {
        &self.filled
    }

    /// Gets a reference to the starting board, which contains exactly the
    /// endpoint cells of each color.
    pub fn starting(&self) -> &FlowBoard {
        &self.starting
    }
}
