//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods of the
/// [sudoku](crate::sudoku) module. This does not exclude errors that occur
/// when parsing grids, see [GridParseError](enum.GridParseError.html) for
/// that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some digit is invalid for a Sudoku grid, that is, it is
    /// less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the grid size.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to fill a partial
    /// grid whose present digits admit no completion under Sudoku rules.
    Unsatisfiable
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code,
/// either for a [SudokuGrid](crate::sudoku::SudokuGrid) or a
/// [FlowBoard](crate::flow::FlowBoard).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. A Flow board code should have two parts:
    /// dimensions and cells, so if the code does not contain exactly one
    /// semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number required by the grid being parsed.
    WrongNumberOfCells,

    /// Indicates that the dimensions of a Flow board code have the wrong
    /// format. They should be of the form `<columns>x<rows>`, so if the
    /// amount of 'x's in the dimension string is not exactly one, this error
    /// will be raised.
    MalformedDimensions,

    /// Indicates that the provided dimensions are invalid (i.e. at least one
    /// is zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (dimension or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid digit (0 or more than
    /// 9).
    InvalidNumber,

    /// Indicates that a cell of a Flow board code contains a letter which
    /// does not name a color of the palette.
    InvalidColor
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfParts =>
                write!(f, "wrong number of parts"),
            GridParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            GridParseError::MalformedDimensions =>
                write!(f, "malformed dimensions"),
            GridParseError::InvalidDimensions =>
                write!(f, "invalid dimensions"),
            GridParseError::NumberFormatError =>
                write!(f, "number format error"),
            GridParseError::InvalidNumber =>
                write!(f, "invalid number"),
            GridParseError::InvalidColor =>
                write!(f, "invalid color")
        }
    }
}

/// An enumeration of the errors that can occur on methods of the
/// [flow](crate::flow) module. Note that [FlowError::Timeout] is an expected
/// outcome of the randomized generator, not an exceptional condition -
/// callers should surface it as "try again".
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FlowError {

    /// Indicates that the parameters given to a
    /// [BoardGenerator](crate::flow::generator::BoardGenerator) cannot
    /// produce any board: a dimension is zero, no colors were requested, or
    /// more colors were requested than the palette holds or than there are
    /// cells to seed.
    InvalidParameters,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the board in question.
    OutOfBounds,

    /// Indicates that the generator's wall-clock budget expired before any
    /// random walk tiled the entire board. No partial board is ever returned
    /// in this case.
    Timeout
}

/// Syntactic sugar for `Result<V, FlowError>`.
pub type FlowResult<V> = Result<V, FlowError>;
