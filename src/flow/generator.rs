//! This module contains logic for generating random Flow puzzles.
//!
//! Generation repeatedly attempts to tile the whole board with
//! self-avoiding paths, one per color, and accepts the first attempt that
//! fills every cell while giving each color a path of at least
//! [MIN_COLOR_CELLS] cells. Attempts are cheap and most of them fail, so
//! the [BoardGenerator] retries in a loop that is bounded by a wall-clock
//! timeout rather than an attempt count.

use crate::error::{FlowError, FlowResult};
use crate::flow::{Color, FlowBoard, FlowPuzzle};

use rand::Rng;
use rand::rngs::ThreadRng;

use std::time::{Duration, Instant};

/// The minimum number of cells each color's path must cover for a filled
/// board to be accepted.
pub const MIN_COLOR_CELLS: usize = 3;

/// The default wall-clock budget for a single [BoardGenerator::generate]
/// call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A move that extends the path of one color by one cell. `to` is an empty
/// orthogonal neighbor, in the form `(column, row)`, of an already-occupied
/// cell of that color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Extension {
    color: Color,
    to: (usize, usize)
}

/// A generator of random Flow puzzles, which uses a random number generator
/// of a given type to tile boards with self-avoiding paths. The starting
/// board handed to the player is derived from the filled board by keeping
/// only the cells at which each color's path ends.
pub struct BoardGenerator<R: Rng> {
    rng: R,
    columns: usize,
    rows: usize,
    num_colors: usize,
    timeout: Duration
}

impl BoardGenerator<ThreadRng> {

    /// Creates a new board generator that uses a [ThreadRng] and the
    /// [DEFAULT_TIMEOUT].
    ///
    /// # Arguments
    ///
    /// * `columns`: The number of columns (width) of generated boards.
    /// * `rows`: The number of rows (height) of generated boards.
    /// * `num_colors`: The number of distinct colors whose paths tile
    /// generated boards. Colors are taken from [Color::PALETTE] in order.
    ///
    /// # Errors
    ///
    /// If the parameters are rejected as specified in [BoardGenerator::new].
    pub fn new_default(columns: usize, rows: usize, num_colors: usize)
            -> FlowResult<BoardGenerator<ThreadRng>> {
        BoardGenerator::new(rand::thread_rng(), columns, rows, num_colors,
            DEFAULT_TIMEOUT)
    }
}

impl<R: Rng> BoardGenerator<R> {

    /// Creates a new board generator that uses the given random number
    /// generator and timeout.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator which makes the decisions during
    /// board generation.
    /// * `columns`: The number of columns (width) of generated boards. Must
    /// be greater than 0.
    /// * `rows`: The number of rows (height) of generated boards. Must be
    /// greater than 0.
    /// * `num_colors`: The number of distinct colors whose paths tile
    /// generated boards. Must be greater than 0, at most the palette size,
    /// and at most the number of cells on the board.
    /// * `timeout`: The wall-clock budget for each
    /// [BoardGenerator::generate] call.
    ///
    /// # Errors
    ///
    /// If any of the conditions listed above is violated. In that case,
    /// `FlowError::InvalidParameters` is returned. Note that parameters
    /// which pass this check may still be infeasible, such as requesting
    /// more colors than fit on the board with [MIN_COLOR_CELLS] cells each.
    /// Generation with infeasible parameters fails with
    /// `FlowError::Timeout` once the budget is exhausted.
    pub fn new(rng: R, columns: usize, rows: usize, num_colors: usize,
            timeout: Duration) -> FlowResult<BoardGenerator<R>> {
        if columns == 0 || rows == 0 || num_colors == 0 ||
                num_colors > Color::PALETTE.len() ||
                num_colors > columns * rows {
            return Err(FlowError::InvalidParameters);
        }

        Ok(BoardGenerator {
            rng,
            columns,
            rows,
            num_colors,
            timeout
        })
    }

    /// Computes all moves that extend some color's path from the given cell
    /// by one cell. A move is legal if the source cell has fewer than two
    /// neighbors of its own color (i.e. is a path end), the target cell is
    /// empty, and the target cell has no neighbor of the source's color
    /// other than the source itself. The last condition keeps every path
    /// self-avoiding: no cell ever touches its own path except at the cell
    /// it extends.
    fn cell_extensions(&self, board: &FlowBoard, column: usize, row: usize)
            -> FlowResult<Vec<Extension>> {
        let color = match board.get_cell(column, row)? {
            Some(color) => color,
            None => return Ok(Vec::new())
        };

        if board.same_color_neighbors(column, row)? >= 2 {
            return Ok(Vec::new());
        }

        let mut extensions = Vec::new();

        for (n_column, n_row) in board.neighbors(column, row)? {
            if board.get_cell(n_column, n_row)?.is_some() {
                continue;
            }

            if board.neighbors_of_color(n_column, n_row, color)? > 1 {
                continue;
            }

            extensions.push(Extension {
                color,
                to: (n_column, n_row)
            });
        }

        Ok(extensions)
    }

    fn all_extensions(&self, board: &FlowBoard)
            -> FlowResult<Vec<Extension>> {
        let mut extensions = Vec::new();

        for row in 0..self.rows {
            for column in 0..self.columns {
                extensions.append(
                    &mut self.cell_extensions(board, column, row)?);
            }
        }

        Ok(extensions)
    }

    /// Makes one attempt at tiling a board. Each color's path is seeded at
    /// a random empty cell, then uniformly random legal extensions are
    /// applied until none remains. The result is only accepted if the board
    /// is full and every color covers at least [MIN_COLOR_CELLS] cells.
    fn try_fill(&mut self) -> FlowResult<Option<FlowBoard>> {
        let mut board = FlowBoard::new_empty(self.columns, self.rows)?;

        for &color in &Color::PALETTE[..self.num_colors] {
            let empty = board.empty_cells();
            let (column, row) = empty[self.rng.gen_range(0..empty.len())];
            board.set_cell(column, row, color)?;
        }

        loop {
            let extensions = self.all_extensions(&board)?;

            if extensions.is_empty() {
                break;
            }

            let extension =
                extensions[self.rng.gen_range(0..extensions.len())];
            board.set_cell(extension.to.0, extension.to.1,
                extension.color)?;
        }

        if !board.is_full() {
            return Ok(None);
        }

        let counts = board.color_counts();

        for color in &Color::PALETTE[..self.num_colors] {
            if counts.get(color).copied().unwrap_or(0) < MIN_COLOR_CELLS {
                return Ok(None);
            }
        }

        Ok(Some(board))
    }

    /// Generates a new Flow puzzle with this generator's dimensions and
    /// color count. Fill attempts are retried until one is accepted or the
    /// timeout elapses.
    ///
    /// # Errors
    ///
    /// If no board is accepted within the timeout. In that case,
    /// `FlowError::Timeout` is returned.
    pub fn generate(&mut self) -> FlowResult<FlowPuzzle> {
        let start = Instant::now();

        loop {
            if let Some(filled) = self.try_fill()? {
                let starting = derive_starting_board(&filled)?;
                return Ok(FlowPuzzle::new(filled, starting));
            }

            if start.elapsed() >= self.timeout {
                return Err(FlowError::Timeout);
            }
        }
    }
}

/// Derives the starting board from a filled board by keeping exactly the
/// cells with one same-colored neighbor, which are the two ends of each
/// color's path, and clearing everything else.
///
/// This is total over any board state; applied to a board that is not the
/// output of a [BoardGenerator], the result may give some colors a number of
/// endpoints other than two.
pub fn derive_starting_board(filled: &FlowBoard) -> FlowResult<FlowBoard> {
    let mut starting = FlowBoard::new_empty(filled.columns(), filled.rows())?;

    for row in 0..filled.rows() {
        for column in 0..filled.columns() {
            if filled.same_color_neighbors(column, row)? == 1 {
                if let Some(color) = filled.get_cell(column, row)? {
                    starting.set_cell(column, row, color)?;
                }
            }
        }
    }

    Ok(starting)
}

/// Generates a Flow puzzle with the given dimensions and number of colors,
/// using a [ThreadRng] and the [DEFAULT_TIMEOUT]. This is shorthand for
/// creating a [BoardGenerator] with [BoardGenerator::new_default] and
/// calling [BoardGenerator::generate] on it.
///
/// # Errors
///
/// * `FlowError::InvalidParameters` if the parameters are rejected as
/// specified in [BoardGenerator::new].
/// * `FlowError::Timeout` if no board is accepted within the timeout.
pub fn generate_flow_puzzle(columns: usize, rows: usize, num_colors: usize)
        -> FlowResult<FlowPuzzle> {
    BoardGenerator::new_default(columns, rows, num_colors)?.generate()
}
