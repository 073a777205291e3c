//! This module contains logic for judging player grids of Flow puzzles.
//!
//! A player grid solves a puzzle if every cell is colored and, for each
//! color, the two endpoint cells given by the starting board are connected
//! by cells of that color. Connectivity is established by a breadth-first
//! search that only traverses the player's cells of the color in question.

use crate::flow::{Color, FlowBoard};

use std::collections::{HashMap, HashSet, VecDeque};

/// Collects the endpoint cells of each color on the given starting board,
/// i.e. all cells it contains, grouped by color. On starting boards
/// produced by a [BoardGenerator](crate::flow::generator::BoardGenerator),
/// every color maps to exactly two cells.
pub fn endpoints(starting: &FlowBoard)
        -> HashMap<Color, Vec<(usize, usize)>> {
    let mut endpoints: HashMap<Color, Vec<(usize, usize)>> = HashMap::new();

    for row in 0..starting.rows() {
        for column in 0..starting.columns() {
            if let Ok(Some(color)) = starting.get_cell(column, row) {
                endpoints.entry(color).or_insert_with(Vec::new)
                    .push((column, row));
            }
        }
    }

    endpoints
}

fn connects(player: &FlowBoard, color: Color, from: (usize, usize),
        to: (usize, usize)) -> bool {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some((column, row)) = queue.pop_front() {
        if (column, row) == to {
            return true;
        }

        let neighbors = match player.neighbors(column, row) {
            Ok(neighbors) => neighbors,
            Err(_) => return false
        };

        for (n_column, n_row) in neighbors {
            if player.get_cell(n_column, n_row) != Ok(Some(color)) {
                continue;
            }

            if visited.insert((n_column, n_row)) {
                queue.push_back((n_column, n_row));
            }
        }
    }

    false
}

/// Determines whether the given player grid solves the puzzle whose
/// endpoints are given by `starting`. This is the case if and only if every
/// cell of the player grid is colored and, for each color on the starting
/// board, its two endpoints are connected by a chain of orthogonally
/// adjacent player cells of that color.
///
/// Both boards must have the same dimensions; otherwise, `false` is
/// returned. Starting boards with a number of endpoints other than two for
/// some color never have solutions, so `false` is returned for those as
/// well.
pub fn check_solution(starting: &FlowBoard, player: &FlowBoard) -> bool {
    if starting.columns() != player.columns() ||
            starting.rows() != player.rows() {
        return false;
    }

    if !player.is_full() {
        return false;
    }

    for (color, cells) in endpoints(starting) {
        if cells.len() != 2 {
            return false;
        }

        if player.get_cell(cells[0].0, cells[0].1) != Ok(Some(color)) ||
                player.get_cell(cells[1].0, cells[1].1) != Ok(Some(color)) {
            return false;
        }

        if !connects(player, color, cells[0], cells[1]) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::flow::FlowBoard;

    #[test]
    fn endpoints_grouped_by_color() {
        let starting = FlowBoard::parse("3x3;R, ,G, , , ,R, ,G").unwrap();
        let endpoints = endpoints(&starting);

        assert_eq!(2, endpoints.len());
        assert_eq!(Some(&vec![(0, 0), (0, 2)]),
            endpoints.get(&Color::Red));
        assert_eq!(Some(&vec![(2, 0), (2, 2)]),
            endpoints.get(&Color::Green));
    }

    #[test]
    fn single_path_board_solved() {
        let starting = FlowBoard::parse("3x1;R, ,R").unwrap();
        let player = FlowBoard::parse("3x1;R,R,R").unwrap();
        assert!(check_solution(&starting, &player));
    }

    #[test]
    fn incomplete_grid_not_solved() {
        let starting = FlowBoard::parse("3x1;R, ,R").unwrap();
        let player = FlowBoard::parse("3x1;R, ,R").unwrap();
        assert!(!check_solution(&starting, &player));
    }

    #[test]
    fn two_color_board_solved() {
        let starting = FlowBoard::parse("3x3;R, ,G, , , ,R, ,G").unwrap();
        let player = FlowBoard::parse("3x3;R,R,G,R,G,G,R,G,G").unwrap();
        assert!(check_solution(&starting, &player));
    }

    #[test]
    fn disconnected_endpoints_not_solved() {
        // The red endpoints at (0, 0) and (2, 0) are separated by the
        // green column between them.
        let starting = FlowBoard::parse("3x3;R,G,R, , , , ,G, ").unwrap();
        let player = FlowBoard::parse("3x3;R,G,R,R,G,R,R,G,R").unwrap();
        assert!(!check_solution(&starting, &player));
    }

    #[test]
    fn endpoint_overwritten_with_other_color_not_solved() {
        let starting = FlowBoard::parse("3x3;R, ,G, , , ,R, ,G").unwrap();
        let player = FlowBoard::parse("3x3;G,G,G,R,R,R,R,R,R").unwrap();
        assert!(!check_solution(&starting, &player));
    }

    #[test]
    fn wrong_endpoint_count_not_solved() {
        let starting = FlowBoard::parse("3x1;R,R,R").unwrap();
        let player = FlowBoard::parse("3x1;R,R,R").unwrap();
        assert!(!check_solution(&starting, &player));
    }

    #[test]
    fn mismatched_dimensions_not_solved() {
        let starting = FlowBoard::parse("3x1;R, ,R").unwrap();
        let player = FlowBoard::parse("3x2;R,R,R,R,R,R").unwrap();
        assert!(!check_solution(&starting, &player));
    }
}
