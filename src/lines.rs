//! Winning line analysis for the 3x3 board

use crate::board::{Board, Cell, Mark};

/// The 8 winning triples in evaluation order: rows, columns, diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // left diagonal
    [2, 4, 6], // right diagonal
];

/// Check whether the line is fully occupied by the given mark
pub fn has_line(board: &Board, mark: Mark, line: &[usize; 3]) -> bool {
    let target = mark.to_cell();
    line.iter().all(|&pos| board.get(pos) == target)
}

/// Check whether any line is fully occupied by the given mark
pub fn has_won(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| has_line(board, mark, line))
}

/// The empty cell completing the line for `mark`, if the line holds exactly
/// two of `mark` and one empty cell
pub fn completing_cell(board: &Board, mark: Mark, line: &[usize; 3]) -> Option<usize> {
    let target = mark.to_cell();
    let mut count = 0;
    let mut empty = None;

    for &pos in line {
        match board.get(pos) {
            Cell::Empty => {
                if empty.is_some() {
                    return None;
                }
                empty = Some(pos);
            }
            c if c == target => count += 1,
            _ => return None,
        }
    }

    if count == 2 { empty } else { None }
}

/// All winning lines passing through a position
pub fn lines_through(pos: usize) -> impl Iterator<Item = &'static [usize; 3]> {
    LINES.iter().filter(move |line| line.contains(&pos))
}
