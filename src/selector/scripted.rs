//! Level 1: ordered heuristic rule cascade
//!
//! A strictly ordered decision list: the first rule whose condition holds
//! determines the move and no further rule is evaluated. The fallback rule
//! covers every cell, so the cascade always finds a move while an empty cell
//! exists.

use crate::{
    Result,
    board::{Board, Cell},
    lines::{self, LINES},
    selector::Selector,
};

/// Line scan order for the win-now rule: rows and columns interleaved by
/// index, then left diagonal, then right diagonal
const WIN_SCAN: [usize; 8] = [0, 3, 1, 4, 2, 5, 6, 7];

/// Cell scan order for threat blocking: corners TL, BL, TR, BR, then
/// left, center, top, right, bottom
const BLOCK_SCAN: [usize; 9] = [0, 6, 2, 8, 3, 4, 1, 5, 7];

/// Fork targets: center, corners TL, BL, TR, BR, edges L, R, B, T
const FORK_SCAN: [usize; 9] = [4, 0, 6, 2, 8, 3, 5, 7, 1];

/// Edge cells in the center-fork-defense fill order: top, bottom, left, right
const EDGE_FILL: [usize; 4] = [1, 7, 3, 5];

/// A named pure rule: returns the move it mandates, if its pattern matches
pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: fn(&Board) -> Option<usize>,
}

pub(crate) const RULES: [Rule; 5] = [
    Rule {
        name: "win now",
        apply: win_now,
    },
    Rule {
        name: "center fork defense",
        apply: center_fork_defense,
    },
    Rule {
        name: "block threat",
        apply: block_threat,
    },
    Rule {
        name: "create fork",
        apply: create_fork,
    },
    Rule {
        name: "fallback priority",
        apply: fallback,
    },
];

/// Complete the first line holding exactly two AI marks and one empty cell
pub(crate) fn win_now(board: &Board) -> Option<usize> {
    WIN_SCAN
        .iter()
        .find_map(|&idx| lines::completing_cell(board, board.ai_mark(), &LINES[idx]))
}

/// When the player owns a full corner diagonal against the AI's center and
/// all four edge cells are open, take the first open edge (top, bottom,
/// left, right)
pub(crate) fn center_fork_defense(board: &Board) -> Option<usize> {
    let player = board.player_mark().to_cell();

    let diagonal_pair = (board.get(0) == player && board.get(8) == player)
        || (board.get(2) == player && board.get(6) == player);
    let center_held = board.get(4) == board.ai_mark().to_cell();
    let edges_open = EDGE_FILL.iter().all(|&pos| board.is_empty(pos));

    if diagonal_pair && center_held && edges_open {
        EDGE_FILL.iter().copied().find(|&pos| board.is_empty(pos))
    } else {
        None
    }
}

/// Occupy the first scanned empty cell through which the player has a
/// pending line (the other two cells of some line both player-marked)
pub(crate) fn block_threat(board: &Board) -> Option<usize> {
    let player = board.player_mark().to_cell();

    BLOCK_SCAN.iter().copied().find(|&pos| {
        board.is_empty(pos)
            && lines::lines_through(pos).any(|line| {
                line.iter()
                    .filter(|&&p| p != pos)
                    .all(|&p| board.get(p) == player)
            })
    })
}

/// Take the first fork target whose full row and column are still empty
pub(crate) fn create_fork(board: &Board) -> Option<usize> {
    FORK_SCAN.iter().copied().find(|&pos| {
        let (row, col) = (pos / 3, pos % 3);
        (0..3).all(|k| board.get(row * 3 + k) == Cell::Empty)
            && (0..3).all(|k| board.get(k * 3 + col) == Cell::Empty)
    })
}

/// Priority fill: center; the corner opposite a player corner; any empty
/// corner (TL, BR, TR, BL); any empty edge (top, right, bottom, left)
pub(crate) fn fallback(board: &Board) -> Option<usize> {
    let player = board.player_mark().to_cell();

    if board.is_empty(4) {
        return Some(4);
    }

    for (a, b) in [(0usize, 8usize), (2, 6)] {
        if board.get(a) == player && board.is_empty(b) {
            return Some(b);
        }
        if board.is_empty(a) && board.get(b) == player {
            return Some(a);
        }
    }

    for pos in [0usize, 8, 2, 6] {
        if board.is_empty(pos) {
            return Some(pos);
        }
    }

    [1usize, 5, 7, 3].into_iter().find(|&pos| board.is_empty(pos))
}

/// The cascade selector: applies the rules in order, first hit wins
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedSelector;

impl Selector for ScriptedSelector {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn choose(&mut self, board: &mut Board) -> Result<usize> {
        if board.is_full() {
            return Err(crate::Error::NoMovesLeft);
        }
        RULES
            .iter()
            .find_map(|rule| (rule.apply)(board))
            .ok_or(crate::Error::NoMovesLeft)
    }
}
