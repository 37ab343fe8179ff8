//! Terminal-state detection and the static positional evaluator

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    lines::{self, LINES},
};

/// Result of evaluating a board from the AI's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    AiWin,
    PlayerWin,
    Heuristic(i32),
}

impl Evaluation {
    /// The search currency: terminal states map to the integer extremes,
    /// everything else to the heuristic score
    pub fn score(self) -> i32 {
        match self {
            Evaluation::AiWin => i32::MAX,
            Evaluation::PlayerWin => i32::MIN,
            Evaluation::Heuristic(score) => score,
        }
    }
}

/// Outcome of a round, always derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    AiWin,
    PlayerWin,
    Draw,
}

/// The individual terms of the positional evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Terms {
    /// Lines the AI can still complete (>= 1 AI mark, no player marks)
    pub open_ai_lines: i32,
    /// AI marks on the four corners
    pub ai_corners: i32,
    /// Corner-diagonal pairs fully held by the AI (0-2)
    pub ai_opposite_corners: i32,
    /// Immediate player threats (lines with 2 player marks and 1 empty)
    pub player_threats: i32,
    /// Lines the player can still complete (>= 1 player mark, no AI marks)
    pub open_player_lines: i32,
}

impl Terms {
    /// `(p_ai + 2*c_ai + o_ai) - (3*d_player + p_player)`
    pub fn score(&self) -> i32 {
        (self.open_ai_lines + 2 * self.ai_corners + self.ai_opposite_corners)
            - (3 * self.player_threats + self.open_player_lines)
    }
}

/// Evaluate the board: a completed AI line wins, a completed player line
/// loses, otherwise the positional heuristic applies.
///
/// Lines are checked in fixed order (rows, columns, left diagonal, right
/// diagonal); a reachable board completes lines for at most one side.
pub fn evaluate(board: &Board) -> Evaluation {
    for line in &LINES {
        if lines::has_line(board, board.ai_mark(), line) {
            return Evaluation::AiWin;
        }
        if lines::has_line(board, board.player_mark(), line) {
            return Evaluation::PlayerWin;
        }
    }
    Evaluation::Heuristic(positional(board))
}

/// The static positional score (non-terminal boards)
pub fn positional(board: &Board) -> i32 {
    terms(board).score()
}

/// Count the five positional terms over the 8 lines and 4 corners
pub fn terms(board: &Board) -> Terms {
    let ai = board.ai_mark().to_cell();
    let player = board.player_mark().to_cell();
    let mut t = Terms::default();

    for line in &LINES {
        let mut ai_marks = 0;
        let mut player_marks = 0;
        let mut empties = 0;
        for &pos in line {
            match board.get(pos) {
                c if c == ai => ai_marks += 1,
                c if c == player => player_marks += 1,
                _ => empties += 1,
            }
        }

        // a line is open for one side only when the other has no mark in it
        if ai_marks > 0 && player_marks == 0 {
            t.open_ai_lines += 1;
        } else if player_marks > 0 && ai_marks == 0 {
            t.open_player_lines += 1;
        }

        if player_marks == 2 && empties == 1 {
            t.player_threats += 1;
        }
    }

    for &corner in &[0usize, 2, 6, 8] {
        if board.get(corner) == ai {
            t.ai_corners += 1;
        }
    }

    if board.get(0) == ai && board.get(8) == ai {
        t.ai_opposite_corners += 1;
    }
    if board.get(2) == ai && board.get(6) == ai {
        t.ai_opposite_corners += 1;
    }

    t
}

/// Derive the round outcome from the board
pub fn outcome(board: &Board) -> Outcome {
    match evaluate(board) {
        Evaluation::AiWin => Outcome::AiWin,
        Evaluation::PlayerWin => Outcome::PlayerWin,
        Evaluation::Heuristic(_) => {
            if board.is_full() {
                Outcome::Draw
            } else {
                Outcome::Ongoing
            }
        }
    }
}
