//! Levels 3 and 4: exhaustive alpha-beta minimax
//!
//! Both tiers share one search routine; they differ only in how equally
//! scored root candidates are broken apart.

use crate::{Result, board::Board, eval, selector::Selector};

/// How the root loop breaks ties between equally scored candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep the earliest candidate in row-major scan order (level 3)
    Earliest,
    /// Prefer the candidate whose subtree resolved with fewer explored
    /// nodes: shallower wins and slower losses (level 4)
    FewestNodes,
}

/// Full-depth adversarial search to game end
#[derive(Debug, Clone, Copy)]
pub struct MinimaxSelector {
    tie_break: TieBreak,
}

impl MinimaxSelector {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

/// Depth-first alpha-beta over the remaining empty cells.
///
/// `depth` counts the empty cells below this node and reaches 0 exactly when
/// the board is full. `nodes` accumulates one count per invocation,
/// including terminal calls.
///
/// On a cutoff the running best value is returned rather than the bound;
/// root candidates are each searched with a fresh full window, so their
/// values stay exact.
fn search(
    board: &mut Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    let value = eval::evaluate(board).score();
    if depth == 0 || value == i32::MAX || value == i32::MIN {
        return value;
    }

    if maximizing {
        let ai = board.ai_mark();
        let mut best = i32::MIN;
        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }
            let child = board.probe(pos, ai, |b| {
                search(b, depth - 1, alpha, beta, false, nodes)
            });
            best = best.max(child);
            alpha = alpha.max(child);
            if beta <= alpha {
                return best;
            }
        }
        best
    } else {
        let player = board.player_mark();
        let mut best = i32::MAX;
        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }
            let child = board.probe(pos, player, |b| {
                search(b, depth - 1, alpha, beta, true, nodes)
            });
            best = best.min(child);
            beta = beta.min(child);
            if beta <= alpha {
                return best;
            }
        }
        best
    }
}

impl Selector for MinimaxSelector {
    fn name(&self) -> &'static str {
        match self.tie_break {
            TieBreak::Earliest => "minimax",
            TieBreak::FewestNodes => "node-aware",
        }
    }

    fn choose(&mut self, board: &mut Board) -> Result<usize> {
        let ai = board.ai_mark();
        let mut best = i32::MIN;
        let mut best_nodes = u64::MAX;
        let mut best_pos = None;

        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }

            // a candidate that completes an AI line needs no search
            let wins_now = board.probe(pos, ai, |b| {
                matches!(eval::evaluate(b), eval::Evaluation::AiWin)
            });
            if wins_now {
                return Ok(pos);
            }

            let mut nodes = 0u64;
            let value = board.probe(pos, ai, |b| {
                let depth = b.moves_left();
                search(b, depth, i32::MIN, i32::MAX, false, &mut nodes)
            });

            let accept = match self.tie_break {
                TieBreak::Earliest => best_pos.is_none() || value > best,
                TieBreak::FewestNodes => {
                    best_pos.is_none() || value > best || (value >= best && nodes < best_nodes)
                }
            };
            if accept {
                best = value;
                best_nodes = nodes;
                best_pos = Some(pos);
            }
        }

        best_pos.ok_or(crate::Error::NoMovesLeft)
    }
}
