//! Level 2: greedy one-ply evaluation

use crate::{Result, board::Board, eval, selector::Selector};

/// Scores every empty cell with the static evaluator and takes the best.
///
/// Ties keep the earliest cell in row-major scan order; no opponent reply is
/// modeled, which is exactly what makes this tier beatable.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl Selector for GreedySelector {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, board: &mut Board) -> Result<usize> {
        let ai = board.ai_mark();
        let mut best = i32::MIN;
        let mut best_pos = None;

        for pos in 0..9 {
            if !board.is_empty(pos) {
                continue;
            }
            let score = board.probe(pos, ai, |b| eval::evaluate(b).score());
            if best_pos.is_none() || score > best {
                best = score;
                best_pos = Some(pos);
            }
        }

        best_pos.ok_or(crate::Error::NoMovesLeft)
    }
}
