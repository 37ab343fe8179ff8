//! Level 0: uniform random selection

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{Result, board::Board, selector::Selector};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Picks uniformly among the currently empty cells
#[derive(Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
        }
    }
}

impl Selector for RandomSelector {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, board: &mut Board) -> Result<usize> {
        let empty = board.empty_positions();
        empty
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoMovesLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_only_picks_empty_cells() {
        let mut selector = RandomSelector::new(Some(42));
        let mut board = Board::from_layout("XOX.O.X..", Mark::O).unwrap();
        for _ in 0..200 {
            let pos = selector.choose(&mut board).unwrap();
            assert!(board.is_empty(pos), "picked occupied cell {pos}");
        }
    }

    #[test]
    fn test_seeded_sequence_is_reproducible() {
        let board = Board::from_layout("X...O....", Mark::O).unwrap();

        let mut a = RandomSelector::new(Some(9));
        let mut b = RandomSelector::new(Some(9));
        for _ in 0..50 {
            let mut board_a = board;
            let mut board_b = board;
            assert_eq!(
                a.choose(&mut board_a).unwrap(),
                b.choose(&mut board_b).unwrap()
            );
        }
    }

    #[test]
    fn test_roughly_uniform_over_empty_cells() {
        // 3 empty cells; each should see about a third of the draws
        let board = Board::from_layout("XOXOXO...", Mark::O).unwrap();
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 3);

        let mut selector = RandomSelector::new(Some(1234));
        let trials = 3000;
        let mut counts = [0usize; 9];
        for _ in 0..trials {
            let mut probe = board;
            counts[selector.choose(&mut probe).unwrap()] += 1;
        }

        for &pos in &empty {
            let share = counts[pos] as f64 / trials as f64;
            assert!(
                (share - 1.0 / 3.0).abs() < 0.05,
                "position {pos} drawn with share {share}"
            );
        }
    }
}
