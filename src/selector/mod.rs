//! Move selectors, one per difficulty tier
//!
//! Each selector chooses a position for the AI mark. Levels 0-2 act on the
//! visible position only; levels 3-4 run a full-depth adversarial search.

mod greedy;
mod minimax;
mod random;
mod scripted;

pub use greedy::GreedySelector;
pub use minimax::{MinimaxSelector, TieBreak};
pub use random::RandomSelector;
pub use scripted::ScriptedSelector;

use serde::{Deserialize, Serialize};

use crate::{Result, board::Board};

/// Unified interface for the move selectors.
///
/// `choose` returns the chosen empty position; the board may be mutated
/// transiently during probing but is unchanged on return. The caller commits
/// the move.
pub trait Selector: Send {
    /// Name used in summaries and logs
    fn name(&self) -> &'static str;

    /// Select a position (0-8) for the AI mark.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoMovesLeft`] when the board is full.
    fn choose(&mut self, board: &mut Board) -> Result<usize>;
}

/// The five difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
pub enum Difficulty {
    /// Level 0: uniform pick among empty cells
    Random,
    /// Level 1: ordered heuristic rule cascade
    Scripted,
    /// Level 2: one-ply greedy evaluation
    Greedy,
    /// Level 3: exhaustive alpha-beta search
    Minimax,
    /// Level 4: exhaustive search preferring cheaper subtrees on ties
    NodeAware,
}

impl Difficulty {
    /// The numeric level (0-4)
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Scripted => 1,
            Difficulty::Greedy => 2,
            Difficulty::Minimax => 3,
            Difficulty::NodeAware => 4,
        }
    }

    /// Parse a numeric level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidLevel`] for levels outside 0-4; the
    /// configuration error is surfaced instead of silently skipping turns.
    pub fn from_level(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Difficulty::Random),
            1 => Ok(Difficulty::Scripted),
            2 => Ok(Difficulty::Greedy),
            3 => Ok(Difficulty::Minimax),
            4 => Ok(Difficulty::NodeAware),
            _ => Err(crate::Error::InvalidLevel { level }),
        }
    }

    /// Build the boxed selector for this tier; `seed` makes level 0
    /// deterministic and is ignored by the others
    pub fn build_selector(self, seed: Option<u64>) -> Box<dyn Selector> {
        match self {
            Difficulty::Random => Box::new(RandomSelector::new(seed)),
            Difficulty::Scripted => Box::new(ScriptedSelector),
            Difficulty::Greedy => Box::new(GreedySelector),
            Difficulty::Minimax => Box::new(MinimaxSelector::new(TieBreak::Earliest)),
            Difficulty::NodeAware => Box::new(MinimaxSelector::new(TieBreak::FewestNodes)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::Scripted => "scripted",
            Difficulty::Greedy => "greedy",
            Difficulty::Minimax => "minimax",
            Difficulty::NodeAware => "node-aware",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip() {
        for level in 0..=4u8 {
            assert_eq!(Difficulty::from_level(level).unwrap().level(), level);
        }
    }

    #[test]
    fn test_invalid_level_rejected() {
        for level in [5u8, 17, 255] {
            let err = Difficulty::from_level(level).unwrap_err();
            assert!(matches!(err, crate::Error::InvalidLevel { level: l } if l == level));
        }
    }

    #[test]
    fn test_build_selector_names() {
        let names: Vec<&str> = [
            Difficulty::Random,
            Difficulty::Scripted,
            Difficulty::Greedy,
            Difficulty::Minimax,
            Difficulty::NodeAware,
        ]
        .into_iter()
        .map(|d| d.build_selector(Some(1)).name())
        .collect();
        assert_eq!(
            names,
            vec!["random", "scripted", "greedy", "minimax", "node-aware"]
        );
    }

    #[test]
    fn test_every_selector_rejects_full_board() {
        let full = Board::from_layout("XOXXOOOXX", crate::Mark::O).unwrap();
        for level in 0..=4u8 {
            let mut board = full;
            let mut selector = Difficulty::from_level(level).unwrap().build_selector(Some(7));
            let err = selector.choose(&mut board).unwrap_err();
            assert!(matches!(err, crate::Error::NoMovesLeft));
        }
    }
}
