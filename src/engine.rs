//! The narrow interface the presentation layer drives
//!
//! Owns the board and the configured selector; everything the UI needs is
//! behind these few calls.

use crate::{
    Result,
    board::{Board, Cell, Mark},
    eval::{self, Evaluation, Outcome},
    selector::{Difficulty, Selector},
};

/// Board plus configured difficulty tier
pub struct Engine {
    board: Board,
    difficulty: Difficulty,
    selector: Box<dyn Selector>,
    seed: Option<u64>,
}

impl Engine {
    /// Create an engine at the given difficulty
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, None)
    }

    /// Create an engine whose random components are seeded (deterministic
    /// level-0 play for tests and reproducible runs)
    pub fn with_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Engine {
            board: Board::new(),
            difficulty,
            selector: difficulty.build_selector(seed),
            seed,
        }
    }

    /// Clear all cells to empty
    pub fn reset_board(&mut self) {
        self.board.reset();
    }

    /// Assign the round's marks; the first mover gets X
    pub fn set_game_pieces(&mut self, ai_first: bool) {
        self.board.assign_marks(ai_first);
    }

    /// Select the difficulty tier by numeric level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidLevel`] for levels outside 0-4.
    pub fn set_ai_level(&mut self, level: u8) -> Result<()> {
        self.set_difficulty(Difficulty::from_level(level)?);
        Ok(())
    }

    /// Select the difficulty tier directly
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.selector = difficulty.build_selector(self.seed);
    }

    /// The configured difficulty tier
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Run the configured selector and commit its move.
    ///
    /// Returns the chosen position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoMovesLeft`] when the board is full; the
    /// turn is never silently skipped.
    pub fn pick_ai_move(&mut self) -> Result<usize> {
        let pos = self.selector.choose(&mut self.board)?;
        let ai = self.board.ai_mark();
        self.board.place(pos, ai)?;
        Ok(pos)
    }

    /// Commit a player move to an empty cell.
    ///
    /// # Errors
    ///
    /// Rejects occupied cells and out-of-range positions; an existing mark
    /// is never overwritten.
    pub fn play_player_move(&mut self, pos: usize) -> Result<()> {
        let player = self.board.player_mark();
        self.board.place(pos, player)
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-indexed snapshot of the current cell states
    pub fn grid(&self) -> [[Cell; 3]; 3] {
        self.board.grid()
    }

    /// The AI's mark for this round
    pub fn ai_mark(&self) -> Mark {
        self.board.ai_mark()
    }

    /// The player's mark for this round
    pub fn player_mark(&self) -> Mark {
        self.board.player_mark()
    }

    /// Evaluate the current position
    pub fn evaluate(&self) -> Evaluation {
        eval::evaluate(&self.board)
    }

    /// Derive the round outcome from the board
    pub fn outcome(&self) -> Outcome {
        eval::outcome(&self.board)
    }

    /// Number of empty cells left
    pub fn moves_left(&self) -> usize {
        self.board.moves_left()
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_and_pieces() {
        let mut engine = Engine::new(Difficulty::Scripted);
        engine.set_game_pieces(true);
        assert_eq!(engine.ai_mark(), Mark::X);

        engine.pick_ai_move().unwrap();
        assert_eq!(engine.moves_left(), 8);

        engine.reset_board();
        assert_eq!(engine.moves_left(), 9);
    }

    #[test]
    fn test_set_ai_level_bounds() {
        let mut engine = Engine::new(Difficulty::Random);
        for level in 0..=4 {
            engine.set_ai_level(level).unwrap();
            assert_eq!(engine.difficulty().level(), level);
        }
        assert!(matches!(
            engine.set_ai_level(5),
            Err(crate::Error::InvalidLevel { level: 5 })
        ));
        // a failed change keeps the previous difficulty
        assert_eq!(engine.difficulty().level(), 4);
    }

    #[test]
    fn test_player_move_checked() {
        let mut engine = Engine::new(Difficulty::Scripted);
        engine.set_game_pieces(false);

        engine.play_player_move(4).unwrap();
        assert_eq!(engine.grid()[1][1], Cell::X);

        assert!(matches!(
            engine.play_player_move(4),
            Err(crate::Error::OccupiedCell { position: 4 })
        ));
        assert!(matches!(
            engine.play_player_move(12),
            Err(crate::Error::InvalidPosition { position: 12 })
        ));
    }

    #[test]
    fn test_pick_ai_move_on_full_board() {
        let mut engine = Engine::new(Difficulty::Minimax);
        engine.set_board(Board::from_layout("XOXXOOOXX", Mark::O).unwrap());
        assert_eq!(engine.moves_left(), 0);
        assert!(matches!(
            engine.pick_ai_move(),
            Err(crate::Error::NoMovesLeft)
        ));
    }

    #[test]
    fn test_outcome_recomputed_from_board() {
        let mut engine = Engine::new(Difficulty::Scripted);
        engine.set_game_pieces(false);
        assert_eq!(engine.outcome(), Outcome::Ongoing);

        // player (X) builds the top row unopposed
        engine.play_player_move(0).unwrap();
        engine.play_player_move(1).unwrap();
        engine.play_player_move(2).unwrap();
        assert_eq!(engine.outcome(), Outcome::PlayerWin);
        assert_eq!(engine.evaluate(), Evaluation::PlayerWin);
    }
}
