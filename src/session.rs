//! Match orchestrator: turn bookkeeping, round lifecycle, scoreboard
//!
//! Drives the engine through `Menu -> InProgress -> RoundOver` and back,
//! mirroring what the UI controller of a desktop build would do. The
//! scoreboard lives for the process lifetime.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::Engine,
    eval::Outcome,
    selector::Difficulty,
};

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    InProgress,
    RoundOver,
}

/// Session win counters; draws leave both untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub ai_wins: u32,
    pub player_wins: u32,
}

/// The match state machine
pub struct Session {
    engine: Engine,
    phase: Phase,
    ai_first: bool,
    scoreboard: Scoreboard,
    rng: StdRng,
}

impl Session {
    /// Create a session at the given difficulty
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, None)
    }

    /// Create a session with seeded randomness (coin flip and level-0 play)
    pub fn with_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Session {
            engine: Engine::with_seed(difficulty, seed),
            phase: Phase::Menu,
            ai_first: false,
            scoreboard: Scoreboard::default(),
            rng,
        }
    }

    /// Start a round from the menu: a fair coin decides who opens.
    ///
    /// If the AI opens, its selector runs before control returns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RoundInProgress`] unless the session is in
    /// the menu.
    pub fn start_round(&mut self) -> Result<Outcome> {
        if self.phase != Phase::Menu {
            return Err(crate::Error::RoundInProgress);
        }
        self.ai_first = self.rng.random::<bool>();
        self.begin_round()
    }

    /// Replay after a finished round; the opening side alternates rather
    /// than being re-randomized.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoFinishedRound`] unless a round just ended.
    pub fn replay(&mut self) -> Result<Outcome> {
        if self.phase != Phase::RoundOver {
            return Err(crate::Error::NoFinishedRound);
        }
        self.ai_first = !self.ai_first;
        self.begin_round()
    }

    /// Decline a replay and return to the menu; the scoreboard survives.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoFinishedRound`] unless a round just ended.
    pub fn to_menu(&mut self) -> Result<()> {
        if self.phase != Phase::RoundOver {
            return Err(crate::Error::NoFinishedRound);
        }
        self.phase = Phase::Menu;
        Ok(())
    }

    /// Commit a player move, then let the AI answer unless the game ended.
    ///
    /// Returns the outcome after both plies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoActiveRound`] outside an active round and
    /// the engine's placement errors for occupied or out-of-range cells.
    pub fn play_player(&mut self, pos: usize) -> Result<Outcome> {
        if self.phase != Phase::InProgress {
            return Err(crate::Error::NoActiveRound);
        }

        self.engine.play_player_move(pos)?;
        if self.engine.outcome() != Outcome::Ongoing {
            return Ok(self.settle());
        }

        self.engine.pick_ai_move()?;
        Ok(self.settle())
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the AI opened the current round
    pub fn ai_first(&self) -> bool {
        self.ai_first
    }

    /// The session scoreboard
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// The engine, for board inspection
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Outcome derived from the current board
    pub fn outcome(&self) -> Outcome {
        self.engine.outcome()
    }

    fn begin_round(&mut self) -> Result<Outcome> {
        self.engine.reset_board();
        self.engine.set_game_pieces(self.ai_first);
        self.phase = Phase::InProgress;
        if self.ai_first {
            self.engine.pick_ai_move()?;
        }
        Ok(self.settle())
    }

    /// Fold the derived outcome into the scoreboard and phase
    fn settle(&mut self) -> Outcome {
        let outcome = self.engine.outcome();
        match outcome {
            Outcome::AiWin => {
                self.scoreboard.ai_wins += 1;
                self.phase = Phase::RoundOver;
            }
            Outcome::PlayerWin => {
                self.scoreboard.player_wins += 1;
                self.phase = Phase::RoundOver;
            }
            Outcome::Draw => {
                self.phase = Phase::RoundOver;
            }
            Outcome::Ongoing => {}
        }
        outcome
    }
}
