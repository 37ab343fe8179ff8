//! Noughts: a move-selection engine for noughts and crosses
//!
//! The crate is a small engine stack for the 3x3 game:
//! - [`board`]: grid state, role marks, checked placement and scoped probing
//! - [`lines`]: the eight winning lines and helpers over them
//! - [`eval`]: terminal detection and the static positional evaluator
//! - [`selector`]: five difficulty tiers behind the [`Selector`] trait
//! - [`engine`]: the narrow interface a presentation layer drives
//! - [`session`]: round lifecycle, turn bookkeeping, scoreboard
//! - [`symmetry`]: the dihedral board transforms
//! - [`cli`]: the `duel` and `analyze` subcommands

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod lines;
pub mod selector;
pub mod session;
pub mod symmetry;

pub use board::{Board, Cell, Mark};
pub use engine::Engine;
pub use error::{Error, Result};
pub use eval::{Evaluation, Outcome, Terms};
pub use selector::{Difficulty, Selector, TieBreak};
pub use session::{Phase, Scoreboard, Session};
pub use symmetry::D4Transform;
