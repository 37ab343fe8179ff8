//! CLI infrastructure for the noughts engine
//!
//! Exposes the engine without any graphical shell: `duel` pits the engine
//! against a stand-in opponent over many orchestrated rounds, `analyze`
//! inspects a single position.

pub mod analyze;
pub mod duel;
