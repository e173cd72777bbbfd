//! Lineup optimisation by evolutionary search.
//!
//! A [`GenePool`](engines::evolution::GenePool) maps each roster slot to its
//! eligible candidates; the [`EvolutionEngine`](engines::evolution::EvolutionEngine)
//! breeds lineups that respect a salary budget and keeps the fittest ones it
//! has ever seen.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use engines::evolution::{EliteLineup, EvolutionEngine, GenePool, Lineup};
pub use error::{LineupError, Result};
pub use types::{Candidate, Player};
