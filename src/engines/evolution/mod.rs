pub mod gene_pool;
pub mod lineup;
pub mod operators;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use gene_pool::{GenePool, GenePoolBuilder};
pub use lineup::{DraftLineup, Lineup};
pub use operators::{cross_over, mutate, random_lineup, select_parents, BreedingLimits};
pub use hall_of_fame::{EliteLineup, HallOfFame};
pub use evolution_engine::EvolutionEngine;
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, ProgressCallback, ProgressMessage,
    SilentProgress,
};
