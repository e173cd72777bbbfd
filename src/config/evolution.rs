use super::traits::ConfigSection;
use crate::engines::evolution::operators::BreedingLimits;
use crate::error::LineupError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub generations: usize,
    pub keep_best_n: usize,
    pub children_per_generation: usize,
    pub parent_count: usize,
    pub min_swaps: usize,
    pub max_swaps: usize,
    /// Retry bound for one lineup construction before giving up as infeasible.
    pub max_attempts: usize,
    pub budget: f64,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub report_every: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: 500,
            keep_best_n: 5,
            children_per_generation: 4,
            parent_count: 2,
            min_swaps: 1,
            max_swaps: 2,
            max_attempts: 10_000,
            budget: 50_000.0,
            seed: None,
            parallel: true,
            report_every: 50,
        }
    }
}

impl EvolutionConfig {
    pub fn breeding_limits(&self) -> BreedingLimits {
        BreedingLimits {
            budget: self.budget,
            max_attempts: self.max_attempts,
            min_swaps: self.min_swaps,
            max_swaps: self.max_swaps,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), LineupError> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(LineupError::Configuration(
                "Budget must be a positive number".to_string()
            ));
        }
        if self.keep_best_n == 0 {
            return Err(LineupError::Configuration(
                "keep_best_n must be at least 1".to_string()
            ));
        }
        if self.children_per_generation == 0 {
            return Err(LineupError::Configuration(
                "children_per_generation must be at least 1".to_string()
            ));
        }
        if self.parent_count == 0 {
            return Err(LineupError::Configuration(
                "parent_count must be at least 1".to_string()
            ));
        }
        if self.max_swaps == 0 {
            return Err(LineupError::Configuration(
                "max_swaps must be at least 1 or crossover cannot mutate".to_string()
            ));
        }
        if self.min_swaps > self.max_swaps {
            return Err(LineupError::Configuration(format!(
                "min_swaps ({}) cannot exceed max_swaps ({})",
                self.min_swaps, self.max_swaps
            )));
        }
        if self.max_attempts == 0 {
            return Err(LineupError::Configuration(
                "max_attempts must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
