use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evolution::{
    gene_pool::GenePool,
    hall_of_fame::{EliteLineup, HallOfFame},
    lineup::Lineup,
    operators::{cross_over, random_lineup, select_parents, BreedingLimits},
    progress::{ProgressCallback, SilentProgress},
};
use crate::error::{LineupError, Result};
use crate::types::Candidate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::Arc;

/// Generational lineup search over a fixed gene pool.
///
/// The engine starts unseeded. The first call to [`run`](Self::run) fills the
/// current generation with random viable lineups; every later generation is
/// bred from the fittest parents of the one before. The hall of fame keeps
/// the best lineups ever produced and is valid to read between calls, so a
/// long search can be run in slices.
pub struct EvolutionEngine<C: Candidate> {
    config: EvolutionConfig,
    gene_pool: Arc<GenePool<C>>,
    current_generation: Vec<Lineup<C>>,
    hall_of_fame: HallOfFame<C>,
    generations_run: usize,
    rng: StdRng,
}

impl<C: Candidate> EvolutionEngine<C> {
    pub fn new(gene_pool: GenePool<C>, config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::debug!(
            "Gene pool: {} slots, {} raw combinations",
            gene_pool.len(),
            gene_pool.combinations()
        );

        Ok(Self {
            hall_of_fame: HallOfFame::new(config.keep_best_n),
            config,
            gene_pool: Arc::new(gene_pool),
            current_generation: Vec::new(),
            generations_run: 0,
            rng,
        })
    }

    /// Run `generations` more generations with the configured sizes.
    pub fn run(&mut self, generations: usize) -> Result<&[EliteLineup<C>]> {
        self.run_with_callback(generations, &mut SilentProgress)
    }

    /// Run with an explicit best-list size and generation size.
    pub fn run_generations(
        &mut self,
        generations: usize,
        keep_best_n: usize,
        children_per_generation: usize,
    ) -> Result<&[EliteLineup<C>]> {
        Self::check_generations(generations)?;
        let config = EvolutionConfig {
            keep_best_n,
            children_per_generation,
            ..self.config.clone()
        };
        config.validate()?;

        self.config = config;
        self.hall_of_fame.set_max_size(keep_best_n);
        self.run(generations)
    }

    pub fn run_with_callback<P: ProgressCallback>(
        &mut self,
        generations: usize,
        callback: &mut P,
    ) -> Result<&[EliteLineup<C>]> {
        Self::check_generations(generations)?;

        if !self.is_seeded() {
            self.seed_population()?;
        }

        for _ in 0..generations {
            let generation = self.generations_run;
            callback.on_generation_start(generation);

            let parents = select_parents(&self.current_generation, self.config.parent_count);
            self.current_generation = self.breed(&parents)?;
            for i in 0..self.current_generation.len() {
                callback.on_lineup_bred(i + 1, self.current_generation.len());
            }

            let added = self
                .hall_of_fame
                .merge(&self.current_generation, generation + 1);
            self.generations_run += 1;

            let best_fitness = self.hall_of_fame.best_fitness().unwrap_or(0.0);
            log::debug!(
                "Generation {}: {} new in hall of fame, best {:.2}",
                generation + 1,
                added,
                best_fitness
            );
            callback.on_generation_complete(generation, best_fitness, self.hall_of_fame.len());
        }

        log::info!(
            "Evolution finished after {} generations, best fitness {:.2}",
            self.generations_run,
            self.hall_of_fame.best_fitness().unwrap_or(0.0)
        );

        Ok(self.hall_of_fame.get_all())
    }

    fn check_generations(generations: usize) -> Result<()> {
        if generations == 0 {
            return Err(LineupError::Configuration(
                "Generation count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn seed_population(&mut self) -> Result<()> {
        let limits = self.config.breeding_limits();
        let pool = Arc::clone(&self.gene_pool);
        let seeds = self.child_seeds();

        self.current_generation = self.collect_children(seeds, |rng| {
            random_lineup(&*pool, &limits, rng)
        })?;
        self.hall_of_fame.merge(&self.current_generation, 0);

        log::info!(
            "Seeded {} random lineups, best fitness {:.2}",
            self.current_generation.len(),
            self.hall_of_fame.best_fitness().unwrap_or(0.0)
        );
        Ok(())
    }

    fn breed(&mut self, parents: &[Lineup<C>]) -> Result<Vec<Lineup<C>>> {
        let limits = self.config.breeding_limits();
        let pool = Arc::clone(&self.gene_pool);
        let seeds = self.child_seeds();

        self.collect_children(seeds, |rng| cross_over(&*pool, parents, &limits, rng))
    }

    /// One seed per child, drawn in child order from the engine generator so
    /// parallel and sequential runs breed identical generations.
    fn child_seeds(&mut self) -> Vec<u64> {
        (0..self.config.children_per_generation)
            .map(|_| self.rng.gen())
            .collect()
    }

    fn collect_children<F>(&self, seeds: Vec<u64>, make: F) -> Result<Vec<Lineup<C>>>
    where
        F: Fn(&mut StdRng) -> Result<Lineup<C>> + Sync,
    {
        if self.config.parallel {
            seeds
                .into_par_iter()
                .map(|seed| make(&mut StdRng::seed_from_u64(seed)))
                .collect()
        } else {
            seeds
                .into_iter()
                .map(|seed| make(&mut StdRng::seed_from_u64(seed)))
                .collect()
        }
    }

    pub fn is_seeded(&self) -> bool {
        !self.current_generation.is_empty()
    }

    pub fn current_generation(&self) -> &[Lineup<C>] {
        &self.current_generation
    }

    /// Best lineups ever produced, fittest first.
    pub fn best(&self) -> &[EliteLineup<C>] {
        self.hall_of_fame.get_all()
    }

    /// Attach an observed score to a best-list entry.
    pub fn annotate_actual(&mut self, rank: usize, actual: f64) -> Result<()> {
        self.hall_of_fame.annotate_actual(rank, actual)
    }

    pub fn gene_pool(&self) -> &GenePool<C> {
        &self.gene_pool
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn budget(&self) -> f64 {
        self.config.budget
    }

    pub fn generations_run(&self) -> usize {
        self.generations_run
    }

    pub fn breeding_limits(&self) -> BreedingLimits {
        self.config.breeding_limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn pool() -> GenePool<Player> {
        GenePool::new(vec![
            (
                "a",
                vec![
                    Player::new("x", "X", &["A"], 10000, 20.0),
                    Player::new("y", "Y", &["A"], 5000, 8.0),
                ],
            ),
            (
                "b",
                vec![
                    Player::new("z", "Z", &["B"], 45000, 50.0),
                    Player::new("w", "W", &["B"], 3000, 5.0),
                ],
            ),
        ])
        .unwrap()
    }

    fn seeded(seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let config = EvolutionConfig {
            budget: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            EvolutionEngine::new(pool(), config),
            Err(LineupError::Configuration(_))
        ));
    }

    #[test]
    fn test_lazy_seeding() {
        let mut engine = EvolutionEngine::new(pool(), seeded(1)).unwrap();
        assert!(!engine.is_seeded());
        assert!(engine.best().is_empty());

        engine.run(1).unwrap();

        assert!(engine.is_seeded());
        assert_eq!(engine.current_generation().len(), 4);
        assert_eq!(engine.generations_run(), 1);
    }

    #[test]
    fn test_zero_generations_rejected() {
        let mut engine = EvolutionEngine::new(pool(), seeded(1)).unwrap();
        assert!(engine.run(0).is_err());
        assert!(!engine.is_seeded());
    }

    #[test]
    fn test_run_generations_overrides_sizes() {
        let mut engine = EvolutionEngine::new(pool(), seeded(4)).unwrap();
        engine.run_generations(3, 2, 6).unwrap();

        assert_eq!(engine.current_generation().len(), 6);
        assert!(engine.best().len() <= 2);
        assert!(engine.run_generations(1, 0, 4).is_err());
    }

    #[test]
    fn test_rejected_run_generations_keeps_state() {
        let mut engine = EvolutionEngine::new(pool(), seeded(6)).unwrap();
        engine.run(10).unwrap();
        let before = engine.best().len();
        assert!(before > 1);

        assert!(engine.run_generations(0, 1, 4).is_err());

        assert_eq!(engine.best().len(), before);
        assert_eq!(engine.config().keep_best_n, 5);
        assert_eq!(engine.generations_run(), 10);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = EvolutionConfig {
            parallel: false,
            ..seeded(17)
        };
        let mut a = EvolutionEngine::new(pool(), seeded(17)).unwrap();
        let mut b = EvolutionEngine::new(pool(), sequential).unwrap();

        a.run(20).unwrap();
        b.run(20).unwrap();

        let sig_a: Vec<_> = a.best().iter().map(|e| e.signature.clone()).collect();
        let sig_b: Vec<_> = b.best().iter().map(|e| e.signature.clone()).collect();
        assert_eq!(sig_a, sig_b);
    }
}
