mod common;

use lineup_evolver::config::EvolutionConfig;
use lineup_evolver::engines::evolution::{
    ChannelProgressCallback, EvolutionEngine, ProgressCallback, ProgressMessage,
};
use lineup_evolver::error::{ConstructionStage, LineupError};
use lineup_evolver::{EliteLineup, GenePool, Player};
use std::collections::HashSet;
use std::sync::mpsc::channel;
use std::sync::Arc;

/// Records best fitness after every generation
struct RecordingCallback {
    best_per_generation: Vec<f64>,
    hall_sizes: Vec<usize>,
    bred: usize,
}

impl RecordingCallback {
    fn new() -> Self {
        Self {
            best_per_generation: Vec::new(),
            hall_sizes: Vec::new(),
            bred: 0,
        }
    }
}

impl ProgressCallback for RecordingCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, best_fitness: f64, hall_size: usize) {
        self.best_per_generation.push(best_fitness);
        self.hall_sizes.push(hall_size);
    }

    fn on_lineup_bred(&mut self, _lineup_num: usize, _total: usize) {
        self.bred += 1;
    }
}

fn config(seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

fn assert_best_invariants(best: &[EliteLineup<Player>], keep_best_n: usize, slots: usize, budget: f64) {
    assert!(best.len() <= keep_best_n);
    for window in best.windows(2) {
        assert!(window[0].fitness() >= window[1].fitness(), "best list not sorted");
    }
    for elite in best {
        assert!(elite.lineup.total_cost() <= budget, "over budget: {}", elite.lineup.total_cost());
        assert!(elite.lineup.is_viable(budget));
        assert!(elite.lineup.has_unique_candidates(), "candidate used twice");
        assert_eq!(elite.lineup.genes().count(), slots, "incomplete lineup");
    }
}

#[test]
fn test_tiny_pool_converges_on_unique_optimum() {
    let mut engine = EvolutionEngine::new(common::tiny_pool(), config(42)).unwrap();

    let best = engine.run(50).unwrap();

    assert_eq!(best[0].signature, vec!["Y".to_string(), "Z".to_string()]);
    assert_eq!(best[0].fitness(), 58.0);
    assert_eq!(best[0].lineup.total_cost(), 50000.0);
    assert!(best
        .iter()
        .all(|e| e.signature != vec!["X".to_string(), "Z".to_string()]));
    assert_best_invariants(best, 5, 2, 50000.0);
}

#[test]
fn test_best_list_invariants_hold_every_generation() {
    let pool = common::classic_pool(40);
    let mut engine = EvolutionEngine::new(pool, config(7)).unwrap();
    let mut previous_best = f64::MIN;

    for _ in 0..30 {
        engine.run(1).unwrap();
        let best = engine.best();

        assert_best_invariants(best, 5, 8, 50000.0);
        let top = best[0].fitness();
        assert!(top >= previous_best, "best fitness dropped from {} to {}", previous_best, top);
        previous_best = top;
    }
}

#[test]
fn test_callback_sees_monotone_best() {
    let pool = common::classic_pool(40);
    let mut engine = EvolutionEngine::new(pool, config(3)).unwrap();
    let mut callback = RecordingCallback::new();

    engine.run_with_callback(40, &mut callback).unwrap();

    assert_eq!(callback.best_per_generation.len(), 40);
    assert_eq!(callback.bred, 40 * 4);
    for window in callback.best_per_generation.windows(2) {
        assert!(window[1] >= window[0]);
    }
    assert!(callback.hall_sizes.iter().all(|&size| size <= 5));
}

#[test]
fn test_keep_best_three_after_fifty_generations() {
    let pool = common::classic_pool(40);
    let mut engine = EvolutionEngine::new(pool, config(11)).unwrap();

    let best = engine.run_generations(50, 3, 4).unwrap();

    assert_eq!(best.len(), 3);
    assert_best_invariants(best, 3, 8, 50000.0);
}

#[test]
fn test_infeasible_pool_fails_instead_of_hanging() {
    let pool = GenePool::new(vec![
        (
            "a",
            vec![
                Player::new("p", "P", &["A"], 40000, 10.0),
                Player::new("q", "Q", &["A"], 40000, 12.0),
            ],
        ),
        (
            "b",
            vec![
                Player::new("r", "R", &["B"], 40000, 9.0),
                Player::new("s", "S", &["B"], 41000, 11.0),
            ],
        ),
    ])
    .unwrap();
    let limited = EvolutionConfig {
        max_attempts: 250,
        ..config(5)
    };
    let mut engine = EvolutionEngine::new(pool, limited).unwrap();

    match engine.run(10) {
        Err(LineupError::Infeasible { stage, attempts }) => {
            assert_eq!(stage, ConstructionStage::RandomLineup);
            assert_eq!(attempts, 250);
        }
        other => panic!("expected infeasible error, got {:?}", other.map(|b| b.len())),
    }
    assert!(engine.best().is_empty());
    assert!(!engine.is_seeded());
}

#[test]
fn test_crossover_infeasibility_surfaces_from_run() {
    let pool = GenePool::new(vec![(
        "only",
        vec![
            Player::new("a", "A", &["UTIL"], 10, 5.0),
            Player::new("c", "C", &["UTIL"], 100, 9.0),
        ],
    )])
    .unwrap();
    let config = EvolutionConfig {
        budget: 20.0,
        min_swaps: 1,
        max_swaps: 1,
        max_attempts: 100,
        ..config(1)
    };
    let mut engine = EvolutionEngine::new(pool, config).unwrap();

    match engine.run(1) {
        Err(LineupError::Infeasible { stage, attempts }) => {
            assert_eq!(stage, ConstructionStage::CrossOver);
            assert_eq!(attempts, 100);
        }
        other => panic!("expected crossover infeasibility, got {:?}", other.map(|b| b.len())),
    }
    assert!(engine.is_seeded());
    assert_eq!(engine.generations_run(), 0);
    assert_eq!(engine.best().len(), 1);
}

#[test]
fn test_shared_slots_keep_distinct_rosters() {
    let shared: Vec<Arc<Player>> = (0..3)
        .map(|i| {
            Arc::new(Player::new(
                i.to_string(),
                format!("Guard {}", i),
                &["G"],
                5000,
                10.0 + i as f64 * 1.5,
            ))
        })
        .collect();
    let pool = GenePool::from_shared(vec![
        ("g1".to_string(), shared.clone()),
        ("g2".to_string(), shared),
    ])
    .unwrap();
    let mut engine = EvolutionEngine::new(
        pool,
        EvolutionConfig {
            keep_best_n: 4,
            ..config(1)
        },
    )
    .unwrap();

    let best = engine.run(50).unwrap();

    let rosters: HashSet<Vec<String>> = best
        .iter()
        .map(|e| {
            let mut ids = e.signature.clone();
            ids.sort();
            ids
        })
        .collect();
    assert_eq!(best.len(), 3);
    assert_eq!(rosters.len(), best.len());
}

#[test]
fn test_run_resumes_from_previous_state() {
    let pool = common::classic_pool(40);
    let mut engine = EvolutionEngine::new(pool, config(23)).unwrap();

    engine.run(10).unwrap();
    let first_best = engine.best()[0].fitness();
    engine.run(10).unwrap();

    assert_eq!(engine.generations_run(), 20);
    assert!(engine.best()[0].fitness() >= first_best);
}

#[test]
fn test_same_seed_same_result() {
    let mut a = EvolutionEngine::new(common::classic_pool(40), config(99)).unwrap();
    let mut b = EvolutionEngine::new(common::classic_pool(40), config(99)).unwrap();

    let best_a: Vec<_> = a.run(25).unwrap().iter().map(|e| e.signature.clone()).collect();
    let best_b: Vec<_> = b.run(25).unwrap().iter().map(|e| e.signature.clone()).collect();

    assert_eq!(best_a, best_b);
}

#[test]
fn test_channel_progress_reports_each_generation() {
    let (tx, rx) = channel();
    let mut engine = EvolutionEngine::new(common::tiny_pool(), config(8)).unwrap();
    let mut callback = ChannelProgressCallback::new(tx);

    engine.run_with_callback(6, &mut callback).unwrap();
    drop(callback);

    let completed: Vec<usize> = rx
        .iter()
        .filter_map(|msg| match msg {
            ProgressMessage::GenerationComplete { generation, .. } => Some(generation),
            _ => None,
        })
        .collect();
    assert_eq!(completed, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_actual_outcome_annotation() {
    let mut engine = EvolutionEngine::new(common::tiny_pool(), config(2)).unwrap();
    engine.run(5).unwrap();
    let signature = engine.best()[0].signature.clone();

    engine.annotate_actual(0, 64.5).unwrap();

    assert_eq!(engine.best()[0].actual, Some(64.5));
    assert_eq!(engine.best()[0].signature, signature);
}
