#![allow(dead_code)]

use lineup_evolver::config::RosterConfig;
use lineup_evolver::data::build_gene_pool;
use lineup_evolver::{GenePool, Player};

const POSITIONS: [&[&str]; 7] = [
    &["PG"],
    &["SG"],
    &["SF"],
    &["PF"],
    &["C"],
    &["PG", "SG"],
    &["SF", "PF"],
];

/// Deterministic slate of `n` players covering every classic position.
pub fn synthetic_slate(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| {
            let salary = 3000 + ((i * 1375) % 8200) as u32;
            let value = salary as f64 / 220.0 + ((i * 7) % 11) as f64;
            Player::new(
                format!("{}", 1000 + i),
                format!("Player {}", i),
                POSITIONS[i % POSITIONS.len()],
                salary,
                value,
            )
        })
        .collect()
}

pub fn classic_pool(n: usize) -> GenePool<Player> {
    build_gene_pool(synthetic_slate(n), &RosterConfig::classic()).unwrap()
}

/// The two-slot example: {a: [X, Y], b: [Z, W]}
pub fn tiny_pool() -> GenePool<Player> {
    GenePool::new(vec![
        (
            "a",
            vec![
                Player::new("X", "X", &["A"], 10000, 20.0),
                Player::new("Y", "Y", &["A"], 5000, 8.0),
            ],
        ),
        (
            "b",
            vec![
                Player::new("Z", "Z", &["B"], 45000, 50.0),
                Player::new("W", "W", &["B"], 3000, 5.0),
            ],
        ),
    ])
    .unwrap()
}
