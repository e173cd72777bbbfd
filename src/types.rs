use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Anything that can fill a lineup slot.
///
/// The engine only ever reads these three figures plus an identity used to
/// keep one candidate from occupying two slots. Implementations must be
/// `Send + Sync` because children of a generation are bred in parallel.
pub trait Candidate: Send + Sync {
    type Id: Ord + Hash + Clone + Debug + Display + Send + Sync;

    fn id(&self) -> Self::Id;
    fn cost(&self) -> f64;
    fn expected_value(&self) -> f64;

    /// Human readable name used in reports.
    fn label(&self) -> String {
        self.id().to_string()
    }
}

/// A player from a contest salary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
    pub positions: Vec<String>,
    pub salary: u32,
    pub expected_points: f64,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        positions: &[&str],
        salary: u32,
        expected_points: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: None,
            positions: positions.iter().map(|p| p.to_string()).collect(),
            salary,
            expected_points,
        }
    }

    pub fn plays(&self, position: &str) -> bool {
        self.positions.iter().any(|p| p.eq_ignore_ascii_case(position))
    }
}

impl Candidate for Player {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn cost(&self) -> f64 {
        self.salary as f64
    }

    fn expected_value(&self) -> f64 {
        self.expected_points
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
