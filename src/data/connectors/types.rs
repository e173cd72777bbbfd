use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Columns a contest salary file must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Id,
    Name,
    Position,
    Salary,
    ExpectedPoints,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Position => "position",
            Self::Salary => "salary",
            Self::ExpectedPoints => "expected_points",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Id,
            Self::Name,
            Self::Position,
            Self::Salary,
            Self::ExpectedPoints,
        ]
    }

    /// Common alternative column names
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Id => vec!["ID", "Id", "id", "player_id"],
            Self::Name => vec!["Name", "name", "Player", "player"],
            Self::Position => vec!["Position", "position", "Pos", "pos"],
            Self::Salary => vec!["Salary", "salary"],
            Self::ExpectedPoints => vec![
                "ExpectedPoints",
                "expected_points",
                "Projection",
                "projection",
                "AvgPointsPerGame",
            ],
        }
    }
}

/// Optional team column aliases
pub const TEAM_ALIASES: [&str; 4] = ["TeamAbbrev", "teamAbbrev", "Team", "team"];

/// Summary of a loaded slate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlateMetadata {
    pub file_path: String,
    pub num_players: usize,
    pub positions: Vec<String>,
    pub salary_range: (u32, u32), // (min, max)
    pub loaded_at: DateTime<Utc>,
}
