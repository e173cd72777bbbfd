use crate::error::{LineupError, Result};
use crate::types::Player;
use chrono::Utc;
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use super::{
    types::{RequiredColumn, SlateMetadata, TEAM_ALIASES},
    validator::DataValidator,
};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| LineupError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load and validate a contest salary file
    pub fn load_players<P: AsRef<Path>>(path: P) -> Result<Vec<Player>> {
        let df = Self::load(&path)?;
        let players = Self::players_from_frame(&df)?;
        log::info!(
            "Loaded {} players from {}",
            players.len(),
            path.as_ref().display()
        );
        Ok(players)
    }

    /// Convert a salary frame into players. Null cells are rejected.
    pub fn players_from_frame(df: &DataFrame) -> Result<Vec<Player>> {
        let column_map = DataValidator::validate_player_columns(df)?;

        let ids = df.column(&column_map[&RequiredColumn::Id])?.cast(&DataType::String)?;
        let names = df.column(&column_map[&RequiredColumn::Name])?.cast(&DataType::String)?;
        let positions = df.column(&column_map[&RequiredColumn::Position])?.cast(&DataType::String)?;
        let salaries = df.column(&column_map[&RequiredColumn::Salary])?.cast(&DataType::Float64)?;
        let points = df
            .column(&column_map[&RequiredColumn::ExpectedPoints])?
            .cast(&DataType::Float64)?;
        let teams = match DataValidator::find_column(df, &TEAM_ALIASES) {
            Some(name) => Some(df.column(name)?.cast(&DataType::String)?),
            None => None,
        };

        let ids = ids.str()?;
        let names = names.str()?;
        let positions = positions.str()?;
        let salaries = salaries.f64()?;
        let points = points.f64()?;
        let teams = match &teams {
            Some(column) => Some(column.str()?),
            None => None,
        };

        let mut players = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let missing = |column: RequiredColumn| {
                LineupError::DataLoading(format!(
                    "Row {} has no value for {}",
                    row + 1,
                    column.as_str()
                ))
            };

            let id = ids.get(row).ok_or_else(|| missing(RequiredColumn::Id))?;
            let name = names.get(row).ok_or_else(|| missing(RequiredColumn::Name))?;
            let position = positions
                .get(row)
                .ok_or_else(|| missing(RequiredColumn::Position))?;
            let salary = salaries
                .get(row)
                .ok_or_else(|| missing(RequiredColumn::Salary))?;
            let expected_points = points
                .get(row)
                .ok_or_else(|| missing(RequiredColumn::ExpectedPoints))?;

            if !salary.is_finite() || salary < 0.0 {
                return Err(LineupError::DataLoading(format!(
                    "Row {} has invalid salary {}",
                    row + 1,
                    salary
                )));
            }

            players.push(Player {
                id: id.trim().to_string(),
                name: name.trim().to_string(),
                team: teams
                    .and_then(|t| t.get(row))
                    .map(|t| t.trim().to_uppercase()),
                positions: Self::split_positions(position),
                salary: salary.round() as u32,
                expected_points,
            });
        }

        Ok(players)
    }

    /// `"PG/SG"` -> `["PG", "SG"]`
    pub fn split_positions(raw: &str) -> Vec<String> {
        raw.split('/')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_uppercase)
            .collect()
    }

    /// Create metadata for a loaded slate
    pub fn create_metadata<P: AsRef<Path>>(path: P, players: &[Player]) -> SlateMetadata {
        let positions: BTreeSet<String> = players
            .iter()
            .flat_map(|p| p.positions.iter().cloned())
            .collect();
        let min = players.iter().map(|p| p.salary).min().unwrap_or(0);
        let max = players.iter().map(|p| p.salary).max().unwrap_or(0);

        SlateMetadata {
            file_path: path.as_ref().display().to_string(),
            num_players: players.len(),
            positions: positions.into_iter().collect(),
            salary_range: (min, max),
            loaded_at: Utc::now(),
        }
    }
}
