use crate::engines::evolution::EliteLineup;
use crate::error::{LineupError, Result};
use crate::types::Candidate;
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub slot: String,
    pub id: String,
    pub label: String,
    pub cost: f64,
    pub expected_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSummary {
    pub rank: usize,
    pub slots: Vec<SlotAssignment>,
    pub total_cost: f64,
    pub fitness: f64,
    pub actual: Option<f64>,
    pub generation: usize,
}

impl LineupSummary {
    pub fn from_elite<C: Candidate>(rank: usize, elite: &EliteLineup<C>) -> Self {
        Self {
            rank,
            slots: elite
                .lineup
                .genes()
                .map(|(slot, c)| SlotAssignment {
                    slot: slot.to_string(),
                    id: c.id().to_string(),
                    label: c.label(),
                    cost: c.cost(),
                    expected_value: c.expected_value(),
                })
                .collect(),
            total_cost: elite.lineup.total_cost(),
            fitness: elite.fitness(),
            actual: elite.actual,
            generation: elite.generation,
        }
    }
}

/// Everything worth keeping from one optimisation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub budget: f64,
    pub generations_run: usize,
    pub lineups: Vec<LineupSummary>,
}

impl RunReport {
    pub fn new<C: Candidate>(best: &[EliteLineup<C>], budget: f64, generations_run: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            budget,
            generations_run,
            lineups: best
                .iter()
                .enumerate()
                .map(|(i, elite)| LineupSummary::from_elite(i + 1, elite))
                .collect(),
        }
    }
}

pub struct LineupExporter;

impl LineupExporter {
    /// One row per lineup, one column per slot holding the candidate id.
    pub fn to_frame<C: Candidate>(best: &[EliteLineup<C>]) -> Result<DataFrame> {
        let first = best
            .first()
            .ok_or_else(|| LineupError::Export("No lineups to export".to_string()))?;

        let mut columns = vec![Column::new(
            "rank".into(),
            (1..=best.len() as u32).collect::<Vec<u32>>(),
        )];

        for (index, slot) in first.lineup.slots().iter().enumerate() {
            let ids: Vec<String> = best
                .iter()
                .map(|elite| elite.lineup.gene_at(index).id().to_string())
                .collect();
            columns.push(Column::new(slot.as_str().into(), ids));
        }

        columns.push(Column::new(
            "total_cost".into(),
            best.iter().map(|e| e.lineup.total_cost()).collect::<Vec<f64>>(),
        ));
        columns.push(Column::new(
            "fitness".into(),
            best.iter().map(|e| e.fitness()).collect::<Vec<f64>>(),
        ));
        columns.push(Column::new(
            "actual".into(),
            best.iter().map(|e| e.actual).collect::<Vec<Option<f64>>>(),
        ));

        Ok(DataFrame::new(columns)?)
    }

    pub fn to_csv<C: Candidate, P: AsRef<Path>>(path: P, best: &[EliteLineup<C>]) -> Result<()> {
        let mut df = Self::to_frame(best)?;
        let mut file = File::create(path.as_ref())?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| LineupError::Export(format!("Failed to write CSV: {}", e)))?;

        log::info!("Exported {} lineups to {}", best.len(), path.as_ref().display());
        Ok(())
    }

    pub fn to_json<P: AsRef<Path>>(path: P, report: &RunReport) -> Result<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, report)?;

        log::info!(
            "Wrote run report ({} lineups) to {}",
            report.lineups.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<RunReport> {
        let file = File::open(path.as_ref())?;
        Ok(serde_json::from_reader(file)?)
    }
}
