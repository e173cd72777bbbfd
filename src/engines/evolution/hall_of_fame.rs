use crate::engines::evolution::lineup::Lineup;
use crate::error::{LineupError, Result};
use crate::types::Candidate;

use std::cmp::Ordering;
use std::collections::HashSet;

pub struct EliteLineup<C: Candidate> {
    pub lineup: Lineup<C>,
    pub signature: Vec<C::Id>, // Slot order, for export
    pub generation: usize,     // Generation that first produced it
    pub actual: Option<f64>,   // Observed outcome, attached after the games
}

impl<C: Candidate> EliteLineup<C> {
    pub fn fitness(&self) -> f64 {
        self.lineup.fitness()
    }
}

impl<C: Candidate> Clone for EliteLineup<C> {
    fn clone(&self) -> Self {
        Self {
            lineup: self.lineup.clone(),
            signature: self.signature.clone(),
            generation: self.generation,
            actual: self.actual,
        }
    }
}

/// Bounded best-of-all-time list, fittest first.
pub struct HallOfFame<C: Candidate> {
    lineups: Vec<EliteLineup<C>>,
    max_size: usize,
    seen_rosters: HashSet<Vec<C::Id>>,
}

impl<C: Candidate> HallOfFame<C> {
    pub fn new(max_size: usize) -> Self {
        Self {
            lineups: Vec::new(),
            max_size,
            seen_rosters: HashSet::new(),
        }
    }

    /// Attempt to add a lineup. Returns false when the same set of candidates
    /// is already listed, whatever slots they fill.
    pub fn try_add(&mut self, lineup: Lineup<C>, generation: usize) -> bool {
        let added = self.insert(lineup, generation);
        if added {
            self.sort_and_trim();
        }
        added
    }

    /// Merge a whole generation, then sort and trim once.
    pub fn merge(&mut self, generation_lineups: &[Lineup<C>], generation: usize) -> usize {
        let added = generation_lineups
            .iter()
            .filter(|lineup| self.insert((*lineup).clone(), generation))
            .count();
        self.sort_and_trim();
        added
    }

    fn insert(&mut self, lineup: Lineup<C>, generation: usize) -> bool {
        if !self.seen_rosters.insert(lineup.roster()) {
            return false;
        }

        self.lineups.push(EliteLineup {
            signature: lineup.signature(),
            lineup,
            generation,
            actual: None,
        });
        true
    }

    fn sort_and_trim(&mut self) {
        // Stable: on equal fitness the earlier entry stays ahead
        self.lineups.sort_by(|a, b| {
            b.fitness()
                .partial_cmp(&a.fitness())
                .unwrap_or(Ordering::Equal)
        });

        while self.lineups.len() > self.max_size {
            if let Some(removed) = self.lineups.pop() {
                self.seen_rosters.remove(&removed.lineup.roster());
            }
        }
    }

    /// Change the bound; shrinking drops the weakest entries immediately.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        self.sort_and_trim();
    }

    /// Record what a lineup actually scored. Genes are untouched.
    pub fn annotate_actual(&mut self, rank: usize, actual: f64) -> Result<()> {
        let len = self.lineups.len();
        let entry = self.lineups.get_mut(rank).ok_or_else(|| {
            LineupError::Generation(format!(
                "No lineup at rank {} (hall of fame holds {})",
                rank, len
            ))
        })?;
        entry.actual = Some(actual);
        Ok(())
    }

    pub fn get_all(&self) -> &[EliteLineup<C>] {
        &self.lineups
    }

    pub fn get_top_n(&self, n: usize) -> &[EliteLineup<C>] {
        &self.lineups[..n.min(self.lineups.len())]
    }

    pub fn best(&self) -> Option<&EliteLineup<C>> {
        self.lineups.first()
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best().map(EliteLineup::fitness)
    }

    pub fn len(&self) -> usize {
        self.lineups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }
}
