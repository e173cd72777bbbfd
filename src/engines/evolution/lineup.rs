use crate::engines::evolution::gene_pool::GenePool;
use crate::error::{LineupError, Result};
use crate::types::Candidate;
use std::fmt;
use std::sync::Arc;

/// A lineup under construction: one optional gene per slot.
///
/// Aggregates are recomputed on every call, so they always reflect the
/// current assignment. Once complete, `freeze` turns it into a [`Lineup`].
pub struct DraftLineup<C: Candidate> {
    slots: Arc<[String]>,
    genes: Vec<Option<Arc<C>>>,
}

impl<C: Candidate> DraftLineup<C> {
    pub fn empty(pool: &GenePool<C>) -> Self {
        Self::with_slots(pool.shared_slots())
    }

    pub(crate) fn with_slots(slots: Arc<[String]>) -> Self {
        let genes = vec![None; slots.len()];
        Self { slots, genes }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn set_gene(&mut self, slot: &str, candidate: Arc<C>) -> Result<()> {
        let index = self
            .slots
            .iter()
            .position(|s| s == slot)
            .ok_or_else(|| LineupError::UnknownSlot(slot.to_string()))?;
        self.set_gene_at(index, candidate);
        Ok(())
    }

    pub(crate) fn set_gene_at(&mut self, index: usize, candidate: Arc<C>) {
        self.genes[index] = Some(candidate);
    }

    pub(crate) fn gene_at(&self, index: usize) -> Option<&Arc<C>> {
        self.genes[index].as_ref()
    }

    pub fn gene(&self, slot: &str) -> Option<&C> {
        let index = self.slots.iter().position(|s| s == slot)?;
        self.genes[index].as_deref()
    }

    /// True if `id` already fills any slot.
    pub fn contains(&self, id: &C::Id) -> bool {
        self.genes.iter().flatten().any(|c| &c.id() == id)
    }

    /// True if `id` fills any slot other than `index`.
    pub(crate) fn contains_elsewhere(&self, id: &C::Id, index: usize) -> bool {
        self.genes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .filter_map(|(_, g)| g.as_ref())
            .any(|c| &c.id() == id)
    }

    pub fn total_cost(&self) -> f64 {
        self.genes.iter().flatten().map(|c| c.cost()).sum()
    }

    pub fn fitness(&self) -> f64 {
        self.genes.iter().flatten().map(|c| c.expected_value()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.genes.iter().all(Option::is_some)
    }

    pub fn is_viable(&self, budget: f64) -> bool {
        self.is_complete() && self.total_cost() <= budget
    }

    /// Memoize the aggregates and drop the setters.
    pub fn freeze(self) -> Result<Lineup<C>> {
        let total_cost = self.total_cost();
        let fitness = self.fitness();
        let genes = self
            .genes
            .into_iter()
            .enumerate()
            .map(|(i, g)| {
                g.ok_or_else(|| {
                    LineupError::Generation(format!("Slot '{}' is unassigned", self.slots[i]))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Lineup {
            slots: self.slots,
            genes,
            total_cost,
            fitness,
        })
    }
}

impl<C: Candidate> Clone for DraftLineup<C> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            genes: self.genes.clone(),
        }
    }
}

/// A complete lineup whose genes can no longer change.
pub struct Lineup<C: Candidate> {
    slots: Arc<[String]>,
    genes: Vec<Arc<C>>,
    total_cost: f64,
    fitness: f64,
}

impl<C: Candidate> Lineup<C> {
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// `(slot, candidate)` pairs in slot order.
    pub fn genes(&self) -> impl Iterator<Item = (&str, &C)> + '_ {
        self.slots
            .iter()
            .map(String::as_str)
            .zip(self.genes.iter().map(|g| &**g))
    }

    pub fn gene(&self, slot: &str) -> Option<&C> {
        let index = self.slots.iter().position(|s| s == slot)?;
        Some(&*self.genes[index])
    }

    pub(crate) fn gene_at(&self, index: usize) -> &Arc<C> {
        &self.genes[index]
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Total expected value.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn is_viable(&self, budget: f64) -> bool {
        self.total_cost <= budget
    }

    /// Slot-ordered identities, used to spot the same lineup twice.
    pub fn signature(&self) -> Vec<C::Id> {
        self.genes.iter().map(|c| c.id()).collect()
    }

    /// Identities in sorted order. Equal for the same players in any slots.
    pub fn roster(&self) -> Vec<C::Id> {
        let mut ids = self.signature();
        ids.sort();
        ids
    }

    pub fn has_unique_candidates(&self) -> bool {
        let ids = self.signature();
        ids.iter()
            .enumerate()
            .all(|(i, id)| !ids[i + 1..].contains(id))
    }

    pub fn to_draft(&self) -> DraftLineup<C> {
        DraftLineup {
            slots: Arc::clone(&self.slots),
            genes: self.genes.iter().cloned().map(Some).collect(),
        }
    }
}

impl<C: Candidate> Clone for Lineup<C> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            genes: self.genes.clone(),
            total_cost: self.total_cost,
            fitness: self.fitness,
        }
    }
}

impl<C: Candidate> fmt::Debug for Lineup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lineup")
            .field("genes", &self.genes().map(|(s, c)| (s, c.label())).collect::<Vec<_>>())
            .field("total_cost", &self.total_cost)
            .field("fitness", &self.fitness)
            .finish()
    }
}
