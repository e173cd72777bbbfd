use crate::error::{LineupError, Result};
use crate::types::Candidate;
use std::collections::HashSet;
use std::sync::Arc;

/// Per-slot candidate lists, in the slot order supplied by the caller.
///
/// The slot order defines gene order everywhere else: lineups store one gene
/// per slot index and iterate in this order. A pool is never empty and never
/// has an empty slot; both are rejected here so the evolution loops can rely
/// on every slot having at least one candidate.
pub struct GenePool<C: Candidate> {
    slots: Arc<[String]>,
    candidates: Vec<Vec<Arc<C>>>,
}

impl<C: Candidate> GenePool<C> {
    pub fn new<S: Into<String>>(entries: Vec<(S, Vec<C>)>) -> Result<Self> {
        Self::from_shared(
            entries
                .into_iter()
                .map(|(slot, candidates)| {
                    (slot.into(), candidates.into_iter().map(Arc::new).collect())
                })
                .collect(),
        )
    }

    /// Build from already shared candidates. Use this when one candidate is
    /// eligible for several slots so every slot holds the same handle.
    pub fn from_shared(entries: Vec<(String, Vec<Arc<C>>)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LineupError::Configuration(
                "Gene pool must declare at least one slot".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (slot, candidates) in &entries {
            if !seen.insert(slot.as_str()) {
                return Err(LineupError::Configuration(format!(
                    "Slot '{}' is declared more than once",
                    slot
                )));
            }
            if candidates.is_empty() {
                return Err(LineupError::Configuration(format!(
                    "Slot '{}' has no eligible candidates",
                    slot
                )));
            }
        }

        let (slots, candidates): (Vec<String>, Vec<Vec<Arc<C>>>) = entries.into_iter().unzip();

        Ok(Self {
            slots: slots.into(),
            candidates,
        })
    }

    pub fn builder() -> GenePoolBuilder<C> {
        GenePoolBuilder {
            entries: Vec::new(),
        }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub(crate) fn shared_slots(&self) -> Arc<[String]> {
        Arc::clone(&self.slots)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_index(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    pub fn candidates(&self, slot: &str) -> Result<&[Arc<C>]> {
        self.slot_index(slot)
            .map(|i| self.candidates[i].as_slice())
            .ok_or_else(|| LineupError::UnknownSlot(slot.to_string()))
    }

    pub(crate) fn candidates_at(&self, index: usize) -> &[Arc<C>] {
        &self.candidates[index]
    }

    /// Size of the unconstrained search space (product of pool sizes).
    pub fn combinations(&self) -> u128 {
        self.candidates
            .iter()
            .fold(1u128, |acc, pool| acc.saturating_mul(pool.len() as u128))
    }
}

pub struct GenePoolBuilder<C: Candidate> {
    entries: Vec<(String, Vec<Arc<C>>)>,
}

impl<C: Candidate> GenePoolBuilder<C> {
    pub fn slot(mut self, name: impl Into<String>, candidates: Vec<C>) -> Self {
        self.entries
            .push((name.into(), candidates.into_iter().map(Arc::new).collect()));
        self
    }

    pub fn build(self) -> Result<GenePool<C>> {
        GenePool::from_shared(self.entries)
    }
}
