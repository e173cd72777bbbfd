use crate::engines::evolution::gene_pool::GenePool;
use crate::engines::evolution::lineup::{DraftLineup, Lineup};
use crate::error::{ConstructionStage, LineupError, Result};
use crate::types::Candidate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::sync::Arc;

/// Limits shared by every lineup construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreedingLimits {
    pub budget: f64,
    pub max_attempts: usize,
    pub min_swaps: usize,
    pub max_swaps: usize,
}

fn check_layout(pool_slots: &[String], slots: &[String], what: &str) -> Result<()> {
    if pool_slots != slots {
        return Err(LineupError::Generation(format!(
            "{} has slots {:?} but the gene pool has {:?}",
            what, slots, pool_slots
        )));
    }
    Ok(())
}

/// Uniform pick among the slot's candidates that fill no other slot.
fn draw_unused<'a, C: Candidate, R: Rng>(
    pool: &'a GenePool<C>,
    draft: &DraftLineup<C>,
    index: usize,
    rng: &mut R,
) -> Option<&'a Arc<C>> {
    let options: Vec<&Arc<C>> = pool
        .candidates_at(index)
        .iter()
        .filter(|c| !draft.contains_elsewhere(&c.id(), index))
        .collect();
    options.choose(rng).copied()
}

/// Random viable lineup by rejection sampling.
///
/// Each slot gets a uniform draw among candidates not used yet. A lineup that
/// cannot be completed or busts the budget is thrown away and rebuilt from
/// scratch, at most `max_attempts` times.
pub fn random_lineup<C: Candidate, R: Rng>(
    pool: &GenePool<C>,
    limits: &BreedingLimits,
    rng: &mut R,
) -> Result<Lineup<C>> {
    'attempt: for attempt in 1..=limits.max_attempts {
        let mut draft = DraftLineup::empty(pool);

        for index in 0..pool.len() {
            match draw_unused(pool, &draft, index, rng) {
                Some(candidate) => draft.set_gene_at(index, Arc::clone(candidate)),
                None => {
                    log::trace!("random lineup attempt {} ran out of candidates", attempt);
                    continue 'attempt;
                }
            }
        }

        if draft.is_viable(limits.budget) {
            return draft.freeze();
        }
        log::trace!(
            "random lineup attempt {} over budget ({:.0} > {:.0})",
            attempt,
            draft.total_cost(),
            limits.budget
        );
    }

    Err(LineupError::Infeasible {
        stage: ConstructionStage::RandomLineup,
        attempts: limits.max_attempts,
    })
}

/// The `n` fittest lineups, best first. Ties keep generation order.
pub fn select_parents<C: Candidate>(generation: &[Lineup<C>], n: usize) -> Vec<Lineup<C>> {
    let mut sorted: Vec<&Lineup<C>> = generation.iter().collect();
    sorted.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(Ordering::Equal)
    });
    sorted.into_iter().take(n).cloned().collect()
}

/// Combine parents into one viable child.
///
/// Every slot inherits the gene of a randomly chosen parent. When that
/// candidate already sits in another slot of the child, a fresh unused
/// candidate is drawn from the pool instead. A child built purely from
/// inherited genes is mutated afterwards so the population cannot settle on
/// the parents' exact combinations.
pub fn cross_over<C: Candidate, R: Rng>(
    pool: &GenePool<C>,
    parents: &[Lineup<C>],
    limits: &BreedingLimits,
    rng: &mut R,
) -> Result<Lineup<C>> {
    if parents.is_empty() {
        return Err(LineupError::Generation(
            "Crossover needs at least one parent".to_string(),
        ));
    }
    for parent in parents {
        check_layout(pool.slots(), parent.slots(), "Parent")?;
    }

    'attempt: for attempt in 1..=limits.max_attempts {
        let mut draft = DraftLineup::empty(pool);
        let mut mutated = false;

        for index in 0..pool.len() {
            let parent = &parents[rng.gen_range(0..parents.len())];
            let inherited = parent.gene_at(index);

            if !draft.contains_elsewhere(&inherited.id(), index) {
                draft.set_gene_at(index, Arc::clone(inherited));
                continue;
            }

            mutated = true;
            match draw_unused(pool, &draft, index, rng) {
                Some(candidate) => draft.set_gene_at(index, Arc::clone(candidate)),
                None => {
                    log::trace!("crossover attempt {} ran out of candidates", attempt);
                    continue 'attempt;
                }
            }
        }

        if !mutated {
            mutate(pool, &mut draft, limits.min_swaps, limits.max_swaps, rng)?;
        }

        if draft.is_viable(limits.budget) {
            return draft.freeze();
        }
        log::trace!("crossover attempt {} over budget", attempt);
    }

    Err(LineupError::Infeasible {
        stage: ConstructionStage::CrossOver,
        attempts: limits.max_attempts,
    })
}

/// Replace between `min_swaps` and `max_swaps` random genes.
///
/// A replacement never duplicates a candidate held by another slot. When the
/// slot has an alternative to its current candidate, the current one is not
/// redrawn. The draft must have been built for `pool`.
pub fn mutate<C: Candidate, R: Rng>(
    pool: &GenePool<C>,
    draft: &mut DraftLineup<C>,
    min_swaps: usize,
    max_swaps: usize,
    rng: &mut R,
) -> Result<()> {
    check_layout(pool.slots(), draft.slots(), "Lineup")?;

    let swaps = rng.gen_range(min_swaps..=max_swaps.max(min_swaps));

    for _ in 0..swaps {
        let index = rng.gen_range(0..pool.len());
        let current = draft.gene_at(index).map(|c| c.id());

        let mut options: Vec<&Arc<C>> = pool
            .candidates_at(index)
            .iter()
            .filter(|c| !draft.contains_elsewhere(&c.id(), index))
            .collect();
        if options.len() > 1 {
            options.retain(|c| Some(c.id()) != current);
        }

        if let Some(candidate) = options.choose(rng) {
            draft.set_gene_at(index, Arc::clone(candidate));
        }
    }
    Ok(())
}
