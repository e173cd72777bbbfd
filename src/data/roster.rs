use crate::config::RosterConfig;
use crate::engines::evolution::GenePool;
use crate::error::{LineupError, Result};
use crate::types::Player;
use std::sync::Arc;

/// Drop players the roster filters rule out.
pub fn filter_players(players: Vec<Player>, roster: &RosterConfig) -> Vec<Player> {
    let before = players.len();
    let kept: Vec<Player> = players
        .into_iter()
        .filter(|p| {
            !roster
                .excluded
                .iter()
                .any(|x| x == &p.id || x.eq_ignore_ascii_case(&p.name))
        })
        .filter(|p| roster.min_salary.map_or(true, |min| p.salary > min))
        .filter(|p| {
            roster
                .min_expected_points
                .map_or(true, |min| p.expected_points >= min)
        })
        .collect();

    if kept.len() < before {
        log::info!("Filtered out {} of {} players", before - kept.len(), before);
    }
    kept
}

/// Build one candidate list per roster slot.
///
/// A player eligible for several slots appears in each of them as the same
/// shared handle, so the lineup uniqueness rule still applies across slots.
pub fn build_gene_pool(players: Vec<Player>, roster: &RosterConfig) -> Result<GenePool<Player>> {
    let players: Vec<Arc<Player>> = filter_players(players, roster)
        .into_iter()
        .map(Arc::new)
        .collect();

    for player in &players {
        if !roster.slots.iter().any(|slot| slot.accepts(player)) {
            log::warn!(
                "{} ({:?}) is not eligible for any slot",
                player.name,
                player.positions
            );
        }
    }

    let mut entries = Vec::with_capacity(roster.slots.len());
    for slot in &roster.slots {
        let eligible: Vec<Arc<Player>> = players
            .iter()
            .filter(|p| slot.accepts(p))
            .cloned()
            .collect();

        if eligible.is_empty() {
            return Err(LineupError::Configuration(format!(
                "No players eligible for slot '{}' (positions {:?})",
                slot.name, slot.eligible
            )));
        }
        log::debug!("Slot {}: {} candidates", slot.name, eligible.len());
        entries.push((slot.name.clone(), eligible));
    }

    GenePool::from_shared(entries)
}
