use crate::engines::evolution::EliteLineup;
use crate::types::Candidate;
use std::fmt;

const RULE_WIDTH: usize = 72;

/// Plain-text table of the best lineups, fittest first.
pub struct LineupReport<'a, C: Candidate> {
    lineups: &'a [EliteLineup<C>],
    budget: f64,
}

impl<'a, C: Candidate> LineupReport<'a, C> {
    pub fn new(lineups: &'a [EliteLineup<C>], budget: f64) -> Self {
        Self { lineups, budget }
    }
}

impl<C: Candidate> fmt::Display for LineupReport<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lineups.is_empty() {
            return writeln!(f, "No lineups");
        }

        for (rank, elite) in self.lineups.iter().enumerate() {
            writeln!(f, "Lineup {}", rank + 1)?;
            writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
            writeln!(f, "{:<8} {:<28} {:>10} {:>10} {:>10}", "Slot", "Name", "Cost", "Expected", "Actual")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

            for (slot, candidate) in elite.lineup.genes() {
                writeln!(
                    f,
                    "{:<8} {:<28} {:>10.0} {:>10.2} {:>10}",
                    slot.to_uppercase(),
                    candidate.label(),
                    candidate.cost(),
                    candidate.expected_value(),
                    ""
                )?;
            }

            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            let actual = elite
                .actual
                .map(|a| format!("{:.2}", a))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<8} {:<28} {:>10.0} {:>10.2} {:>10}",
                "TOTAL",
                format!("(cap {:.0})", self.budget),
                elite.lineup.total_cost(),
                elite.fitness(),
                actual
            )?;
            writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

            let names: Vec<String> = elite.lineup.genes().map(|(_, c)| c.label()).collect();
            writeln!(f, "{}", names.join(", "))?;
            writeln!(f)?;
        }

        Ok(())
    }
}
