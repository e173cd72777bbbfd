pub mod connectors;
pub mod export;
pub mod roster;

pub use connectors::{CsvConnector, SlateMetadata};
pub use export::{LineupExporter, LineupSummary, RunReport, SlotAssignment};
pub use roster::{build_gene_pool, filter_players};
