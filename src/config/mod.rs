pub mod traits;
pub mod evolution;
pub mod roster;
pub mod data;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use roster::{RosterConfig, SlotRule};
pub use data::DataConfig;
pub use traits::ConfigSection;
