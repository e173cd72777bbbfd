mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{RequiredColumn, SlateMetadata, TEAM_ALIASES};
pub use validator::DataValidator;
