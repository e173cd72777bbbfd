use crate::error::{LineupError, Result};
use polars::prelude::*;
use super::types::RequiredColumn;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Map every required player column to the name used in the file
    pub fn validate_player_columns(df: &DataFrame) -> Result<HashMap<RequiredColumn, String>> {
        let mut column_map = HashMap::new();

        for required in RequiredColumn::all() {
            match Self::find_column(df, &required.aliases()) {
                Some(col_name) => {
                    column_map.insert(required, col_name.to_string());
                }
                None => {
                    return Err(LineupError::DataLoading(format!(
                        "Missing required column: {} (tried aliases: {:?})",
                        required.as_str(),
                        required.aliases()
                    )));
                }
            }
        }

        for required in [RequiredColumn::Salary, RequiredColumn::ExpectedPoints] {
            let actual_name = &column_map[&required];
            let column = df.column(actual_name)?;
            if !matches!(column.dtype(), DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32) {
                return Err(LineupError::DataLoading(format!(
                    "Column '{}' ({}) must be numeric, found {:?}",
                    actual_name,
                    required.as_str(),
                    column.dtype()
                )));
            }
        }

        if df.height() == 0 {
            return Err(LineupError::DataLoading("Salary file has no players".to_string()));
        }

        Ok(column_map)
    }

    /// First alias present in the frame
    pub fn find_column<'a>(df: &DataFrame, aliases: &[&'a str]) -> Option<&'a str> {
        let columns = df.get_column_names();
        aliases
            .iter()
            .find(|alias| columns.iter().any(|col| col.as_str() == **alias))
            .copied()
    }
}
