use crate::analysis::describe::{describe, SummaryStatistics};
use crate::observations::table::ObservationTable;
use crate::types::column::ObservationColumn;
use crate::views::error::{View, ViewError};
use serde::Serialize;

/// One row of the overview table: PM2.5 statistics for a single station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub station: String,
    #[serde(flatten)]
    pub statistics: SummaryStatistics,
}

/// Describes the PM2.5 column of the full table, one row per station ordered by name.
///
/// # Errors
///
/// Returns [`ViewError::MissingColumn`] if the table has no PM2.5 column.
pub fn station_summaries(table: &ObservationTable) -> Result<Vec<StationSummary>, ViewError> {
    table.require(View::Summary, &[ObservationColumn::Pm25])?;

    Ok(table
        .group_by_station()
        .into_iter()
        .map(|(station, rows)| {
            let values: Vec<f64> = rows.iter().filter_map(|r| r.pm25).collect();
            StationSummary {
                station: station.to_string(),
                statistics: describe(&values),
            }
        })
        .collect())
}
