use crate::types::column::ObservationColumn;
use std::fmt;
use thiserror::Error;

/// The independently rendered views of the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Summary,
    TimeSeries,
    SeasonalBoxplot,
    CorrelationHeatmap,
    ClusterScatter,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Summary => "summary statistics",
            View::TimeSeries => "time series",
            View::SeasonalBoxplot => "seasonal boxplot",
            View::CorrelationHeatmap => "correlation heatmap",
            View::ClusterScatter => "cluster scatter",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A failure confined to a single view. The page shows it inline in that view's slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("The {view} needs column '{column}', which is missing from the data")]
    MissingColumn {
        view: View,
        column: ObservationColumn,
    },

    #[error("Failed to serialize the {view} figure: {message}")]
    Serialization { view: View, message: String },
}
