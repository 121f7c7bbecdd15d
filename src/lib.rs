mod analysis;
mod config;
mod dashboard;
mod error;
mod observations;
mod types;
mod views;

#[cfg(feature = "server")]
pub mod http;

#[cfg(test)]
mod test_support;

pub use config::{DashboardConfig, DEFAULT_PORT, DEFAULT_TITLE};
pub use error::DashboardError;

pub use types::column::{NumericColumn, ObservationColumn};
pub use types::observation::Observation;

pub use observations::cache::{get_observation_table, ObservationCache, DEFAULT_DATA_FILE};
pub use observations::data_loader::load_observations;
pub use observations::error::LoadError;
pub use observations::table::{ObservationTable, StationView};

pub use analysis::correlation::{correlation_matrix, CorrelationMatrix};
pub use analysis::describe::{describe, quantile, SummaryStatistics};

pub use views::cluster_scatter::cluster_scatter;
pub use views::correlation_heatmap::{correlation_heatmap, station_correlations};
pub use views::error::{View, ViewError};
pub use views::figure::*;
pub use views::seasonal_boxplot::{season_groups, seasonal_boxplot, SeasonGroup};
pub use views::summary::{station_summaries, StationSummary};
pub use views::time_series::time_series;

pub use dashboard::app::{render_page, Dashboard, DashboardPage};
pub use dashboard::narrative::{CONCLUSIONS, CONCLUSIONS_INTRO, SIDEBAR_HEADER, SIDEBAR_NOTE};
pub use dashboard::page::render_error_page;
pub use dashboard::selector::StationSelector;
