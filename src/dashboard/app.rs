//! The dashboard event flow: a station change recomputes the filtered view and re-renders
//! every view against the shared, already loaded observation table.

use crate::config::DashboardConfig;
use crate::dashboard::selector::StationSelector;
use crate::error::DashboardError;
use crate::observations::cache::ObservationCache;
use crate::observations::table::ObservationTable;
use crate::views::cluster_scatter::cluster_scatter;
use crate::views::correlation_heatmap::correlation_heatmap;
use crate::views::error::ViewError;
use crate::views::figure::Figure;
use crate::views::seasonal_boxplot::seasonal_boxplot;
use crate::views::summary::{station_summaries, StationSummary};
use crate::views::time_series::time_series;
use log::debug;
use std::sync::Arc;

/// Everything one page render shows, each view with its own success or failure.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub title: String,
    pub stations: Vec<String>,
    pub selected_station: Option<String>,
    /// Number of rows in the filtered view behind the charts.
    pub station_rows: usize,
    pub summary: Result<Vec<StationSummary>, ViewError>,
    pub time_series: Result<Figure, ViewError>,
    pub seasonal_boxplot: Result<Figure, ViewError>,
    pub correlation_heatmap: Result<Figure, ViewError>,
    pub cluster_scatter: Result<Figure, ViewError>,
}

impl DashboardPage {
    /// The four chart slots in page order.
    pub fn charts(&self) -> [&Result<Figure, ViewError>; 4] {
        [
            &self.time_series,
            &self.seasonal_boxplot,
            &self.correlation_heatmap,
            &self.cluster_scatter,
        ]
    }
}

/// Renders every view for `station`. A station without rows gives empty charts.
pub fn render_page(
    table: &ObservationTable,
    title: &str,
    station: Option<&str>,
) -> DashboardPage {
    // No selection filters on the empty station, which the loader never produces.
    let view = table.filter_station(station.unwrap_or_default());
    debug!(
        "Rendering dashboard for station {:?} ({} rows)",
        station,
        view.len()
    );

    DashboardPage {
        title: title.to_string(),
        stations: table.stations().to_vec(),
        selected_station: station.map(str::to_string),
        station_rows: view.len(),
        summary: station_summaries(table),
        time_series: time_series(&view),
        seasonal_boxplot: seasonal_boxplot(&view),
        correlation_heatmap: correlation_heatmap(&view),
        cluster_scatter: cluster_scatter(&view),
    }
}

/// One dashboard session: the shared table plus the current station selection.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<ObservationTable>,
    selector: StationSelector,
    title: String,
}

impl Dashboard {
    /// Creates a dashboard over `table`, selecting its first station.
    pub fn new(table: Arc<ObservationTable>, title: impl Into<String>) -> Self {
        let selector = StationSelector::new(table.stations().to_vec());
        Self {
            table,
            selector,
            title: title.into(),
        }
    }

    /// Creates a dashboard from the cached table, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Load`] if the observation file cannot be loaded.
    pub fn from_cache(
        cache: &ObservationCache,
        config: &DashboardConfig,
    ) -> Result<Self, DashboardError> {
        Ok(Self::new(cache.get()?, config.title.clone()))
    }

    pub fn table(&self) -> &ObservationTable {
        &self.table
    }

    pub fn selector(&self) -> &StationSelector {
        &self.selector
    }

    /// Renders the page for the current selection.
    pub fn render(&self) -> DashboardPage {
        render_page(&self.table, &self.title, self.selector.selected())
    }

    /// Handles a selection change: updates the selector, then recomputes the filtered view
    /// and re-renders all views.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownStation`] if `station` is not in the table.
    pub fn on_station_change(&mut self, station: &str) -> Result<DashboardPage, DashboardError> {
        self.selector.select(station)?;
        Ok(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_csv, write_csv};
    use crate::types::column::ObservationColumn;
    use crate::views::figure::Trace;

    fn dashboard() -> Dashboard {
        let file = write_csv(&sample_csv());
        let cache = ObservationCache::new(file.path());
        Dashboard::from_cache(&cache, &DashboardConfig::default()).expect("sample loads")
    }

    #[test]
    fn first_render_uses_first_station() {
        let dashboard = dashboard();
        let page = dashboard.render();
        assert_eq!(page.selected_station.as_deref(), Some("Beijing-A"));
        assert_eq!(page.stations, ["Beijing-A", "Beijing-B"]);
        assert_eq!(page.title, "Air Quality Analysis in Beijing");
        assert_eq!(page.station_rows, 4);
    }

    #[test]
    fn station_change_rerenders_all_views() -> Result<(), DashboardError> {
        let mut dashboard = dashboard();
        let page = dashboard.on_station_change("Beijing-B")?;

        assert_eq!(page.selected_station.as_deref(), Some("Beijing-B"));
        assert_eq!(dashboard.selector().selected(), Some("Beijing-B"));
        for chart in page.charts() {
            let figure = chart.as_ref().expect("chart renders");
            assert!(figure.title().unwrap_or_default().ends_with("Beijing-B"));
        }
        assert_eq!(page.summary.as_ref().map(Vec::len), Ok(2));
        Ok(())
    }

    #[test]
    fn unknown_station_is_rejected() {
        let mut dashboard = dashboard();
        assert!(matches!(
            dashboard.on_station_change("Beijing-Z"),
            Err(DashboardError::UnknownStation(_))
        ));
        assert_eq!(dashboard.selector().selected(), Some("Beijing-A"));
    }

    #[test]
    fn station_without_rows_renders_empty_charts() {
        let dashboard = dashboard();
        let page = render_page(dashboard.table(), "t", Some("Ghost"));

        assert_eq!(page.station_rows, 0);
        for chart in page.charts() {
            let figure = chart.as_ref().expect("empty chart, not an error");
            assert_eq!(figure.point_count(), 0);
        }
    }

    #[test]
    fn empty_table_has_no_selection() {
        let table = ObservationTable::new(Vec::new(), ObservationColumn::ALL);
        let dashboard = Dashboard::new(Arc::new(table), "t");
        let page = dashboard.render();
        assert_eq!(page.selected_station, None);
        assert!(page.stations.is_empty());
        assert_eq!(page.summary, Ok(Vec::new()));
        for chart in page.charts() {
            assert_eq!(chart.as_ref().map(Figure::point_count), Ok(0));
        }
        let titles: Vec<_> = page
            .charts()
            .into_iter()
            .filter_map(|chart| chart.as_ref().ok()?.title())
            .collect();
        assert_eq!(
            titles,
            [
                "PM2.5 Levels",
                "PM2.5 Distribution by Season",
                "Correlation between PM2.5 and Meteorological Factors",
                "Clustering of PM2.5 and Temperature",
            ]
        );
    }

    #[test]
    fn missing_column_fails_only_its_views() {
        let table = ObservationTable::new(
            vec![crate::test_support::observation(
                "Dongsi",
                "2013-03-01 00:00:00",
                Some(12.0),
            )],
            [ObservationColumn::Pm25],
        );
        let page = render_page(&table, "t", Some("Dongsi"));

        assert_eq!(page.summary.as_ref().map(Vec::len), Ok(1));
        let Ok(figure) = &page.time_series else {
            panic!("time series only needs PM2.5");
        };
        assert!(matches!(figure.data[0], Trace::Scatter(_)));
        assert!(matches!(
            page.seasonal_boxplot,
            Err(ViewError::MissingColumn {
                column: ObservationColumn::Season,
                ..
            })
        ));
        assert!(page.correlation_heatmap.is_err());
        assert!(page.cluster_scatter.is_err());
    }
}
