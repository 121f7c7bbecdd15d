pub mod cluster_scatter;
pub mod correlation_heatmap;
pub mod error;
pub mod figure;
pub mod seasonal_boxplot;
pub mod summary;
pub mod time_series;
