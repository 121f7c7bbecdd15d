//! Runtime settings for the dashboard.
//!
//! There are no command line flags or environment variables; the defaults below are what the
//! `aq-dashboard` binary runs with. Library users can override them through the builder.

use crate::observations::cache::DEFAULT_DATA_FILE;
use bon::Builder;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

/// Default title shown in the browser tab and as the page heading.
pub const DEFAULT_TITLE: &str = "Air Quality Analysis in Beijing";

/// Default port, the one the dashboard has always been served on.
pub const DEFAULT_PORT: u16 = 8501;

/// Dashboard settings.
///
/// # Examples
///
/// ```
/// use air_quality_dashboard::DashboardConfig;
/// use std::path::Path;
///
/// let config = DashboardConfig::default();
/// assert_eq!(config.data_path, Path::new("main_data.csv"));
/// assert_eq!(config.bind_address.port(), 8501);
///
/// let custom = DashboardConfig::builder()
///     .data_path("data/beijing.csv")
///     .title("Beijing PM2.5")
///     .build();
/// assert_eq!(custom.title, "Beijing PM2.5");
/// assert_eq!(custom.bind_address, config.bind_address);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DashboardConfig {
    /// CSV file with the observation table, relative to the working directory.
    #[builder(into, default = PathBuf::from(DEFAULT_DATA_FILE))]
    pub data_path: PathBuf,

    #[builder(into, default = default_bind_address())]
    pub bind_address: SocketAddr,

    #[builder(into, default = DEFAULT_TITLE.to_string())]
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}
