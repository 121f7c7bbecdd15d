//! `aq-dashboard`: serves the PM2.5 dashboard over HTTP.
//!
//! Reads `main_data.csv` from the working directory once at startup and listens on
//! `http://127.0.0.1:8501`. Log verbosity follows `RUST_LOG` (default: info).

use std::process::ExitCode;

use air_quality_dashboard::http::{create_router, AppState};
use air_quality_dashboard::{DashboardConfig, DashboardError};
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(DashboardConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: DashboardConfig) -> Result<(), DashboardError> {
    info!("Starting air quality dashboard");

    let state = AppState::from_config(&config);
    // A broken data file stops the app before it starts serving.
    let table = state.cache.get()?;
    info!(
        "Loaded {} observations for {} stations from {}",
        table.len(),
        table.stations().len(),
        config.data_path.display()
    );

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .map_err(|e| DashboardError::Bind(config.bind_address, e))?;

    info!("Dashboard listening on http://{}", config.bind_address);
    axum::serve(listener, app)
        .await
        .map_err(DashboardError::Serve)
}
