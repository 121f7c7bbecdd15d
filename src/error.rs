use crate::observations::error::LoadError;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Station '{0}' is not in the data")]
    UnknownStation(String),

    #[error("Failed to bind dashboard server to '{0}'")]
    Bind(SocketAddr, #[source] std::io::Error),

    #[error("Dashboard server stopped unexpectedly")]
    Serve(#[source] std::io::Error),
}
