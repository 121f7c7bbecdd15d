//! HTTP error handling. Errors are rendered as small HTML pages, not JSON.

use crate::dashboard::page::render_error_page;
use crate::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The requested station is not in the data.
    NotFound(String),
    /// The table could not be loaded or the render task failed.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Station not found", msg),
            AppError::Internal(msg) => {
                error!("Dashboard request failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Dashboard unavailable",
                    msg,
                )
            }
        };

        (status, Html(render_error_page(title, &message))).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::UnknownStation(_) => AppError::NotFound(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Render task failed: {err}"))
    }
}
