//! HTTP front end: serves the dashboard page and re-renders it on every station change.
//!
//! ```text
//! GET /                  page for the first station
//! GET /?station=<name>   station change, page re-rendered for <name>
//! GET /health            liveness check
//! ```
//!
//! Only the loaded observation table is shared between requests.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
