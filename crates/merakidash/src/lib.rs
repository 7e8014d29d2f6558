//! `merakidash` — single-page web dashboard for a Meraki network.
//!
//! Serves the dashboard page at `/` and the aggregated
//! [`DashboardSnapshot`](meraki_core::DashboardSnapshot) at
//! `/api/meraki-data`. The binary in `main.rs` handles CLI parsing, tracing
//! setup, and the listener; everything request-facing lives here so it can
//! be driven in tests without a socket.

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, StartupError};
pub use routes::build_router;
pub use state::AppState;
