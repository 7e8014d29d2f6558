//! Error types for the dashboard server.
//!
//! [`ApiError`] is what a request handler can fail with, rendered as
//! `{"error": "..."}`. [`StartupError`] covers everything that stops the
//! process before it starts serving, with miette help text.

use std::net::SocketAddr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use meraki_config::ConfigError;
use meraki_core::DashboardError;

// ── Request errors ───────────────────────────────────────────────────

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] DashboardError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!(status = status.as_u16(), error = %self.0, "dashboard request failed");
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ── Startup errors ───────────────────────────────────────────────────

#[derive(Debug, Error, Diagnostic)]
pub enum StartupError {
    #[error("Invalid configuration")]
    #[diagnostic(
        code(merakidash::config),
        help(
            "Check the config file and MERAKI_* environment variables.\n\
             Config keys: api_key, base_url, bind, timeout, client_timespan"
        )
    )]
    Config(#[from] ConfigError),

    #[error("Could not create the Dashboard API client")]
    #[diagnostic(
        code(merakidash::client),
        help("The API key must be a plain ASCII string without newlines.")
    )]
    Client(#[from] meraki_api::Error),

    #[error("Could not listen on {addr}")]
    #[diagnostic(
        code(merakidash::bind),
        help("Another process may be using the port. Try --bind 127.0.0.1:<port>.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server failed")]
    #[diagnostic(code(merakidash::serve))]
    Serve(#[source] std::io::Error),
}
