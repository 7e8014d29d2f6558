// HTTP routes: the dashboard page and its JSON feed.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use meraki_core::{DashboardSnapshot, build_snapshot};

use crate::error::ApiError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Path the dashboard page fetches its data from.
pub const DATA_PATH: &str = "/api/meraki-data";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(DATA_PATH, get(meraki_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Rebuilds the snapshot from scratch on every request.
async fn meraki_data(State(state): State<AppState>) -> Result<Json<DashboardSnapshot>, ApiError> {
    let snapshot = build_snapshot(state.client.as_ref(), state.client_timespan_secs).await?;
    Ok(Json(snapshot))
}
