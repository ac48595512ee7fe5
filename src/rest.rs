// Copyright 2026 Roster Scrape Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP REST facade over the scraper.
//!
//! Three endpoints, each a thin translation layer: query parameters in,
//! scraper call, fixed JSON shape out. The wire contract deliberately
//! mirrors the original service: scrape failures on search collapse to a
//! successful empty result (with a warning logged), and any detail
//! failure answers 404. The typed [`ScrapeError`] taxonomy stops here.

use crate::config::Config;
use crate::scrape::client::RosterClient;
use crate::types::SearchQuery;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Shared state for the facade. Deliberately holds only configuration:
/// every request gets its own [`RosterClient`] and cookie jar, so
/// concurrent requests never race on session state.
pub struct AppState {
    pub config: Config,
}

/// Build the axum router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/search", get(handle_search))
        .route("/api/details/:inmate_id", get(handle_details))
        .layer(cors)
        .with_state(state)
}

/// Start the facade on the given port.
pub async fn start(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("inmate search API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "roster-scrape",
        "source": "Sedgwick County Official Website",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Search inmates. Requires at least one non-empty parameter of
/// `last_name`, `first_name`, `booking_number`.
async fn handle_search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> (StatusCode, Json<Value>) {
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "message": "Please provide at least one search parameter",
                "inmates": [],
            })),
        );
    }

    let client = RosterClient::new(state.config.clone());
    let inmates = match client.search(&query).await {
        Ok(inmates) => inmates,
        Err(e) => {
            warn!("search failed, returning empty result: {e}");
            Vec::new()
        }
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "count": inmates.len(),
            "inmates": inmates,
            "source": "Sedgwick County Sheriff - Official Website",
        })),
    )
}

/// Detail for one inmate id. Any scrape failure answers 404.
async fn handle_details(
    State(state): State<Arc<AppState>>,
    Path(inmate_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let client = RosterClient::new(state.config.clone());
    match client.details(&inmate_id).await {
        Ok(details) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "details": details,
            })),
        ),
        Err(e) => {
            warn!(%inmate_id, "detail lookup failed: {e}");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "status": "error",
                    "message": "Inmate not found",
                })),
            )
        }
    }
}
