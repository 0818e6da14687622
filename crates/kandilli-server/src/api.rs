//! HTTP query surface over the event listing.
//!
//! Every handler fetches and parses the upstream page anew, applies its
//! filter and serializes the result. There is no shared cache and no state
//! beyond the event source handle, so concurrent requests run independent
//! fetches.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use kandilli_common::Error;
use kandilli_ingest::EventSource;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::filter;

/// Client-facing error messages (Turkish).
const MSG_UPSTREAM_FAILED: &str = "Kandilli Rasathanesi verilerine ulaşılamadı.";
const MSG_NOT_FOUND: &str = "Veri bulunamadı.";
const MSG_LOCATION_REQUIRED: &str = "Location parametresi gerekli.";

/// API state
#[derive(Clone)]
pub struct ApiState {
    pub source: Arc<dyn EventSource>,
}

/// Error body shape, `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Build the router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/all", get(list_all))
        .route("/at", get(list_at))
        .route("/near", get(list_near))
        .route("/in", get(list_in))
        .route("/last", get(last_default))
        .route("/last/:count", get(last_count))
        .route("/filter", get(list_filter))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// `GET /all` — the whole listing, unfiltered. An empty listing is a valid
/// `200 []`.
async fn list_all(State(state): State<ApiState>) -> Response {
    match state.source.events().await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => upstream_failure(e),
    }
}

#[derive(Debug, Deserialize)]
struct AtParams {
    date: Option<String>,
    time: Option<String>,
}

/// `GET /at?date=&time=` — prefix filter on date and time.
async fn list_at(State(state): State<ApiState>, Query(params): Query<AtParams>) -> Response {
    match state.source.events().await {
        Ok(events) => found_or_not(filter::at(
            &events,
            params.date.as_deref().unwrap_or(""),
            params.time.as_deref().unwrap_or(""),
        )),
        Err(e) => upstream_failure(e),
    }
}

#[derive(Debug, Deserialize)]
struct NearParams {
    latitude: Option<String>,
    longitude: Option<String>,
    radius: Option<String>,
}

/// `GET /near?latitude=&longitude=&radius=` — degree-space distance filter.
///
/// A missing or unparsable radius degrades to 0, which keeps exact
/// coordinate matches only. Missing center coordinates match nothing.
async fn list_near(State(state): State<ApiState>, Query(params): Query<NearParams>) -> Response {
    let latitude = coordinate(params.latitude.as_deref());
    let longitude = coordinate(params.longitude.as_deref());
    let radius = params
        .radius
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);

    match state.source.events().await {
        Ok(events) => found_or_not(filter::near(&events, latitude, longitude, radius)),
        Err(e) => upstream_failure(e),
    }
}

fn coordinate(param: Option<&str>) -> f64 {
    param.and_then(|s| s.parse().ok()).unwrap_or(f64::NAN)
}

#[derive(Debug, Deserialize)]
struct InParams {
    location: Option<String>,
}

/// `GET /in?location=` — case-insensitive substring match on the location.
/// The parameter is required; requests without it are rejected before the
/// upstream fetch.
async fn list_in(State(state): State<ApiState>, Query(params): Query<InParams>) -> Response {
    let Some(location) = params.location.filter(|l| !l.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, MSG_LOCATION_REQUIRED);
    };

    match state.source.events().await {
        Ok(events) => found_or_not(filter::in_location(&events, &location)),
        Err(e) => upstream_failure(e),
    }
}

/// `GET /last` — the single most recent event.
async fn last_default(State(state): State<ApiState>) -> Response {
    last_events(&state, 1).await
}

/// `GET /last/:count` — up to `count` most recent events, shorter when the
/// listing is. An unparsable count degrades to 1.
async fn last_count(State(state): State<ApiState>, Path(count): Path<String>) -> Response {
    last_events(&state, count.parse().unwrap_or(1)).await
}

async fn last_events(state: &ApiState, count: usize) -> Response {
    match state.source.events().await {
        Ok(mut events) => {
            events.truncate(count);
            (StatusCode::OK, Json(events)).into_response()
        }
        Err(e) => upstream_failure(e),
    }
}

/// `GET /filter?...` — conjunction of optional per-field predicates.
async fn list_filter(
    State(state): State<ApiState>,
    Query(criteria): Query<filter::Criteria>,
) -> Response {
    match state.source.events().await {
        Ok(events) => found_or_not(filter::matching(&events, &criteria)),
        Err(e) => upstream_failure(e),
    }
}

fn found_or_not(events: Vec<kandilli_common::Event>) -> Response {
    if events.is_empty() {
        error_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)
    } else {
        (StatusCode::OK, Json(events)).into_response()
    }
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

fn upstream_failure(err: Error) -> Response {
    tracing::error!("failed to load the upstream listing: {err}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_UPSTREAM_FAILED)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
