//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Local, Timelike};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::compare::{CompareError, compare_route};
use crate::fares::FareError;
use crate::stations::StationError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/lines", get(list_lines))
        .route("/api/distance", get(distance))
        .route("/api/fares", get(compare_fares))
        .route("/api/fares/estimate", get(estimate_fares))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The requested hour, or the current local hour.
fn hour_or_now(hour: Option<u32>) -> u32 {
    hour.unwrap_or_else(|| Local::now().hour())
}

/// List stations, optionally filtered by line.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationListRequest>,
) -> Json<StationListResponse> {
    let stations = match req.line.as_deref() {
        Some(line) => state
            .catalog
            .on_line(line)
            .map(StationResult::from_station)
            .collect(),
        None => state
            .catalog
            .stations()
            .iter()
            .map(StationResult::from_station)
            .collect(),
    };

    Json(StationListResponse { stations })
}

/// List distinct lines.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .catalog
        .lines()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(LinesResponse { lines })
}

/// Distance between two stations.
async fn distance(
    State(state): State<AppState>,
    Query(req): Query<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    let distance_km = state.catalog.distance_between(&req.from, &req.to)?;
    Ok(Json(DistanceResponse {
        from: req.from,
        to: req.to,
        distance_km,
    }))
}

/// Compare fares between two stations.
async fn compare_fares(
    State(state): State<AppState>,
    Query(req): Query<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let hour = hour_or_now(req.hour);
    let ctx = state.estimator.pricing_at(hour)?;

    let comparison = compare_route(
        &state.catalog,
        &state.estimator,
        &req.pickup,
        &req.drop,
        &ctx,
        state.jitter(),
    )?;

    Ok(Json(CompareResponse::from_comparison(&comparison, hour)))
}

/// Estimate fares for a bare distance.
async fn estimate_fares(
    State(state): State<AppState>,
    Query(req): Query<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let hour = hour_or_now(req.hour);
    let ctx = state.estimator.pricing_at(hour)?;
    let quotes = state
        .estimator
        .estimate_fares(req.distance_km, &ctx, state.jitter())?;

    Ok(Json(EstimateResponse {
        distance_km: req.distance_km,
        pricing: PricingResult::new(hour, &ctx),
        quotes: quotes.iter().map(QuoteResult::from_quote).collect(),
    }))
}

/// Application error type.
#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        match e {
            StationError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StationError::DuplicateName(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        match e {
            FareError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            FareError::InvalidRoster(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<CompareError> for AppError {
    fn from(e: CompareError) -> Self {
        match e {
            CompareError::Station(inner) => inner.into(),
            CompareError::Fare(inner) => inner.into(),
            CompareError::MissingStation | CompareError::SameStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
