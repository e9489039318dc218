//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::compare::FareComparison;
use crate::domain::{FareQuote, Station};
use crate::fares::PricingContext;

/// Request to list stations.
#[derive(Debug, Deserialize)]
pub struct StationListRequest {
    /// Optional line filter (e.g. "Harbour")
    pub line: Option<String>,
}

/// A station in list results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lng: f64,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            line: station.line.clone(),
            lat: station.lat,
            lng: station.lng,
        }
    }
}

/// Response for station listing.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// Response for line listing.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<String>,
}

/// Request to measure a route.
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub from: String,
    pub to: String,
}

/// Response for a route measurement.
#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Request to compare fares between two stations.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Pickup station name
    pub pickup: String,

    /// Drop station name
    pub drop: String,

    /// Local hour to price at (defaults to now)
    pub hour: Option<u32>,
}

/// Request to estimate fares for a bare distance.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub distance_km: f64,

    /// Local hour to price at (defaults to now)
    pub hour: Option<u32>,
}

/// A fare quote in results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub provider: String,
    pub vehicle_class: String,

    /// "Provider Class" label
    pub label: String,

    pub price: u64,
    pub eta_minutes: u32,
    pub rating: f32,
}

impl QuoteResult {
    /// Create from a domain FareQuote.
    pub fn from_quote(quote: &FareQuote) -> Self {
        Self {
            provider: quote.provider.clone(),
            vehicle_class: quote.vehicle_class.clone(),
            label: quote.label(),
            price: quote.price,
            eta_minutes: quote.eta_minutes,
            rating: quote.rating,
        }
    }
}

/// Pricing multipliers that applied to a set of quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    /// Hour the quotes were priced at
    pub hour: u32,
    pub surge: f64,
    pub night: f64,
}

impl PricingResult {
    pub fn new(hour: u32, ctx: &PricingContext) -> Self {
        Self {
            hour,
            surge: ctx.surge,
            night: ctx.night,
        }
    }
}

/// Response for a route comparison.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub pickup: String,
    pub drop: String,
    pub distance_km: f64,
    pub pricing: PricingResult,

    /// Cheapest quote
    pub best: Option<QuoteResult>,

    /// All quotes, cheapest first
    pub quotes: Vec<QuoteResult>,
}

impl CompareResponse {
    /// Create from a comparison priced at `hour`.
    pub fn from_comparison(comparison: &FareComparison, hour: u32) -> Self {
        Self {
            pickup: comparison.pickup.clone(),
            drop: comparison.drop.clone(),
            distance_km: comparison.distance_km,
            pricing: PricingResult::new(hour, &comparison.pricing),
            best: comparison.best().map(QuoteResult::from_quote),
            quotes: comparison.quotes.iter().map(QuoteResult::from_quote).collect(),
        }
    }
}

/// Response for a bare distance estimate.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub distance_km: f64,
    pub pricing: PricingResult,
    pub quotes: Vec<QuoteResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
