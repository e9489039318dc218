//! Route fare comparison.
//!
//! Ties the catalog and the estimator together: resolve a pickup and drop
//! station, measure the route, and quote every provider for it. The
//! resulting [`FareComparison`] is what downstream history and favourites
//! stores persist.

use serde::Serialize;
use tracing::debug;

use crate::domain::FareQuote;
use crate::fares::{FareError, FareEstimator, JitterSource, PricingContext};
use crate::stations::{StationCatalog, StationError};

/// Errors from comparing a route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    /// Pickup or drop was not supplied
    #[error("both pickup and drop stations are required")]
    MissingStation,

    /// Pickup and drop are the same station
    #[error("pickup and drop cannot be the same station: {0}")]
    SameStation(String),

    /// A station name did not resolve
    #[error(transparent)]
    Station(#[from] StationError),

    /// The estimator rejected the request
    #[error(transparent)]
    Fare(#[from] FareError),
}

/// Ranked quotes for one pickup/drop pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareComparison {
    pub pickup: String,
    pub drop: String,

    /// Great-circle distance, one decimal place.
    pub distance_km: f64,

    /// Multipliers the quotes were priced under.
    pub pricing: PricingContext,

    /// Quotes, cheapest first.
    pub quotes: Vec<FareQuote>,
}

impl FareComparison {
    /// The cheapest quote, if any.
    pub fn best(&self) -> Option<&FareQuote> {
        self.quotes.first()
    }
}

/// Compare fares between two stations.
///
/// Unlike [`StationCatalog::distance`], unknown stations are an error here
/// rather than a zero-length trip.
pub fn compare_route<J: JitterSource>(
    catalog: &StationCatalog,
    estimator: &FareEstimator,
    pickup: &str,
    drop: &str,
    ctx: &PricingContext,
    jitter: J,
) -> Result<FareComparison, CompareError> {
    let pickup = pickup.trim();
    let drop = drop.trim();

    if pickup.is_empty() || drop.is_empty() {
        return Err(CompareError::MissingStation);
    }
    if pickup == drop {
        return Err(CompareError::SameStation(pickup.to_string()));
    }

    let distance_km = catalog.distance_between(pickup, drop)?;
    let quotes = estimator.estimate_fares(distance_km, ctx, jitter)?;

    debug!(pickup, drop, distance_km, "compared route");

    Ok(FareComparison {
        pickup: pickup.to_string(),
        drop: drop.to_string(),
        distance_km,
        pricing: *ctx,
        quotes,
    })
}
