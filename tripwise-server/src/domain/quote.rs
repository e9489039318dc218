//! Fare quote value type.

use serde::Serialize;

/// One provider/vehicle-class estimate for a trip.
///
/// Quotes are created per request and owned by the caller; this crate
/// never stores them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareQuote {
    /// Provider name (e.g. "Uber").
    pub provider: String,

    /// Vehicle class offered by the provider (e.g. "Premier").
    pub vehicle_class: String,

    /// Price in whole currency units.
    pub price: u64,

    /// Estimated time to destination in minutes.
    pub eta_minutes: u32,

    /// Static quality rating in `[0, 5]`.
    pub rating: f32,
}

impl FareQuote {
    /// Provider and vehicle class as a single label, e.g. "Ola Mini".
    pub fn label(&self) -> String {
        format!("{} {}", self.provider, self.vehicle_class)
    }
}
