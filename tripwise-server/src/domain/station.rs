//! Station reference data.

use serde::Serialize;

/// A named location on the suburban rail network.
///
/// Stations are seeded once at startup and never mutated. The `name`
/// is the station's identifier and is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Display name, also the lookup key (case-sensitive).
    pub name: String,

    /// Line the station belongs to (e.g. "Western").
    pub line: String,

    /// Latitude in degrees.
    pub lat: f64,

    /// Longitude in degrees.
    pub lng: f64,
}

impl Station {
    /// Create a new station.
    pub fn new(name: impl Into<String>, line: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            line: line.into(),
            lat,
            lng,
        }
    }
}
