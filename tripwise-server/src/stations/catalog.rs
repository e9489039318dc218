//! Read-only station catalog.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::Station;

use super::error::StationError;
use super::geo::{haversine_km, round_to_tenth};
use super::mumbai::mumbai_stations;

/// Fixed collection of stations, looked up by exact name.
///
/// The catalog keeps stations in insertion order and is never mutated
/// after construction, so it can be shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
    /// Station name → index into `stations`.
    by_name: HashMap<String, usize>,
}

impl StationCatalog {
    /// Build a catalog from a list of stations.
    ///
    /// Fails if two stations share a name.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationError> {
        let mut by_name = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            if by_name.insert(station.name.clone(), idx).is_some() {
                return Err(StationError::DuplicateName(station.name.clone()));
            }
        }

        Ok(Self { stations, by_name })
    }

    /// The Mumbai suburban network.
    pub fn mumbai() -> Result<Self, StationError> {
        Self::new(mumbai_stations())
    }

    /// Find a station by exact, case-sensitive name.
    pub fn find_station(&self, name: &str) -> Option<&Station> {
        self.by_name.get(name).map(|&idx| &self.stations[idx])
    }

    /// Find a station by name, failing with [`StationError::NotFound`].
    pub fn lookup(&self, name: &str) -> Result<&Station, StationError> {
        self.find_station(name)
            .ok_or_else(|| StationError::NotFound(name.to_string()))
    }

    /// Distance in km between two named stations, rounded to one decimal.
    ///
    /// Fails if either station is unknown.
    pub fn distance_between(&self, from: &str, to: &str) -> Result<f64, StationError> {
        let a = self.lookup(from)?;
        let b = self.lookup(to)?;
        Ok(round_to_tenth(haversine_km(a.lat, a.lng, b.lat, b.lng)))
    }

    /// Distance in km between two named stations, rounded to one decimal.
    ///
    /// Lenient: returns `0.0` if either station is unknown, which makes an
    /// unknown route indistinguishable from a zero-length one. Use
    /// [`StationCatalog::distance_between`] when that matters.
    pub fn distance(&self, from: &str, to: &str) -> f64 {
        match self.distance_between(from, to) {
            Ok(km) => km,
            Err(e) => {
                warn!(from, to, error = %e, "unknown station, treating distance as zero");
                0.0
            }
        }
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Stations on the given line, in insertion order.
    pub fn on_line<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a Station> + 'a {
        self.stations.iter().filter(move |s| s.line == line)
    }

    /// Distinct line names in the order they first appear.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = Vec::new();
        for station in &self.stations {
            if !lines.contains(&station.line.as_str()) {
                lines.push(&station.line);
            }
        }
        lines
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the catalog has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
