//! Station catalog and great-circle distance.
//!
//! Provides name → station lookup over a fixed, insertion-ordered set of
//! stations, and haversine distance between two named stations.

mod catalog;
mod error;
pub mod geo;
mod mumbai;

pub use catalog::StationCatalog;
pub use error::StationError;
pub use mumbai::mumbai_stations;
