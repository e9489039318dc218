//! Application state for the web layer.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::fares::{FareEstimator, RandomJitter};
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Contains the read-only catalog and estimator, plus an optional seeded
/// generator from which per-request jitter sources are derived.
#[derive(Clone)]
pub struct AppState {
    /// Station catalog
    pub catalog: Arc<StationCatalog>,

    /// Fare estimator (roster and pricing rules)
    pub estimator: Arc<FareEstimator>,

    /// Master generator when a seed is configured
    seeder: Option<Arc<Mutex<ChaCha8Rng>>>,
}

impl AppState {
    /// Create a new app state.
    ///
    /// With a `seed`, the sequence of per-request jitter sources is
    /// reproducible; without one each request draws from OS entropy.
    pub fn new(catalog: StationCatalog, estimator: FareEstimator, seed: Option<u64>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            estimator: Arc::new(estimator),
            seeder: seed.map(|s| Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(s)))),
        }
    }

    /// A fresh jitter source for one request.
    pub fn jitter(&self) -> RandomJitter<ChaCha8Rng> {
        match &self.seeder {
            Some(master) => {
                let mut rng = master.lock().unwrap_or_else(PoisonError::into_inner);
                RandomJitter::seeded(rng.r#gen())
            }
            None => RandomJitter::from_entropy(),
        }
    }
}
