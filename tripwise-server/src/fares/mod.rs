//! Multi-provider fare estimation.
//!
//! Given a trip distance, prices every entry of a provider roster under the
//! time-of-day pricing rules, adds a jittered ETA, and ranks the quotes by
//! price (stable, so ties keep roster order).

mod error;
mod estimator;
mod jitter;
mod pricing;
mod rank;
mod roster;

pub use error::FareError;
pub use estimator::{ETA_MINUTES_PER_KM, FareEstimator};
pub use jitter::{FixedJitter, JitterSource, MAX_ETA_JITTER_MINS, RandomJitter};
pub use pricing::{HourWindow, PricingContext, PricingRules, SurgeWindow};
pub use rank::rank_quotes;
pub use roster::{RateCard, Roster, RosterBuilder, mumbai_roster};
