//! Fare estimation over a provider roster.

use tracing::debug;

use crate::domain::FareQuote;

use super::error::FareError;
use super::jitter::JitterSource;
use super::pricing::{PricingContext, PricingRules};
use super::rank::rank_quotes;
use super::roster::{Roster, mumbai_roster};

/// Baseline travel time per kilometre, before jitter.
pub const ETA_MINUTES_PER_KM: f64 = 2.5;

/// Prices trips against a fixed roster and pricing rules.
///
/// The estimator holds only immutable configuration, so one instance can
/// serve any number of callers. Randomness and the current hour are passed
/// in per call.
#[derive(Debug, Clone)]
pub struct FareEstimator {
    roster: Roster,
    rules: PricingRules,
}

impl FareEstimator {
    /// Create an estimator from a roster and pricing rules.
    pub fn new(roster: Roster, rules: PricingRules) -> Self {
        Self { roster, rules }
    }

    /// The provider roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The pricing rules.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Pricing context for a local hour in `0..=23`.
    pub fn pricing_at(&self, hour: u32) -> Result<PricingContext, FareError> {
        self.rules.context_at(hour)
    }

    /// Quote every rate card for a trip of `distance_km`, cheapest first.
    ///
    /// - `price = round(rate × distance × surge × night)`
    /// - `eta = round(distance × 2.5 + jitter)`, one jitter draw per quote
    ///
    /// Rounding is half away from zero (`f64::round`). Equal prices keep
    /// roster order. Fails with [`FareError::InvalidInput`] if the distance
    /// is negative or not finite, if either multiplier is negative or not
    /// finite, or if a price or ETA is too large to represent.
    pub fn estimate_fares<J: JitterSource>(
        &self,
        distance_km: f64,
        ctx: &PricingContext,
        mut jitter: J,
    ) -> Result<Vec<FareQuote>, FareError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(FareError::InvalidInput(format!(
                "distance must be a non-negative number of km, got {distance_km}"
            )));
        }
        ctx.validate()?;

        let base_eta = distance_km * ETA_MINUTES_PER_KM;

        let mut quotes = Vec::with_capacity(self.roster.len());
        for card in self.roster.cards() {
            let price = (card.rate_per_km * distance_km * ctx.surge * ctx.night).round();
            // u64::MAX as f64 is 2^64, one past the largest u64
            if !price.is_finite() || price >= u64::MAX as f64 {
                return Err(FareError::InvalidInput(format!(
                    "{} {} price overflows for {distance_km} km",
                    card.provider, card.vehicle_class
                )));
            }

            let eta = (base_eta + jitter.next_jitter()).round();
            if !eta.is_finite() || eta > f64::from(u32::MAX) {
                return Err(FareError::InvalidInput(format!(
                    "ETA overflows for {distance_km} km"
                )));
            }

            quotes.push(FareQuote {
                provider: card.provider.clone(),
                vehicle_class: card.vehicle_class.clone(),
                price: price as u64,
                eta_minutes: eta as u32,
                rating: card.rating,
            });
        }

        debug!(
            distance_km,
            surge = ctx.surge,
            night = ctx.night,
            quotes = quotes.len(),
            "estimated fares"
        );

        Ok(rank_quotes(quotes))
    }

    /// Like [`FareEstimator::estimate_fares`], deriving the context from `hour`.
    pub fn estimate_at_hour<J: JitterSource>(
        &self,
        distance_km: f64,
        hour: u32,
        jitter: J,
    ) -> Result<Vec<FareQuote>, FareError> {
        let ctx = self.pricing_at(hour)?;
        self.estimate_fares(distance_km, &ctx, jitter)
    }
}

impl Default for FareEstimator {
    /// Mumbai roster with the standard peak and night windows.
    fn default() -> Self {
        Self::new(mumbai_roster(), PricingRules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fares::{FixedJitter, RandomJitter, RosterBuilder};

    fn estimator() -> FareEstimator {
        FareEstimator::default()
    }

    fn labels(quotes: &[FareQuote]) -> Vec<String> {
        quotes.iter().map(FareQuote::label).collect()
    }

    #[test]
    fn churchgate_to_dadar_flat() {
        let quotes = estimator()
            .estimate_fares(9.7, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap();

        let mini = quotes.iter().find(|q| q.label() == "Ola Mini").unwrap();
        assert_eq!(mini.price, 116);
        assert_eq!(mini.rating, 4.6);

        let prices: Vec<u64> = quotes.iter().map(|q| q.price).collect();
        assert_eq!(prices, vec![68, 87, 97, 116, 126, 136, 155, 175, 213, 272]);
        assert_eq!(
            labels(&quotes),
            vec![
                "Rapido Bike",
                "InDrive Auto",
                "Rapido Auto",
                "Ola Mini",
                "Uber Go",
                "InDrive Sedan",
                "Ola Prime Sedan",
                "Uber Premier",
                "Ola SUV",
                "Uber Black",
            ]
        );
    }

    #[test]
    fn flat_price_is_rate_times_distance() {
        let est = estimator();
        let d = 13.3;
        let quotes = est
            .estimate_fares(d, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap();
        for card in est.roster().cards() {
            let quote = quotes
                .iter()
                .find(|q| q.provider == card.provider && q.vehicle_class == card.vehicle_class)
                .unwrap();
            assert_eq!(quote.price, (card.rate_per_km * d).round() as u64);
        }
    }

    #[test]
    fn zero_distance_is_free() {
        let quotes = estimator()
            .estimate_fares(0.0, &PricingContext::new(1.6, 1.3), FixedJitter(3.7))
            .unwrap();
        assert_eq!(quotes.len(), 10);
        for q in &quotes {
            assert_eq!(q.price, 0);
            // ETA is pure jitter
            assert_eq!(q.eta_minutes, 4);
        }
        // All tied, so roster order is preserved
        assert_eq!(labels(&quotes)[0], "Ola Mini");
        assert_eq!(labels(&quotes)[9], "InDrive Sedan");
    }

    #[test]
    fn negative_distance_rejected() {
        let err = estimator()
            .estimate_fares(-1.0, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap_err();
        assert!(matches!(err, FareError::InvalidInput(_)));
    }

    #[test]
    fn oversized_eta_rejected() {
        // 1e10 km * 2.5 min/km does not fit in u32 minutes
        let err = estimator()
            .estimate_fares(1e10, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap_err();
        assert!(matches!(err, FareError::InvalidInput(_)));
    }

    #[test]
    fn oversized_price_rejected() {
        let err = estimator()
            .estimate_fares(1e300, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap_err();
        assert!(matches!(err, FareError::InvalidInput(_)));

        let err = estimator()
            .estimate_fares(1.0, &PricingContext::new(1e308, 10.0), FixedJitter(0.0))
            .unwrap_err();
        assert!(matches!(err, FareError::InvalidInput(_)));
    }

    #[test]
    fn largest_representable_eta_accepted() {
        let est = FareEstimator::new(
            RosterBuilder::new().add("A", "Car", 0.0, 4.0).build().unwrap(),
            PricingRules::default(),
        );
        let d = f64::from(u32::MAX) / ETA_MINUTES_PER_KM;
        let quotes = est
            .estimate_fares(d, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap();
        assert_eq!(quotes[0].eta_minutes, u32::MAX);
        assert_eq!(quotes[0].price, 0);
    }

    #[test]
    fn nan_fixed_jitter_adds_nothing() {
        let quotes = estimator()
            .estimate_fares(10.0, &PricingContext::flat(), FixedJitter(f64::NAN))
            .unwrap();
        assert!(quotes.iter().all(|q| q.eta_minutes == 25));
    }

    #[test]
    fn invalid_multipliers_rejected() {
        let est = estimator();
        for ctx in [
            PricingContext::new(-1.4, 1.0),
            PricingContext::new(1.0, -1.3),
            PricingContext::new(f64::NAN, 1.0),
            PricingContext::new(1.0, f64::NAN),
            PricingContext::new(f64::INFINITY, 1.0),
        ] {
            assert!(
                matches!(
                    est.estimate_fares(5.0, &ctx, FixedJitter(0.0)),
                    Err(FareError::InvalidInput(_))
                ),
                "accepted {ctx:?}"
            );
        }
    }

    #[test]
    fn negative_surge_in_rules_rejected_at_estimation() {
        // Public fields bypass PricingRules::new
        let mut rules = PricingRules::default();
        rules.surge_windows[0].multiplier = -1.4;
        let est = FareEstimator::new(mumbai_roster(), rules);
        assert!(matches!(
            est.estimate_at_hour(5.0, 8, FixedJitter(0.0)),
            Err(FareError::InvalidInput(_))
        ));

        let mut rules = PricingRules::default();
        rules.night_multiplier = f64::NAN;
        let est = FareEstimator::new(mumbai_roster(), rules);
        assert!(matches!(
            est.estimate_at_hour(5.0, 2, FixedJitter(0.0)),
            Err(FareError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_distance_rejected() {
        let est = estimator();
        for d in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                est.estimate_fares(d, &PricingContext::flat(), FixedJitter(0.0)),
                Err(FareError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn morning_surge() {
        let quotes = estimator()
            .estimate_at_hour(10.0, 8, FixedJitter(0.0))
            .unwrap();
        let mini = quotes.iter().find(|q| q.label() == "Ola Mini").unwrap();
        assert_eq!(mini.price, 168);
    }

    #[test]
    fn evening_surge() {
        let quotes = estimator()
            .estimate_at_hour(10.0, 18, FixedJitter(0.0))
            .unwrap();
        let mini = quotes.iter().find(|q| q.label() == "Ola Mini").unwrap();
        assert_eq!(mini.price, 192);
    }

    #[test]
    fn night_premium() {
        let quotes = estimator()
            .estimate_at_hour(10.0, 2, FixedJitter(0.0))
            .unwrap();
        let mini = quotes.iter().find(|q| q.label() == "Ola Mini").unwrap();
        assert_eq!(mini.price, 156);
    }

    #[test]
    fn off_peak_is_flat() {
        let quotes = estimator()
            .estimate_at_hour(10.0, 14, FixedJitter(0.0))
            .unwrap();
        let mini = quotes.iter().find(|q| q.label() == "Ola Mini").unwrap();
        assert_eq!(mini.price, 120);
    }

    #[test]
    fn bad_hour_rejected() {
        assert!(matches!(
            estimator().estimate_at_hour(5.0, 24, FixedJitter(0.0)),
            Err(FareError::InvalidInput(_))
        ));
    }

    #[test]
    fn eta_formula() {
        let quotes = estimator()
            .estimate_fares(4.0, &PricingContext::flat(), FixedJitter(2.4))
            .unwrap();
        // 4 * 2.5 + 2.4 = 12.4
        assert!(quotes.iter().all(|q| q.eta_minutes == 12));

        let quotes = estimator()
            .estimate_fares(4.0, &PricingContext::flat(), FixedJitter(2.5))
            .unwrap();
        assert!(quotes.iter().all(|q| q.eta_minutes == 13));
    }

    #[test]
    fn eta_within_jitter_bounds() {
        let mut jitter = RandomJitter::seeded(99);
        let d = 7.5;
        for _ in 0..50 {
            let quotes = estimator()
                .estimate_fares(d, &PricingContext::flat(), &mut jitter)
                .unwrap();
            for q in &quotes {
                // round(18.75 + [0, 5)) is in 19..=24
                assert!((19..=24).contains(&q.eta_minutes), "eta {}", q.eta_minutes);
            }
        }
    }

    #[test]
    fn seeded_jitter_is_reproducible() {
        let est = estimator();
        let ctx = PricingContext::flat();
        let a = est
            .estimate_fares(12.0, &ctx, RandomJitter::seeded(5))
            .unwrap();
        let b = est
            .estimate_fares(12.0, &ctx, RandomJitter::seeded(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equal_prices_keep_roster_order() {
        let roster = RosterBuilder::new()
            .add("Zeta", "Car", 10.0, 4.0)
            .add("Alpha", "Bike", 5.0, 4.0)
            .add("Beta", "Car", 10.0, 4.5)
            .add("Gamma", "Car", 10.0, 3.5)
            .build()
            .unwrap();
        let est = FareEstimator::new(roster, PricingRules::default());
        let quotes = est
            .estimate_fares(3.0, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap();
        assert_eq!(
            labels(&quotes),
            vec!["Alpha Bike", "Zeta Car", "Beta Car", "Gamma Car"]
        );
    }

    #[test]
    fn one_quote_per_rate_card() {
        let est = estimator();
        let quotes = est
            .estimate_fares(5.0, &PricingContext::flat(), FixedJitter(0.0))
            .unwrap();
        assert_eq!(quotes.len(), est.roster().len());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::fares::RandomJitter;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quotes_sorted_by_price(d in 0.0f64..200.0, hour in 0u32..24, seed in any::<u64>()) {
            let quotes = FareEstimator::default()
                .estimate_at_hour(d, hour, RandomJitter::seeded(seed))
                .unwrap();
            for window in quotes.windows(2) {
                prop_assert!(window[0].price <= window[1].price);
            }
        }

        #[test]
        fn flat_price_matches_formula(d in 0.0f64..200.0, seed in any::<u64>()) {
            let est = FareEstimator::default();
            let quotes = est
                .estimate_fares(d, &PricingContext::flat(), RandomJitter::seeded(seed))
                .unwrap();
            for q in &quotes {
                let card = est
                    .roster()
                    .cards()
                    .iter()
                    .find(|c| c.provider == q.provider && c.vehicle_class == q.vehicle_class)
                    .unwrap();
                prop_assert_eq!(q.price, (card.rate_per_km * d).round() as u64);
            }
        }

        #[test]
        fn eta_at_least_base(d in 0.0f64..200.0, seed in any::<u64>()) {
            let quotes = FareEstimator::default()
                .estimate_fares(d, &PricingContext::flat(), RandomJitter::seeded(seed))
                .unwrap();
            let base = d * ETA_MINUTES_PER_KM;
            for q in &quotes {
                prop_assert!(f64::from(q.eta_minutes) >= base.round());
                prop_assert!(f64::from(q.eta_minutes) <= (base + 5.0).round());
            }
        }

        #[test]
        fn negative_distance_always_rejected(d in -1000.0f64..-0.001) {
            let result = FareEstimator::default()
                .estimate_fares(d, &PricingContext::flat(), RandomJitter::seeded(0));
            prop_assert!(matches!(result, Err(FareError::InvalidInput(_))));
        }
    }
}
