//! Provider roster: who offers what, at which rate.

use super::error::FareError;

/// One provider's vehicle class and its per-km rate.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCard {
    pub provider: String,
    pub vehicle_class: String,

    /// Price per kilometre in whole currency units.
    pub rate_per_km: f64,

    /// Static quality rating in `[0, 5]`.
    pub rating: f32,
}

impl RateCard {
    /// Create a rate card, validating the rate and rating.
    pub fn new(
        provider: impl Into<String>,
        vehicle_class: impl Into<String>,
        rate_per_km: f64,
        rating: f32,
    ) -> Result<Self, FareError> {
        let provider = provider.into();
        let vehicle_class = vehicle_class.into();

        if !rate_per_km.is_finite() || rate_per_km < 0.0 {
            return Err(FareError::InvalidRoster(format!(
                "{provider} {vehicle_class}: rate must be a non-negative number, got {rate_per_km}"
            )));
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(FareError::InvalidRoster(format!(
                "{provider} {vehicle_class}: rating must be in 0..=5, got {rating}"
            )));
        }

        Ok(Self {
            provider,
            vehicle_class,
            rate_per_km,
            rating,
        })
    }
}

/// Immutable, ordered table of rate cards.
///
/// Order matters: quotes with equal prices are ranked in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    cards: Vec<RateCard>,
}

impl Roster {
    /// Create a roster. At least one rate card is required.
    pub fn new(cards: Vec<RateCard>) -> Result<Self, FareError> {
        if cards.is_empty() {
            return Err(FareError::InvalidRoster("roster is empty".to_string()));
        }
        Ok(Self { cards })
    }

    /// Rate cards in roster order.
    pub fn cards(&self) -> &[RateCard] {
        &self.cards
    }

    /// Distinct providers in roster order.
    pub fn providers(&self) -> Vec<&str> {
        let mut providers: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !providers.contains(&card.provider.as_str()) {
                providers.push(&card.provider);
            }
        }
        providers
    }

    /// Number of rate cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed roster; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Builder for creating a roster.
///
/// Provides a fluent API for adding rate cards; the first invalid card
/// is reported from [`RosterBuilder::build`].
#[derive(Debug, Default)]
pub struct RosterBuilder {
    cards: Vec<RateCard>,
    error: Option<FareError>,
}

impl RosterBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rate card.
    pub fn add(mut self, provider: &str, vehicle_class: &str, rate_per_km: f64, rating: f32) -> Self {
        match RateCard::new(provider, vehicle_class, rate_per_km, rating) {
            Ok(card) => self.cards.push(card),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Build the roster.
    pub fn build(self) -> Result<Roster, FareError> {
        match self.error {
            Some(e) => Err(e),
            None => Roster::new(self.cards),
        }
    }
}

/// The Mumbai ride-hailing roster.
pub fn mumbai_roster() -> Roster {
    let card = |provider: &str, vehicle_class: &str, rate_per_km: f64, rating: f32| RateCard {
        provider: provider.to_string(),
        vehicle_class: vehicle_class.to_string(),
        rate_per_km,
        rating,
    };

    Roster {
        cards: vec![
            card("Ola", "Mini", 12.0, 4.6),
            card("Ola", "Prime Sedan", 16.0, 4.5),
            card("Ola", "SUV", 22.0, 4.6),
            card("Uber", "Go", 13.0, 4.3),
            card("Uber", "Premier", 18.0, 4.8),
            card("Uber", "Black", 28.0, 4.9),
            card("Rapido", "Bike", 7.0, 4.4),
            card("Rapido", "Auto", 10.0, 4.7),
            card("InDrive", "Auto", 9.0, 4.8),
            card("InDrive", "Sedan", 14.0, 4.5),
        ],
    }
}
