//! Time-of-day pricing rules.

use serde::Serialize;

use super::error::FareError;

/// A half-open window of local hours, `[start, end)`.
///
/// If `start > end` the window wraps past midnight, so `HourWindow::new(23, 6)`
/// covers 23:00 through 05:59. `start` is an hour in `0..=23`; `end` may also
/// be 24 to mean "until midnight". [`HourWindow::new`] does not check this;
/// [`PricingRules::new`] rejects windows outside those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
}

impl HourWindow {
    /// Create a window from `start` (inclusive) to `end` (exclusive).
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether both bounds are valid hours.
    pub fn is_valid(&self) -> bool {
        self.start <= 23 && self.end <= 24
    }

    /// Whether `hour` falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

/// A demand peak: hours during which prices are scaled up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurgeWindow {
    pub hours: HourWindow,
    pub multiplier: f64,
}

/// Multipliers in effect for one estimation call.
///
/// Derived from the hour at evaluation time and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingContext {
    /// Demand multiplier.
    pub surge: f64,

    /// Late-night multiplier, applied on top of `surge`.
    pub night: f64,
}

impl PricingContext {
    /// A context with explicit multipliers.
    ///
    /// Not checked here; [`PricingContext::validate`] runs before every
    /// estimation.
    pub const fn new(surge: f64, night: f64) -> Self {
        Self { surge, night }
    }

    /// No surge, no night premium.
    pub const fn flat() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Fails unless both multipliers are finite and non-negative.
    pub fn validate(&self) -> Result<(), FareError> {
        check_multiplier("surge", self.surge)?;
        check_multiplier("night", self.night)
    }

    /// Combined price multiplier.
    pub fn multiplier(&self) -> f64 {
        self.surge * self.night
    }
}

/// Rules mapping an hour of the day to a [`PricingContext`].
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Surge windows in priority order; the first match wins.
    pub surge_windows: Vec<SurgeWindow>,

    /// Hours that carry the night premium.
    pub night_hours: HourWindow,

    /// Night premium multiplier.
    pub night_multiplier: f64,
}

impl PricingRules {
    /// Create rules with the given windows.
    ///
    /// Fails if a window has an hour out of range or a multiplier is
    /// negative or not finite.
    pub fn new(
        surge_windows: Vec<SurgeWindow>,
        night_hours: HourWindow,
        night_multiplier: f64,
    ) -> Result<Self, FareError> {
        for window in &surge_windows {
            check_window(window.hours)?;
            check_multiplier("surge", window.multiplier)?;
        }
        check_window(night_hours)?;
        check_multiplier("night", night_multiplier)?;

        Ok(Self {
            surge_windows,
            night_hours,
            night_multiplier,
        })
    }

    /// Surge multiplier for `hour` (1.0 outside every window).
    pub fn surge_at(&self, hour: u32) -> f64 {
        self.surge_windows
            .iter()
            .find(|w| w.hours.contains(hour))
            .map_or(1.0, |w| w.multiplier)
    }

    /// Night multiplier for `hour` (1.0 outside the night window).
    ///
    /// Computed independently of surge; both may apply at once.
    pub fn night_at(&self, hour: u32) -> f64 {
        if self.night_hours.contains(hour) {
            self.night_multiplier
        } else {
            1.0
        }
    }

    /// Pricing context for a local hour in `0..=23`.
    pub fn context_at(&self, hour: u32) -> Result<PricingContext, FareError> {
        if hour > 23 {
            return Err(FareError::InvalidInput(format!(
                "hour must be in 0..=23, got {hour}"
            )));
        }

        Ok(PricingContext::new(self.surge_at(hour), self.night_at(hour)))
    }
}

fn check_multiplier(name: &str, value: f64) -> Result<(), FareError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FareError::InvalidInput(format!(
            "{name} multiplier must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

fn check_window(window: HourWindow) -> Result<(), FareError> {
    if !window.is_valid() {
        return Err(FareError::InvalidInput(format!(
            "hour window {}..{} is out of range",
            window.start, window.end
        )));
    }
    Ok(())
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            surge_windows: vec![
                // Morning peak
                SurgeWindow {
                    hours: HourWindow::new(7, 11),
                    multiplier: 1.4,
                },
                // Evening peak
                SurgeWindow {
                    hours: HourWindow::new(17, 22),
                    multiplier: 1.6,
                },
            ],
            night_hours: HourWindow::new(23, 6),
            night_multiplier: 1.3,
        }
    }
}
