//! Threshold Bands
//!
//! A `{min, ideal, max}` triple for one monitored quantity and the comparison
//! of a reading against it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Validated threshold triple. `min <= ideal <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBand")]
pub struct ThresholdBand {
    min: f64,
    ideal: f64,
    max: f64,
}

/// Unvalidated band as it appears in configuration files.
/// `ideal` defaults to the midpoint of the band.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawBand {
    min: f64,
    max: f64,
    #[serde(default)]
    ideal: Option<f64>,
}

impl RawBand {
    pub(crate) fn validate(self, metric: &str) -> Result<ThresholdBand, ConfigError> {
        match self.ideal {
            Some(ideal) => ThresholdBand::new(metric, self.min, ideal, self.max),
            None => ThresholdBand::range(metric, self.min, self.max),
        }
    }
}

impl TryFrom<RawBand> for ThresholdBand {
    type Error = ConfigError;

    fn try_from(raw: RawBand) -> Result<Self, Self::Error> {
        raw.validate("band")
    }
}

impl ThresholdBand {
    /// Build a band, rejecting inverted bounds and an ideal outside them.
    pub fn new(metric: &str, min: f64, ideal: f64, max: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && ideal.is_finite() && max.is_finite()) {
            return Err(ConfigError::NonFiniteBound {
                metric: metric.to_string(),
            });
        }
        if min > max {
            return Err(ConfigError::InvertedBand {
                metric: metric.to_string(),
                min,
                max,
            });
        }
        if ideal < min || ideal > max {
            return Err(ConfigError::IdealOutsideBand {
                metric: metric.to_string(),
                min,
                ideal,
                max,
            });
        }
        Ok(Self { min, ideal, max })
    }

    /// Unchecked constructor for built-in literal bands
    pub(crate) const fn from_parts(min: f64, ideal: f64, max: f64) -> Self {
        Self { min, ideal, max }
    }

    /// Band with the ideal value placed at its midpoint
    pub fn range(metric: &str, min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(metric, min, min + (max - min) / 2.0, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn ideal(&self) -> f64 {
        self.ideal
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Compare a reading against the band
    pub fn compare(&self, value: f64) -> BandComparison {
        let (fit, bound, distance) = if value < self.min {
            (BandFit::Below, self.min, self.min - value)
        } else if value > self.max {
            (BandFit::Above, self.max, value - self.max)
        } else {
            (BandFit::Within, value, 0.0)
        };

        BandComparison {
            fit,
            value,
            violated_bound: bound,
            distance_from_band: distance,
        }
    }

    /// Format as "min-max" for display, e.g. "85-95"
    pub fn range_text(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// Where a reading sits relative to its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandFit {
    Below,
    Within,
    Above,
}

impl BandFit {
    pub fn display_text(&self) -> &'static str {
        match self {
            BandFit::Below => "Below range",
            BandFit::Within => "Within range",
            BandFit::Above => "Above range",
        }
    }
}

/// Result of comparing a reading with its band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandComparison {
    pub fit: BandFit,

    /// Reading being compared
    pub value: f64,

    /// Bound that was crossed (the reading itself when within the band)
    pub violated_bound: f64,

    /// Absolute distance outside the band, 0 when within
    pub distance_from_band: f64,
}

impl BandComparison {
    pub fn is_within(&self) -> bool {
        self.fit == BandFit::Within
    }

    /// Distance expressed as a fraction of the violated bound's magnitude.
    /// A zero bound makes any excursion infinitely far.
    pub fn distance_fraction(&self) -> f64 {
        if self.is_within() {
            return 0.0;
        }
        let magnitude = self.violated_bound.abs();
        if magnitude == 0.0 {
            f64::INFINITY
        } else {
            self.distance_from_band / magnitude
        }
    }
}
