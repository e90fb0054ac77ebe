//! Severity Classifier
//!
//! Derives a severity from a reading and its threshold band, and reduces a
//! set of severities to the worst one.
//!
//! Inside the band is NORMAL. Outside, the reading is WARNING while it stays
//! within `warning_margin * |bound|` of the bound it crossed, CRITICAL beyond.

use serde::{Deserialize, Serialize};

use super::band::ThresholdBand;
use super::metric::Metric;
use crate::error::ConfigError;

/// Health classification of a metric.
///
/// Variant order is the escalation order used by [`worst_of`]:
/// NORMAL < OFFLINE < WARNING < CRITICAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Normal,
    Offline,
    Warning,
    Critical,
}

impl Severity {
    pub fn display_text(&self) -> &'static str {
        match self {
            Severity::Normal => "NORMAL",
            Severity::Offline => "OFFLINE",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Dashboard headline for an overall chamber status
    pub fn headline(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL CONDITIONS",
            Severity::Warning => "WARNING DETECTED",
            Severity::Offline => "SENSOR OFFLINE",
            Severity::Normal => "SYSTEM OPTIMAL",
        }
    }

    pub fn needs_attention(&self) -> bool {
        *self != Severity::Normal
    }
}

/// Tunables for the classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Fraction of the crossed bound inside which an excursion is only a warning
    pub warning_margin: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { warning_margin: 0.20 }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warning_margin.is_finite() && self.warning_margin >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidMargin(self.warning_margin))
        }
    }
}

/// Severity classifier bound to a validated configuration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a reading against its band; a non-finite value is OFFLINE
    pub fn classify(&self, value: f64, band: &ThresholdBand) -> Severity {
        if !value.is_finite() {
            return Severity::Offline;
        }
        let comparison = band.compare(value);
        if comparison.is_within() {
            Severity::Normal
        } else if comparison.distance_fraction() <= self.config.warning_margin {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }

    /// Classify a reading that may be missing (sensor offline)
    pub fn classify_reading(&self, value: Option<f64>, band: &ThresholdBand) -> Severity {
        match value {
            Some(v) => self.classify(v, band),
            None => Severity::Offline,
        }
    }

    /// Worst status across a set of metrics
    pub fn worst_of(&self, metrics: &[Metric]) -> Severity {
        worst_of(metrics.iter().map(|m| m.status(self)))
    }
}

/// Classify with the default warning margin
pub fn classify(value: f64, band: &ThresholdBand) -> Severity {
    Classifier::default().classify(value, band)
}

/// Maximum severity of a collection; NORMAL when empty
pub fn worst_of<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().max().unwrap_or(Severity::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn co2_band() -> ThresholdBand {
        ThresholdBand::new("co2", 400.0, 700.0, 1000.0).unwrap()
    }

    #[test]
    fn test_within_band_is_normal() {
        assert_eq!(classify(850.0, &co2_band()), Severity::Normal);
        assert_eq!(classify(1000.0, &co2_band()), Severity::Normal);
        assert_eq!(classify(400.0, &co2_band()), Severity::Normal);
    }

    #[test]
    fn test_warning_inside_margin() {
        // 20% of 1000 => warning up to 1200
        assert_eq!(classify(1150.0, &co2_band()), Severity::Warning);
        assert_eq!(classify(1200.0, &co2_band()), Severity::Warning);
        assert_eq!(classify(1250.0, &co2_band()), Severity::Critical);
    }

    #[test]
    fn test_low_humidity_is_not_normal() {
        let band = ThresholdBand::new("humidity", 85.0, 90.0, 95.0).unwrap();
        let severity = classify(78.0, &band);
        assert_ne!(severity, Severity::Normal);
        assert_eq!(severity, Severity::Warning);
    }

    #[test]
    fn test_non_finite_reading_is_offline() {
        assert_eq!(classify(f64::NAN, &co2_band()), Severity::Offline);
        assert_eq!(classify(f64::INFINITY, &co2_band()), Severity::Offline);
        assert_eq!(
            Classifier::default().classify_reading(Some(f64::NAN), &co2_band()),
            Severity::Offline
        );
    }

    #[test]
    fn test_custom_margin() {
        let strict = Classifier::new(ClassifierConfig { warning_margin: 0.05 }).unwrap();
        assert_eq!(strict.classify(1100.0, &co2_band()), Severity::Critical);

        let zero = Classifier::new(ClassifierConfig { warning_margin: 0.0 }).unwrap();
        assert_eq!(zero.classify(1000.5, &co2_band()), Severity::Critical);
    }

    #[test]
    fn test_rejects_negative_margin() {
        assert!(Classifier::new(ClassifierConfig { warning_margin: -0.1 }).is_err());
        assert!(Classifier::new(ClassifierConfig { warning_margin: f64::NAN }).is_err());
    }

    #[test]
    fn test_missing_reading_is_offline() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify_reading(None, &co2_band()), Severity::Offline);
        assert_eq!(classifier.classify_reading(Some(f64::NAN), &co2_band()), Severity::Offline);
    }

    #[test]
    fn test_worst_of() {
        assert_eq!(worst_of(Vec::<Severity>::new()), Severity::Normal);
        assert_eq!(
            worst_of([Severity::Normal, Severity::Critical, Severity::Warning]),
            Severity::Critical
        );
        assert_eq!(
            worst_of([Severity::Warning, Severity::Normal, Severity::Critical]),
            Severity::Critical
        );
        assert_eq!(worst_of([Severity::Normal, Severity::Offline]), Severity::Offline);
        assert_eq!(worst_of([Severity::Offline, Severity::Warning]), Severity::Warning);
    }
}
