//! Sensor Context
//!
//! Read-only snapshot of one chamber: identity, growth phase label, current
//! readings, thresholds and a short reading history per sensor.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::severity::band::RawBand;
use crate::severity::{BandComparison, Classifier, Severity, ThresholdBand};

/// Default spacing between history samples
pub const DEFAULT_SAMPLE_INTERVAL_MINUTES: u32 = 10;

/// Sensors reported by a chamber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensor {
    Temperature,
    Humidity,
    Co2,
    Airflow,
}

impl Sensor {
    /// Sensors that carry a threshold band, in report order
    pub const BANDED: [Sensor; 3] = [Sensor::Co2, Sensor::Humidity, Sensor::Temperature];

    pub fn label(&self) -> &'static str {
        match self {
            Sensor::Temperature => "Temperature",
            Sensor::Humidity => "Humidity",
            Sensor::Co2 => "CO2",
            Sensor::Airflow => "Air Flow",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Sensor::Temperature => "°C",
            Sensor::Humidity => "%",
            Sensor::Co2 => "PPM",
            Sensor::Airflow => "CFM",
        }
    }

    /// Reading with its unit, e.g. "75%" or "1250 PPM"
    pub fn format_value(&self, value: f64) -> String {
        match self {
            Sensor::Temperature | Sensor::Humidity => format!("{}{}", value, self.unit()),
            Sensor::Co2 | Sensor::Airflow => format!("{} {}", value, self.unit()),
        }
    }
}

/// Current readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub temp: f64,
    pub humidity: f64,
    pub co2: f64,
    pub airflow: f64,
}

/// Threshold bands for the banded sensors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct SensorThresholds {
    pub temp: ThresholdBand,
    pub humidity: ThresholdBand,
    pub co2: ThresholdBand,
}

#[derive(Debug, Deserialize)]
struct RawThresholds {
    temp: RawBand,
    humidity: RawBand,
    co2: RawBand,
}

impl TryFrom<RawThresholds> for SensorThresholds {
    type Error = ConfigError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Ok(Self {
            temp: raw.temp.validate("temp")?,
            humidity: raw.humidity.validate("humidity")?,
            co2: raw.co2.validate("co2")?,
        })
    }
}

/// Recent readings per banded sensor, oldest first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorHistory {
    pub temp: Vec<f64>,
    pub humidity: Vec<f64>,
    pub co2: Vec<f64>,
    pub sample_interval_minutes: u32,
}

/// Chamber snapshot consumed by the assistant and the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorContext {
    pub chamber_id: String,
    pub variety: String,
    /// Free-text growth phase label, e.g. "Pinning"
    pub phase: String,
    pub sensors: SensorReadings,
    pub thresholds: SensorThresholds,
    #[serde(default)]
    pub history: SensorHistory,
}

/// A banded sensor outside its thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub sensor: Sensor,
    pub comparison: BandComparison,
    pub severity: Severity,
}

impl SensorContext {
    pub fn reading(&self, sensor: Sensor) -> f64 {
        match sensor {
            Sensor::Temperature => self.sensors.temp,
            Sensor::Humidity => self.sensors.humidity,
            Sensor::Co2 => self.sensors.co2,
            Sensor::Airflow => self.sensors.airflow,
        }
    }

    /// Threshold band for a sensor; airflow has none
    pub fn band(&self, sensor: Sensor) -> Option<&ThresholdBand> {
        match sensor {
            Sensor::Temperature => Some(&self.thresholds.temp),
            Sensor::Humidity => Some(&self.thresholds.humidity),
            Sensor::Co2 => Some(&self.thresholds.co2),
            Sensor::Airflow => None,
        }
    }

    pub fn history(&self, sensor: Sensor) -> &[f64] {
        match sensor {
            Sensor::Temperature => &self.history.temp,
            Sensor::Humidity => &self.history.humidity,
            Sensor::Co2 => &self.history.co2,
            Sensor::Airflow => &[],
        }
    }

    pub fn sample_interval_minutes(&self) -> u32 {
        if self.history.sample_interval_minutes == 0 {
            DEFAULT_SAMPLE_INTERVAL_MINUTES
        } else {
            self.history.sample_interval_minutes
        }
    }

    /// Banded sensors currently outside their thresholds, CO2 first
    pub fn deviations(&self, classifier: &Classifier) -> SmallVec<[Deviation; 3]> {
        Sensor::BANDED
            .iter()
            .filter_map(|&sensor| {
                let band = self.band(sensor)?;
                let value = self.reading(sensor);
                let comparison = band.compare(value);
                if comparison.is_within() {
                    None
                } else {
                    Some(Deviation {
                        sensor,
                        comparison,
                        severity: classifier.classify(value, band),
                    })
                }
            })
            .collect()
    }
}
