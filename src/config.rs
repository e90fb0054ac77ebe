//! Farm Configuration
//!
//! Immutable snapshot of one farm: the assistant's chamber context, the
//! lifecycle tables for the progress screen and classifier settings.
//! Missing sections fall back to the built-in demo farm.

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::context::{fz402_pinning, SensorContext};
use crate::error::ConfigError;
use crate::lifecycle::{chamber_lifecycles, MushroomLifecycle};
use crate::severity::{Classifier, ClassifierConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    /// Chamber the assistant reports on
    pub context: SensorContext,
    pub lifecycles: Vec<MushroomLifecycle>,
    pub classifier: ClassifierConfig,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            context: fz402_pinning(),
            lifecycles: chamber_lifecycles(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl FarmConfig {
    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading farm configuration from {}", path.display());

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read farm config: {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("Invalid farm config: {}", path.display()))?;

        tracing::info!(
            "Loaded farm config: chamber {}, {} lifecycles",
            config.context.chamber_id,
            config.lifecycles.len()
        );
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FarmConfig =
            serde_json::from_str(json).with_context(|| "Failed to parse farm config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the lifecycle tables and classifier settings.
    ///
    /// Threshold bands are already checked during deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.validate()?;

        let mut seen = FxHashSet::default();
        for lifecycle in &self.lifecycles {
            lifecycle.validate()?;
            if !seen.insert(lifecycle.chamber_id.as_str()) {
                return Err(ConfigError::DuplicateChamber(lifecycle.chamber_id.clone()));
            }
        }
        Ok(())
    }

    pub fn classifier(&self) -> Result<Classifier, ConfigError> {
        Classifier::new(self.classifier)
    }

    /// Lifecycles keyed by chamber id
    pub fn lifecycle_index(&self) -> FxHashMap<&str, &MushroomLifecycle> {
        self.lifecycles
            .iter()
            .map(|lc| (lc.chamber_id.as_str(), lc))
            .collect()
    }

    pub fn lifecycle(&self, chamber_id: &str) -> Option<&MushroomLifecycle> {
        self.lifecycles.iter().find(|lc| lc.chamber_id == chamber_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = FarmConfig::default();
        config.validate().unwrap();
        assert_eq!(config.lifecycle_index().len(), 7);
        assert_eq!(config.lifecycle("Chamber 6").unwrap().variety_name, "Enoki");
    }

    #[test]
    fn test_empty_json_uses_demo_farm() {
        let config = FarmConfig::from_json("{}").unwrap();
        assert_eq!(config.context.chamber_id, "FZ-402");
        assert_eq!(config.lifecycles.len(), 7);
    }

    #[test]
    fn test_partial_json_overrides_sections() {
        let json = r#"{
            "classifier": {"warning_margin": 0.1},
            "lifecycles": [{
                "variety_name": "Oyster", "chamber_id": "Chamber 2",
                "current_day": 28, "total_days": 35,
                "phases": [{"name": "Mycelial Run", "start_day": 1, "duration": 15}]
            }]
        }"#;
        let config = FarmConfig::from_json(json).unwrap();
        assert_eq!(config.lifecycles.len(), 1);
        assert_relative_eq!(config.classifier().unwrap().config().warning_margin, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_duplicate_chambers() {
        let mut config = FarmConfig::default();
        let copy = config.lifecycles[0].clone();
        config.lifecycles.push(copy);
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::DuplicateChamber("Chamber 1".to_string())
        );
    }

    #[test]
    fn test_rejects_zero_day_lifecycle() {
        let json = r#"{"lifecycles": [{
            "variety_name": "X", "chamber_id": "C", "current_day": 0, "total_days": 0, "phases": []
        }]}"#;
        let err = FarmConfig::from_json(json).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config_err, ConfigError::EmptyLifecycle { .. }));
    }

    #[test]
    fn test_rejects_inverted_band() {
        let json = r#"{"context": {
            "chamber_id": "X-1", "variety": "Oyster", "phase": "Fruiting",
            "sensors": {"temp": 20, "humidity": 90, "co2": 800, "airflow": 100},
            "thresholds": {
                "temp": {"min": 10, "max": 24},
                "humidity": {"min": 95, "max": 85},
                "co2": {"min": 400, "max": 1000}
            }
        }}"#;
        let err = FarmConfig::from_json(json).unwrap_err();
        assert!(format!("{:#}", err).contains("humidity"));
    }

    #[test]
    fn test_missing_file() {
        let err = FarmConfig::load("/nonexistent/sporacle.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read farm config"));
    }
}
