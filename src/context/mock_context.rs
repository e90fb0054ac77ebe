//! Built-in chamber snapshots
//!
//! Hardcoded data used when no configuration file is supplied, and by tests.

use super::sensor_context::{SensorContext, SensorHistory, SensorReadings, SensorThresholds};
use crate::severity::{Metric, ThresholdBand};

// ============================================================================
// Assistant context
// ============================================================================

/// Chamber FZ-402, Oyster (Pleurotus) in the Pinning phase.
/// CO2 high, humidity low, temperature slightly elevated.
pub fn fz402_pinning() -> SensorContext {
    SensorContext {
        chamber_id: "FZ-402".to_string(),
        variety: "Oyster (Pleurotus)".to_string(),
        phase: "Pinning".to_string(),
        sensors: SensorReadings {
            temp: 25.1,
            humidity: 75.0,
            co2: 1250.0,
            airflow: 250.0,
        },
        // Oyster pinning needs fresh air
        thresholds: SensorThresholds {
            temp: band("temp", 10.0, 18.0, 24.0),
            humidity: band("humidity", 85.0, 90.0, 95.0),
            co2: band("co2", 400.0, 700.0, 1000.0),
        },
        history: SensorHistory {
            temp: vec![24.2, 24.4, 24.6, 24.8, 25.0, 25.1],
            humidity: vec![82.0, 80.0, 79.0, 77.0, 76.0, 75.0],
            co2: vec![1000.0, 1050.0, 1100.0, 1150.0, 1200.0, 1250.0],
            sample_interval_minutes: 10,
        },
    }
}

/// Same chamber after corrective action: every reading inside its band
pub fn fz402_recovered() -> SensorContext {
    let mut ctx = fz402_pinning();
    ctx.sensors = SensorReadings {
        temp: 18.5,
        humidity: 90.0,
        co2: 720.0,
        airflow: 250.0,
    };
    ctx.history = SensorHistory {
        temp: vec![19.0, 18.8, 18.6, 18.5],
        humidity: vec![88.0, 89.0, 90.0, 90.0],
        co2: vec![760.0, 740.0, 730.0, 720.0],
        sample_interval_minutes: 10,
    };
    ctx
}

// ============================================================================
// Dashboard tiles
// ============================================================================

/// Home-screen metric tiles with their optimal bands
pub fn dashboard_metrics() -> Vec<Metric> {
    vec![
        metric("temp", "Temperature", "°C", band("temp", 21.0, 22.5, 24.0),
            &[21.0, 21.5, 22.0, 22.2, 22.5, 22.5, 22.4, 22.5]),
        metric("humidity", "Humidity %RH", "%", band("humidity", 80.0, 85.0, 90.0),
            &[85.0, 84.0, 82.0, 80.0, 79.0, 78.0, 78.0, 78.0]),
        metric("co2", "CO2", "ppm", band("co2", 600.0, 800.0, 1000.0),
            &[800.0, 810.0, 820.0, 830.0, 840.0, 850.0, 850.0, 850.0]),
        metric("aer", "Air Flow (ACH)", "ACH", band("aer", 10.0, 12.5, 15.0),
            &[12.0, 12.0, 12.0, 12.2, 12.4, 12.4, 12.4, 12.4]),
    ]
}

fn metric(id: &str, label: &str, unit: &str, band: ThresholdBand, readings: &[f64]) -> Metric {
    let mut metric = Metric::new(id, label, unit, band);
    for &value in readings {
        metric.record(value);
    }
    metric
}

fn band(metric: &str, min: f64, ideal: f64, max: f64) -> ThresholdBand {
    debug_assert!(ThresholdBand::new(metric, min, ideal, max).is_ok(), "bad built-in band {metric}");
    ThresholdBand::from_parts(min, ideal, max)
}
