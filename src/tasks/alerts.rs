//! Alert derivation
//!
//! Turns a chamber snapshot into alerts for every banded sensor outside its
//! thresholds, most severe first.

use chrono::{DateTime, Utc};

use super::model::Alert;
use crate::context::{Sensor, SensorContext};
use crate::severity::{BandFit, Classifier};

/// Suggested corrective action for an excursion
pub fn suggested_action(sensor: Sensor, fit: BandFit) -> &'static str {
    match (sensor, fit) {
        (Sensor::Co2, BandFit::Above) => "Increase fresh air exchange and check ventilation intake fans",
        (Sensor::Co2, BandFit::Below) => "Reduce fresh air exchange until CO2 recovers",
        (Sensor::Humidity, BandFit::Below) => "Run misting system for 12 mins",
        (Sensor::Humidity, BandFit::Above) => "Reduce misting and increase airflow",
        (Sensor::Temperature, BandFit::Above) => "Lower ambient temperature via the cooling system",
        (Sensor::Temperature, BandFit::Below) => "Raise ambient temperature via the heating system",
        _ => "Inspect the sensor and chamber",
    }
}

pub fn alerts_from_context(
    ctx: &SensorContext,
    classifier: &Classifier,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = ctx
        .deviations(classifier)
        .into_iter()
        .map(|deviation| {
            let sensor = deviation.sensor;
            let comparison = deviation.comparison;
            let direction = match comparison.fit {
                BandFit::Below => "dropped below",
                _ => "above",
            };

            Alert {
                id: format!("{}-{:?}", ctx.chamber_id, sensor).to_lowercase(),
                chamber: format!("{} - {}", ctx.chamber_id, ctx.variety),
                timestamp: now,
                message: format!(
                    "{} {} {} ({})",
                    sensor.label(),
                    direction,
                    sensor.format_value(comparison.violated_bound),
                    sensor.format_value(comparison.value)
                ),
                action: suggested_action(sensor, comparison.fit).to_string(),
                severity: deviation.severity,
            }
        })
        .collect();

    // Stable, so equal severities keep sensor order
    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{fz402_pinning, fz402_recovered};
    use crate::severity::Severity;

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_alerts_for_pinning_snapshot() {
        let alerts = alerts_from_context(&fz402_pinning(), &Classifier::default(), now());
        assert_eq!(alerts.len(), 3);

        assert_eq!(alerts[0].id, "fz-402-co2");
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[0].message, "CO2 above 1000 PPM (1250 PPM)");
        assert_eq!(alerts[0].chamber, "FZ-402 - Oyster (Pleurotus)");

        // Humidity 75 vs 85 is within 20% of the bound
        assert_eq!(alerts[1].message, "Humidity dropped below 85% (75%)");
        assert_eq!(alerts[1].action, "Run misting system for 12 mins");
        assert_eq!(alerts[1].severity, Severity::Warning);

        assert_eq!(alerts[2].id, "fz-402-temperature");
    }

    #[test]
    fn test_no_alerts_when_in_band() {
        assert!(alerts_from_context(&fz402_recovered(), &Classifier::default(), now()).is_empty());
    }
}
