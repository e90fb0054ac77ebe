//! Contamination Anomaly Screen
//!
//! Flags a sensor when its latest reading sits more than `ANOMALY_SIGMA`
//! standard deviations away from the mean of the readings before it.

use smallvec::SmallVec;

use crate::context::{Sensor, SensorContext};
use crate::utils::trend::mean_and_std;

pub const ANOMALY_SIGMA: f64 = 3.0;

/// Reply when no sensor is flagged
pub const NO_ANOMALY_RESPONSE: &str = "Anomaly screen: Normal. No anomalies detected that suggest contamination (\"Silent Killer\"). Regular visual inspection is still recommended.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anomaly {
    pub sensor: Sensor,
    pub latest: f64,
    pub baseline_mean: f64,
    /// Signed distance from the baseline mean in standard deviations
    pub z_score: f64,
}

/// Screen the latest reading of each sensor history against its baseline.
///
/// Histories need at least two baseline readings with non-zero spread.
pub fn screen_anomalies(ctx: &SensorContext) -> SmallVec<[Anomaly; 3]> {
    Sensor::BANDED
        .iter()
        .filter_map(|&sensor| {
            let (&latest, baseline) = ctx.history(sensor).split_last()?;
            if baseline.len() < 2 {
                return None;
            }
            let (mean, std) = mean_and_std(baseline)?;
            if std <= f64::EPSILON || !latest.is_finite() {
                return None;
            }

            let z_score = (latest - mean) / std;
            (z_score.abs() > ANOMALY_SIGMA).then_some(Anomaly {
                sensor,
                latest,
                baseline_mean: mean,
                z_score,
            })
        })
        .collect()
}

pub fn contamination_report(ctx: &SensorContext) -> String {
    let anomalies = screen_anomalies(ctx);
    if anomalies.is_empty() {
        return NO_ANOMALY_RESPONSE.to_string();
    }

    let findings: Vec<String> = anomalies
        .iter()
        .map(|a| {
            format!(
                "{} reading {}{} is {:.1} standard deviations from its recent mean of {:.1}{}.",
                a.sensor.label(),
                a.latest,
                a.sensor.unit(),
                a.z_score.abs(),
                a.baseline_mean,
                a.sensor.unit()
            )
        })
        .collect();

    format!(
        "Anomaly screen: Attention needed in Chamber {}.\n\n{}\n\nSudden shifts like this can indicate contamination (\"Silent Killer\") or a faulty sensor. Inspect the substrate and verify the sensor before adjusting setpoints.",
        ctx.chamber_id,
        findings.join("\n")
    )
}
