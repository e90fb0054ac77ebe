//! Response Templates
//!
//! Text produced for the sensor-driven categories. Numbers are rendered with
//! `f64`'s shortest representation, so 1250.0 prints as "1250".

use smallvec::SmallVec;

use crate::context::SensorContext;
use crate::severity::BandFit;

/// Reply for input that matches no rule, returned verbatim
pub const FALLBACK_RESPONSE: &str = "I understand. Based on current sensor data, please monitor the CO2 and Humidity levels closely. Would you like me to generate a maintenance task for the airflow system?";

const STATUS_REMEDIATION: &str = "Recommended Action: Increase fresh air exchange (FAE) immediately to lower CO2, and increase misting duration to correct humidity.";

// ============================================================================
// Status
// ============================================================================

/// Issue lines for the status report, CO2 first
pub fn status_issues(ctx: &SensorContext) -> SmallVec<[String; 3]> {
    let mut issues = SmallVec::new();
    let readings = &ctx.sensors;
    let thresholds = &ctx.thresholds;

    if readings.co2 > thresholds.co2.max() {
        issues.push(format!(
            "CO2 is critically high ({} PPM) for the {} phase (Target: <{}).",
            readings.co2,
            ctx.phase,
            thresholds.co2.max()
        ));
    }
    if readings.humidity < thresholds.humidity.min() {
        issues.push(format!(
            "Humidity is too low ({}%) for {} (Target: >{}%).",
            readings.humidity,
            ctx.phase.to_lowercase(),
            thresholds.humidity.min()
        ));
    }
    if readings.temp > thresholds.temp.max() {
        issues.push(format!("Temperature is slightly elevated ({}°C).", readings.temp));
    }

    issues
}

pub fn status_report(ctx: &SensorContext) -> String {
    let issues = status_issues(ctx);
    if issues.is_empty() {
        return format!(
            "Chamber {} is currently within optimal parameters for {} in the {} phase.",
            ctx.chamber_id, ctx.variety, ctx.phase
        );
    }

    format!(
        "Analysis for Chamber {} ({}):\n\n{}\n\n{}",
        ctx.chamber_id,
        ctx.variety,
        issues.join("\n"),
        STATUS_REMEDIATION
    )
}

// ============================================================================
// Single-sensor reports
// ============================================================================

pub fn co2_report(ctx: &SensorContext) -> String {
    let co2 = ctx.sensors.co2;
    let diff = co2 - ctx.thresholds.co2.max();
    let assessment = if diff > 0.0 {
        format!("above target by {} PPM", diff)
    } else {
        "optimal".to_string()
    };

    format!(
        "Current CO2: {} PPM. This is {}. High CO2 during pinning causes long, spindly stems. Increase airflow immediately.",
        co2, assessment
    )
}

pub fn humidity_report(ctx: &SensorContext) -> String {
    let humidity = ctx.sensors.humidity;
    let band = &ctx.thresholds.humidity;
    let target = format!("Target: {}-{}%", band.ideal(), band.max());

    if band.contains(humidity) {
        format!(
            "Current Humidity: {}%. This is acceptable for {} ({}).",
            humidity, ctx.phase, target
        )
    } else {
        format!(
            "Current Humidity: {}%. This is suboptimal for {} ({}). Risk of pin aborts is high. Please verify the misting nozzles in sector 2.",
            humidity, ctx.phase, target
        )
    }
}

pub fn temperature_report(ctx: &SensorContext) -> String {
    let temp = ctx.sensors.temp;
    let band = &ctx.thresholds.temp;
    let range = band.range_text();

    match band.compare(temp).fit {
        BandFit::Above => format!(
            "Current Temp: {}°C. It is slightly above the ideal range ({}°C) for {}. Consider lowering ambient temperature to encourage robust fruiting body formation.",
            temp, range, ctx.variety
        ),
        BandFit::Below => format!(
            "Current Temp: {}°C. It is below the ideal range ({}°C) for {}. Consider raising ambient temperature to keep mycelium active.",
            temp, range, ctx.variety
        ),
        BandFit::Within => format!(
            "Current Temp: {}°C. It is within the ideal range ({}°C) for {}.",
            temp, range, ctx.variety
        ),
    }
}

pub fn greeting(ctx: &SensorContext) -> String {
    format!(
        "Hello. I am Sporcbot. I am currently monitoring Chamber {}. Current phase: {}. How can I assist with the environmental regulation?",
        ctx.chamber_id, ctx.phase
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{fz402_pinning, fz402_recovered};

    #[test]
    fn test_status_report_lists_every_issue() {
        let report = status_report(&fz402_pinning());
        assert_eq!(
            report,
            "Analysis for Chamber FZ-402 (Oyster (Pleurotus)):\n\n\
             CO2 is critically high (1250 PPM) for the Pinning phase (Target: <1000).\n\
             Humidity is too low (75%) for pinning (Target: >85%).\n\
             Temperature is slightly elevated (25.1°C).\n\n\
             Recommended Action: Increase fresh air exchange (FAE) immediately to lower CO2, and increase misting duration to correct humidity."
        );
    }

    #[test]
    fn test_status_report_when_optimal() {
        assert_eq!(
            status_report(&fz402_recovered()),
            "Chamber FZ-402 is currently within optimal parameters for Oyster (Pleurotus) in the Pinning phase."
        );
    }

    #[test]
    fn test_co2_report() {
        let text = co2_report(&fz402_pinning());
        assert!(text.starts_with("Current CO2: 1250 PPM. This is above target by 250 PPM."));

        let text = co2_report(&fz402_recovered());
        assert!(text.contains("This is optimal."));
    }

    #[test]
    fn test_humidity_report_uses_band() {
        let text = humidity_report(&fz402_pinning());
        assert!(text.contains("(Target: 90-95%)"));
        assert!(text.contains("Risk of pin aborts"));

        let text = humidity_report(&fz402_recovered());
        assert!(!text.contains("Risk of pin aborts"));
    }

    #[test]
    fn test_temperature_report() {
        let text = temperature_report(&fz402_pinning());
        assert!(text.starts_with("Current Temp: 25.1°C. It is slightly above the ideal range (10-24°C)"));

        let text = temperature_report(&fz402_recovered());
        assert!(text.contains("within the ideal range"));
    }
}
