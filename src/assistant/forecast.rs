//! CO2 Forecast
//!
//! Fits a least-squares line through the chamber's CO2 history and projects
//! it over a short horizon.

use crate::context::SensorContext;
use crate::utils::trend::linear_trend;

/// How far ahead the projection looks
pub const FORECAST_HORIZON_MINUTES: u32 = 45;

/// Slopes below this (PPM per sample) are reported as stable
const STABLE_SLOPE_PPM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Co2Forecast {
    /// PPM change per sample interval
    pub slope_per_interval: f64,
    pub interval_minutes: u32,
    /// Fitted level projected `FORECAST_HORIZON_MINUTES` ahead
    pub projected: f64,
    pub limit: f64,
}

impl Co2Forecast {
    pub fn direction(&self) -> &'static str {
        if self.slope_per_interval.abs() < STABLE_SLOPE_PPM {
            "stable"
        } else if self.slope_per_interval > 0.0 {
            "rising"
        } else {
            "falling"
        }
    }

    /// Slope as reported; a stable trend reads as zero
    pub fn displayed_slope(&self) -> f64 {
        if self.direction() == "stable" {
            0.0
        } else {
            self.slope_per_interval
        }
    }

    pub fn breaches_limit(&self) -> bool {
        self.projected > self.limit
    }
}

/// Project CO2 from history; `None` with fewer than two readings or any
/// non-finite reading
pub fn forecast_co2(ctx: &SensorContext) -> Option<Co2Forecast> {
    let trend = linear_trend(&ctx.history.co2)?;
    let interval = ctx.sample_interval_minutes();
    let steps = f64::from(FORECAST_HORIZON_MINUTES) / f64::from(interval);

    Some(Co2Forecast {
        slope_per_interval: trend.slope,
        interval_minutes: interval,
        projected: trend.project(steps),
        limit: ctx.thresholds.co2.max(),
    })
}

pub fn prediction_report(ctx: &SensorContext) -> String {
    let unreadable = ctx.history.co2.iter().filter(|v| !v.is_finite()).count();
    if unreadable > 0 {
        return format!(
            "Prediction unavailable: {} of {} CO2 reading(s) in the history are unreadable. Check the CO2 sensor.",
            unreadable,
            ctx.history.co2.len()
        );
    }

    let Some(forecast) = forecast_co2(ctx) else {
        return format!(
            "Prediction unavailable: insufficient history ({} CO2 reading(s) recorded, at least 2 needed for a trend).",
            ctx.history.co2.len()
        );
    };

    let mut text = format!(
        "Linear Regression models indicate a trend of {} CO2 ({:+.0} PPM/{}min). ",
        forecast.direction(),
        forecast.displayed_slope(),
        forecast.interval_minutes
    );

    if forecast.breaches_limit() {
        text.push_str(&format!(
            "Without intervention, CO2 will reach about {:.0} PPM within {} minutes, exceeding the {} PPM limit and risking suffocation of pins.",
            forecast.projected, FORECAST_HORIZON_MINUTES, forecast.limit
        ));
    } else {
        text.push_str(&format!(
            "CO2 is projected at about {:.0} PPM in {} minutes, within the {} PPM limit.",
            forecast.projected, FORECAST_HORIZON_MINUTES, forecast.limit
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fz402_pinning;
    use approx::assert_relative_eq;

    #[test]
    fn test_forecast_for_rising_co2() {
        let forecast = forecast_co2(&fz402_pinning()).unwrap();
        assert_relative_eq!(forecast.slope_per_interval, 50.0, epsilon = 1e-9);
        assert_relative_eq!(forecast.projected, 1475.0, epsilon = 1e-6);
        assert_eq!(forecast.direction(), "rising");
        assert!(forecast.breaches_limit());
    }

    #[test]
    fn test_prediction_report_text() {
        let text = prediction_report(&fz402_pinning());
        assert_eq!(
            text,
            "Linear Regression models indicate a trend of rising CO2 (+50 PPM/10min). \
             Without intervention, CO2 will reach about 1475 PPM within 45 minutes, \
             exceeding the 1000 PPM limit and risking suffocation of pins."
        );
    }

    #[test]
    fn test_interval_scales_projection() {
        let mut ctx = fz402_pinning();
        ctx.history.sample_interval_minutes = 15;
        let forecast = forecast_co2(&ctx).unwrap();
        // 45 minutes is three samples
        assert_relative_eq!(forecast.projected, 1400.0, epsilon = 1e-6);
    }

    #[test]
    fn test_falling_within_limit() {
        let mut ctx = fz402_pinning();
        ctx.history.co2 = vec![900.0, 860.0, 820.0, 780.0];
        let text = prediction_report(&ctx);
        assert!(text.contains("falling CO2 (-40 PPM/10min)"));
        assert!(text.contains("within the 1000 PPM limit"));
    }

    #[test]
    fn test_stable_slope_reads_as_zero() {
        let mut ctx = fz402_pinning();
        ctx.history.co2 = vec![800.2, 800.0, 800.1, 799.9];
        let text = prediction_report(&ctx);
        assert!(text.contains("stable CO2 (+0 PPM/10min)"), "{}", text);
        assert!(!text.contains("-0 PPM"));
    }

    #[test]
    fn test_unreadable_history() {
        let mut ctx = fz402_pinning();
        ctx.history.co2 = vec![1100.0, f64::NAN, 1200.0];
        let text = prediction_report(&ctx);
        assert!(text.starts_with("Prediction unavailable: 1 of 3 CO2 reading(s)"));
        assert!(!text.contains("insufficient history"));
    }

    #[test]
    fn test_insufficient_history() {
        let mut ctx = fz402_pinning();
        ctx.history.co2 = vec![1250.0];
        assert!(forecast_co2(&ctx).is_none());
        assert!(prediction_report(&ctx).starts_with("Prediction unavailable: insufficient history"));
    }
}
