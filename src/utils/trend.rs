//! Trend Utilities
//!
//! Least-squares line fitting and simple dispersion statistics over evenly
//! spaced reading histories.

/// Fitted line over sample index: `value ≈ intercept + slope * i`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    /// Change per sample interval
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
    /// Number of samples the fit used
    pub samples: usize,
}

impl LinearTrend {
    /// Fitted value at the last sample
    pub fn fitted_latest(&self) -> f64 {
        self.intercept + self.slope * (self.samples.saturating_sub(1)) as f64
    }

    /// Extrapolate `steps` sample intervals past the last sample
    pub fn project(&self, steps: f64) -> f64 {
        self.fitted_latest() + self.slope * steps
    }
}

/// Fit a least-squares line through the readings.
///
/// Returns `None` with fewer than two finite readings.
pub fn linear_trend(readings: &[f64]) -> Option<LinearTrend> {
    if readings.len() < 2 || readings.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let n = readings.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = readings.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, &y) in readings.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    let slope = sxy / sxx;
    Some(LinearTrend {
        slope,
        intercept: mean_y - slope * mean_x,
        samples: readings.len(),
    })
}

/// Mean and population standard deviation; `None` for an empty slice
pub fn mean_and_std(readings: &[f64]) -> Option<(f64, f64)> {
    if readings.is_empty() {
        return None;
    }
    let n = readings.len() as f64;
    let mean = readings.iter().sum::<f64>() / n;
    let variance = readings.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}
