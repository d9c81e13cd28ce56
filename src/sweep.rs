//! Frequency sweep configuration and sample generation.

use crate::errors::{CircuitError, Result};
use crate::math::Scalar;

/// Spacing of the sample frequencies.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Evenly spaced in hertz.
    Linear,
    /// Evenly spaced in decades.
    Logarithmic,
}

/// Frequency range to evaluate a circuit over.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First frequency in hertz.
    pub start_hz: Scalar,
    /// Last frequency in hertz.
    pub stop_hz: Scalar,
    /// Number of samples, endpoints included.
    pub points: usize,
    /// Sample spacing.
    pub spacing: Spacing,
}

impl SweepConfig {
    /// Creates a linearly spaced sweep.
    #[must_use]
    pub const fn linear(start_hz: Scalar, stop_hz: Scalar, points: usize) -> Self {
        Self {
            start_hz,
            stop_hz,
            points,
            spacing: Spacing::Linear,
        }
    }

    /// Creates a logarithmically spaced sweep.
    #[must_use]
    pub const fn logarithmic(start_hz: Scalar, stop_hz: Scalar, points: usize) -> Self {
        Self {
            start_hz,
            stop_hz,
            points,
            spacing: Spacing::Logarithmic,
        }
    }

    /// Checks that the range is usable for the chosen spacing.
    pub fn validate(&self) -> Result<()> {
        if !self.start_hz.is_finite() || !self.stop_hz.is_finite() {
            return Err(CircuitError::InvalidConfig(
                "sweep limits must be finite".into(),
            ));
        }
        if self.start_hz < 0.0 || self.stop_hz < 0.0 {
            return Err(CircuitError::InvalidConfig(
                "sweep frequencies cannot be negative".into(),
            ));
        }
        if self.points == 0 {
            return Err(CircuitError::InvalidConfig(
                "sweep needs at least one point".into(),
            ));
        }
        if self.spacing == Spacing::Logarithmic && (self.start_hz == 0.0 || self.stop_hz == 0.0) {
            return Err(CircuitError::InvalidConfig(format!(
                "logarithmic sweep requires positive limits, got {} to {}",
                self.start_hz, self.stop_hz
            )));
        }
        Ok(())
    }

    /// Sample frequencies in hertz.
    pub fn frequencies(&self) -> Result<Vec<Scalar>> {
        self.validate()?;
        Ok(match self.spacing {
            Spacing::Linear => linspace(self.start_hz, self.stop_hz, self.points),
            Spacing::Logarithmic => logspace_hz(self.start_hz, self.stop_hz, self.points),
        })
    }
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
///
/// # Panics
///
/// Panics unless both limits are positive; [`SweepConfig::frequencies`] checks this first.
#[must_use]
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Vec<Scalar> {
    assert!(start_hz > 0.0 && stop_hz > 0.0);
    match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn logarithmic_config_spans_decades() {
        let f = SweepConfig::logarithmic(10.0, 10_000.0, 4)
            .frequencies()
            .expect("valid sweep");
        assert_eq!(f.len(), 4);
        for (got, want) in f.iter().zip([10.0, 100.0, 1_000.0, 10_000.0]) {
            assert_relative_eq!(*got, want, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn invalid_configs_are_rejected() {
        for config in [
            SweepConfig::logarithmic(0.0, 100.0, 10),
            SweepConfig::linear(1.0, 100.0, 0),
            SweepConfig::linear(-1.0, 100.0, 3),
            SweepConfig::linear(1.0, Scalar::NAN, 3),
        ] {
            assert!(matches!(
                config.frequencies(),
                Err(CircuitError::InvalidConfig(_))
            ));
        }
    }
}
