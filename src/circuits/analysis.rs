use std::io;
use std::io::Write;

use num_complex::Complex;

use crate::circuits::circuit::Circuit;
use crate::math::{open_circuit, Scalar};

/// Result of evaluating a circuit at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPoint {
    /// Linear frequency in hertz.
    pub frequency: Scalar,
    /// Equivalent impedance seen by the source (`∞ + 0j` when a parallel block is open).
    pub impedance: Complex<Scalar>,
}

impl FrequencyPoint {
    /// Impedance magnitude in ohms.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.impedance.norm()
    }

    /// Impedance phase in radians.
    #[must_use]
    pub fn phase(&self) -> Scalar {
        self.impedance.arg()
    }
}

/// Computes the equivalent impedance of a [`Circuit`] across the provided frequencies (Hz).
/// The circuit itself is not modified.
#[must_use]
pub fn sweep_circuit_impedance<I>(circuit: &Circuit, frequencies: I) -> Vec<FrequencyPoint>
where
    I: IntoIterator<Item = Scalar>,
{
    let _span = tracing::debug_span!("impedance_sweep", entries = circuit.len()).entered();
    let points: Vec<FrequencyPoint> = frequencies
        .into_iter()
        .map(|f| FrequencyPoint {
            frequency: f,
            impedance: circuit.impedance_at(f).unwrap_or_else(|_| open_circuit()),
        })
        .collect();
    tracing::debug!(points = points.len(), "sweep complete");
    points
}

/// Writes `FrequencyPoint` vector to a CSV writer.
pub fn write_frequency_points_csv<W: Write>(mut w: W, points: &[FrequencyPoint]) -> io::Result<()> {
    writeln!(w, "frequency,ReZ,ImZ,mag,phase")?;
    for p in points {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.frequency,
            p.impedance.re,
            p.impedance.im,
            p.magnitude(),
            p.phase()
        )?;
    }
    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn frequency_point_round_trips_through_json() {
        let point = FrequencyPoint {
            frequency: 1.0e3,
            impedance: Complex::new(145.5, -14.3),
        };
        let json = serde_json::to_string(&point).expect("serializable");
        let back: FrequencyPoint = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, point);
    }
}
