//! Shared numerical primitives anchored on `num-complex`.

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and phasors.
pub type CScalar = Complex<Scalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    Complex::from_polar(1.0, theta)
}

/// Open-circuit sentinel (`∞ + 0j`).
#[must_use]
pub const fn open_circuit() -> CScalar {
    Complex::new(Scalar::INFINITY, 0.0)
}

/// Admittance `1 / z`, treating an infinite impedance as zero admittance.
///
/// Returns `None` for a zero impedance (an ideal short has no finite admittance).
#[must_use]
pub fn admittance(z: CScalar) -> Option<CScalar> {
    if z.re == 0.0 && z.im == 0.0 {
        None
    } else if z.re.is_infinite() || z.im.is_infinite() {
        Some(Complex::new(0.0, 0.0))
    } else {
        Some(z.inv())
    }
}
