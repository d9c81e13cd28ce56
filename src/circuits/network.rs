//! Series/parallel composition of resolved impedances.
//!
//! A circuit is read left to right as a flat list of impedances, each tagged
//! [`ConnectionKind::Series`] or [`ConnectionKind::Parallel`]. Every maximal run of
//! equal tags forms one block; the blocks are then chained in series. Order is
//! significant: `series, parallel, series` yields three blocks, not two.

use num_complex::Complex;

use crate::constants::ADMITTANCE_CANCELLATION_TOLERANCE;
use crate::errors::DivisionError;
use crate::math::{admittance, Scalar};

/// How an entry joins its neighbours.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Series connection (impedances add linearly).
    Series,
    /// Parallel connection (admittances add linearly).
    Parallel,
}

impl ConnectionKind {
    /// Lowercase name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Parallel => "parallel",
        }
    }
}

/// Sum of impedances connected in series. Empty input yields zero.
#[must_use]
pub fn series_impedance(members: &[Complex<Scalar>]) -> Complex<Scalar> {
    members.iter().sum()
}

/// Equivalent impedance of members connected in parallel, `1 / Σ(1/Zᵢ)`.
///
/// A zero-impedance member shorts the whole block. Members with infinite impedance
/// contribute no admittance. When the admittance sum vanishes (every member open, or
/// exact reactive cancellation) the block has no finite impedance and
/// [`DivisionError`] is returned.
pub fn parallel_impedance(members: &[Complex<Scalar>]) -> Result<Complex<Scalar>, DivisionError> {
    let mut total = Complex::<Scalar>::default();
    let mut scale = 0.0;
    for &z in members {
        let Some(y) = admittance(z) else {
            return Ok(Complex::default());
        };
        total += y;
        scale += y.norm();
    }

    if total.norm() <= ADMITTANCE_CANCELLATION_TOLERANCE * scale {
        Err(DivisionError)
    } else {
        Ok(total.inv())
    }
}

/// Contiguous block of equally tagged impedances awaiting reduction.
#[derive(Debug, Clone)]
struct Run {
    connection: ConnectionKind,
    members: Vec<Complex<Scalar>>,
}

impl Run {
    fn close(&self) -> Result<Complex<Scalar>, DivisionError> {
        match self.connection {
            ConnectionKind::Series => Ok(series_impedance(&self.members)),
            ConnectionKind::Parallel => parallel_impedance(&self.members),
        }
    }
}

/// Reduces an ordered, tagged impedance list to its run terms, one per maximal run.
pub fn terms<I>(entries: I) -> Result<Vec<Complex<Scalar>>, DivisionError>
where
    I: IntoIterator<Item = (Complex<Scalar>, ConnectionKind)>,
{
    let mut finalized = Vec::new();
    let mut open: Option<Run> = None;

    for (z, connection) in entries {
        match open.as_mut() {
            Some(run) if run.connection == connection => run.members.push(z),
            _ => {
                if let Some(run) = open.take() {
                    finalized.push(run.close()?);
                }
                open = Some(Run {
                    connection,
                    members: vec![z],
                });
            }
        }
    }
    if let Some(run) = open {
        finalized.push(run.close()?);
    }
    Ok(finalized)
}

/// Reduces an ordered, tagged impedance list to a single equivalent impedance.
///
/// Empty input reduces to `0 + 0j`.
pub fn reduce<I>(entries: I) -> Result<Complex<Scalar>, DivisionError>
where
    I: IntoIterator<Item = (Complex<Scalar>, ConnectionKind)>,
{
    Ok(series_impedance(&terms(entries)?))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn r(ohms: Scalar) -> Complex<Scalar> {
        Complex::new(ohms, 0.0)
    }

    #[test]
    fn series_network_adds_impedances() {
        let z = reduce([(r(100.0), ConnectionKind::Series), (r(50.0), ConnectionKind::Series)])
            .expect("finite");
        assert_relative_eq!(z.re, 150.0, epsilon = 1.0e-9);
        assert_relative_eq!(z.im, 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn parallel_network_combines_admittance() {
        let z = reduce([(r(100.0), ConnectionKind::Parallel), (r(100.0), ConnectionKind::Parallel)])
            .expect("finite");
        assert_relative_eq!(z.re, 50.0, epsilon = 1.0e-9);
    }

    #[test]
    fn tag_changes_split_runs() {
        use ConnectionKind::{Parallel, Series};
        let runs = terms([
            (r(10.0), Series),
            (r(20.0), Parallel),
            (r(20.0), Parallel),
            (r(5.0), Series),
        ])
        .expect("finite");
        assert_eq!(runs.len(), 3);
        assert_relative_eq!(runs[0].re, 10.0, epsilon = 1.0e-9);
        assert_relative_eq!(runs[1].re, 10.0, epsilon = 1.0e-9);
        assert_relative_eq!(runs[2].re, 5.0, epsilon = 1.0e-9);
    }

    #[test]
    fn order_matters_across_runs() {
        use ConnectionKind::{Parallel, Series};
        let a = reduce([(r(10.0), Series), (r(10.0), Parallel), (r(10.0), Parallel)])
            .expect("finite");
        let b = reduce([(r(10.0), Parallel), (r(10.0), Series), (r(10.0), Parallel)])
            .expect("finite");
        assert_relative_eq!(a.re, 15.0, epsilon = 1.0e-9);
        assert_relative_eq!(b.re, 30.0, epsilon = 1.0e-9);
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(reduce(std::iter::empty::<(Complex<Scalar>, ConnectionKind)>()).expect("finite"), Complex::default());
    }

    #[test]
    fn short_member_shorts_parallel_block() {
        let z = parallel_impedance(&[r(100.0), Complex::new(0.0, 0.0)]).expect("finite");
        assert_eq!(z, Complex::default());
    }

    #[test]
    fn open_members_are_ignored_in_parallel() {
        let open = Complex::new(0.0, Scalar::NEG_INFINITY);
        let z = parallel_impedance(&[open, r(75.0)]).expect("finite");
        assert_relative_eq!(z.re, 75.0, epsilon = 1.0e-9);
        assert_eq!(parallel_impedance(&[open, open]), Err(DivisionError));
    }

    #[test]
    fn resonant_tank_is_reported_as_open() {
        let z = parallel_impedance(&[Complex::new(0.0, 40.0), Complex::new(0.0, -40.0)]);
        assert_eq!(z, Err(DivisionError));
    }
}
