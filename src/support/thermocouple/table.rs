//! Piecewise-polynomial reference tables.
//!
//! Each [`ThermocoupleTable`] is an ordered run of [`PolynomialSegment`]s that
//! together cover the table's valid domain. The tables themselves are `static`
//! data in the `reference` submodule and are reached through [`lookup`].

mod reference;

use std::fmt;

use log::{debug, trace};
use num_traits::Float;

use super::{ThermocoupleError, ThermocoupleType};

/// Direction of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Temperature in °C to EMF in mV.
    Direct,
    /// EMF in mV to temperature in °C.
    Inverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("direct"),
            Self::Inverse => f.write_str("inverse"),
        }
    }
}

/// Additive non-polynomial term `a · exp(b · (x − c)²)`.
///
/// Only the upper Type K direct segment carries one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionTerm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl CorrectionTerm {
    /// Evaluates the term at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * (self.b * (x - self.c).powi(2)).exp()
    }
}

/// One sub-range of a table with its own polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialSegment {
    lower_bound: f64,
    upper_bound: f64,
    coefficients: &'static [f64],
    correction: Option<CorrectionTerm>,
}

impl PolynomialSegment {
    const fn new(lower_bound: f64, upper_bound: f64, coefficients: &'static [f64]) -> Self {
        Self {
            lower_bound,
            upper_bound,
            coefficients,
            correction: None,
        }
    }

    const fn with_correction(self, correction: CorrectionTerm) -> Self {
        Self {
            correction: Some(correction),
            ..self
        }
    }

    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Polynomial coefficients in ascending degree, `c0..cn`.
    #[must_use]
    pub fn coefficients(&self) -> &'static [f64] {
        self.coefficients
    }

    #[must_use]
    pub fn correction(&self) -> Option<&CorrectionTerm> {
        self.correction.as_ref()
    }

    /// Returns `true` if `x` lies within the closed interval of this segment.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower_bound <= x && x <= self.upper_bound
    }

    /// Evaluates the segment at `x`.
    ///
    /// The bounds are not checked; use [`ThermocoupleTable::evaluate`] for a
    /// range-checked conversion.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let sum = polynomial(self.coefficients, x);
        match &self.correction {
            Some(term) => sum + term.evaluate(x),
            None => sum,
        }
    }
}

/// Sums `cᵢ · xⁱ` term by term in ascending powers (not Horner's scheme).
pub(crate) fn polynomial<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .zip(0_i32..)
        .fold(T::zero(), |sum, (&c, power)| sum + c * x.powi(power))
}

/// An ordered, gap-free sequence of segments for one type and direction.
#[derive(Debug, PartialEq)]
pub struct ThermocoupleTable {
    kind: ThermocoupleType,
    direction: Direction,
    segments: &'static [PolynomialSegment],
}

impl ThermocoupleTable {
    #[must_use]
    pub fn kind(&self) -> ThermocoupleType {
        self.kind
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Segments in ascending order of lower bound.
    #[must_use]
    pub fn segments(&self) -> &'static [PolynomialSegment] {
        self.segments
    }

    /// Returns the `(min, max)` valid input range.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        // Every reference table has at least one segment.
        let first = &self.segments[0];
        let last = &self.segments[self.segments.len() - 1];
        (first.lower_bound, last.upper_bound)
    }

    /// Finds the segment containing `x`.
    ///
    /// At a boundary shared by two segments the earlier one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ThermocoupleError::OutOfRange`] if `x` lies outside the table's
    /// domain or is NaN.
    pub fn select(&self, x: f64) -> Result<&'static PolynomialSegment, ThermocoupleError> {
        let (min, max) = self.domain();
        let found = if x < min || x > max {
            None
        } else {
            self.segments
                .iter()
                .zip(0_usize..)
                .find(|(segment, _)| segment.contains(x))
        };

        match found {
            Some((segment, index)) => {
                trace!(
                    "type {} {}: {x} in segment {index} [{}, {}]",
                    self.kind, self.direction, segment.lower_bound, segment.upper_bound
                );
                Ok(segment)
            }
            None => {
                debug!(
                    "type {} {}: {x} rejected, valid range is [{min}, {max}]",
                    self.kind, self.direction
                );
                Err(ThermocoupleError::OutOfRange {
                    kind: self.kind,
                    direction: self.direction,
                    value: x,
                    min,
                    max,
                })
            }
        }
    }

    /// Selects the segment containing `x` and evaluates it.
    ///
    /// # Errors
    ///
    /// Returns [`ThermocoupleError::OutOfRange`] if `x` lies outside the table's domain.
    pub fn evaluate(&self, x: f64) -> Result<f64, ThermocoupleError> {
        Ok(self.select(x)?.evaluate(x))
    }
}

/// Returns the reference table for a type and direction.
#[must_use]
pub fn lookup(kind: ThermocoupleType, direction: Direction) -> &'static ThermocoupleTable {
    use Direction::{Direct, Inverse};
    use ThermocoupleType::{B, E, J, K, N, R, S, T};

    match (kind, direction) {
        (B, Direct) => &reference::TYPE_B,
        (B, Inverse) => &reference::INVERSE_B,
        (E, Direct) => &reference::TYPE_E,
        (E, Inverse) => &reference::INVERSE_E,
        (J, Direct) => &reference::TYPE_J,
        (J, Inverse) => &reference::INVERSE_J,
        (K, Direct) => &reference::TYPE_K,
        (K, Inverse) => &reference::INVERSE_K,
        (N, Direct) => &reference::TYPE_N,
        (N, Inverse) => &reference::INVERSE_N,
        (R, Direct) => &reference::TYPE_R,
        (R, Inverse) => &reference::INVERSE_R,
        (S, Direct) => &reference::TYPE_S,
        (S, Inverse) => &reference::INVERSE_S,
        (T, Direct) => &reference::TYPE_T,
        (T, Inverse) => &reference::INVERSE_T,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn all_tables() -> impl Iterator<Item = &'static ThermocoupleTable> {
        ThermocoupleType::ALL.into_iter().flat_map(|kind| {
            [
                lookup(kind, Direction::Direct),
                lookup(kind, Direction::Inverse),
            ]
        })
    }

    #[test]
    fn lookup_returns_matching_table() {
        for kind in ThermocoupleType::ALL {
            for direction in [Direction::Direct, Direction::Inverse] {
                let table = lookup(kind, direction);
                assert_eq!(table.kind(), kind);
                assert_eq!(table.direction(), direction);
            }
        }
    }

    #[test]
    fn segments_are_sorted_without_gaps() {
        for table in all_tables() {
            let segments = table.segments();
            assert!(!segments.is_empty());

            for segment in segments {
                assert!(segment.lower_bound() < segment.upper_bound());
                assert!(!segment.coefficients().is_empty());
            }

            for pair in segments.windows(2) {
                assert!(pair[0].lower_bound() < pair[1].lower_bound());
                assert!(
                    pair[1].lower_bound() <= pair[0].upper_bound(),
                    "gap in type {} {} at {}",
                    table.kind(),
                    table.direction(),
                    pair[0].upper_bound()
                );
            }
        }
    }

    #[test]
    fn domain_spans_first_to_last_segment() {
        for table in all_tables() {
            let segments = table.segments();
            let (min, max) = table.domain();
            assert_eq!(min, segments[0].lower_bound());
            assert_eq!(max, segments[segments.len() - 1].upper_bound());
            assert!(min < max);
        }

        assert_eq!(
            lookup(ThermocoupleType::R, Direction::Inverse).domain(),
            (-0.226, 21.103)
        );
    }

    #[test]
    fn only_upper_type_k_direct_segment_is_corrected() {
        for table in all_tables() {
            for (index, segment) in table.segments().iter().enumerate() {
                let expected = table.kind() == ThermocoupleType::K
                    && table.direction() == Direction::Direct
                    && index == 1;
                assert_eq!(segment.correction().is_some(), expected);
            }
        }
    }

    #[test]
    fn interior_boundaries_use_earlier_segment() -> Result<(), ThermocoupleError> {
        for table in all_tables() {
            let segments = table.segments();
            for (index, segment) in segments.iter().enumerate().take(segments.len() - 1) {
                let boundary = segment.upper_bound();
                let selected = table.select(boundary)?;
                assert_eq!(selected, &segments[index]);
                assert_eq!(table.evaluate(boundary)?, segment.evaluate(boundary));
            }
        }
        Ok(())
    }

    #[test]
    fn overlapping_inverse_segments_prefer_earlier() -> Result<(), ThermocoupleError> {
        // 12 mV lies in both the second and third type R inverse segments.
        let table = lookup(ThermocoupleType::R, Direction::Inverse);
        assert_eq!(table.select(12.0)?, &table.segments()[1]);
        Ok(())
    }

    #[test]
    fn rejects_values_outside_domain() {
        for table in all_tables() {
            let (min, max) = table.domain();
            for x in [min - 1e-9, max + 1e-9, f64::NAN, f64::NEG_INFINITY] {
                assert!(matches!(
                    table.evaluate(x),
                    Err(ThermocoupleError::OutOfRange { kind, direction, .. })
                        if kind == table.kind() && direction == table.direction()
                ));
            }
            assert!(table.evaluate(min).is_ok());
            assert!(table.evaluate(max).is_ok());
        }
    }

    #[test]
    fn polynomial_sums_ascending_powers() {
        assert_relative_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_relative_eq!(polynomial::<f64>(&[], 5.0), 0.0);
        assert_relative_eq!(polynomial(&[0.5_f32], 100.0), 0.5);
    }

    #[test]
    fn correction_term_is_added_to_polynomial() {
        let segment = PolynomialSegment::new(0.0, 10.0, &[1.0, 1.0]).with_correction(
            CorrectionTerm {
                a: 2.0,
                b: -1.0,
                c: 3.0,
            },
        );
        // At the center the exponential is exactly one.
        assert_relative_eq!(segment.evaluate(3.0), 4.0 + 2.0);
        assert_relative_eq!(
            segment.evaluate(4.0),
            5.0 + 2.0 * (-1.0_f64).exp(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn type_k_reference_points() -> Result<(), ThermocoupleError> {
        let direct = lookup(ThermocoupleType::K, Direction::Direct);
        assert_relative_eq!(direct.evaluate(0.0)?, 0.0);
        assert_relative_eq!(direct.evaluate(100.0)?, 4.096, epsilon = 5e-4);
        assert_relative_eq!(direct.evaluate(1000.0)?, 41.276, epsilon = 5e-4);
        assert_relative_eq!(direct.evaluate(-200.0)?, -5.891, epsilon = 5e-4);
        Ok(())
    }

    #[test]
    fn published_values_for_other_types() -> Result<(), ThermocoupleError> {
        use ThermocoupleType::{B, E, J, N, R, S, T};

        let cases = [
            (B, 1000.0, 4.834),
            (E, 500.0, 37.005),
            (J, 500.0, 27.393),
            (J, 1000.0, 57.953),
            (N, 1000.0, 36.256),
            (R, 1000.0, 10.506),
            (R, 1400.0, 16.040),
            (S, 1000.0, 9.587),
            (S, 1400.0, 14.373),
            (T, 200.0, 9.288),
        ];

        for (kind, celsius, millivolts) in cases {
            let direct = lookup(kind, Direction::Direct);
            assert_relative_eq!(direct.evaluate(celsius)?, millivolts, epsilon = 2e-3);
        }
        Ok(())
    }
}
