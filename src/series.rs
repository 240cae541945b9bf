//! # Poisson series evaluator
//!
//! Every table-driven model of the crate (VSOP87 planets, Earth reference) is stored as a
//! [`SeriesTable`]: an ordered list of bands, each band being a list of
//! `(amplitude, phase, frequency)` triples. For a time argument `τ`
//!
//! ```text
//! bandᵢ(τ) = Σₖ Aₖ · cos(Bₖ + Cₖ·τ)
//! value(τ) = (Σᵢ bandᵢ(τ) · τⁱ) / divisor
//! ```
//!
//! Bands are polynomial coefficients in `τ`, evaluated with Horner's scheme. Tables are
//! `'static` constant data; evaluation is pure and has no failure mode.

/// One term `A·cos(B + C·τ)` of a Poisson series: amplitude, phase (rad), frequency (rad per unit of τ).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm(pub f64, pub f64, pub f64);

impl SeriesTerm {
    /// Value of the term at `tau`.
    #[inline]
    pub fn evaluate(&self, tau: f64) -> f64 {
        let SeriesTerm(amplitude, phase, frequency) = *self;
        amplitude * (phase + frequency * tau).cos()
    }
}

/// Highest power of τ a table may carry (bands 0 to 5).
pub const MAX_SERIES_DEGREE: usize = 5;

/// A truncated Poisson series: bands of increasing power of τ and a literal divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTable {
    bands: &'static [&'static [SeriesTerm]],
    divisor: f64,
}

impl SeriesTable {
    /// Build a table from its bands (band `i` multiplies `τⁱ`) and divisor.
    ///
    /// Panics at compile time when used in a `const` with more than six bands.
    pub const fn new(bands: &'static [&'static [SeriesTerm]], divisor: f64) -> Self {
        assert!(bands.len() <= MAX_SERIES_DEGREE + 1);
        SeriesTable { bands, divisor }
    }

    /// Sum of one band at `tau`, before the polynomial weighting and the divisor.
    pub fn band_sum(band: &[SeriesTerm], tau: f64) -> f64 {
        band.iter().map(|term| term.evaluate(tau)).sum()
    }

    /// Full value of the series at `tau`.
    ///
    /// Arguments
    /// ---------
    /// * `tau`: time argument (Julian millennia from J2000.0 for VSOP87 tables).
    ///
    /// Return
    /// ------
    /// * `Σᵢ bandᵢ(τ)·τⁱ / divisor`
    pub fn evaluate(&self, tau: f64) -> f64 {
        let total = self
            .bands
            .iter()
            .rev()
            .fold(0.0, |acc, band| acc * tau + Self::band_sum(band, tau));
        total / self.divisor
    }

    /// Polynomial degree of the table in τ (number of bands minus one).
    pub fn degree(&self) -> usize {
        self.bands.len().saturating_sub(1)
    }

    /// Total number of periodic terms over all bands.
    pub fn term_count(&self) -> usize {
        self.bands.iter().map(|band| band.len()).sum()
    }
}

#[cfg(test)]
mod series_test {
    use super::*;
    use approx::assert_relative_eq;

    const B0: &[SeriesTerm] = &[SeriesTerm(100.0, 0.0, 0.0), SeriesTerm(10.0, 0.5, 2.0)];
    const B1: &[SeriesTerm] = &[SeriesTerm(4.0, 0.0, 0.0)];
    const B2: &[SeriesTerm] = &[SeriesTerm(3.0, std::f64::consts::PI, 1.0)];

    const TABLE: SeriesTable = SeriesTable::new(&[B0, B1, B2], 10.0);

    #[test]
    fn test_term_evaluation() {
        assert_eq!(SeriesTerm(2.5, 0.0, 0.0).evaluate(12.0), 2.5);
        assert_relative_eq!(SeriesTerm(1.0, 0.5, 2.0).evaluate(0.25), 1.0_f64.cos());
    }

    #[test]
    fn test_table_at_origin() {
        // τ = 0 keeps only band 0
        let expected = (100.0 + 10.0 * 0.5_f64.cos()) / 10.0;
        assert_relative_eq!(TABLE.evaluate(0.0), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_table_polynomial_weighting() {
        let tau: f64 = 0.3;
        let b0 = 100.0 + 10.0 * (0.5 + 2.0 * tau).cos();
        let b1 = 4.0;
        let b2 = 3.0 * (std::f64::consts::PI + tau).cos();
        let expected = (b0 + b1 * tau + b2 * tau * tau) / 10.0;
        assert_relative_eq!(TABLE.evaluate(tau), expected, epsilon = 1e-13);
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(TABLE.degree(), 2);
        assert_eq!(TABLE.term_count(), 4);
        assert_eq!(SeriesTable::new(&[], 1.0).evaluate(0.7), 0.0);
    }
}
