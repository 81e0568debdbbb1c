// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use berthing_core::math::{interval::ClosedInterval, roots::RootSearch};
use serde::{Deserialize, Serialize};

/// Number of samples used to estimate a curve's peak normalized energy.
const PEAK_SAMPLES: usize = 257;

/// A fender family's normalized performance relationship.
///
/// Deflection, energy and reaction are all normalized: deflection as a
/// fraction of fender height, energy and reaction as fractions of the rated
/// values. The curve is only defined on `domain()`, which always starts at
/// zero.
pub trait FenderCurve: Send + Sync {
    /// The family name this curve is registered under.
    fn family(&self) -> &str;

    /// The valid normalized deflection range `[0, dmax]`.
    fn domain(&self) -> ClosedInterval<f64>;

    /// Normalized energy absorbed at normalized deflection `d`.
    fn energy(&self, d: f64) -> f64;

    /// Normalized reaction at normalized deflection `d`.
    fn reaction(&self, d: f64) -> f64;

    /// Solves `energy(d) = normalized_energy` for `d` within `domain()`.
    ///
    /// Returns the smallest qualifying deflection, or `None` when the demand
    /// is negative, not finite, or beyond what the curve can absorb.
    fn invert_energy(&self, normalized_energy: f64, search: &RootSearch<f64>) -> Option<f64>;

    /// The largest normalized energy the curve reaches over its domain.
    fn max_energy(&self) -> f64 {
        self.domain()
            .linspace(PEAK_SAMPLES)
            .map(|d| self.energy(d))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl<'a> std::fmt::Debug for dyn FenderCurve + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FenderCurve({}, domain: {})", self.family(), self.domain())
    }
}

/// Tuning for the bracketing root search used by closed-form curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootSearchOptions {
    /// Number of equal sub-intervals scanned for sign changes.
    pub samples: usize,
    /// Bisection stops once the bracket is narrower than this.
    pub tolerance: f64,
    /// Upper bound on bisection steps per bracket.
    pub max_iterations: usize,
}

impl Default for RootSearchOptions {
    fn default() -> Self {
        Self {
            samples: 512,
            tolerance: 1e-12,
            max_iterations: 200,
        }
    }
}

impl RootSearchOptions {
    /// Returns `true` if the options can build a `RootSearch`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.samples > 0
            && self.max_iterations > 0
            && self.tolerance.is_finite()
            && self.tolerance > 0.0
    }

    /// Builds the search.
    ///
    /// # Panics
    ///
    /// Panics if `is_valid()` is false.
    #[inline]
    pub fn to_search(&self) -> RootSearch<f64> {
        RootSearch::new(self.samples, self.tolerance, self.max_iterations)
    }
}

/// One point of a fender's rated performance curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Normalized deflection.
    pub deflection: f64,
    /// Energy absorption (kip-ft).
    pub energy: f64,
    /// Reaction (kip).
    pub reaction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let opts = RootSearchOptions::default();
        assert!(opts.is_valid());
        let search = opts.to_search();
        assert_eq!(search.samples(), 512);
        assert_eq!(search.max_iterations(), 200);
    }

    #[test]
    fn test_invalid_options_detected() {
        let mut opts = RootSearchOptions::default();
        opts.samples = 0;
        assert!(!opts.is_valid());

        let mut opts = RootSearchOptions::default();
        opts.tolerance = 0.0;
        assert!(!opts.is_valid());

        let mut opts = RootSearchOptions::default();
        opts.tolerance = f64::NAN;
        assert!(!opts.is_valid());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: RootSearchOptions = serde_json::from_str(r#"{ "samples": 64 }"#).unwrap();
        assert_eq!(opts.samples, 64);
        assert_eq!(opts.tolerance, 1e-12);
        assert_eq!(opts.max_iterations, 200);
    }
}
