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

//! Closed-form fender curves.
//!
//! Coefficients are in ascending powers of normalized deflection. The fits
//! are generalized manufacturer curves and may differ from a specific
//! product's performance by up to about ±10%.

use crate::curve::FenderCurve;
use berthing_core::math::{interval::ClosedInterval, polynomial::Polynomial, roots::RootSearch};

/// Pneumatic rubber fender, 50 kPa internal pressure.
pub const PNEUMATIC: &str = "pneumatic";
/// Hydropneumatic rubber fender, 50 kPa internal pressure (NAVFAC TR-6064-OCN).
pub const HYDROPNEUMATIC: &str = "hydropneumatic";
/// MV leg fender used for corner protection.
pub const MV_LEG: &str = "MV";

const PNEUMATIC_ENERGY: [f64; 5] = [0.0, -0.2055, 3.9646, -14.087, 21.038];
const PNEUMATIC_REACTION: [f64; 4] = [0.0, 0.5336, -0.236, 3.5054];
const PNEUMATIC_MAX_DEFLECTION: f64 = 0.65;

// The published reaction fit shares the energy coefficients.
const HYDROPNEUMATIC_ENERGY: [f64; 6] = [0.0, 0.3992, -4.7441, 58.567, -214.92, 328.02];
const HYDROPNEUMATIC_REACTION: [f64; 6] = HYDROPNEUMATIC_ENERGY;
const HYDROPNEUMATIC_MAX_DEFLECTION: f64 = 0.45;

const MV_ENERGY: [f64; 6] = [0.0, 0.0518, 6.7381, -1.7559, -22.276, 24.046];
const MV_REACTION: [f64; 5] = [0.0, 6.5991, -5.4105, -32.671, 47.616];
const MV_MAX_DEFLECTION: f64 = 0.625;

/// A fender curve whose energy and reaction are polynomials in deflection.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialCurve {
    family: String,
    energy: Polynomial<f64>,
    reaction: Polynomial<f64>,
    domain: ClosedInterval<f64>,
}

impl PolynomialCurve {
    /// Creates a curve valid on `[0, max_deflection]`.
    ///
    /// # Panics
    ///
    /// Panics if `max_deflection` is negative or not finite.
    pub fn new(
        family: impl Into<String>,
        energy: Polynomial<f64>,
        reaction: Polynomial<f64>,
        max_deflection: f64,
    ) -> Self {
        Self {
            family: family.into(),
            energy,
            reaction,
            domain: ClosedInterval::new(0.0, max_deflection),
        }
    }

    /// The generalized pneumatic fender curve.
    pub fn pneumatic() -> Self {
        Self::new(
            PNEUMATIC,
            Polynomial::from_slice(&PNEUMATIC_ENERGY),
            Polynomial::from_slice(&PNEUMATIC_REACTION),
            PNEUMATIC_MAX_DEFLECTION,
        )
    }

    /// The generalized hydropneumatic fender curve.
    pub fn hydropneumatic() -> Self {
        Self::new(
            HYDROPNEUMATIC,
            Polynomial::from_slice(&HYDROPNEUMATIC_ENERGY),
            Polynomial::from_slice(&HYDROPNEUMATIC_REACTION),
            HYDROPNEUMATIC_MAX_DEFLECTION,
        )
    }

    /// The MV leg (corner-protection) fender curve.
    pub fn mv_leg() -> Self {
        Self::new(
            MV_LEG,
            Polynomial::from_slice(&MV_ENERGY),
            Polynomial::from_slice(&MV_REACTION),
            MV_MAX_DEFLECTION,
        )
    }

    #[inline]
    pub fn energy_polynomial(&self) -> &Polynomial<f64> {
        &self.energy
    }

    #[inline]
    pub fn reaction_polynomial(&self) -> &Polynomial<f64> {
        &self.reaction
    }
}

impl FenderCurve for PolynomialCurve {
    fn family(&self) -> &str {
        &self.family
    }

    fn domain(&self) -> ClosedInterval<f64> {
        self.domain
    }

    fn energy(&self, d: f64) -> f64 {
        self.energy.eval(d)
    }

    fn reaction(&self, d: f64) -> f64 {
        self.reaction.eval(d)
    }

    fn invert_energy(&self, normalized_energy: f64, search: &RootSearch<f64>) -> Option<f64> {
        if !normalized_energy.is_finite() || normalized_energy < 0.0 {
            return None;
        }
        search.smallest_root_in(|d| self.energy.eval(d) - normalized_energy, self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> RootSearch<f64> {
        RootSearch::default()
    }

    #[test]
    fn test_rated_point_near_unity() {
        // Each fit should absorb roughly its rated energy at the rated deflection.
        assert!((PolynomialCurve::pneumatic().energy(0.6) - 1.0).abs() < 0.02);
        assert!((PolynomialCurve::hydropneumatic().energy(0.4) - 1.0).abs() < 0.01);
        assert!((PolynomialCurve::mv_leg().energy(0.575) - 1.0).abs() < 0.001);
        assert!((PolynomialCurve::mv_leg().reaction(0.575) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_families() {
        assert_eq!(PolynomialCurve::pneumatic().family(), "pneumatic");
        assert_eq!(PolynomialCurve::hydropneumatic().family(), "hydropneumatic");
        assert_eq!(PolynomialCurve::mv_leg().family(), "MV");
    }

    #[test]
    fn test_hydropneumatic_reaction_matches_energy_fit() {
        let c = PolynomialCurve::hydropneumatic();
        assert_eq!(c.energy_polynomial(), c.reaction_polynomial());
    }

    #[test]
    fn test_invert_recovers_deflection() {
        let c = PolynomialCurve::pneumatic();
        for &d0 in &[0.1, 0.25, 0.4, 0.55, 0.65] {
            let d = c.invert_energy(c.energy(d0), &search()).unwrap();
            assert!((d - d0).abs() < 1e-8, "d0 = {d0}, d = {d}");
        }
    }

    #[test]
    fn test_invert_zero_demand_is_origin() {
        assert_eq!(
            PolynomialCurve::mv_leg().invert_energy(0.0, &search()),
            Some(0.0)
        );
        assert_eq!(
            PolynomialCurve::pneumatic().invert_energy(0.0, &search()),
            Some(0.0)
        );
    }

    #[test]
    fn test_invert_small_demand_skips_negative_dip() {
        // The pneumatic fit dips below zero near the origin; a small positive
        // demand must resolve past the dip, not inside it.
        let c = PolynomialCurve::pneumatic();
        let d = c.invert_energy(0.009_197_981_656_763_433, &search()).unwrap();
        assert!((d - 0.108_123).abs() < 1e-5, "d = {d}");
    }

    #[test]
    fn test_invert_beyond_domain_is_none() {
        let c = PolynomialCurve::pneumatic();
        assert!(c.invert_energy(c.max_energy() * 1.01, &search()).is_none());
        assert!(c.invert_energy(-0.1, &search()).is_none());
        assert!(c.invert_energy(f64::NAN, &search()).is_none());
    }

    #[test]
    fn test_max_energy_is_energy_at_domain_end() {
        let c = PolynomialCurve::mv_leg();
        assert!((c.max_energy() - c.energy(0.625)).abs() < 1e-12);
    }
}
