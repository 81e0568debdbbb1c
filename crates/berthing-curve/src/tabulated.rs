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

//! Piecewise-linear fender curves.

use crate::{curve::FenderCurve, error::CurveError};
use berthing_core::math::{interval::ClosedInterval, roots::RootSearch};

/// Unit Element rubber fender.
pub const UNIT_ELEMENT: &str = "unit fender";

const UNIT_ELEMENT_TABLE: [(f64, f64, f64); 14] = [
    (0.0, 0.0, 0.0),
    (0.05, 0.01, 0.23),
    (0.10, 0.05, 0.47),
    (0.15, 0.12, 0.69),
    (0.20, 0.21, 0.87),
    (0.25, 0.32, 0.97),
    (0.30, 0.43, 1.00),
    (0.35, 0.54, 0.97),
    (0.40, 0.65, 0.90),
    (0.45, 0.75, 0.85),
    (0.50, 0.84, 0.84),
    (0.55, 0.95, 0.92),
    (0.575, 1.00, 1.00),
    (0.625, 1.13, 1.21),
];

/// A fender curve defined by ordered `(deflection, energy, reaction)` points.
///
/// The first point is at zero deflection, deflections strictly increase and
/// energy never decreases. Values between points are interpolated linearly;
/// the last point's deflection is the maximum valid deflection.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedCurve {
    family: String,
    deflection: Vec<f64>,
    energy: Vec<f64>,
    reaction: Vec<f64>,
}

impl TabulatedCurve {
    /// Builds a curve from `(deflection, energy, reaction)` points.
    pub fn new<I>(family: impl Into<String>, points: I) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let family = family.into();
        let points = points.into_iter();
        let (lower, _) = points.size_hint();
        let mut deflection = Vec::with_capacity(lower);
        let mut energy = Vec::with_capacity(lower);
        let mut reaction = Vec::with_capacity(lower);

        for (i, (d, e, r)) in points.enumerate() {
            if !(d.is_finite() && e.is_finite() && r.is_finite()) {
                return Err(CurveError::InvalidTable(format!(
                    "'{family}': point {i} is not finite"
                )));
            }
            if let (Some(&prev_d), Some(&prev_e)) = (deflection.last(), energy.last()) {
                if d <= prev_d {
                    return Err(CurveError::InvalidTable(format!(
                        "'{family}': deflection must strictly increase (point {i}: {d} after {prev_d})"
                    )));
                }
                if e < prev_e {
                    return Err(CurveError::InvalidTable(format!(
                        "'{family}': energy must not decrease (point {i}: {e} after {prev_e})"
                    )));
                }
            } else if d != 0.0 {
                return Err(CurveError::InvalidTable(format!(
                    "'{family}': first point must be at zero deflection, got {d}"
                )));
            }
            deflection.push(d);
            energy.push(e);
            reaction.push(r);
        }

        if deflection.len() < 2 {
            return Err(CurveError::InvalidTable(format!(
                "'{family}': at least two points are required, got {}",
                deflection.len()
            )));
        }

        Ok(Self {
            family,
            deflection,
            energy,
            reaction,
        })
    }

    /// The generalized Unit Element fender curve.
    pub fn unit_element() -> Self {
        Self {
            family: UNIT_ELEMENT.to_owned(),
            deflection: UNIT_ELEMENT_TABLE.iter().map(|p| p.0).collect(),
            energy: UNIT_ELEMENT_TABLE.iter().map(|p| p.1).collect(),
            reaction: UNIT_ELEMENT_TABLE.iter().map(|p| p.2).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deflection.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deflection.is_empty()
    }

    /// Index `i` of the segment `[d_i, d_{i+1}]` containing `d`.
    fn segment(&self, d: f64) -> usize {
        let upper = self.deflection.partition_point(|&x| x <= d);
        upper.saturating_sub(1).min(self.len() - 2)
    }

    fn interpolate(&self, values: &[f64], d: f64) -> f64 {
        let d = self.domain().clamp(d);
        let i = self.segment(d);
        let (d0, d1) = (self.deflection[i], self.deflection[i + 1]);
        let t = (d - d0) / (d1 - d0);
        values[i] + t * (values[i + 1] - values[i])
    }
}

impl FenderCurve for TabulatedCurve {
    fn family(&self) -> &str {
        &self.family
    }

    fn domain(&self) -> ClosedInterval<f64> {
        ClosedInterval::new(0.0, self.deflection[self.len() - 1])
    }

    fn energy(&self, d: f64) -> f64 {
        self.interpolate(&self.energy, d)
    }

    fn reaction(&self, d: f64) -> f64 {
        self.interpolate(&self.reaction, d)
    }

    fn invert_energy(&self, normalized_energy: f64, _search: &RootSearch<f64>) -> Option<f64> {
        if !normalized_energy.is_finite() || normalized_energy < 0.0 {
            return None;
        }
        // Walk outward from the origin so flat segments resolve to their
        // leading edge.
        for i in 0..self.len() - 1 {
            let (e0, e1) = (self.energy[i], self.energy[i + 1]);
            if normalized_energy < e0 || normalized_energy > e1 {
                continue;
            }
            let (d0, d1) = (self.deflection[i], self.deflection[i + 1]);
            if e1 == e0 {
                return Some(d0);
            }
            return Some(d0 + (normalized_energy - e0) / (e1 - e0) * (d1 - d0));
        }
        None
    }

    fn max_energy(&self) -> f64 {
        self.energy[self.len() - 1]
    }
}
