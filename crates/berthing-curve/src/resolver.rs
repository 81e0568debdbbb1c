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

use crate::{
    curve::CurvePoint,
    error::CurveError,
    registry::CurveRegistry,
};
use berthing_core::math::roots::RootSearch;
use berthing_model::fender::FenderSpec;

/// A resolved fender demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Energy demand divided by the rated energy.
    pub normalized_energy: f64,
    /// Normalized deflection at which the fender absorbs the demand.
    pub deflection: f64,
    /// Fender reaction at that deflection (kip).
    pub reaction: f64,
}

/// Resolves energy demands against the rated curve of a fender.
#[derive(Debug, Clone)]
pub struct FenderCurveResolver<'a> {
    registry: &'a CurveRegistry,
    search: RootSearch<f64>,
}

impl<'a> FenderCurveResolver<'a> {
    #[inline]
    pub fn new(registry: &'a CurveRegistry, search: RootSearch<f64>) -> Self {
        Self { registry, search }
    }

    #[inline]
    pub fn registry(&self) -> &'a CurveRegistry {
        self.registry
    }

    #[inline]
    pub fn search(&self) -> &RootSearch<f64> {
        &self.search
    }

    /// Resolves `fender_energy` (kip-ft) against `spec`.
    ///
    /// The demand is normalized by the rated energy and inverted on the
    /// family's curve. When several deflections absorb the same energy the
    /// smallest one is taken.
    ///
    /// # Errors
    ///
    /// - `CurveError::InvalidRating` if a rated value is not positive and finite.
    /// - `CurveError::UnknownFamily` if the family is not registered.
    /// - `CurveError::OutOfRange` if the curve cannot absorb the demand
    ///   within its valid deflection range.
    pub fn resolve(&self, fender_energy: f64, spec: &FenderSpec) -> Result<Resolution, CurveError> {
        let rated_energy = check_rating("energy", spec.rated_energy)?;
        let rated_reaction = check_rating("reaction", spec.rated_reaction)?;
        let curve = self.registry.get(&spec.family)?;

        let normalized_energy = fender_energy / rated_energy;
        let deflection = curve
            .invert_energy(normalized_energy, &self.search)
            .ok_or_else(|| CurveError::OutOfRange {
                family: spec.family.clone(),
                normalized_energy,
                max_normalized_energy: curve.max_energy(),
            })?;

        Ok(Resolution {
            normalized_energy,
            deflection,
            reaction: curve.reaction(deflection) * rated_reaction,
        })
    }

    /// Samples the rated energy and reaction curves of `spec` at `points`
    /// evenly spaced deflections over the curve's domain.
    pub fn sample(&self, spec: &FenderSpec, points: usize) -> Result<Vec<CurvePoint>, CurveError> {
        let rated_energy = check_rating("energy", spec.rated_energy)?;
        let rated_reaction = check_rating("reaction", spec.rated_reaction)?;
        let curve = self.registry.get(&spec.family)?;

        Ok(curve
            .domain()
            .linspace(points)
            .map(|d| CurvePoint {
                deflection: d,
                energy: curve.energy(d) * rated_energy,
                reaction: curve.reaction(d) * rated_reaction,
            })
            .collect())
    }
}

#[inline]
fn check_rating(quantity: &'static str, value: f64) -> Result<f64, CurveError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CurveError::InvalidRating { quantity, value })
    }
}
