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

//! Dimensionless berthing coefficients.
//!
//! Every function validates its inputs and fails with a `DomainError`
//! instead of producing NaN or a value outside the fitted range.

use crate::error::{DomainError, ensure_finite, ensure_positive};

/// Pounds per long ton.
pub const POUNDS_PER_LONG_TON: f64 = 2240.0;

/// Block coefficient `Cbl = displacement·2240 / (length·beam·draft·ρ)`.
///
/// # Examples
///
/// ```rust
/// # use berthing_engine::coefficients::block_coefficient;
/// let cbl = block_coefficient(5000.0, 400.0, 60.0, 20.0, 64.0).unwrap();
/// assert!((cbl - 0.364_583_333_333_333_3).abs() < 1e-15);
/// ```
pub fn block_coefficient(
    displacement: f64,
    length: f64,
    beam: f64,
    draft: f64,
    water_density: f64,
) -> Result<f64, DomainError> {
    let displacement = ensure_positive("displacement", displacement)?;
    let length = ensure_positive("length", length)?;
    let beam = ensure_positive("beam", beam)?;
    let draft = ensure_positive("draft", draft)?;
    let water_density = ensure_positive("water density", water_density)?;

    Ok(displacement * POUNDS_PER_LONG_TON / (length * beam * draft * water_density))
}

/// Radius of gyration `k = (0.19·Cbl + 0.11)·length` (ft).
pub fn radius_of_gyration(block_coefficient: f64, length: f64) -> Result<f64, DomainError> {
    let block_coefficient = ensure_positive("block coefficient", block_coefficient)?;
    let length = ensure_positive("length", length)?;
    Ok((0.19 * block_coefficient + 0.11) * length)
}

/// Eccentricity coefficient `Ce = k² / (a² + k²)`, in `(0, 1]`.
pub fn eccentricity_coefficient(
    radius_of_gyration: f64,
    contact_distance: f64,
) -> Result<f64, DomainError> {
    let k = ensure_positive("radius of gyration", radius_of_gyration)?;
    let a = ensure_finite("contact distance", contact_distance)?;
    let k2 = k * k;
    Ok(k2 / (a * a + k2))
}

/// Hull and water inputs of the virtual mass coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualMassInput {
    pub length: f64,
    pub beam: f64,
    pub draft: f64,
    /// Berthing factor `Cb`.
    pub berthing_factor: f64,
    pub water_depth: f64,
    pub is_submarine: bool,
}

/// Virtual mass coefficient `Cm`.
///
/// Surface ships interpolate between a deep-water value
/// `1.3 + 1.5·D/B` and a shallow-water correction
/// `F·(12.4·(D/B)^0.3 − 50·D/L)` by `(D/h)^3.5`, where `F = 1.5·Cb` for
/// `Cb < 0.6` and `0.9` otherwise. Submarines use `2.36 + 1.74·(D/h)^3.5`.
///
/// # Errors
///
/// Fails if a dimension is not positive, or if the water depth does not
/// exceed the draft.
pub fn virtual_mass_coefficient(input: &VirtualMassInput) -> Result<f64, DomainError> {
    let draft = ensure_positive("draft", input.draft)?;
    let water_depth = ensure_finite("water depth", input.water_depth)?;
    if water_depth <= draft {
        return Err(DomainError::InsufficientWaterDepth { water_depth, draft });
    }
    let depth_ratio = (draft / water_depth).powf(3.5);

    if input.is_submarine {
        return Ok(2.36 + 1.74 * depth_ratio);
    }

    let length = ensure_positive("length", input.length)?;
    let beam = ensure_positive("beam", input.beam)?;
    let berthing_factor = ensure_finite("berthing factor", input.berthing_factor)?;

    let fullness = if berthing_factor < 0.6 {
        1.5 * berthing_factor
    } else {
        0.9
    };
    let draft_beam = draft / beam;
    let deep = 1.3 + 1.5 * draft_beam;
    let shallow = fullness * (12.4 * draft_beam.powf(0.3) - 50.0 * draft / length);
    Ok(deep + (shallow - deep) * depth_ratio)
}
