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

//! Characteristic berthing velocity by exposure condition.

use crate::error::{BerthingError, DomainError, ensure_positive};
use berthing_model::berth::ExposureCondition;

/// A power law `V = coefficient · displacement^exponent` (ft/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityFit {
    pub coefficient: f64,
    pub exponent: f64,
}

impl VelocityFit {
    #[inline]
    pub const fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Evaluates the fit at `displacement` (long tons).
    #[inline]
    pub fn eval(&self, displacement: f64) -> f64 {
        self.coefficient * displacement.powf(self.exponent)
    }
}

/// Approach velocity curves for the three exposure conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BerthingVelocityModel {
    sheltered: VelocityFit,
    moderate: VelocityFit,
    exposed: VelocityFit,
}

impl Default for BerthingVelocityModel {
    /// The UFC 4-152-01 fits.
    fn default() -> Self {
        Self {
            sheltered: VelocityFit::new(4.1172, -0.289),
            moderate: VelocityFit::new(8.9392, -0.302),
            exposed: VelocityFit::new(10.9182, -0.2802),
        }
    }
}

impl BerthingVelocityModel {
    #[inline]
    pub fn new(sheltered: VelocityFit, moderate: VelocityFit, exposed: VelocityFit) -> Self {
        Self {
            sheltered,
            moderate,
            exposed,
        }
    }

    #[inline]
    pub fn fit(&self, condition: ExposureCondition) -> VelocityFit {
        match condition {
            ExposureCondition::Sheltered => self.sheltered,
            ExposureCondition::Moderate => self.moderate,
            ExposureCondition::Exposed => self.exposed,
        }
    }

    /// Characteristic berthing velocity (ft/s) of a vessel of `displacement`
    /// long tons.
    pub fn velocity(
        &self,
        displacement: f64,
        condition: ExposureCondition,
    ) -> Result<f64, DomainError> {
        let displacement = ensure_positive("displacement", displacement)?;
        Ok(self.fit(condition).eval(displacement))
    }

    /// Like `velocity`, but parses the exposure condition literal first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_engine::velocity::BerthingVelocityModel;
    /// # use berthing_engine::error::ErrorKind;
    /// let model = BerthingVelocityModel::default();
    /// assert!(model.velocity_for_literal(5000.0, "moderate").is_ok());
    /// let err = model.velocity_for_literal(5000.0, "Moderate").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// let err = model.velocity_for_literal(5000.0, "stormy").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// ```
    pub fn velocity_for_literal(
        &self,
        displacement: f64,
        condition: &str,
    ) -> Result<f64, BerthingError> {
        let condition: ExposureCondition = condition.parse()?;
        Ok(self.velocity(displacement, condition)?)
    }
}
