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

use berthing_curve::curve::RootSearchOptions;
use serde::{Deserialize, Serialize};

/// Fresh-to-sea water unit weight used by the block coefficient (lb/ft³).
pub const DEFAULT_WATER_DENSITY: f64 = 64.0;

/// Margin applied to every per-fender energy demand.
pub const DEFAULT_UNCERTAINTY_FACTOR: f64 = 1.1;

/// An `EngineConfig` value the engine cannot run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineConfigError {
    #[error("water density must be positive and finite, got {0}")]
    WaterDensity(f64),

    #[error("uncertainty factor must be finite and at least 1.0, got {0}")]
    UncertaintyFactor(f64),

    #[error(
        "root search needs positive samples, iterations and tolerance, got {samples} samples, {max_iterations} iterations, tolerance {tolerance}"
    )]
    RootSearch {
        samples: usize,
        max_iterations: usize,
        tolerance: f64,
    },
}

/// Tunable constants of a berthing batch.
///
/// # Examples
///
/// ```rust
/// # use berthing_engine::config::EngineConfig;
/// let config: EngineConfig = serde_json::from_str(r#"{ "water_density": 62.4 }"#).unwrap();
/// assert_eq!(config.water_density, 62.4);
/// assert_eq!(config.uncertainty_factor, 1.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Water unit weight (lb/ft³).
    pub water_density: f64,
    /// Multiplier applied to each per-fender energy demand.
    pub uncertainty_factor: f64,
    /// Root search used to invert closed-form fender curves.
    pub root_search: RootSearchOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            water_density: DEFAULT_WATER_DENSITY,
            uncertainty_factor: DEFAULT_UNCERTAINTY_FACTOR,
            root_search: RootSearchOptions::default(),
        }
    }
}

impl EngineConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_water_density(mut self, water_density: f64) -> Self {
        self.water_density = water_density;
        self
    }

    #[inline]
    pub fn with_uncertainty_factor(mut self, uncertainty_factor: f64) -> Self {
        self.uncertainty_factor = uncertainty_factor;
        self
    }

    #[inline]
    pub fn with_root_search(mut self, root_search: RootSearchOptions) -> Self {
        self.root_search = root_search;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !(self.water_density.is_finite() && self.water_density > 0.0) {
            return Err(EngineConfigError::WaterDensity(self.water_density));
        }
        if !(self.uncertainty_factor.is_finite() && self.uncertainty_factor >= 1.0) {
            return Err(EngineConfigError::UncertaintyFactor(self.uncertainty_factor));
        }
        if !self.root_search.is_valid() {
            return Err(EngineConfigError::RootSearch {
                samples: self.root_search.samples,
                max_iterations: self.root_search.max_iterations,
                tolerance: self.root_search.tolerance,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EngineConfig(water_density: {}, uncertainty_factor: {}, root_search: {}/{:e}/{})",
            self.water_density,
            self.uncertainty_factor,
            self.root_search.samples,
            self.root_search.tolerance,
            self.root_search.max_iterations
        )
    }
}
