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

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Navigation exposure at a berth, selecting the berthing velocity curve.
///
/// Parsing is exhaustive: anything other than the three literals is a
/// `ConfigurationError`, both through `FromStr` and through serde.
///
/// # Examples
///
/// ```rust
/// # use berthing_model::berth::ExposureCondition;
/// assert_eq!("sheltered".parse::<ExposureCondition>().unwrap(), ExposureCondition::Sheltered);
/// assert!("calm".parse::<ExposureCondition>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExposureCondition {
    Sheltered,
    Moderate,
    Exposed,
}

impl ExposureCondition {
    /// All conditions in ascending severity.
    pub const ALL: [ExposureCondition; 3] = [
        ExposureCondition::Sheltered,
        ExposureCondition::Moderate,
        ExposureCondition::Exposed,
    ];

    /// The canonical literal for this condition.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExposureCondition::Sheltered => "sheltered",
            ExposureCondition::Moderate => "moderate",
            ExposureCondition::Exposed => "exposed",
        }
    }
}

impl std::str::FromStr for ExposureCondition {
    type Err = ConfigurationError;

    /// Accepts exactly the canonical lowercase literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sheltered" => Ok(ExposureCondition::Sheltered),
            "moderate" => Ok(ExposureCondition::Moderate),
            "exposed" => Ok(ExposureCondition::Exposed),
            _ => Err(ConfigurationError::UnknownExposureCondition(s.to_string())),
        }
    }
}

impl TryFrom<String> for ExposureCondition {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExposureCondition> for String {
    fn from(value: ExposureCondition) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ExposureCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A berth catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Berth {
    /// Mudline elevation (ft), in the same datum as load case water levels.
    pub mudline_elevation: f64,
    /// Identifier of the fender installed at this berth.
    pub fender: String,
    /// Exposure condition governing the approach velocity.
    pub exposure: ExposureCondition,
    /// Configuration factor `Cc`.
    pub configuration_factor: f64,
}

impl Berth {
    /// Water depth at this berth for a given water-surface elevation.
    #[inline]
    pub fn water_depth(&self, water_elevation: f64) -> f64 {
        water_elevation - self.mudline_elevation
    }
}
