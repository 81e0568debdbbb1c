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

/// Where along the hull the vessel strikes the fender line.
///
/// Both the spaced literals used in load case tables ("Corner Protection")
/// and the compact variant names ("CornerProtection") are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BerthingConfiguration {
    /// Parallel approach; load shared by the broadside fender count.
    Broadside,
    /// Single contact at the corner-protection fender.
    CornerProtection,
    /// Single contact at the forward quarter point.
    ForwardQuarterPoint,
    /// Single contact at the rear quarter point.
    RearQuarterPoint,
}

impl BerthingConfiguration {
    pub const ALL: [BerthingConfiguration; 4] = [
        BerthingConfiguration::Broadside,
        BerthingConfiguration::CornerProtection,
        BerthingConfiguration::ForwardQuarterPoint,
        BerthingConfiguration::RearQuarterPoint,
    ];

    /// The canonical literal for this configuration.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            BerthingConfiguration::Broadside => "Broadside",
            BerthingConfiguration::CornerProtection => "Corner Protection",
            BerthingConfiguration::ForwardQuarterPoint => "Forward Quarter Point",
            BerthingConfiguration::RearQuarterPoint => "Rear Quarter Point",
        }
    }

    #[inline]
    pub fn is_corner_protection(&self) -> bool {
        matches!(self, BerthingConfiguration::CornerProtection)
    }
}

impl std::str::FromStr for BerthingConfiguration {
    type Err = ConfigurationError;

    /// Accepts the canonical spaced literal or the variant name, exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Broadside" => Ok(BerthingConfiguration::Broadside),
            "Corner Protection" | "CornerProtection" => Ok(BerthingConfiguration::CornerProtection),
            "Forward Quarter Point" | "ForwardQuarterPoint" => {
                Ok(BerthingConfiguration::ForwardQuarterPoint)
            }
            "Rear Quarter Point" | "RearQuarterPoint" => Ok(BerthingConfiguration::RearQuarterPoint),
            _ => Err(ConfigurationError::UnknownBerthingConfiguration(
                s.to_string(),
            )),
        }
    }
}

impl TryFrom<String> for BerthingConfiguration {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BerthingConfiguration> for String {
    fn from(value: BerthingConfiguration) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for BerthingConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational berthing uses an abnormal berthing factor of exactly 1.0;
/// anything larger describes an accidental landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BerthingCase {
    Operational,
    Accidental,
}

impl BerthingCase {
    /// Classifies a load case by its abnormal berthing factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_model::load_case::BerthingCase;
    /// assert_eq!(BerthingCase::from_abnormal_factor(1.0), BerthingCase::Operational);
    /// assert_eq!(BerthingCase::from_abnormal_factor(1.5), BerthingCase::Accidental);
    /// ```
    #[inline]
    pub fn from_abnormal_factor(abnormal_berthing_factor: f64) -> Self {
        if abnormal_berthing_factor == 1.0 {
            BerthingCase::Operational
        } else {
            BerthingCase::Accidental
        }
    }
}

impl std::fmt::Display for BerthingCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BerthingCase::Operational => write!(f, "Operational"),
            BerthingCase::Accidental => write!(f, "Accidental"),
        }
    }
}

/// A load case catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    pub configuration: BerthingConfiguration,
    /// Abnormal berthing factor (at least 1.0).
    pub abnormal_berthing_factor: f64,
    /// Geometry factor `Cg`.
    pub geometry_factor: f64,
    /// Water-surface elevation (ft), same datum as berth mudlines.
    pub water_elevation: f64,
}

impl LoadCase {
    #[inline]
    pub fn case(&self) -> BerthingCase {
        BerthingCase::from_abnormal_factor(self.abnormal_berthing_factor)
    }
}
