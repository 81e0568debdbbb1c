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

use serde::{Deserialize, Serialize};

/// Family name of the corner-protection fender.
///
/// Fenders of this family are evaluated only at corner-protection load
/// cases; every other family is evaluated everywhere else.
pub const CORNER_PROTECTION_FAMILY: &str = "MV";

/// A fender catalogue entry: the family whose normalized performance curve
/// applies, and the manufacturer's rated values that scale it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenderSpec {
    /// Curve family name, looked up in the curve registry.
    pub family: String,
    /// Rated energy absorption (kip-ft).
    pub rated_energy: f64,
    /// Rated reaction (kip).
    pub rated_reaction: f64,
    /// Rated deflection, as a fraction of the fender height.
    pub rated_deflection: f64,
}

impl FenderSpec {
    #[inline]
    pub fn new(
        family: impl Into<String>,
        rated_energy: f64,
        rated_reaction: f64,
        rated_deflection: f64,
    ) -> Self {
        Self {
            family: family.into(),
            rated_energy,
            rated_reaction,
            rated_deflection,
        }
    }

    /// Returns `true` for the corner-protection family.
    #[inline]
    pub fn is_corner_protection(&self) -> bool {
        self.family == CORNER_PROTECTION_FAMILY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_protection_family() {
        assert!(FenderSpec::new("MV", 441.1, 365.5, 0.575).is_corner_protection());
        assert!(!FenderSpec::new("pneumatic", 1339.0, 678.0, 0.6).is_corner_protection());
        assert!(!FenderSpec::new("mv", 1.0, 1.0, 0.5).is_corner_protection());
    }
}
