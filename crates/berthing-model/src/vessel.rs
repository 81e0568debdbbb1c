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

/// A vessel catalogue entry.
///
/// Immutable once placed in a `Catalogue`. Dimensions are validated by the
/// engine when a scenario uses them, so that the error can name the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    /// Loaded displacement (long tons).
    pub displacement: f64,
    /// Length overall (ft).
    pub length: f64,
    /// Beam (ft).
    pub beam: f64,
    /// Draft (ft).
    pub draft: f64,
    /// Longitudinal position of the center of gravity, measured from the bow (ft).
    pub center_of_gravity: f64,
    /// Deformation factor `Cd`.
    pub deformation_factor: f64,
    /// Submarines use a separate virtual mass fit.
    #[serde(default)]
    pub is_submarine: bool,
    /// Number of fenders engaged in a broadside landing.
    pub broadside_fenders: u32,
    /// Berth identifiers the vessel is assigned to, in evaluation order.
    pub berths: Vec<String>,
}

impl Vessel {
    /// Distance from the center of gravity to the forward quarter point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_model::vessel::Vessel;
    /// let v = Vessel {
    ///     displacement: 5000.0, length: 400.0, beam: 60.0, draft: 20.0,
    ///     center_of_gravity: 190.0, deformation_factor: 0.9, is_submarine: false,
    ///     broadside_fenders: 3, berths: vec![],
    /// };
    /// assert_eq!(v.forward_quarter_offset(), 90.0);
    /// assert_eq!(v.rear_quarter_offset(), 110.0);
    /// ```
    #[inline]
    pub fn forward_quarter_offset(&self) -> f64 {
        (self.center_of_gravity - self.length / 4.0).abs()
    }

    /// Distance from the center of gravity to the rear quarter point.
    #[inline]
    pub fn rear_quarter_offset(&self) -> f64 {
        (3.0 * self.length / 4.0 - self.center_of_gravity).abs()
    }
}
