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

/// Errors raised while defining, looking up, or inverting a fender curve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// No curve is registered under the requested family name.
    #[error("no fender curve registered for family '{0}'")]
    UnknownFamily(String),

    /// The normalized demand has no deflection within the curve's domain.
    #[error(
        "normalized energy {normalized_energy:.4} is outside the resolvable range [0, {max_normalized_energy:.4}] of the '{family}' curve"
    )]
    OutOfRange {
        family: String,
        normalized_energy: f64,
        max_normalized_energy: f64,
    },

    /// A tabulated curve violates its construction rules.
    #[error("invalid tabulated curve: {0}")]
    InvalidTable(String),

    /// A rated value used for scaling is not positive and finite.
    #[error("rated {quantity} must be positive and finite, got {value}")]
    InvalidRating { quantity: &'static str, value: f64 },
}
