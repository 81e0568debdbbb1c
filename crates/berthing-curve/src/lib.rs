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

//! # Berthing Curve
//!
//! Fender performance curves and the inversion that turns an energy demand
//! into a deflection and a reaction.
//!
//! Every fender family exposes the same capability, the `FenderCurve` trait:
//! normalized energy and reaction as functions of normalized deflection over
//! a bounded domain `[0, dmax]`, plus an energy inversion. Two
//! implementations cover the built-in families:
//!
//! - `PolynomialCurve`: closed-form fits (pneumatic, hydropneumatic, and the
//!   corner-protection "MV" leg fender), inverted by a bracketing root search
//!   that keeps the smallest root in the domain.
//! - `TabulatedCurve`: ordered `(d, energy, reaction)` points with
//!   piecewise-linear interpolation (the Unit Element fender), inverted
//!   segment by segment from the origin outward.
//!
//! `CurveRegistry` maps family names to curves, and `FenderCurveResolver`
//! applies a fender's rated values to resolve a demand.

pub mod curve;
pub mod error;
pub mod polynomial;
pub mod registry;
pub mod resolver;
pub mod tabulated;
