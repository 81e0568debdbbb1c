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

//! # Berthing Core
//!
//! Foundational numeric primitives for the berthing energy workspace. This
//! crate holds the small, generic building blocks that the curve and engine
//! crates share, with no knowledge of vessels or fenders.
//!
//! ## Modules
//!
//! - `math`: Closed floating-point intervals `[lo, hi]`, dense polynomials in
//!   ascending-power form evaluated by Horner's scheme, and a
//!   bounded real-root search that reports every root it finds inside an
//!   interval so callers can apply an explicit selection policy.
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) used to
//!   keep catalogue index spaces (vessels, berths, load cases, fenders) apart.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
