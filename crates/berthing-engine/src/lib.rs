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

//! # Berthing Engine
//!
//! **Berthing energy demand for every vessel, berth and load case of a
//! catalogue, resolved against the installed fender's performance curve.**
//!
//! Following UFC 4-152-01 and PIANC 2002, each scenario computes
//!
//! ```text
//! Cbl   = M·2240 / (L·B·D·ρ)            block coefficient
//! k     = (0.19·Cbl + 0.11)·L           radius of gyration
//! Ce    = k² / (a² + k²)                eccentricity coefficient
//! Cb    = Ce·Cg·Cd·Cc                   berthing factor
//! Cm    = f(L, B, D, Cb, h)             virtual mass coefficient
//! V     = c·M^p                         approach velocity
//! Eship = ½·M·2.240·V² / 32.2           ship kinetic energy (kip-ft)
//! Efndr = ABF·Cm·Cb·Eship / n · 1.1     per-fender energy demand
//! ```
//!
//! and inverts the fender curve to obtain the deflection and reaction.
//!
//! ## Architecture
//!
//! * **`coefficients`**, **`velocity`**: The formulas, each validating its
//!   inputs and failing with a `DomainError` instead of producing NaN.
//! * **`enumerator`**: Pairing order, contact geometry per berthing
//!   configuration, the applicability rule, and per-scenario evaluation.
//! * **`aggregate`**: `ResultSet`, results grouped by fender.
//! * **`engine`**: `BerthingEngine`, the batch entry point.
//! * **`monitor`**, **`stats`**: Observation hooks and batch counters.
//! * **`config`**, **`error`**: Tunables and the error taxonomy.
//!
//! A batch is single-threaded and fails fast: the first error aborts it and
//! names the vessel, berth, load case and fender involved.

pub mod aggregate;
pub mod coefficients;
pub mod config;
pub mod engine;
pub mod enumerator;
pub mod error;
pub mod monitor;
pub mod stats;
pub mod velocity;
