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

//! # Berthing Model
//!
//! **The catalogue data model for berthing energy analysis.**
//!
//! This crate defines the immutable inputs a berthing batch is computed from
//! and the record each evaluated scenario produces. It is the interchange
//! layer between whatever parses the catalogues (files, tests, tools) and the
//! engine that enumerates scenarios.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly typed indices (`VesselIndex`, `BerthIndex`,
//!   `LoadCaseIndex`, `FenderIndex`) into the catalogue tables.
//! * **`vessel`**, **`berth`**, **`load_case`**, **`fender`**: Catalogue entry
//!   types plus the exhaustive enumerations for exposure condition, berthing
//!   configuration and berthing case.
//! * **`catalogue`**: `Catalogue` (immutable, insertion-ordered tables with
//!   id lookup) and `CatalogueBuilder` (mutable, validated on `build`).
//! * **`scenario`**: `ScenarioResult`, the per-scenario output record.
//! * **`error`**: Parse and catalogue construction errors.
//!
//! ## Units
//!
//! Displacement is in long tons, lengths and elevations in feet, energies in
//! kip-ft and forces in kip.

pub mod berth;
pub mod catalogue;
pub mod error;
pub mod fender;
pub mod index;
pub mod load_case;
pub mod scenario;
pub mod vessel;
