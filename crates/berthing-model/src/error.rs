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

//! Errors raised while interpreting catalogue literals and assembling a
//! `Catalogue`.

/// The catalogue table an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Vessel,
    Berth,
    LoadCase,
    Fender,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Vessel => write!(f, "vessel"),
            EntryKind::Berth => write!(f, "berth"),
            EntryKind::LoadCase => write!(f, "load case"),
            EntryKind::Fender => write!(f, "fender"),
        }
    }
}

/// An unrecognized configuration literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The exposure condition is not one of sheltered, moderate or exposed.
    #[error("unrecognized exposure condition '{0}' (expected sheltered, moderate or exposed)")]
    UnknownExposureCondition(String),

    /// The berthing configuration is not one of the four recognized layouts.
    #[error(
        "unrecognized berthing configuration '{0}' (expected Broadside, Corner Protection, Forward Quarter Point or Rear Quarter Point)"
    )]
    UnknownBerthingConfiguration(String),
}

/// A structural problem detected while building a `Catalogue`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// The same identifier was added twice to one table.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntryKind, id: String },

    /// An eccentricity override names a vessel that is not in the catalogue.
    #[error("eccentricity override for unknown vessel '{0}'")]
    OverrideForUnknownVessel(String),

    /// An eccentricity override is negative or not finite.
    #[error("eccentricity override for vessel '{0}' must be a finite, non-negative distance")]
    InvalidOverride(String),
}
