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

use crate::{
    fender::FenderSpec,
    load_case::{BerthingCase, BerthingConfiguration},
};
use serde::{Deserialize, Serialize};

/// The dimensionless coefficients applied to the ship's kinetic energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BerthingCoefficients {
    /// Block coefficient `Cbl`.
    pub block: f64,
    /// Radius of gyration `k` (ft).
    pub radius_of_gyration: f64,
    /// Eccentricity coefficient `Ce`.
    pub eccentricity: f64,
    /// Geometry factor `Cg`.
    pub geometry: f64,
    /// Deformation factor `Cd`.
    pub deformation: f64,
    /// Configuration factor `Cc`.
    pub configuration: f64,
    /// Berthing factor `Cb = Ce·Cg·Cd·Cc`.
    pub berthing: f64,
    /// Virtual mass coefficient `Cm`.
    pub virtual_mass: f64,
}

/// The outcome of one (vessel, berth, load case) scenario.
///
/// Carries every intermediate value so that reporting and plotting
/// collaborators never need to recompute anything. Created once, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub vessel: String,
    pub load_case: String,
    pub berth: String,
    pub fender: String,

    pub case: BerthingCase,
    pub configuration: BerthingConfiguration,
    pub abnormal_berthing_factor: f64,
    /// Distance from the center of gravity to the contact point (ft).
    pub eccentricity_distance: f64,
    /// Water depth at the berth for this load case (ft).
    pub water_depth: f64,

    pub displacement: f64,
    pub length: f64,
    pub beam: f64,
    pub draft: f64,
    pub center_of_gravity: f64,
    /// Number of fenders sharing the demand.
    pub fender_count: u32,

    /// Fender family and rated values used to resolve the demand.
    pub rating: FenderSpec,

    /// Characteristic berthing velocity (ft/s).
    pub velocity: f64,
    pub coefficients: BerthingCoefficients,
    /// Ship kinetic energy (kip-ft).
    pub ship_energy: f64,
    /// Per-fender energy demand divided by the rated energy.
    pub normalized_energy: f64,
    /// Per-fender energy demand (kip-ft).
    pub fender_energy: f64,
    /// Resolved normalized deflection.
    pub deflection: f64,
    /// Resolved fender reaction (kip).
    pub reaction: f64,
}

impl std::fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} [{}] {}: E = {:.3} kip-ft, d = {:.2}%, R = {:.3} kip",
            self.vessel,
            self.berth,
            self.load_case,
            self.configuration,
            self.fender_energy,
            self.deflection * 100.0,
            self.reaction
        )
    }
}
