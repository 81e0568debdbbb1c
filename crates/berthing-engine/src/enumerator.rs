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

//! Scenario enumeration and evaluation.
//!
//! A *pairing* is one (vessel, assigned berth, load case) combination
//! together with the fender installed at that berth. Pairings are produced
//! in a fixed order: vessels in catalogue order, then each vessel's berth
//! list in order, then load cases in catalogue order. Evaluating a pairing
//! either yields a `ScenarioResult`, skips it under the applicability rule,
//! or fails.

use crate::{
    coefficients::{
        VirtualMassInput, block_coefficient, eccentricity_coefficient, radius_of_gyration,
        virtual_mass_coefficient,
    },
    config::EngineConfig,
    error::{
        BerthingError, DataConsistencyError, DomainError, ScenarioContext, ensure_finite,
        ensure_positive,
    },
    velocity::BerthingVelocityModel,
};
use berthing_curve::{registry::CurveRegistry, resolver::FenderCurveResolver};
use berthing_model::{
    catalogue::Catalogue,
    fender::FenderSpec,
    index::{BerthIndex, FenderIndex, LoadCaseIndex, VesselIndex},
    load_case::BerthingConfiguration,
    scenario::{BerthingCoefficients, ScenarioResult},
    vessel::Vessel,
};

/// Gravitational acceleration (ft/s²).
pub const GRAVITY: f64 = 32.2;

/// Kips per long ton of mass.
pub const KIPS_PER_LONG_TON: f64 = 2.240;

/// One (vessel, berth, load case) combination and the berth's fender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub vessel: VesselIndex,
    pub berth: BerthIndex,
    pub load_case: LoadCaseIndex,
    pub fender: FenderIndex,
}

impl Pairing {
    /// The identifiers of this pairing, for error reporting.
    pub fn context(&self, catalogue: &Catalogue) -> ScenarioContext {
        ScenarioContext::new()
            .with_vessel(catalogue.vessels().id(self.vessel))
            .with_berth(catalogue.berths().id(self.berth))
            .with_load_case(catalogue.load_cases().id(self.load_case))
            .with_fender(catalogue.fenders().id(self.fender))
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pairing({}, {}, {}, {})",
            self.vessel, self.berth, self.load_case, self.fender
        )
    }
}

/// How a load case engages the fender line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Number of fenders sharing the energy, `n`.
    pub fender_count: u32,
    /// Distance from the center of gravity to the contact point, `a` (ft).
    pub eccentricity_distance: f64,
}

/// Fender count and eccentricity distance of `configuration`.
///
/// The eccentricity override only applies to corner protection, where a
/// missing override means a centered contact.
pub fn contact(
    vessel: &Vessel,
    configuration: BerthingConfiguration,
    eccentricity_override: Option<f64>,
) -> Contact {
    match configuration {
        BerthingConfiguration::Broadside => Contact {
            fender_count: vessel.broadside_fenders,
            eccentricity_distance: 0.0,
        },
        BerthingConfiguration::CornerProtection => Contact {
            fender_count: 1,
            eccentricity_distance: eccentricity_override.unwrap_or(0.0),
        },
        BerthingConfiguration::ForwardQuarterPoint => Contact {
            fender_count: 1,
            eccentricity_distance: vessel.forward_quarter_offset(),
        },
        BerthingConfiguration::RearQuarterPoint => Contact {
            fender_count: 1,
            eccentricity_distance: vessel.rear_quarter_offset(),
        },
    }
}

/// Corner-protection fenders are evaluated only at corner-protection load
/// cases, and every other fender everywhere else.
#[inline]
pub fn is_applicable(configuration: BerthingConfiguration, fender: &FenderSpec) -> bool {
    configuration.is_corner_protection() == fender.is_corner_protection()
}

/// Iterator over the pairings of a catalogue in enumeration order.
///
/// Every berth reference is resolved, even when the catalogue has no load
/// cases. A berth id that is not in the catalogue, a berth whose fender id
/// is not, or a fender whose family has no registered curve yields one
/// error and the iterator moves on to the next berth.
#[derive(Debug, Clone)]
pub struct Pairings<'a> {
    catalogue: &'a Catalogue,
    registry: &'a CurveRegistry,
    vessel: usize,
    berth_slot: usize,
    load_case: usize,
    current: Option<(BerthIndex, FenderIndex)>,
}

impl<'a> Pairings<'a> {
    #[inline]
    pub fn new(catalogue: &'a Catalogue, registry: &'a CurveRegistry) -> Self {
        Self {
            catalogue,
            registry,
            vessel: 0,
            berth_slot: 0,
            load_case: 0,
            current: None,
        }
    }

    fn resolve_berth(
        &self,
        vessel: VesselIndex,
        berth_id: &str,
    ) -> Result<(BerthIndex, FenderIndex), BerthingError> {
        let vessel_id = self.catalogue.vessels().id(vessel);
        let (berth, entry) = self.catalogue.berths().find(berth_id).ok_or_else(|| {
            BerthingError::from(DataConsistencyError::UnknownBerth(berth_id.to_owned()))
                .with_context(
                    ScenarioContext::new()
                        .with_vessel(vessel_id)
                        .with_berth(berth_id),
                )
        })?;
        let fender = self.catalogue.fenders().index_of(&entry.fender).ok_or_else(|| {
            BerthingError::from(DataConsistencyError::UnknownFender(entry.fender.clone()))
                .with_context(
                    ScenarioContext::new()
                        .with_vessel(vessel_id)
                        .with_berth(berth_id)
                        .with_fender(entry.fender.as_str()),
                )
        })?;
        let family = &self.catalogue.fender(fender).family;
        if !self.registry.contains(family) {
            return Err(
                BerthingError::from(DataConsistencyError::UnregisteredFamily(family.clone()))
                    .with_context(
                        ScenarioContext::new()
                            .with_vessel(vessel_id)
                            .with_berth(berth_id)
                            .with_fender(entry.fender.as_str()),
                    ),
            );
        }
        Ok((berth, fender))
    }

    #[inline]
    fn advance_berth(&mut self) {
        self.berth_slot += 1;
        self.load_case = 0;
        self.current = None;
    }
}

impl Iterator for Pairings<'_> {
    type Item = Result<Pairing, BerthingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let catalogue = self.catalogue;
        let num_load_cases = catalogue.load_cases().len();

        loop {
            let vessels = catalogue.vessels();
            if self.vessel >= vessels.len() {
                return None;
            }
            let vessel = VesselIndex::new(self.vessel);
            let berths = &vessels.get(vessel).berths;
            if self.berth_slot >= berths.len() {
                self.vessel += 1;
                self.berth_slot = 0;
                self.load_case = 0;
                self.current = None;
                continue;
            }

            let (berth, fender) = match self.current {
                Some(resolved) => resolved,
                None => match self.resolve_berth(vessel, &berths[self.berth_slot]) {
                    Ok(_) if num_load_cases == 0 => {
                        self.advance_berth();
                        continue;
                    }
                    Ok(resolved) => {
                        self.current = Some(resolved);
                        resolved
                    }
                    Err(err) => {
                        self.advance_berth();
                        return Some(Err(err));
                    }
                },
            };

            let load_case = LoadCaseIndex::new(self.load_case);
            self.load_case += 1;
            if self.load_case == num_load_cases {
                self.advance_berth();
            }
            return Some(Ok(Pairing {
                vessel,
                berth,
                load_case,
                fender,
            }));
        }
    }
}

/// Evaluates pairings of one catalogue.
#[derive(Debug, Clone)]
pub struct ScenarioEnumerator<'a> {
    catalogue: &'a Catalogue,
    resolver: FenderCurveResolver<'a>,
    velocity_model: &'a BerthingVelocityModel,
    water_density: f64,
    uncertainty_factor: f64,
}

impl<'a> ScenarioEnumerator<'a> {
    pub fn new(
        catalogue: &'a Catalogue,
        resolver: FenderCurveResolver<'a>,
        velocity_model: &'a BerthingVelocityModel,
        config: &EngineConfig,
    ) -> Self {
        Self {
            catalogue,
            resolver,
            velocity_model,
            water_density: config.water_density,
            uncertainty_factor: config.uncertainty_factor,
        }
    }

    #[inline]
    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Pairings of the catalogue in enumeration order.
    #[inline]
    pub fn pairings(&self) -> Pairings<'a> {
        Pairings::new(self.catalogue, self.resolver.registry())
    }

    /// Evaluates `pairing`.
    ///
    /// Returns `Ok(None)` when the applicability rule excludes the pairing;
    /// excluded pairings are not evaluated and cannot fail. Errors carry the
    /// full pairing context.
    pub fn evaluate(&self, pairing: &Pairing) -> Result<Option<ScenarioResult>, BerthingError> {
        let load_case = self.catalogue.load_case(pairing.load_case);
        let fender = self.catalogue.fender(pairing.fender);
        if !is_applicable(load_case.configuration, fender) {
            return Ok(None);
        }
        self.compute(pairing)
            .map(Some)
            .map_err(|err| err.with_context(pairing.context(self.catalogue)))
    }

    fn compute(&self, pairing: &Pairing) -> Result<ScenarioResult, BerthingError> {
        let catalogue = self.catalogue;
        let vessel = catalogue.vessel(pairing.vessel);
        let berth = catalogue.berth(pairing.berth);
        let load_case = catalogue.load_case(pairing.load_case);
        let fender = catalogue.fender(pairing.fender);

        let abnormal = ensure_finite("abnormal berthing factor", load_case.abnormal_berthing_factor)?;
        if abnormal < 1.0 {
            return Err(DomainError::AbnormalFactorBelowOne(abnormal).into());
        }
        let geometry = ensure_positive("geometry factor", load_case.geometry_factor)?;
        let deformation = ensure_positive("deformation factor", vessel.deformation_factor)?;
        let configuration = ensure_positive("configuration factor", berth.configuration_factor)?;
        ensure_positive("rated energy", fender.rated_energy)?;
        ensure_positive("rated reaction", fender.rated_reaction)?;

        let contact = contact(
            vessel,
            load_case.configuration,
            catalogue.eccentricity_override(pairing.vessel),
        );
        let fender_count = ensure_positive("fender count", f64::from(contact.fender_count))?;

        let block = block_coefficient(
            vessel.displacement,
            vessel.length,
            vessel.beam,
            vessel.draft,
            self.water_density,
        )?;
        let radius = radius_of_gyration(block, vessel.length)?;
        let eccentricity = eccentricity_coefficient(radius, contact.eccentricity_distance)?;
        let berthing = eccentricity * geometry * deformation * configuration;

        let water_depth = berth.water_depth(load_case.water_elevation);
        let virtual_mass = virtual_mass_coefficient(&VirtualMassInput {
            length: vessel.length,
            beam: vessel.beam,
            draft: vessel.draft,
            berthing_factor: berthing,
            water_depth,
            is_submarine: vessel.is_submarine,
        })?;

        let velocity = self
            .velocity_model
            .velocity(vessel.displacement, berth.exposure)?;
        let ship_energy =
            0.5 * vessel.displacement * KIPS_PER_LONG_TON * velocity * velocity / GRAVITY;
        let fender_energy =
            abnormal * virtual_mass * berthing * ship_energy / fender_count * self.uncertainty_factor;

        let resolution = self.resolver.resolve(fender_energy, fender)?;

        Ok(ScenarioResult {
            vessel: catalogue.vessels().id(pairing.vessel).to_owned(),
            load_case: catalogue.load_cases().id(pairing.load_case).to_owned(),
            berth: catalogue.berths().id(pairing.berth).to_owned(),
            fender: catalogue.fenders().id(pairing.fender).to_owned(),
            case: load_case.case(),
            configuration: load_case.configuration,
            abnormal_berthing_factor: abnormal,
            eccentricity_distance: contact.eccentricity_distance,
            water_depth,
            displacement: vessel.displacement,
            length: vessel.length,
            beam: vessel.beam,
            draft: vessel.draft,
            center_of_gravity: vessel.center_of_gravity,
            fender_count: contact.fender_count,
            rating: fender.clone(),
            velocity,
            coefficients: BerthingCoefficients {
                block,
                radius_of_gyration: radius,
                eccentricity,
                geometry,
                deformation,
                configuration,
                berthing,
                virtual_mass,
            },
            ship_energy,
            normalized_energy: resolution.normalized_energy,
            fender_energy,
            deflection: resolution.deflection,
            reaction: resolution.reaction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berthing_model::{
        berth::{Berth, ExposureCondition},
        catalogue::CatalogueBuilder,
        load_case::LoadCase,
    };

    fn vessel(berths: &[&str]) -> Vessel {
        Vessel {
            displacement: 5000.0,
            length: 400.0,
            beam: 60.0,
            draft: 20.0,
            center_of_gravity: 190.0,
            deformation_factor: 0.9,
            is_submarine: false,
            broadside_fenders: 3,
            berths: berths.iter().map(|b| b.to_string()).collect(),
        }
    }

    fn berth(fender: &str) -> Berth {
        Berth {
            mudline_elevation: -80.0,
            fender: fender.to_string(),
            exposure: ExposureCondition::Sheltered,
            configuration_factor: 1.0,
        }
    }

    fn load_case(configuration: BerthingConfiguration) -> LoadCase {
        LoadCase {
            configuration,
            abnormal_berthing_factor: 1.0,
            geometry_factor: 0.95,
            water_elevation: 0.0,
        }
    }

    #[test]
    fn test_contact_by_configuration() {
        let v = vessel(&[]);
        assert_eq!(
            contact(&v, BerthingConfiguration::Broadside, Some(12.0)),
            Contact {
                fender_count: 3,
                eccentricity_distance: 0.0
            }
        );
        assert_eq!(
            contact(&v, BerthingConfiguration::CornerProtection, Some(12.0)).eccentricity_distance,
            12.0
        );
        assert_eq!(
            contact(&v, BerthingConfiguration::CornerProtection, None).eccentricity_distance,
            0.0
        );
        assert_eq!(
            contact(&v, BerthingConfiguration::ForwardQuarterPoint, None),
            Contact {
                fender_count: 1,
                eccentricity_distance: 90.0
            }
        );
        assert_eq!(
            contact(&v, BerthingConfiguration::RearQuarterPoint, None).eccentricity_distance,
            110.0
        );
    }

    #[test]
    fn test_applicability_rule() {
        let mv = FenderSpec::new("MV", 441.1, 365.5, 0.575);
        let pneumatic = FenderSpec::new("pneumatic", 1339.0, 678.0, 0.6);
        for configuration in BerthingConfiguration::ALL {
            let corner = configuration.is_corner_protection();
            assert_eq!(is_applicable(configuration, &mv), corner);
            assert_eq!(is_applicable(configuration, &pneumatic), !corner);
        }
    }

    #[test]
    fn test_pairing_order() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_vessel("V1", vessel(&["B2", "B1"]))
            .add_vessel("V2", vessel(&["B1"]))
            .add_berth("B1", berth("F1"))
            .add_berth("B2", berth("F2"))
            .add_load_case("LC1", load_case(BerthingConfiguration::Broadside))
            .add_load_case("LC2", load_case(BerthingConfiguration::RearQuarterPoint))
            .add_fender("F1", FenderSpec::new("pneumatic", 1339.0, 678.0, 0.6))
            .add_fender("F2", FenderSpec::new("pneumatic", 1339.0, 678.0, 0.6));
        let catalogue = builder.build().unwrap();
        let registry = CurveRegistry::standard();

        let order: Vec<(usize, usize, usize, usize)> = Pairings::new(&catalogue, &registry)
            .map(|p| {
                let p = p.unwrap();
                (p.vessel.get(), p.berth.get(), p.load_case.get(), p.fender.get())
            })
            .collect();
        assert_eq!(
            order,
            vec![
                (0, 1, 0, 1),
                (0, 1, 1, 1),
                (0, 0, 0, 0),
                (0, 0, 1, 0),
                (1, 0, 0, 0),
                (1, 0, 1, 0),
            ]
        );
        assert_eq!(order.len(), catalogue.num_pairings());
    }

    #[test]
    fn test_missing_berth_and_fender_reported() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_vessel("V1", vessel(&["B9", "B1"]))
            .add_berth("B1", berth("F9"))
            .add_load_case("LC1", load_case(BerthingConfiguration::Broadside));
        let catalogue = builder.build().unwrap();
        let registry = CurveRegistry::standard();

        let items: Vec<_> = Pairings::new(&catalogue, &registry).collect();
        assert_eq!(items.len(), 2);

        let missing_berth = items[0].as_ref().unwrap_err();
        assert_eq!(
            missing_berth,
            &BerthingError::from(DataConsistencyError::UnknownBerth("B9".into())).with_context(
                ScenarioContext::new().with_vessel("V1").with_berth("B9")
            )
        );

        let missing_fender = items[1].as_ref().unwrap_err();
        assert_eq!(missing_fender.context().fender.as_deref(), Some("F9"));
    }

    #[test]
    fn test_no_load_cases_means_no_pairings() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_vessel("V1", vessel(&["B1"]))
            .add_berth("B1", berth("F1"))
            .add_fender("F1", FenderSpec::new("pneumatic", 1339.0, 678.0, 0.6));
        let catalogue = builder.build().unwrap();
        let registry = CurveRegistry::standard();
        assert_eq!(Pairings::new(&catalogue, &registry).count(), 0);
    }

    #[test]
    fn test_dangling_references_reported_without_load_cases() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_vessel("V1", vessel(&["B9", "B1"]))
            .add_berth("B1", berth("F9"));
        let catalogue = builder.build().unwrap();
        let registry = CurveRegistry::standard();

        let errors: Vec<_> = Pairings::new(&catalogue, &registry)
            .map(|p| p.unwrap_err())
            .collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].context().berth.as_deref(), Some("B9"));
        assert_eq!(errors[1].context().fender.as_deref(), Some("F9"));
    }

    #[test]
    fn test_unregistered_family_reported_at_berth() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_vessel("V1", vessel(&["B1"]))
            .add_berth("B1", berth("F1"))
            .add_load_case("LC1", load_case(BerthingConfiguration::CornerProtection))
            .add_fender("F1", FenderSpec::new("foam", 100.0, 100.0, 0.6));
        let catalogue = builder.build().unwrap();
        let registry = CurveRegistry::standard();

        let items: Vec<_> = Pairings::new(&catalogue, &registry).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].as_ref().unwrap_err(),
            &BerthingError::from(DataConsistencyError::UnregisteredFamily("foam".into()))
                .with_context(
                    ScenarioContext::new()
                        .with_vessel("V1")
                        .with_berth("B1")
                        .with_fender("F1")
                )
        );
    }
}
