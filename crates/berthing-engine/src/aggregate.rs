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

use berthing_model::{catalogue::Catalogue, index::FenderIndex, scenario::ScenarioResult};
use serde::{Deserialize, Serialize};

/// The results of one fender, in enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenderGroup {
    pub fender: String,
    pub results: Vec<ScenarioResult>,
}

impl FenderGroup {
    #[inline]
    pub fn new(fender: impl Into<String>) -> Self {
        Self {
            fender: fender.into(),
            results: Vec::new(),
        }
    }

    /// The result with the largest per-fender energy demand; the first one
    /// wins ties.
    pub fn governing(&self) -> Option<&ScenarioResult> {
        self.results.iter().fold(None, |best, r| match best {
            Some(b) if b.fender_energy >= r.fender_energy => Some(b),
            _ => Some(r),
        })
    }
}

/// Scenario results grouped by fender.
///
/// Holds one group per catalogue fender, in catalogue order, including
/// fenders no scenario was evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    groups: Vec<FenderGroup>,
}

impl ResultSet {
    /// Creates an empty group for every fender of `catalogue`.
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        Self {
            groups: catalogue.fenders().ids().map(FenderGroup::new).collect(),
        }
    }

    /// Appends `result` to the group of `fender`.
    ///
    /// # Panics
    ///
    /// Panics if `fender` is out of bounds.
    #[inline]
    pub fn push(&mut self, fender: FenderIndex, result: ScenarioResult) {
        let index = fender.get();
        debug_assert!(
            index < self.groups.len(),
            "called `ResultSet::push` with fender index out of bounds: the len is {} but the index is {}",
            self.groups.len(),
            index
        );
        debug_assert_eq!(
            self.groups[index].fender, result.fender,
            "called `ResultSet::push` with a result of a different fender"
        );
        self.groups[index].results.push(result);
    }

    #[inline]
    pub fn groups(&self) -> &[FenderGroup] {
        &self.groups
    }

    #[inline]
    pub fn group(&self, fender: FenderIndex) -> &FenderGroup {
        &self.groups[fender.get()]
    }

    /// Results of the fender with identifier `fender`.
    pub fn get(&self, fender: &str) -> Option<&[ScenarioResult]> {
        self.groups
            .iter()
            .find(|g| g.fender == fender)
            .map(|g| g.results.as_slice())
    }

    /// The governing result of the fender with identifier `fender`.
    pub fn governing(&self, fender: &str) -> Option<&ScenarioResult> {
        self.groups
            .iter()
            .find(|g| g.fender == fender)
            .and_then(FenderGroup::governing)
    }

    /// All results, grouped by fender.
    pub fn iter(&self) -> impl Iterator<Item = &ScenarioResult> + '_ {
        self.groups.iter().flat_map(|g| g.results.iter())
    }

    /// Total number of results.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.results.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.results.is_empty())
    }

    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }
}

impl std::fmt::Display for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for group in &self.groups {
            writeln!(f, "{} ({} results)", group.fender, group.results.len())?;
            for result in &group.results {
                writeln!(f, "  {result}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berthing_model::{
        catalogue::CatalogueBuilder,
        fender::FenderSpec,
        load_case::{BerthingCase, BerthingConfiguration},
        scenario::BerthingCoefficients,
    };

    fn result(fender: &str, load_case: &str, fender_energy: f64) -> ScenarioResult {
        ScenarioResult {
            vessel: "V".into(),
            load_case: load_case.into(),
            berth: "B".into(),
            fender: fender.into(),
            case: BerthingCase::Operational,
            configuration: BerthingConfiguration::Broadside,
            abnormal_berthing_factor: 1.0,
            eccentricity_distance: 0.0,
            water_depth: 40.0,
            displacement: 1000.0,
            length: 200.0,
            beam: 30.0,
            draft: 10.0,
            center_of_gravity: 100.0,
            fender_count: 2,
            rating: FenderSpec::new("pneumatic", 100.0, 100.0, 0.6),
            velocity: 0.5,
            coefficients: BerthingCoefficients {
                block: 0.5,
                radius_of_gyration: 40.0,
                eccentricity: 1.0,
                geometry: 1.0,
                deformation: 1.0,
                configuration: 1.0,
                berthing: 1.0,
                virtual_mass: 1.5,
            },
            ship_energy: 10.0,
            normalized_energy: fender_energy / 100.0,
            fender_energy,
            deflection: 0.2,
            reaction: 20.0,
        }
    }

    fn result_set() -> ResultSet {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_fender("F1", FenderSpec::new("pneumatic", 100.0, 100.0, 0.6))
            .add_fender("F2", FenderSpec::new("MV", 100.0, 100.0, 0.575))
            .add_fender("F3", FenderSpec::new("pneumatic", 100.0, 100.0, 0.6));
        ResultSet::for_catalogue(&builder.build().unwrap())
    }

    #[test]
    fn test_every_fender_has_a_group() {
        let set = result_set();
        assert_eq!(set.num_groups(), 3);
        assert!(set.is_empty());
        assert_eq!(set.get("F2"), Some(&[][..]));
        assert_eq!(set.get("F4"), None);
    }

    #[test]
    fn test_push_preserves_order_within_group() {
        let mut set = result_set();
        set.push(FenderIndex::new(2), result("F3", "LC1", 5.0));
        set.push(FenderIndex::new(0), result("F1", "LC1", 3.0));
        set.push(FenderIndex::new(2), result("F3", "LC2", 7.0));

        assert_eq!(set.len(), 3);
        let order: Vec<(&str, &str)> = set
            .iter()
            .map(|r| (r.fender.as_str(), r.load_case.as_str()))
            .collect();
        assert_eq!(order, vec![("F1", "LC1"), ("F3", "LC1"), ("F3", "LC2")]);
        assert_eq!(set.group(FenderIndex::new(1)).results.len(), 0);
    }

    #[test]
    fn test_governing_picks_largest_demand_first_on_ties() {
        let mut set = result_set();
        set.push(FenderIndex::new(0), result("F1", "LC1", 5.0));
        set.push(FenderIndex::new(0), result("F1", "LC2", 9.0));
        set.push(FenderIndex::new(0), result("F1", "LC3", 9.0));

        assert_eq!(set.governing("F1").unwrap().load_case, "LC2");
        assert!(set.governing("F2").is_none());
    }
}
