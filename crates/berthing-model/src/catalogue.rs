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

//! Immutable catalogues of vessels, berths, load cases and fenders.
//!
//! A `Catalogue` is assembled once by a `CatalogueBuilder` and then handed to
//! the engine by reference. Every table keeps insertion order, which is the
//! order scenarios are enumerated and results are reported in, and offers
//! constant-time lookup from a string identifier to a typed index.
//!
//! The builder only checks structural consistency (unique identifiers,
//! overrides that name real vessels). Cross references from vessels to
//! berths and from berths to fenders are resolved by the engine during
//! enumeration, where a missing entry can be reported together with the
//! scenario that referenced it.

use crate::{
    berth::Berth,
    error::{CatalogueError, EntryKind},
    fender::FenderSpec,
    index::{BerthIndex, FenderIndex, LoadCaseIndex, VesselIndex},
    load_case::LoadCase,
    vessel::Vessel,
};
use berthing_core::utils::index::TypedIndex;
use rustc_hash::FxHashMap;

/// An insertion-ordered table of identified entries.
#[derive(Clone)]
pub struct Table<Tag, V> {
    ids: Vec<String>,
    entries: Vec<V>,
    lookup: FxHashMap<String, TypedIndex<Tag>>,
}

impl<Tag, V> Table<Tag, V>
where
    Tag: Copy,
{
    fn from_entries(kind: EntryKind, items: Vec<(String, V)>) -> Result<Self, CatalogueError> {
        let mut ids = Vec::with_capacity(items.len());
        let mut entries = Vec::with_capacity(items.len());
        let mut lookup = FxHashMap::default();
        lookup.reserve(items.len());

        for (i, (id, entry)) in items.into_iter().enumerate() {
            if lookup.insert(id.clone(), TypedIndex::new(i)).is_some() {
                return Err(CatalogueError::DuplicateId { kind, id });
            }
            ids.push(id);
            entries.push(entry);
        }

        Ok(Self {
            ids,
            entries,
            lookup,
        })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: TypedIndex<Tag>) -> &V {
        let i = index.get();
        debug_assert!(
            i < self.len(),
            "called `Table::get` with index out of bounds: the len is {} but the index is {}",
            self.len(),
            i
        );
        &self.entries[i]
    }

    /// Returns the identifier of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn id(&self, index: TypedIndex<Tag>) -> &str {
        &self.ids[index.get()]
    }

    /// Looks up the index of an identifier.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<TypedIndex<Tag>> {
        self.lookup.get(id).copied()
    }

    /// Looks up an entry by identifier.
    #[inline]
    pub fn find(&self, id: &str) -> Option<(TypedIndex<Tag>, &V)> {
        self.index_of(id).map(|index| (index, self.get(index)))
    }

    /// Iterates `(index, id, entry)` in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (TypedIndex<Tag>, &str, &V)> + '_ {
        self.ids
            .iter()
            .zip(self.entries.iter())
            .enumerate()
            .map(|(i, (id, entry))| (TypedIndex::new(i), id.as_str(), entry))
    }

    /// Iterates identifiers in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }
}

impl<Tag, V> std::fmt::Debug for Table<Tag, V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.ids.iter().zip(self.entries.iter()))
            .finish()
    }
}

/// The immutable input to a berthing batch.
#[derive(Clone, Debug)]
pub struct Catalogue {
    vessels: Table<crate::index::VesselIndexTag, Vessel>,
    berths: Table<crate::index::BerthIndexTag, Berth>,
    load_cases: Table<crate::index::LoadCaseIndexTag, LoadCase>,
    fenders: Table<crate::index::FenderIndexTag, FenderSpec>,
    /// One entry per vessel, indexed by `VesselIndex`.
    eccentricity_overrides: Vec<Option<f64>>,
}

impl Catalogue {
    /// Returns the vessel table.
    #[inline]
    pub fn vessels(&self) -> &Table<crate::index::VesselIndexTag, Vessel> {
        &self.vessels
    }

    /// Returns the berth table.
    #[inline]
    pub fn berths(&self) -> &Table<crate::index::BerthIndexTag, Berth> {
        &self.berths
    }

    /// Returns the load case table.
    #[inline]
    pub fn load_cases(&self) -> &Table<crate::index::LoadCaseIndexTag, LoadCase> {
        &self.load_cases
    }

    /// Returns the fender table.
    #[inline]
    pub fn fenders(&self) -> &Table<crate::index::FenderIndexTag, FenderSpec> {
        &self.fenders
    }

    #[inline]
    pub fn vessel(&self, index: VesselIndex) -> &Vessel {
        self.vessels.get(index)
    }

    #[inline]
    pub fn berth(&self, index: BerthIndex) -> &Berth {
        self.berths.get(index)
    }

    #[inline]
    pub fn load_case(&self, index: LoadCaseIndex) -> &LoadCase {
        self.load_cases.get(index)
    }

    #[inline]
    pub fn fender(&self, index: FenderIndex) -> &FenderSpec {
        self.fenders.get(index)
    }

    /// Returns the corner-protection eccentricity override of a vessel, if
    /// one was supplied.
    #[inline]
    pub fn eccentricity_override(&self, index: VesselIndex) -> Option<f64> {
        self.eccentricity_overrides[index.get()]
    }

    /// Returns the number of (vessel, berth, load case) combinations the
    /// engine will visit, counting every assigned berth reference.
    pub fn num_pairings(&self) -> usize {
        let assignments: usize = self.vessels.iter().map(|(_, _, v)| v.berths.len()).sum();
        assignments * self.load_cases.len()
    }
}

impl std::fmt::Display for Catalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Catalogue(vessels: {}, berths: {}, load cases: {}, fenders: {})",
            self.vessels.len(),
            self.berths.len(),
            self.load_cases.len(),
            self.fenders.len()
        )
    }
}

/// Collects catalogue entries and validates them into a `Catalogue`.
///
/// # Examples
///
/// ```rust
/// # use berthing_model::catalogue::CatalogueBuilder;
/// # use berthing_model::fender::FenderSpec;
/// let mut builder = CatalogueBuilder::new();
/// builder.add_fender("Typical Pneumatic", FenderSpec::new("pneumatic", 1339.0, 678.0, 0.6));
/// let catalogue = builder.build().unwrap();
/// assert_eq!(catalogue.fenders().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogueBuilder {
    vessels: Vec<(String, Vessel)>,
    berths: Vec<(String, Berth)>,
    load_cases: Vec<(String, LoadCase)>,
    fenders: Vec<(String, FenderSpec)>,
    eccentricity_overrides: Vec<(String, f64)>,
}

impl CatalogueBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_vessel(&mut self, id: impl Into<String>, vessel: Vessel) -> &mut Self {
        self.vessels.push((id.into(), vessel));
        self
    }

    #[inline]
    pub fn add_berth(&mut self, id: impl Into<String>, berth: Berth) -> &mut Self {
        self.berths.push((id.into(), berth));
        self
    }

    #[inline]
    pub fn add_load_case(&mut self, id: impl Into<String>, load_case: LoadCase) -> &mut Self {
        self.load_cases.push((id.into(), load_case));
        self
    }

    #[inline]
    pub fn add_fender(&mut self, id: impl Into<String>, fender: FenderSpec) -> &mut Self {
        self.fenders.push((id.into(), fender));
        self
    }

    /// Sets the eccentricity distance used for a vessel's corner-protection
    /// scenarios. A later call for the same vessel replaces the earlier one.
    #[inline]
    pub fn set_eccentricity_override(
        &mut self,
        vessel_id: impl Into<String>,
        distance: f64,
    ) -> &mut Self {
        self.eccentricity_overrides.push((vessel_id.into(), distance));
        self
    }

    /// Validates the collected entries and freezes them.
    ///
    /// # Errors
    ///
    /// - `CatalogueError::DuplicateId` if an identifier repeats within a table.
    /// - `CatalogueError::OverrideForUnknownVessel` if an override names a
    ///   vessel that was never added.
    /// - `CatalogueError::InvalidOverride` if an override distance is
    ///   negative or not finite.
    pub fn build(self) -> Result<Catalogue, CatalogueError> {
        let vessels = Table::from_entries(EntryKind::Vessel, self.vessels)?;
        let berths = Table::from_entries(EntryKind::Berth, self.berths)?;
        let load_cases = Table::from_entries(EntryKind::LoadCase, self.load_cases)?;
        let fenders = Table::from_entries(EntryKind::Fender, self.fenders)?;

        let mut eccentricity_overrides = vec![None; vessels.len()];
        for (vessel_id, distance) in self.eccentricity_overrides {
            let index = vessels
                .index_of(&vessel_id)
                .ok_or_else(|| CatalogueError::OverrideForUnknownVessel(vessel_id.clone()))?;
            if !distance.is_finite() || distance < 0.0 {
                return Err(CatalogueError::InvalidOverride(vessel_id));
            }
            eccentricity_overrides[index.get()] = Some(distance);
        }

        Ok(Catalogue {
            vessels,
            berths,
            load_cases,
            fenders,
            eccentricity_overrides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{berth::ExposureCondition, load_case::BerthingConfiguration};

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
            mudline_elevation: 20.0,
            fender: fender.to_string(),
            exposure: ExposureCondition::Sheltered,
            configuration_factor: 1.0,
        }
    }

    fn load_case() -> LoadCase {
        LoadCase {
            configuration: BerthingConfiguration::Broadside,
            abnormal_berthing_factor: 1.0,
            geometry_factor: 0.95,
            water_elevation: 100.0,
        }
    }

    #[test]
    fn test_tables_preserve_insertion_order() {
        let mut b = CatalogueBuilder::new();
        b.add_vessel("Zulu", vessel(&["B"]))
            .add_vessel("Alpha", vessel(&["B"]))
            .add_vessel("Mike", vessel(&["B"]));
        let c = b.build().unwrap();
        let ids: Vec<&str> = c.vessels().ids().collect();
        assert_eq!(ids, vec!["Zulu", "Alpha", "Mike"]);
        assert_eq!(c.vessels().index_of("Alpha"), Some(VesselIndex::new(1)));
        assert_eq!(c.vessels().id(VesselIndex::new(2)), "Mike");
    }

    #[test]
    fn test_find_returns_entry() {
        let mut b = CatalogueBuilder::new();
        b.add_berth("North", berth("F1"));
        let c = b.build().unwrap();
        let (idx, found) = c.berths().find("North").unwrap();
        assert_eq!(idx, BerthIndex::new(0));
        assert_eq!(found.fender, "F1");
        assert!(c.berths().find("South").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut b = CatalogueBuilder::new();
        b.add_fender("F1", FenderSpec::new("pneumatic", 1.0, 1.0, 0.6))
            .add_fender("F1", FenderSpec::new("MV", 1.0, 1.0, 0.575));
        assert_eq!(
            b.build().unwrap_err(),
            CatalogueError::DuplicateId {
                kind: EntryKind::Fender,
                id: "F1".to_string()
            }
        );
    }

    #[test]
    fn test_override_for_unknown_vessel_rejected() {
        let mut b = CatalogueBuilder::new();
        b.add_vessel("V1", vessel(&[]))
            .set_eccentricity_override("V2", 10.0);
        assert_eq!(
            b.build().unwrap_err(),
            CatalogueError::OverrideForUnknownVessel("V2".to_string())
        );
    }

    #[test]
    fn test_negative_override_rejected() {
        let mut b = CatalogueBuilder::new();
        b.add_vessel("V1", vessel(&[]))
            .set_eccentricity_override("V1", -1.0);
        assert_eq!(
            b.build().unwrap_err(),
            CatalogueError::InvalidOverride("V1".to_string())
        );
    }

    #[test]
    fn test_override_last_write_wins() {
        let mut b = CatalogueBuilder::new();
        b.add_vessel("V1", vessel(&[]))
            .add_vessel("V2", vessel(&[]))
            .set_eccentricity_override("V1", 10.0)
            .set_eccentricity_override("V1", 12.5);
        let c = b.build().unwrap();
        assert_eq!(c.eccentricity_override(VesselIndex::new(0)), Some(12.5));
        assert_eq!(c.eccentricity_override(VesselIndex::new(1)), None);
    }

    #[test]
    fn test_num_pairings_counts_every_assignment() {
        let mut b = CatalogueBuilder::new();
        b.add_vessel("V1", vessel(&["B1", "B2"]))
            .add_vessel("V2", vessel(&["B1"]))
            .add_berth("B1", berth("F1"))
            .add_load_case("LC1", load_case())
            .add_load_case("LC2", load_case());
        let c = b.build().unwrap();
        assert_eq!(c.num_pairings(), 6);
    }

    #[test]
    fn test_display() {
        let c = CatalogueBuilder::new().build().unwrap();
        assert_eq!(
            format!("{}", c),
            "Catalogue(vessels: 0, berths: 0, load cases: 0, fenders: 0)"
        );
    }
}
