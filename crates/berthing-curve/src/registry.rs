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
    curve::FenderCurve, error::CurveError, polynomial::PolynomialCurve,
    tabulated::TabulatedCurve,
};
use rustc_hash::FxHashMap;

/// Fender curves keyed by family name.
///
/// Built once before a batch and only read afterwards.
#[derive(Default)]
pub struct CurveRegistry {
    curves: FxHashMap<String, Box<dyn FenderCurve>>,
}

impl CurveRegistry {
    /// Creates a registry with no curves.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the four built-in families.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(PolynomialCurve::pneumatic());
        registry.register(PolynomialCurve::hydropneumatic());
        registry.register(PolynomialCurve::mv_leg());
        registry.register(TabulatedCurve::unit_element());
        registry
    }

    /// Registers `curve` under its family name, returning the curve it
    /// replaced, if any.
    pub fn register<C>(&mut self, curve: C) -> Option<Box<dyn FenderCurve>>
    where
        C: FenderCurve + 'static,
    {
        self.curves.insert(curve.family().to_owned(), Box::new(curve))
    }

    /// Looks up the curve for `family`.
    pub fn get(&self, family: &str) -> Result<&dyn FenderCurve, CurveError> {
        self.curves
            .get(family)
            .map(|curve| curve.as_ref())
            .ok_or_else(|| CurveError::UnknownFamily(family.to_owned()))
    }

    #[inline]
    pub fn contains(&self, family: &str) -> bool {
        self.curves.contains_key(family)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.curves.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for CurveRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveRegistry")
            .field("families", &self.families())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_families() {
        let registry = CurveRegistry::standard();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.families(),
            vec!["MV", "hydropneumatic", "pneumatic", "unit fender"]
        );
        assert_eq!(registry.get("pneumatic").unwrap().family(), "pneumatic");
    }

    #[test]
    fn test_unknown_family() {
        let registry = CurveRegistry::standard();
        assert_eq!(
            registry.get("foam").unwrap_err(),
            CurveError::UnknownFamily("foam".to_owned())
        );
        assert!(!registry.contains("Pneumatic"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CurveRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.register(PolynomialCurve::pneumatic()).is_none());
        assert!(registry.register(PolynomialCurve::pneumatic()).is_some());
        assert_eq!(registry.len(), 1);

        let custom = TabulatedCurve::new("cell", [(0.0, 0.0, 0.0), (0.5, 1.0, 1.0)]).unwrap();
        registry.register(custom);
        assert!(registry.contains("cell"));
        assert_eq!(registry.get("cell").unwrap().domain().hi(), 0.5);
    }
}
