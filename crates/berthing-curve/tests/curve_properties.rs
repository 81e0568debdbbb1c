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

//! Property tests for fender curve inversion.
//!
//! - Round-trip: resolving `energy(d0) * rated` recovers `d0` for every family
//! - Demands beyond a curve's peak are rejected as out of range
//! - Sampled curves span the full domain in order

use berthing_core::math::roots::RootSearch;
use berthing_curve::{error::CurveError, registry::CurveRegistry, resolver::FenderCurveResolver};
use berthing_model::fender::FenderSpec;
use proptest::prelude::*;

/// Lower deflection bound per family, past the pneumatic fit's dip below zero.
fn family_domain(index: usize) -> (&'static str, f64, f64) {
    const FAMILIES: [(&str, f64, f64); 4] = [
        ("pneumatic", 0.1, 0.65),
        ("hydropneumatic", 0.01, 0.45),
        ("MV", 0.01, 0.625),
        ("unit fender", 0.0, 0.625),
    ];
    FAMILIES[index % FAMILIES.len()]
}

proptest! {
    #[test]
    fn resolve_round_trips_deflection(
        family_idx in 0usize..4,
        t in 0.0f64..=1.0,
        rated_energy in 1.0f64..5000.0,
        rated_reaction in 1.0f64..5000.0,
    ) {
        let registry = CurveRegistry::standard();
        let resolver = FenderCurveResolver::new(&registry, RootSearch::default());
        let (family, lo, hi) = family_domain(family_idx);
        let curve = registry.get(family).unwrap();
        let d0 = lo + t * (hi - lo);

        let spec = FenderSpec::new(family, rated_energy, rated_reaction, 0.6);
        let r = resolver.resolve(curve.energy(d0) * rated_energy, &spec).unwrap();

        prop_assert!((r.deflection - d0).abs() < 1e-6, "{family}: d0 = {d0}, d = {}", r.deflection);
        let expected = curve.reaction(d0) * rated_reaction;
        prop_assert!((r.reaction - expected).abs() <= 1e-4 * rated_reaction.max(1.0));
    }

    #[test]
    fn demand_beyond_peak_is_out_of_range(
        family_idx in 0usize..4,
        excess in 1.001f64..10.0,
    ) {
        let registry = CurveRegistry::standard();
        let resolver = FenderCurveResolver::new(&registry, RootSearch::default());
        let (family, _, _) = family_domain(family_idx);
        let peak = registry.get(family).unwrap().max_energy();

        let spec = FenderSpec::new(family, 100.0, 100.0, 0.6);
        let is_out_of_range = matches!(
            resolver.resolve(peak * excess * 100.0, &spec),
            Err(CurveError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn sample_spans_domain(family_idx in 0usize..4, points in 2usize..64) {
        let registry = CurveRegistry::standard();
        let resolver = FenderCurveResolver::new(&registry, RootSearch::default());
        let (family, _, _) = family_domain(family_idx);
        let domain = registry.get(family).unwrap().domain();

        let spec = FenderSpec::new(family, 10.0, 10.0, 0.6);
        let samples = resolver.sample(&spec, points).unwrap();

        prop_assert_eq!(samples.len(), points);
        prop_assert_eq!(samples[0].deflection, 0.0);
        prop_assert_eq!(samples[points - 1].deflection, domain.hi());
        prop_assert!(samples.windows(2).all(|w| w[0].deflection < w[1].deflection));
    }
}
