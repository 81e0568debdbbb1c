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

//! Property tests for the numeric primitives.
//!
//! - `linspace` hits both endpoints and never leaves the interval
//! - Two separated roots of a quadratic are both found, smallest first

use berthing_core::math::{interval::ClosedInterval, polynomial::Polynomial, roots::RootSearch};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linspace_stays_inside(
        lo in -1e3f64..1e3,
        width in 1e-6f64..1e3,
        points in 2usize..200,
    ) {
        let interval = ClosedInterval::new(lo, lo + width);
        let grid: Vec<f64> = interval.linspace(points).collect();
        prop_assert_eq!(grid.len(), points);
        prop_assert_eq!(grid[0], interval.lo());
        prop_assert_eq!(grid[points - 1], interval.hi());
        prop_assert!(grid.iter().all(|&x| interval.contains(x)));
        prop_assert!(grid.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn quadratic_roots_are_found_in_order(
        r1 in 0.05f64..0.45,
        r2 in 0.55f64..0.95,
    ) {
        let p = Polynomial::new(vec![r1 * r2, -(r1 + r2), 1.0]);
        let search = RootSearch::<f64>::default();
        let domain = ClosedInterval::new(0.0, 1.0);

        let roots = search.roots_in(|x| p.eval(x), domain);
        prop_assert_eq!(roots.len(), 2);
        prop_assert!((roots[0] - r1).abs() < 1e-9);
        prop_assert!((roots[1] - r2).abs() < 1e-9);

        let smallest = search.smallest_root_in(|x| p.eval(x), domain).unwrap();
        prop_assert_eq!(smallest, roots[0]);
    }
}
