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

//! Bounded real-root search.
//!
//! `RootSearch` locates the real roots of a continuous function inside a
//! closed interval. The interval is partitioned into equal sub-intervals;
//! every sub-interval whose endpoints bracket a sign change is refined by
//! bisection. Roots are reported in ascending order, so a caller that wants
//! the smallest root takes the first one.
//!
//! Roots of even multiplicity (tangent touches without a sign change) are
//! only reported when the function evaluates to exactly zero on a sample
//! point.

use crate::math::interval::ClosedInterval;
use num_traits::Float;
use smallvec::SmallVec;

/// Inline capacity for the roots reported by a single search.
pub const INLINE_ROOTS: usize = 4;

/// Configuration for a bracketing root search.
///
/// # Examples
///
/// ```rust
/// # use berthing_core::math::{interval::ClosedInterval, roots::RootSearch};
///
/// let search = RootSearch::new(64, 1e-12, 200);
/// let roots = search.roots_in(|x: f64| (x - 0.25) * (x - 0.75), ClosedInterval::new(0.0, 1.0));
/// assert_eq!(roots.len(), 2);
/// assert!((roots[0] - 0.25).abs() < 1e-9);
/// assert!((roots[1] - 0.75).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSearch<T>
where
    T: Float,
{
    samples: usize,
    tolerance: T,
    max_iterations: usize,
}

impl<T> RootSearch<T>
where
    T: Float,
{
    /// Creates a new search.
    ///
    /// # Panics
    ///
    /// Panics if `samples` or `max_iterations` is zero, or if `tolerance` is
    /// not a positive finite number.
    #[inline]
    pub fn new(samples: usize, tolerance: T, max_iterations: usize) -> Self {
        assert!(samples > 0, "called `RootSearch::new` with zero samples");
        assert!(
            max_iterations > 0,
            "called `RootSearch::new` with zero iterations"
        );
        assert!(
            tolerance.is_finite() && tolerance > T::zero(),
            "called `RootSearch::new` with a non-positive tolerance"
        );
        Self {
            samples,
            tolerance,
            max_iterations,
        }
    }

    /// Returns the number of bracketing sub-intervals.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the bisection width tolerance.
    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Returns the bisection iteration cap.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns every root found in `domain`, ascending.
    pub fn roots_in<F>(&self, f: F, domain: ClosedInterval<T>) -> SmallVec<T, INLINE_ROOTS>
    where
        F: Fn(T) -> T,
    {
        let mut roots: SmallVec<T, INLINE_ROOTS> = SmallVec::new();
        let push = |roots: &mut SmallVec<T, INLINE_ROOTS>, x: T| {
            if roots.last().is_none_or(|&last| x > last) {
                roots.push(x);
            }
        };

        for part in domain.partition(self.samples) {
            let (a, b) = (part.lo(), part.hi());
            let (fa, fb) = (f(a), f(b));
            if !fa.is_finite() || !fb.is_finite() {
                continue;
            }
            if fa.is_zero() {
                push(&mut roots, a);
            } else if !fb.is_zero() && fa.signum() != fb.signum() {
                push(&mut roots, self.bisect(&f, a, b, fa));
            }
        }

        let hi = domain.hi();
        if f(hi).is_zero() {
            push(&mut roots, hi);
        }
        roots
    }

    /// Returns the smallest root in `domain`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_core::math::{interval::ClosedInterval, roots::RootSearch};
    ///
    /// let search = RootSearch::new(32, 1e-12, 200);
    /// let r = search.smallest_root_in(|x: f64| x * x - 0.04, ClosedInterval::new(0.0, 1.0));
    /// assert!((r.unwrap() - 0.2).abs() < 1e-9);
    /// assert!(search.smallest_root_in(|x: f64| x + 1.0, ClosedInterval::new(0.0, 1.0)).is_none());
    /// ```
    #[inline]
    pub fn smallest_root_in<F>(&self, f: F, domain: ClosedInterval<T>) -> Option<T>
    where
        F: Fn(T) -> T,
    {
        self.roots_in(f, domain).first().copied()
    }

    /// Bisection on `[a, b]` where `f(a)` and `f(b)` have opposite signs.
    fn bisect<F>(&self, f: &F, mut a: T, mut b: T, mut fa: T) -> T
    where
        F: Fn(T) -> T,
    {
        let two = T::one() + T::one();
        for _ in 0..self.max_iterations {
            let mid = a + (b - a) / two;
            if b - a <= self.tolerance {
                return mid;
            }
            let fm = f(mid);
            if fm.is_zero() {
                return mid;
            }
            if fm.signum() == fa.signum() {
                a = mid;
                fa = fm;
            } else {
                b = mid;
            }
        }
        a + (b - a) / two
    }
}

impl<T> Default for RootSearch<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            samples: 512,
            tolerance: T::from(1e-12).unwrap_or_else(T::epsilon),
            max_iterations: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polynomial::Polynomial;

    fn unit() -> ClosedInterval<f64> {
        ClosedInterval::new(0.0, 1.0)
    }

    #[test]
    fn test_single_root() {
        let search = RootSearch::default();
        let roots = search.roots_in(|x: f64| x - 0.3, unit());
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_roots_are_ascending_and_smallest_is_first() {
        // 6 (x - 0.1)(x - 0.2)(x - 0.3)
        let p = Polynomial::new(vec![-0.036, 0.66, -3.6, 6.0]);
        let search = RootSearch::default();
        let roots = search.roots_in(|x| p.eval(x), unit());
        assert_eq!(roots.len(), 3);
        assert!((roots[0] - 0.1).abs() < 1e-9);
        assert!((roots[2] - 0.3).abs() < 1e-9);
        assert!(roots.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(search.smallest_root_in(|x| p.eval(x), unit()), Some(roots[0]));
    }

    #[test]
    fn test_root_on_lower_bound() {
        let search = RootSearch::default();
        let roots = search.roots_in(|x: f64| x * (x - 2.0), unit());
        assert_eq!(roots.as_slice(), &[0.0]);
    }

    #[test]
    fn test_root_on_upper_bound() {
        let search = RootSearch::new(8, 1e-12, 100);
        let roots = search.roots_in(|x: f64| x - 1.0, unit());
        assert_eq!(roots.as_slice(), &[1.0]);
    }

    #[test]
    fn test_no_root_outside_domain() {
        let search = RootSearch::default();
        assert!(search.roots_in(|x: f64| x - 1.5, unit()).is_empty());
        assert!(search.roots_in(|x: f64| x + 0.5, unit()).is_empty());
    }

    #[test]
    fn test_negative_dip_reports_only_crossing() {
        // -0.2x + 4x² is negative on (0, 0.05) and crosses back at 0.05.
        let p = Polynomial::new(vec![0.0, -0.2, 4.0]);
        let search = RootSearch::default();
        let roots = search.roots_in(|x| p.eval(x) - 0.01, unit());
        assert_eq!(roots.len(), 1);
        let expected = (0.2 + (0.04f64 + 0.16).sqrt()) / 8.0;
        assert!((roots[0] - expected).abs() < 1e-10);
    }

    #[test]
    fn test_non_finite_samples_are_skipped() {
        let search = RootSearch::new(4, 1e-12, 100);
        let roots = search.roots_in(|x: f64| if x < 0.5 { f64::NAN } else { x - 0.8 }, unit());
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.8).abs() < 1e-10);
    }

    #[test]
    #[should_panic]
    fn test_zero_samples_panics() {
        let _ = RootSearch::<f64>::new(0, 1e-9, 10);
    }
}
