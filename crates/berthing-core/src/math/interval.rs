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

use num_traits::Float;
use std::iter::FusedIterator;

/// A closed interval `[lo, hi]` over a floating-point type.
///
/// Used to describe the valid domain of a fender curve (normalized deflection
/// from zero to the curve's maximum) and to partition that domain when
/// bracketing roots.
///
/// # Invariants
///
/// Both bounds are finite and `lo <= hi`.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct ClosedInterval<T>
where
    T: Float,
{
    lo: T,
    hi: T,
}

impl<T> ClosedInterval<T>
where
    T: Float,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not finite or if `lo > hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 0.6);
    /// assert_eq!(iv.width(), 0.6);
    /// ```
    #[inline]
    pub fn new(lo: T, hi: T) -> Self {
        assert!(
            lo.is_finite() && hi.is_finite() && lo <= hi,
            "Invalid interval: bounds must be finite and lo must be less than or equal to hi"
        );
        Self { lo, hi }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Returns the upper bound.
    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }

    /// Returns `hi - lo`.
    #[inline]
    pub fn width(&self) -> T {
        self.hi - self.lo
    }

    /// Returns `true` if `value` lies within `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 0.6);
    /// assert!(iv.contains(0.0));
    /// assert!(iv.contains(0.6));
    /// assert!(!iv.contains(0.61));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Clamps `value` into `[lo, hi]`.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        value.max(self.lo).min(self.hi)
    }

    /// Returns an iterator over `points` evenly spaced values from `lo` to `hi`
    /// inclusive. A single point yields `lo`; zero points yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use berthing_core::math::interval::ClosedInterval;
    ///
    /// let pts: Vec<f64> = ClosedInterval::new(0.0, 1.0).linspace(5).collect();
    /// assert_eq!(pts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    #[inline]
    pub fn linspace(&self, points: usize) -> Linspace<T> {
        Linspace {
            lo: self.lo,
            hi: self.hi,
            points,
            front: 0,
            back: points,
        }
    }

    /// Splits the interval into `parts` adjacent sub-intervals of equal width,
    /// ordered from `lo` to `hi`. Consecutive parts share their boundary point.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    pub fn partition(&self, parts: usize) -> impl Iterator<Item = ClosedInterval<T>> + '_ {
        assert!(parts > 0, "called `ClosedInterval::partition` with zero parts");
        let mut edges = self.linspace(parts + 1);
        let mut previous = edges.next();
        std::iter::from_fn(move || {
            let lo = previous?;
            let hi = edges.next()?;
            previous = Some(hi);
            Some(ClosedInterval::new(lo, hi.max(lo)))
        })
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosedInterval[{:?}, {:?}]", self.lo, self.hi)
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Iterator over evenly spaced points of a `ClosedInterval`.
///
/// Points are computed from their index rather than accumulated, so the last
/// point is exactly `hi`.
#[derive(Debug, Clone)]
pub struct Linspace<T> {
    lo: T,
    hi: T,
    points: usize,
    front: usize,
    back: usize,
}

impl<T> Linspace<T>
where
    T: Float,
{
    #[inline]
    fn point(&self, i: usize) -> T {
        if self.points <= 1 || i == 0 {
            return self.lo;
        }
        if i + 1 == self.points {
            return self.hi;
        }
        let steps = T::from(self.points - 1).unwrap_or_else(T::one);
        let i = T::from(i).unwrap_or_else(T::zero);
        self.lo + (self.hi - self.lo) * (i / steps)
    }
}

impl<T> Iterator for Linspace<T>
where
    T: Float,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = self.point(self.front);
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Linspace<T>
where
    T: Float,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.point(self.back))
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Linspace<T> where T: Float {}

impl<T> FusedIterator for Linspace<T> where T: Float {}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lo: f64, hi: f64) -> ClosedInterval<f64> {
        ClosedInterval::new(lo, hi)
    }

    #[test]
    fn test_new_accepts_degenerate() {
        let d = iv(0.5, 0.5);
        assert_eq!(d.width(), 0.0);
        assert!(d.contains(0.5));
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_reversed_bounds() {
        let _ = iv(1.0, 0.0);
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_infinite_bound() {
        let _ = iv(0.0, f64::INFINITY);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let v = iv(0.0, 0.625);
        assert!(v.contains(0.0));
        assert!(v.contains(0.625));
        assert!(!v.contains(-1e-12));
        assert!(!v.contains(0.626));
        assert!(!v.contains(f64::NAN));
    }

    #[test]
    fn test_clamp() {
        let v = iv(0.0, 0.6);
        assert_eq!(v.clamp(-1.0), 0.0);
        assert_eq!(v.clamp(0.3), 0.3);
        assert_eq!(v.clamp(2.0), 0.6);
    }

    #[test]
    fn test_linspace_endpoints_exact() {
        let pts: Vec<f64> = iv(0.0, 0.65).linspace(14).collect();
        assert_eq!(pts.len(), 14);
        assert_eq!(pts[0], 0.0);
        assert_eq!(pts[13], 0.65);
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_small_counts() {
        assert_eq!(iv(1.0, 2.0).linspace(0).count(), 0);
        assert_eq!(iv(1.0, 2.0).linspace(1).collect::<Vec<_>>(), vec![1.0]);
        assert_eq!(iv(1.0, 2.0).linspace(2).collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_linspace_double_ended() {
        let back: Vec<f64> = iv(0.0, 1.0).linspace(3).rev().collect();
        assert_eq!(back, vec![1.0, 0.5, 0.0]);
        assert_eq!(iv(0.0, 1.0).linspace(7).len(), 7);
    }

    #[test]
    fn test_partition_covers_interval() {
        let parts: Vec<_> = iv(0.0, 1.0).partition(4).collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].lo(), 0.0);
        assert_eq!(parts[3].hi(), 1.0);
        for w in parts.windows(2) {
            assert_eq!(w[0].hi(), w[1].lo());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", iv(0.0, 0.5)), "[0, 0.5]");
    }
}
