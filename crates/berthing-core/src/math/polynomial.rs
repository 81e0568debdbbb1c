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

/// A dense polynomial stored by ascending powers: `c[0] + c[1] x + c[2] x² + ...`.
///
/// # Examples
///
/// ```rust
/// # use berthing_core::math::polynomial::Polynomial;
///
/// // 1 + 2x + 3x²
/// let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(p.eval(2.0), 17.0);
/// ```
#[derive(Clone, PartialEq)]
pub struct Polynomial<T>
where
    T: Float,
{
    coefficients: Vec<T>,
}

impl<T> Polynomial<T>
where
    T: Float,
{
    /// Creates a polynomial from ascending-power coefficients.
    ///
    /// Trailing zero coefficients are dropped.
    #[inline]
    pub fn new(coefficients: Vec<T>) -> Self {
        let mut coefficients = coefficients;
        while coefficients.last().is_some_and(|c| c.is_zero()) {
            coefficients.pop();
        }
        Self { coefficients }
    }

    /// Creates a polynomial from a coefficient slice.
    #[inline]
    pub fn from_slice(coefficients: &[T]) -> Self {
        Self::new(coefficients.to_vec())
    }

    /// Returns the ascending-power coefficients.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }
}

impl<T> std::fmt::Debug for Polynomial<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Polynomial({:?})", self.coefficients)
    }
}

impl<T> std::fmt::Display for Polynomial<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, &c) in self.coefficients.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let sign = if c < T::zero() { "-" } else { "+" };
            if first {
                if c < T::zero() {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", sign)?;
            }
            match power {
                0 => write!(f, "{}", c.abs())?,
                1 => write!(f, "{}x", c.abs())?,
                _ => write!(f, "{}x^{}", c.abs(), power)?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_matches_expanded_form() {
        let p = Polynomial::new(vec![0.0, -0.2055, 3.9646, -14.087, 21.038]);
        let x: f64 = 0.6;
        let expanded = -0.2055 * x + 3.9646 * x.powi(2) - 14.087 * x.powi(3) + 21.038 * x.powi(4);
        assert!((p.eval(x) - expanded).abs() < 1e-12);
    }

    #[test]
    fn test_zero_polynomial() {
        let p = Polynomial::<f64>::new(vec![0.0, 0.0]);
        assert!(p.coefficients().is_empty());
        assert_eq!(p.eval(3.0), 0.0);
        assert_eq!(format!("{}", p), "0");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        let p = Polynomial::new(vec![1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(vec![1.0, -2.0, 3.0]);
        assert_eq!(format!("{}", p), "3x^2 - 2x + 1");
        let q = Polynomial::new(vec![0.0, -0.5]);
        assert_eq!(format!("{}", q), "-0.5x");
    }
}
