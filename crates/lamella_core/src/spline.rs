//! Natural cubic spline over strictly increasing knots.
//!
//! Generic over the scalar type so the kernel stays independent of the
//! dispersion-specific plumbing; the solver instantiates it with `f64`.

use std::fmt::Debug;

use num_traits::{Float, FromPrimitive};

use crate::error::{Error, Result};

/// Numeric types the spline kernel accepts.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// An interpolating cubic spline with natural boundary conditions
/// (zero second derivative at both ends).
///
/// Stores the knots together with the second derivatives obtained from the
/// tridiagonal system, so evaluation is a pure method with no captured
/// mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<T: Scalar> {
    x: Vec<T>,
    y: Vec<T>,
    m: Vec<T>,
}

impl<T: Scalar> CubicSpline<T> {
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::Spline(format!(
                "knot count mismatch: {} x values, {} y values",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(Error::Spline("at least two knots are required".into()));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(Error::Spline("knots must be finite".into()));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::Spline("x knots must be strictly increasing".into()));
        }
        let m = Self::second_derivatives(&x, &y);
        Ok(Self { x, y, m })
    }

    /// Solves the tridiagonal system for the interior second derivatives
    /// (Thomas algorithm); the natural boundary pins both ends to zero.
    fn second_derivatives(x: &[T], y: &[T]) -> Vec<T> {
        let n = x.len();
        let zero = T::zero();
        let mut m = vec![zero; n];
        if n == 2 {
            return m;
        }

        let two = T::from_f64(2.0).unwrap();
        let six = T::from_f64(6.0).unwrap();
        let count = n - 2;
        let mut diag = vec![zero; count];
        let mut upper = vec![zero; count];
        let mut rhs = vec![zero; count];

        for i in 1..n - 1 {
            let h0 = x[i] - x[i - 1];
            let h1 = x[i + 1] - x[i];
            diag[i - 1] = two * (h0 + h1);
            upper[i - 1] = h1;
            rhs[i - 1] = six * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);
        }

        for j in 1..count {
            let lower = x[j + 1] - x[j];
            let w = lower / diag[j - 1];
            diag[j] = diag[j] - w * upper[j - 1];
            rhs[j] = rhs[j] - w * rhs[j - 1];
        }

        m[count] = rhs[count - 1] / diag[count - 1];
        for j in (0..count - 1).rev() {
            m[j + 1] = (rhs[j] - upper[j] * m[j + 2]) / diag[j];
        }
        m
    }

    /// The knot range `[x_first, x_last]`.
    pub fn domain(&self) -> (T, T) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// The underlying knots.
    pub fn knots(&self) -> (&[T], &[T]) {
        (&self.x, &self.y)
    }

    fn interval(&self, t: T) -> Option<usize> {
        let n = self.x.len();
        if t < self.x[0] || t > self.x[n - 1] {
            return None;
        }
        let idx = self.x.partition_point(|&v| v <= t);
        Some(idx.saturating_sub(1).min(n - 2))
    }

    /// Spline value at `t`, or `None` outside the knot range.
    pub fn value(&self, t: T) -> Option<T> {
        let i = self.interval(t)?;
        let six = T::from_f64(6.0).unwrap();
        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - t) / h;
        let b = (t - self.x[i]) / h;
        Some(
            a * self.y[i]
                + b * self.y[i + 1]
                + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / six,
        )
    }

    /// First derivative at `t`, or `None` outside the knot range.
    pub fn slope(&self, t: T) -> Option<T> {
        let i = self.interval(t)?;
        let one = T::one();
        let three = T::from_f64(3.0).unwrap();
        let six = T::from_f64(6.0).unwrap();
        let h = self.x[i + 1] - self.x[i];
        let a = (self.x[i + 1] - t) / h;
        let b = (t - self.x[i]) / h;
        Some(
            (self.y[i + 1] - self.y[i]) / h - (three * a * a - one) * h * self.m[i] / six
                + (three * b * b - one) * h * self.m[i + 1] / six,
        )
    }

    /// First derivative at every knot, left to right.
    pub fn knot_slopes(&self) -> Vec<T> {
        let n = self.x.len();
        let three = T::from_f64(3.0).unwrap();
        let six = T::from_f64(6.0).unwrap();
        let mut slopes = Vec::with_capacity(n);
        for i in 0..n - 1 {
            let h = self.x[i + 1] - self.x[i];
            let dy = (self.y[i + 1] - self.y[i]) / h;
            slopes.push(dy - h * self.m[i] / three - h * self.m[i + 1] / six);
        }
        let h = self.x[n - 1] - self.x[n - 2];
        let dy = (self.y[n - 1] - self.y[n - 2]) / h;
        slopes.push(dy + h * self.m[n - 2] / six + h * self.m[n - 1] / three);
        slopes
    }
}

#[cfg(test)]
mod tests {
    use super::CubicSpline;

    fn build(xs: &[f64], ys: &[f64]) -> CubicSpline<f64> {
        CubicSpline::new(xs.to_vec(), ys.to_vec()).expect("valid knots")
    }

    #[test]
    fn reproduces_knot_values() {
        let xs: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        let spline = build(&xs, &ys);
        for (x, y) in xs.iter().zip(&ys) {
            let v = spline.value(*x).expect("knot inside domain");
            assert!((v - y).abs() < 1e-12, "value at knot {x}: {v} vs {y}");
        }
    }

    #[test]
    fn linear_data_stays_linear() {
        let spline = build(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);
        let v = spline.value(1.5).expect("inside domain");
        assert!((v - 4.0).abs() < 1e-12, "midpoint value {v}");
        let s = spline.slope(2.5).expect("inside domain");
        assert!((s - 2.0).abs() < 1e-12, "slope {s}");
    }

    #[test]
    fn derivative_tracks_a_smooth_function() {
        let xs: Vec<f64> = (0..41).map(|i| i as f64 * 0.25).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        let spline = build(&xs, &ys);
        // Away from the natural ends the parabola's derivative is matched
        // closely.
        for &x in &[3.0, 5.0, 7.1] {
            let s = spline.slope(x).expect("inside domain");
            assert!((s - 2.0 * x).abs() < 0.05, "slope at {x}: {s}");
        }
        let at_knots = spline.knot_slopes();
        assert_eq!(at_knots.len(), xs.len());
        assert!((at_knots[20] - 2.0 * xs[20]).abs() < 0.05);
    }

    #[test]
    fn knot_slopes_agree_with_slope() {
        let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| (0.3 * x).cos()).collect();
        let spline = build(&xs, &ys);
        let slopes = spline.knot_slopes();
        for (i, x) in xs.iter().enumerate() {
            let direct = spline.slope(*x).expect("inside domain");
            assert!(
                (slopes[i] - direct).abs() < 1e-10,
                "knot {i}: {} vs {direct}",
                slopes[i]
            );
        }
    }

    #[test]
    fn evaluation_outside_domain_is_refused() {
        let spline = build(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]);
        assert!(spline.value(-0.1).is_none());
        assert!(spline.value(2.1).is_none());
        assert!(spline.slope(2.0000001).is_none());
    }

    #[test]
    fn degenerate_knots_are_rejected() {
        assert!(CubicSpline::new(vec![0.0], vec![1.0]).is_err());
        assert!(CubicSpline::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(CubicSpline::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(CubicSpline::new(vec![0.0, 1.0], vec![1.0, f64::NAN]).is_err());
    }
}
