//! First-class dispersion curves.
//!
//! Each retained mode is exposed as three interpolants over the mode's own
//! fd domain. An interpolant is a plain struct of spline knots and
//! coefficients; evaluation is a pure method, and evaluating outside the
//! domain is an error, never an extrapolation.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::branch::ModeBranch;
use crate::error::{Error, Result};
use crate::spline::CubicSpline;

/// A smooth fd ↦ value mapping for one quantity of one mode.
#[derive(Debug, Clone)]
pub struct Interpolant {
    spline: CubicSpline<f64>,
}

impl Interpolant {
    pub(crate) fn from_samples(fd: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        Ok(Self {
            spline: CubicSpline::new(fd, values)?,
        })
    }

    /// The mode's fd range [fd_min, fd_max]; fd_min is the per-mode
    /// cutoff.
    pub fn domain(&self) -> (f64, f64) {
        self.spline.domain()
    }

    /// Value at `fd`, or [`Error::Domain`] outside [`Self::domain`].
    pub fn evaluate(&self, fd: f64) -> Result<f64> {
        let (fd_min, fd_max) = self.domain();
        self.spline
            .value(fd)
            .ok_or(Error::Domain { fd, fd_min, fd_max })
    }

    /// The underlying knots, for export.
    pub fn samples(&self) -> (&[f64], &[f64]) {
        self.spline.knots()
    }
}

/// The three derived curves of one mode.
#[derive(Debug, Clone)]
pub struct ModeCurves {
    /// Phase velocity vp(fd), m/s.
    pub vp: Interpolant,
    /// Group velocity vg(fd), m/s.
    pub vg: Interpolant,
    /// Wave number k(fd), 1/m.
    pub k: Interpolant,
}

/// All computed modes, keyed by label ("S0", "A0", "SH0", ...). A BTreeMap
/// keeps iteration and export order deterministic.
pub type ResultSet = BTreeMap<String, ModeCurves>;

impl ModeCurves {
    /// Lifts a raw branch to its three interpolants:
    ///
    /// k(fd) = (fd·2π/d) / vp(fd)
    /// vg(fd) = vp² / (vp − fd·dvp/dfd)
    ///
    /// with dvp/dfd taken from the vp spline's derivative at the knots.
    pub(crate) fn from_branch(branch: &ModeBranch, thickness: f64) -> Result<Self> {
        let fd = &branch.fd;
        let vp = &branch.vp;

        let vp_spline = CubicSpline::new(fd.clone(), vp.clone())?;
        let slopes = vp_spline.knot_slopes();

        let k_values: Vec<f64> = fd
            .iter()
            .zip(vp)
            .map(|(&fd_i, &vp_i)| (fd_i * 2.0 * PI / thickness) / vp_i)
            .collect();
        let vg_values: Vec<f64> = fd
            .iter()
            .zip(vp)
            .zip(&slopes)
            .map(|((&fd_i, &vp_i), &slope)| vp_i * vp_i / (vp_i - fd_i * slope))
            .collect();

        Ok(Self {
            vp: Interpolant {
                spline: vp_spline,
            },
            vg: Interpolant::from_samples(fd.clone(), vg_values)?,
            k: Interpolant::from_samples(fd.clone(), k_values)?,
        })
    }
}
