//! Closed-form shear-horizontal (SHn) dispersion.
//!
//! SH modes need no root tracking: the wave number follows directly from
//!
//! k(ω, m) = Re√((ω·d/cS)² − (m·π)²) / d
//!
//! which is real above the mode's cutoff ω = m·π·cS/d and zero below it.
//! Below-cutoff samples are dropped, so each branch carries the same
//! packaging as the Lamb modes and downstream consumers are uniform.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::branch::MIN_BRANCH_POINTS;
use crate::curve::{Interpolant, ModeCurves, ResultSet};
use crate::error::Result;
use crate::plate::{Plate, SweepConfig};

pub(crate) fn generate(plate: &Plate, sweep: &SweepConfig) -> Result<ResultSet> {
    let mut results = ResultSet::new();
    let d = plate.thickness();
    let c_s = plate.c_s();

    for mode in 0..sweep.nmodes_sh {
        let m_pi = mode as f64 * PI;

        // fd grid over (0, fd_max]: the zero-frequency sample carries no
        // propagating solution for any mode and is excluded.
        let mut fd_values = Vec::with_capacity(sweep.fd_points);
        let mut omega_values = Vec::with_capacity(sweep.fd_points);
        let mut k_values = Vec::with_capacity(sweep.fd_points);
        let mut vp_values = Vec::with_capacity(sweep.fd_points);

        for i in 0..sweep.fd_points {
            let fd = sweep.fd_max * (i + 1) as f64 / sweep.fd_points as f64;
            let omega = 2.0 * PI * fd / d;
            let kh = Complex64::new((omega * d / c_s).powi(2) - m_pi * m_pi, 0.0).sqrt();
            if kh.re <= 0.0 {
                // Below cutoff the square root is purely imaginary.
                continue;
            }
            let k = kh.re / d;
            fd_values.push(fd);
            omega_values.push(omega);
            k_values.push(k);
            vp_values.push(omega / k);
        }

        if fd_values.len() < MIN_BRANCH_POINTS {
            continue;
        }

        let vg_values = group_velocities(&omega_values, &k_values);
        let curves = ModeCurves {
            vp: Interpolant::from_samples(fd_values.clone(), vp_values)?,
            vg: Interpolant::from_samples(fd_values.clone(), vg_values)?,
            k: Interpolant::from_samples(fd_values, k_values)?,
        };
        results.insert(format!("SH{mode}"), curves);
    }

    Ok(results)
}

/// vg = dω/dk by finite differences along the ω axis: central in the
/// interior, one-sided at the ends. k is strictly increasing over the
/// retained samples, so the denominators never vanish.
fn group_velocities(omega: &[f64], k: &[f64]) -> Vec<f64> {
    let n = omega.len();
    let mut vg = Vec::with_capacity(n);
    for i in 0..n {
        let (lo, hi) = if i == 0 {
            (0, 1)
        } else if i == n - 1 {
            (n - 2, n - 1)
        } else {
            (i - 1, i + 1)
        };
        vg.push((omega[hi] - omega[lo]) / (k[hi] - k[lo]));
    }
    vg
}
