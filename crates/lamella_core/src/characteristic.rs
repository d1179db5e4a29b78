//! Rayleigh–Lamb characteristic function.
//!
//! The residuals evaluated here are transcendental in (vp, fd); their roots
//! are the modal phase velocities the tracker assembles into dispersion
//! branches. Both residuals are complex-valued expressions of which only
//! the **real part** is used for root finding. This mirrors the program
//! this solver was modelled on: roots whose imaginary part is large but
//! whose real part crosses zero are accepted. The imaginary part is
//! discarded deliberately, which restricts the solver to purely
//! propagating roots.

use std::collections::HashMap;
use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::plate::Plate;

/// The two Lamb wave families, named for the symmetry of their motion
/// about the plate mid-plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeFamily {
    Symmetric,
    Antisymmetric,
}

impl ModeFamily {
    /// Mode label prefix: "S" or "A".
    pub fn label(&self) -> &'static str {
        match self {
            ModeFamily::Symmetric => "S",
            ModeFamily::Antisymmetric => "A",
        }
    }

    /// The bulk speed at which spurious roots of this family accumulate.
    /// Bisection results numerically at this speed are discarded.
    pub(crate) fn forbidden_speed(&self, plate: &Plate) -> f64 {
        match self {
            ModeFamily::Symmetric => plate.c_s(),
            ModeFamily::Antisymmetric => plate.c_l(),
        }
    }

    /// First raw-matrix column the instability repair applies to. A0 is
    /// strictly increasing in fd and exempt; every other mode column is
    /// non-increasing.
    pub(crate) fn repair_start_column(&self) -> usize {
        match self {
            ModeFamily::Symmetric => 1,
            ModeFamily::Antisymmetric => 2,
        }
    }
}

/// Evaluator for the Rayleigh–Lamb residuals of a fixed plate.
///
/// Pure in (vp, fd); the optional memo of (vp, fd) → (k, p, q) is owned by
/// this instance and therefore by a single compute invocation. The tracker
/// revisits each probe point as the next interval's left endpoint and once
/// more when vetting a bisection result, which is what the memo saves.
pub struct Characteristic<'a> {
    plate: &'a Plate,
    cache: Option<HashMap<(u64, u64), (f64, Complex64, Complex64)>>,
}

impl<'a> Characteristic<'a> {
    pub fn new(plate: &'a Plate) -> Self {
        Self { plate, cache: None }
    }

    pub fn with_cache(plate: &'a Plate) -> Self {
        Self {
            plate,
            cache: Some(HashMap::new()),
        }
    }

    /// Wavenumber k and the constants p, q of the dispersion relations:
    ///
    /// ω = 2π·fd/d,  k = ω/vp,  p = √((ω/cL)² − k²),  q = √((ω/cS)² − k²)
    ///
    /// p and q are complex so that evanescent regions (negative radicand)
    /// are admitted.
    fn constants(&mut self, vp: f64, fd: f64) -> (f64, Complex64, Complex64) {
        let key = (vp.to_bits(), fd.to_bits());
        if let Some(cache) = &self.cache {
            if let Some(&hit) = cache.get(&key) {
                return hit;
            }
        }

        let omega = 2.0 * PI * (fd / self.plate.thickness());
        let k = omega / vp;
        let p = Complex64::new((omega / self.plate.c_l()).powi(2) - k * k, 0.0).sqrt();
        let q = Complex64::new((omega / self.plate.c_s()).powi(2) - k * k, 0.0).sqrt();

        if let Some(cache) = &mut self.cache {
            cache.insert(key, (k, p, q));
        }
        (k, p, q)
    }

    /// Real part of the characteristic residual at (vp, fd).
    ///
    /// Symmetric:      tan(q·h)/q + 4·k²·p·tan(p·h) / (q² − k²)²
    /// Antisymmetric:  q·tan(q·h) + (q² − k²)²·tan(p·h) / (4·k²·p)
    ///
    /// At isolated singular points (q² = k², divergent tangents, vp = 0,
    /// fd = 0) the result is NaN or ±∞; the tracker treats non-finite
    /// values as "no information".
    pub fn evaluate(&mut self, family: ModeFamily, vp: f64, fd: f64) -> f64 {
        let (k, p, q) = self.constants(vp, fd);
        let h = self.plate.half_thickness();
        let k2 = k * k;
        let d = q * q - k2;

        let residual = match family {
            ModeFamily::Symmetric => (q * h).tan() / q + (p * h).tan() * p * (4.0 * k2) / (d * d),
            ModeFamily::Antisymmetric => q * (q * h).tan() + d * d * (p * h).tan() / (p * (4.0 * k2)),
        };
        residual.re
    }
}

/// Frequency–thickness values (Hz·m) at which the given mode becomes
/// propagating, with n = order + 1: symmetric modes cut off at n·cS (plus
/// n·cL/2 when n is odd), antisymmetric modes at n·cL (plus n·cS/2 when n
/// is odd). Returned in ascending order.
pub fn cutoff_frequencies(family: ModeFamily, order: usize, c_l: f64, c_s: f64) -> Vec<f64> {
    let n = (order + 1) as f64;
    let mut cutoffs = match family {
        ModeFamily::Symmetric => vec![n * c_s],
        ModeFamily::Antisymmetric => vec![n * c_l],
    };
    if (order + 1) % 2 != 0 {
        cutoffs.push(match family {
            ModeFamily::Symmetric => n * c_l / 2.0,
            ModeFamily::Antisymmetric => n * c_s / 2.0,
        });
    }
    cutoffs.sort_by(|a, b| a.total_cmp(b));
    cutoffs
}
