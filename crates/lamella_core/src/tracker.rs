//! Two-dimensional root tracker for the Rayleigh–Lamb residuals.
//!
//! For each fd slice the tracker probes the phase-velocity axis in coarse
//! vp_step intervals, bisects every sign change, and files the accepted
//! roots into the raw result matrix in ascending vp order. The matrix is
//! the input to the post-processing passes in [`crate::branch`].

use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::cancel::CancelToken;
use crate::characteristic::{Characteristic, ModeFamily};
use crate::error::{Error, Result};
use crate::plate::{Plate, SweepConfig};

/// Largest |residual| at which a bisection result counts as a root. A
/// bisection that homed in on one of the sign-only singularities of the
/// characteristic function converges to a point of large residual, and
/// this threshold is what filters those out.
pub(crate) const RESIDUAL_ACCEPT: f64 = 1e-2;

/// Relative tolerance of the forbidden-bulk-speed exclusion.
pub(crate) const BULK_SPEED_RTOL: f64 = 1e-5;

/// Absolute tolerance of the forbidden-bulk-speed exclusion.
pub(crate) const BULK_SPEED_ATOL: f64 = 1e-8;

/// Absolute half-interval width at which bisection stops.
pub(crate) const BISECT_XTOL: f64 = 2e-12;

/// Iteration cap for a single bisection run.
pub(crate) const BISECT_MAX_ITER: usize = 100;

/// Sweeps one family over the fd grid and returns the raw result matrix:
/// column 0 holds the fd samples (strictly increasing), columns 1..=nmodes
/// the per-mode phase velocities, 0.0 where no root was assigned.
///
/// Spurious roots accumulate at one bulk speed per family (cS for
/// symmetric, cL for antisymmetric); bisection results numerically at that
/// speed are discarded without consuming a mode slot, as are results that
/// fail the residual threshold. Sparse slices are legitimate output; the
/// tracker only errors on cancellation.
pub(crate) fn sweep_family(
    plate: &Plate,
    sweep: &SweepConfig,
    family: ModeFamily,
    nmodes: usize,
    cancel: &CancelToken,
) -> Result<DMatrix<f64>> {
    let mut matrix = DMatrix::zeros(sweep.fd_points, nmodes + 1);
    let mut chi = Characteristic::with_cache(plate);
    let forbidden = family.forbidden_speed(plate);
    let denom = (sweep.fd_points - 1) as f64;

    for i in 0..sweep.fd_points {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let fd = sweep.fd_max * i as f64 / denom;
        matrix[(i, 0)] = fd;

        let mut j = 1;
        let mut vp_1 = 0.0;
        let mut vp_2 = sweep.vp_step;
        let mut rejected = 0usize;

        while vp_2 < sweep.vp_max && j <= nmodes {
            let x_1 = chi.evaluate(family, vp_1, fd);
            let x_2 = chi.evaluate(family, vp_2, fd);

            if x_1.is_finite() && x_2.is_finite() && x_1 * x_2 < 0.0 {
                let root = bisect(&mut chi, family, fd, vp_1, vp_2, x_1);
                let residual = chi.evaluate(family, root, fd);
                if residual.abs() < RESIDUAL_ACCEPT && !near_bulk_speed(root, forbidden) {
                    matrix[(i, j)] = root;
                    j += 1;
                } else {
                    rejected += 1;
                    trace!(fd, root, residual, "discarded candidate root");
                }
            }

            vp_1 = vp_2;
            vp_2 += sweep.vp_step;
        }

        if rejected > 0 {
            debug!(
                family = family.label(),
                fd, rejected, "slice rejected candidate roots"
            );
        }
    }

    Ok(matrix)
}

/// Deterministic bisection of the residual over [a, b], where the
/// endpoint signs differ and f(a) = f_a. A non-finite midpoint value
/// keeps the left endpoint moving, which steers the run toward the far
/// end; whatever point that produces is vetted by the residual threshold
/// afterwards.
fn bisect(
    chi: &mut Characteristic<'_>,
    family: ModeFamily,
    fd: f64,
    mut a: f64,
    mut b: f64,
    mut f_a: f64,
) -> f64 {
    let mut mid = 0.5 * (a + b);
    for _ in 0..BISECT_MAX_ITER {
        if 0.5 * (b - a) < BISECT_XTOL {
            break;
        }
        let f_mid = chi.evaluate(family, mid, fd);
        if f_mid == 0.0 {
            return mid;
        }
        if f_a * f_mid < 0.0 {
            b = mid;
        } else {
            a = mid;
            f_a = f_mid;
        }
        mid = 0.5 * (a + b);
    }
    mid
}

/// isclose semantics: |a − b| ≤ atol + rtol·|b|.
fn near_bulk_speed(root: f64, bulk: f64) -> bool {
    (root - bulk).abs() <= BULK_SPEED_ATOL + BULK_SPEED_RTOL * bulk.abs()
}
