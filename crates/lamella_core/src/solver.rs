//! Aggregation facade: one entry point per wave family.

use crate::branch;
use crate::cancel::CancelToken;
use crate::characteristic::ModeFamily;
use crate::curve::{ModeCurves, ResultSet};
use crate::error::Result;
use crate::plate::{Plate, SweepConfig};
use crate::sh;
use crate::tracker;

/// Computes the Lamb mode branches of `plate` over the sweep range.
///
/// Runs the symmetric family (labels "S0"...) and then the antisymmetric
/// family (labels "A0"...), post-processes each raw matrix, and merges the
/// per-mode curves into one result set. A requested mode that never
/// accumulated enough samples is absent from the map rather than an
/// error. Performs no I/O.
pub fn compute_lamb(plate: &Plate, sweep: &SweepConfig, cancel: &CancelToken) -> Result<ResultSet> {
    sweep.validate()?;

    let mut results = ResultSet::new();
    for (family, nmodes) in [
        (ModeFamily::Symmetric, sweep.nmodes_sym),
        (ModeFamily::Antisymmetric, sweep.nmodes_antisym),
    ] {
        if nmodes == 0 {
            continue;
        }
        let mut matrix = tracker::sweep_family(plate, sweep, family, nmodes, cancel)?;
        branch::repair_instability(&mut matrix, family);
        branch::sentinelize(&mut matrix);
        for mode_branch in branch::extract_branches(&matrix, family, nmodes) {
            let curves = ModeCurves::from_branch(&mode_branch, plate.thickness())?;
            results.insert(mode_branch.label, curves);
        }
    }
    Ok(results)
}

/// Computes the shear-horizontal mode branches ("SH0"...) in closed form.
pub fn compute_sh(plate: &Plate, sweep: &SweepConfig) -> Result<ResultSet> {
    sweep.validate()?;
    sh::generate(plate, sweep)
}
