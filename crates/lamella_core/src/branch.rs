//! Raw-matrix post-processing: instability repair, sentinel filtering,
//! and branch extraction.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::characteristic::ModeFamily;

/// Minimum number of samples a mode must accumulate before an interpolant
/// is built; shorter branches are dropped from the result set.
pub(crate) const MIN_BRANCH_POINTS: usize = 4;

/// The NaN-free samples of one dispersion branch, strictly increasing in
/// fd.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ModeBranch {
    pub label: String,
    pub fd: Vec<f64>,
    pub vp: Vec<f64>,
}

/// Repairs the mode-assignment jogs produced when two roots of adjacent
/// modes pass close to each other: the characteristic function then
/// changes sign twice inside one vp_step interval, one root goes missing,
/// and from the next fd slice on the surviving roots land one column too
/// far left.
///
/// Phase velocity is monotone non-increasing along every mode column
/// except A0, which is strictly increasing and exempt (the antisymmetric
/// scan starts one column later). Scanning each column top to bottom, a
/// cell that rises above the last accepted value belongs to the next
/// higher-order mode: the row is shifted one column rightward from the
/// violating cell (the last column's value falls off) and the source cell
/// is zeroed. The first non-zero cell of a column seeds the scan and
/// never shifts.
///
/// One pass, best effort: a single colliding pair per row is restored
/// exactly; rows where three or more modes bunch can still come out wrong.
pub(crate) fn repair_instability(matrix: &mut DMatrix<f64>, family: ModeFamily) {
    let nrows = matrix.nrows();
    let ncols = matrix.ncols();
    for col in family.repair_start_column()..ncols {
        let mut last = f64::INFINITY;
        for row in 0..nrows {
            let cur = matrix[(row, col)];
            if cur == 0.0 {
                continue;
            }
            if cur > last {
                for c in (col + 1..ncols).rev() {
                    matrix[(row, c)] = matrix[(row, c - 1)];
                }
                matrix[(row, col)] = 0.0;
            } else {
                last = cur;
            }
        }
    }
}

/// Replaces the 0.0 placeholder with NaN across the whole matrix. The fd
/// column is included on purpose: the fd = 0 row never carries roots and
/// drops out with the other incomplete rows during extraction.
pub(crate) fn sentinelize(matrix: &mut DMatrix<f64>) {
    for cell in matrix.iter_mut() {
        if *cell == 0.0 {
            *cell = f64::NAN;
        }
    }
}

/// Stacks each mode column with the fd column, drops rows where either
/// coordinate is NaN, and keeps the branches long enough to interpolate.
pub(crate) fn extract_branches(
    matrix: &DMatrix<f64>,
    family: ModeFamily,
    nmodes: usize,
) -> Vec<ModeBranch> {
    let mut branches = Vec::new();
    for mode in 0..nmodes {
        let col = mode + 1;
        if col >= matrix.ncols() {
            break;
        }
        let mut fd = Vec::new();
        let mut vp = Vec::new();
        for row in 0..matrix.nrows() {
            let fd_val = matrix[(row, 0)];
            let vp_val = matrix[(row, col)];
            if fd_val.is_nan() || vp_val.is_nan() {
                continue;
            }
            fd.push(fd_val);
            vp.push(vp_val);
        }
        if fd.len() >= MIN_BRANCH_POINTS {
            branches.push(ModeBranch {
                label: format!("{}{}", family.label(), mode),
                fd,
                vp,
            });
        }
    }
    branches
}

#[cfg(test)]
mod tests {
    use super::{extract_branches, repair_instability, sentinelize, ModeBranch};
    use crate::characteristic::ModeFamily;
    use nalgebra::DMatrix;

    /// Rows of (fd, mode columns...) into a DMatrix.
    fn matrix_from_rows(rows: &[&[f64]]) -> DMatrix<f64> {
        let nrows = rows.len();
        let ncols = rows[0].len();
        DMatrix::from_fn(nrows, ncols, |r, c| rows[r][c])
    }

    #[test]
    fn repairs_a_single_jog_between_adjacent_modes() {
        // Row 2 lost its S0 root; the S1 value 5400 sits in the S0 column.
        let mut m = matrix_from_rows(&[
            &[100.0, 3100.0, 5500.0],
            &[200.0, 3050.0, 5450.0],
            &[300.0, 5400.0, 0.0],
            &[400.0, 2950.0, 5350.0],
        ]);
        repair_instability(&mut m, ModeFamily::Symmetric);
        assert_eq!(m[(2, 1)], 0.0, "jogged cell is vacated");
        assert_eq!(m[(2, 2)], 5400.0, "value moved to the S1 column");
        assert_eq!(m[(3, 1)], 2950.0, "later rows untouched");
    }

    #[test]
    fn a0_column_is_exempt_for_the_antisymmetric_family() {
        // A0 is strictly increasing; an increasing column 1 must survive.
        let mut m = matrix_from_rows(&[
            &[100.0, 500.0, 6000.0],
            &[200.0, 800.0, 5900.0],
            &[300.0, 1100.0, 5800.0],
        ]);
        let before = m.clone();
        repair_instability(&mut m, ModeFamily::Antisymmetric);
        assert_eq!(m, before);
    }

    #[test]
    fn symmetric_repair_covers_the_s0_column() {
        let mut m = matrix_from_rows(&[
            &[100.0, 3000.0, 0.0],
            &[200.0, 3200.0, 0.0],
        ]);
        repair_instability(&mut m, ModeFamily::Symmetric);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m[(1, 2)], 3200.0);
    }

    #[test]
    fn column_head_never_shifts() {
        // First non-zero cell of S1 is larger than nothing that precedes
        // it; the scan must seed from it instead of displacing it.
        let mut m = matrix_from_rows(&[
            &[100.0, 3100.0, 0.0],
            &[200.0, 3050.0, 5450.0],
            &[300.0, 3000.0, 5400.0],
        ]);
        let before = m.clone();
        repair_instability(&mut m, ModeFamily::Symmetric);
        assert_eq!(m, before);
    }

    #[test]
    fn repair_leaves_triple_collision_unrepaired() {
        // A spurious low value entering the S0 column displaces the
        // genuine S1 values that follow it: the one-pass repair only
        // restores a single colliding pair, and this pinned outcome is
        // the known limitation for bunched modes.
        let mut m = matrix_from_rows(&[
            &[100.0, 3100.0, 5500.0],
            &[200.0, 3050.0, 5450.0],
            &[300.0, 4000.0, 5400.0],
            &[400.0, 3000.0, 5350.0],
            &[500.0, 2950.0, 5300.0],
        ]);
        repair_instability(&mut m, ModeFamily::Symmetric);
        // The spurious 4000 is pushed into S1, overwriting 5400...
        assert_eq!(m[(2, 2)], 4000.0);
        // ...and then poisons the S1 scan: the genuine tail is shifted
        // off the matrix instead of kept.
        assert_eq!(m[(3, 2)], 0.0);
        assert_eq!(m[(4, 2)], 0.0);
    }

    #[test]
    fn sentinelize_marks_every_placeholder() {
        let mut m = matrix_from_rows(&[&[0.0, 0.0, 3000.0], &[100.0, 2900.0, 0.0]]);
        sentinelize(&mut m);
        assert!(m[(0, 0)].is_nan(), "the fd = 0 cell is sentinelized too");
        assert!(m[(0, 1)].is_nan());
        assert_eq!(m[(0, 2)], 3000.0);
        assert!(m[(1, 2)].is_nan());
    }

    #[test]
    fn extraction_drops_incomplete_rows_and_short_branches() {
        let nan = f64::NAN;
        let mut m = matrix_from_rows(&[
            &[nan, nan, nan],
            &[100.0, 3100.0, nan],
            &[200.0, 3050.0, nan],
            &[300.0, 3000.0, 5400.0],
            &[400.0, 2950.0, 5350.0],
            &[500.0, 2900.0, 5300.0],
        ]);
        sentinelize(&mut m);
        let branches = extract_branches(&m, ModeFamily::Symmetric, 2);
        // S1 only accumulated 3 samples and is dropped.
        assert_eq!(branches.len(), 1);
        let s0 = &branches[0];
        assert_eq!(
            s0,
            &ModeBranch {
                label: "S0".into(),
                fd: vec![100.0, 200.0, 300.0, 400.0, 500.0],
                vp: vec![3100.0, 3050.0, 3000.0, 2950.0, 2900.0],
            }
        );
    }
}
