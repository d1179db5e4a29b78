//! Plain-text tabulation of a result set.
//!
//! One quantity per table, one (fd, value) column pair per mode, values
//! rounded to 0.1. The caller owns the writer; the core opens no files.
//! Spreadsheet formats and column-naming policy are external concerns;
//! this is the raw-knot dump behind them.

use std::io::{self, Write};

use crate::curve::{Interpolant, ModeCurves, ResultSet};

/// Which derived curve a table lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    PhaseVelocity,
    GroupVelocity,
    WaveNumber,
}

impl Quantity {
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::PhaseVelocity => "vp [m/s]",
            Quantity::GroupVelocity => "vg [m/s]",
            Quantity::WaveNumber => "k [1/m]",
        }
    }

    fn select<'a>(&self, curves: &'a ModeCurves) -> &'a Interpolant {
        match self {
            Quantity::PhaseVelocity => &curves.vp,
            Quantity::GroupVelocity => &curves.vg,
            Quantity::WaveNumber => &curves.k,
        }
    }
}

/// Writes the sample knots of one quantity for every mode in `results`,
/// tab-separated, under a caller-supplied header block. Modes appear in
/// map order; rows are padded with blanks once a shorter mode runs out of
/// samples.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &ResultSet,
    quantity: Quantity,
    header: &str,
) -> io::Result<()> {
    if !header.is_empty() {
        writeln!(out, "{header}")?;
    }

    let labels: Vec<&str> = results.keys().map(String::as_str).collect();
    writeln!(out, "{}", labels.join("\t\t"))?;

    let heads: Vec<String> = labels
        .iter()
        .map(|_| format!("fd [kHz mm]\t{}", quantity.label()))
        .collect();
    writeln!(out, "{}", heads.join("\t"))?;

    let series: Vec<(&[f64], &[f64])> = results
        .values()
        .map(|curves| quantity.select(curves).samples())
        .collect();
    let rows = series.iter().map(|(fd, _)| fd.len()).max().unwrap_or(0);

    for row in 0..rows {
        let cells: Vec<String> = series
            .iter()
            .map(|(fd, values)| {
                if row < fd.len() {
                    format!("{:.1}\t{:.1}", fd[row], values[row])
                } else {
                    "\t".to_string()
                }
            })
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}
