//! Dispersion curves for a 10 mm aluminum plate.

use std::io::Write;

use anyhow::Result;

use lamella_core::export::{write_results, Quantity};
use lamella_core::{compute_lamb, compute_sh, CancelToken, ElasticProperties, Plate, SweepConfig};

fn main() -> Result<()> {
    let aluminum = ElasticProperties::new(2700.0, 68.9e9, 0.33)?;
    let v = aluminum.bulk_velocities();

    let plate = Plate::new(10.0, v.c_l, v.c_s)?
        .with_rayleigh(v.c_r)
        .with_material("Aluminum");
    let sweep = SweepConfig::default();

    let lamb = compute_lamb(&plate, &sweep, &CancelToken::new())?;
    let sh = compute_sh(&plate, &sweep)?;

    for (label, curves) in lamb.iter().chain(sh.iter()) {
        let (fd_min, fd_max) = curves.vp.domain();
        println!(
            "{label}: fd in [{fd_min:.0}, {fd_max:.0}] Hz·m, {} samples",
            curves.vp.samples().0.len()
        );
    }

    let header = format!(
        "Material: {}\nThickness: {} mm\nLongitudinal wave velocity: {} m/s\nShear wave velocity: {} m/s\n",
        plate.material(),
        plate.thickness() * 1e3,
        plate.c_l(),
        plate.c_s()
    );
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout)?;
    write_results(&mut stdout, &lamb, Quantity::PhaseVelocity, &header)?;
    writeln!(stdout)?;
    write_results(&mut stdout, &sh, Quantity::PhaseVelocity, &header)?;
    Ok(())
}
