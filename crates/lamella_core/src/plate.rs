use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A traction-free, homogeneous, isotropic plate.
///
/// Immutable once constructed. Thickness is taken in millimetres at the
/// constructor boundary and stored in metres; everything else in this crate
/// is SI throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    thickness: f64,
    half_thickness: f64,
    c_l: f64,
    c_s: f64,
    c_r: Option<f64>,
    material: String,
}

impl Plate {
    /// Builds a plate from its thickness (mm) and bulk-wave speeds (m/s).
    pub fn new(thickness_mm: f64, c_l: f64, c_s: f64) -> Result<Self> {
        if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "plate thickness must be positive, got {thickness_mm} mm"
            )));
        }
        if !c_s.is_finite() || c_s <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "shear wave speed must be positive, got {c_s} m/s"
            )));
        }
        if !c_l.is_finite() || c_l <= c_s {
            return Err(Error::InvalidConfig(format!(
                "longitudinal wave speed must exceed the shear wave speed, got cL = {c_l}, cS = {c_s}"
            )));
        }
        let thickness = thickness_mm / 1e3;
        Ok(Self {
            thickness,
            half_thickness: thickness / 2.0,
            c_l,
            c_s,
            c_r: None,
            material: String::new(),
        })
    }

    /// Attaches the Rayleigh wave speed (m/s). Only used for titling and
    /// export; the solver itself never consumes it.
    pub fn with_rayleigh(mut self, c_r: f64) -> Self {
        self.c_r = Some(c_r);
        self
    }

    /// Attaches a material label. Opaque to the solver.
    pub fn with_material(mut self, name: impl Into<String>) -> Self {
        self.material = name.into();
        self
    }

    /// Full thickness d, in metres.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Half thickness h = d/2, in metres.
    pub fn half_thickness(&self) -> f64 {
        self.half_thickness
    }

    /// Longitudinal bulk-wave speed cL, in m/s.
    pub fn c_l(&self) -> f64 {
        self.c_l
    }

    /// Shear bulk-wave speed cS, in m/s.
    pub fn c_s(&self) -> f64 {
        self.c_s
    }

    pub fn c_r(&self) -> Option<f64> {
        self.c_r
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}

/// Sweep bounds and grid resolution for a dispersion computation.
///
/// `fd_max` is the frequency–thickness upper bound in Hz·m (numerically
/// equal to kHz·mm), `vp_max` the phase-velocity upper bound in m/s,
/// `fd_points` the number of samples along the fd axis, and `vp_step` the
/// coarse phase-velocity probe spacing inside each fd slice. Mode counts
/// are per family; a count of zero skips the family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub fd_max: f64,
    pub vp_max: f64,
    pub fd_points: usize,
    pub vp_step: f64,
    pub nmodes_sym: usize,
    pub nmodes_antisym: usize,
    pub nmodes_sh: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            fd_max: 10_000.0,
            vp_max: 15_000.0,
            fd_points: 100,
            vp_step: 100.0,
            nmodes_sym: 5,
            nmodes_antisym: 5,
            nmodes_sh: 5,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.fd_max.is_finite() || self.fd_max <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "fd_max must be positive, got {}",
                self.fd_max
            )));
        }
        if !self.vp_step.is_finite() || self.vp_step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "vp_step must be positive, got {}",
                self.vp_step
            )));
        }
        if !self.vp_max.is_finite() || self.vp_max <= self.vp_step {
            return Err(Error::InvalidConfig(format!(
                "vp_max must exceed vp_step, got vp_max = {}, vp_step = {}",
                self.vp_max, self.vp_step
            )));
        }
        if self.fd_points < 2 {
            return Err(Error::InvalidConfig(format!(
                "fd_points must be at least 2, got {}",
                self.fd_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Plate, SweepConfig};

    #[test]
    fn thickness_is_converted_to_metres() {
        let plate = Plate::new(10.0, 6149.0, 3097.0).expect("valid plate");
        assert_eq!(plate.thickness(), 0.01);
        assert_eq!(plate.half_thickness(), 0.005);
    }

    #[test]
    fn rejects_invalid_geometry_and_speeds() {
        assert!(Plate::new(0.0, 6149.0, 3097.0).is_err());
        assert!(Plate::new(10.0, 6149.0, 0.0).is_err());
        // cL must strictly exceed cS.
        assert!(Plate::new(10.0, 3097.0, 3097.0).is_err());
        assert!(Plate::new(f64::NAN, 6149.0, 3097.0).is_err());
    }

    #[test]
    fn default_sweep_is_valid() {
        assert!(SweepConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_sweeps() {
        let mut sweep = SweepConfig::default();
        sweep.fd_points = 1;
        assert!(sweep.validate().is_err());

        let mut sweep = SweepConfig::default();
        sweep.vp_step = 0.0;
        assert!(sweep.validate().is_err());

        let mut sweep = SweepConfig::default();
        sweep.vp_max = sweep.vp_step;
        assert!(sweep.validate().is_err());

        let mut sweep = SweepConfig::default();
        sweep.fd_max = -1.0;
        assert!(sweep.validate().is_err());
    }
}
