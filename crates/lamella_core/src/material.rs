//! Derivation of bulk-wave speeds from elastic constants.
//!
//! The material catalog itself (name → properties lookup) is external to
//! this crate; callers resolve a material however they like and pass the
//! resulting constants here to obtain the velocities the solver consumes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Elastic constants of a homogeneous isotropic material, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticProperties {
    /// Mass density ρ, in kg/m³.
    pub density: f64,
    /// Young's modulus E, in Pa.
    pub youngs_modulus: f64,
    /// Poisson's ratio ν, dimensionless.
    pub poisson_ratio: f64,
}

/// Bulk-wave speeds of an isotropic material, in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkVelocities {
    /// Longitudinal wave speed cL.
    pub c_l: f64,
    /// Shear wave speed cS.
    pub c_s: f64,
    /// Rayleigh wave speed cR (Bergmann approximation).
    pub c_r: f64,
}

impl ElasticProperties {
    pub fn new(density: f64, youngs_modulus: f64, poisson_ratio: f64) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "density must be positive, got {density}"
            )));
        }
        if !youngs_modulus.is_finite() || youngs_modulus <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "Young's modulus must be positive, got {youngs_modulus}"
            )));
        }
        if !poisson_ratio.is_finite() || poisson_ratio <= 0.0 || poisson_ratio >= 0.5 {
            return Err(Error::InvalidConfig(format!(
                "Poisson's ratio must lie in (0, 0.5), got {poisson_ratio}"
            )));
        }
        Ok(Self {
            density,
            youngs_modulus,
            poisson_ratio,
        })
    }

    /// Standard isotropic elasticity formulas:
    ///
    /// cL = √(E(1−ν) / (ρ(1+ν)(1−2ν)))
    /// cS = √(E / (2ρ(1+ν)))
    /// cR ≈ cS·(0.862 + 1.14ν) / (1+ν)
    pub fn bulk_velocities(&self) -> BulkVelocities {
        let e = self.youngs_modulus;
        let rho = self.density;
        let nu = self.poisson_ratio;

        let c_l = (e * (1.0 - nu) / (rho * (1.0 + nu) * (1.0 - 2.0 * nu))).sqrt();
        let c_s = (e / (2.0 * rho * (1.0 + nu))).sqrt();
        let c_r = c_s * (0.862 + 1.14 * nu) / (1.0 + nu);

        BulkVelocities { c_l, c_s, c_r }
    }
}

#[cfg(test)]
mod tests {
    use super::ElasticProperties;

    #[test]
    fn aluminum_velocities_match_reference_values() {
        let aluminum = ElasticProperties::new(2700.0, 68.9e9, 0.33).expect("valid constants");
        let v = aluminum.bulk_velocities();

        assert!((v.c_l - 6149.0).abs() < 15.0, "cL = {}", v.c_l);
        assert!((v.c_s - 3097.0).abs() < 10.0, "cS = {}", v.c_s);
        assert!((v.c_r - 2884.0).abs() < 10.0, "cR = {}", v.c_r);
        assert!(v.c_r < v.c_s && v.c_s < v.c_l);
    }

    #[test]
    fn rejects_nonphysical_constants() {
        assert!(ElasticProperties::new(-1.0, 68.9e9, 0.33).is_err());
        assert!(ElasticProperties::new(2700.0, 0.0, 0.33).is_err());
        assert!(ElasticProperties::new(2700.0, 68.9e9, 0.5).is_err());
        assert!(ElasticProperties::new(2700.0, 68.9e9, f64::NAN).is_err());
    }
}
