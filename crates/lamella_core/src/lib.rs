//! Guided-wave dispersion curves for traction-free, homogeneous,
//! isotropic plates.
//!
//! Given a plate thickness and the material's bulk-wave speeds, the solver
//! produces, per requested mode, the relationship between the
//! frequency–thickness product fd (Hz·m, numerically equal to kHz·mm) and
//! phase velocity, group velocity, and wave number. Two families are
//! covered: Lamb modes (symmetric Sn and antisymmetric An, roots of the
//! Rayleigh–Lamb characteristic equation found by a sweep-and-bisect
//! tracker) and shear-horizontal modes (SHn, closed form).
//!
//! Key components:
//! - **Configuration**: [`Plate`], [`SweepConfig`], [`ElasticProperties`].
//! - **Solvers**: [`compute_lamb`] and [`compute_sh`], both returning a
//!   [`ResultSet`] of per-mode interpolants.
//! - **Curves**: [`Interpolant`] (domain / evaluate / samples) and
//!   [`ModeCurves`] (vp, vg, k per mode).
//! - **Export**: [`export::write_results`] tabulates the sample knots.
//!
//! The solver is single-threaded, synchronous, deterministic modulo the
//! platform's libm, holds no global state, and performs no I/O.

mod branch;
mod sh;
mod tracker;

pub mod cancel;
pub mod characteristic;
pub mod curve;
pub mod error;
pub mod export;
pub mod material;
pub mod plate;
pub mod solver;
pub mod spline;

pub use cancel::CancelToken;
pub use characteristic::{cutoff_frequencies, ModeFamily};
pub use curve::{Interpolant, ModeCurves, ResultSet};
pub use error::{Error, Result};
pub use material::{BulkVelocities, ElasticProperties};
pub use plate::{Plate, SweepConfig};
pub use solver::{compute_lamb, compute_sh};
