//! # Kepler's equation for elliptical orbits
//!
//! Helpers used by the time-uniform sampling mode of the orbit sampler:
//!
//! - [`solve_kepler_equation`] – mean anomaly `M` → eccentric anomaly `E`
//!   by Newton–Raphson on `E − e·sin(E) − M = 0`.
//! - [`true_anomaly_from_eccentric`] – eccentric anomaly `E` → true anomaly `ν`,
//!   the polar angle measured from the focus.
//! - [`principal_angle`] – normalization into `[0, 2π)`.
//!
//! Only the elliptical regime `0 ≤ e < 1` is handled; callers validate the
//! eccentricity through [`OrbitalElements::new`](crate::orbital_elements::OrbitalElements::new).
use std::f64::consts::PI;

use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{
    constants::{Radian, DPI},
    neo_errors::NeoSceneError,
};

/// Eccentricity above which Newton's iteration starts from `π` instead of `M`.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Return the principal value of an angle in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// The mean anomaly is not normalized: `M = 2π` yields `E = 2π`, which keeps a
/// sweep over `[0, 2π]` monotonic.
///
/// Arguments
/// ---------
/// * `mean_anomaly` – `M` in radians.
/// * `eccentricity` – `e`, with `0 ≤ e < 1`.
///
/// Return
/// ------
/// * The eccentric anomaly `E` (radians), or a [`NeoSceneError::KeplerSolverError`]
///   if Newton–Raphson fails to converge.
pub fn solve_kepler_equation(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, NeoSceneError> {
    if eccentricity == 0.0 {
        return Ok(mean_anomaly);
    }

    let f = |ecc_anom: f64| -> f64 { ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly };
    let df = |ecc_anom: f64| -> f64 { 1.0 - eccentricity * ecc_anom.cos() };

    let x0 = if eccentricity < HIGH_ECCENTRICITY {
        mean_anomaly
    } else {
        PI + (mean_anomaly - PI) / 2.0
    };

    let mut tol = SimpleConvergency {
        eps: f64::EPSILON * 1e2,
        max_iter: 50,
    };

    Ok(find_root_newton_raphson(x0, &f, &df, &mut tol)?)
}

/// Convert an eccentric anomaly into the true anomaly.
///
/// Uses the half-angle form `ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`, which
/// maps `E ∈ [0, 2π]` onto `ν ∈ [0, 2π]` without wrapping.
pub fn true_anomaly_from_eccentric(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}
