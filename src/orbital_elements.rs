//! # Planar orbital elements
//!
//! [`OrbitalElements`] carries the two elements the scene needs to draw an orbit:
//! the eccentricity `e` and the semi-major axis `a` (AU). Inclination, node and
//! argument of perihelion are deliberately absent: every orbit is drawn in its own
//! plane with perihelion on the +x axis.
//!
//! Instances can only be obtained through [`OrbitalElements::new`], which rejects
//! elements the conic equation cannot sample (`e ∉ [0, 1)`, `a ≤ 0`, non-finite
//! values). Once built, sampling a trajectory can only fail on a zero sample count
//! or on a Kepler solver failure in time-uniform mode.
//!
//! ## Example
//!
//! ```rust
//! use neoscene::orbital_elements::OrbitalElements;
//! use neoscene::trajectory::SamplingMode;
//!
//! let eros = OrbitalElements::new(0.2228, 1.458).unwrap();
//! let orbit = eros.sample(100, SamplingMode::UniformAngle).unwrap();
//! assert_eq!(orbit.len(), 101);
//!
//! assert!(OrbitalElements::new(1.0, 1.0).is_err());
//! ```
use std::fmt;

use crate::{
    constants::{AstronomicalUnit, EARTH_ECCENTRICITY, EARTH_SEMI_MAJOR_AXIS},
    neo_errors::NeoSceneError,
    trajectory::{sample_orbit_with, SamplingMode, Trajectory},
};

/// Validated elliptical orbital elements.
///
/// Units
/// -----
/// * `eccentricity`: unitless, `0 ≤ e < 1`.
/// * `semi_major_axis`: AU, `a > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    eccentricity: f64,
    semi_major_axis: AstronomicalUnit,
}

impl OrbitalElements {
    /// Build a new set of elements, checking that they describe an ellipse.
    ///
    /// Arguments
    /// ---------
    /// * `eccentricity` – must be finite and in `[0, 1)`.
    /// * `semi_major_axis` – must be finite and strictly positive (AU).
    ///
    /// Return
    /// ------
    /// * The validated elements, or [`NeoSceneError::InvalidEccentricity`] /
    ///   [`NeoSceneError::InvalidSemiMajorAxis`].
    pub fn new(eccentricity: f64, semi_major_axis: AstronomicalUnit) -> Result<Self, NeoSceneError> {
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(NeoSceneError::InvalidEccentricity(eccentricity));
        }
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(NeoSceneError::InvalidSemiMajorAxis(semi_major_axis));
        }
        Ok(OrbitalElements {
            eccentricity,
            semi_major_axis,
        })
    }

    /// Earth's heliocentric orbit, used as the fixed reference of every scene.
    pub fn earth() -> Self {
        OrbitalElements {
            eccentricity: EARTH_ECCENTRICITY,
            semi_major_axis: EARTH_SEMI_MAJOR_AXIS,
        }
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semi_major_axis(&self) -> AstronomicalUnit {
        self.semi_major_axis
    }

    /// Perihelion distance `q = a·(1 − e)` (AU).
    pub fn perihelion(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `Q = a·(1 + e)` (AU).
    pub fn aphelion(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Sample one full revolution of the orbit.
    ///
    /// Arguments
    /// ---------
    /// * `num_points` – number of intervals; the trajectory holds `num_points + 1` points.
    /// * `mode` – uniform polar angle or uniform mean anomaly, see [`SamplingMode`].
    ///
    /// Return
    /// ------
    /// * The sampled [`Trajectory`], or [`NeoSceneError::InvalidSampleCount`] when
    ///   `num_points` is zero.
    pub fn sample(&self, num_points: usize, mode: SamplingMode) -> Result<Trajectory, NeoSceneError> {
        if num_points == 0 {
            return Err(NeoSceneError::InvalidSampleCount(num_points));
        }
        sample_orbit_with(self.eccentricity, self.semi_major_axis, num_points, mode)
    }
}

impl Default for OrbitalElements {
    fn default() -> Self {
        Self::earth()
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "e = {:.6}, a = {:.6} AU (q = {:.6} AU, Q = {:.6} AU)",
            self.eccentricity,
            self.semi_major_axis,
            self.perihelion(),
            self.aphelion()
        )
    }
}
