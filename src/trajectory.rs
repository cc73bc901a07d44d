//! # Orbit sampling
//!
//! Turns a pair of orbital elements `(e, a)` into an ordered, closed polyline in the
//! orbital plane. The origin of the sampling is the **focus** of the conic (the Sun),
//! not the center of the ellipse, so perihelion lands on `+x` at distance `a·(1 − e)`
//! and aphelion on `−x` at distance `a·(1 + e)`.
//!
//! ## Polar conic equation
//!
//! ```text
//! r(θ) = a·(1 − e²) / (1 + e·cos θ)
//! x = r·cos θ,  y = r·sin θ,  z = 0
//! ```
//!
//! ## Sampling modes
//!
//! * [`SamplingMode::UniformAngle`] — `θᵢ = 2π·i/N`. Evenly spaced in polar angle, which
//!   over-represents the slow aphelion arc relative to the fast perihelion arc. This is the
//!   default and matches [`sample_orbit`].
//! * [`SamplingMode::TimeUniform`] — `Mᵢ = 2π·i/N` is the mean anomaly; each point sits at
//!   the true anomaly obtained through [Kepler's equation](crate::kepler::solve_kepler_equation),
//!   so consecutive points are separated by equal time steps.
//!
//! Both modes produce `N + 1` points in increasing angle, the last one closing the loop
//! on the first.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, Radian, DPI},
    kepler::{solve_kepler_equation, true_anomaly_from_eccentric},
    neo_errors::NeoSceneError,
};

/// A point of the orbital plane (AU); `z` is always zero.
pub type TrajectoryPoint = Vector3<f64>;

/// How sample angles are distributed along one revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Evenly spaced polar (true) anomaly.
    #[default]
    UniformAngle,
    /// Evenly spaced mean anomaly, i.e. evenly spaced in time.
    TimeUniform,
}

/// An ordered, closed sampling of one orbital revolution.
///
/// Serialized as a JSON array of `[x, y, z]` triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<TrajectoryPoint>);

impl Trajectory {
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.0.last()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<TrajectoryPoint> for Trajectory {
    fn from_iter<I: IntoIterator<Item = TrajectoryPoint>>(iter: I) -> Self {
        Trajectory(iter.into_iter().collect())
    }
}

/// Position on the focus-centered conic at polar angle `angle`.
#[inline]
fn conic_point(eccentricity: f64, semi_major_axis: AstronomicalUnit, angle: Radian) -> TrajectoryPoint {
    let (sin_angle, cos_angle) = angle.sin_cos();
    let r = semi_major_axis * (1. - eccentricity.powi(2)) / (1. + eccentricity * cos_angle);
    Vector3::new(r * cos_angle, r * sin_angle, 0.)
}

/// Sample one revolution at `num_points + 1` evenly spaced polar angles.
///
/// No validation is performed: `e ≥ 1` produces non-finite radii around `θ = π`, and
/// `num_points == 0` yields a single NaN point. Use
/// [`OrbitalElements::sample`](crate::orbital_elements::OrbitalElements::sample) for
/// the checked path.
///
/// Arguments
/// ---------
/// * `eccentricity` – `e`, expected in `[0, 1)`.
/// * `semi_major_axis` – `a` (AU), expected `> 0`.
/// * `num_points` – number of angular intervals `N`.
///
/// Return
/// ------
/// * A [`Trajectory`] of `N + 1` points, first at `θ = 0`, last at `θ = 2π`.
pub fn sample_orbit(eccentricity: f64, semi_major_axis: AstronomicalUnit, num_points: usize) -> Trajectory {
    (0..=num_points)
        .map(|i| {
            let angle = DPI * i as f64 / num_points as f64;
            conic_point(eccentricity, semi_major_axis, angle)
        })
        .collect()
}

/// Sample one revolution using the requested [`SamplingMode`].
///
/// In [`SamplingMode::UniformAngle`] this is exactly [`sample_orbit`]. In
/// [`SamplingMode::TimeUniform`] the Kepler solver may fail, which is reported as
/// [`NeoSceneError::KeplerSolverError`].
pub fn sample_orbit_with(
    eccentricity: f64,
    semi_major_axis: AstronomicalUnit,
    num_points: usize,
    mode: SamplingMode,
) -> Result<Trajectory, NeoSceneError> {
    match mode {
        SamplingMode::UniformAngle => Ok(sample_orbit(eccentricity, semi_major_axis, num_points)),
        SamplingMode::TimeUniform => (0..=num_points)
            .map(|i| {
                let mean_anomaly = DPI * i as f64 / num_points as f64;
                let ecc_anom = solve_kepler_equation(mean_anomaly, eccentricity)?;
                let true_anom = true_anomaly_from_eccentric(ecc_anom, eccentricity);
                Ok(conic_point(eccentricity, semi_major_axis, true_anom))
            })
            .collect(),
    }
}

#[cfg(test)]
mod trajectory_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_earth_four_points() {
        let traj = sample_orbit(0.0167, 1.0, 4);
        assert_eq!(traj.len(), 5);

        let r0 = (1.0 - 0.0167_f64.powi(2)) / (1.0 + 0.0167);
        assert_relative_eq!(r0, 0.98305, epsilon = 1e-5);

        let p0 = traj.points()[0];
        assert_relative_eq!(p0.x, r0, epsilon = 1e-15);
        assert_eq!(p0.y, 0.0);
        assert_eq!(p0.z, 0.0);

        // θ = π/2: r = a·(1 − e²), on +y
        let p1 = traj.points()[1];
        assert_relative_eq!(p1.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(p1.y, 1.0 - 0.0167_f64.powi(2), epsilon = 1e-15);

        // θ = π: aphelion on −x
        let p2 = traj.points()[2];
        assert_relative_eq!(p2.x, -(1.0 - 0.0167_f64.powi(2)) / (1.0 - 0.0167), epsilon = 1e-15);

        let p4 = traj.points()[4];
        assert_relative_eq!(p4.x, p0.x, epsilon = 1e-12);
        assert_relative_eq!(p4.y, p0.y, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_radius() {
        let traj = sample_orbit(0.0, 2.5, 37);
        for p in &traj {
            assert_relative_eq!(p.norm(), 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_perihelion_aphelion_at_focus() {
        let (e, a) = (0.5, 2.0);
        let traj = sample_orbit(e, a, 2);
        assert_relative_eq!(traj.points()[0].x, a * (1.0 - e), epsilon = 1e-12);
        assert_relative_eq!(traj.points()[1].x, -a * (1.0 + e), epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_angle_mode_matches_free_function() {
        let direct = sample_orbit(0.3, 1.2, 50);
        let moded = sample_orbit_with(0.3, 1.2, 50, SamplingMode::UniformAngle).unwrap();
        assert_eq!(direct, moded);
    }

    #[test]
    fn test_time_uniform_mode_shape() {
        let (e, a) = (0.6, 1.5);
        let traj = sample_orbit_with(e, a, 64, SamplingMode::TimeUniform).unwrap();
        assert_eq!(traj.len(), 65);

        // closed loop
        let first = traj.first().unwrap();
        let last = traj.last().unwrap();
        assert_relative_eq!((first - last).norm(), 0.0, epsilon = 1e-9);

        // every point on the conic
        let p = a * (1.0 - e * e);
        for pt in &traj {
            let theta = pt.y.atan2(pt.x);
            assert_relative_eq!(pt.norm(), p / (1.0 + e * theta.cos()), epsilon = 1e-9);
        }

        // mid-period lands on aphelion
        assert_relative_eq!(traj.points()[32].x, -a * (1.0 + e), epsilon = 1e-9);
    }

    #[test]
    fn test_time_uniform_points_cluster_at_aphelion() {
        // Equal time steps cover a larger angle near perihelion than near aphelion.
        let traj = sample_orbit_with(0.6, 1.0, 100, SamplingMode::TimeUniform).unwrap();
        let angle = |p: &TrajectoryPoint| p.y.atan2(p.x).rem_euclid(DPI);
        let near_peri = angle(&traj.points()[1]) - angle(&traj.points()[0]);
        let near_aph = angle(&traj.points()[51]) - angle(&traj.points()[50]);
        assert!(near_peri > near_aph);
        assert!(near_aph < PI / 50.0);
    }

    #[test]
    fn test_serialize_as_nested_arrays() {
        let traj = sample_orbit(0.0, 1.0, 2);
        let json = serde_json::to_value(&traj).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0], serde_json::json!([1.0, 0.0, 0.0]));
        assert_eq!(arr[1].as_array().unwrap().len(), 3);
    }
}
