mod common;

use std::f64::consts::PI;

use approx::assert_relative_eq;
use common::assert_point_close;
use nalgebra::Vector3;
use neoscene::{
    orbital_elements::OrbitalElements,
    trajectory::{sample_orbit, sample_orbit_with, SamplingMode},
};
use proptest::prelude::*;

#[test]
fn test_earth_reference_four_points() {
    let traj = sample_orbit(0.0167, 1.0, 4);
    assert_eq!(traj.len(), 5);

    let e: f64 = 0.0167;
    let p = 1.0 - e * e;
    let expected = [
        Vector3::new(p / (1.0 + e), 0.0, 0.0),
        Vector3::new(0.0, p, 0.0),
        Vector3::new(-p / (1.0 - e), 0.0, 0.0),
        Vector3::new(0.0, -p, 0.0),
        Vector3::new(p / (1.0 + e), 0.0, 0.0),
    ];
    for (actual, expected) in traj.iter().zip(expected.iter()) {
        assert_point_close(actual, expected, 1e-12);
    }
    assert_relative_eq!(traj.points()[0].x, 0.98305, epsilon = 1e-5);
}

#[test]
fn test_default_resolution() {
    let traj = OrbitalElements::earth()
        .sample(100, SamplingMode::default())
        .unwrap();
    assert_eq!(traj.len(), 101);
}

#[test]
fn test_points_in_increasing_angle() {
    let traj = sample_orbit(0.4, 1.8, 40);
    let angles: Vec<f64> = traj
        .iter()
        .take(40)
        .map(|p| p.y.atan2(p.x).rem_euclid(2.0 * PI))
        .collect();
    assert!(angles.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_unchecked_parabolic_orbit_is_not_finite() {
    // e = 1 divides by zero at θ = π
    let traj = sample_orbit(1.0, 1.0, 2);
    assert!(!traj.points()[1].x.is_finite());
    assert!(OrbitalElements::new(1.0, 1.0).is_err());
}

proptest! {
    #[test]
    fn prop_point_count_and_closure(
        e in 0.0f64..0.95,
        a in 0.1f64..50.0,
        n in 1usize..400,
    ) {
        let traj = sample_orbit(e, a, n);
        prop_assert_eq!(traj.len(), n + 1);
        let first = traj.first().unwrap();
        let last = traj.last().unwrap();
        prop_assert!((first - last).norm() <= 1e-9 * a);
        prop_assert!(traj.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn prop_circle_has_constant_radius(a in 0.1f64..50.0, n in 1usize..400) {
        let traj = sample_orbit(0.0, a, n);
        for p in &traj {
            prop_assert!((p.norm() - a).abs() <= 1e-12 * a);
        }
    }

    #[test]
    fn prop_radius_between_perihelion_and_aphelion(
        e in 0.0f64..0.95,
        a in 0.1f64..50.0,
    ) {
        let elements = OrbitalElements::new(e, a).unwrap();
        let traj = elements.sample(64, SamplingMode::UniformAngle).unwrap();
        let tol = 1e-9 * a;
        for p in &traj {
            prop_assert!(p.norm() >= elements.perihelion() - tol);
            prop_assert!(p.norm() <= elements.aphelion() + tol);
        }
    }

    #[test]
    fn prop_time_uniform_keeps_count_and_closure(
        e in 0.0f64..0.95,
        a in 0.1f64..50.0,
        n in 1usize..200,
    ) {
        let traj = sample_orbit_with(e, a, n, SamplingMode::TimeUniform).unwrap();
        prop_assert_eq!(traj.len(), n + 1);
        let first = traj.first().unwrap();
        let last = traj.last().unwrap();
        prop_assert!((first - last).norm() <= 1e-8 * a);
    }
}
