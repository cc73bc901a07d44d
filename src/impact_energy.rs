//! # Impact kinetic energy
//!
//! Estimates the kinetic energy an asteroid would deliver on impact, assuming a
//! homogeneous sphere of given diameter and bulk density hitting at its close-approach
//! relative velocity. The result is expressed in kilotons of TNT.
//!
//! ```text
//! m = ρ · (4/3)·π·(d/2)³
//! E = ½ · m · (1000·v)²  [J]
//! E_kt = E / 4.184e12
//! ```
//!
//! [`estimate_impact_energy_kt`] is the raw formula. [`PhysicalBody`] is the checked
//! path: it refuses non-physical inputs before anything is computed.
use std::f64::consts::PI;

use crate::{
    constants::{
        KgPerCubicMeter, KilotonTnt, KmPerSecond, Meter, DEFAULT_DENSITY_KG_M3,
        JOULES_PER_KILOTON_TNT, METERS_PER_KILOMETER,
    },
    neo_errors::NeoSceneError,
};

/// Kinetic energy of a spherical impactor in kilotons of TNT.
///
/// No validation is performed; a zero diameter gives zero energy and negative inputs give
/// physically meaningless values.
///
/// Arguments
/// ---------
/// * `diameter_m` – body diameter in meters.
/// * `velocity_kms` – relative velocity in km/s.
/// * `density_kg_m3` – bulk density in kg/m³, usually [`DEFAULT_DENSITY_KG_M3`].
///
/// Return
/// ------
/// * The kinetic energy in kt TNT.
pub fn estimate_impact_energy_kt(
    diameter_m: Meter,
    velocity_kms: KmPerSecond,
    density_kg_m3: KgPerCubicMeter,
) -> KilotonTnt {
    let radius_m = diameter_m / 2.;
    let volume_m3 = (4. / 3.) * PI * radius_m.powf(3.);
    let mass_kg = density_kg_m3 * volume_m3;
    let velocity_ms = velocity_kms * METERS_PER_KILOMETER;
    let kinetic_energy_joules = 0.5 * mass_kg * velocity_ms.powf(2.);
    kinetic_energy_joules / JOULES_PER_KILOTON_TNT
}

/// Physical parameters of an impactor, checked at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalBody {
    diameter_m: Meter,
    velocity_kms: KmPerSecond,
    density_kg_m3: KgPerCubicMeter,
}

impl PhysicalBody {
    /// Build a body with the default stony density.
    pub fn new(diameter_m: Meter, velocity_kms: KmPerSecond) -> Result<Self, NeoSceneError> {
        Self::with_density(diameter_m, velocity_kms, DEFAULT_DENSITY_KG_M3)
    }

    /// Build a body with an explicit bulk density.
    ///
    /// Every parameter must be finite and strictly positive, otherwise the matching
    /// [`NeoSceneError::InvalidDiameter`], [`NeoSceneError::InvalidVelocity`] or
    /// [`NeoSceneError::InvalidDensity`] is returned.
    pub fn with_density(
        diameter_m: Meter,
        velocity_kms: KmPerSecond,
        density_kg_m3: KgPerCubicMeter,
    ) -> Result<Self, NeoSceneError> {
        if !is_strictly_positive(diameter_m) {
            return Err(NeoSceneError::InvalidDiameter(diameter_m));
        }
        if !is_strictly_positive(velocity_kms) {
            return Err(NeoSceneError::InvalidVelocity(velocity_kms));
        }
        if !is_strictly_positive(density_kg_m3) {
            return Err(NeoSceneError::InvalidDensity(density_kg_m3));
        }
        Ok(PhysicalBody {
            diameter_m,
            velocity_kms,
            density_kg_m3,
        })
    }

    pub fn diameter_m(&self) -> Meter {
        self.diameter_m
    }

    pub fn velocity_kms(&self) -> KmPerSecond {
        self.velocity_kms
    }

    pub fn density_kg_m3(&self) -> KgPerCubicMeter {
        self.density_kg_m3
    }

    /// Kinetic energy at impact, see [`estimate_impact_energy_kt`].
    pub fn impact_energy_kt(&self) -> KilotonTnt {
        estimate_impact_energy_kt(self.diameter_m, self.velocity_kms, self.density_kg_m3)
    }
}

#[inline]
fn is_strictly_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
