//! # Impact consequences and deflection strategy
//!
//! Order-of-magnitude consequences of an impact, derived from the kinetic energy alone,
//! and the deflection technique recommended for a body of a given size and energy.
//!
//! ```text
//! M_seismic = (2/3)·(log10(E_J) − 4.4)
//! D_crater  = 0.07 · E_kt^(1/3.4)   [km]
//! R_blast   = 0.8  · E_kt^(1/3)     [km, 3 psi overpressure]
//! N_hiro    = E_kt / 15
//! ```
//!
//! These are scaling laws for a land impact and are not meant to be more precise
//! than one significant figure.
use std::fmt;

use crate::{
    constants::{
        KilotonTnt, Meter, HIROSHIMA_YIELD_KT, JOULES_PER_KILOTON_TNT,
        KINETIC_IMPACTOR_DIAMETER_THRESHOLD_M, NUCLEAR_DIAMETER_THRESHOLD_M,
        NUCLEAR_ENERGY_THRESHOLD_KT,
    },
    impact_energy::PhysicalBody,
    neo_errors::NeoSceneError,
};

/// Kilometers
pub type Kilometer = f64;

/// Modified Mercalli band felt near the impact site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakingIntensity {
    Light,
    VeryStrong,
    Extreme,
}

impl ShakingIntensity {
    /// Band of a seismic magnitude: above 8 is extreme, above 6 very strong, light otherwise.
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude > 8.0 {
            ShakingIntensity::Extreme
        } else if magnitude > 6.0 {
            ShakingIntensity::VeryStrong
        } else {
            ShakingIntensity::Light
        }
    }
}

impl fmt::Display for ShakingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShakingIntensity::Light => "IV (Light)",
            ShakingIntensity::VeryStrong => "VII (Very Strong)",
            ShakingIntensity::Extreme => "X+ (Extreme)",
        };
        f.write_str(label)
    }
}

/// Recommended way to push an asteroid off a collision course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeflectionStrategy {
    /// Standoff nuclear detonation ablating the surface. Last resort.
    NuclearInterceptor,
    /// Spacecraft colliding at high speed, as flown by DART.
    KineticImpactor,
    /// Heavy spacecraft station-keeping next to the body and tugging it gravitationally.
    GravityTractor,
}

impl DeflectionStrategy {
    /// Select a strategy from the body size and impact energy.
    ///
    /// Both thresholds are strict: a 1000 m body or a 5e6 kt impact still qualifies for a
    /// kinetic impactor, a 150 m body for a gravity tractor.
    pub fn recommend(diameter_m: Meter, impact_energy_kt: KilotonTnt) -> Self {
        if diameter_m > NUCLEAR_DIAMETER_THRESHOLD_M
            || impact_energy_kt > NUCLEAR_ENERGY_THRESHOLD_KT
        {
            DeflectionStrategy::NuclearInterceptor
        } else if diameter_m > KINETIC_IMPACTOR_DIAMETER_THRESHOLD_M {
            DeflectionStrategy::KineticImpactor
        } else {
            DeflectionStrategy::GravityTractor
        }
    }

    pub fn for_body(body: &PhysicalBody) -> Self {
        Self::recommend(body.diameter_m(), body.impact_energy_kt())
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeflectionStrategy::NuclearInterceptor => "Nuclear Interceptor",
            DeflectionStrategy::KineticImpactor => "Kinetic Impactor",
            DeflectionStrategy::GravityTractor => "Gravity Tractor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeflectionStrategy::NuclearInterceptor => {
                "A standoff nuclear detonation vaporizes part of the surface and pushes the body. \
                 Reserved for massive or short-notice threats."
            }
            DeflectionStrategy::KineticImpactor => {
                "A high-speed spacecraft collides with the asteroid to alter its trajectory. \
                 Suited to medium and large bodies with enough warning time."
            }
            DeflectionStrategy::GravityTractor => {
                "A heavy spacecraft flies alongside the asteroid and slowly tugs it onto a safer \
                 orbit over months or years."
            }
        }
    }
}

impl fmt::Display for DeflectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of Hiroshima bombs (15 kt) releasing the same energy.
pub fn hiroshima_equivalents(impact_energy_kt: KilotonTnt) -> f64 {
    impact_energy_kt / HIROSHIMA_YIELD_KT
}

/// Consequences of a land impact with a given energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactConsequences {
    pub seismic_magnitude: f64,
    pub shaking_intensity: ShakingIntensity,
    pub crater_diameter_km: Kilometer,
    pub air_blast_radius_km: Kilometer,
    pub hiroshima_equivalents: f64,
}

impl ImpactConsequences {
    /// Evaluate the scaling laws for `impact_energy_kt`.
    ///
    /// Return
    /// ------
    /// * The consequences, or [`NeoSceneError::InvalidEnergy`] when the energy is not finite
    ///   and strictly positive (the magnitude is a logarithm).
    pub fn from_energy_kt(impact_energy_kt: KilotonTnt) -> Result<Self, NeoSceneError> {
        if !impact_energy_kt.is_finite() || impact_energy_kt <= 0.0 {
            return Err(NeoSceneError::InvalidEnergy(impact_energy_kt));
        }

        let energy_joules = impact_energy_kt * JOULES_PER_KILOTON_TNT;
        let seismic_magnitude = (2.0 / 3.0) * (energy_joules.log10() - 4.4);

        Ok(ImpactConsequences {
            seismic_magnitude,
            shaking_intensity: ShakingIntensity::from_magnitude(seismic_magnitude),
            crater_diameter_km: 0.07 * impact_energy_kt.powf(1.0 / 3.4),
            air_blast_radius_km: 0.8 * impact_energy_kt.cbrt(),
            hiroshima_equivalents: hiroshima_equivalents(impact_energy_kt),
        })
    }

    pub fn for_body(body: &PhysicalBody) -> Result<Self, NeoSceneError> {
        Self::from_energy_kt(body.impact_energy_kt())
    }
}
