//! # Constants and type definitions for neoscene
//!
//! This module centralizes the **physical constants**, **reference orbital elements**, and
//! **unit type aliases** shared by the impact-energy estimator, the orbit sampler and the
//! scene builder.
//!
//! ## Overview
//!
//! - Geometric constants (2π)
//! - Energy conversion (joules → kilotons of TNT)
//! - Default body density and default trajectory resolution
//! - Earth's reference orbit used as the scene backdrop
//! - Unit aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full revolution in radians
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Energy released by one kiloton of TNT, in joules
pub const JOULES_PER_KILOTON_TNT: f64 = 4.184e12;

/// Meters per kilometer, used to convert km/s velocities to m/s
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Typical bulk density of a stony asteroid in kg/m³
pub const DEFAULT_DENSITY_KG_M3: f64 = 3000.0;

/// Default number of angular intervals used to sample one revolution
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Number of decimals kept for the scalar fields of an enriched record
pub const OUTPUT_DECIMALS: i32 = 2;

/// Yield of the Hiroshima bomb in kilotons of TNT
pub const HIROSHIMA_YIELD_KT: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Deflection thresholds
// -------------------------------------------------------------------------------------------------

/// Above this diameter only a nuclear standoff detonation is considered (m)
pub const NUCLEAR_DIAMETER_THRESHOLD_M: f64 = 1000.0;

/// Above this impact energy only a nuclear standoff detonation is considered (kt TNT)
pub const NUCLEAR_ENERGY_THRESHOLD_KT: f64 = 5.0e6;

/// Above this diameter a kinetic impactor is preferred over a gravity tractor (m)
pub const KINETIC_IMPACTOR_DIAMETER_THRESHOLD_M: f64 = 150.0;

// -------------------------------------------------------------------------------------------------
// Earth reference orbit
// -------------------------------------------------------------------------------------------------

/// Eccentricity of Earth's heliocentric orbit
pub const EARTH_ECCENTRICITY: f64 = 0.0167;

/// Semi-major axis of Earth's heliocentric orbit (AU)
pub const EARTH_SEMI_MAJOR_AXIS: AstronomicalUnit = 1.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Velocity in kilometers per second
pub type KmPerSecond = f64;
/// Density in kilograms per cubic meter
pub type KgPerCubicMeter = f64;
/// Energy in kilotons of TNT equivalent
pub type KilotonTnt = f64;
