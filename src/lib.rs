//! # neoscene
//!
//! Builds the data file of a near-Earth-object visualization: NEO records are fetched from
//! NASA's NeoWs service, each object receives an impact-energy estimate and a sampled
//! planar orbit, and the result is written as pretty-printed JSON next to Earth's own
//! orbit.
//!
//! ## Modules
//!
//! - [`impact_energy`] – kinetic energy of a spherical impactor in kilotons of TNT.
//! - [`impact_consequences`] – seismic, crater and air-blast scaling laws, deflection strategy.
//! - [`orbital_elements`] – validated `(e, a)` pairs.
//! - [`trajectory`] – focus-centered conic sampling, uniform in angle or in time.
//! - [`kepler`] – Kepler's equation solver backing the time-uniform sampling.
//! - [`neo_feed`] – NeoWs raw data model, retrieval client and record classification.
//! - [`scene`] – scene assembly, JSON and CSV writers.
//!
//! ## Example
//!
//! ```rust
//! use neoscene::impact_energy::estimate_impact_energy_kt;
//! use neoscene::trajectory::sample_orbit;
//!
//! let energy = estimate_impact_energy_kt(100.0, 20.0, 3000.0);
//! assert!((energy - 75_085.87).abs() < 0.01);
//!
//! let earth = sample_orbit(0.0167, 1.0, 4);
//! assert_eq!(earth.len(), 5);
//! ```
pub mod constants;
pub mod impact_consequences;
pub mod impact_energy;
pub mod kepler;
pub mod neo_errors;
pub mod neo_feed;
pub mod orbital_elements;
pub mod scene;
pub mod trajectory;
