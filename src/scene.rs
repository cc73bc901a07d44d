//! # Scene assembly and output
//!
//! This module turns raw NeoWs records into the [`SceneDataset`] consumed by the
//! visualization, and writes it to disk.
//!
//! ## Pipeline
//!
//! ```text
//! RawNeo ──classify──▶ CompleteNeo ──validate──▶ (OrbitalElements, PhysicalBody)
//!    │                     │                              │
//!    ▼                     ▼                              ▼
//! SkippedNeo ◀──── SkippedNeo ◀──────────────  EnrichedAsteroidRecord
//! ```
//!
//! 1. The Earth reference orbit is sampled once with the configured resolution.
//! 2. Each record is classified ([`RawNeo::classify`]); records without close-approach data,
//!    or missing/malformed fields, are skipped.
//! 3. Parsed values go through the checked constructors; non-elliptical orbits and
//!    non-physical bodies are skipped.
//! 4. Surviving records get their impact energy and trajectory; scalar fields are rounded to
//!    two decimals.
//!
//! Every skip is logged at `warn` level and returned in [`SceneReport::skipped`].
//!
//! ## Output
//!
//! * [`write_scene_json`] – pretty-printed JSON, 2-space indentation.
//! * [`write_summary_csv`] – one line per asteroid for spreadsheets: perihelion and aphelion
//!   from the elements, impact consequences and the recommended deflection strategy.
//!
//! Both writers go through a sibling `.tmp` file renamed into place, so the target path
//! either keeps its previous content or holds a complete document.
use std::{
    fmt, fs,
    io::{BufWriter, Write},
};

use camino::{Utf8Path, Utf8PathBuf};
use itertools::{Either, Itertools};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    constants::{
        AstronomicalUnit, KgPerCubicMeter, KilotonTnt, KmPerSecond, Meter, DEFAULT_DENSITY_KG_M3,
        DEFAULT_NUM_POINTS, OUTPUT_DECIMALS,
    },
    impact_consequences::{DeflectionStrategy, ImpactConsequences, Kilometer},
    impact_energy::PhysicalBody,
    neo_errors::NeoSceneError,
    neo_feed::{
        neo_record::{CompleteNeo, IncompleteReason, NeoRecord},
        RawNeo,
    },
    orbital_elements::OrbitalElements,
    trajectory::{SamplingMode, Trajectory},
};

/// Settings of one scene build.
///
/// # Fields
///
/// * `num_points` - angular intervals per trajectory (each trajectory holds `num_points + 1` points)
/// * `density_kg_m3` - bulk density assumed for every asteroid
/// * `sampling` - distribution of the sample angles
/// * `earth` - elements of the reference orbit drawn behind the asteroids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub num_points: usize,
    pub density_kg_m3: KgPerCubicMeter,
    pub sampling: SamplingMode,
    pub earth: OrbitalElements,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            num_points: DEFAULT_NUM_POINTS,
            density_kg_m3: DEFAULT_DENSITY_KG_M3,
            sampling: SamplingMode::UniformAngle,
            earth: OrbitalElements::earth(),
        }
    }
}

impl SceneConfig {
    /// Reject settings that would make every record fail.
    pub fn validate(&self) -> Result<(), NeoSceneError> {
        if self.num_points == 0 {
            return Err(NeoSceneError::InvalidSampleCount(self.num_points));
        }
        if !self.density_kg_m3.is_finite() || self.density_kg_m3 <= 0.0 {
            return Err(NeoSceneError::InvalidDensity(self.density_kg_m3));
        }
        Ok(())
    }
}

/// One asteroid of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAsteroidRecord {
    pub name: String,
    pub id: String,
    pub diameter_m: Meter,
    pub velocity_kms: KmPerSecond,
    pub impact_energy_kt: KilotonTnt,
    pub trajectory: Trajectory,
}

/// The document written for the visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDataset {
    pub earth_orbit: Trajectory,
    pub asteroids: Vec<EnrichedAsteroidRecord>,
}

/// Why a record was left out of the scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("incomplete record: {0}")]
    Incomplete(IncompleteReason),

    #[error("invalid orbital elements: {0}")]
    InvalidElements(String),

    #[error("invalid physical parameters: {0}")]
    InvalidBody(String),

    #[error("trajectory sampling failed: {0}")]
    SamplingFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedNeo {
    pub id: String,
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedNeo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.id, self.reason)
    }
}

/// Values derived for a kept asteroid that are not part of the JSON document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidAnalysis {
    pub elements: OrbitalElements,
    pub consequences: ImpactConsequences,
    pub deflection: DeflectionStrategy,
}

/// Result of a scene build: the dataset and the records that did not make it.
///
/// `analyses[i]` belongs to `dataset.asteroids[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneReport {
    pub dataset: SceneDataset,
    pub analyses: Vec<AsteroidAnalysis>,
    pub skipped: Vec<SkippedNeo>,
}

impl SceneReport {
    /// Kept asteroids paired with their analysis, in output order.
    pub fn analyzed_asteroids(
        &self,
    ) -> impl Iterator<Item = (&EnrichedAsteroidRecord, &AsteroidAnalysis)> {
        self.dataset.asteroids.iter().zip(&self.analyses)
    }
}

/// Round `value` to `decimals` decimal places, ties away from zero.
///
/// The scaled value is rounded with [`f64::round`], so an exact binary tie such as
/// `0.125` goes up to `0.13` where a half-to-even rounding would give `0.12`. Decimal
/// literals that only look like ties (`2.675` is stored as `2.67499…`) round down.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn enrich(
    neo: &CompleteNeo,
    config: &SceneConfig,
) -> Result<(EnrichedAsteroidRecord, AsteroidAnalysis), SkipReason> {
    let elements = OrbitalElements::new(neo.eccentricity, neo.semi_major_axis)
        .map_err(|e| SkipReason::InvalidElements(e.to_string()))?;
    let body = PhysicalBody::with_density(neo.diameter_m, neo.velocity_kms, config.density_kg_m3)
        .map_err(|e| SkipReason::InvalidBody(e.to_string()))?;
    let trajectory = elements
        .sample(config.num_points, config.sampling)
        .map_err(|e| SkipReason::SamplingFailed(e.to_string()))?;
    let consequences = ImpactConsequences::for_body(&body)
        .map_err(|e| SkipReason::InvalidBody(e.to_string()))?;

    let record = EnrichedAsteroidRecord {
        name: neo.name.clone(),
        id: neo.id.clone(),
        diameter_m: round_decimals(body.diameter_m(), OUTPUT_DECIMALS),
        velocity_kms: round_decimals(body.velocity_kms(), OUTPUT_DECIMALS),
        impact_energy_kt: round_decimals(body.impact_energy_kt(), OUTPUT_DECIMALS),
        trajectory,
    };
    let analysis = AsteroidAnalysis {
        elements,
        consequences,
        deflection: DeflectionStrategy::for_body(&body),
    };
    Ok((record, analysis))
}

fn process(
    raw: &RawNeo,
    config: &SceneConfig,
) -> Result<(EnrichedAsteroidRecord, AsteroidAnalysis), SkippedNeo> {
    let outcome = match raw.classify() {
        NeoRecord::Complete(neo) => enrich(&neo, config),
        NeoRecord::Incomplete(inc) => Err(SkipReason::Incomplete(inc.reason)),
    };
    outcome.map_err(|reason| SkippedNeo {
        id: raw.id.clone(),
        name: raw.name.clone(),
        reason,
    })
}

/// Build the scene from raw NeoWs records.
///
/// Arguments
/// ---------
/// * `neos` – records in provider order; output asteroids keep that order.
/// * `config` – resolution, density, sampling mode and Earth elements.
///
/// Return
/// ------
/// * A [`SceneReport`], or an error if the configuration is invalid or the Earth orbit
///   cannot be sampled. Individual record failures never abort the build.
pub fn build_scene(neos: &[RawNeo], config: &SceneConfig) -> Result<SceneReport, NeoSceneError> {
    config.validate()?;

    let earth_orbit = config.earth.sample(config.num_points, config.sampling)?;

    let (kept, skipped): (Vec<_>, Vec<_>) = neos
        .iter()
        .map(|raw| process(raw, config))
        .partition_map(|outcome| match outcome {
            Ok(record) => Either::Left(record),
            Err(skip) => Either::Right(skip),
        });
    let (asteroids, analyses): (Vec<_>, Vec<_>) = kept.into_iter().unzip();

    for skip in &skipped {
        warn!(id = %skip.id, name = %skip.name, reason = %skip.reason, "skipping NEO");
    }
    info!(
        received = neos.len(),
        kept = asteroids.len(),
        skipped = skipped.len(),
        "scene assembled"
    );

    Ok(SceneReport {
        dataset: SceneDataset {
            earth_orbit,
            asteroids,
        },
        analyses,
        skipped,
    })
}

fn temporary_path(path: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{path}.tmp"))
}

/// Write through `write` into `<path>.tmp`, then rename over `path`.
fn write_atomically<F>(path: &Utf8Path, write: F) -> Result<(), NeoSceneError>
where
    F: FnOnce(&mut BufWriter<fs::File>) -> Result<(), NeoSceneError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temporary_path(path);
    let result = (|| -> Result<(), NeoSceneError> {
        let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
        write(&mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    })()
    .and_then(|()| fs::rename(&tmp_path, path).map_err(NeoSceneError::from));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Serialize the scene as pretty-printed JSON (2-space indentation, trailing newline).
pub fn write_scene_json(dataset: &SceneDataset, path: &Utf8Path) -> Result<(), NeoSceneError> {
    write_atomically(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, dataset)?;
        writer.write_all(b"\n")?;
        Ok(())
    })?;
    info!(path = %path, asteroids = dataset.asteroids.len(), "scene written");
    Ok(())
}

/// Read back a scene written by [`write_scene_json`].
pub fn read_scene_json(path: &Utf8Path) -> Result<SceneDataset, NeoSceneError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    id: &'a str,
    name: &'a str,
    diameter_m: Meter,
    velocity_kms: KmPerSecond,
    impact_energy_kt: KilotonTnt,
    perihelion_au: AstronomicalUnit,
    aphelion_au: AstronomicalUnit,
    seismic_magnitude: f64,
    crater_diameter_km: Kilometer,
    air_blast_radius_km: Kilometer,
    deflection_strategy: &'static str,
}

/// Write a per-asteroid CSV summary.
///
/// Columns: `id,name,diameter_m,velocity_kms,impact_energy_kt,perihelion_au,aphelion_au,
/// seismic_magnitude,crater_diameter_km,air_blast_radius_km,deflection_strategy`.
/// Perihelion and aphelion come from the orbital elements, not from the sampled points.
pub fn write_summary_csv(report: &SceneReport, path: &Utf8Path) -> Result<(), NeoSceneError> {
    write_atomically(path, |writer| {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (asteroid, analysis) in report.analyzed_asteroids() {
            let consequences = &analysis.consequences;
            csv_writer.serialize(SummaryRow {
                id: &asteroid.id,
                name: &asteroid.name,
                diameter_m: asteroid.diameter_m,
                velocity_kms: asteroid.velocity_kms,
                impact_energy_kt: asteroid.impact_energy_kt,
                perihelion_au: analysis.elements.perihelion(),
                aphelion_au: analysis.elements.aphelion(),
                seismic_magnitude: round_decimals(consequences.seismic_magnitude, OUTPUT_DECIMALS),
                crater_diameter_km: round_decimals(
                    consequences.crater_diameter_km,
                    OUTPUT_DECIMALS,
                ),
                air_blast_radius_km: round_decimals(
                    consequences.air_blast_radius_km,
                    OUTPUT_DECIMALS,
                ),
                deflection_strategy: analysis.deflection.name(),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    })?;
    info!(path = %path, rows = report.analyses.len(), "summary written");
    Ok(())
}

#[cfg(test)]
mod scene_test {
    use super::*;
    use approx::assert_relative_eq;

    fn raw_neo(id: &str, velocity: &str, ecc: &str) -> RawNeo {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("({id})"),
            "estimated_diameter": { "meters": {
                "estimated_diameter_min": 90.0,
                "estimated_diameter_max": 110.5 } },
            "close_approach_data": [
                { "relative_velocity": { "kilometers_per_second": velocity } }
            ],
            "orbital_data": { "eccentricity": ecc, "semi_major_axis": "1.3" }
        }))
        .unwrap()
    }

    #[test]
    fn test_round_decimals() {
        assert_eq!(round_decimals(75085.86648, 2), 75085.87);
        assert_eq!(round_decimals(12.344999, 2), 12.34);
        assert_eq!(round_decimals(-1.005001, 2), -1.01);
        assert_eq!(round_decimals(3.0, 2), 3.0);
    }

    #[test]
    fn test_round_decimals_ties() {
        // exact binary ties go away from zero
        assert_eq!(round_decimals(0.125, 2), 0.13);
        assert_eq!(round_decimals(0.375, 2), 0.38);
        assert_eq!(round_decimals(-0.125, 2), -0.13);
        assert_eq!(round_decimals(2.5, 0), 3.0);
        // stored just below the tie
        assert_eq!(round_decimals(2.675, 2), 2.67);
        assert_eq!(round_decimals(1.005, 2), 1.0);
    }

    #[test]
    fn test_enriched_fields_are_rounded() {
        let report = build_scene(&[raw_neo("1", "17.123456", "0.2")], &SceneConfig::default()).unwrap();
        assert!(report.skipped.is_empty());
        let rec = &report.dataset.asteroids[0];
        assert_eq!(rec.diameter_m, 100.25);
        assert_eq!(rec.velocity_kms, 17.12);

        let expected = crate::impact_energy::estimate_impact_energy_kt(
            100.25,
            17.123456,
            DEFAULT_DENSITY_KG_M3,
        );
        assert_relative_eq!(rec.impact_energy_kt, expected, epsilon = 0.005 + 1e-9);
        assert_eq!(rec.impact_energy_kt, round_decimals(rec.impact_energy_kt, 2));
        assert_eq!(rec.trajectory.len(), DEFAULT_NUM_POINTS + 1);

        let analysis = &report.analyses[0];
        assert_eq!(analysis.elements, OrbitalElements::new(0.2, 1.3).unwrap());
        assert_eq!(analysis.deflection, DeflectionStrategy::GravityTractor);
        assert_relative_eq!(
            analysis.consequences.hiroshima_equivalents,
            expected / 15.0,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_hyperbolic_orbit_is_skipped() {
        let report = build_scene(
            &[raw_neo("1", "10", "0.5"), raw_neo("2", "10", "1.2")],
            &SceneConfig::default(),
        )
        .unwrap();
        assert_eq!(report.dataset.asteroids.len(), 1);
        assert_eq!(report.analyses.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id, "2");
        assert!(matches!(report.skipped[0].reason, SkipReason::InvalidElements(_)));
    }

    #[test]
    fn test_zero_velocity_is_skipped() {
        let report = build_scene(&[raw_neo("9", "0.0", "0.5")], &SceneConfig::default()).unwrap();
        assert!(report.dataset.asteroids.is_empty());
        assert!(matches!(report.skipped[0].reason, SkipReason::InvalidBody(_)));
    }

    #[test]
    fn test_invalid_config() {
        let config = SceneConfig {
            num_points: 0,
            ..Default::default()
        };
        assert_eq!(
            build_scene(&[], &config),
            Err(NeoSceneError::InvalidSampleCount(0))
        );

        let config = SceneConfig {
            density_kg_m3: -3.0,
            ..Default::default()
        };
        assert_eq!(
            build_scene(&[], &config),
            Err(NeoSceneError::InvalidDensity(-3.0))
        );
    }

    #[test]
    fn test_earth_orbit_resolution_follows_config() {
        let config = SceneConfig {
            num_points: 12,
            ..Default::default()
        };
        let report = build_scene(&[], &config).unwrap();
        assert_eq!(report.dataset.earth_orbit.len(), 13);
        assert!(report.dataset.asteroids.is_empty());
    }

    #[test]
    fn test_skipped_display() {
        let skip = SkippedNeo {
            id: "3".into(),
            name: "(3)".into(),
            reason: SkipReason::Incomplete(IncompleteReason::NoCloseApproach),
        };
        assert_eq!(skip.to_string(), "(3) (3): incomplete record: no close-approach data");
    }
}
