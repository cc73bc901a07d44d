use thiserror::Error;

use super::{NumericField, RawNeo};

/// Why a raw record cannot feed the scene builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IncompleteReason {
    #[error("no close-approach data")]
    NoCloseApproach,

    #[error("no relative velocity in the first close-approach entry")]
    MissingVelocity,

    #[error("no estimated diameter in meters")]
    MissingDiameter,

    #[error("no orbital data (eccentricity and semi-major axis)")]
    MissingOrbitalData,

    #[error("field `{field}` is not a number: {value:?}")]
    MalformedNumber { field: &'static str, value: String },
}

/// A record carrying every value the computation needs, already parsed.
///
/// The values are not range-checked yet; that happens when the scene builder turns them
/// into [`OrbitalElements`](crate::orbital_elements::OrbitalElements) and
/// [`PhysicalBody`](crate::impact_energy::PhysicalBody).
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteNeo {
    pub id: String,
    pub name: String,
    /// Mean of the min/max diameter estimates (m)
    pub diameter_m: f64,
    /// Relative velocity at the first close approach (km/s)
    pub velocity_kms: f64,
    pub eccentricity: f64,
    /// AU
    pub semi_major_axis: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncompleteNeo {
    pub id: String,
    pub name: String,
    pub reason: IncompleteReason,
}

/// Outcome of classifying a [`RawNeo`].
#[derive(Debug, Clone, PartialEq)]
pub enum NeoRecord {
    Complete(CompleteNeo),
    Incomplete(IncompleteNeo),
}

fn parse_field(field: &'static str, raw: &NumericField) -> Result<f64, IncompleteReason> {
    raw.value().ok_or_else(|| IncompleteReason::MalformedNumber {
        field,
        value: raw.to_string(),
    })
}

impl RawNeo {
    /// Extract and parse the values used by the scene builder.
    ///
    /// Checks run in this order: close-approach data, velocity, diameter, orbital data.
    /// Only the first close-approach entry is considered.
    ///
    /// Return
    /// ------
    /// * [`NeoRecord::Complete`] when every field is present and numeric,
    ///   [`NeoRecord::Incomplete`] with the first failing reason otherwise.
    pub fn classify(&self) -> NeoRecord {
        match self.extract() {
            Ok(neo) => NeoRecord::Complete(neo),
            Err(reason) => NeoRecord::Incomplete(IncompleteNeo {
                id: self.id.clone(),
                name: self.name.clone(),
                reason,
            }),
        }
    }

    fn extract(&self) -> Result<CompleteNeo, IncompleteReason> {
        let approach = self
            .close_approach_data
            .first()
            .ok_or(IncompleteReason::NoCloseApproach)?;

        let raw_velocity = approach
            .relative_velocity
            .as_ref()
            .and_then(|rv| rv.kilometers_per_second.as_ref())
            .ok_or(IncompleteReason::MissingVelocity)?;
        let velocity_kms = parse_field("kilometers_per_second", raw_velocity)?;

        let diameter_m = self
            .estimated_diameter
            .as_ref()
            .and_then(|d| d.meters)
            .ok_or(IncompleteReason::MissingDiameter)?
            .mean();

        let orbital_data = self
            .orbital_data
            .as_ref()
            .ok_or(IncompleteReason::MissingOrbitalData)?;
        let (Some(raw_ecc), Some(raw_sma)) =
            (&orbital_data.eccentricity, &orbital_data.semi_major_axis)
        else {
            return Err(IncompleteReason::MissingOrbitalData);
        };

        Ok(CompleteNeo {
            id: self.id.clone(),
            name: self.name.clone(),
            diameter_m,
            velocity_kms,
            eccentricity: parse_field("eccentricity", raw_ecc)?,
            semi_major_axis: parse_field("semi_major_axis", raw_sma)?,
        })
    }
}
