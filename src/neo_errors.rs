use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoSceneError {
    #[error("Invalid eccentricity {0}: the sampler only supports elliptical orbits (0 <= e < 1)")]
    InvalidEccentricity(f64),

    #[error("Invalid semi-major axis {0}: must be finite and strictly positive")]
    InvalidSemiMajorAxis(f64),

    #[error("Invalid sample count {0}: at least one angular interval is required")]
    InvalidSampleCount(usize),

    #[error("Invalid diameter {0} m: must be finite and strictly positive")]
    InvalidDiameter(f64),

    #[error("Invalid velocity {0} km/s: must be finite and strictly positive")]
    InvalidVelocity(f64),

    #[error("Invalid density {0} kg/m³: must be finite and strictly positive")]
    InvalidDensity(f64),

    #[error("Invalid impact energy {0} kt: must be finite and strictly positive")]
    InvalidEnergy(f64),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("NeoWs request to {url} failed with HTTP status {status}")]
    HttpStatus { status: u16, url: String },

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON (de)serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV serialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Kepler equation solver error: {0}")]
    KeplerSolverError(#[from] roots::SearchError),

    #[error("UTF-8 Path error: {0}")]
    Utf8PathError(String),
}

impl PartialEq for NeoSceneError {
    fn eq(&self, other: &Self) -> bool {
        use NeoSceneError::*;
        match (self, other) {
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a.to_bits() == b.to_bits(),
            (InvalidSemiMajorAxis(a), InvalidSemiMajorAxis(b)) => a.to_bits() == b.to_bits(),
            (InvalidSampleCount(a), InvalidSampleCount(b)) => a == b,
            (InvalidDiameter(a), InvalidDiameter(b)) => a.to_bits() == b.to_bits(),
            (InvalidVelocity(a), InvalidVelocity(b)) => a.to_bits() == b.to_bits(),
            (InvalidDensity(a), InvalidDensity(b)) => a.to_bits() == b.to_bits(),
            (InvalidEnergy(a), InvalidEnergy(b)) => a.to_bits() == b.to_bits(),
            (InvalidUrl(a), InvalidUrl(b)) => a == b,
            (
                HttpStatus {
                    status: s1,
                    url: u1,
                },
                HttpStatus {
                    status: s2,
                    url: u2,
                },
            ) => s1 == s2 && u1 == u2,
            (KeplerSolverError(a), KeplerSolverError(b)) => a == b,
            (Utf8PathError(a), Utf8PathError(b)) => a == b,

            // Wrapped library errors are not comparable: same variant is enough
            (ReqwestError(_), ReqwestError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (JsonError(_), JsonError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
