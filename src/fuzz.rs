//! Uniform-disk coordinate fuzzing.
//!
//! [`fuzz_coordinate`] displaces a latitude/longitude pair by a random
//! offset drawn uniformly from a disk of the given radius. The random
//! source is an explicit `&mut R: Rng` parameter so that output is
//! reproducible when a seeded generator is supplied.

use std::f64::consts::TAU;

use rand::Rng;

use crate::error::FuzzError;

const MIN_LATITUDE: f64 = -90.0;
const MAX_LATITUDE: f64 = 90.0;
const MIN_LONGITUDE: f64 = -180.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Add random noise to a coordinate pair.
///
/// `latitude` and `longitude` are raw field values; surrounding whitespace
/// is tolerated. Both must parse to finite numbers within the legal
/// geographic ranges, and `radius` (degrees) must be finite and strictly
/// positive. The fuzzed pair is clamped back into [-90, 90] x [-180, 180],
/// so points near the poles or the antimeridian degrade gracefully instead
/// of failing the row.
///
/// # Errors
///
/// Returns a [`FuzzError`] describing the first validation that failed:
/// non-numeric input, latitude range, longitude range, then radius.
pub fn fuzz_coordinate<R: Rng + ?Sized>(
    latitude: &str,
    longitude: &str,
    radius: f64,
    rng: &mut R,
) -> Result<(f64, f64), FuzzError> {
    let (lat, lon) = parse_pair(latitude, longitude)?;

    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(FuzzError::LatitudeOutOfRange(lat));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(FuzzError::LongitudeOutOfRange(lon));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(FuzzError::NonPositiveRadius(radius));
    }

    let angle = TAU * rng.random::<f64>();
    // sqrt keeps the offset density uniform over the disk instead of
    // clustered at the center.
    let distance = radius * rng.random::<f64>().sqrt();

    let new_lat = (lat + distance * angle.sin()).clamp(MIN_LATITUDE, MAX_LATITUDE);
    let new_lon = (lon + distance * angle.cos()).clamp(MIN_LONGITUDE, MAX_LONGITUDE);

    Ok((new_lat, new_lon))
}

fn parse_pair(latitude: &str, longitude: &str) -> Result<(f64, f64), FuzzError> {
    match (parse_finite(latitude), parse_finite(longitude)) {
        (Some(lat), Some(lon)) => Ok((lat, lon)),
        _ => Err(FuzzError::NonNumeric {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }),
    }
}

fn parse_finite(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
