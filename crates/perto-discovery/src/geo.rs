//! Great-circle distance and display formatting.
//!
//! Distances are computed with the haversine formula over a spherical Earth
//! (radius 6371 km), which is accurate to well under 1% for the city-scale
//! distances this catalog deals in.

use thiserror::Error;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Great-circle distance in kilometers between two coordinate pairs.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] when any input is non-finite or
/// outside lat ∈ [-90, 90] / lon ∈ [-180, 180]. Callers treat the error as
/// "distance unknown", never as a fatal condition.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, GeoError> {
    validate_pair(lat1, lon1)?;
    validate_pair(lat2, lon2)?;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(EARTH_RADIUS_KM * c)
}

fn validate_pair(lat: f64, lon: f64) -> Result<(), GeoError> {
    let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
    let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinate { lat, lon })
    }
}

/// Formats a distance for display: meters below 1 km, one decimal up to
/// 10 km, whole kilometers beyond that.
///
/// `None`, negative, NaN, and infinite inputs all produce an empty string so
/// the caller can omit the distance line entirely. The decimal separator is
/// always a period; localization happens where the text is rendered.
#[must_use]
pub fn format_distance(distance_km: Option<f64>) -> String {
    let Some(km) = distance_km else {
        return String::new();
    };
    if !km.is_finite() || km < 0.0 {
        return String::new();
    }

    if km < 1.0 {
        format!("Aprox. {:.0} m", km * 1000.0)
    } else if km < 10.0 {
        format!("Aprox. {km:.1} km")
    } else {
        format!("Aprox. {km:.0} km")
    }
}
