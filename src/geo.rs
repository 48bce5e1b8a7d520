use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees. Latitude in [-90, 90], longitude in
/// [-180, 180]; callers are responsible for staying in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a "lat, lon" coordinate string.
    pub fn from_coordinates(coordinates: &str) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() < 2 {
            return None;
        }
        let latitude = parts[0].parse().ok()?;
        let longitude = parts[1].parse().ok()?;
        Some(Self {
            latitude,
            longitude,
        })
    }
}

/// Great-circle distance between two points in km, haversine formula.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        for p in [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(51.5, -0.1),
            GeoPoint::new(-33.9, 151.2),
        ] {
            assert_eq!(haversine_km(p, p), 0.0);
        }
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(48.85, 2.35);
        let b = GeoPoint::new(40.71, -74.0);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn parse_coordinates() {
        let p = GeoPoint::from_coordinates("52.52, 13.405").unwrap();
        assert_eq!(p.latitude, 52.52);
        assert_eq!(p.longitude, 13.405);

        assert!(GeoPoint::from_coordinates("52.52").is_none());
        assert!(GeoPoint::from_coordinates("north, east").is_none());
    }
}
