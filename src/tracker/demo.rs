use chrono::{DateTime, Utc};

use crate::geo::GeoPoint;

/// Fallback position shown while the live source is unreachable: a sine-wave
/// latitude and a longitude sweeping west-to-east, both derived from the
/// timestamp alone so the same instant always maps to the same point.
pub fn demo_position(at: DateTime<Utc>) -> GeoPoint {
    let ms = at.timestamp_millis() as f64;
    let latitude = (ms / 30_000.0).sin() * 20.0;
    let longitude = (ms / 100_000.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new(latitude, longitude)
}
