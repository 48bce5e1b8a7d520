use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::GeoPoint;

/// One sampled position of the tracked object, replaced wholesale each tick.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PositionFix {
    pub position: GeoPoint,
    pub altitude_km: f64,
    pub speed_km_h: f64,
    pub timestamp: DateTime<Utc>,
}

impl PositionFix {
    /// Readout shown under the map for a live fix.
    pub fn readout(&self) -> String {
        format!(
            "Lat: {:.3} · Lon: {:.3} · Alt: {:.1} km · Speed: {:.1} km/h",
            self.position.latitude, self.position.longitude, self.altitude_km, self.speed_km_h
        )
    }
}

/// Readout shown when the live source is unavailable.
pub fn demo_readout(position: GeoPoint) -> String {
    format!(
        "Demo Lat: {:.2} · Lon: {:.2} · (Live API failed)",
        position.latitude, position.longitude
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FixOrigin {
    Live,
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_readout_format() {
        let fix = PositionFix {
            position: GeoPoint::new(47.12345, -122.6789),
            altitude_km: 417.25,
            speed_km_h: 27563.44,
            timestamp: Utc::now(),
        };
        assert_eq!(
            fix.readout(),
            "Lat: 47.123 · Lon: -122.679 · Alt: 417.2 km · Speed: 27563.4 km/h"
        );
    }

    #[test]
    fn demo_readout_format() {
        let text = demo_readout(GeoPoint::new(-12.3456, 98.7654));
        assert_eq!(text, "Demo Lat: -12.35 · Lon: 98.77 · (Live API failed)");
    }

    #[test]
    fn fix_origin_display() {
        assert_eq!(FixOrigin::Live.to_string(), "live");
        assert_eq!(FixOrigin::Demo.to_string(), "demo");
    }
}
