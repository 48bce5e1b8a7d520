use chrono::Utc;
use futures::future::BoxFuture;
use serde::Deserialize;
use std::time::Duration;

use super::error::TrackerError;
use super::types::PositionFix;
use crate::geo::GeoPoint;

const FETCH_TIMEOUT: Duration = Duration::from_secs(4);

/// Where the poller gets positions from. Boxed futures keep the trait object
/// safe so tests can swap in scripted sources.
pub trait PositionSource: Send + Sync {
    fn fetch(&self, satellite_id: u32) -> BoxFuture<'_, Result<PositionFix, TrackerError>>;
}

/// Live source: `GET {base_url}/{id}` against a where-the-satellite-is style
/// API returning latitude/longitude/altitude/velocity.
pub struct HttpPositionSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PositionResponse {
    latitude: f64,
    longitude: f64,
    /// km
    altitude: f64,
    /// km/h
    velocity: f64,
}

impl HttpPositionSource {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl PositionSource for HttpPositionSource {
    fn fetch(&self, satellite_id: u32) -> BoxFuture<'_, Result<PositionFix, TrackerError>> {
        Box::pin(async move {
            let url = format!("{}/{}", self.base_url, satellite_id);
            let response = self.client.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(TrackerError::Status(response.status().as_u16()));
            }
            let body = response.text().await?;
            parse_position_response(&body)
        })
    }
}

fn parse_position_response(body: &str) -> Result<PositionFix, TrackerError> {
    let response: PositionResponse = serde_json::from_str(body)?;
    Ok(PositionFix {
        position: GeoPoint::new(response.latitude, response.longitude),
        altitude_km: response.altitude,
        speed_km_h: response.velocity,
        timestamp: Utc::now(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_position_fields() {
        let body = r#"{
            "name": "iss",
            "id": 25544,
            "latitude": 50.1123,
            "longitude": -12.44,
            "altitude": 417.29,
            "velocity": 27559.8,
            "visibility": "daylight",
            "units": "kilometers"
        }"#;
        let fix = parse_position_response(body).unwrap();
        assert_eq!(fix.position.latitude, 50.1123);
        assert_eq!(fix.position.longitude, -12.44);
        assert_eq!(fix.altitude_km, 417.29);
        assert_eq!(fix.speed_km_h, 27559.8);
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(matches!(
            parse_position_response("not json"),
            Err(TrackerError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_position_response(r#"{"latitude": 1.0}"#),
            Err(TrackerError::MalformedResponse(_))
        ));
    }
}
