use std::sync::Arc;

use crate::alert::{AlertCenter, Banner};
use crate::features::Feature;
use crate::geo::GeoPoint;
use crate::scene::{MapScene, SceneSnapshot};
use crate::solar::{SolarError, SolarPanel, SolarSeries};
use crate::tracker::{Poller, PollerStatus, PositionSource, TrackingConfig};
use crate::viewer::ViewerState;

/// Everything one page session owns: the visible feature, the map scene, the
/// poll worker, the solar panel, the alert center and the viewer position.
/// Section initialization is lazy and idempotent; `shutdown` stops the poll
/// worker and alert timers.
pub struct Session {
    source: Arc<dyn PositionSource>,
    tracking: TrackingConfig,
    feature: Feature,
    scene: Option<MapScene>,
    poller: Poller,
    solar: Option<SolarPanel>,
    alerts: AlertCenter,
    viewer: ViewerState,
}

impl Session {
    pub fn new(
        source: Arc<dyn PositionSource>,
        tracking: TrackingConfig,
        satellite_name: &str,
        preset_viewer: Option<GeoPoint>,
    ) -> Self {
        Self {
            source,
            tracking,
            feature: Feature::None,
            scene: None,
            poller: Poller::new(),
            solar: None,
            alerts: AlertCenter::new(satellite_name),
            viewer: ViewerState::preset(preset_viewer),
        }
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    /// Routes a section request: hides everything else, shows the requested
    /// section and lazily initializes it. Re-selecting an already initialized
    /// section neither re-creates the scene/chart nor restarts the poller.
    pub fn select(&mut self, name: &str) -> Feature {
        let feature = Feature::from_request(name);
        match feature {
            Feature::Tracking => self.init_tracking(),
            Feature::Solar => self.init_solar(),
            _ => {}
        }
        self.feature = feature.clone();
        feature
    }

    fn init_tracking(&mut self) {
        let scene = self
            .scene
            .get_or_insert_with(|| MapScene::new(self.viewer.position()))
            .clone();

        if !self.poller.is_polling() {
            if let Err(err) = self.poller.start(
                self.source.clone(),
                scene,
                self.alerts.clone(),
                self.viewer.clone(),
                self.tracking.clone(),
            ) {
                log::error!("failed to start poller: {err}");
            }
        }
    }

    fn init_solar(&mut self) {
        if self.solar.is_none() {
            self.solar = Some(SolarPanel::new());
        }
    }

    /// Stores the browser-resolved viewer position, at most once per session.
    pub fn resolve_viewer(&mut self, position: GeoPoint) -> bool {
        if !self.viewer.resolve(position) {
            return false;
        }
        if let Some(scene) = &self.scene {
            scene.viewer_located(position);
        }
        true
    }

    pub fn tracker_status(&self) -> PollerStatus {
        self.poller.status()
    }

    pub fn scene_snapshot(&self) -> Option<SceneSnapshot> {
        self.scene.as_ref().map(MapScene::snapshot)
    }

    pub fn alerts(&self) -> Vec<Banner> {
        self.alerts.active()
    }

    pub fn solar_series(&self) -> Option<&SolarSeries> {
        self.solar.as_ref().map(SolarPanel::series)
    }

    /// Replaces the solar series from uploaded CSV content. `None` when the
    /// solar section was never initialized.
    pub fn load_solar_csv(&mut self, content: &str) -> Option<Result<usize, SolarError>> {
        self.solar.as_mut().map(|panel| panel.load_csv(content))
    }

    /// Stops the poll worker and aborts alert timers.
    pub async fn shutdown(&mut self) {
        self.poller.stop().await;
        self.alerts.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{PollerMode, ScriptedSource, DEFAULT_POLL_INTERVAL};

    fn test_session() -> Session {
        Session::new(
            Arc::new(ScriptedSource::new(Vec::new())),
            TrackingConfig {
                satellite_id: 25544,
                poll_interval: DEFAULT_POLL_INTERVAL,
            },
            "iss",
            None,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn tracking_init_is_idempotent() {
        let mut session = test_session();
        assert_eq!(session.feature(), &Feature::None);

        session.select("tracking");
        let first_scene = session.scene_snapshot();
        assert!(first_scene.is_some());
        assert!(matches!(
            session.tracker_status().mode,
            PollerMode::Polling { .. }
        ));

        // Second select: same scene instance, same single poll worker.
        let scene_handle = session.scene.clone().unwrap();
        session.select("tracking");
        assert!(session.poller.is_polling());
        scene_handle.object_moved(GeoPoint::new(3.0, 4.0));
        assert_eq!(
            session.scene_snapshot().unwrap().object_marker,
            Some(GeoPoint::new(3.0, 4.0)),
            "re-select must not have replaced the scene"
        );

        session.shutdown().await;
        assert!(!session.poller.is_polling());
    }

    #[tokio::test(start_paused = true)]
    async fn switching_sections_keeps_initialized_state() {
        let mut session = test_session();
        session.select("tracking");
        session.select("solar");
        assert_eq!(session.feature(), &Feature::Solar);
        assert_eq!(session.solar_series().unwrap().len(), 7);

        // Switching sections hides the map but does not stop the poller.
        assert!(session.poller.is_polling());

        let placeholder = session.select("weather-alerts");
        assert_eq!(
            placeholder,
            Feature::Placeholder {
                title: "WEATHER ALERTS".to_string()
            }
        );
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn viewer_resolves_once_and_marks_the_scene() {
        let mut session = test_session();
        session.select("tracking");

        let home = GeoPoint::new(40.4, -3.7);
        assert!(session.resolve_viewer(home));
        assert!(!session.resolve_viewer(GeoPoint::new(0.0, 0.0)));
        assert_eq!(session.scene_snapshot().unwrap().viewer_marker, Some(home));
        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn viewer_preset_before_tracking_seeds_the_scene() {
        let mut session = Session::new(
            Arc::new(ScriptedSource::new(Vec::new())),
            TrackingConfig {
                satellite_id: 25544,
                poll_interval: DEFAULT_POLL_INTERVAL,
            },
            "iss",
            Some(GeoPoint::new(52.5, 13.4)),
        );
        session.select("tracking");
        assert_eq!(
            session.scene_snapshot().unwrap().viewer_marker,
            Some(GeoPoint::new(52.5, 13.4))
        );
        session.shutdown().await;
    }

    #[test]
    fn solar_csv_before_init_is_unavailable() {
        let mut session = test_session();
        assert!(session.load_solar_csv("date,production\nd1,5\n").is_none());
    }
}
