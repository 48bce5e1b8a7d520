use serde::Serialize;
use std::sync::{Arc, Mutex};
use utoipa::ToSchema;

use crate::geo::GeoPoint;

pub const OVERVIEW_ZOOM: u8 = 2;
pub const ALERT_ZOOM: u8 = 6;

/// Short pan used to follow the object between ticks.
pub const PAN_TRANSITION_S: f64 = 0.8;
/// Larger transition used when an alert zooms onto the object.
pub const ALERT_TRANSITION_S: f64 = 2.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkColor {
    Red,
    Blue,
}

/// Link color is a pure function of proximity.
pub fn link_color(near: bool) -> LinkColor {
    if near {
        LinkColor::Red
    } else {
        LinkColor::Blue
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Link {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub color: LinkColor,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    /// Animated transition length; 0 snaps immediately.
    pub transition_s: f64,
}

/// Everything the map widget mirrors: markers, the viewer-to-object link and
/// the current view. One instance per session.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SceneSnapshot {
    pub object_marker: Option<GeoPoint>,
    pub viewer_marker: Option<GeoPoint>,
    pub link: Option<Link>,
    pub view: MapView,
}

#[derive(Debug)]
struct SceneState {
    object_marker: Option<GeoPoint>,
    viewer_marker: Option<GeoPoint>,
    link: Option<Link>,
    view: MapView,
}

/// Shared handle to the scene state. The poll worker, the alert center and
/// the web handlers all hold clones.
#[derive(Clone)]
pub struct MapScene {
    shared: Arc<Mutex<SceneState>>,
}

impl MapScene {
    /// A fresh scene centered on the world overview. The viewer marker is
    /// created up front when the viewer already resolved, otherwise lazily
    /// via `viewer_located` (or never, when geolocation was denied).
    pub fn new(viewer: Option<GeoPoint>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(SceneState {
                object_marker: None,
                viewer_marker: viewer,
                link: None,
                view: MapView {
                    center: GeoPoint::new(0.0, 0.0),
                    zoom: OVERVIEW_ZOOM,
                    transition_s: 0.0,
                },
            })),
        }
    }

    /// Moves the object marker and pans the view after it.
    pub fn object_moved(&self, position: GeoPoint) {
        let mut state = self.shared.lock().unwrap();
        state.object_marker = Some(position);
        state.view.center = position;
        state.view.transition_s = PAN_TRANSITION_S;
    }

    /// Places the viewer marker. At most one marker exists; later calls
    /// reposition nothing since the viewer is resolved at most once.
    pub fn viewer_located(&self, position: GeoPoint) {
        let mut state = self.shared.lock().unwrap();
        if state.viewer_marker.is_none() {
            state.viewer_marker = Some(position);
        }
    }

    /// Redraws the viewer-to-object link, creating it on the first call with
    /// both endpoints known.
    pub fn update_link(&self, viewer: GeoPoint, object: GeoPoint, near: bool) {
        let mut state = self.shared.lock().unwrap();
        state.link = Some(Link {
            from: viewer,
            to: object,
            color: link_color(near),
        });
    }

    /// Alert zoom onto the object.
    pub fn zoom_to(&self, position: GeoPoint) {
        let mut state = self.shared.lock().unwrap();
        state.view = MapView {
            center: position,
            zoom: ALERT_ZOOM,
            transition_s: ALERT_TRANSITION_S,
        };
    }

    /// Back to the session overview zoom; the center stays put.
    pub fn reset_view(&self) {
        let mut state = self.shared.lock().unwrap();
        state.view.zoom = OVERVIEW_ZOOM;
        state.view.transition_s = 0.0;
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let state = self.shared.lock().unwrap();
        SceneSnapshot {
            object_marker: state.object_marker,
            viewer_marker: state.viewer_marker,
            link: state.link.clone(),
            view: state.view.clone(),
        }
    }
}
