use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use utoipa::ToSchema;

use crate::geo::GeoPoint;
use crate::scene::MapScene;

/// How long a banner stays up before it dismisses itself.
pub const DISMISS_AFTER: Duration = Duration::from_secs(8);

/// Notification cue the page plays when a banner is raised.
pub const NOTIFICATION_SOUND_URL: &str = "https://www.soundjay.com/buttons/sounds/beep-07.mp3";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Banner {
    pub id: String,
    pub text: String,
    pub sound: String,
    pub raised_at: DateTime<Utc>,
}

/// Raises near-pass banners and dismisses them after `DISMISS_AFTER`,
/// restoring the overview zoom. Banners may stack when the object re-enters
/// near range before a previous dismissal.
#[derive(Clone)]
pub struct AlertCenter {
    text: String,
    banners: Arc<Mutex<Vec<Banner>>>,
    timers: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl AlertCenter {
    pub fn new(satellite_name: &str) -> Self {
        Self {
            text: format!("🚀 THE {} IS PASSING NEAR YOU!", satellite_name.to_uppercase()),
            banners: Arc::new(Mutex::new(Vec::new())),
            timers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Raises a banner, zooms the scene onto the object and arms the dismiss
    /// timer. Returns the banner id.
    pub fn raise(&self, scene: &MapScene, object: GeoPoint) -> String {
        let banner = Banner {
            id: uuid::Uuid::new_v4().to_string(),
            text: self.text.clone(),
            sound: NOTIFICATION_SOUND_URL.to_string(),
            raised_at: Utc::now(),
        };
        let id = banner.id.clone();
        log::info!("proximity alert raised ({})", id);

        self.banners.lock().unwrap().push(banner);
        scene.zoom_to(object);

        let banners = self.banners.clone();
        let scene = scene.clone();
        let dismiss_id = id.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            banners.lock().unwrap().retain(|b| b.id != dismiss_id);
            scene.reset_view();
        });

        let mut timers = self.timers.lock().unwrap();
        timers.retain(|t| !t.is_finished());
        timers.push(timer);

        id
    }

    pub fn active(&self) -> Vec<Banner> {
        self.banners.lock().unwrap().clone()
    }

    /// Aborts pending dismiss timers and drops all banners. Part of session
    /// teardown.
    pub fn shutdown(&self) {
        for timer in self.timers.lock().unwrap().drain(..) {
            timer.abort();
        }
        self.banners.lock().unwrap().clear();
    }
}
