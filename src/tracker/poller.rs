use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::demo::demo_position;
use super::error::TrackerError;
use super::proximity::ProximityMonitor;
use super::source::PositionSource;
use super::types::{demo_readout, FixOrigin, PositionFix};
use crate::alert::AlertCenter;
use crate::geo::haversine_km;
use crate::scene::MapScene;
use crate::viewer::ViewerState;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct TrackingConfig {
    pub satellite_id: u32,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub enum PollerMode {
    Idle,
    Polling {
        since: DateTime<Utc>,
        satellite_id: u32,
    },
}

#[derive(Debug, Clone, Default, Serialize, utoipa::ToSchema)]
pub struct ProximitySnapshot {
    pub near: bool,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PollerStatus {
    pub mode: PollerMode,
    /// Most recent live fix; untouched while the source is failing.
    pub last_fix: Option<PositionFix>,
    pub origin: Option<FixOrigin>,
    pub readout: Option<String>,
    pub proximity: ProximitySnapshot,
}

struct Shared {
    status: PollerStatus,
    monitor: ProximityMonitor,
}

struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<()>,
}

/// Periodic position poller. One worker task per session, stopped via a
/// oneshot stop channel.
pub struct Poller {
    shared: Arc<StdMutex<Shared>>,
    worker: Option<WorkerHandle>,
}

impl Poller {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(StdMutex::new(Shared {
                status: PollerStatus {
                    mode: PollerMode::Idle,
                    last_fix: None,
                    origin: None,
                    readout: None,
                    proximity: ProximitySnapshot::default(),
                },
                monitor: ProximityMonitor::new(),
            })),
            worker: None,
        }
    }

    pub fn status(&self) -> PollerStatus {
        self.shared.lock().unwrap().status.clone()
    }

    pub fn is_polling(&self) -> bool {
        self.worker.is_some()
    }

    /// Starts the poll worker. The first tick fires immediately; ticks are
    /// serialized, so a slow fetch skips intervals instead of overlapping
    /// the next one.
    pub fn start(
        &mut self,
        source: Arc<dyn PositionSource>,
        scene: MapScene,
        alerts: AlertCenter,
        viewer: ViewerState,
        config: TrackingConfig,
    ) -> Result<(), TrackerError> {
        if self.worker.is_some() {
            return Err(TrackerError::AlreadyPolling);
        }

        let shared = self.shared.clone();
        let (stop_tx, stop_rx) = oneshot::channel();

        {
            let mut locked = self.shared.lock().unwrap();
            locked.status.mode = PollerMode::Polling {
                since: Utc::now(),
                satellite_id: config.satellite_id,
            };
        }
        log::info!(
            "poller started for satellite {} every {}",
            config.satellite_id,
            humantime::format_duration(config.poll_interval)
        );

        let join = tokio::spawn(run_poll_loop(
            shared, source, scene, alerts, viewer, config, stop_rx,
        ));

        self.worker = Some(WorkerHandle { stop_tx, join });
        Ok(())
    }

    pub async fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop_tx.send(());
            let _ = worker.join.await;
            log::info!("poller stopped");
        }
        let mut locked = self.shared.lock().unwrap();
        locked.status.mode = PollerMode::Idle;
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_poll_loop(
    shared: Arc<StdMutex<Shared>>,
    source: Arc<dyn PositionSource>,
    scene: MapScene,
    alerts: AlertCenter,
    viewer: ViewerState,
    config: TrackingConfig,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let mut interval = tokio::time::interval(config.poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let should_stop = tokio::select! {
            _ = interval.tick() => false,
            _ = &mut stop_rx => true,
        };
        if should_stop {
            return;
        }

        poll_once(&shared, source.as_ref(), &scene, &alerts, &viewer, &config).await;
    }
}

/// One tick: fetch, then state update → redraw → proximity recompute →
/// recolor/alert, in that order.
async fn poll_once(
    shared: &Arc<StdMutex<Shared>>,
    source: &dyn PositionSource,
    scene: &MapScene,
    alerts: &AlertCenter,
    viewer: &ViewerState,
    config: &TrackingConfig,
) {
    match source.fetch(config.satellite_id).await {
        Ok(fix) => apply_live_fix(shared, scene, alerts, viewer, fix),
        Err(err) => {
            log::warn!("position fetch failed, showing demo position: {err}");
            apply_demo_fallback(shared, scene, Utc::now());
        }
    }
}

fn apply_live_fix(
    shared: &Arc<StdMutex<Shared>>,
    scene: &MapScene,
    alerts: &AlertCenter,
    viewer: &ViewerState,
    fix: PositionFix,
) {
    {
        let mut locked = shared.lock().unwrap();
        // Fix timestamps must strictly increase.
        if let Some(prev) = &locked.status.last_fix {
            if fix.timestamp <= prev.timestamp {
                return;
            }
        }
        locked.status.readout = Some(fix.readout());
        locked.status.origin = Some(FixOrigin::Live);
        locked.status.last_fix = Some(fix.clone());
    }

    scene.object_moved(fix.position);

    let Some(viewer_position) = viewer.position() else {
        return;
    };

    let distance_km = haversine_km(viewer_position, fix.position);
    let (entered, near) = {
        let mut locked = shared.lock().unwrap();
        let entered = locked.monitor.observe(distance_km);
        let near = locked.monitor.is_near();
        locked.status.proximity = ProximitySnapshot {
            near,
            distance_km: Some(distance_km),
        };
        (entered, near)
    };

    scene.update_link(viewer_position, fix.position, near);
    if entered {
        alerts.raise(scene, fix.position);
    }
}

fn apply_demo_fallback(shared: &Arc<StdMutex<Shared>>, scene: &MapScene, at: DateTime<Utc>) {
    let position = demo_position(at);
    {
        let mut locked = shared.lock().unwrap();
        locked.status.readout = Some(demo_readout(position));
        locked.status.origin = Some(FixOrigin::Demo);
    }
    scene.object_moved(position);
}
