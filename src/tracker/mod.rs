mod demo;
mod error;
mod poller;
mod proximity;
mod source;
mod types;

pub use demo::demo_position;
pub use error::TrackerError;
pub use poller::{
    Poller, PollerMode, PollerStatus, ProximitySnapshot, TrackingConfig, DEFAULT_POLL_INTERVAL,
};
pub use proximity::{ProximityMonitor, NEAR_THRESHOLD_KM};
pub use source::{HttpPositionSource, PositionSource};
pub use types::{demo_readout, FixOrigin, PositionFix};

#[cfg(test)]
pub use source::testing::ScriptedSource;
