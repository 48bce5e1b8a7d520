/// Distance below which the tracked object counts as near the viewer.
pub const NEAR_THRESHOLD_KM: f64 = 1000.0;

/// Edge-triggered near-range detector. `observe` reports `true` only on the
/// tick where the distance first drops under the threshold, not on every
/// tick spent inside it.
#[derive(Debug, Default)]
pub struct ProximityMonitor {
    near: bool,
}

impl ProximityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_near(&self) -> bool {
        self.near
    }

    /// Feeds one computed distance; returns whether the object just entered
    /// near range.
    pub fn observe(&mut self, distance_km: f64) -> bool {
        let near = distance_km < NEAR_THRESHOLD_KM;
        let entered = near && !self.near;
        self.near = near;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_entry() {
        let mut monitor = ProximityMonitor::new();
        let fired: Vec<bool> = [1500.0, 900.0, 800.0, 1200.0, 500.0]
            .into_iter()
            .map(|d| monitor.observe(d))
            .collect();
        assert_eq!(fired, [false, true, false, false, true]);
    }

    #[test]
    fn threshold_is_strict() {
        let mut monitor = ProximityMonitor::new();
        assert!(!monitor.observe(NEAR_THRESHOLD_KM));
        assert!(!monitor.is_near());
        assert!(monitor.observe(NEAR_THRESHOLD_KM - 0.001));
        assert!(monitor.is_near());
    }

    #[test]
    fn leaving_rearms_the_trigger() {
        let mut monitor = ProximityMonitor::new();
        assert!(monitor.observe(400.0));
        assert!(!monitor.observe(450.0));
        assert!(!monitor.observe(2000.0));
        assert!(monitor.observe(999.0));
    }
}
