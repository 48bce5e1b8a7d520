use std::sync::{Arc, Mutex};

use crate::geo::GeoPoint;

/// Where the viewer is, once geolocation resolves. Set at most once per
/// session; when geolocation is denied this simply never resolves and the
/// proximity features stay inactive.
#[derive(Clone, Default)]
pub struct ViewerState {
    shared: Arc<Mutex<Option<GeoPoint>>>,
}

impl ViewerState {
    pub fn preset(position: Option<GeoPoint>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(position)),
        }
    }

    /// Stores the resolved position. Returns false (and changes nothing) if
    /// the viewer already resolved earlier in the session.
    pub fn resolve(&self, position: GeoPoint) -> bool {
        let mut slot = self.shared.lock().unwrap();
        if slot.is_some() {
            return false;
        }
        *slot = Some(position);
        true
    }

    pub fn position(&self) -> Option<GeoPoint> {
        *self.shared.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_at_most_once() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.position(), None);

        let first = GeoPoint::new(48.2, 16.4);
        assert!(viewer.resolve(first));
        assert!(!viewer.resolve(GeoPoint::new(0.0, 0.0)));
        assert_eq!(viewer.position(), Some(first));
    }
}
