//! Timestamped VAD samples and the snapshot handed to the engine.

use chrono::{DateTime, Utc};
use limbic_core::VadPoint;
use serde::{Deserialize, Serialize};

/// One observed affect state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VadSample {
    pub point: VadPoint,
    pub timestamp: DateTime<Utc>,
}

impl VadSample {
    pub fn new(point: VadPoint, timestamp: DateTime<Utc>) -> Self {
        Self { point, timestamp }
    }

    /// Seconds elapsed from `earlier` to `self`. Negative when the
    /// samples are out of order; callers apply their own fallback.
    pub fn seconds_since(&self, earlier: &VadSample) -> f64 {
        let delta = self.timestamp.signed_duration_since(earlier.timestamp);
        delta.num_milliseconds() as f64 / 1000.0
    }
}

/// Everything one analysis run looks at.
///
/// `history` is ordered oldest first and usually contains `current` as
/// its last element, though the engine does not require that; the
/// instant and cumulative groups read their own fields independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectSnapshot {
    /// The state being analyzed.
    pub current: VadSample,
    /// The immediately preceding state, when one exists.
    pub previous: Option<VadSample>,
    /// Recorded trail, oldest first.
    pub history: Vec<VadSample>,
}

impl AffectSnapshot {
    /// Snapshot with no history: first observation of a session.
    pub fn initial(current: VadSample) -> Self {
        Self {
            current,
            previous: None,
            history: vec![current],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seconds_since_is_signed() {
        let t0 = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let t1 = Utc.timestamp_opt(1_700_000_002, 500_000_000).unwrap();
        let a = VadSample::new(VadPoint::ORIGIN, t0);
        let b = VadSample::new(VadPoint::ORIGIN, t1);
        assert_eq!(b.seconds_since(&a), 2.5);
        assert_eq!(a.seconds_since(&b), -2.5);
    }
}
