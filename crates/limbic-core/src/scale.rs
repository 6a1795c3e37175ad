//! Per-axis spread of a lexicon, used by the whitened Gaussian model.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_AXIS_SCALE;
use crate::point::Axis;

/// Sample standard deviation of an entry set along each VAD axis.
///
/// Constructed values are floored at [`MIN_AXIS_SCALE`] so a degenerate
/// lexicon (all entries sharing one axis value) cannot produce a zero
/// divisor during whitening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl AxisScale {
    /// Unit scale: whitening becomes a no-op.
    pub const UNIT: Self = Self {
        valence: 1.0,
        arousal: 1.0,
        dominance: 1.0,
    };

    /// Build a scale, flooring every axis at [`MIN_AXIS_SCALE`].
    pub fn new(valence: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            valence: valence.max(MIN_AXIS_SCALE),
            arousal: arousal.max(MIN_AXIS_SCALE),
            dominance: dominance.max(MIN_AXIS_SCALE),
        }
    }

    /// Scale factor along one axis.
    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Valence => self.valence,
            Axis::Arousal => self.arousal,
            Axis::Dominance => self.dominance,
        }
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_floors_each_axis() {
        let scale = AxisScale::new(0.0, -1.0, 0.4);
        assert_eq!(scale.valence, MIN_AXIS_SCALE);
        assert_eq!(scale.arousal, MIN_AXIS_SCALE);
        assert_eq!(scale.dominance, 0.4);
    }
}
