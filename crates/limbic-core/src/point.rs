//! VAD coordinates and the split axes of the affect space.

use serde::{Deserialize, Serialize};

/// A position in valence / arousal / dominance space.
///
/// Every component lives in `[-1.0, 1.0]`. The exact origin is reserved
/// as the neutral affect state and is handled before any tree traversal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VadPoint {
    pub valence: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl VadPoint {
    /// The neutral affect state.
    pub const ORIGIN: Self = Self {
        valence: 0.0,
        arousal: 0.0,
        dominance: 0.0,
    };

    pub fn new(valence: f64, arousal: f64, dominance: f64) -> Self {
        Self {
            valence,
            arousal,
            dominance,
        }
    }

    /// Component along the given split axis.
    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Valence => self.valence,
            Axis::Arousal => self.arousal,
            Axis::Dominance => self.dominance,
        }
    }

    /// Squared Euclidean distance. The primary ranking key of the engine;
    /// square roots are taken only where a model formula requires one.
    pub fn distance_sq(&self, other: &Self) -> f64 {
        let dv = self.valence - other.valence;
        let da = self.arousal - other.arousal;
        let dd = self.dominance - other.dominance;
        dv * dv + da * da + dd * dd
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Euclidean norm of the point treated as a vector from the origin.
    pub fn magnitude(&self) -> f64 {
        (self.valence * self.valence + self.arousal * self.arousal + self.dominance * self.dominance)
            .sqrt()
    }

    /// Dot product of two points treated as vectors.
    pub fn dot(&self, other: &Self) -> f64 {
        self.valence * other.valence
            + self.arousal * other.arousal
            + self.dominance * other.dominance
    }

    /// Exact equality with the origin, the reserved neutral query.
    /// No epsilon: a query must be bit-for-bit zero on all three axes.
    pub fn is_origin(&self) -> bool {
        self.valence == 0.0 && self.arousal == 0.0 && self.dominance == 0.0
    }
}

/// Split axes of the VAD space, cycled by tree depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Valence,
    Arousal,
    Dominance,
}

impl Axis {
    /// Axis for a tree level: depth modulo 3.
    pub fn from_depth(depth: usize) -> Self {
        match depth % 3 {
            0 => Self::Valence,
            1 => Self::Arousal,
            _ => Self::Dominance,
        }
    }
}
