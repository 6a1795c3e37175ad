//! The five similarity scoring models and the intensity descriptor.
//!
//! Every model maps a query/candidate pair to a score in `[0.0, 1.0]`,
//! reported as an integer percentage. Models are a closed enum resolved
//! from the similarity token; unknown tokens fall back to [`L2Norm`].
//!
//! [`L2Norm`]: SimilarityModel::L2Norm

use limbic_core::constants::MAX_L2_DISTANCE;
use limbic_core::{AxisScale, VadPoint};

/// Closed set of scoring models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityModel {
    /// `1 - d2/r2` against the query radius; degrades near the rim.
    Relative,
    /// Distance normalized by the diameter of the affect cube.
    L2Norm,
    /// Cosine of the angle between the two vectors, mapped to `[0, 1]`.
    Cosine,
    /// RBF kernel on plain squared distance.
    Gauss,
    /// RBF kernel on per-axis whitened squared distance.
    GaussWhitened,
}

impl SimilarityModel {
    /// Resolve a similarity token. `"none"` and anything unknown select
    /// the L2-normalized model.
    pub fn from_token(token: &str) -> Self {
        match token {
            "d" => Self::Relative,
            "cos" => Self::Cosine,
            "gauss" => Self::Gauss,
            "gauss_w" => Self::GaussWhitened,
            _ => Self::L2Norm,
        }
    }

    /// Human-readable metric name reported with each hit.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Self::Relative => "Relative similarity based on d",
            Self::L2Norm => "L2 normalization",
            Self::Cosine => "Cosine similarity",
            Self::Gauss => "RBF with plain L2",
            Self::GaussWhitened => "Whitened / Axis-scaled Gaussian",
        }
    }

    /// Whether the model belongs to the Gaussian family, which carries
    /// the descriptive label even in full output.
    pub fn is_gaussian(&self) -> bool {
        matches!(self, Self::Gauss | Self::GaussWhitened)
    }

    /// Integer similarity percentage in `[0, 100]`, rounded half away
    /// from zero.
    pub fn percent(
        &self,
        query: &VadPoint,
        point: &VadPoint,
        radius: f64,
        sigma: f64,
        scale: &AxisScale,
    ) -> u8 {
        let score = match self {
            Self::Relative => relative(query, point, radius),
            Self::L2Norm => l2_norm(query, point),
            Self::Cosine => cosine(query, point),
            Self::Gauss => gauss(query, point, sigma),
            Self::GaussWhitened => gauss_whitened(query, point, sigma, scale),
        };
        (score * 100.0).round() as u8
    }
}

/// Share of the query radius left at the candidate's squared distance.
/// Zero for a non-positive radius and at or beyond the rim.
fn relative(query: &VadPoint, point: &VadPoint, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    let d2 = query.distance_sq(point);
    let r2 = radius * radius;
    if d2 >= r2 {
        return 0.0;
    }
    1.0 - d2 / r2
}

/// Distance rebased against the cube diameter, clamped to `[0, 1]`.
fn l2_norm(query: &VadPoint, point: &VadPoint) -> f64 {
    (1.0 - query.distance(point) / MAX_L2_DISTANCE).clamp(0.0, 1.0)
}

/// `(cos + 1) / 2`; zero when either vector has no magnitude.
fn cosine(query: &VadPoint, point: &VadPoint) -> f64 {
    let qm = query.magnitude();
    let pm = point.magnitude();
    if qm == 0.0 || pm == 0.0 {
        return 0.0;
    }
    let cos = query.dot(point) / (qm * pm);
    0.5 * (cos + 1.0)
}

/// `exp(-d2 / (2 sigma^2))`; zero for a non-positive sigma.
fn gauss(query: &VadPoint, point: &VadPoint, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return 0.0;
    }
    (-query.distance_sq(point) / (2.0 * sigma * sigma))
        .exp()
        .clamp(0.0, 1.0)
}

/// Gaussian over the whitened distance: each axis delta divided by that
/// axis's scale before squaring. Zero for a non-positive sigma or any
/// non-positive scale component.
fn gauss_whitened(query: &VadPoint, point: &VadPoint, sigma: f64, scale: &AxisScale) -> f64 {
    if sigma <= 0.0 || scale.valence <= 0.0 || scale.arousal <= 0.0 || scale.dominance <= 0.0 {
        return 0.0;
    }
    let dv = (query.valence - point.valence) / scale.valence;
    let da = (query.arousal - point.arousal) / scale.arousal;
    let dd = (query.dominance - point.dominance) / scale.dominance;
    let d2 = dv * dv + da * da + dd * dd;
    (-d2 / (2.0 * sigma * sigma)).exp().clamp(0.0, 1.0)
}

/// Descriptive intensity label for a similarity percentage.
pub fn intensity_label(percent: u8) -> &'static str {
    match percent {
        0..=5 => "negligible",
        6..=20 => "mild",
        21..=40 => "somewhat",
        41..=60 => "moderate",
        61..=80 => "quite",
        81..=95 => "intense",
        _ => "absolute",
    }
}
