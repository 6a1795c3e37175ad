//! Shared lexicon fixtures for tests and benches.
//!
//! Everything here is generated, not loaded: the octant lexicon is a
//! hand-picked set covering all eight VAD octants, and the synthetic
//! lexicon is a seeded xorshift cloud for scale tests.

use limbic_core::EmotionEntry;

/// Eight emotions, one per octant of the VAD cube. Coordinates follow
/// the usual lexicon norms: joy is pleasant-aroused-dominant, despair
/// its diagonal opposite.
pub fn octant_lexicon() -> Vec<EmotionEntry> {
    vec![
        EmotionEntry::new("joy", 0.76, 0.48, 0.35),
        EmotionEntry::new("rage", -0.51, 0.59, 0.25),
        EmotionEntry::new("fear", -0.64, 0.60, -0.43),
        EmotionEntry::new("despair", -0.72, -0.27, -0.42),
        EmotionEntry::new("serenity", 0.65, -0.42, 0.27),
        EmotionEntry::new("surprise", 0.40, 0.67, -0.13),
        EmotionEntry::new("relief", 0.55, -0.25, -0.12),
        EmotionEntry::new("contempt", -0.55, -0.20, 0.44),
    ]
}

/// Deterministic pseudo-random lexicon of `n` entries inside the cube.
/// Same seed, same cloud; no RNG crate involved.
pub fn synthetic_lexicon(n: usize, seed: u64) -> Vec<EmotionEntry> {
    let mut state = seed | 1;
    let mut entries = Vec::with_capacity(n);
    for i in 0..n {
        let v = unit(xorshift(&mut state));
        let a = unit(xorshift(&mut state));
        let d = unit(xorshift(&mut state));
        entries.push(EmotionEntry::new(format!("syn-{i:05}"), v, a, d));
    }
    entries
}

/// Serialize entries into the on-disk lexicon JSON shape.
pub fn lexicon_json(entries: &[EmotionEntry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
}

fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

/// Top 53 bits mapped onto `[-1.0, 1.0)`.
fn unit(x: u64) -> f64 {
    (x >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
}
