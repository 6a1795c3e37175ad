//! JSON loader for the filtered VAD emotion lexicon.
//!
//! The on-disk shape is a flat array of records:
//!
//! ```json
//! [{"term": "joy", "valence": 0.92, "arousal": 0.64, "dominance": 0.51}]
//! ```
//!
//! Validation is strict: a single bad record fails the whole load.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::entry::EmotionEntry;
use crate::errors::DatasetError;
use crate::point::VadPoint;

/// Read and validate a lexicon file.
pub fn load_entries(path: &Path) -> Result<Vec<EmotionEntry>, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let entries = parse_entries(&text)?;
    info!(
        path = %path.display(),
        entries = entries.len(),
        "loaded emotion lexicon"
    );
    Ok(entries)
}

/// Validate lexicon JSON already held in memory.
pub fn parse_entries(text: &str) -> Result<Vec<EmotionEntry>, DatasetError> {
    let value: Value = serde_json::from_str(text)?;
    let records = value.as_array().ok_or(DatasetError::NotAnArray)?;

    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let term = string_field(record, index, "term")?;
        let valence = number_field(record, index, "valence")?;
        let arousal = number_field(record, index, "arousal")?;
        let dominance = number_field(record, index, "dominance")?;
        entries.push(EmotionEntry {
            term,
            point: VadPoint::new(valence, arousal, dominance),
        });
    }
    Ok(entries)
}

fn string_field(record: &Value, index: usize, field: &'static str) -> Result<String, DatasetError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(DatasetError::MissingField { index, field })
}

fn number_field(record: &Value, index: usize, field: &'static str) -> Result<f64, DatasetError> {
    record
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(DatasetError::MissingField { index, field })
}
