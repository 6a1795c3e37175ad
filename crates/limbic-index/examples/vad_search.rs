//! Build an index over the octant lexicon and run a handful of queries.
//!
//! ```sh
//! cargo run --example vad_search
//! ```

use limbic_core::{LimbicConfig, VadPoint};
use limbic_index::VadIndex;
use test_fixtures::octant_lexicon;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = LimbicConfig::default();
    let index = VadIndex::build(octant_lexicon());

    let queries = [
        ("uneasy anticipation", VadPoint::new(-0.2, 0.55, -0.1)),
        ("quiet satisfaction", VadPoint::new(0.6, -0.3, 0.2)),
        ("neutral", VadPoint::ORIGIN),
    ];

    for (name, query) in queries {
        let response = index.search(
            query,
            config.search.default_k,
            config.search.default_radius,
            config.search.default_sigma,
            &config.search.default_option,
        );
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("--- {name}\n{json}"),
            Err(err) => eprintln!("--- {name}: serialization failed: {err}"),
        }
    }
}
