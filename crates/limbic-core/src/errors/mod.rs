//! Error taxonomies for the limbic workspace.
//!
//! One enum per subsystem, `thiserror` only. Fallible operations return
//! explicit `Result`s; nothing panics on bad input.

mod config_error;
mod dataset_error;
mod search_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use search_error::SearchError;
