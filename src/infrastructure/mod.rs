//! Infrastructure layer - external adapters (HTTP API, archive, filesystem).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod archive;
pub mod config;
pub mod fleep_api;
pub mod paths;

pub use archive::{ensure_export_archive, extract_archive};
pub use config::{ensure_config_exists, load_config};
pub use fleep_api::FleepClient;
pub use paths::ensure_data_dir;
