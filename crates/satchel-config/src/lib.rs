//! # satchel-config
//!
//! Configuration for the satchel tooling. Reads `satchel.toml`, then applies
//! environment variable overrides — the skills root is resolved exactly once
//! at process start and threaded into the scanner as an explicit path.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{LoggingConfig, SatchelConfig, SkillsConfig};
