//! # satchel-cli
//!
//! Command-line interface for the satchel skill loader.
//!
//! ## Commands
//!
//! - `satchel list` — List skills in the skills root
//! - `satchel show` — Show one skill's metadata and instructions
//! - `satchel bootstrap` — Emit the bootstrap context for a host integration
//! - `satchel create` — Scaffold a new skill directory
//! - `satchel config` — Show current configuration

pub mod commands;

pub use commands::Cli;
