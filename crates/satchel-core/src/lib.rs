//! # satchel-core
//!
//! Shared error type for the satchel workspace. Every other crate returns
//! `satchel_core::Result` so adapters and the CLI compose without per-crate
//! error plumbing.

pub mod error;

pub use error::{Result, SatchelError};
