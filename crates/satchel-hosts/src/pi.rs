//! Pi session-start extension adapter.
//!
//! Pi extensions contribute an optional string that the host concatenates
//! into the session's system prompt. Same core path as the chat-transform
//! adapter; only the delivery seam differs.

use std::path::PathBuf;

use satchel_skills::{bootstrap, SkillScanner};

/// Session-start extension: returns the bootstrap block for the host to
/// append, or `None` when there is nothing to inject.
#[derive(Debug)]
pub struct PiExtension {
    scanner: SkillScanner,
}

impl PiExtension {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            scanner: SkillScanner::new(root),
        }
    }

    /// One fresh scan-parse-build cycle per session start.
    pub fn session_context(&self) -> Option<String> {
        bootstrap::build(&self.scanner.scan()).rendered
    }
}
