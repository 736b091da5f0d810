//! OpenCode chat-transform adapter.
//!
//! OpenCode calls the plugin once per chat-system-transform with the
//! ordered list of system-context parts it has assembled so far. This
//! adapter appends at most one entry and never touches the others.

use std::path::PathBuf;

use satchel_skills::{bootstrap, SkillScanner};

/// Chat-transform adapter: contributes the rendered bootstrap block to a
/// host-owned system-context list.
#[derive(Debug)]
pub struct OpenCodeTransform {
    scanner: SkillScanner,
}

impl OpenCodeTransform {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            scanner: SkillScanner::new(root),
        }
    }

    /// The block this adapter would append, if any. Each call is a fresh
    /// scan; absence of skills is silent by contract.
    pub fn rendered(&self) -> Option<String> {
        bootstrap::build(&self.scanner.scan()).rendered
    }

    /// Append the bootstrap block to the host's system-context parts.
    /// No-op when there is nothing to inject. Never panics — every
    /// input-data failure was already absorbed by the fail-soft pipeline.
    pub fn apply(&self, parts: &mut Vec<String>) {
        if let Some(rendered) = self.rendered() {
            parts.push(rendered);
        }
    }
}
