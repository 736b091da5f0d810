use std::fs;

use tracing::{info, warn};

use crate::document;
use crate::scanner::SkillEntry;

/// Opening sentinel for the injected block. The sentinel pair tells the
/// model the material is already in context and must not be re-fetched;
/// the exact text is a constant, not a contract — any non-colliding pair
/// the hosts recognize works.
pub const CONTEXT_OPEN: &str = "<skills-context>";

/// Closing sentinel for the injected block.
pub const CONTEXT_CLOSE: &str = "</skills-context>";

const CONTEXT_PREAMBLE: &str = "The following skills are already loaded into this session. \
Apply them directly; do not re-read their source files.";

const BLOCK_SEPARATOR: &str = "\n\n";

/// The final bootstrap artifact: labeled blocks plus the wrapped rendering.
///
/// `rendered` is `None` exactly when `blocks` is empty — a skills root with
/// no injectable documents yields "nothing to inject", never an empty
/// wrapped block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapContext {
    /// `(label, content)` per non-inert skill, in scan order.
    pub blocks: Vec<(String, String)>,
    /// All blocks joined and wrapped in the sentinel markers.
    pub rendered: Option<String>,
}

impl BootstrapContext {
    /// Whether there is anything to inject.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Pure composition step: join labeled blocks and wrap them in the
/// sentinels. No I/O, so the empty/ordering behavior is testable without a
/// filesystem.
pub fn compose(blocks: Vec<(String, String)>) -> BootstrapContext {
    if blocks.is_empty() {
        return BootstrapContext {
            blocks,
            rendered: None,
        };
    }

    let joined = blocks
        .iter()
        .map(|(label, content)| format!("## Skill: {label}\n\n{content}"))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);

    let rendered = format!("{CONTEXT_OPEN}\n{CONTEXT_PREAMBLE}\n\n{joined}\n{CONTEXT_CLOSE}");

    BootstrapContext {
        blocks,
        rendered: Some(rendered),
    }
}

/// Read and parse each entry's document and compose the bootstrap block.
///
/// Inert entries are skipped. A document that disappears between scan and
/// build is skipped with a warning rather than injected as an empty block.
/// Entry order is preserved, so output is byte-identical across calls on an
/// unchanged filesystem.
pub fn build(entries: &[SkillEntry]) -> BootstrapContext {
    let mut blocks = Vec::new();

    for entry in entries {
        let Some(path) = &entry.document_path else {
            continue;
        };
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = ?path, error = %e, "skill document unreadable, skipping");
                continue;
            }
        };
        let doc = document::parse(&raw);
        blocks.push((entry.name.clone(), doc.body));
    }

    if !blocks.is_empty() {
        info!(skills = blocks.len(), "composed skills bootstrap context");
    }
    compose(blocks)
}
