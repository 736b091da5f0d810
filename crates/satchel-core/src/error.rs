use thiserror::Error;

/// Unified error type for the satchel workspace.
///
/// Input-data conditions (missing skills root, malformed SKILL.md) are
/// deliberately NOT represented here — the scanner returns an empty listing
/// and the parser degrades to a header-less document. Errors exist for
/// environment, config, and host-delivery failures only.
#[derive(Error, Debug)]
pub enum SatchelError {
    // ── Skill errors ───────────────────────────────────────────
    #[error("skill error: {0}")]
    Skill(String),

    // ── Host adapter errors ────────────────────────────────────
    #[error("host error: {host}: {reason}")]
    Host { host: String, reason: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SatchelError>;
