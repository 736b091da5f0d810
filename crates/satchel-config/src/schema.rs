use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `satchel.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SatchelConfig {
    pub skills: SkillsConfig,
    pub logging: LoggingConfig,
}

// ── Skills ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Skills root directory. When unset, `~/.satchel/skills` is used.
    pub root: Option<PathBuf>,
}

impl SatchelConfig {
    /// Resolve the skills root once, at process start. The resolved path is
    /// handed to `SkillScanner::new` so everything below the config layer
    /// works against an explicit directory.
    pub fn skills_root(&self) -> PathBuf {
        match &self.skills.root {
            Some(root) => root.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".satchel")
                .join("skills"),
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    pub level: String,
    /// Log format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
