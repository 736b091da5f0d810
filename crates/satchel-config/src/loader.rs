use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::schema::SatchelConfig;

/// Loads the satchel configuration.
///
/// No hot reload: every host-triggered cycle is a fresh scan, so there is
/// no long-lived state a config change would need to invalidate.
pub struct ConfigLoader {
    config: SatchelConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SATCHEL_CONFIG env >
    /// ~/.satchel/satchel.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SATCHEL_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".satchel")
            .join("satchel.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> satchel_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<SatchelConfig>(&raw).map_err(|e| {
                satchel_core::SatchelError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            SatchelConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Get a snapshot of the loaded config.
    pub fn get(&self) -> SatchelConfig {
        self.config.clone()
    }

    /// Path the config was resolved to (whether or not it existed).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides. Env wins over the file for these keys so a
    /// host hook can redirect one invocation without editing satchel.toml.
    fn apply_env_overrides(mut config: SatchelConfig) -> SatchelConfig {
        if let Ok(v) = std::env::var("SATCHEL_SKILLS_ROOT") {
            config.skills.root = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("SATCHEL_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }
}
