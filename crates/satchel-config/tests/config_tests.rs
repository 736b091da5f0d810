#[cfg(test)]
mod tests {
    use satchel_config::schema::*;
    use satchel_config::ConfigLoader;
    use std::io::Write;
    use std::path::PathBuf;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_satchel_config_defaults() {
        let config = SatchelConfig::default();
        assert!(config.skills.root.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_skills_root_default_under_home() {
        let config = SatchelConfig::default();
        let root = config.skills_root();
        assert!(root.ends_with(".satchel/skills"));
    }

    #[test]
    fn test_explicit_skills_root_wins() {
        let config = SatchelConfig {
            skills: SkillsConfig {
                root: Some(PathBuf::from("/opt/skills")),
            },
            ..Default::default()
        };
        assert_eq!(config.skills_root(), PathBuf::from("/opt/skills"));
    }

    // ── TOML tests ─────────────────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = SatchelConfig {
            skills: SkillsConfig {
                root: Some(PathBuf::from("/srv/skills")),
            },
            logging: LoggingConfig {
                level: "debug".into(),
                format: "json".into(),
            },
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SatchelConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.skills.root, config.skills.root);
        assert_eq!(restored.logging.level, "debug");
        assert_eq!(restored.logging.format, "json");
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[skills]
root = "/data/skills"
"#;
        let config: SatchelConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.skills.root, Some(PathBuf::from("/data/skills")));
        // Defaults should fill in
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: SatchelConfig = toml::from_str("").unwrap();
        assert!(config.skills.root.is_none());
        assert_eq!(config.logging.level, "info");
    }

    // ── Loader tests ───────────────────────────────────────────

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[skills]\nroot = \"/explicit/skills\"").unwrap();

        let loader = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(loader.path(), file.path());
        assert_eq!(
            loader.get().skills.root,
            Some(PathBuf::from("/explicit/skills"))
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let loader = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.get().logging.level, "info");
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [[").unwrap();

        let result = ConfigLoader::load(Some(file.path()));
        assert!(matches!(
            result,
            Err(satchel_core::SatchelError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(
            ConfigLoader::resolve_path(Some(&explicit)),
            explicit
        );
    }
}
