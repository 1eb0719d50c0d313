use chartmark_settings::{Config, ConfigError, InteractionSettings, SettingsError};
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::new();
    assert_eq!(config.interaction.hit_tolerance, 8.0);
    assert_eq!(config.interaction.handle_tolerance, 10.0);
    assert_eq!(config.interaction.min_size, 8.0);
    assert_eq!(config.theme.projection, "#f59e0b");
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.theme.stroke = "#ff00ff".to_string();
    config.interaction.hit_tolerance = 4.5;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.interaction.min_size = 12.0;
    config.save_to_file(&path).unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[interaction]\nhit_tolerance = 3.0\n").unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.interaction.hit_tolerance, 3.0);
    assert_eq!(loaded.interaction.min_size, 8.0);
    assert_eq!(loaded.theme, Config::default().theme);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
    ));
    assert!(!path.exists());
}

#[test]
fn test_invalid_values_are_rejected() {
    let config = Config {
        interaction: InteractionSettings {
            hit_tolerance: 0.0,
            ..InteractionSettings::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "interaction.hit_tolerance"
    ));

    let mut config = Config::default();
    config.theme.text = "  ".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::EmptyColor("theme.text".to_string()))
    );
}

#[test]
fn test_invalid_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"interaction":{"min_size":-2}}"#).unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(_))
    ));

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));
}

#[test]
fn test_load_or_default_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let loaded = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_default_path_ends_with_app_dir() {
    if let Ok(path) = Config::default_path() {
        assert!(path.ends_with("chartmark/config.toml"));
    }
}
