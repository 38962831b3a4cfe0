use dessert_clicker::catalog::ItemRecord;
use dessert_clicker::config::{Config, ConfigError};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.desserts.len(), 13);
    assert_eq!(config.desserts[0], ItemRecord::new("cupcake", 5, 0));
    assert_eq!(config.strings.app_name, "Dessert Clicker");
    assert!(config.strings.share_text.contains("{sold}"));
    assert!(config.strings.share_text.contains("{revenue}"));
    assert!(config.session.persist);
    assert!(config.session.snapshot_path.is_none());
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.toast_seconds, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("dessert-clicker/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = write_config(
        r#"
[strings]
app_name = "Bakery"

[ui]
tick_rate_ms = 100
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.strings.app_name, "Bakery");
    assert_eq!(config.strings.total_revenue, "Total Revenue");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.toast_seconds, 3);
    assert_eq!(config.desserts.len(), 13);
}

#[test]
fn test_custom_catalog() {
    let (_dir, path) = write_config(
        r#"
[[desserts]]
image = "A"
price = 5
threshold = 0

[[desserts]]
image = "B"
price = 10
threshold = 5
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.last(), &ItemRecord::new("B", 10, 5));
}

#[test]
fn test_unsorted_catalog_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[[desserts]]
image = "A"
price = 5
threshold = 10

[[desserts]]
image = "B"
price = 10
threshold = 5
"#,
    );
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("lower than the previous threshold"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_empty_catalog_fails_validation() {
    let config = Config {
        desserts: Vec::new(),
        ..Config::default()
    };
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("at least one item"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[strings\napp_name = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_snapshot_path_override() {
    let mut config = Config::default();
    assert!(config.snapshot_path().ends_with("dessert-clicker/session.toml"));
    config.session.snapshot_path = Some(PathBuf::from("/tmp/custom.toml"));
    assert_eq!(config.snapshot_path(), PathBuf::from("/tmp/custom.toml"));
}

#[test]
fn test_first_tier_warning_only_for_nonzero_threshold() {
    assert!(!Config::default().warn_on_unreachable_first_tier());

    let config = Config {
        desserts: vec![ItemRecord::new("scone", 3, 2)],
        ..Config::default()
    };
    assert!(config.warn_on_unreachable_first_tier());
}
