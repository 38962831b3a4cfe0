//! Installs the global subscriber, so this file holds a single test.

use dessert_clicker::config::{Config, LoggingConfig};
use dessert_clicker::logging::init_tracing;
use tempfile::TempDir;

const WARNING: &str = "First dessert has a non-zero threshold";

#[test]
fn first_tier_warning_reaches_log_file_once() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("app.log");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[[desserts]]
image = "scone"
price = 3
threshold = 3
"#,
    )
    .unwrap();

    let logging = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(log_path.clone()),
    };
    let used = init_tracing(&logging, None).unwrap();
    assert_eq!(used, Some(log_path.clone()));

    // Loading and building the catalog stay silent; only the explicit check warns.
    let config = Config::load_from(&config_path).unwrap();
    config.catalog().unwrap();
    assert!(config.warn_on_unreachable_first_tier());

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(log.matches(WARNING).count(), 1, "log was:\n{log}");
    assert!(log.contains("WARN"));
    assert!(log.contains("scone"));
}
