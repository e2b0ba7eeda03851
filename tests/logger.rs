use std::fs;

use datekit::config::LoggingConfig;
use datekit::logger::setup_logging;

#[test]
fn test_disabled_logging_is_noop() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert!(setup_logging(&config).is_ok());
}

#[test]
fn test_bad_level_is_rejected() {
    let config = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
        file: None,
    };
    assert!(setup_logging(&config).is_err());
}

#[test]
fn test_file_logging_receives_library_records() {
    let log_path = std::env::temp_dir().join("datekit_logger_test.log");
    let _ = fs::remove_file(&log_path);

    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(log_path.clone()),
    };
    setup_logging(&config).unwrap();

    // A parse failure is logged at debug level
    assert!(datekit::date_to_timestamp("definitely not a date").is_err());
    log::logger().flush();

    let content = fs::read_to_string(&log_path).unwrap_or_default();
    assert!(content.contains("definitely not a date"));
    assert!(content.contains("DEBUG"));

    // Only one global logger can be installed
    assert!(setup_logging(&config).is_err());

    let _ = fs::remove_file(&log_path);
}
