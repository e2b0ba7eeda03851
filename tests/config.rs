use datekit::config::Config;
use datekit::constants;
use datekit::{Period, WorkSchedule};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.formats.schedule_date_format, constants::SCHEDULE_DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.enabled);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown specifier should fail
    config.formats.schedule_date_format = "%d-%m-%Q".to_string();
    assert!(config.validate().is_err());

    // A schedule format without the year cannot be read back
    config.formats.schedule_date_format = "%d-%m".to_string();
    assert!(config.validate().is_err());

    config.formats.schedule_date_format = "   ".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.formats.schedule_date_format = constants::SCHEDULE_DATE_FORMAT.to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("schedule_date_format = \"%d-%m-%Y\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[logging]
enabled = true
level = "debug"
"#;

    let config = Config::from_toml(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");

    // Check that unspecified values use defaults
    assert_eq!(config.formats.schedule_date_format, constants::SCHEDULE_DATE_FORMAT);
}

#[test]
fn test_empty_config_deserialization() {
    let config = Config::from_toml("").unwrap();
    let default_config = Config::default();

    assert_eq!(
        config.formats.schedule_date_format,
        default_config.formats.schedule_date_format
    );
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_from_toml_rejects_invalid_values() {
    assert!(Config::from_toml("[formats]\nschedule_date_format = \"%d\"\n").is_err());
    assert!(Config::from_toml("[logging]\nlevel = 3\n").is_err());
}

#[test]
fn test_load_from_file_feeds_schedule() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("datekit_test_config");
    let config_path = temp_dir.join("config.toml");
    fs::create_dir_all(&temp_dir).unwrap();
    fs::write(&config_path, "[formats]\nschedule_date_format = \"%Y.%m.%d\"\n").unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    let schedule = WorkSchedule::from_config(1, 1, &config.formats).unwrap();
    let dates = schedule.generate(&Period::new("2024.03.01", "2024.03.04")).unwrap();
    assert_eq!(dates, vec!["2024.03.01", "2024.03.03"]);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_missing_file() {
    let path = std::env::temp_dir().join("datekit_missing").join("nope.toml");
    assert!(Config::load_from_file(&path).is_err());
}
