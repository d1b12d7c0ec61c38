use slotpath::config::{Config, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert!(config.parse_values);
    assert!(!config.create_backup);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("output_format = \"yaml\""));
    assert!(toml_str.contains("parse_values = true"));
    assert!(toml_str.contains("create_backup = false"));
    assert!(toml_str.contains("log_filter = \"warn\""));
}

#[test]
fn test_deserialize_full_config() {
    let toml_str = r#"
        output_format = "json"
        parse_values = false
        create_backup = true
        log_filter = "slotpath=debug"
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(!config.parse_values);
    assert!(config.create_backup);
    assert_eq!(config.log_filter, "slotpath=debug");
}

#[test]
fn test_deserialize_empty_config() {
    // Empty TOML should use all defaults
    let config: Config = toml::from_str("").expect("Failed to deserialize config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(toml::from_str::<Config>("output_format = \"xml\"").is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let original = Config {
        output_format: OutputFormat::Json,
        parse_values: false,
        create_backup: true,
        log_filter: "trace".to_string(),
    };
    original.save_to(&path).unwrap();

    assert_eq!(Config::try_load_from(&path).unwrap(), original);
}

#[test]
fn test_try_load_reports_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "output_format = [not toml").unwrap();

    let err = Config::try_load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_try_load_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::try_load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}
