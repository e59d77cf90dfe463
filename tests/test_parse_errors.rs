use config_bindr::{
    ConfigError, Extract, ExtractorArgs, ExtractorOptions, Severity, Snapshot, extract_from,
};

#[derive(Debug, Default, Extract)]
pub struct MixedConfig {
    pub name: String,
    pub workers: i32,
    pub region: String,
}

#[derive(Debug, Default, Extract)]
pub struct FlagConfig {
    pub enabled: bool,
}

#[derive(Debug, Default, Extract)]
pub struct WrongTypeConfig {
    #[field(name = "TEST_WRONG_TYPE")]
    pub wrong_type: u16,
}

#[test]
fn test_integer_error_leaves_partial_population() {
    let mut config = MixedConfig::default();
    let snapshot = Snapshot::new()
        .with_env("NAME", "svc")
        .with_env("WORKERS", "four")
        .with_env("REGION", "eu");

    let err = extract_from(
        ExtractorArgs::new(ExtractorOptions::new()).config(&mut config, ""),
        snapshot,
    )
    .unwrap_err();

    assert_eq!(err.severity(), Severity::Reported);
    match err {
        ConfigError::InvalidInteger { key, value, type_name } => {
            assert_eq!(key, "WORKERS");
            assert_eq!(value, "four");
            assert_eq!(type_name, "i32");
        }
        other => panic!("Expected InvalidInteger, got {:?}", other),
    }
    assert_eq!(config.name, "svc");
    assert_eq!(config.workers, 0);
    assert_eq!(config.region, "");
}

#[test]
fn test_wrong_type_from_env_file() {
    let mut config = WrongTypeConfig { wrong_type: 8080 };
    let options = ExtractorOptions::new().with_env_file("./test.env");

    let err = extract_from(ExtractorArgs::new(options).config(&mut config, ""), Snapshot::new())
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidInteger { .. }));
    assert_eq!(config.wrong_type, 8080);
}

#[test]
fn test_unparseable_boolean_is_fatal() {
    let mut config = FlagConfig::default();
    let snapshot = Snapshot::new().with_args(["./app", "--enabled=yes"]);

    let err = extract_from(
        ExtractorArgs::new(ExtractorOptions::new()).config(&mut config, ""),
        snapshot,
    )
    .unwrap_err();

    assert_eq!(err.severity(), Severity::Fatal);
}

#[test]
#[should_panic(expected = "Invalid boolean value")]
fn test_unparseable_boolean_escalates() {
    colored::control::set_override(false);

    let mut config = FlagConfig::default();
    let snapshot = Snapshot::new().with_env("ENABLED", "nope");

    if let Err(e) = extract_from(
        ExtractorArgs::new(ExtractorOptions::new()).config(&mut config, ""),
        snapshot,
    ) {
        let _ = e.escalate();
    }
}

#[test]
fn test_numeric_booleans() {
    let mut config = FlagConfig::default();
    let snapshot = Snapshot::new().with_env("ENABLED", "1");

    extract_from(
        ExtractorArgs::new(ExtractorOptions::new()).config(&mut config, ""),
        snapshot,
    )
    .unwrap();

    assert!(config.enabled);
}
