use bottle::utils::validation::Validate;
use bottle::{BottleError, Locale, ScenarioConfig, Session};
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_end_to_end_scenario_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.toml");

    let toml_content = r#"
[bottle]
capacity = 1000.0
initial_level = 300.0
locale = "german"

[[steps]]
action = "empty"
amount = 500.0

[[steps]]
action = "Fill"
amount = 120.0

[output]
show_each_step = true

[logging]
verbose = true
"#;
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();

    let config = ScenarioConfig::from_file(&path).unwrap();
    config.validate().unwrap();
    assert!(config.verbose());

    let mut session = Session::new(config.build_bottle());
    let outcomes = session.run(config.steps().unwrap());

    assert!(outcomes[0].clamped);
    assert_eq!(outcomes[0].level_after, 0.0);
    assert!(!outcomes[1].clamped);
    assert_eq!(
        session.bottle().describe_in(config.locale().unwrap()),
        "Die Flasche ist mit 120.0 ml von 1000.0 ml gefüllt."
    );
}

#[test]
fn test_bundled_scenario_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/bottle-scenario.toml");
    let config = ScenarioConfig::from_file(path).unwrap();
    config.validate().unwrap();

    let mut session = Session::new(config.build_bottle());
    session.run(config.steps().unwrap());

    assert_eq!(config.locale().unwrap(), Locale::English);
    assert_eq!(session.bottle().current_level(), 1000.0);
    assert_eq!(session.clamp_count(), 1);
}

#[test]
fn test_unknown_locale_fails_validation() {
    let config =
        ScenarioConfig::from_toml_str("[bottle]\ncapacity = 10.0\nlocale = \"klingon\"\n").unwrap();

    match config.validate() {
        Err(BottleError::InvalidLocale { value }) => assert_eq!(value, "klingon"),
        other => panic!("expected InvalidLocale, got {:?}", other),
    }
}
