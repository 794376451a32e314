use augur_types::{AlignSearch, AnchorMode, AugurConfig};

#[test]
fn augur_config_roundtrip() {
    let cfg = AugurConfig {
        step_hours: 4,
        count: 6,
        tolerance: std::time::Duration::from_millis(1500),
        anchor: AnchorMode::NearestHour,
        search: AlignSearch::Indexed,
    };

    let json = serde_json::to_string(&cfg).expect("serialize augur config");
    let de: AugurConfig = serde_json::from_str(&json).expect("deserialize augur config");

    assert_eq!(de, cfg);
    assert_eq!(de.tolerance.as_millis(), 1500);
}

#[test]
fn augur_config_defaults_match_hourly_half_day() {
    let cfg = AugurConfig::default();
    assert_eq!(cfg.step_hours, 1);
    assert_eq!(cfg.count, 12);
    assert_eq!(cfg.tolerance.as_secs(), 1);
    assert!(matches!(cfg.anchor, AnchorMode::Exact));
    assert!(matches!(cfg.search, AlignSearch::Linear));
}
