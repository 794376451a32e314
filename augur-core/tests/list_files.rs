use augur_core::{AugurError, load_list, parse_list, save_list, to_list_string};
use proptest::prelude::*;

const PRED_VALS: [f64; 12] = [
    1619.3577, 1619.9607, 1620.6091, 1621.419, 1622.3264, 1623.4308, 1624.6201, 1625.8335,
    1627.1067, 1628.3867, 1629.7463, 1631.1682,
];

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pred_vals.csv");
    let cases: Vec<Vec<f64>> = vec![
        vec![],
        PRED_VALS.to_vec(),
        vec![-1.5, 0.0, -0.0, 2.25, -1619.3577],
        vec![1e-7, -3.2e20, f64::MIN_POSITIVE, f64::MAX, 42.0],
    ];
    for values in cases {
        save_list(&values, &path).unwrap();
        assert_eq!(load_list(&path).unwrap(), values);
    }
}

#[test]
fn list_text_shape() {
    assert_eq!(to_list_string(&[1.2, 3.4, 5.6]).unwrap(), "[1.2, 3.4, 5.6]");
    assert_eq!(to_list_string(&[]).unwrap(), "[]");
    assert_eq!(to_list_string(&[1.0, -2.5]).unwrap(), "[1.0, -2.5]");
}

#[test]
fn save_overwrites_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vals.txt");
    std::fs::write(&path, "[9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0]").unwrap();
    save_list(&[1.0], &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1.0]");
}

#[test]
fn python_written_lists_parse() {
    assert_eq!(
        parse_list("[1619.3577, 1619.9607, 1e-05, 3]\n").unwrap(),
        vec![1619.3577, 1619.9607, 1e-05, 3.0]
    );
    assert_eq!(parse_list("  []  ").unwrap(), Vec::<f64>::new());
}

#[test]
fn malformed_text_is_a_parse_error() {
    for bad in [
        "",
        "[1, 2",
        "[1, 'a']",
        "[\"1.0\"]",
        "[[1.0]]",
        "[1.0,]",
        "[nan]",
        "[inf]",
        "1.0",
        "[1.0] trailing",
        "__import__('os').system('true')",
    ] {
        assert!(
            matches!(parse_list(bad), Err(AugurError::Parse(_))),
            "accepted malformed input: {bad:?}"
        );
    }
}

#[test]
fn non_finite_values_are_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nan.txt");
    assert!(matches!(
        save_list(&[1.0, f64::NAN], &path),
        Err(AugurError::InvalidArg(_))
    ));
    assert!(!path.exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_list(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, AugurError::Io { .. }));
}

#[test]
fn parse_errors_from_files_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "[1.0, oops]").unwrap();
    match load_list(&path).unwrap_err() {
        AugurError::Parse(msg) => assert!(msg.contains("broken.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
}

proptest! {
    #[test]
    fn text_round_trip_is_exact(values in proptest::collection::vec(
        any::<f64>().prop_filter("finite", |v| v.is_finite()),
        0..64,
    )) {
        let text = to_list_string(&values).unwrap();
        let back = parse_list(&text).unwrap();
        prop_assert_eq!(back, values);
    }
}
