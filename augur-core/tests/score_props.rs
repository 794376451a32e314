use augur_core::{AugurError, nmse};
use proptest::prelude::*;

#[test]
fn identical_series_score_zero() {
    let y = [1619.3577, 1619.9607, 1620.6091, 1621.419];
    assert_eq!(nmse(&y, &y).unwrap(), 0.0);
}

#[test]
fn known_value() {
    // (0² + 1²) / (1² + 2²)
    let v = nmse(&[1.0, 2.0], &[1.0, 3.0]).unwrap();
    assert!((v - 0.2).abs() < 1e-12);
}

#[test]
fn length_mismatch_reports_both_lengths() {
    assert_eq!(
        nmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]).unwrap_err(),
        AugurError::LengthMismatch {
            reference: 3,
            predicted: 4
        }
    );
}

#[test]
fn zero_reference_is_degenerate() {
    assert_eq!(
        nmse(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err(),
        AugurError::DegenerateReference
    );
    assert_eq!(nmse(&[], &[]).unwrap_err(), AugurError::DegenerateReference);
}

#[test]
fn overflowing_energy_is_rejected() {
    assert!(matches!(
        nmse(&[1e200], &[-1e200]),
        Err(AugurError::InvalidArg(_))
    ));
    assert!(matches!(
        nmse(&[1.0, 2.0], &[f64::NAN, 2.0]),
        Err(AugurError::InvalidArg(_))
    ));
    assert!(matches!(
        nmse(&[1.0, f64::INFINITY], &[1.0, 2.0]),
        Err(AugurError::InvalidArg(_))
    ));
}

#[test]
fn underflowing_reference_is_degenerate() {
    assert_eq!(
        nmse(&[1e-200], &[0.0]).unwrap_err(),
        AugurError::DegenerateReference
    );
}

proptest! {
    #[test]
    fn self_comparison_is_zero(y in proptest::collection::vec(-1e6f64..1e6, 1..50)) {
        prop_assume!(y.iter().any(|v| *v != 0.0));
        prop_assert_eq!(nmse(&y, &y).unwrap(), 0.0);
    }

    #[test]
    fn score_is_non_negative_and_scale_free(
        pairs in proptest::collection::vec((1.0f64..1_000.0, 1.0f64..1_000.0), 1..40),
        k in 0.5f64..100.0,
    ) {
        let (y, y_hat): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let base = nmse(&y, &y_hat).unwrap();
        prop_assert!(base >= 0.0);

        let ys: Vec<f64> = y.iter().map(|v| v * k).collect();
        let y_hats: Vec<f64> = y_hat.iter().map(|v| v * k).collect();
        let scaled = nmse(&ys, &y_hats).unwrap();
        prop_assert!((scaled - base).abs() <= 1e-9 * base.max(1.0));
    }
}
