use augur_core::{
    AugurError, SeriesAligner, SeriesIndex, TimePoint, generate, nearest, series_from_parts,
};
use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;

// 2022-11-01 00:00:00 UTC
const ANCHOR: i64 = 1_667_260_800;

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn p(ts: DateTime<Utc>, value: f64) -> TimePoint {
    TimePoint::new(ts, value)
}

#[test]
fn exactly_one_second_away_aligns() {
    let target = t(ANCHOR);
    let aligner = SeriesAligner::default();
    let late = [p(target + TimeDelta::seconds(1), 7.0)];
    let early = [p(target - TimeDelta::seconds(1), 8.0)];
    assert_eq!(aligner.align(&late, &[target]).unwrap(), vec![7.0]);
    assert_eq!(aligner.align(&early, &[target]).unwrap(), vec![8.0]);
}

#[test]
fn a_microsecond_past_tolerance_fails() {
    let target = t(ANCHOR);
    let gap = TimeDelta::microseconds(1_000_001);
    let source = [p(target + gap, 7.0)];
    let err = SeriesAligner::default().align(&source, &[target]).unwrap_err();
    assert_eq!(err, AugurError::missing_alignment(target, Some(gap)));
    assert!(err.to_string().contains("2022/11/01, 00:00:00"));
}

#[test]
fn equal_distance_ties_pick_the_first_source_point() {
    let target = t(ANCHOR);
    let before = p(target - TimeDelta::seconds(1), 1.0);
    let after = p(target + TimeDelta::seconds(1), 2.0);
    let aligner = SeriesAligner::default();

    assert_eq!(aligner.align(&[before, after], &[target]).unwrap(), vec![1.0]);
    assert_eq!(aligner.align(&[after, before], &[target]).unwrap(), vec![2.0]);
    assert_eq!(
        aligner.align_indexed(&[after, before], &[target]).unwrap(),
        vec![2.0]
    );

    // Duplicated timestamps: first occurrence wins.
    let dup = [p(target, 3.0), p(target, 4.0)];
    assert_eq!(nearest(&dup, target), Some((0, TimeDelta::zero())));
    assert_eq!(aligner.align_indexed(&dup, &[target]).unwrap(), vec![3.0]);
}

#[test]
fn unordered_source_with_extra_points() {
    let grid = generate(t(ANCHOR), 1, 3).unwrap();
    let source = vec![
        p(grid[2], 30.0),
        p(t(ANCHOR + 1800), 99.0),
        p(grid[0], 10.0),
        p(t(ANCHOR - 3600), 0.5),
        p(grid[1] + TimeDelta::milliseconds(400), 20.0),
    ];
    let aligner = SeriesAligner::default();
    assert_eq!(aligner.align(&source, &grid).unwrap(), vec![10.0, 20.0, 30.0]);
    assert_eq!(
        aligner.align_indexed(&source, &grid).unwrap(),
        vec![10.0, 20.0, 30.0]
    );
}

#[test]
fn one_missing_target_fails_the_whole_grid() {
    let grid = generate(t(ANCHOR), 1, 3).unwrap();
    let source = vec![p(grid[0], 1.0), p(grid[1], 2.0)];
    let err = SeriesAligner::default().align(&source, &grid).unwrap_err();
    match err {
        AugurError::MissingAlignment { target, gap } => {
            assert_eq!(target, grid[2]);
            assert_eq!(gap, Some(TimeDelta::hours(1)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_source_reports_no_gap() {
    let err = SeriesAligner::default().align(&[], &[t(ANCHOR)]).unwrap_err();
    assert_eq!(err, AugurError::missing_alignment(t(ANCHOR), None));
    assert_eq!(nearest(&[], t(ANCHOR)), None);
    assert_eq!(SeriesIndex::new(&[]).nearest(t(ANCHOR)), None);
}

#[test]
fn no_targets_yield_no_values() {
    let source = [p(t(ANCHOR), 1.0)];
    assert!(SeriesAligner::default().align(&source, &[]).unwrap().is_empty());
}

#[test]
fn tolerance_is_configurable_but_not_negative() {
    assert!(matches!(
        SeriesAligner::new(TimeDelta::seconds(-1)),
        Err(AugurError::InvalidArg(_))
    ));
    let wide = SeriesAligner::from_std(std::time::Duration::from_secs(120)).unwrap();
    assert_eq!(wide.tolerance(), TimeDelta::minutes(2));
    let source = [p(t(ANCHOR + 90), 5.0)];
    assert_eq!(wide.align(&source, &[t(ANCHOR)]).unwrap(), vec![5.0]);

    let exact = SeriesAligner::new(TimeDelta::zero()).unwrap();
    assert!(exact.align(&source, &[t(ANCHOR)]).is_err());
    assert_eq!(exact.align(&source, &[t(ANCHOR + 90)]).unwrap(), vec![5.0]);
}

#[test]
fn series_from_parallel_slices() {
    let series = series_from_parts(&[ANCHOR as f64, ANCHOR as f64 + 0.5], &[1.0, 2.0]).unwrap();
    assert_eq!(series[0].ts, t(ANCHOR));
    assert_eq!(series[1].ts.timestamp_subsec_millis(), 500);
    assert_eq!(
        series_from_parts(&[1.0], &[1.0, 2.0]).unwrap_err(),
        AugurError::length_mismatch(1, 2)
    );
}

fn arb_point() -> impl Strategy<Value = TimePoint> {
    // Narrow timestamp range forces plenty of duplicates and equal-distance ties.
    (0i64..40, -1_000i64..1_000).prop_map(|(s, v)| p(t(ANCHOR + s), v as f64))
}

proptest! {
    #[test]
    fn aligned_length_matches_grid(
        count in 2usize..48,
        jitter_ms in proptest::collection::vec(-1_000i64..=1_000, 48),
        noise in proptest::collection::vec((0usize..48, 120i64..3_480), 0..40),
        rotate in 0usize..96,
    ) {
        let grid = generate(t(ANCHOR), 1, count).unwrap();
        let mut source: Vec<TimePoint> = grid
            .iter()
            .enumerate()
            .map(|(i, g)| p(*g + TimeDelta::milliseconds(jitter_ms[i]), i as f64))
            .collect();
        // Off-grid observations at least two minutes from every grid instant.
        for (slot, offset) in noise {
            source.push(p(t(ANCHOR + (slot as i64) * 3600 + offset), -1.0));
        }
        let len = source.len();
        source.rotate_left(rotate % len);

        let aligned = SeriesAligner::default().align(&source, &grid).unwrap();
        prop_assert_eq!(aligned.len(), grid.len());
        for (i, v) in aligned.iter().enumerate() {
            prop_assert_eq!(*v, i as f64);
        }
    }

    #[test]
    fn indexed_lookup_matches_linear_scan(
        source in proptest::collection::vec(arb_point(), 0..60),
        targets in proptest::collection::vec(-5i64..45, 0..30),
        tol_s in 0i64..4,
    ) {
        let targets: Vec<_> = targets.into_iter().map(|s| t(ANCHOR + s)).collect();
        let index = SeriesIndex::new(&source);
        for &target in &targets {
            prop_assert_eq!(index.nearest(target), nearest(&source, target));
        }
        let aligner = SeriesAligner::new(TimeDelta::seconds(tol_s)).unwrap();
        prop_assert_eq!(
            aligner.align_indexed(&source, &targets),
            aligner.align(&source, &targets)
        );
    }
}
