use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seriegen_core::{GeneratorConfig, LabelRanges, SeriegenError, ValueRange, generate};

fn one_label() -> LabelRanges {
    LabelRanges::new().with('A', ValueRange::new(0.0, 1.0).unwrap())
}

#[test]
fn default_configuration_validates() {
    assert!(GeneratorConfig::default().validate().is_ok());
}

#[test]
fn empty_label_table_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(&LabelRanges::new(), &GeneratorConfig::default(), &mut rng).unwrap_err();
    assert!(matches!(err, SeriegenError::EmptyLabelTable));
}

#[test]
fn equal_bounds_are_rejected_at_construction() {
    let err = ValueRange::new(5.0, 5.0).unwrap_err();
    assert!(matches!(err, SeriegenError::InvalidRange { min, max } if min == 5.0 && max == 5.0));
}

#[test]
fn reversed_bounds_are_rejected_at_construction() {
    assert!(ValueRange::new(3.0, -1.0).is_err());
}

#[test]
fn non_finite_bounds_are_rejected_at_construction() {
    assert!(ValueRange::new(f64::NAN, 1.0).is_err());
    assert!(ValueRange::new(0.0, f64::INFINITY).is_err());
    assert!(ValueRange::new(f64::NEG_INFINITY, 0.0).is_err());
}

#[test]
fn overflowing_width_is_rejected_at_construction() {
    // Finite bounds whose difference overflows to infinity cannot be
    // sampled; they must never reach the generator.
    let err = ValueRange::new(-f64::MAX, f64::MAX).unwrap_err();
    assert!(matches!(err, SeriegenError::InvalidRange { .. }));

    // The widest representable range is still accepted.
    let half = f64::MAX / 2.0;
    assert!(ValueRange::new(-half, half).is_ok());
}

#[test]
fn single_point_configuration_is_rejected() {
    let config = GeneratorConfig {
        points_per_label: 1,
        ..GeneratorConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(&one_label(), &config, &mut rng).unwrap_err();
    assert!(matches!(err, SeriegenError::TooFewPoints { points: 1 }));
}

#[test]
fn window_past_calendar_edge_is_rejected() {
    let config = GeneratorConfig {
        anchor: NaiveDate::MAX,
        ..GeneratorConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate(&one_label(), &config, &mut rng).unwrap_err();
    assert!(matches!(err, SeriegenError::WindowOutOfRange { .. }));
}

#[test]
fn failed_validation_consumes_no_randomness() {
    let mut used = StdRng::seed_from_u64(7);
    let mut fresh = StdRng::seed_from_u64(7);

    let _ = generate(&LabelRanges::new(), &GeneratorConfig::default(), &mut used);
    let bad_points = GeneratorConfig {
        points_per_label: 1,
        ..GeneratorConfig::default()
    };
    let _ = generate(&one_label(), &bad_points, &mut used);

    assert_eq!(used.random::<u64>(), fresh.random::<u64>());
}
