//! Unit checks of the vector helpers against hand-computed values.

use glam::DVec2;
use prowl::vector_math::{angle_to, distance, normalize_or_zero, unit_vector_from_angle};
use rstest::rstest;

fn sample_points() -> Vec<DVec2> {
    let coords = [-250.5, -3.0, 0.0, 1e-6, 17.25, 400.0, 1e6];
    coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| DVec2::new(x, y)))
        .collect()
}

#[test]
fn distance_is_symmetric() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            assert_eq!(distance(*a, *b), distance(*b, *a), "{a:?} / {b:?}");
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    for p in sample_points() {
        assert_eq!(distance(p, p), 0.0);
    }
}

#[test]
fn unit_vectors_have_unit_length() {
    for i in -16..=16 {
        let theta = f64::from(i) * std::f64::consts::PI / 16.0;
        let v = unit_vector_from_angle(theta);
        assert!((v.length() - 1.0).abs() < 1e-12, "theta {theta}");
    }
}

#[rstest]
#[case::scenario_far(DVec2::new(100.0, 100.0), DVec2::new(400.0, 400.0), 424.264_068_711_928_5)]
#[case::scenario_near(DVec2::new(100.0, 100.0), DVec2::new(120.0, 120.0), 28.284_271_247_461_902)]
#[case::three_four_five(DVec2::new(0.0, 0.0), DVec2::new(90.0, 120.0), 150.0)]
fn distance_matches_reference(#[case] a: DVec2, #[case] b: DVec2, #[case] expected: f64) {
    assert!((distance(a, b) - expected).abs() < 1e-9);
}

#[test]
fn bearing_round_trips_through_unit_vector() {
    let from = DVec2::new(100.0, 100.0);
    for to in sample_points() {
        if to == from {
            continue;
        }
        let direct = normalize_or_zero(to - from);
        let via_angle = unit_vector_from_angle(angle_to(from, to));
        assert!(
            (direct - via_angle).length() < 1e-9,
            "to {to:?}: {direct:?} vs {via_angle:?}"
        );
    }
}
