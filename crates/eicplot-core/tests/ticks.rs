// File: crates/eicplot-core/tests/ticks.rs
// Purpose: Lock tick layouts for hand-traced ranges and check general layout properties.

use eicplot_core::{PlotError, Tick, TickGenerator, TickLayout};

fn layout(min: f64, max: f64, target: usize) -> TickLayout {
    TickGenerator::new(target).layout(min, max).expect("valid range")
}

fn majors(l: &TickLayout) -> Vec<f64> {
    l.majors().map(|t| t.value).collect()
}

fn minors(l: &TickLayout) -> Vec<f64> {
    l.minors().map(|t| t.value).collect()
}

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "got {got:?}, want {want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() <= 1e-12 * w.abs().max(1.0), "got {got:?}, want {want:?}");
    }
}

#[test]
fn zero_to_hundred_with_five_ticks() {
    let l = layout(0.0, 100.0, 5);
    assert_eq!(l.multiplier, 2);
    assert_eq!(l.major_step, 20.0);
    assert_eq!(l.minor_step, 10.0);
    assert_eq!(majors(&l), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(minors(&l), vec![10.0, 30.0, 50.0, 70.0, 90.0]);

    let labels: Vec<&str> = l.majors().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec!["0", "20", "40", "60", "80", "100"]);
}

#[test]
fn output_is_sorted_and_interleaved() {
    let ticks = TickGenerator::new(5).generate(0.0, 100.0).unwrap();
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
    assert!(ticks[0].is_major());
    assert!(!ticks[1].is_major());
    assert_eq!(ticks[1].label, None);
}

#[test]
fn multiplier_seven_renders_as_six() {
    let l = layout(0.0, 70.0, 11);
    assert_eq!(l.multiplier, 6);
    assert_eq!(l.major_step, 6.0);
    assert_eq!(majors(&l), (0..=11).map(|k| 6.0 * k as f64).collect::<Vec<_>>());
    // m = 6 splits each major interval in three
    assert_eq!(l.minor_step, 2.0);
    assert_eq!(minors(&l)[..4], [2.0, 4.0, 8.0, 10.0]);
    assert_eq!(minors(&l).last(), Some(&70.0));
}

#[test]
fn multiplier_nine_renders_as_eight() {
    let l = layout(0.0, 90.0, 11);
    assert_eq!(l.multiplier, 8);
    assert_eq!(l.major_step, 8.0);
    assert_eq!(majors(&l).last(), Some(&88.0));
    assert_eq!(l.minor_step, 4.0);
    assert_eq!(minors(&l)[..3], [4.0, 12.0, 20.0]);
}

fn minors_between(l: &TickLayout, lo: f64, hi: f64) -> Vec<f64> {
    minors(l).into_iter().filter(|v| *v > lo && *v < hi).collect()
}

#[test]
fn multiplier_five_splits_in_five() {
    let l = layout(0.0, 50.0, 11);
    assert_eq!(l.multiplier, 5);
    assert_eq!(minors_between(&l, 0.0, 5.0), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(minors_between(&l, 45.0, 50.0), vec![46.0, 47.0, 48.0, 49.0]);
}

#[test]
fn multiplier_three_splits_in_three() {
    let l = layout(0.0, 30.0, 11);
    assert_eq!(l.multiplier, 3);
    assert_eq!(minors_between(&l, 0.0, 3.0), vec![1.0, 2.0]);
    assert_eq!(minors(&l).len(), 20);
}

#[test]
fn other_multipliers_split_in_two() {
    let l = layout(-4.0, 4.0, 5);
    assert_eq!(l.multiplier, 2);
    assert_eq!(majors(&l), vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    assert_eq!(minors(&l), vec![-3.0, -1.0, 1.0, 3.0]);
}

#[test]
fn zero_target_defaults_to_four() {
    let g = TickGenerator::new(0);
    assert_eq!(g.effective_target(), 4);
    assert_eq!(g.generate(0.0, 100.0).unwrap(), TickGenerator::default().generate(0.0, 100.0).unwrap());
    assert_eq!(majors(&layout(0.0, 100.0, 0)), vec![0.0, 30.0, 60.0, 90.0]);
    // the generator itself is not rewritten
    assert_eq!(g.target_count, 0);
}

#[test]
fn zero_is_positive() {
    let l = layout(-1.0, 1.0, 5);
    assert_eq!(majors(&l), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    let zero: &Tick = l.ticks.iter().find(|t| t.value == 0.0).unwrap();
    assert!(zero.value.is_sign_positive());
    assert_eq!(zero.label.as_deref(), Some("0"));
    assert!(l.ticks.iter().all(|t| t.value != 0.0 || t.value.is_sign_positive()));
    assert_eq!(minors(&l).len(), 16);
}

#[test]
fn span_of_exact_power_of_ten() {
    let l = layout(0.0, 10.0, 4);
    assert_eq!(majors(&l), vec![0.0, 3.0, 6.0, 9.0]);
    assert_eq!(minors(&l), vec![1.0, 2.0, 4.0, 5.0, 7.0, 8.0, 10.0]);
}

#[test]
fn magnitude_steps_down_twice() {
    let l = layout(0.0, 1.0, 20);
    assert_eq!(l.multiplier, 5);
    assert!((l.major_step - 0.05).abs() < 1e-15);
    let m = majors(&l);
    assert_eq!(m.len(), 21);
    assert_eq!(m[1], 0.05);
    assert_eq!(m[6], 0.3);
    assert_eq!(m[20], 1.0);
}

#[test]
fn small_ranges_keep_their_digits() {
    let l = layout(0.001, 0.002, 4);
    assert_eq!(l.multiplier, 3);
    assert_close(&majors(&l), &[0.0012, 0.0015, 0.0018]);
    let labels: Vec<&str> = l.majors().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec!["0.0012", "0.0015", "0.0018"]);

    let tiny = layout(0.0, 0.001, 5);
    assert_close(&majors(&tiny), &[0.0, 0.0002, 0.0004, 0.0006, 0.0008, 0.001]);
}

#[test]
fn negative_range() {
    let l = layout(-10.0, -1.0, 4);
    assert_eq!(majors(&l), vec![-9.0, -6.0, -3.0]);
    assert_eq!(minors(&l), vec![-10.0, -8.0, -7.0, -5.0, -4.0, -2.0, -1.0]);
}

#[test]
fn target_of_one_is_minimal() {
    let l = layout(0.0, 100.0, 1);
    assert_eq!(majors(&l), vec![0.0, 100.0]);
    assert_eq!(minors(&l), vec![50.0]);
}

#[test]
fn invalid_ranges_are_rejected() {
    let g = TickGenerator::default();
    assert_eq!(g.generate(1.0, 1.0), Err(PlotError::InvalidRange { min: 1.0, max: 1.0 }));
    assert!(matches!(g.generate(2.0, 1.0), Err(PlotError::InvalidRange { .. })));
    assert!(g.generate(f64::NAN, 1.0).is_err());
    assert!(g.generate(0.0, f64::INFINITY).is_err());
}

#[test]
fn generation_is_idempotent() {
    let g = TickGenerator::new(5);
    let a = g.layout(-3.7, 12.25).unwrap();
    let b = g.layout(-3.7, 12.25).unwrap();
    assert_eq!(a, b);
}

#[test]
fn layout_properties_hold_across_ranges() {
    let ranges = [
        (0.0, 1.0),
        (0.5, 30.0),
        (-4.0, 4.0),
        (-1234.5, 987.0),
        (1e-6, 3e-6),
        (2.0e5, 7.5e5),
        (-0.3, 0.0),
        (0.0, 0.7),
        (100.0, 100.5),
    ];
    for &(min, max) in &ranges {
        for target in 2..=12 {
            let l = layout(min, max, target);
            assert!(l.majors().count() >= 1, "no major for [{min}, {max}] target {target}");
            assert!(![7, 9].contains(&l.multiplier));
            for t in &l.ticks {
                assert!(t.value >= min && t.value <= max, "{} outside [{min}, {max}]", t.value);
                assert!(t.value != 0.0 || t.value.is_sign_positive());
            }
            for w in l.ticks.windows(2) {
                assert!(w[0].value < w[1].value, "unsorted or duplicate in [{min}, {max}] target {target}");
            }
        }
    }
}
