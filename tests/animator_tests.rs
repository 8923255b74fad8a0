//! Scroll Animator Tests
//!
//! Tests for:
//! - Output shape and validity across the whole progress range
//! - Exact keyframe values at the boundaries and the color midpoint
//! - Clamping of out-of-range and non-finite progress
//! - Idempotent sampling and per-interval monotonicity
//! - Validation of tables swapped in at runtime

use glam::Vec3;

use scrollscape::animation::timeline::{ScrollTimeline, TimelineDesc};
use scrollscape::animation::tracks::KeyframeTrack;
use scrollscape::animation::values::MorphWeights;
use scrollscape::errors::Error;
use scrollscape::{AnimationOutputs, Color, ScrollAnimator};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn sample_at(progress: f32) -> AnimationOutputs {
    let mut animator = ScrollAnimator::new();
    animator.set_scroll_progress(progress);
    animator.sample()
}

// ============================================================================
// Shape & Boundaries
// ============================================================================

#[test]
fn outputs_are_well_formed_across_range() {
    let mut animator = ScrollAnimator::new();
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        animator.set_scroll_progress(p);
        let out = animator.sample();

        assert_eq!(out.morph_influences.len(), 5, "p={p}");
        assert!(out.morph_influences.is_finite(), "p={p}");
        assert!(out.camera_position.is_finite(), "p={p}");
        assert!(out.color.is_valid(), "p={p}: {:?}", out.color);
    }
}

#[test]
fn defaults_before_first_sample() {
    let animator = ScrollAnimator::new();
    let out = animator.outputs();
    assert_eq!(out.morph_influences.as_slice(), &[0.0; 5]);
    assert_eq!(out.camera_position, Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(out.color, Color::WHITE);
    assert_eq!(*out, AnimationOutputs::default());
}

#[test]
fn progress_zero_matches_first_keyframes() {
    let out = sample_at(0.0);
    assert_eq!(out.morph_influences.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(out.camera_position, Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(out.color.to_hex(), "#ffffff");
    assert_eq!(out.color, Color::WHITE);
}

#[test]
fn progress_one_matches_last_keyframes() {
    let out = sample_at(1.0);
    assert_eq!(out.morph_influences.as_slice(), &[0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(out.camera_position, Vec3::new(0.0, 2.0, 10.0));
    assert_eq!(out.color.to_hex(), "#0000ff");
    assert_eq!(out.color, Color::BLUE);
}

#[test]
fn progress_half_hits_color_keyframe() {
    let out = sample_at(0.5);
    assert_eq!(out.color, Color::RED);
    assert_eq!(out.color.to_hex(), "#ff0000");
    assert_eq!(out.camera_position, Vec3::new(0.0, 1.0, 7.5));
}

#[test]
fn interior_morph_keyframes_are_exact() {
    let out = sample_at(0.4);
    assert_eq!(out.morph_influences.as_slice(), &[0.2, 0.4, 0.0, 0.0, 0.0]);

    // Halfway between 0.4 and 0.6 the third target is half on
    let out = sample_at(0.5);
    let w = out.morph_influences.as_slice();
    assert!(approx(w[0], 0.2));
    assert!(approx(w[1], 0.4));
    assert!(approx(w[2], 0.3));
    assert!(approx(w[3], 0.0));
    assert!(approx(w[4], 0.0));
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(sample_at(-5.0), sample_at(0.0));
    assert_eq!(sample_at(5.0), sample_at(1.0));

    let mut animator = ScrollAnimator::new();
    animator.set_scroll_progress(-5.0);
    assert_eq!(animator.progress(), 0.0);
    animator.set_scroll_progress(5.0);
    assert_eq!(animator.progress(), 1.0);
}

#[test]
fn non_finite_progress_is_sanitized() {
    assert_eq!(sample_at(f32::NAN), sample_at(0.0));
    assert_eq!(sample_at(f32::INFINITY), sample_at(1.0));
    assert_eq!(sample_at(f32::NEG_INFINITY), sample_at(0.0));
}

#[test]
fn set_does_not_resample() {
    let mut animator = ScrollAnimator::new();
    animator.set_scroll_progress(1.0);
    assert_eq!(*animator.outputs(), AnimationOutputs::default());
    animator.sample();
    assert_eq!(animator.outputs().color, Color::BLUE);
}

// ============================================================================
// Idempotence & Continuity
// ============================================================================

#[test]
fn sampling_twice_is_identical() {
    let mut animator = ScrollAnimator::new();
    animator.set_scroll_progress(0.37);
    let first = animator.sample();
    let second = animator.sample();
    assert_eq!(first, second);
}

#[test]
fn scrubbing_back_and_forth_is_path_independent() {
    let mut animator = ScrollAnimator::new();
    for p in [0.9, 0.1, 0.75, 0.05, 0.61] {
        animator.set_scroll_progress(p);
        assert_eq!(animator.sample(), sample_at(p), "p={p}");
    }
}

#[test]
fn outputs_are_monotonic_within_intervals() {
    let timeline = ScrollTimeline::landing();
    let morph_times = timeline.morph().times().to_vec();

    for pair in morph_times.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let steps = 20;
        let mut previous = sample_at(lo);

        for s in 1..=steps {
            let p = lo + (hi - lo) * s as f32 / steps as f32;
            let current = sample_at(p);

            let before = sample_at(lo);
            let after = sample_at(hi);
            let weights = |o: &AnimationOutputs| o.morph_influences.as_slice().to_vec();
            let (w_before, w_after) = (weights(&before), weights(&after));
            let (w_prev, w_curr) = (weights(&previous), weights(&current));
            for i in 0..5 {
                let dir = w_after[i] - w_before[i];
                let step = w_curr[i] - w_prev[i];
                assert!(step * dir >= -EPSILON, "morph[{i}] not monotonic at p={p}");
            }

            // Camera has a single interval, so it rises everywhere
            assert!(current.camera_position.y >= previous.camera_position.y - EPSILON);
            assert!(current.camera_position.z >= previous.camera_position.z - EPSILON);

            previous = current;
        }
    }
}

#[test]
fn color_is_monotonic_per_channel_within_intervals() {
    let mut previous = sample_at(0.0).color;
    for i in 1..=50 {
        let p = 0.5 * i as f32 / 50.0;
        let c = sample_at(p).color;
        // White to red: green and blue fall, red holds
        assert!(approx(c.r, 1.0));
        assert!(c.g <= previous.g + EPSILON);
        assert!(c.b <= previous.b + EPSILON);
        previous = c;
    }
    for i in 1..=50 {
        let p = 0.5 + 0.5 * i as f32 / 50.0;
        let c = sample_at(p).color;
        // Red to blue: red falls, blue rises
        assert!(c.r <= previous.r + EPSILON);
        assert!(c.b >= previous.b - EPSILON);
        previous = c;
    }
}

// ============================================================================
// Replacing tables at runtime
// ============================================================================

#[test]
fn replacement_camera_must_span_unit_range() {
    let mut animator = ScrollAnimator::new();

    let short = KeyframeTrack::linear(
        "camera_position",
        vec![0.0, 0.25],
        vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 2.0, 10.0)],
    )
    .unwrap();
    let err = animator.timeline_mut().set_camera(short).unwrap_err();
    assert!(matches!(err, Error::DomainMismatch { end, .. } if end == 0.25));

    // The landing table is still in place
    animator.set_scroll_progress(0.5);
    let out = animator.try_sample().unwrap();
    assert_eq!(out.camera_position, Vec3::new(0.0, 1.0, 7.5));
}

#[test]
fn replacement_tables_are_validated() {
    let mut timeline = ScrollTimeline::landing();

    let narrow = KeyframeTrack::linear(
        "morph_influences",
        vec![0.0, 1.0],
        vec![MorphWeights::from([0.0, 0.0, 0.0]), MorphWeights::from([1.0, 1.0, 1.0])],
    )
    .unwrap();
    let err = timeline.set_morph(narrow).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { expected: 5, actual: 3, .. }));

    let nan = KeyframeTrack::linear(
        "camera_position",
        vec![0.0, 1.0],
        vec![Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE],
    )
    .unwrap();
    assert!(matches!(timeline.set_camera(nan), Err(Error::InvalidSample(_))));

    let hot = KeyframeTrack::linear(
        "color",
        vec![0.0, 1.0],
        vec![Color::new(2.0, 0.0, 0.0), Color::BLACK],
    )
    .unwrap();
    assert!(matches!(timeline.set_color(hot), Err(Error::InvalidColor(_))));

    assert_eq!(timeline.to_desc(), ScrollTimeline::landing().to_desc());
}

#[test]
fn valid_replacement_is_sampled() {
    let mut animator = ScrollAnimator::new();
    let dark = KeyframeTrack::linear("color", vec![0.0, 1.0], vec![Color::BLACK, Color::WHITE])
        .unwrap();
    animator.timeline_mut().set_color(dark).unwrap();

    animator.set_scroll_progress(0.5);
    let c = animator.sample().color;
    assert!(approx(c.r, 0.5) && approx(c.g, 0.5) && approx(c.b, 0.5));
}

#[test]
fn try_sample_leaves_cache_untouched() {
    let mut animator = ScrollAnimator::new();
    animator.set_scroll_progress(1.0);
    let out = animator.try_sample().unwrap();
    assert_eq!(out.color, Color::BLUE);
    assert_eq!(*animator.outputs(), AnimationOutputs::default());
}

// ============================================================================
// Custom timelines
// ============================================================================

#[test]
fn custom_timeline_from_json() -> anyhow::Result<()> {
    let json = r##"{
        "morph":  { "times": [0, 1], "values": [[0, 0], [1, 0.5]] },
        "camera": { "times": [0, 1], "values": [[0, 0, 1], [0, 0, 3]] },
        "color":  { "times": [0, 1], "values": ["#000000", "#fff"] }
    }"##;

    let timeline = ScrollTimeline::from_json(json)?;
    assert_eq!(timeline.morph_targets(), 2);

    let mut animator = ScrollAnimator::with_timeline(timeline);
    assert_eq!(animator.outputs().morph_influences.len(), 2);

    animator.set_scroll_progress(0.5);
    let out = animator.sample();
    assert_eq!(out.morph_influences.as_slice(), &[0.5, 0.25]);
    assert_eq!(out.camera_position, Vec3::new(0.0, 0.0, 2.0));
    assert!(approx(out.color.g, 0.5));
    Ok(())
}

#[test]
fn timeline_desc_round_trips_landing_tables() -> anyhow::Result<()> {
    let desc = ScrollTimeline::landing().to_desc();
    let json = serde_json::to_string(&desc)?;
    let parsed: TimelineDesc = serde_json::from_str(&json)?;
    assert_eq!(parsed, desc);
    assert_eq!(parsed.color.values, vec![Color::WHITE, Color::RED, Color::BLUE]);
    ScrollTimeline::from_desc(parsed)?;
    Ok(())
}

#[test]
fn timeline_rejects_partial_domain() {
    let json = r##"{
        "morph":  { "times": [0, 1], "values": [[0], [1]] },
        "camera": { "times": [0, 0.8], "values": [[0, 0, 1], [0, 0, 3]] },
        "color":  { "times": [0, 1], "values": ["#000000", "#ffffff"] }
    }"##;
    assert!(matches!(
        ScrollTimeline::from_json(json),
        Err(Error::DomainMismatch { track: "camera_position", .. })
    ));
}

#[test]
fn timeline_rejects_ragged_morph_table() {
    let json = r##"{
        "morph":  { "times": [0, 1], "values": [[0, 0], [1]] },
        "camera": { "times": [0, 1], "values": [[0, 0, 1], [0, 0, 3]] },
        "color":  { "times": [0, 1], "values": ["#000000", "#ffffff"] }
    }"##;
    assert!(matches!(
        ScrollTimeline::from_json(json),
        Err(Error::ShapeMismatch { expected: 2, actual: 1, .. })
    ));
}

#[test]
fn timeline_rejects_bad_color_and_bad_json() {
    let json = r##"{
        "morph":  { "times": [0, 1], "values": [[0], [1]] },
        "camera": { "times": [0, 1], "values": [[0, 0, 1], [0, 0, 3]] },
        "color":  { "times": [0, 1], "values": ["#000000", "teal"] }
    }"##;
    assert!(matches!(ScrollTimeline::from_json(json), Err(Error::JsonError(_))));
    assert!(matches!(ScrollTimeline::from_json("{"), Err(Error::JsonError(_))));
}
