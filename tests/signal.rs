use speculoos::prelude::*;

mod common;

use common::{park_pointer, rig, run_quiet, STEP, VIEWPORT};

#[test]
fn test_pupils_track_the_pointer_with_smoothing() {
    let mut rig = rig();
    park_pointer(&mut rig);

    // Jump to the right edge: the pupil target is +8, but the spring must
    // not snap there in a single tick
    rig.pointer_moved(VIEWPORT, VIEWPORT / 2.0);
    rig.tick(STEP);
    let first = rig.pose().pupils.x;
    assert_that!(&first).is_less_than(4.0);

    run_quiet(&mut rig, 3.0);
    assert_that!(&rig.pose().pupils.x).is_close_to(8.0, 0.2);
}

#[test]
fn test_head_and_body_tilt_ranges() {
    let mut rig = rig();
    park_pointer(&mut rig);

    // Bottom-right corner: head tilts toward the pointer, body leans less
    rig.pointer_moved(VIEWPORT, VIEWPORT);
    run_quiet(&mut rig, 3.0);

    let pose = rig.pose();
    assert_that!(&pose.head.y).is_close_to(15.0, 0.3);
    assert_that!(&pose.head.x).is_close_to(-15.0, 0.3);
    assert_that!(&pose.lean.y).is_close_to(5.0, 0.2);
    assert_that!(&pose.lean.x).is_close_to(-5.0, 0.2);
}

#[test]
fn test_out_of_viewport_coordinates_are_clamped() {
    let mut rig = rig();
    park_pointer(&mut rig);

    // A host reporting absurd coordinates must not produce runaway poses
    rig.pointer_moved(50_000.0, VIEWPORT / 2.0);
    run_quiet(&mut rig, 3.0);

    let pose = rig.pose();
    assert_that!(&pose.pupils.x).is_close_to(8.0, 0.2);
    assert_that!(&pose.head.y).is_close_to(15.0, 0.3);
}

#[test]
fn test_quiet_ticks_read_zero_velocity() {
    let mut rig = rig();

    // A hard swipe makes the mascot dizzy...
    common::shake_pointer(&mut rig);
    assert!(matches!(rig.mood(), aura::systems::Mood::Dizzy { .. }));

    // ...but the spike does not latch: after the spell and plenty of quiet
    // ticks the mood has to fall back instead of re-triggering forever
    run_quiet(&mut rig, 2.1);
    assert_eq!(rig.mood(), aura::systems::Mood::Normal);
}
