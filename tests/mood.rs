use aura::systems::Mood;

mod common;

use common::{park_pointer, rig, run_quiet, shake_pointer, STEP, VIEWPORT};

#[test]
fn test_starts_normal() {
    let mut rig = rig();
    rig.tick(STEP);
    assert_eq!(rig.mood(), Mood::Normal);
}

#[test]
fn test_fast_swipe_triggers_dizzy() {
    let mut rig = rig();
    shake_pointer(&mut rig);
    assert!(matches!(rig.mood(), Mood::Dizzy { .. }));
}

#[test]
fn test_slow_pointer_stays_normal() {
    let mut rig = rig();
    park_pointer(&mut rig);

    // Drift rightward at ~0.6 normalized units/sec, well under the threshold
    for step in 0..30 {
        rig.pointer_moved(VIEWPORT / 2.0 + step as f32 * 10.0, VIEWPORT / 2.0);
        rig.tick(STEP);
        assert_eq!(rig.mood(), Mood::Normal, "step {step}");
    }
}

#[test]
fn test_dizzy_lasts_the_full_cooldown() {
    let mut rig = rig();
    shake_pointer(&mut rig);
    assert!(matches!(rig.mood(), Mood::Dizzy { .. }));

    run_quiet(&mut rig, 1.8);
    assert!(matches!(rig.mood(), Mood::Dizzy { .. }), "still within the 2s window");

    run_quiet(&mut rig, 0.4);
    assert_eq!(rig.mood(), Mood::Normal, "window elapsed, no idle yet");
}

#[test]
fn test_retrigger_does_not_extend_the_window() {
    let mut rig = rig();
    shake_pointer(&mut rig);

    // A second spike one second into the active window is a no-op
    run_quiet(&mut rig, 1.0);
    shake_pointer(&mut rig);

    // The original window ends ~2s after the first trigger; the two shake
    // ticks above already consumed a little of it
    run_quiet(&mut rig, 1.0);
    assert_eq!(rig.mood(), Mood::Normal);
}

#[test]
fn test_velocity_sequence_scenario() {
    let mut rig = rig();
    park_pointer(&mut rig);

    // Per-tick horizontal velocities of [0, 2, 9, 3] normalized units/sec
    // against a threshold of 5: dizzy must latch exactly at the 9
    let mut x = VIEWPORT / 2.0;
    for (velocity, expect_dizzy) in [(0.0f32, false), (2.0, false), (9.0, true), (3.0, true)] {
        x += velocity * STEP * VIEWPORT;
        rig.pointer_moved(x, VIEWPORT / 2.0);
        rig.tick(STEP);
        assert_eq!(
            matches!(rig.mood(), Mood::Dizzy { .. }),
            expect_dizzy,
            "velocity {velocity}"
        );
    }

    // Dropping below the threshold does not end the spell early
    run_quiet(&mut rig, 1.8);
    assert!(matches!(rig.mood(), Mood::Dizzy { .. }));
    run_quiet(&mut rig, 0.4);
    assert_eq!(rig.mood(), Mood::Normal);
}

#[test]
fn test_scared_flag_preempts_dizzy() {
    let mut rig = rig();
    rig.set_scrolling_fast(true);
    shake_pointer(&mut rig);
    assert_eq!(rig.mood(), Mood::Scared);

    // The dizzy window kept running underneath; it resurfaces once the
    // scroll calms down
    rig.set_scrolling_fast(false);
    rig.tick(STEP);
    assert!(matches!(rig.mood(), Mood::Dizzy { .. }));
}

#[test]
fn test_scared_preempts_sleeping() {
    let mut rig = rig();
    run_quiet(&mut rig, 9.0);
    assert_eq!(rig.mood(), Mood::Sleeping);

    rig.set_scrolling_fast(true);
    rig.tick(STEP);
    assert_eq!(rig.mood(), Mood::Scared);
}

#[test]
fn test_scroll_velocity_scares_and_calms() {
    let mut rig = rig();
    rig.scrolled(0.0);
    rig.tick(STEP);
    assert_eq!(rig.mood(), Mood::Normal, "first sample has no velocity");

    // 100 offset units in one 60Hz tick is 6000 units/sec
    rig.scrolled(100.0);
    rig.tick(STEP);
    assert_eq!(rig.mood(), Mood::Scared);

    // The flag holds for the calm delay after the last fast sample
    rig.tick(STEP);
    assert_eq!(rig.mood(), Mood::Scared);
    run_quiet(&mut rig, 0.3);
    assert_eq!(rig.mood(), Mood::Normal);
}

#[test]
fn test_slow_scroll_does_not_scare() {
    let mut rig = rig();
    rig.scrolled(0.0);
    rig.tick(STEP);

    // ~600 units/sec, under the 800 threshold
    for step in 1..30 {
        rig.scrolled(step as f32 * 10.0);
        rig.tick(STEP);
        assert_eq!(rig.mood(), Mood::Normal, "step {step}");
    }
}
