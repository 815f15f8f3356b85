use std::collections::HashSet;

use aura::systems::{ClickAction, EyeStyle};
use strum::IntoEnumIterator;

mod common;

use common::{rig, run_quiet, STEP};

#[test]
fn test_click_starts_an_action() {
    let mut rig = rig();
    rig.clicked();
    rig.tick(STEP);
    assert_eq!(rig.frame().actions.len(), 1);
}

#[test]
fn test_actions_self_terminate() {
    let mut rig = rig();
    rig.clicked();
    rig.tick(STEP);
    assert!(!rig.frame().actions.is_empty());

    // Longest menu entry runs 2 seconds
    run_quiet(&mut rig, 2.1);
    assert!(rig.frame().actions.is_empty());

    let pose = rig.pose();
    assert!(!pose.arm_raised, "transient flags revert on expiry");
    assert!(!pose.arm_idle_suppressed);
    assert_eq!(pose.eyes.style, EyeStyle::Round);
}

#[test]
fn test_repeated_clicks_cover_the_whole_menu() {
    let mut rig = rig();
    let mut seen: HashSet<ClickAction> = HashSet::new();

    // Space the clicks out so every spawned action is observed on its own
    for _ in 0..60 {
        rig.clicked();
        rig.tick(STEP);
        seen.extend(rig.frame().actions.iter().copied());
        run_quiet(&mut rig, 2.1);
    }

    let menu: HashSet<ClickAction> = ClickAction::iter().collect();
    assert_eq!(seen, menu, "uniform selection reaches every menu entry");
}

#[test]
fn test_rapid_clicks_overlap_without_a_lock() {
    let mut rig = rig();

    // Twelve clicks inside ~0.2s; every non-blast action is still in
    // flight at the end, so at least two must coexist
    for _ in 0..12 {
        rig.clicked();
        rig.tick(STEP);
    }
    assert!(
        rig.frame().actions.len() >= 2,
        "no mutual exclusion between distinct actions"
    );
}

#[test]
fn test_energy_blast_excludes_a_second_blast() {
    let mut rig = rig();

    // Hammer the mascot; however the rolls land, two blasts must never be
    // in flight at once
    for _ in 0..40 {
        rig.clicked();
        rig.tick(STEP);

        let blasts = rig
            .frame()
            .actions
            .iter()
            .filter(|&&action| action == ClickAction::EnergyBlast)
            .count();
        assert!(blasts <= 1, "a blast may not start while one is active");
    }
}

#[test]
fn test_menu_durations_are_positive() {
    for action in ClickAction::iter() {
        assert!(action.duration() > 0.0);
    }
}

#[test]
fn test_keyframe_sampling_clamps_and_interpolates() {
    // Jump peaks mid-flight and lands where it started
    let start = ClickAction::Jump.sample(0.0);
    let peak = ClickAction::Jump.sample(0.3);
    let landed = ClickAction::Jump.sample(10.0);

    assert_eq!(start.offset.y, -10.0);
    assert_eq!(peak.offset.y, -40.0);
    assert_eq!(landed.offset.y, -10.0);

    // Halfway up the first segment is halfway between the frames
    let rising = ClickAction::Jump.sample(0.15);
    assert!((rising.offset.y - -25.0).abs() < 1e-4);
    assert!((rising.scale - 1.1).abs() < 1e-4);
}
