use aura::systems::Mood;
use pretty_assertions::assert_eq;

mod common;

use common::{rig, run_quiet, shake_pointer, STEP};

#[test]
fn test_show_makes_the_bubble_visible_immediately() {
    let mut rig = rig();
    rig.show_message("Hello");
    rig.tick(STEP);
    assert_eq!(rig.frame().bubble.as_deref(), Some("Hello"));
}

#[test]
fn test_bubble_expires_after_the_window() {
    let mut rig = rig();
    rig.show_message("Hello");
    run_quiet(&mut rig, 7.9);
    assert_eq!(rig.frame().bubble.as_deref(), Some("Hello"));

    run_quiet(&mut rig, 0.3);
    assert_eq!(rig.frame().bubble, None);
}

#[test]
fn test_superseding_message_restarts_the_full_window() {
    let mut rig = rig();
    rig.show_message("Hello");
    run_quiet(&mut rig, 1.0);

    rig.show_message("World");
    rig.tick(STEP);
    assert_eq!(rig.frame().bubble.as_deref(), Some("World"), "latest call wins immediately");

    // 7.5s after the second call the window is still open...
    run_quiet(&mut rig, 7.5);
    assert_eq!(rig.frame().bubble.as_deref(), Some("World"));

    // ...and closes on its own schedule, not the first call's
    run_quiet(&mut rig, 0.7);
    assert_eq!(rig.frame().bubble, None);
}

#[test]
fn test_empty_message_clears_the_bubble() {
    let mut rig = rig();
    rig.show_message("Hello");
    rig.tick(STEP);
    rig.show_message("");
    rig.tick(STEP);
    assert_eq!(rig.frame().bubble, None);
}

#[test]
fn test_bubble_hidden_while_dizzy_but_timer_keeps_running() {
    let mut rig = rig();
    rig.show_message("Hello");
    rig.tick(STEP);

    shake_pointer(&mut rig);
    assert!(matches!(rig.mood(), Mood::Dizzy { .. }));
    assert_eq!(rig.frame().bubble, None, "dizzy suppresses the visual only");

    // After the spell the bubble is still inside its window and reappears
    run_quiet(&mut rig, 2.1);
    assert_eq!(rig.mood(), Mood::Normal);
    assert_eq!(rig.frame().bubble.as_deref(), Some("Hello"));
}

#[test]
fn test_active_bubble_gates_sleep_until_cleared() {
    let mut config = common::test_config();
    config.bubble_window = 30.0;
    let mut rig = aura::rig::MascotRig::new(config).expect("valid config");

    rig.show_message("Hello");
    run_quiet(&mut rig, 12.0);
    assert_eq!(rig.mood(), Mood::Normal, "active bubble gates sleep");
    assert_eq!(rig.frame().bubble.as_deref(), Some("Hello"));

    rig.show_message("");
    run_quiet(&mut rig, 9.0);
    assert_eq!(rig.mood(), Mood::Sleeping);
    assert_eq!(rig.frame().bubble, None);
}
