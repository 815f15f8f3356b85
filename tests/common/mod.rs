#![allow(dead_code)]

use aura::rig::{MascotRig, RigConfig};
use glam::Vec2;

/// Square test viewport; client (500, 500) is the normalized origin.
pub const VIEWPORT: f32 = 1000.0;

/// Nominal frame step used by every test.
pub const STEP: f32 = 1.0 / 60.0;

pub fn test_config() -> RigConfig {
    RigConfig {
        viewport: Vec2::new(VIEWPORT, VIEWPORT),
        seed: Some(0xA17A),
        ..RigConfig::default()
    }
}

pub fn rig() -> MascotRig {
    MascotRig::new(test_config()).expect("test config must be valid")
}

/// Advances the rig by `seconds` of simulated time with no input.
pub fn run_quiet(rig: &mut MascotRig, seconds: f32) {
    let steps = (seconds / STEP).round() as usize;
    for _ in 0..steps {
        rig.tick(STEP);
    }
}

/// Parks the pointer at the viewport center without generating velocity.
pub fn park_pointer(rig: &mut MascotRig) {
    rig.pointer_moved(VIEWPORT / 2.0, VIEWPORT / 2.0);
    rig.tick(STEP);
}

/// Slams the pointer across the whole viewport in two ticks; the resulting
/// velocity is far past the dizzy threshold.
pub fn shake_pointer(rig: &mut MascotRig) {
    rig.pointer_moved(0.0, VIEWPORT / 2.0);
    rig.tick(STEP);
    rig.pointer_moved(VIEWPORT, VIEWPORT / 2.0);
    rig.tick(STEP);
}
