//! This module contains all the tuning constants used by the mascot engine.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Normalized pointer coordinates are clamped to [-POINTER_CLAMP, POINTER_CLAMP] per axis.
pub const POINTER_CLAMP: f32 = 0.5;

/// Horizontal pointer velocity (normalized units/sec) beyond which the mascot gets dizzy.
pub const DIZZY_VELOCITY_THRESHOLD: f32 = 5.0;
/// How long a dizzy spell lasts once triggered, in seconds.
pub const DIZZY_DURATION: f32 = 2.0;

/// Quiet time before the mascot falls asleep, in seconds.
pub const IDLE_SLEEP_DELAY: f32 = 8.0;

/// How long a speech bubble stays up without a superseding message, in seconds.
pub const BUBBLE_WINDOW: f32 = 8.0;

/// Scroll velocity (offset units/sec) beyond which the mascot is scared.
pub const SCROLL_FAST_THRESHOLD: f32 = 800.0;
/// Time the scared flag holds after the scroll velocity last exceeded the threshold, in seconds.
pub const SCROLL_CALM_DELAY: f32 = 0.2;

/// Bounds of the random interval between blinks, in seconds.
pub const BLINK_INTERVAL_MIN: f32 = 3.0;
pub const BLINK_INTERVAL_MAX: f32 = 5.0;
/// How long the eyes stay shut during a blink, in seconds.
pub const BLINK_CLOSE_TIME: f32 = 0.15;

/// Spring constants for pointer-tracking smoothing.
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MASS: f32 = 0.5;

/// Pupil travel range, in eye-local units (horizontal, vertical).
pub const PUPIL_RANGE: Vec2 = Vec2::new(8.0, 5.0);
/// Maximum head tilt from pointer tracking, in degrees per axis.
pub const HEAD_TILT_DEGREES: f32 = 15.0;
/// Maximum body lean from pointer tracking, in degrees per axis.
pub const BODY_TILT_DEGREES: f32 = 5.0;

/// Period of the idle float animation, in seconds.
pub const FLOAT_PERIOD: f32 = 4.0;
/// Vertical amplitude of the idle float, in pose units.
pub const FLOAT_AMPLITUDE: f32 = 10.0;

/// Period of the sleeping bob, in seconds.
pub const SLEEP_BOB_PERIOD: f32 = 3.0;
/// Vertical travel of the sleeping bob, in pose units.
pub const SLEEP_BOB_AMPLITUDE: f32 = 5.0;
/// Forward tilt while sleeping: base plus sway, in degrees.
pub const SLEEP_TILT_BASE: f32 = 10.0;
pub const SLEEP_TILT_SWAY: f32 = 5.0;

/// Period of the scared shake, in seconds.
pub const SCARED_SHAKE_PERIOD: f32 = 0.1;
/// Vertical amplitude of the scared shake, in pose units.
pub const SCARED_SHAKE_AMPLITUDE: f32 = 5.0;
/// Roll amplitude of the scared shake, in degrees.
pub const SCARED_ROLL_AMPLITUDE: f32 = 5.0;

/// Period of one full dizzy revolution, in seconds.
pub const DIZZY_SPIN_PERIOD: f32 = 1.0;

/// Eye geometry, in eye-local units. Values match the rendered rig.
pub const EYE_HEIGHT: f32 = 40.0;
pub const EYE_HEIGHT_HOVER: f32 = 45.0;
pub const EYE_HEIGHT_SCARED: f32 = 30.0;
pub const EYE_HEIGHT_DIZZY: f32 = 10.0;
pub const EYE_HEIGHT_SLEEPING: f32 = 2.0;
pub const EYE_WIDTH: f32 = 32.0;
pub const EYE_WIDTH_DIZZY: f32 = 30.0;
/// Vertical squash applied while blinking or sleeping.
pub const EYE_SQUASH: f32 = 0.1;
pub const EYE_STRETCH_SCARED: f32 = 1.5;
pub const EYE_SQUASH_DIZZY: f32 = 0.5;
/// Eyes counter-rotate by this much during a dizzy spell, in degrees.
pub const EYE_ROTATION_DIZZY: f32 = 180.0;
