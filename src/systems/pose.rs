use std::f32::consts::TAU;

use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{
    BODY_TILT_DEGREES, DIZZY_SPIN_PERIOD, EYE_HEIGHT, EYE_HEIGHT_DIZZY, EYE_HEIGHT_HOVER, EYE_HEIGHT_SCARED,
    EYE_HEIGHT_SLEEPING, EYE_ROTATION_DIZZY, EYE_SQUASH, EYE_SQUASH_DIZZY, EYE_STRETCH_SCARED, EYE_WIDTH_DIZZY,
    FLOAT_AMPLITUDE, FLOAT_PERIOD, HEAD_TILT_DEGREES, PUPIL_RANGE, SCARED_ROLL_AMPLITUDE, SCARED_SHAKE_AMPLITUDE,
    SCARED_SHAKE_PERIOD, SLEEP_BOB_AMPLITUDE, SLEEP_BOB_PERIOD, SLEEP_TILT_BASE, SLEEP_TILT_SWAY,
};
use crate::systems::{
    ActiveScene, AnimationClock, Blink, Bubble, ClickAction, DeltaTime, EyeGeometry, EyeStyle, FrameSnapshot, Hover,
    MascotFrame, Mood, OneShot, PointerSignal, Pose, PoseSprings,
};

/// Composes the final pose and frame snapshot for this tick.
///
/// Runs last in the schedule, so every priority decision it reads (mood,
/// bubble, actions) is from the current tick: the presentation layer never
/// sees a pose computed from a stale evaluation.
///
/// Layering: mood waveform first, then spring-smoothed pointer tracking,
/// then one-shot keyframes. Scared and dizzy keep pose precedence over
/// one-shots; the actions still play underneath and reappear if the mood
/// clears before they finish.
#[allow(clippy::too_many_arguments)]
pub fn pose_system(
    dt: Res<DeltaTime>,
    mood: Res<Mood>,
    pointer: Res<PointerSignal>,
    hover: Res<Hover>,
    blink: Res<Blink>,
    bubble: Res<Bubble>,
    scene: Res<ActiveScene>,
    actions: Query<&OneShot>,
    mut clock: ResMut<AnimationClock>,
    mut springs: ResMut<PoseSprings>,
    mut pose: ResMut<Pose>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    clock.elapsed += dt.seconds;
    let t = clock.elapsed;

    // Pointer tracking: linear maps into the tilt/pupil ranges, chased by
    // springs rather than assigned raw. The springs keep ticking in every
    // mood so control hands back smoothly when a mood ends.
    springs.head.set_target(
        -pointer.position.y * (2.0 * HEAD_TILT_DEGREES),
        pointer.position.x * (2.0 * HEAD_TILT_DEGREES),
    );
    springs.body.set_target(
        -pointer.position.y * (2.0 * BODY_TILT_DEGREES),
        pointer.position.x * (2.0 * BODY_TILT_DEGREES),
    );
    springs.pupils.set_target(
        pointer.position.x * (2.0 * PUPIL_RANGE.x),
        pointer.position.y * (2.0 * PUPIL_RANGE.y),
    );

    let (head_x, head_y) = springs.head.tick(dt.seconds);
    let (body_x, body_y) = springs.body.tick(dt.seconds);
    let (pupil_x, pupil_y) = springs.pupils.tick(dt.seconds);

    let mut offset = Vec2::ZERO;
    let mut lean = Vec2::new(body_x, body_y);
    let mut roll = 0.0;
    let mut yaw = 0.0;
    let mut spin = 0.0;
    let mut scale = 1.0;

    match *mood {
        Mood::Scared => {
            let phase = (TAU * t / SCARED_SHAKE_PERIOD).sin();
            offset.y = SCARED_SHAKE_AMPLITUDE * phase;
            roll = -SCARED_ROLL_AMPLITUDE * phase;
        }
        Mood::Dizzy { .. } => {
            spin = 360.0 * (t / DIZZY_SPIN_PERIOD).fract();
        }
        Mood::Sleeping => {
            let wave = 0.5 * (1.0 - (TAU * t / SLEEP_BOB_PERIOD).cos());
            offset.y = SLEEP_BOB_AMPLITUDE * wave;
            lean.x = SLEEP_TILT_BASE + SLEEP_TILT_SWAY * wave;
        }
        Mood::Normal => {
            offset.y = -FLOAT_AMPLITUDE * (TAU * t / FLOAT_PERIOD).cos();
        }
    }

    // One-shot overlays. Overlapping actions simply sum; that looseness is
    // part of the contract.
    let mut active: SmallVec<[ClickAction; 4]> = SmallVec::new();
    let mut arm_raised = false;
    let mut arm_idle_suppressed = false;
    let mut style = EyeStyle::Round;

    for shot in actions.iter() {
        active.push(shot.action);
        if shot.action.suppresses_arm_idle() {
            arm_raised = true;
            arm_idle_suppressed = true;
        }
        if let Some(override_style) = shot.action.eye_style() {
            style = override_style;
        }

        if !mood.takes_pose_precedence() {
            let keyframe = shot.action.sample(shot.elapsed);
            offset += keyframe.offset;
            roll += keyframe.roll;
            yaw += keyframe.yaw;
            scale *= keyframe.scale;
        }
    }

    // Blink is cosmetic and yields to any mood that owns the eyes
    let blinking = blink.is_closed() && !mood.controls_eyes();

    let mut eyes = EyeGeometry::default();
    match *mood {
        Mood::Sleeping => {
            eyes.height = EYE_HEIGHT_SLEEPING;
            eyes.scale_y = EYE_SQUASH;
        }
        Mood::Dizzy { .. } => {
            eyes.height = EYE_HEIGHT_DIZZY;
            eyes.scale_y = EYE_SQUASH_DIZZY;
            eyes.width = EYE_WIDTH_DIZZY;
            eyes.rotation = EYE_ROTATION_DIZZY;
        }
        Mood::Scared => {
            eyes.height = EYE_HEIGHT_SCARED;
            eyes.scale_y = if blinking { EYE_SQUASH } else { EYE_STRETCH_SCARED };
        }
        Mood::Normal => {
            eyes.height = if hover.0 { EYE_HEIGHT_HOVER } else { EYE_HEIGHT };
            if blinking {
                eyes.scale_y = EYE_SQUASH;
            }
        }
    }
    eyes.style = style;

    // Sleep and dizziness hide the bubble without touching its timer
    let bubble_drawn = bubble.active() && !mood.suppresses_bubble();

    // Greeting messages get a wave for as long as the bubble is up
    let arm_waving = bubble_drawn
        && bubble
            .text()
            .is_some_and(|text| text.contains("Hello") || text.contains("Hi"));

    *pose = Pose {
        offset,
        lean,
        roll,
        yaw,
        spin,
        scale,
        head: Vec2::new(head_x, head_y),
        pupils: Vec2::new(pupil_x, pupil_y),
        eyes,
        arm_raised,
        arm_idle_suppressed,
        arm_waving,
    };

    snapshot.0 = MascotFrame {
        mood: *mood,
        scene: scene.0,
        theme: scene.0.theme(),
        pose: *pose,
        bubble: bubble_drawn.then(|| bubble.text().unwrap_or_default().to_string()),
        actions: active,
        blinking,
    };
}
