use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use glam::Vec2;
use rand::rngs::SmallRng;
use smallvec::SmallVec;

use crate::scene::{ColorTheme, Scene};
use crate::spring::{Spring2, SpringConfig};
use crate::systems::interaction::ClickAction;
use crate::systems::mood::Mood;

#[derive(Resource)]
pub struct DeltaTime {
    /// Floating-point delta time in seconds
    pub seconds: f32,
    /// Integer tick delta (usually 1, but can be different for testing)
    pub ticks: u32,
}

#[allow(dead_code)]
impl DeltaTime {
    /// Creates a new DeltaTime from a floating-point delta time in seconds
    ///
    /// While this method exists as a helper, it does not mean that seconds and ticks are interchangeable.
    pub fn from_seconds(seconds: f32) -> Self {
        Self {
            seconds,
            ticks: (seconds * 60.0).round() as u32,
        }
    }

    /// Creates a new DeltaTime from an integer tick delta
    ///
    /// While this method exists as a helper, it does not mean that seconds and ticks are interchangeable.
    pub fn from_ticks(ticks: u32) -> Self {
        Self {
            seconds: ticks as f32 / 60.0,
            ticks,
        }
    }
}

bitflags! {
    /// Which kinds of activity were observed during the current tick.
    ///
    /// Consumed (and cleared) by the idle timer; any set bit reloads the
    /// sleep countdown.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Activity: u8 {
        const POINTER = 1 << 0;
        const SCROLL = 1 << 1;
        const MESSAGE = 1 << 2;
    }
}

/// The injected random source.
///
/// Seeded from the rig config so tests can pin action selection and blink
/// cadence; defaults to OS entropy.
#[derive(Resource)]
pub struct Entropy(pub SmallRng);

/// Whether the host reports the pointer hovering over the mascot's hit region.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Hover(pub bool);

/// The host page section currently on screen.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ActiveScene(pub Scene);

/// Wall-clock accumulator driving the mood waveforms.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct AnimationClock {
    pub elapsed: f32,
}

/// How the eyes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyeStyle {
    #[default]
    Round,
    /// Affection turns the eyes into hearts.
    Hearts,
    /// Spinning turns them into confused spirals.
    Spiral,
}

/// Resolved eye geometry, in eye-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeGeometry {
    pub height: f32,
    pub scale_y: f32,
    pub width: f32,
    pub rotation: f32,
    pub style: EyeStyle,
}

impl Default for EyeGeometry {
    fn default() -> Self {
        Self {
            height: crate::constants::EYE_HEIGHT,
            scale_y: 1.0,
            width: crate::constants::EYE_WIDTH,
            rotation: 0.0,
            style: EyeStyle::Round,
        }
    }
}

/// The fully resolved pose handed to the presentation layer each tick.
///
/// Rotations are in degrees, offsets in pose units matching the rendered rig.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Body translation from the rest position.
    pub offset: Vec2,
    /// Body parallax lean (x tilt, y tilt).
    pub lean: Vec2,
    /// Roll around the view axis.
    pub roll: f32,
    /// Yaw from one-shot spins.
    pub yaw: f32,
    /// Continuous revolution angle while dizzy.
    pub spin: f32,
    pub scale: f32,
    /// Head tilt (x, y), spring-smoothed toward the pointer.
    pub head: Vec2,
    /// Pupil offset within the eye, spring-smoothed.
    pub pupils: Vec2,
    pub eyes: EyeGeometry,
    /// The blast arm is raised.
    pub arm_raised: bool,
    /// Arm idle sway pauses for the duration of a blast.
    pub arm_idle_suppressed: bool,
    /// The mascot waves while a greeting bubble is on screen.
    pub arm_waving: bool,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            lean: Vec2::ZERO,
            roll: 0.0,
            yaw: 0.0,
            spin: 0.0,
            scale: 1.0,
            head: Vec2::ZERO,
            pupils: Vec2::ZERO,
            eyes: EyeGeometry::default(),
            arm_raised: false,
            arm_idle_suppressed: false,
            arm_waving: false,
        }
    }
}

/// The spring bank smoothing pointer-tracked channels.
#[derive(Resource)]
pub struct PoseSprings {
    pub head: Spring2,
    pub body: Spring2,
    pub pupils: Spring2,
}

impl PoseSprings {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            head: Spring2::new(config),
            body: Spring2::new(config),
            pupils: Spring2::new(config),
        }
    }
}

/// Everything the presentation layer needs to render one tick.
#[derive(Debug, Clone)]
pub struct MascotFrame {
    pub mood: Mood,
    pub scene: Scene,
    pub theme: ColorTheme,
    pub pose: Pose,
    /// Bubble text, present only while the bubble should actually be drawn
    /// (the underlying timer may be running while this is `None`).
    pub bubble: Option<String>,
    /// One-shot actions currently in flight.
    pub actions: SmallVec<[ClickAction; 4]>,
    pub blinking: bool,
}

impl Default for MascotFrame {
    fn default() -> Self {
        Self {
            mood: Mood::Normal,
            scene: Scene::Default,
            theme: Scene::Default.theme(),
            pose: Pose::default(),
            bubble: None,
            actions: SmallVec::new(),
            blinking: false,
        }
    }
}

/// Latest frame produced by the pose composer.
#[derive(Resource, Default)]
pub struct FrameSnapshot(pub MascotFrame);
