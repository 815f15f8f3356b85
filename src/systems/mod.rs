//! The mascot's behavioral systems.
//!
//! Each concern is a system over shared resources; the rig chains them in a
//! fixed order so priority decisions are never made from stale state.

pub mod blink;
pub mod bubble;
pub mod components;
pub mod idle;
pub mod interaction;
pub mod mood;
pub mod pose;
pub mod profiling;
pub mod signal;

pub use blink::{blink_system, Blink};
pub use bubble::{bubble_system, Bubble};
pub use components::{
    ActiveScene, Activity, AnimationClock, DeltaTime, Entropy, EyeGeometry, EyeStyle, FrameSnapshot, Hover,
    MascotFrame, Pose, PoseSprings,
};
pub use idle::{idle_system, IdleTimer};
pub use interaction::{expire_actions_system, interaction_system, ClickAction, Keyframe, OneShot};
pub use mood::{mood_system, DizzyWindow, Mood};
pub use pose::pose_system;
pub use signal::{signal_system, PointerSignal, ScrollSignal};
