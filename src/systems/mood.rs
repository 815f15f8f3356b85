use std::mem::discriminant;

use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::{debug, trace};

use crate::rig::RigConfig;
use crate::systems::{Bubble, DeltaTime, IdleTimer, PointerSignal, ScrollSignal};

/// The single behavioral state governing the mascot's idle animation.
///
/// Exactly one mood is active at any instant; resolution is strict
/// priority: `Scared > Dizzy > Sleeping > Normal`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum Mood {
    #[default]
    Normal,
    Sleeping,
    /// Dizzy spell with this much of the cooldown left, in seconds.
    Dizzy {
        remaining: f32,
    },
    Scared,
}

impl Mood {
    /// This mood dictates eye height, so the cosmetic blink must not
    /// interfere.
    pub fn controls_eyes(&self) -> bool {
        matches!(self, Mood::Sleeping | Mood::Dizzy { .. })
    }

    /// This mood's pose cannot be overridden by one-shot click actions.
    pub fn takes_pose_precedence(&self) -> bool {
        matches!(self, Mood::Scared | Mood::Dizzy { .. })
    }

    /// The speech bubble is not drawn over this mood. Its timer still runs.
    pub fn suppresses_bubble(&self) -> bool {
        matches!(self, Mood::Sleeping | Mood::Dizzy { .. })
    }
}

/// Side-state for the dizzy cooldown.
///
/// Kept separate from [`Mood`] so the spell keeps running down while a
/// higher-priority mood (scared) is displayed over it.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct DizzyWindow {
    pub remaining: f32,
}

/// Recomputes the active mood from this tick's signals.
///
/// Runs after the signal, bubble and idle systems so every gate is
/// evaluated against current state; the sleep gating in particular is
/// re-validated here, at the moment of transition, rather than captured
/// when the idle timer elapsed.
pub fn mood_system(
    dt: Res<DeltaTime>,
    config: Res<RigConfig>,
    pointer: Res<PointerSignal>,
    scroll: Res<ScrollSignal>,
    idle: Res<IdleTimer>,
    bubble: Res<Bubble>,
    mut window: ResMut<DizzyWindow>,
    mut mood: ResMut<Mood>,
) {
    let old = *mood;

    // Run the spell down before checking for a fresh spike. A spike while
    // the window is still open is a no-op: the window never extends.
    window.remaining = (window.remaining - dt.seconds).max(0.0);
    if pointer.velocity_x.abs() > config.dizzy_threshold {
        if window.remaining > 0.0 {
            trace!(velocity = pointer.velocity_x, "Velocity spike during active dizzy spell ignored");
        } else {
            window.remaining = config.dizzy_duration;
        }
    }

    let new = if scroll.is_fast() {
        Mood::Scared
    } else if window.remaining > 0.0 {
        Mood::Dizzy {
            remaining: window.remaining,
        }
    } else if idle.elapsed() && !bubble.active() {
        Mood::Sleeping
    } else {
        Mood::Normal
    };

    if discriminant(&old) != discriminant(&new) {
        match (old, new) {
            (_, Mood::Scared) => debug!(old = ?old, "Fast scroll, mascot is scared"),
            (_, Mood::Dizzy { .. }) => {
                debug!(old = ?old, velocity = pointer.velocity_x, "Pointer shaken, mascot is dizzy")
            }
            (_, Mood::Sleeping) => debug!("No activity, mascot falls asleep"),
            (Mood::Sleeping, Mood::Normal) => debug!("Mascot wakes up"),
            (_, Mood::Normal) => debug!(old = ?old, "Mascot calms down"),
        }
    }

    *mood = new;
}
