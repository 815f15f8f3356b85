use bevy_ecs::{
    component::Component,
    entity::Entity,
    event::EventReader,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;
use strum::{EnumCount as _, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};
use tracing::{debug, trace};

use crate::events::{HostCommand, HostEvent};
use crate::systems::{DeltaTime, Entropy, EyeStyle};

/// One-shot animations the mascot can play when clicked.
///
/// One is chosen uniformly at random per click; there is no queueing and no
/// mutual-exclusion lock, so rapid clicks may overlap animations. The single
/// exception is [`ClickAction::EnergyBlast`], which will not start while
/// another blast is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ClickAction {
    Jump,
    Affection,
    Spin,
    EnergyBlast,
}

impl ClickAction {
    /// Total play time, in seconds. The action reverts every transient flag
    /// by itself when this elapses.
    pub fn duration(self) -> f32 {
        match self {
            ClickAction::Jump => 0.6,
            ClickAction::Affection => 2.0,
            ClickAction::Spin => 1.0,
            ClickAction::EnergyBlast => 1.0,
        }
    }

    /// The blast pose holds the arm up and pauses its idle sway.
    pub fn suppresses_arm_idle(self) -> bool {
        matches!(self, ClickAction::EnergyBlast)
    }

    /// Eye override carried for the whole duration, if any.
    pub fn eye_style(self) -> Option<EyeStyle> {
        match self {
            ClickAction::Affection => Some(EyeStyle::Hearts),
            ClickAction::Spin => Some(EyeStyle::Spiral),
            _ => None,
        }
    }

    pub fn keyframes(self) -> &'static [Keyframe] {
        match self {
            ClickAction::Jump => JUMP_KEYFRAMES,
            ClickAction::Affection => AFFECTION_KEYFRAMES,
            ClickAction::Spin => SPIN_KEYFRAMES,
            ClickAction::EnergyBlast => BLAST_KEYFRAMES,
        }
    }

    /// Samples this action's keyframe table at `elapsed` seconds, linearly
    /// interpolating between neighboring frames and clamping at the ends.
    pub fn sample(self, elapsed: f32) -> Keyframe {
        let frames = self.keyframes();

        let first = frames[0];
        if elapsed <= first.at {
            return first;
        }

        for pair in frames.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if elapsed <= to.at {
                let span = to.at - from.at;
                let alpha = if span > 0.0 { (elapsed - from.at) / span } else { 1.0 };
                return Keyframe {
                    at: elapsed,
                    offset: from.offset.lerp(to.offset, alpha),
                    scale: from.scale + (to.scale - from.scale) * alpha,
                    roll: from.roll + (to.roll - from.roll) * alpha,
                    yaw: from.yaw + (to.yaw - from.yaw) * alpha,
                };
            }
        }

        frames[frames.len() - 1]
    }
}

/// A point on a one-shot action's animation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Seconds from action start.
    pub at: f32,
    pub offset: Vec2,
    pub scale: f32,
    pub roll: f32,
    pub yaw: f32,
}

const fn frame(at: f32, x: f32, y: f32, scale: f32, roll: f32, yaw: f32) -> Keyframe {
    Keyframe {
        at,
        offset: Vec2::new(x, y),
        scale,
        roll,
        yaw,
    }
}

const JUMP_KEYFRAMES: &[Keyframe] = &[
    frame(0.0, 0.0, -10.0, 1.0, 0.0, 0.0),
    frame(0.3, 0.0, -40.0, 1.2, 0.0, 0.0),
    frame(0.6, 0.0, -10.0, 1.0, 0.0, 0.0),
];

const AFFECTION_KEYFRAMES: &[Keyframe] = &[
    frame(0.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    frame(0.2, 0.0, 0.0, 1.1, -5.0, 0.0),
    frame(0.4, 0.0, 0.0, 1.0, 5.0, 0.0),
    frame(0.5, 0.0, 0.0, 1.0, 0.0, 0.0),
    frame(2.0, 0.0, 0.0, 1.0, 0.0, 0.0),
];

const SPIN_KEYFRAMES: &[Keyframe] = &[
    frame(0.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    frame(0.8, 0.0, 0.0, 1.0, 0.0, 360.0),
    frame(1.0, 0.0, 0.0, 1.0, 0.0, 360.0),
];

const BLAST_KEYFRAMES: &[Keyframe] = &[
    frame(0.0, -5.0, 0.0, 1.0, 0.0, 0.0),
    frame(0.15, 5.0, 0.0, 1.0, -5.0, 0.0),
    frame(0.3, -5.0, 0.0, 1.0, 5.0, 0.0),
    frame(0.4, 0.0, 0.0, 1.0, 0.0, 0.0),
    frame(1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
];

/// A one-shot action in flight. Self-terminating; see
/// [`expire_actions_system`].
#[derive(Component, Debug, Clone, Copy)]
pub struct OneShot {
    pub action: ClickAction,
    pub elapsed: f32,
}

/// Turns click events into randomly chosen one-shot actions.
pub fn interaction_system(
    mut commands: Commands,
    mut events: EventReader<HostEvent>,
    mut entropy: ResMut<Entropy>,
    active: Query<&OneShot>,
) {
    let clicks = events
        .read()
        .filter(|event| matches!(event, HostEvent::Command(HostCommand::Click)))
        .count();
    if clicks == 0 {
        return;
    }

    let menu: SmallVec<[ClickAction; ClickAction::COUNT]> = ClickAction::iter().collect();
    let mut blast_active = active.iter().any(|shot| shot.action == ClickAction::EnergyBlast);

    for _ in 0..clicks {
        let Some(&action) = menu.choose(&mut entropy.0) else {
            break;
        };

        if action == ClickAction::EnergyBlast {
            if blast_active {
                trace!("Blast already in flight, roll discarded");
                continue;
            }
            blast_active = true;
        }

        debug!(action = %action, "Click action started");
        commands.spawn(OneShot { action, elapsed: 0.0 });
    }
}

/// Advances in-flight actions and despawns them once their duration elapses,
/// reverting any transient flag they carried.
pub fn expire_actions_system(mut commands: Commands, dt: Res<DeltaTime>, mut query: Query<(Entity, &mut OneShot)>) {
    for (entity, mut shot) in query.iter_mut() {
        shot.elapsed += dt.seconds;
        if shot.elapsed >= shot.action.duration() {
            trace!(action = %shot.action, "Click action finished");
            commands.entity(entity).despawn();
        }
    }
}
