use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{Res, ResMut},
};
use glam::Vec2;
use tracing::trace;

use crate::constants::POINTER_CLAMP;
use crate::events::{HostCommand, HostEvent};
use crate::rig::RigConfig;
use crate::systems::{ActiveScene, Activity, DeltaTime};

/// The current normalized pointer position and its horizontal velocity.
///
/// Position axes are in [-0.5, 0.5] with (0, 0) at the viewport center;
/// velocity is in normalized units per second. Both are overwritten in
/// place every tick, never accumulated.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerSignal {
    pub position: Vec2,
    pub velocity_x: f32,
}

/// Scroll velocity tracking and the derived "scrolling fast" flag.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ScrollSignal {
    last_offset: Option<f32>,
    pub velocity: f32,
    /// Time left until the scared flag calms down after the last
    /// over-threshold sample.
    calm_remaining: f32,
    /// The host asserted the flag directly, bypassing velocity tracking.
    pub host_fast: bool,
}

impl ScrollSignal {
    pub fn is_fast(&self) -> bool {
        self.host_fast || self.calm_remaining > 0.0
    }
}

/// Converts client coordinates to viewport-centered normalized coordinates.
///
/// Clamped defensively; hosts occasionally report coordinates outside the
/// viewport and those must not produce runaway pose values.
fn normalize(client: Vec2, viewport: Vec2) -> Vec2 {
    ((client - viewport * 0.5) / viewport).clamp(Vec2::splat(-POINTER_CLAMP), Vec2::splat(POINTER_CLAMP))
}

/// Samples raw host input into [`PointerSignal`] and [`ScrollSignal`].
///
/// A tick without pointer movement is a zero-displacement sample, so the
/// velocity reads zero; a mood can never latch onto a stale spike.
pub fn signal_system(
    dt: Res<DeltaTime>,
    config: Res<RigConfig>,
    mut events: EventReader<HostEvent>,
    mut pointer: ResMut<PointerSignal>,
    mut scroll: ResMut<ScrollSignal>,
    mut scene: ResMut<ActiveScene>,
    mut activity: ResMut<Activity>,
) {
    let previous_x = pointer.position.x;
    let mut pointer_moved = false;
    let mut scrolled = false;
    let mut scroll_exceeded = false;

    for event in events.read() {
        let HostEvent::Command(command) = event;
        match command {
            HostCommand::PointerMove(client) => {
                pointer.position = normalize(*client, config.viewport);
                pointer_moved = true;
            }
            HostCommand::Scroll(offset) => {
                if let Some(last) = scroll.last_offset {
                    if dt.seconds > 0.0 {
                        scroll.velocity = (offset - last) / dt.seconds;
                        if scroll.velocity.abs() > config.scroll_fast_threshold {
                            scroll_exceeded = true;
                        }
                    }
                }
                scroll.last_offset = Some(*offset);
                scrolled = true;
            }
            HostCommand::SceneChange(tag) => {
                // Pure theme selection; deliberately not an activity
                trace!(scene = %tag, "Scene change");
                scene.0 = *tag;
            }
            _ => {}
        }
    }

    if pointer_moved {
        activity.insert(Activity::POINTER);
        pointer.velocity_x = if dt.seconds > 0.0 {
            (pointer.position.x - previous_x) / dt.seconds
        } else {
            0.0
        };
        trace!(
            x = pointer.position.x,
            y = pointer.position.y,
            velocity = pointer.velocity_x,
            "Pointer sample"
        );
    } else {
        pointer.velocity_x = 0.0;
    }

    if scrolled {
        activity.insert(Activity::SCROLL);
    } else {
        scroll.velocity = 0.0;
    }

    scroll.calm_remaining = (scroll.calm_remaining - dt.seconds).max(0.0);
    if scroll_exceeded {
        scroll.calm_remaining = config.scroll_calm_delay;
    }
}
