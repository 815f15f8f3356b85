use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::debug;

use crate::events::{HostCommand, HostEvent};
use crate::rig::RigConfig;
use crate::systems::{Activity, DeltaTime};

/// The transient speech bubble.
///
/// The display window keeps running regardless of mood; whether the bubble
/// is actually *drawn* is decided by the pose composer (sleeping and dizzy
/// hide it without touching the timer).
#[derive(Resource, Default, Debug, Clone)]
pub struct Bubble {
    slot: Option<ActiveBubble>,
}

#[derive(Debug, Clone)]
struct ActiveBubble {
    text: String,
    remaining: f32,
}

impl Bubble {
    /// The display window is running (a visible bubble suppresses sleep).
    pub fn active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.slot.as_ref().map(|bubble| bubble.text.as_str())
    }

    /// Seconds left on the display window, if one is running.
    pub fn remaining(&self) -> Option<f32> {
        self.slot.as_ref().map(|bubble| bubble.remaining)
    }
}

/// Applies message commands and expires the display window.
///
/// No queueing: the latest `ShowMessage` always wins immediately and
/// restarts the full window. An empty message clears the bubble.
pub fn bubble_system(
    dt: Res<DeltaTime>,
    config: Res<RigConfig>,
    mut events: EventReader<HostEvent>,
    mut activity: ResMut<Activity>,
    mut bubble: ResMut<Bubble>,
) {
    let mut replaced = false;

    for event in events.read() {
        let HostEvent::Command(command) = event;
        if let HostCommand::ShowMessage(text) = command {
            activity.insert(Activity::MESSAGE);
            replaced = true;

            if text.is_empty() {
                bubble.slot = None;
                debug!("Bubble cleared");
            } else {
                debug!(text = text.as_str(), window = config.bubble_window, "Bubble shown");
                bubble.slot = Some(ActiveBubble {
                    text: text.clone(),
                    remaining: config.bubble_window,
                });
            }
        }
    }

    // The window only runs down on ticks that didn't restart it
    if replaced {
        return;
    }

    if let Some(active) = bubble.slot.as_mut() {
        active.remaining -= dt.seconds;
        if active.remaining <= 0.0 {
            debug!("Bubble expired");
            bubble.slot = None;
        }
    }
}
