use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::trace;

use crate::rig::RigConfig;
use crate::systems::{Activity, DeltaTime};

/// Countdown to the sleeping mood.
///
/// Owned by the rig's world: dropping the rig drops the timer, so no sleep
/// transition can fire after teardown.
#[derive(Resource, Debug, Clone, Copy)]
pub struct IdleTimer {
    pub remaining: f32,
}

impl IdleTimer {
    pub fn new(delay: f32) -> Self {
        Self { remaining: delay }
    }

    /// The quiet period has fully elapsed.
    ///
    /// Elapsing alone does not put the mascot to sleep; the mood resolver
    /// re-validates its gates (bubble hidden, not scared/dizzy) at the
    /// moment of transition.
    pub fn elapsed(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Reloads the countdown on any tracked activity, otherwise runs it down.
///
/// Consumes (clears) the tick's activity mask.
pub fn idle_system(
    dt: Res<DeltaTime>,
    config: Res<RigConfig>,
    mut activity: ResMut<Activity>,
    mut idle: ResMut<IdleTimer>,
) {
    if !activity.is_empty() {
        trace!(activity = ?*activity, "Activity observed, idle countdown reset");
        idle.remaining = config.idle_delay;
        *activity = Activity::empty();
    } else {
        idle.remaining = (idle.remaining - dt.seconds).max(0.0);
    }
}
