use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use rand::Rng;

use crate::constants::BLINK_CLOSE_TIME;
use crate::rig::RigConfig;
use crate::systems::{DeltaTime, Entropy};

/// Periodic involuntary blink, uncorrelated with mood.
///
/// Purely cosmetic: it never participates in mood resolution, and the pose
/// composer ignores it whenever a mood (sleeping, dizzy) already controls
/// eye height.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Blink {
    pub timer: f32,
    pub interval: f32,
    closed_remaining: f32,
}

impl Blink {
    pub fn new(interval: f32) -> Self {
        Self {
            timer: 0.0,
            interval,
            closed_remaining: 0.0,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed_remaining > 0.0
    }
}

/// Rolls the next blink delay from the configured interval.
pub fn roll_interval(config: &RigConfig, entropy: &mut Entropy) -> f32 {
    entropy.0.random_range(config.blink_interval_min..config.blink_interval_max)
}

/// Accumulates time toward the next blink and times the eyelid closure.
pub fn blink_system(
    dt: Res<DeltaTime>,
    config: Res<RigConfig>,
    mut entropy: ResMut<Entropy>,
    mut blink: ResMut<Blink>,
) {
    if blink.is_closed() {
        blink.closed_remaining -= dt.seconds;
        if !blink.is_closed() {
            // Eyes reopen; schedule the next blink
            blink.timer = 0.0;
            blink.interval = roll_interval(&config, &mut entropy);
        }
        return;
    }

    blink.timer += dt.seconds;
    if blink.timer >= blink.interval {
        blink.closed_remaining = BLINK_CLOSE_TIME;
    }
}
