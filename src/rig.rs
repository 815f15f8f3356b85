//! The rig facade owning the mascot's world and schedule.
//!
//! The host environment talks to the engine exclusively through
//! [`MascotRig`]: feed it events, tick it with wall-clock time, read the
//! resolved frame. Every timer lives inside the rig's world, so dropping
//! the rig tears everything down at once — nothing can fire afterwards.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::resource::Resource;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;

use crate::constants::{
    BLINK_INTERVAL_MAX, BLINK_INTERVAL_MIN, BUBBLE_WINDOW, DIZZY_DURATION, DIZZY_VELOCITY_THRESHOLD, IDLE_SLEEP_DELAY,
    SCROLL_CALM_DELAY, SCROLL_FAST_THRESHOLD,
};
use crate::error::{ConfigError, RigResult};
use crate::events::{HostCommand, HostEvent};
use crate::scene::Scene;
use crate::spring::SpringConfig;
use crate::systems::profiling::{profile, SystemTimings};
use crate::systems::{
    blink, blink_system, bubble_system, expire_actions_system, idle_system, interaction_system, mood_system,
    pose_system, signal_system, ActiveScene, Activity, AnimationClock, Blink, Bubble, DeltaTime, DizzyWindow, Entropy,
    FrameSnapshot, Hover, IdleTimer, MascotFrame, Mood, PointerSignal, Pose, PoseSprings, ScrollSignal,
};

/// Every tunable the engine consumes, validated at rig construction.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RigConfig {
    /// Host viewport size in client pixels, used to normalize pointer
    /// coordinates.
    pub viewport: Vec2,
    /// Quiet seconds before the mascot falls asleep.
    pub idle_delay: f32,
    /// Seconds a speech bubble stays up without a superseding message.
    pub bubble_window: f32,
    /// Normalized horizontal pointer velocity that triggers a dizzy spell.
    pub dizzy_threshold: f32,
    /// Length of a dizzy spell, in seconds.
    pub dizzy_duration: f32,
    /// Scroll velocity that scares the mascot, in offset units/sec.
    pub scroll_fast_threshold: f32,
    /// Seconds the scared flag holds after scrolling calms down.
    pub scroll_calm_delay: f32,
    /// Bounds of the random delay between blinks, in seconds.
    pub blink_interval_min: f32,
    pub blink_interval_max: f32,
    pub spring: SpringConfig,
    /// Pin the random source for deterministic action selection and blink
    /// cadence. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(1920.0, 1080.0),
            idle_delay: IDLE_SLEEP_DELAY,
            bubble_window: BUBBLE_WINDOW,
            dizzy_threshold: DIZZY_VELOCITY_THRESHOLD,
            dizzy_duration: DIZZY_DURATION,
            scroll_fast_threshold: SCROLL_FAST_THRESHOLD,
            scroll_calm_delay: SCROLL_CALM_DELAY,
            blink_interval_min: BLINK_INTERVAL_MIN,
            blink_interval_max: BLINK_INTERVAL_MAX,
            spring: SpringConfig::default(),
            seed: None,
        }
    }
}

impl RigConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
            Ok(())
        }

        positive("idle_delay", self.idle_delay)?;
        positive("bubble_window", self.bubble_window)?;
        positive("dizzy_threshold", self.dizzy_threshold)?;
        positive("dizzy_duration", self.dizzy_duration)?;
        positive("scroll_fast_threshold", self.scroll_fast_threshold)?;
        positive("scroll_calm_delay", self.scroll_calm_delay)?;
        positive("blink_interval_min", self.blink_interval_min)?;
        positive("blink_interval_max", self.blink_interval_max)?;
        positive("spring.stiffness", self.spring.stiffness)?;
        positive("spring.damping", self.spring.damping)?;
        positive("spring.mass", self.spring.mass)?;

        if self.blink_interval_min >= self.blink_interval_max {
            return Err(ConfigError::InvertedBlinkInterval {
                min: self.blink_interval_min,
                max: self.blink_interval_max,
            });
        }

        if !(self.viewport.x > 0.0 && self.viewport.y > 0.0)
            || !self.viewport.x.is_finite()
            || !self.viewport.y.is_finite()
        {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport.x,
                height: self.viewport.y,
            });
        }

        Ok(())
    }
}

/// The mascot engine: a headless world plus the chained behavior schedule.
pub struct MascotRig {
    world: World,
    schedule: Schedule,
}

impl MascotRig {
    pub fn new(config: RigConfig) -> RigResult<Self> {
        config.validate()?;

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<HostEvent>(&mut world);

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut entropy = Entropy(rng);
        let first_blink = blink::roll_interval(&config, &mut entropy);

        world.insert_resource(IdleTimer::new(config.idle_delay));
        world.insert_resource(Blink::new(first_blink));
        world.insert_resource(PoseSprings::new(config.spring));
        world.insert_resource(config);
        world.insert_resource(entropy);
        world.insert_resource(DeltaTime::from_ticks(0));
        world.insert_resource(Activity::default());
        world.insert_resource(PointerSignal::default());
        world.insert_resource(ScrollSignal::default());
        world.insert_resource(DizzyWindow::default());
        world.insert_resource(Mood::default());
        world.insert_resource(Bubble::default());
        world.insert_resource(Hover::default());
        world.insert_resource(ActiveScene::default());
        world.insert_resource(AnimationClock::default());
        world.insert_resource(Pose::default());
        world.insert_resource(FrameSnapshot::default());
        world.insert_resource(SystemTimings::default());

        // Priority resolution happens in this exact order every tick; the
        // pose composer always reads a fresh evaluation
        schedule.add_systems(
            (
                profile("signal", signal_system),
                profile("bubble", bubble_system),
                profile("idle", idle_system),
                profile("blink", blink_system),
                profile("mood", mood_system),
                profile("interaction", interaction_system),
                profile("expire_actions", expire_actions_system),
                profile("pose", pose_system),
            )
                .chain(),
        );

        Ok(Self { world, schedule })
    }

    fn send(&mut self, command: HostCommand) {
        let _ = self.world.send_event(HostEvent::from(command));
    }

    /// Pointer moved, in client (viewport pixel) coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.send(HostCommand::PointerMove(Vec2::new(x, y)));
    }

    /// The page scrolled to this absolute offset.
    pub fn scrolled(&mut self, offset: f32) {
        self.send(HostCommand::Scroll(offset));
    }

    /// The mascot's hit region was clicked.
    pub fn clicked(&mut self) {
        self.send(HostCommand::Click);
    }

    /// Shows a speech bubble; an empty string clears it.
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.send(HostCommand::ShowMessage(text.into()));
    }

    pub fn set_scene(&mut self, scene: Scene) {
        self.send(HostCommand::SceneChange(scene));
    }

    /// Convenience for hosts passing raw tags; unknown tags fall back to the
    /// default scene.
    pub fn set_scene_tag(&mut self, tag: &str) {
        self.set_scene(Scene::parse_or_default(tag));
    }

    /// Host-computed fast-scroll flag. Overrides the internal scroll
    /// velocity tracking while asserted.
    pub fn set_scrolling_fast(&mut self, fast: bool) {
        self.world.resource_mut::<ScrollSignal>().host_fast = fast;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.world.resource_mut::<Hover>().0 = hovering;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            warn!(width, height, "Ignoring invalid viewport");
            return;
        }
        self.world.resource_mut::<RigConfig>().viewport = Vec2::new(width, height);
    }

    /// Advances the engine by `dt` seconds of wall-clock time.
    ///
    /// A non-finite or negative delta is rejected; a broken host clock must
    /// not corrupt the timers.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "Ignoring tick with invalid delta");
            return;
        }

        self.world.insert_resource(DeltaTime::from_seconds(dt));
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<HostEvent>>().update();
    }

    /// The frame produced by the most recent tick.
    pub fn frame(&self) -> MascotFrame {
        self.world.resource::<FrameSnapshot>().0.clone()
    }

    /// The active mood after the most recent tick.
    pub fn mood(&self) -> Mood {
        *self.world.resource::<Mood>()
    }

    /// The resolved pose after the most recent tick.
    pub fn pose(&self) -> Pose {
        *self.world.resource::<Pose>()
    }

    /// Per-system timing summary over the last window: (name, mean, worst).
    pub fn timing_summary(&self) -> smallvec::SmallVec<[(&'static str, std::time::Duration, std::time::Duration); 10]> {
        self.world.resource::<SystemTimings>().summary()
    }
}
