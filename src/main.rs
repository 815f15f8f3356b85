//! Headless demo driver for the mascot engine.
//!
//! Replays a scripted input tape (pointer sweeps, a shake, clicks, messages,
//! a scroll fling, a long idle stretch) at 60 Hz and logs what the engine
//! resolves, so the behavior can be observed without a renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, event, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use aura::constants::LOOP_TIME;
use aura::formatter::{self, TickFormatter};
use aura::rig::{MascotRig, RigConfig};
use aura::scene::Scene;

/// How long the scripted tape runs before the demo exits.
const DEMO_LENGTH: Duration = Duration::from_secs(24);

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .event_format(TickFormatter)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut rig = MascotRig::new(RigConfig::default())?;
    rig.show_message("Hi! I am Aura.");

    event!(
        tracing::Level::INFO,
        "Starting demo loop ({:.3}ms)",
        LOOP_TIME.as_secs_f32() * 1000.0
    );

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let mut previous = 0.0f32;
    let mut tick_no = 0u32;

    while started.elapsed() < DEMO_LENGTH {
        let start = Instant::now();

        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();

        let now = started.elapsed().as_secs_f32();
        drive(&mut rig, previous, now);
        previous = now;

        rig.tick(dt);
        formatter::increment_tick();
        tick_no += 1;

        // One status line per second of demo time
        if tick_no % 60 == 0 {
            let frame = rig.frame();
            info!(
                mood = ?frame.mood,
                scene = %frame.scene,
                bubble = frame.bubble.as_deref().unwrap_or("-"),
                offset_y = format!("{:.1}", frame.pose.offset.y).as_str(),
                "Status"
            );
        }

        if tick_no % 600 == 0 {
            for (name, mean, worst) in rig.timing_summary() {
                debug!(system = name, ?mean, ?worst, "System timing");
            }
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Demo loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }
    }

    info!("Demo tape finished. Exiting...");
    Ok(())
}

/// Fires tape entries that fall between the previous and current demo time.
fn drive(rig: &mut MascotRig, previous: f32, now: f32) {
    let crossed = |mark: f32| previous < mark && now >= mark;

    // Gentle pointer orbit; the eyes and head should track it smoothly
    if now < 4.0 {
        let angle = now * std::f32::consts::TAU / 4.0;
        rig.pointer_moved(960.0 + angle.cos() * 300.0, 540.0 + angle.sin() * 200.0);
    }

    // A burst of clicks; expect random one-shot actions, possibly overlapping
    for mark in [4.5, 4.7, 4.9] {
        if crossed(mark) {
            rig.clicked();
        }
    }

    // Violent horizontal shake, fast enough to trigger a dizzy spell
    if (6.0..6.3).contains(&now) {
        let side = if (now * 30.0) as u32 % 2 == 0 { 200.0 } else { 1700.0 };
        rig.pointer_moved(side, 540.0);
    }

    if crossed(8.5) {
        rig.set_scene(Scene::Eco);
        rig.show_message("Here's what drives my engineering.");
    }

    // Page flung downward; the scroll tracker should flag the scared mood
    if (10.0..10.8).contains(&now) {
        rig.scrolled(now * 2000.0);
    }

    // Nothing from 10.8s on: the idle timer should put the mascot to sleep
    // once the bubble has expired

    if crossed(20.0) {
        rig.set_scene(Scene::Mail);
        rig.show_message("Ready to build something together?");
    }
}
