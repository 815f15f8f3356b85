use std::collections::VecDeque;
use std::time::Duration;

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::{IntoSystem, System};
use micromap::Map;
use parking_lot::Mutex;
use smallvec::SmallVec;

/// Samples kept per system; one second of history at the nominal tick rate.
const TIMING_WINDOW_SIZE: usize = 60;
/// Upper bound on distinct profiled systems in the schedule.
const MAX_TRACKED: usize = 10;

/// Sliding-window wall-clock timings for each profiled system.
#[derive(Resource, Default, Debug)]
pub struct SystemTimings {
    timings: Mutex<Map<&'static str, VecDeque<Duration>, MAX_TRACKED>>,
}

impl SystemTimings {
    pub fn add_timing(&self, name: &'static str, duration: Duration) {
        let mut timings = self.timings.lock();
        let queue = timings.entry(name).or_insert_with(VecDeque::new);

        queue.push_back(duration);
        if queue.len() > TIMING_WINDOW_SIZE {
            queue.pop_front();
        }
    }

    /// Mean and worst duration per system over the current window.
    pub fn summary(&self) -> SmallVec<[(&'static str, Duration, Duration); MAX_TRACKED]> {
        let timings = self.timings.lock();
        let mut rows: SmallVec<[(&'static str, Duration, Duration); MAX_TRACKED]> = SmallVec::new();

        for (name, queue) in timings.iter() {
            if queue.is_empty() {
                continue;
            }

            let total: Duration = queue.iter().sum();
            let mean = total / queue.len() as u32;
            let worst = queue.iter().max().copied().unwrap_or(Duration::ZERO);
            rows.push((*name, mean, worst));
        }

        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

/// Wraps a system so its wall-clock duration lands in [`SystemTimings`].
pub fn profile<S, M>(name: &'static str, system: S) -> impl FnMut(&mut bevy_ecs::world::World)
where
    S: IntoSystem<(), (), M> + 'static,
{
    let mut system: S::System = IntoSystem::into_system(system);
    let mut is_initialized = false;
    move |world: &mut bevy_ecs::world::World| {
        if !is_initialized {
            system.initialize(world);
            is_initialized = true;
        }

        let start = std::time::Instant::now();
        system.run((), world);
        let duration = start.elapsed();

        if let Some(timings) = world.get_resource::<SystemTimings>() {
            timings.add_timing(name, duration);
        }
    }
}
