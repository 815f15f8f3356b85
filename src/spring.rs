//! A damped spring filter for smoothing continuous motion targets.
//!
//! Pointer-tracked values (head tilt, pupil offsets) must not snap to their
//! targets; they chase them with a critically-damped-like response. The
//! filter is a plain numeric utility with no framework ties: feed it a
//! target, tick it with wall-clock dt, read the smoothed value.

/// Spring tuning shared by every smoothed channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// The damping coefficient at which a spring of this stiffness and mass
    /// neither oscillates nor crawls.
    pub fn critical_damping(stiffness: f32, mass: f32) -> f32 {
        2.0 * (stiffness.max(f32::EPSILON) * mass.max(f32::EPSILON)).sqrt()
    }

    /// A critically damped configuration for the given stiffness and mass.
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: Self::critical_damping(stiffness, mass),
            mass,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: crate::constants::SPRING_STIFFNESS,
            damping: crate::constants::SPRING_DAMPING,
            mass: crate::constants::SPRING_MASS,
        }
    }
}

/// A single smoothed scalar channel.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f32,
    target: f32,
    velocity: f32,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            value: initial,
            target: initial,
            velocity: 0.0,
            config,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Snaps the channel to a value, killing any in-flight velocity.
    pub fn reset(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances the simulation by `dt` seconds and returns the new value.
    ///
    /// Semi-implicit Euler; stable for the step sizes a UI loop produces.
    /// Large steps are subdivided so a stalled host clock cannot fling the
    /// spring past its target.
    pub fn tick(&mut self, dt: f32) -> f32 {
        const MAX_STEP: f32 = 1.0 / 60.0;

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            let acceleration = (self.config.stiffness * (self.target - self.value)
                - self.config.damping * self.velocity)
                / self.config.mass.max(f32::EPSILON);
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        self.value
    }
}

/// A pair of springs tracking a 2D target.
#[derive(Debug, Clone, Copy)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(0.0, config),
            y: Spring::new(0.0, config),
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn tick(&mut self, dt: f32) -> (f32, f32) {
        (self.x.tick(dt), self.y.tick(dt))
    }

    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring, seconds: f32) {
        let steps = (seconds * 240.0) as usize;
        for _ in 0..steps {
            spring.tick(1.0 / 240.0);
        }
    }

    #[test]
    fn test_converges_to_target() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        settle(&mut spring, 3.0);
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_critical_damping_does_not_overshoot() {
        let config = SpringConfig::critical(100.0, 0.5);
        let mut spring = Spring::new(0.0, config);
        spring.set_target(1.0);

        let mut max_seen = 0.0f32;
        for _ in 0..2000 {
            max_seen = max_seen.max(spring.tick(1.0 / 240.0));
        }
        assert!(max_seen <= 1.0 + 1e-4, "overshot to {max_seen}");
    }

    #[test]
    fn test_step_response_is_monotone_under_critical_damping() {
        let config = SpringConfig::critical(100.0, 0.5);
        let mut spring = Spring::new(0.0, config);
        spring.set_target(1.0);

        let mut last = 0.0f32;
        for _ in 0..1000 {
            let value = spring.tick(1.0 / 240.0);
            assert!(value >= last - 1e-5);
            last = value;
        }
    }

    #[test]
    fn test_large_dt_is_subdivided() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        // One giant step must not fling the value past any sane bound
        let value = spring.tick(10.0);
        assert!((value - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_kills_velocity() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        spring.tick(0.1);
        spring.reset(0.5);
        assert_eq!(spring.value(), 0.5);
        // With target == value and zero velocity, the spring stays put
        assert!((spring.tick(0.1) - 0.5).abs() < 1e-6);
    }
}
