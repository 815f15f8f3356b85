//! Aura mascot behavior engine library crate.

pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod rig;
pub mod scene;
pub mod spring;
pub mod systems;
