use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::scene::Scene;

/// A discrete input produced by the host environment.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCommand {
    /// Pointer moved to this position, in client (viewport pixel) coordinates.
    PointerMove(Vec2),
    /// The page scrolled to this absolute offset.
    Scroll(f32),
    /// The mascot's hit region was clicked.
    Click,
    /// Show a speech bubble with this text. An empty string clears the bubble.
    ShowMessage(String),
    /// The host page switched sections.
    SceneChange(Scene),
}

#[derive(Event, Clone, Debug, PartialEq)]
pub enum HostEvent {
    Command(HostCommand),
}

impl From<HostCommand> for HostEvent {
    fn from(command: HostCommand) -> Self {
        HostEvent::Command(command)
    }
}
