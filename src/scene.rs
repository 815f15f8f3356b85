//! Scene tags and their color themes.
//!
//! The host page tells the mascot which section is on screen; each section
//! carries a fixed color triple. This is a pure mapping with no lifecycle.

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

/// The section of the host page the mascot is reacting to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Scene {
    #[default]
    Default,
    Eco,
    Work,
    Mail,
}

impl Scene {
    /// Parses a host-supplied tag, falling back to [`Scene::Default`] on
    /// anything unrecognized.
    pub fn parse_or_default(tag: &str) -> Self {
        Scene::from_str(tag).unwrap_or_else(|_| {
            tracing::debug!(tag, "Unrecognized scene tag, falling back to default");
            Scene::Default
        })
    }

    /// The color triple for this scene.
    pub fn theme(self) -> ColorTheme {
        match self {
            Scene::Eco => ColorTheme {
                primary: "#22c55e",
                secondary: "#4ade80",
                shadow: "#22c55e",
            },
            Scene::Work => ColorTheme {
                primary: "#a855f7",
                secondary: "#c084fc",
                shadow: "#a855f7",
            },
            Scene::Mail => ColorTheme {
                primary: "#eab308",
                secondary: "#facc15",
                shadow: "#eab308",
            },
            Scene::Default => ColorTheme {
                primary: "#2dd4bf",
                secondary: "#5eead4",
                shadow: "#2dd4bf",
            },
        }
    }
}

/// CSS hex colors the presentation layer paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub shadow: &'static str,
}
