//! Data structures for the game
//!
//! Defines the player profile, tools, achievements and the profile store.

pub mod profile;
pub mod store;

pub use profile::*;
pub use store::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a line of narration should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    System,
    Intel,
    Mission,
    Info,
    Hint,
    Success,
    Failure,
    Warning,
}

impl Tone {
    /// Transcript prefix
    pub fn tag(&self) -> &'static str {
        match self {
            Tone::System => "[SYSTEM]",
            Tone::Intel => "[INTEL]",
            Tone::Mission => "[MISSION]",
            Tone::Info => "",
            Tone::Hint => "[HINT]",
            Tone::Success => "[SUCCESS]",
            Tone::Failure => "[FAILED]",
            Tone::Warning => "[WARN]",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Tone::System => "»",
            Tone::Intel => "ℹ",
            Tone::Mission => "◆",
            Tone::Info => " ",
            Tone::Hint => "?",
            Tone::Success => "✔",
            Tone::Failure => "✘",
            Tone::Warning => "▲",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::System => write!(f, "SYSTEM"),
            Tone::Intel => write!(f, "INTEL"),
            Tone::Mission => write!(f, "MISSION"),
            Tone::Info => write!(f, "INFO"),
            Tone::Hint => write!(f, "HINT"),
            Tone::Success => write!(f, "SUCCESS"),
            Tone::Failure => write!(f, "FAILED"),
            Tone::Warning => write!(f, "WARN"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First block of the uuid, for display
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
