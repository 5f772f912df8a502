//! Nexus Hack: terminal hacking-quiz campaigns
//!
//! Two linear campaigns of scripted hacking challenges played in the
//! terminal. Wrong answers cost lives, right answers earn score, reputation,
//! tools and achievements, and progress is kept in a JSON profile.
//!
//! # Campaigns
//!
//! - **Cyber Hack** (`classic`): five quick-fire levels, three lives
//! - **Nexus Hack** (`nexus`): four missions built from sub-challenges,
//!   difficulty and background pick your lives and starter tools
//!
//! # Architecture
//!
//! - `data` - Profile, tools, achievements and the JSON profile store
//! - `game` - Missions, the mission sequencer and the session flow
//! - `tui` - Terminal user interface with ratatui
//! - `config` - Command line options

pub mod config;
pub mod data;
pub mod game;
pub mod tui;

pub use config::Config;
pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Save file corrupted: {0}")]
    CorruptedSave(String),

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Player disconnected")]
    Aborted,

    #[error("No more input available")]
    InputClosed,
}

impl GameError {
    /// True when the error just means the player wants out.
    pub fn is_quit(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::Aborted) | Some(GameError::InputClosed)
        )
    }
}
