//! The seam between game logic and whatever the player is looking at
//!
//! Missions and the session only ever talk to [`Console`]. The TUI implements
//! it for real play, tests implement it with canned answers.

use crate::data::{CampaignKind, Profile, Tone};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line for the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub tone: Tone,
    pub text: String,
}

impl GameMessage {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            tone,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Tone::System, text)
    }

    pub fn intel(text: impl Into<String>) -> Self {
        Self::new(Tone::Intel, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(Tone::Failure, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, text)
    }

    /// Text with its tag, as it appears in the transcript
    pub fn display(&self) -> String {
        match self.tone.tag() {
            "" => self.text.clone(),
            tag => format!("{} {}", tag, self.text),
        }
    }
}

/// Rejects an answer with a hint, or accepts it
pub type Validator = fn(&str) -> std::result::Result<(), &'static str>;

/// Free-text question
#[derive(Debug, Clone)]
pub struct TextPrompt {
    pub message: String,
    pub default: Option<String>,
    pub validate: Option<Validator>,
    pub masked: bool,
}

impl TextPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            validate: None,
            masked: false,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Apply the default to an empty answer, then the validator.
    pub fn resolve(&self, raw: &str) -> std::result::Result<String, &'static str> {
        let answer = match (&self.default, raw.is_empty()) {
            (Some(default), true) => default.clone(),
            _ => raw.to_string(),
        };
        if let Some(validate) = self.validate {
            validate(&answer)?;
        }
        Ok(answer)
    }
}

/// Pick one (or several) from a list
#[derive(Debug, Clone)]
pub struct SelectPrompt {
    pub message: String,
    pub choices: Vec<String>,
}

impl SelectPrompt {
    pub fn new<S: Into<String>>(message: impl Into<String>, choices: impl IntoIterator<Item = S>) -> Self {
        Self {
            message: message.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome shown when a spinner stops
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinEnd {
    Success(String),
    Failure(String),
}

/// Full-screen interlude: title cards, victory, defeat
#[derive(Debug, Clone)]
pub struct Banner {
    pub art: Option<&'static str>,
    pub title: String,
    pub lines: Vec<String>,
    pub tone: Tone,
}

impl Banner {
    pub fn new(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            art: None,
            title: title.into(),
            lines: Vec::new(),
            tone,
        }
    }

    pub fn art(mut self, art: &'static str) -> Self {
        self.art = Some(art);
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// What the status panel shows
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub campaign: CampaignKind,
    pub name: String,
    pub background: Option<String>,
    pub lives: u32,
    pub max_lives: u32,
    pub score: u32,
    pub level: u32,
    pub max_level: u32,
    pub reputation: i32,
    pub tools: usize,
    pub achievements: usize,
}

impl StatusSnapshot {
    pub fn new(profile: &Profile, max_level: usize) -> Self {
        Self {
            campaign: profile.campaign,
            name: profile.name.clone(),
            background: profile.background.map(|b| b.to_string()),
            lives: profile.lives,
            max_lives: profile.campaign.starting_lives(profile.difficulty),
            score: profile.score,
            level: profile.level.min(max_level as u32),
            max_level: max_level as u32,
            reputation: profile.reputation,
            tools: profile.tools.len(),
            achievements: profile.achievements.len(),
        }
    }
}

/// Everything a mission can do to the screen or ask of the player.
///
/// Every prompt blocks until answered. `Err(GameError::Aborted)` means the
/// player quit.
pub trait Console {
    fn say(&mut self, message: GameMessage);

    /// Narration revealed a character at a time
    fn type_out(&mut self, message: GameMessage) -> Result<()> {
        self.say(message);
        Ok(())
    }

    /// Cosmetic wait with a spinner, ending in `end`
    fn spin(&mut self, label: &str, end: SpinEnd) -> Result<()>;

    fn banner(&mut self, banner: &Banner) -> Result<()>;

    fn status(&mut self, status: StatusSnapshot);

    fn clear(&mut self);

    fn input(&mut self, prompt: &TextPrompt) -> Result<String>;

    /// Index of the chosen entry
    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize>;

    /// Indices of the ticked entries, ascending
    fn multi_select(&mut self, prompt: &SelectPrompt) -> Result<Vec<usize>>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_least_three(s: &str) -> std::result::Result<(), &'static str> {
        if s.chars().count() >= 3 {
            Ok(())
        } else {
            Err("Codename must be at least 3 characters")
        }
    }

    #[test]
    fn test_empty_answer_takes_default() {
        let prompt = TextPrompt::new("alias").default_value("Anonymous");
        assert_eq!(prompt.resolve("").unwrap(), "Anonymous");
        assert_eq!(prompt.resolve("neo").unwrap(), "neo");
    }

    #[test]
    fn test_validator_rejects_with_hint() {
        let prompt = TextPrompt::new("codename").validate(at_least_three);
        assert_eq!(
            prompt.resolve("ab").unwrap_err(),
            "Codename must be at least 3 characters"
        );
        assert!(prompt.resolve("abc").is_ok());
    }

    #[test]
    fn test_message_display_carries_tag() {
        assert_eq!(GameMessage::system("hello").display(), "[SYSTEM] hello");
        assert_eq!(GameMessage::info("plain").display(), "plain");
    }
}
