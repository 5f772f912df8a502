//! A console that plays back canned answers, for tests

use super::console::{Banner, Console, GameMessage, SelectPrompt, SpinEnd, StatusSnapshot, TextPrompt};
use crate::data::Tone;
use crate::{GameError, Result};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Choices(Vec<usize>),
    Confirm(bool),
}

pub fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

pub fn choice(index: usize) -> Answer {
    Answer::Choice(index)
}

pub fn choices(indices: &[usize]) -> Answer {
    Answer::Choices(indices.to_vec())
}

pub fn yes() -> Answer {
    Answer::Confirm(true)
}

pub fn no() -> Answer {
    Answer::Confirm(false)
}

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<Answer>,
    pub transcript: Vec<GameMessage>,
    pub statuses: Vec<StatusSnapshot>,
    pub banners: Vec<String>,
    /// Validator hints for answers that were re-asked
    pub rejected: Vec<&'static str>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, answers: impl IntoIterator<Item = Answer>) {
        self.answers.extend(answers);
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Any transcript line containing `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|m| m.text.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|m| m.text.contains(needle)).count()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| GameError::InputClosed.into())
    }

    fn mismatch(prompt: &str, answer: &Answer) -> anyhow::Error {
        GameError::InvalidState(format!("script gave {:?} for {:?}", answer, prompt)).into()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, message: GameMessage) {
        self.transcript.push(message);
    }

    fn spin(&mut self, label: &str, end: SpinEnd) -> Result<()> {
        self.transcript.push(GameMessage::system(label));
        self.transcript.push(match end {
            SpinEnd::Success(text) => GameMessage::success(text),
            SpinEnd::Failure(text) => GameMessage::failure(text),
        });
        Ok(())
    }

    fn banner(&mut self, banner: &Banner) -> Result<()> {
        self.banners.push(banner.title.clone());
        Ok(())
    }

    fn status(&mut self, status: StatusSnapshot) {
        self.statuses.push(status);
    }

    fn clear(&mut self) {}

    fn input(&mut self, prompt: &TextPrompt) -> Result<String> {
        loop {
            match self.next(&prompt.message)? {
                Answer::Text(raw) => match prompt.resolve(&raw) {
                    Ok(answer) => return Ok(answer),
                    Err(hint) => {
                        self.rejected.push(hint);
                        self.transcript.push(GameMessage::new(Tone::Hint, hint));
                    }
                },
                other => return Err(Self::mismatch(&prompt.message, &other)),
            }
        }
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize> {
        match self.next(&prompt.message)? {
            Answer::Choice(i) if i < prompt.choices.len() => Ok(i),
            other => Err(Self::mismatch(&prompt.message, &other)),
        }
    }

    fn multi_select(&mut self, prompt: &SelectPrompt) -> Result<Vec<usize>> {
        match self.next(&prompt.message)? {
            Answer::Choices(mut picked) if picked.iter().all(|&i| i < prompt.choices.len()) => {
                picked.sort_unstable();
                picked.dedup();
                Ok(picked)
            }
            other => Err(Self::mismatch(&prompt.message, &other)),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(Self::mismatch(message, &other)),
        }
    }
}
