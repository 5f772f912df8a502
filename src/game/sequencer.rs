//! Mission progression under a lives budget
//!
//! A small state machine. The profile is handed in by value with each
//! mission report and handed back updated, so nothing else mutates it
//! mid-run.

use super::mission::MissionReport;
use crate::data::{Profile, Rewards};
use crate::{GameError, Result};

/// Where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    AwaitingMission(usize),
    Defeated,
    Victorious,
}

impl RunState {
    pub fn is_over(&self) -> bool {
        !matches!(self, RunState::AwaitingMission(_))
    }
}

/// What recording a mission report did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    Retry { index: usize, lives_left: u32 },
    Defeated { index: usize },
    Victory,
}

impl Transition {
    /// Every transition except a retry is a checkpoint
    pub fn is_checkpoint(&self) -> bool {
        !matches!(self, Transition::Retry { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    mission_count: usize,
    state: RunState,
}

impl Sequencer {
    /// Pick up where the profile left off.
    ///
    /// A profile already past the last mission starts out victorious, and
    /// the victory bonus is not paid again.
    pub fn resume(profile: &Profile, mission_count: usize) -> Self {
        let index = profile.mission_index();
        let state = if index >= mission_count {
            RunState::Victorious
        } else if profile.is_out_of_lives() {
            RunState::Defeated
        } else {
            RunState::AwaitingMission(index)
        };
        Self {
            mission_count,
            state,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn mission_count(&self) -> usize {
        self.mission_count
    }

    /// Apply one mission report.
    pub fn record(
        &mut self,
        profile: Profile,
        report: &MissionReport,
        victory_bonus: &Rewards,
    ) -> Result<(Profile, Transition)> {
        let index = match self.state {
            RunState::AwaitingMission(index) => index,
            state => {
                return Err(GameError::InvalidState(format!(
                    "mission report recorded after the run ended ({:?})",
                    state
                ))
                .into())
            }
        };

        let profile = profile.with_rewards(&report.rewards);

        if report.passed {
            let profile = profile.advance_level();
            let next = index + 1;
            if next >= self.mission_count {
                self.state = RunState::Victorious;
                Ok((profile.with_rewards(victory_bonus), Transition::Victory))
            } else {
                self.state = RunState::AwaitingMission(next);
                Ok((profile, Transition::Advanced { from: index, to: next }))
            }
        } else {
            let profile = profile.lose_life();
            if profile.is_out_of_lives() {
                self.state = RunState::Defeated;
                Ok((profile, Transition::Defeated { index }))
            } else {
                let lives_left = profile.lives;
                Ok((profile, Transition::Retry { index, lives_left }))
            }
        }
    }
}
