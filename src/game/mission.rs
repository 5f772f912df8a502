//! Missions and campaigns

use super::console::{Console, GameMessage, SelectPrompt, SpinEnd, TextPrompt};
use super::{classic, nexus};
use crate::data::{CampaignKind, Profile, Rewards, Tool};
use crate::Result;
use rand::{Rng, RngCore};

/// What a mission reports back to the sequencer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionReport {
    pub passed: bool,
    /// Applied whether or not the mission passed
    pub rewards: Rewards,
}

impl MissionReport {
    pub fn success(rewards: Rewards) -> Self {
        Self { passed: true, rewards }
    }

    pub fn failure() -> Self {
        Self {
            passed: false,
            rewards: Rewards::default(),
        }
    }

    /// A failure that still pays out something
    pub fn failure_with(consolation: Rewards) -> Self {
        Self {
            passed: false,
            rewards: consolation,
        }
    }

    /// Rewards only if the check passed
    pub fn check(passed: bool, rewards: Rewards) -> Self {
        if passed {
            Self::success(rewards)
        } else {
            Self::failure()
        }
    }
}

/// What a mission gets to work with
pub struct MissionContext<'a> {
    pub profile: &'a Profile,
    pub console: &'a mut dyn Console,
    pub rng: &'a mut dyn RngCore,
}

impl<'a> MissionContext<'a> {
    pub fn new(profile: &'a Profile, console: &'a mut dyn Console, rng: &'a mut dyn RngCore) -> Self {
        Self { profile, console, rng }
    }

    /// True with probability `chance`
    pub fn roll(&mut self, chance: f64) -> bool {
        self.rng.random_bool(chance.clamp(0.0, 1.0))
    }

    /// Uniform draw from `low..=high`
    pub fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    pub fn has_tool(&self, tool: Tool) -> bool {
        self.profile.has_tool(tool)
    }

    pub fn say(&mut self, message: GameMessage) {
        self.console.say(message);
    }

    pub fn type_out(&mut self, message: GameMessage) -> Result<()> {
        self.console.type_out(message)
    }

    pub fn spin(&mut self, label: &str, end: SpinEnd) -> Result<()> {
        self.console.spin(label, end)
    }

    pub fn input(&mut self, prompt: TextPrompt) -> Result<String> {
        self.console.input(&prompt)
    }

    pub fn ask(&mut self, message: &str) -> Result<String> {
        self.console.input(&TextPrompt::new(message))
    }

    pub fn select<S: Into<String>>(
        &mut self,
        message: &str,
        choices: impl IntoIterator<Item = S>,
    ) -> Result<usize> {
        self.console.select(&SelectPrompt::new(message, choices))
    }

    pub fn multi_select<S: Into<String>>(
        &mut self,
        message: &str,
        choices: impl IntoIterator<Item = S>,
    ) -> Result<Vec<usize>> {
        self.console.multi_select(&SelectPrompt::new(message, choices))
    }

    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.console.confirm(message, default)
    }
}

/// One scripted challenge unit
pub trait Mission {
    fn title(&self) -> &'static str;

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport>;
}

/// An ordered list of missions plus the rules around it
pub struct Campaign {
    pub kind: CampaignKind,
    pub missions: Vec<Box<dyn Mission>>,
    /// Paid out once, on the transition into victory
    pub victory_bonus: Rewards,
    /// Ask "ready?" before every mission
    pub confirm_each_mission: bool,
}

impl Campaign {
    pub fn for_kind(kind: CampaignKind) -> Self {
        match kind {
            CampaignKind::Classic => classic::campaign(),
            CampaignKind::Nexus => nexus::campaign(),
        }
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.missions.iter().map(|m| m.title()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_only_pays_on_pass() {
        let rewards = Rewards::new().score(100);
        assert_eq!(MissionReport::check(true, rewards.clone()).rewards.score, 100);
        let failed = MissionReport::check(false, rewards);
        assert!(!failed.passed);
        assert!(failed.rewards.is_empty());
    }

    #[test]
    fn test_campaign_shapes() {
        let classic = Campaign::for_kind(CampaignKind::Classic);
        assert_eq!(classic.len(), 5);
        assert!(!classic.confirm_each_mission);

        let nexus = Campaign::for_kind(CampaignKind::Nexus);
        assert_eq!(nexus.len(), 4);
        assert!(nexus.confirm_each_mission);
        assert_eq!(nexus.victory_bonus.score, 1000);

        for kind in [CampaignKind::Classic, CampaignKind::Nexus] {
            assert_eq!(Campaign::for_kind(kind).len(), kind.mission_count());
        }
    }
}
