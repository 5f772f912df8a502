//! Core game logic: missions, the sequencer and the run loop

pub mod challenges;
pub mod classic;
pub mod console;
pub mod mission;
pub mod nexus;
pub mod sequencer;
pub mod session;

#[cfg(test)]
pub mod scripted;

pub use console::{Banner, Console, GameMessage, SelectPrompt, SpinEnd, StatusSnapshot, TextPrompt};
pub use mission::{Campaign, Mission, MissionContext, MissionReport};
pub use sequencer::{RunState, Sequencer, Transition};

use crate::data::*;
use crate::Result;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// One campaign being played by one profile
pub struct Game {
    campaign: Campaign,
    profile: Profile,
    store: ProfileStore,
    rng: ChaCha8Rng,
}

impl Game {
    pub fn new(campaign: Campaign, profile: Profile, store: ProfileStore, rng: ChaCha8Rng) -> Self {
        Self {
            campaign,
            profile,
            store,
            rng,
        }
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Swap in another profile (new career or a reloaded save)
    pub fn replace_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot::new(&self.profile, self.campaign.len())
    }

    /// Save, reporting failure on the console instead of failing the run.
    ///
    /// Returns whether the profile reached disk.
    pub fn persist(&self, console: &mut dyn Console) -> bool {
        match self.store.save(&self.profile) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.store.path().display(), error = %e, "could not save profile");
                console.say(GameMessage::warning(format!(
                    "Progress could not be saved ({:#}). Playing on without a save.",
                    e
                )));
                false
            }
        }
    }

    /// Play missions until the run is won or lost.
    pub fn play(&mut self, console: &mut dyn Console) -> Result<RunState> {
        let mut sequencer = Sequencer::resume(&self.profile, self.campaign.len());
        info!(
            campaign = ?self.campaign.kind,
            player = %self.profile.name,
            state = ?sequencer.state(),
            "run started"
        );

        while let RunState::AwaitingMission(index) = sequencer.state() {
            console.status(self.status());

            if self.campaign.confirm_each_mission {
                let ready = console.confirm(&format!("Ready to begin Mission {}?", index + 1), true)?;
                if !ready {
                    show_inventory(console, &self.profile);
                    continue;
                }
            }

            let mission = &self.campaign.missions[index];
            info!(index, mission = mission.title(), "mission started");
            let report = {
                let mut ctx = MissionContext::new(&self.profile, console, &mut self.rng);
                mission.play(&mut ctx)?
            };
            info!(index, passed = report.passed, score = report.rewards.score, "mission finished");

            let profile = std::mem::take(&mut self.profile);
            let (profile, transition) =
                sequencer.record(profile, &report, &self.campaign.victory_bonus)?;
            self.profile = profile;
            debug!(?transition, lives = self.profile.lives, "transition");

            self.narrate(console, transition)?;
            if transition.is_checkpoint() {
                self.persist(console);
            }
        }

        console.status(self.status());
        info!(state = ?sequencer.state(), score = self.profile.score, "run over");
        Ok(sequencer.state())
    }

    fn narrate(&self, console: &mut dyn Console, transition: Transition) -> Result<()> {
        let unit = match self.campaign.kind {
            CampaignKind::Classic => "Level",
            CampaignKind::Nexus => "Mission",
        };
        match transition {
            Transition::Advanced { from, .. } => {
                console.say(GameMessage::success(format!("{} {} completed successfully!", unit, from + 1)));
                console.spin(
                    "Preparing next challenge...",
                    SpinEnd::Success(format!("{} {} available", unit, from + 2)),
                )?;
            }
            Transition::Retry { index, lives_left } => {
                console.say(GameMessage::failure(format!("{} {} failed!", unit, index + 1)));
                console.say(GameMessage::warning(format!(
                    "Lives remaining: {}. Retrying {}...",
                    lives_left,
                    unit.to_lowercase()
                )));
            }
            Transition::Defeated { index } => {
                console.say(GameMessage::failure(format!("{} {} failed!", unit, index + 1)));
                console.say(GameMessage::failure("No lives left. You've been traced."));
            }
            Transition::Victory => {
                console.say(GameMessage::success(format!("Final {} complete!", unit.to_lowercase())));
            }
        }
        Ok(())
    }
}

/// List the player's tools, or say there are none
pub fn show_inventory(console: &mut dyn Console, profile: &Profile) {
    let tools = profile.sorted_tools();
    if tools.is_empty() {
        console.say(GameMessage::failure(
            "No tools available. Complete missions to acquire tools.",
        ));
        return;
    }
    console.say(GameMessage::intel("🛠  YOUR TOOLKIT:"));
    for tool in tools {
        console.say(GameMessage::info(format!(
            "  {} {} - {}",
            tool.icon(),
            tool.name(),
            tool.description()
        )));
    }
}

/// Full profile card
pub fn show_stats(console: &mut dyn Console, profile: &Profile, mission_count: usize) -> Result<()> {
    let mut banner = Banner::new("HACKER PROFILE", Tone::Intel)
        .line(format!("Codename: {}", profile.name));
    if let Some(background) = profile.background {
        banner = banner.line(format!("Background: {}", background));
    }
    if profile.campaign == CampaignKind::Nexus {
        banner = banner.line(format!("Difficulty: {}", profile.difficulty));
    }
    banner = banner
        .line("")
        .line(format!("Score: {}", profile.score))
        .line(format!("Reputation: {}", profile.reputation))
        .line(format!(
            "Current Level: {}/{}",
            profile.level.min(mission_count as u32),
            mission_count
        ))
        .line(format!("Lives Remaining: {}", profile.lives))
        .line("")
        .line("TOOLS ACQUIRED:");
    for tool in profile.sorted_tools() {
        banner = banner.line(format!("  • {}", tool.name()));
    }
    banner = banner.line("").line("ACHIEVEMENTS UNLOCKED:");
    for achievement in profile.sorted_achievements() {
        banner = banner.line(format!("  {} {}", achievement.icon(), achievement.name()));
    }
    console.banner(&banner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scripted::{choice, no, text, yes, Answer, ScriptedConsole};
    use rand::SeedableRng;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn temp_save() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("profile.json");
        (dir, path)
    }

    fn classic_game(path: PathBuf) -> Game {
        let profile = Profile::new("tester", CampaignKind::Classic, Difficulty::Normal, None);
        Game::new(
            Campaign::for_kind(CampaignKind::Classic),
            profile,
            ProfileStore::new(path),
            ChaCha8Rng::seed_from_u64(42),
        )
    }

    fn all_correct() -> Vec<Answer> {
        vec![
            text("apple"),
            choice(1),
            text(""),
            text("hello world"),
            text("hi"),
            text("255"),
            text("32"),
        ]
    }

    #[test]
    fn test_all_correct_classic_run_is_victorious() {
        let (_dir, path) = temp_save();
        let mut game = classic_game(path.clone());
        let mut console = ScriptedConsole::new(all_correct());

        let state = game.play(&mut console).unwrap();
        assert_eq!(state, RunState::Victorious);
        assert_eq!(game.profile().lives, 3);
        assert_eq!(game.profile().mission_index(), 5);
        assert_eq!(game.profile().score, 1200);
        assert!(game.profile().has_achievement(Achievement::CyberLegend));

        // The last checkpoint is on disk
        let saved = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(&saved, game.profile());
    }

    #[test]
    fn test_three_wrong_answers_end_the_run() {
        let (_dir, path) = temp_save();
        let mut game = classic_game(path.clone());
        let mut console = ScriptedConsole::new([text("banana"), text("kiwi"), text("mango")]);

        let state = game.play(&mut console).unwrap();
        assert_eq!(state, RunState::Defeated);
        assert_eq!(game.profile().lives, 0);
        assert_eq!(game.profile().mission_index(), 0);
        assert_eq!(console.count("Level 1 failed!"), 3);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_unwritable_save_does_not_stop_the_run() {
        // A regular file as the parent directory makes every save fail
        let (_dir, blocker) = temp_save();
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut game = classic_game(blocker.join("profile.json"));
        let mut console = ScriptedConsole::new(all_correct());

        let state = game.play(&mut console).unwrap();
        assert_eq!(state, RunState::Victorious);
        assert!(console
            .transcript
            .iter()
            .any(|m| m.tone == Tone::Warning && m.text.contains("could not be saved")));
    }

    #[test]
    fn test_declining_a_nexus_mission_reoffers_it() {
        let (_dir, path) = temp_save();
        let profile = Profile::new("ghost", CampaignKind::Nexus, Difficulty::Elite, None);
        let mut game = Game::new(
            Campaign::for_kind(CampaignKind::Nexus),
            profile,
            ProfileStore::new(path.clone()),
            ChaCha8Rng::seed_from_u64(3),
        );
        // Decline once, then walk into a tool-gated route with no tools
        let mut console = ScriptedConsole::new([no(), yes(), choice(0)]);

        let state = game.play(&mut console).unwrap();
        assert_eq!(state, RunState::Defeated);
        assert!(console.saw("No tools available"));
        assert_eq!(
            console
                .prompts
                .iter()
                .filter(|p| p.as_str() == "Ready to begin Mission 1?")
                .count(),
            2
        );
    }

    #[test]
    fn test_finished_profile_is_not_paid_twice() {
        let (_dir, path) = temp_save();
        let mut game = classic_game(path.clone());
        let mut console = ScriptedConsole::new(all_correct());
        game.play(&mut console).unwrap();
        let score = game.profile().score;

        let mut console = ScriptedConsole::new([]);
        assert_eq!(game.play(&mut console).unwrap(), RunState::Victorious);
        assert_eq!(game.profile().score, score);
    }

    #[test]
    fn test_status_is_pushed_before_each_mission() {
        let (_dir, path) = temp_save();
        let mut game = classic_game(path.clone());
        let mut console = ScriptedConsole::new(all_correct());
        game.play(&mut console).unwrap();

        // One per mission plus the final one
        assert_eq!(console.statuses.len(), 6);
        assert_eq!(console.statuses[0].level, 1);
        assert_eq!(console.statuses.last().map(|s| s.level), Some(5));
    }
}
