//! Everything around a run: welcome, player setup and the post-run menu

use super::console::{Banner, Console, GameMessage, SelectPrompt, TextPrompt};
use super::mission::Campaign;
use super::sequencer::RunState;
use super::{show_stats, Game};
use crate::config::Config;
use crate::data::*;
use crate::tui::logo;
use crate::{Result, VERSION};
use tracing::info;

pub const NEXT_MOVES: [&str; 4] = [
    "🆕 Start a new hacking career",
    "🔄 Continue from last save",
    "📊 View achievements and stats",
    "🚪 Exit to the real world",
];

fn codename(input: &str) -> std::result::Result<(), &'static str> {
    if input.chars().count() >= 3 {
        Ok(())
    } else {
        Err("Codename must be at least 3 characters")
    }
}

/// Play until the player exits.
pub fn run(config: &Config, console: &mut dyn Console) -> Result<()> {
    let kind = match config.campaign {
        Some(kind) => kind,
        None => choose_campaign(console)?,
    };
    welcome(console, kind)?;

    let store = ProfileStore::new(config.save_path(kind));
    let saved = store.load_best_effort().filter(|p| p.campaign == kind);
    let resumed = match saved {
        Some(profile) => {
            let question = format!("Welcome back, {}! Continue your previous session?", profile.name);
            if console.confirm(&question, true)? {
                console.say(GameMessage::system(format!(
                    "Profile loaded. Welcome back, {}!",
                    profile.name
                )));
                Some(resume(profile))
            } else {
                None
            }
        }
        None => None,
    };

    let fresh = resumed.is_none();
    let profile = match resumed {
        Some(profile) => profile,
        None => setup(kind, console)?,
    };

    let mut game = Game::new(Campaign::for_kind(kind), profile, store, config.rng());
    if fresh {
        game.persist(console);
    }
    greet(console, game.profile());

    loop {
        let state = game.play(console)?;
        finale(console, &game, state)?;

        if !next_move(console, &mut game)? {
            break;
        }
    }

    console.say(GameMessage::system("🌐 Disconnecting..."));
    console.say(GameMessage::info(
        "Remember: Real hacking is about curiosity, learning, and protection.",
    ));
    Ok(())
}

fn choose_campaign(console: &mut dyn Console) -> Result<CampaignKind> {
    let kinds = [CampaignKind::Classic, CampaignKind::Nexus];
    let picked = console.select(&SelectPrompt::new(
        "Choose your game:",
        kinds.iter().map(|k| format!("{} - {}", k.title(), k.tagline())),
    ))?;
    Ok(kinds[picked])
}

fn welcome(console: &mut dyn Console, kind: CampaignKind) -> Result<()> {
    console.clear();
    let mut banner = Banner::new(format!("{} v{}", kind.title(), VERSION), Tone::System)
        .art(logo(kind))
        .line(kind.tagline())
        .line("");
    banner = match kind {
        CampaignKind::Classic => banner
            .line("Rules:")
            .line("• Complete 5 hacking challenges")
            .line("• You have 3 lives")
            .line("• Each level gets progressively harder")
            .line("• Wrong answers cost you a life")
            .line("• Fail all lives = GAME OVER"),
        CampaignKind::Nexus => banner
            .line("「 Welcome to the Underground, Hacker 」")
            .line("")
            .line("⚠  WARNING: This is a simulation for educational purposes only")
            .line("Real hacking is illegal and unethical. Use knowledge responsibly."),
    };
    console.banner(&banner)?;

    if kind == CampaignKind::Nexus {
        console.type_out(GameMessage::system("Initializing secure connection..."))?;
        console.type_out(GameMessage::system("Connection established. Welcome to the Nexus."))?;
    }
    Ok(())
}

/// Continuing a burnt-out save does not go straight to game over: lives are
/// refilled to the difficulty's budget and play restarts at the saved level.
fn resume(profile: Profile) -> Profile {
    if profile.is_out_of_lives() {
        info!(player = %profile.name, level = profile.level, "refilling lives on resume");
        profile.refill_lives()
    } else {
        profile
    }
}

/// Ask for a new profile
pub fn setup(kind: CampaignKind, console: &mut dyn Console) -> Result<Profile> {
    let profile = match kind {
        CampaignKind::Classic => {
            let alias = console.input(
                &TextPrompt::new("Enter your hacker alias:").default_value("Anonymous"),
            )?;
            Profile::new(&alias, kind, Difficulty::Normal, None)
        }
        CampaignKind::Nexus => {
            let name = console.input(
                &TextPrompt::new("Enter your hacker codename:").validate(codename),
            )?;
            let difficulty = Difficulty::ALL[console.select(&SelectPrompt::new(
                "Select difficulty level:",
                Difficulty::ALL.iter().map(|d| d.label()),
            ))?];
            let background = Background::ALL[console.select(&SelectPrompt::new(
                "Choose your background:",
                Background::ALL.iter().map(|b| b.label()),
            ))?];
            Profile::new(&name, kind, difficulty, Some(background))
        }
    };
    info!(
        player = %profile.name,
        id = %profile.id.short(),
        difficulty = %profile.difficulty,
        "new profile"
    );
    Ok(profile)
}

fn greet(console: &mut dyn Console, profile: &Profile) {
    match profile.campaign {
        CampaignKind::Classic => console.say(GameMessage::success(format!(
            "Welcome, {}! Let's begin your hacking journey...",
            profile.name
        ))),
        CampaignKind::Nexus => {
            console.say(GameMessage::system(format!(
                "Welcome to the underground, {}...",
                profile.name
            )));
            console.say(GameMessage::system("Your journey into the digital shadows begins now."));
        }
    }
}

/// Victory or defeat card
fn finale(console: &mut dyn Console, game: &Game, state: RunState) -> Result<()> {
    let profile = game.profile();
    let banner = match (profile.campaign, state) {
        (CampaignKind::Classic, RunState::Victorious) => Banner::new("MISSION COMPLETE!", Tone::Success)
            .line("CONGRATULATIONS!")
            .line("You are now a CYBER LEGEND!")
            .line("")
            .line(format!("Hacker: {}", profile.name))
            .line(format!("Final Score: {}", profile.score))
            .line("Status: ELITE HACKER"),
        (CampaignKind::Classic, _) => Banner::new("GAME OVER", Tone::Failure)
            .line("💀 MISSION FAILED!")
            .line("You have been traced and captured...")
            .line("")
            .line(format!("Hacker: {}", profile.name))
            .line(format!("Final Score: {}", profile.score))
            .line("Status: CAPTURED"),
        (CampaignKind::Nexus, RunState::Victorious) => Banner::new("NEXUS BREACHED", Tone::Success)
            .line("🏆 LEGENDARY HACKER 🏆")
            .line("You have achieved the impossible...")
            .line("The Nexus has been breached. You are now part of hacking legend and folklore.")
            .line("")
            .line(format!("Legendary Hacker: {}", profile.name))
            .line(format!("Final Score: {}", profile.score))
            .line(format!("Reputation: {} (LEGENDARY)", profile.reputation))
            .line(format!("Tools Mastered: {}", profile.tools.len()))
            .line(format!("Achievements: {}", profile.achievements.len()))
            .line("")
            .line("⚠  With great power comes great responsibility."),
        (CampaignKind::Nexus, _) => Banner::new("TRACED", Tone::Failure)
            .line("🚨 GAME OVER - YOU'VE BEEN TRACED 🚨")
            .line("Your digital footprints led authorities right to you...")
            .line("")
            .line(format!("Final Score: {}", profile.score))
            .line(format!("Reputation: {}", profile.reputation))
            .line(format!("Achievements Unlocked: {}", profile.achievements.len())),
    };
    console.banner(&banner)
}

/// Post-run menu. `false` means exit.
fn next_move(console: &mut dyn Console, game: &mut Game) -> Result<bool> {
    loop {
        let picked = console.select(&SelectPrompt::new("What's your next move?", NEXT_MOVES))?;
        match picked {
            0 => {
                let profile = setup(game.campaign().kind, console)?;
                game.replace_profile(profile);
                game.persist(console);
                greet(console, game.profile());
                return Ok(true);
            }
            1 => {
                let kind = game.campaign().kind;
                match game.store().load_best_effort().filter(|p| p.campaign == kind) {
                    Some(profile) => {
                        console.say(GameMessage::system(format!(
                            "Profile loaded. Welcome back, {}!",
                            profile.name
                        )));
                        game.replace_profile(resume(profile));
                        return Ok(true);
                    }
                    None => console.say(GameMessage::warning("No saved session found.")),
                }
            }
            2 => show_stats(console, game.profile(), game.campaign().len())?,
            _ => return Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scripted::{choice, no, text, yes, Answer, ScriptedConsole};
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// The directory must outlive the test body
    fn config(kind: Option<CampaignKind>) -> (TempDir, Config, PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("profile.json");
        let config = Config {
            campaign: kind,
            save: Some(path.clone()),
            seed: Some(1),
            pace: 0.0,
            ..Config::default()
        };
        (dir, config, path)
    }

    fn classic_win() -> Vec<Answer> {
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
    fn test_codename_needs_three_characters() {
        let (_dir, config, path) = config(Some(CampaignKind::Nexus));
        let mut console = ScriptedConsole::new([
            text("ab"),
            text("ghost"),
            choice(3),
            choice(0),
            // Elite has one life: fail mission 1 and leave
            yes(),
            choice(0),
            choice(3),
        ]);
        run(&config, &mut console).unwrap();

        assert_eq!(console.rejected, vec!["Codename must be at least 3 characters"]);
        assert!(console.banners.iter().any(|b| b == "TRACED"));
        let saved = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(saved.name, "ghost");
        assert_eq!(saved.difficulty, Difficulty::Elite);
        // Elite gets no starter tools, so the port scanner route failed
        assert!(saved.tools.is_empty());
        assert_eq!(saved.lives, 0);
    }

    #[test]
    fn test_classic_session_with_campaign_menu() {
        let (_dir, config, _path) = config(None);
        let mut answers = vec![choice(0), text("")];
        answers.extend(classic_win());
        answers.extend([choice(2), choice(3)]);
        let mut console = ScriptedConsole::new(answers);

        run(&config, &mut console).unwrap();
        assert!(console.saw("Welcome, Anonymous!"));
        assert!(console.banners.iter().any(|b| b == "MISSION COMPLETE!"));
        assert!(console.banners.iter().any(|b| b == "HACKER PROFILE"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_continuing_burnt_out_save_refills_lives_instead_of_game_over() {
        let (_dir, config, path) = config(Some(CampaignKind::Classic));
        let burnt = Profile {
            level: 3,
            lives: 0,
            score: 250,
            ..Profile::new("neo", CampaignKind::Classic, Difficulty::Normal, None)
        };
        ProfileStore::new(&path).save(&burnt).unwrap();

        // Resume at level 3, win the remaining three levels, exit
        let mut console = ScriptedConsole::new([
            yes(),
            text("OR 1=1"),
            text("helloworld"),
            text("hi"),
            text("255"),
            text("32"),
            choice(3),
        ]);
        run(&config, &mut console).unwrap();

        let saved = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(saved.name, "neo");
        assert_eq!(saved.lives, 3);
        assert_eq!(saved.score, 250 + 200 + 250 + 500);
        assert_eq!(saved.level, 6);
    }

    #[test]
    fn test_level_zero_save_is_not_offered() {
        let (_dir, config, path) = config(Some(CampaignKind::Classic));
        std::fs::write(&path, r#"{"name": "neo", "campaign": "classic", "level": 0, "lives": 3}"#).unwrap();

        let mut answers = vec![text("trinity")];
        answers.extend(classic_win());
        answers.push(choice(3));
        let mut console = ScriptedConsole::new(answers);
        run(&config, &mut console).unwrap();

        assert!(!console.prompts.iter().any(|p| p.contains("Continue your previous session?")));
        let saved = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(saved.name, "trinity");
        assert_eq!(saved.mission_index(), CampaignKind::Classic.mission_count());

        // A finished save resumes as won without paying the bonus again
        let mut console = ScriptedConsole::new([yes(), choice(3)]);
        run(&config, &mut console).unwrap();
        let again = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(again.score, saved.score);
        assert_eq!(again.level, saved.level);
    }

    #[test]
    fn test_declining_continue_starts_fresh() {
        let (_dir, config, path) = config(Some(CampaignKind::Classic));
        let old = Profile {
            score: 999,
            ..Profile::new("old", CampaignKind::Classic, Difficulty::Normal, None)
        };
        ProfileStore::new(&path).save(&old).unwrap();

        let mut answers = vec![no(), text("new")];
        answers.extend([text("x"), text("y"), text("z")]);
        answers.push(choice(3));
        let mut console = ScriptedConsole::new(answers);
        run(&config, &mut console).unwrap();

        let saved = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(saved.name, "new");
        assert_eq!(saved.score, 0);
        assert!(console.banners.iter().any(|b| b == "GAME OVER"));
    }

    #[test]
    fn test_new_career_from_the_menu() {
        let (_dir, config, path) = config(Some(CampaignKind::Classic));
        let mut answers = vec![text("first"), text("x"), text("y"), text("z")];
        answers.extend([choice(0), text("second")]);
        answers.extend(classic_win());
        answers.push(choice(3));
        let mut console = ScriptedConsole::new(answers);
        run(&config, &mut console).unwrap();

        let saved = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(saved.name, "second");
        assert!(saved.has_achievement(Achievement::CyberLegend));
    }

    #[test]
    fn test_quitting_mid_prompt_surfaces_as_quit() {
        let (_dir, config, _path) = config(Some(CampaignKind::Classic));
        let mut console = ScriptedConsole::new([text("neo")]);
        let err = run(&config, &mut console).unwrap_err();
        assert!(crate::GameError::is_quit(&err));
    }
}
