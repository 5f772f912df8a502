//! JSON profile persistence
//!
//! One file per campaign. The profile fields sit flat at the top level next
//! to a format version and the save time.

use super::Profile;
use crate::{GameError, Result};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bumped when the on-disk layout changes
pub const SAVE_VERSION: u32 = 1;

#[derive(Serialize)]
struct SaveFileOut<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(flatten)]
    profile: &'a Profile,
}

#[derive(Deserialize)]
struct SaveFileIn {
    #[serde(default)]
    version: u32,
    #[serde(flatten)]
    profile: Profile,
}

/// Reads and writes a profile at a fixed path
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// `Ok(None)` when there is no save yet.
    pub fn load(&self) -> Result<Option<Profile>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };

        let save: SaveFileIn = serde_json::from_str(&data)
            .map_err(|e| GameError::CorruptedSave(format!("{}: {}", self.path.display(), e)))?;

        if save.version > SAVE_VERSION {
            return Err(GameError::CorruptedSave(format!(
                "{}: written by a newer version ({})",
                self.path.display(),
                save.version
            ))
            .into());
        }

        self.checked(save.profile).map(Some)
    }

    /// Level 0 is unplayable; anything past the end means "finished".
    fn checked(&self, mut profile: Profile) -> Result<Profile> {
        if profile.level == 0 {
            return Err(GameError::CorruptedSave(format!("{}: level 0", self.path.display())).into());
        }
        let finished = profile.campaign.mission_count() as u32 + 1;
        if profile.level > finished {
            tracing::warn!(
                path = %self.path.display(),
                level = profile.level,
                "level past the last mission, clamping"
            );
            profile.level = finished;
        }
        Ok(profile)
    }

    /// Load, treating anything unreadable as "no save".
    pub fn load_best_effort(&self) -> Option<Profile> {
        match self.load() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable save");
                None
            }
        }
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        let out = SaveFileOut {
            version: SAVE_VERSION,
            saved_at: Utc::now(),
            profile,
        };
        let json = serde_json::to_string_pretty(&out).context("encoding profile")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        // Write beside the target, then rename over it
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), level = profile.level, "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Achievement, Background, CampaignKind, Difficulty, Rewards, Tool};
    use tempfile::TempDir;

    fn scratch() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("profile.json");
        (dir, path)
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let (_dir, path) = scratch();
        let store = ProfileStore::new(path);
        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());
        assert!(store.load_best_effort().is_none());
    }

    #[test]
    fn test_round_trip_keeps_every_field() {
        let (_dir, path) = scratch();
        let store = ProfileStore::new(&path);

        let profile = Profile::new(
            "zero_cool",
            CampaignKind::Nexus,
            Difficulty::Easy,
            Some(Background::Student),
        )
        .with_rewards(
            &Rewards::new()
                .score(500)
                .reputation(25)
                .tool(Tool::NetworkMapper)
                .tool(Tool::PrivilegeEscalator)
                .achievement(Achievement::NetworkDominator)
                .achievement(Achievement::Cryptographer),
        )
        .advance_level()
        .lose_life();

        store.save(&profile).unwrap();
        assert!(store.exists());
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_sets_are_written_as_arrays() {
        let (_dir, path) = scratch();
        let store = ProfileStore::new(&path);
        let profile = Profile::default().with_rewards(&Rewards::new().tool(Tool::Keylogger));
        store.save(&profile).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["tools"], serde_json::json!(["keylogger"]));
        assert_eq!(raw["achievements"], serde_json::json!([]));
        assert_eq!(raw["version"], serde_json::json!(SAVE_VERSION));
        assert_eq!(raw["name"], serde_json::json!("Anonymous"));
    }

    #[test]
    fn test_corrupt_file_is_reported_and_ignored() {
        let (_dir, path) = scratch();
        fs::write(&path, "{ not json").unwrap();
        let store = ProfileStore::new(&path);

        let err = store.load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::CorruptedSave(_))
        ));
        assert!(store.load_best_effort().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (_dir, path) = scratch();
        fs::write(&path, r#"{"name": "acid_burn", "score": 300, "tools": ["sql_injector"]}"#).unwrap();
        let store = ProfileStore::new(&path);

        let profile = store.load().unwrap().unwrap();
        assert_eq!(profile.name, "acid_burn");
        assert_eq!(profile.score, 300);
        assert_eq!(profile.level, 1);
        assert!(profile.has_tool(Tool::SqlInjector));
    }

    #[test]
    fn test_level_zero_is_corrupt() {
        let (_dir, path) = scratch();
        fs::write(&path, r#"{"name": "neo", "campaign": "classic", "level": 0, "lives": 3}"#).unwrap();
        let store = ProfileStore::new(&path);

        let err = store.load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::CorruptedSave(_))
        ));
        assert!(store.load_best_effort().is_none());
    }

    #[test]
    fn test_level_past_the_end_is_clamped_to_finished() {
        let (_dir, path) = scratch();
        fs::write(&path, r#"{"name": "neo", "campaign": "nexus", "level": 42}"#).unwrap();

        let profile = ProfileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(profile.level, 5);
        assert_eq!(profile.mission_index(), CampaignKind::Nexus.mission_count());
    }

    #[test]
    fn test_save_into_unwritable_location_fails() {
        // A regular file cannot be a parent directory
        let (_dir, blocker) = scratch();
        fs::write(&blocker, "x").unwrap();
        let store = ProfileStore::new(blocker.join("profile.json"));

        assert!(store.save(&Profile::default()).is_err());
    }
}
