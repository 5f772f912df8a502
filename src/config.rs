//! Command line options

use crate::data::CampaignKind;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "nexus-hack")]
#[command(version, about = "Terminal hacking-quiz campaigns", long_about = None)]
pub struct Cli {
    /// Skip the campaign menu
    #[arg(long, value_enum)]
    pub campaign: Option<CampaignKind>,

    /// Profile file (defaults to one per campaign in the working directory)
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Seed for every dice roll, for repeatable runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// No typewriter, spinner or banner delays
    #[arg(long)]
    pub fast: bool,

    #[arg(long, default_value = "nexus_hack.log")]
    pub log_file: PathBuf,
}

/// Resolved settings
#[derive(Debug, Clone)]
pub struct Config {
    pub campaign: Option<CampaignKind>,
    pub save: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Multiplier on every cosmetic delay; 0 disables them
    pub pace: f64,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            campaign: None,
            save: None,
            seed: None,
            pace: 1.0,
            log_file: PathBuf::from("nexus_hack.log"),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            campaign: cli.campaign,
            save: cli.save,
            seed: cli.seed,
            pace: if cli.fast { 0.0 } else { 1.0 },
            log_file: cli.log_file,
        }
    }
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    pub fn save_path(&self, campaign: CampaignKind) -> PathBuf {
        self.save
            .clone()
            .unwrap_or_else(|| PathBuf::from(campaign.save_file()))
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Scale a cosmetic delay by the pace
    pub fn delay(&self, millis: u64) -> Duration {
        Duration::from_millis(millis).mul_f64(self.pace.max(0.0))
    }
}
