//! Player profile and progression

use super::Id;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which game the profile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    /// Cyber Hack: five levels, three lives
    Classic,
    /// Nexus Hack: four missions, difficulty and background
    Nexus,
}

impl CampaignKind {
    pub fn title(&self) -> &'static str {
        match self {
            CampaignKind::Classic => "CYBER HACK",
            CampaignKind::Nexus => "NEXUS HACK",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            CampaignKind::Classic => "A Terminal Hacking Simulation Game",
            CampaignKind::Nexus => "Advanced Cybersecurity Simulation",
        }
    }

    /// Default save file name
    pub fn save_file(&self) -> &'static str {
        match self {
            CampaignKind::Classic => "cyber_hack_profile.json",
            CampaignKind::Nexus => "hacker_profile.json",
        }
    }

    /// Missions in the campaign; a finished profile sits at level `count + 1`
    pub fn mission_count(&self) -> usize {
        match self {
            CampaignKind::Classic => 5,
            CampaignKind::Nexus => 4,
        }
    }

    pub fn starting_lives(&self, difficulty: Difficulty) -> u32 {
        match self {
            CampaignKind::Classic => 3,
            CampaignKind::Nexus => difficulty.lives(),
        }
    }
}

/// Tools the player can own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    PortScanner,
    PasswordList,
    FirewallBypass,
    PrivilegeEscalator,
    CryptoAnalyzer,
    NetworkMapper,
    SocialEngineer,
    ZeroDayExploit,
    SqlInjector,
    SteganographyKit,
    BufferOverflow,
    Keylogger,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::PortScanner => "Port Scanner",
            Tool::PasswordList => "Password Dictionary",
            Tool::FirewallBypass => "Firewall Bypass",
            Tool::PrivilegeEscalator => "Privilege Escalator",
            Tool::CryptoAnalyzer => "Crypto Analyzer",
            Tool::NetworkMapper => "Network Mapper",
            Tool::SocialEngineer => "Social Engineering Kit",
            Tool::ZeroDayExploit => "Zero-Day Exploit",
            Tool::SqlInjector => "SQL Injector",
            Tool::SteganographyKit => "Steganography Kit",
            Tool::BufferOverflow => "Buffer Overflow Kit",
            Tool::Keylogger => "Keylogger",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::PortScanner => "Discover open ports on target systems",
            Tool::PasswordList => "Common passwords for brute force attacks",
            Tool::FirewallBypass => "Circumvent basic firewall protections",
            Tool::PrivilegeEscalator => "Gain higher system privileges",
            Tool::CryptoAnalyzer => "Break encryption and analyze ciphers",
            Tool::NetworkMapper => "Map network topology and find targets",
            Tool::SocialEngineer => "Manipulate human psychology",
            Tool::ZeroDayExploit => "Unreported vulnerability exploits",
            Tool::SqlInjector => "Advanced database exploitation tool",
            Tool::SteganographyKit => "Hide and extract hidden messages",
            Tool::BufferOverflow => "Memory corruption exploits",
            Tool::Keylogger => "Capture keystrokes and credentials",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::PortScanner => "🔍",
            Tool::PasswordList => "📝",
            Tool::FirewallBypass => "🛡",
            Tool::PrivilegeEscalator => "⬆",
            Tool::CryptoAnalyzer => "🔐",
            Tool::NetworkMapper => "🗺",
            Tool::SocialEngineer => "🎭",
            Tool::ZeroDayExploit => "💥",
            Tool::SqlInjector => "💉",
            Tool::SteganographyKit => "🖼",
            Tool::BufferOverflow => "💾",
            Tool::Keylogger => "⌨",
        }
    }
}

/// Achievement IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    CorporateInfiltrator, // Nexus mission 1
    Cryptographer,        // Nexus mission 2
    NetworkDominator,     // Nexus mission 3
    NexusBreacher,        // Breach the Nexus core
    LegendaryHacker,      // Finish the Nexus campaign
    NexusChallenger,      // Fall at the Nexus core
    CyberLegend,          // Finish Cyber Hack
}

impl Achievement {
    pub fn name(&self) -> &'static str {
        match self {
            Achievement::CorporateInfiltrator => "Corporate Infiltrator",
            Achievement::Cryptographer => "Cryptographer",
            Achievement::NetworkDominator => "Network Dominator",
            Achievement::NexusBreacher => "Nexus Breacher",
            Achievement::LegendaryHacker => "Legendary Hacker",
            Achievement::NexusChallenger => "Nexus Challenger",
            Achievement::CyberLegend => "Cyber Legend",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::CorporateInfiltrator => "Break into the MegaCorp employee database",
            Achievement::Cryptographer => "Crack the cipher vault",
            Achievement::NetworkDominator => "Hold persistent access across critical infrastructure",
            Achievement::NexusBreacher => "Breach the Nexus core",
            Achievement::LegendaryHacker => "Complete every Nexus mission",
            Achievement::NexusChallenger => "Stand against the Nexus and live to tell it",
            Achievement::CyberLegend => "Complete all five Cyber Hack levels",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Achievement::CorporateInfiltrator => "🏢",
            Achievement::Cryptographer => "🔐",
            Achievement::NetworkDominator => "🌐",
            Achievement::NexusBreacher => "💀",
            Achievement::LegendaryHacker => "🏆",
            Achievement::NexusChallenger => "⚔",
            Achievement::CyberLegend => "👑",
        }
    }
}

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Elite,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Elite,
    ];

    pub fn lives(&self) -> u32 {
        match self {
            Difficulty::Easy => 7,
            Difficulty::Normal => 5,
            Difficulty::Hard => 3,
            Difficulty::Elite => 1,
        }
    }

    /// How many background tools you start with
    pub fn starter_tools(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 2,
            Difficulty::Hard => 1,
            Difficulty::Elite => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢 Script Kiddie (Easy)",
            Difficulty::Normal => "🟡 White Hat (Normal)",
            Difficulty::Hard => "🔴 Black Hat (Hard)",
            Difficulty::Elite => "💀 Elite (Nightmare)",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Elite => write!(f, "elite"),
        }
    }
}

/// Player backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    Student,
    Corporate,
    Government,
    Underground,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::Student,
        Background::Corporate,
        Background::Government,
        Background::Underground,
    ];

    pub fn tools(&self) -> [Tool; 2] {
        match self {
            Background::Student => [Tool::PortScanner, Tool::PasswordList],
            Background::Corporate => [Tool::FirewallBypass, Tool::PrivilegeEscalator],
            Background::Government => [Tool::CryptoAnalyzer, Tool::NetworkMapper],
            Background::Underground => [Tool::SocialEngineer, Tool::ZeroDayExploit],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Background::Student => "🎓 Computer Science Student",
            Background::Corporate => "💼 Corporate IT Security",
            Background::Government => "🕵 Government Agent",
            Background::Underground => "🏴 Underground Hacker",
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Background::Student => write!(f, "student"),
            Background::Corporate => write!(f, "corporate"),
            Background::Government => write!(f, "government"),
            Background::Underground => write!(f, "underground"),
        }
    }
}

/// What a mission hands out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewards {
    pub score: u32,
    pub reputation: i32,
    pub tools: Vec<Tool>,
    pub achievements: Vec<Achievement>,
}

impl Rewards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(mut self, points: u32) -> Self {
        self.score += points;
        self
    }

    pub fn reputation(mut self, amount: i32) -> Self {
        self.reputation += amount;
        self
    }

    pub fn tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn achievement(mut self, achievement: Achievement) -> Self {
        self.achievements.push(achievement);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.score == 0
            && self.reputation == 0
            && self.tools.is_empty()
            && self.achievements.is_empty()
    }
}

/// The persisted player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: Id,
    pub name: String,
    pub campaign: CampaignKind,
    pub difficulty: Difficulty,
    pub background: Option<Background>,

    pub score: u32,
    pub level: u32, // 1-based; one past the last mission means done
    pub lives: u32,
    pub reputation: i32,

    pub tools: HashSet<Tool>,
    pub achievements: HashSet<Achievement>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("Anonymous", CampaignKind::Classic, Difficulty::Normal, None)
    }
}

impl Profile {
    pub fn new(
        name: &str,
        campaign: CampaignKind,
        difficulty: Difficulty,
        background: Option<Background>,
    ) -> Self {
        let tools = background
            .map(|b| {
                b.tools()
                    .into_iter()
                    .take(difficulty.starter_tools())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: Id::new(),
            name: name.to_string(),
            campaign,
            difficulty,
            background,
            score: 0,
            level: 1,
            lives: campaign.starting_lives(difficulty),
            reputation: 0,
            tools,
            achievements: HashSet::new(),
        }
    }

    /// Index of the mission this profile is up to
    pub fn mission_index(&self) -> usize {
        self.level.saturating_sub(1) as usize
    }

    pub fn has_tool(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    pub fn with_rewards(mut self, rewards: &Rewards) -> Self {
        self.score = self.score.saturating_add(rewards.score);
        self.reputation = self.reputation.saturating_add(rewards.reputation);
        self.tools.extend(rewards.tools.iter().copied());
        self.achievements.extend(rewards.achievements.iter().copied());
        self
    }

    pub fn lose_life(mut self) -> Self {
        self.lives = self.lives.saturating_sub(1);
        self
    }

    pub fn advance_level(mut self) -> Self {
        self.level += 1;
        self
    }

    /// Back to the starting lives budget, progress untouched
    pub fn refill_lives(mut self) -> Self {
        self.lives = self.campaign.starting_lives(self.difficulty);
        self
    }

    /// Tools sorted for stable display
    pub fn sorted_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self.tools.iter().copied().collect();
        tools.sort();
        tools
    }

    pub fn sorted_achievements(&self) -> Vec<Achievement> {
        let mut achievements: Vec<Achievement> = self.achievements.iter().copied().collect();
        achievements.sort();
        achievements
    }
}
