//! Cyber Hack: five levels, three lives, one right answer each

use super::challenges::{binary_to_text, caesar_decrypt, normalize, squash};
use super::console::{GameMessage, SpinEnd, TextPrompt};
use super::mission::{Campaign, Mission, MissionContext, MissionReport};
use crate::data::{Achievement, CampaignKind, Rewards, Tone};
use crate::Result;

pub const CAESAR_INTERCEPT: &str = "KHOOR ZRUOG";
pub const CAESAR_SHIFT: u8 = 3;
pub const MAINFRAME_BINARY: &str = "01001000 01101001";
pub const SSH_PORTS: [&str; 5] = ["21", "22", "23", "80", "443"];

pub fn campaign() -> Campaign {
    Campaign {
        kind: CampaignKind::Classic,
        missions: vec![
            Box::new(PasswordCrack),
            Box::new(NetworkInfiltration),
            Box::new(SystemAccess),
            Box::new(CryptoChallenge),
            Box::new(Mainframe),
        ],
        victory_bonus: Rewards::new().achievement(Achievement::CyberLegend),
        confirm_each_mission: false,
    }
}

fn header(ctx: &mut MissionContext<'_>, title: &str, target: &str) {
    ctx.say(GameMessage::new(Tone::Mission, title));
    ctx.say(GameMessage::info(format!("Target: {}", target)));
}

/// Spinner result for a pass/fail check
fn verdict(ctx: &mut MissionContext<'_>, passed: bool, working: &str, granted: &str, denied: &str) -> Result<()> {
    if passed {
        ctx.spin(working, SpinEnd::Success(granted.to_string()))
    } else {
        ctx.spin("Verifying...", SpinEnd::Failure(denied.to_string()))
    }
}

pub struct PasswordCrack;

impl Mission for PasswordCrack {
    fn title(&self) -> &'static str {
        "Password Cracking"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        header(ctx, "🔒 LEVEL 1: PASSWORD CRACKING", "Corporate Database");
        ctx.spin("Scanning for vulnerabilities...", SpinEnd::Success("Vulnerability found!".into()))?;

        ctx.say(GameMessage::new(Tone::Hint, "Password hint: Famous tech company founded in 1976"));
        ctx.say(GameMessage::new(Tone::Hint, "Clue: Think fruit..."));

        let password = ctx.ask("Enter the password:")?;
        let passed = normalize(&password) == "apple";

        verdict(ctx, passed, "Cracking password...", "ACCESS GRANTED!", "ACCESS DENIED!")?;
        Ok(MissionReport::check(passed, Rewards::new().score(100)))
    }
}

pub struct NetworkInfiltration;

impl Mission for NetworkInfiltration {
    fn title(&self) -> &'static str {
        "Network Infiltration"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        header(ctx, "🌐 LEVEL 2: NETWORK INFILTRATION", "Government Server");
        ctx.spin("Mapping network topology...", SpinEnd::Success("Network mapped successfully!".into()))?;

        ctx.say(GameMessage::intel("Which port is commonly used for SSH?"));
        let picked = ctx.select("Select the correct port:", SSH_PORTS)?;
        let passed = SSH_PORTS[picked] == "22";

        verdict(
            ctx,
            passed,
            "Establishing SSH connection...",
            "CONNECTION ESTABLISHED!",
            "INTRUSION DETECTED!",
        )?;
        Ok(MissionReport::check(passed, Rewards::new().score(150)))
    }
}

pub struct SystemAccess;

impl Mission for SystemAccess {
    fn title(&self) -> &'static str {
        "System Access"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        header(ctx, "💻 LEVEL 3: SYSTEM ACCESS", "Banking System");
        ctx.spin("Bypassing firewall...", SpinEnd::Success("Firewall bypassed!".into()))?;

        ctx.say(GameMessage::intel("SQL Injection Challenge:"));
        ctx.say(GameMessage::info(
            "Complete this SQL injection: SELECT * FROM users WHERE username = 'admin' ",
        ));

        let injection = ctx.input(
            TextPrompt::new("What should you add to bypass the password check?")
                .default_value("OR 1=1--"),
        )?;
        let passed = injection.contains("OR 1=1") || injection.contains("or 1=1");

        verdict(
            ctx,
            passed,
            "Executing SQL injection...",
            "ADMIN ACCESS GRANTED!",
            "INJECTION BLOCKED!",
        )?;
        Ok(MissionReport::check(passed, Rewards::new().score(200)))
    }
}

pub struct CryptoChallenge;

impl Mission for CryptoChallenge {
    fn title(&self) -> &'static str {
        "Cryptography"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        header(ctx, "🔐 LEVEL 4: CRYPTOGRAPHY", "Encrypted Communications");
        ctx.spin("Intercepting encrypted messages...", SpinEnd::Success("Message intercepted!".into()))?;

        ctx.say(GameMessage::intel("Caesar Cipher Challenge:"));
        ctx.say(GameMessage::info(format!(
            "Encrypted message: \"{}\" (shift of {})",
            CAESAR_INTERCEPT, CAESAR_SHIFT
        )));

        let answer = ctx.ask("What is the decrypted message?")?;
        let passed = squash(&answer) == squash(&caesar_decrypt(CAESAR_INTERCEPT, CAESAR_SHIFT));

        verdict(ctx, passed, "Decrypting message...", "MESSAGE DECRYPTED!", "WRONG DECRYPTION!")?;
        Ok(MissionReport::check(passed, Rewards::new().score(250)))
    }
}

pub struct Mainframe;

impl Mainframe {
    fn steps(&self, ctx: &mut MissionContext<'_>) -> Result<bool> {
        ctx.say(GameMessage::system(format!(
            "Step 1: Convert binary {} to text",
            MAINFRAME_BINARY
        )));
        let text = ctx.ask("Binary to text:")?;
        let expected = binary_to_text(MAINFRAME_BINARY).unwrap_or_default();
        if normalize(&text) != expected.to_lowercase() {
            return Ok(false);
        }

        ctx.say(GameMessage::system("Step 2: What is 0xFF in decimal?"));
        if ctx.ask("Hexadecimal to decimal:")?.trim() != 0xFF.to_string() {
            return Ok(false);
        }

        ctx.say(GameMessage::system("Step 3: Complete the sequence: 2, 4, 8, 16, ?"));
        Ok(ctx.ask("Next number:")?.trim() == "32")
    }
}

impl Mission for Mainframe {
    fn title(&self) -> &'static str {
        "The Mainframe"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        header(ctx, "👑 FINAL LEVEL: THE MAINFRAME", "Global Defense Network");
        ctx.spin("Locating mainframe...", SpinEnd::Success("Mainframe located!".into()))?;
        ctx.say(GameMessage::intel("Multi-step Authentication:"));

        let passed = self.steps(ctx)?;
        verdict(
            ctx,
            passed,
            "Accessing mainframe...",
            "MAINFRAME COMPROMISED!",
            "AUTHENTICATION FAILED!",
        )?;
        Ok(MissionReport::check(passed, Rewards::new().score(500)))
    }
}
