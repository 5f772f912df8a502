//! Nexus Hack: four missions, each built from smaller challenges
//!
//! Several challenges are gated on tools, and many end in a dice roll
//! weighted by the player's choices. All rolls go through the mission
//! context's RNG.

use super::challenges::{
    at_least, binary_to_text, caesar_decrypt, factor_semiprime, leading_integer, mod_inverse,
    normalize, parse_pair, squash,
};
use super::console::{GameMessage, SpinEnd, TextPrompt};
use super::mission::{Campaign, Mission, MissionContext, MissionReport};
use crate::data::{Achievement, CampaignKind, Rewards, Tone, Tool};
use crate::Result;

pub fn campaign() -> Campaign {
    Campaign {
        kind: CampaignKind::Nexus,
        missions: vec![
            Box::new(CorporateInfiltration),
            Box::new(CipherVault),
            Box::new(NetworkDomination),
            Box::new(NexusCore),
        ],
        victory_bonus: Rewards::new()
            .score(1000)
            .reputation(100)
            .achievement(Achievement::NexusBreacher)
            .achievement(Achievement::LegendaryHacker),
        confirm_each_mission: true,
    }
}

/// A named step inside a mission
type Challenge = fn(&mut MissionContext<'_>) -> Result<bool>;

fn briefing(ctx: &mut MissionContext<'_>, title: &str, target: &str, objective: &str) {
    ctx.say(GameMessage::new(Tone::Mission, title));
    ctx.say(GameMessage::info(format!("Target: {}", target)));
    ctx.say(GameMessage::intel(format!("Objective: {}", objective)));
}

/// Tell the player a tool is missing
fn missing(ctx: &mut MissionContext<'_>, tool: Tool) -> bool {
    ctx.say(GameMessage::failure(format!("{} required for this approach!", tool.name())));
    false
}

// ---------------------------------------------------------------------------
// Mission 1
// ---------------------------------------------------------------------------

pub const INFILTRATION_METHODS: [&str; 4] = [
    "🔍 Port Scanning & Network Reconnaissance",
    "🎭 Social Engineering Attack",
    "📧 Phishing Campaign",
    "🔐 Brute Force Login Portal",
];

pub const SSH_FINDINGS: [&str; 4] = [
    "No known vulnerabilities",
    "Username enumeration (CVE-2018-15473)",
    "Remote code execution",
    "Denial of service only",
];

pub const SOCIAL_APPROACHES: [(&str, f64); 4] = [
    ("Congratulate her on promotion and ask about new security systems", 0.8),
    ("Pretend to be from IT support needing her credentials", 0.3),
    ("Pose as a vendor offering security solutions", 0.6),
    ("Send a fake security alert requiring immediate action", 0.7),
];

pub const BRUTE_FORCE_SERVICES: [(&str, f64); 4] = [
    ("SSH (Port 22)", 0.7),
    ("RDP (Port 3389)", 0.4),
    ("Web Admin Panel (Port 80)", 0.8),
    ("FTP (Port 21)", 0.6),
];

pub const BRUTE_FORCE_STRATEGIES: [(&str, f64); 4] = [
    ("Dictionary attack with common passwords", 0.6),
    ("Hybrid attack (dictionary + numbers)", 0.8),
    ("Pure brute force (all combinations)", 0.2),
    ("Smart attack based on company info", 0.9),
];

fn nmap_command(input: &str) -> std::result::Result<(), &'static str> {
    let ok = input.to_lowercase().contains("nmap")
        && input.contains("192.168.1.100")
        && (input.contains("-p") || input.contains("--port"));
    if ok {
        Ok(())
    } else {
        Err("Hint: nmap -p [port_range] [target_ip]")
    }
}

fn network_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🔍 NETWORK RECONNAISSANCE PHASE"));
    ctx.input(
        TextPrompt::new("What nmap command scans for open ports on 192.168.1.100?")
            .validate(nmap_command),
    )?;
    let finding = ctx.select(
        "SSH banner reveals: 'SSH-2.0-OpenSSH_7.4'. What's the vulnerability?",
        SSH_FINDINGS,
    )?;
    Ok(finding == 1)
}

fn social_engineering_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🎭 SOCIAL ENGINEERING PHASE"));
    ctx.type_out(GameMessage::info("Target: Sarah Johnson, IT Administrator"))?;
    ctx.type_out(GameMessage::info("LinkedIn shows she recently got promoted..."))?;

    let approach = ctx.select(
        "How do you approach Sarah?",
        SOCIAL_APPROACHES.iter().map(|(label, _)| *label),
    )?;
    ctx.ask("What's your opening line in the phone call?")?;

    if ctx.roll(SOCIAL_APPROACHES[approach].1) {
        ctx.say(GameMessage::success("Sarah provided her temporary password: 'MegaCorp2025!'"));
        Ok(true)
    } else {
        ctx.say(GameMessage::failure("Sarah became suspicious and hung up"));
        Ok(false)
    }
}

fn phishing_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("📧 PHISHING CAMPAIGN PHASE"));
    ctx.select(
        "Choose your phishing email subject:",
        [
            "🚨 URGENT: Security Breach - Immediate Action Required",
            "🎉 Congratulations! You've won a company bonus",
            "📋 IT Department: Please update your password",
            "📦 Package delivery failed - click to reschedule",
        ],
    )?;
    ctx.select(
        "What does your fake landing page mimic?",
        [
            "Company login portal",
            "Microsoft Office 365",
            "Bank security verification",
            "Social media login",
        ],
    )?;

    let click_rate = ctx.roll_range(5, 19);
    let credential_rate = click_rate * 3 / 10;
    ctx.spin(
        "Monitoring phishing campaign...",
        SpinEnd::Success(format!(
            "Campaign results: {}% clicked, {}% entered credentials",
            click_rate, credential_rate
        )),
    )?;

    if credential_rate > 3 {
        ctx.say(GameMessage::success(format!("Captured {} sets of credentials!", credential_rate)));
        Ok(true)
    } else {
        ctx.say(GameMessage::failure("Insufficient credential capture for access"));
        Ok(false)
    }
}

fn brute_force_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🔐 BRUTE FORCE ATTACK PHASE"));
    let service = ctx.select(
        "Which service do you target for brute force?",
        BRUTE_FORCE_SERVICES.iter().map(|(label, _)| *label),
    )?;
    let strategy = ctx.select(
        "Choose your brute force strategy:",
        BRUTE_FORCE_STRATEGIES.iter().map(|(label, _)| *label),
    )?;

    let chance = BRUTE_FORCE_SERVICES[service].1 * BRUTE_FORCE_STRATEGIES[strategy].1;
    if ctx.roll(chance) {
        ctx.spin("Running brute force attack...", SpinEnd::Success("Password cracked: admin:MegaCorp123!".into()))?;
        Ok(true)
    } else {
        ctx.spin(
            "Running brute force attack...",
            SpinEnd::Failure("Attack failed - account locked or password too complex".into()),
        )?;
        Ok(false)
    }
}

pub struct CorporateInfiltration;

impl Mission for CorporateInfiltration {
    fn title(&self) -> &'static str {
        "Corporate Infiltration"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        briefing(
            ctx,
            "🏢 MISSION 1: CORPORATE INFILTRATION",
            "MegaCorp Industries",
            "Infiltrate their employee database",
        );
        ctx.type_out(GameMessage::intel("MegaCorp has recently updated their security..."))?;
        ctx.type_out(GameMessage::intel("Multiple attack vectors available..."))?;

        let method = ctx.select("Choose your infiltration method:", INFILTRATION_METHODS)?;

        let passed = match method {
            0 if ctx.has_tool(Tool::PortScanner) => {
                ctx.spin("Executing attack...", SpinEnd::Success("Port scan successful! Found open SSH on port 2222".into()))?;
                network_challenge(ctx)?
            }
            0 => missing(ctx, Tool::PortScanner),
            1 if ctx.has_tool(Tool::SocialEngineer) => {
                ctx.spin("Executing attack...", SpinEnd::Success("Target employee identified on LinkedIn".into()))?;
                social_engineering_challenge(ctx)?
            }
            1 => missing(ctx, Tool::SocialEngineer),
            2 => {
                ctx.spin("Executing attack...", SpinEnd::Success("Phishing emails sent to 50 employees".into()))?;
                phishing_challenge(ctx)?
            }
            _ if ctx.has_tool(Tool::PasswordList) => {
                ctx.spin("Executing attack...", SpinEnd::Success("Password dictionary loaded".into()))?;
                brute_force_challenge(ctx)?
            }
            _ => missing(ctx, Tool::PasswordList),
        };

        if passed {
            ctx.say(GameMessage::success("Mission Complete! Acquired SQL Injector tool"));
        }
        Ok(MissionReport::check(
            passed,
            Rewards::new()
                .score(200)
                .reputation(10)
                .tool(Tool::SqlInjector)
                .achievement(Achievement::CorporateInfiltrator),
        ))
    }
}

// ---------------------------------------------------------------------------
// Mission 2
// ---------------------------------------------------------------------------

pub const VAULT_INTERCEPT: &str = "WKH HDJOH ODQGV DW PLGQLJKW";
pub const VAULT_SHIFT: u8 = 3;
pub const RSA_N: u64 = 77;
pub const RSA_E: i64 = 7;
pub const STEGO_PAYLOAD: &str = "01001000 01100101 01101100 01110000";

fn caesar_cipher_advanced(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("📜 ADVANCED CAESAR CIPHER"));
    ctx.say(GameMessage::info(format!("Intercepted message: '{}'", VAULT_INTERCEPT)));
    ctx.say(GameMessage::info("Intelligence suggests variable shift cipher..."));

    let frequency = ctx.ask("What's the most frequent letter in English? (for frequency analysis)")?;
    let shift = ctx.ask("What shift value decrypts this message?")?;
    let plaintext = ctx.ask("What's the decrypted message?")?;

    let correct = normalize(&frequency) == "e"
        && shift.trim() == VAULT_SHIFT.to_string()
        && squash(&plaintext) == squash(&caesar_decrypt(VAULT_INTERCEPT, VAULT_SHIFT));

    if correct {
        ctx.say(GameMessage::success("Cipher cracked! Operation details revealed."));
    } else {
        ctx.say(GameMessage::failure("Decryption failed. Message remains classified."));
    }
    Ok(correct)
}

fn rsa_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🔢 RSA CRYPTANALYSIS"));
    ctx.say(GameMessage::info("Captured RSA public key with small primes (educational example)"));
    ctx.say(GameMessage::info(format!("n = {}, e = {}", RSA_N, RSA_E)));

    let factors = ctx.ask(&format!("Factor n={} into its prime components (format: p,q):", RSA_N))?;
    let totient = ctx.ask("Calculate φ(n) = (p-1)(q-1):")?;
    let private_key = ctx.ask("Calculate private key d where e*d ≡ 1 (mod φ(n)):")?;

    let correct = match factor_semiprime(RSA_N) {
        Some((p, q)) => {
            let phi = ((p - 1) * (q - 1)) as i64;
            parse_pair(&factors) == Some((p, q))
                && totient.trim() == phi.to_string()
                && mod_inverse(RSA_E, phi).map(|d| d.to_string()).as_deref() == Some(private_key.trim())
        }
        None => false,
    };

    if correct {
        ctx.say(GameMessage::success("RSA key compromised! Private communications accessible."));
    } else {
        ctx.say(GameMessage::failure("RSA analysis failed. Encryption holds."));
    }
    Ok(correct)
}

fn steganography_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🖼 STEGANOGRAPHY ANALYSIS"));
    ctx.say(GameMessage::info("Suspicious image file detected in communications..."));

    if !ctx.has_tool(Tool::SteganographyKit) {
        return Ok(missing(ctx, Tool::SteganographyKit));
    }

    ctx.select(
        "Which steganography technique do you use?",
        [
            "LSB (Least Significant Bit) analysis",
            "DCT coefficient analysis",
            "Palette-based hiding detection",
            "Metadata examination",
        ],
    )?;
    let extraction = ctx.ask(&format!("Hidden message found: '{}'. Convert to ASCII:", STEGO_PAYLOAD))?;

    let hidden = binary_to_text(STEGO_PAYLOAD).unwrap_or_default();
    let correct = normalize(&extraction) == hidden.to_lowercase();

    if correct {
        ctx.say(GameMessage::success(format!(
            "Hidden message extracted: '{}' - Asset requesting extraction!",
            hidden
        )));
    } else {
        ctx.say(GameMessage::failure("Steganography analysis inconclusive."));
    }
    Ok(correct)
}

pub struct CipherVault;

impl Mission for CipherVault {
    fn title(&self) -> &'static str {
        "The Cipher Vault"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        briefing(
            ctx,
            "🔐 MISSION 2: THE CIPHER VAULT",
            "Encrypted Government Communications",
            "Decrypt classified messages",
        );

        // Every challenge is attempted; two of three is enough
        let results = [
            caesar_cipher_advanced(ctx)?,
            rsa_challenge(ctx)?,
            steganography_challenge(ctx)?,
        ];

        Ok(MissionReport::check(
            at_least(2, &results),
            Rewards::new()
                .score(300)
                .reputation(15)
                .tool(Tool::CryptoAnalyzer)
                .achievement(Achievement::Cryptographer),
        ))
    }
}

// ---------------------------------------------------------------------------
// Mission 3
// ---------------------------------------------------------------------------

pub const SCAN_TYPES: [&str; 4] = [
    "Aggressive scan (-A flag)",
    "Stealth SYN scan (-sS)",
    "UDP scan (-sU)",
    "Comprehensive scan (-sC -sV)",
];

pub const ACCESS_VECTORS: [(&str, f64); 4] = [
    ("Exploit unpatched SMB vulnerability", 0.8),
    ("Brute force SSH with credential list", 0.6),
    ("Web application SQL injection", 0.9),
    ("Phishing attack on network admin", 0.7),
];

pub const LATERAL_TARGETS: [(&str, f64); 4] = [
    ("Domain controllers", 0.6),
    ("Database servers", 0.8),
    ("File servers", 0.9),
    ("Workstations", 0.7),
];

pub const PERSISTENCE_MECHANISMS: [&str; 5] = [
    "Registry Run keys",
    "Scheduled tasks",
    "Service installation",
    "Startup folder",
    "WMI event subscription",
];

pub const STEALTH_LEVELS: [&str; 3] = [
    "Maximum stealth (harder to detect)",
    "Moderate stealth (balanced)",
    "Minimal stealth (easier to maintain)",
];

/// Chance that `count` persistence mechanisms survive
pub fn persistence_chance(count: usize, maximum_stealth: bool) -> f64 {
    let base = (0.4 + count as f64 * 0.15).min(0.9);
    base + if maximum_stealth { 0.1 } else { 0.0 }
}

fn network_recon(ctx: &mut MissionContext<'_>) -> Result<bool> {
    let scan = ctx.select("Choose reconnaissance approach:", SCAN_TYPES)?;
    ctx.input(TextPrompt::new("Enter target network range (CIDR notation):").default_value("192.168.1.0/24"))?;

    // Two independent draws: stealth gets its own, better chance
    let stealth = scan == 1 && ctx.roll(0.7);
    let other = ctx.roll(0.5);

    if stealth || other {
        ctx.spin("Scanning network...", SpinEnd::Success("Network mapped: 15 hosts discovered, 8 with open services".into()))?;
        Ok(true)
    } else {
        ctx.spin("Scanning network...", SpinEnd::Failure("Scan detected by IDS - network lockdown initiated".into()))?;
        Ok(false)
    }
}

fn initial_access(ctx: &mut MissionContext<'_>) -> Result<bool> {
    let vector = ctx.select(
        "Choose initial access vector:",
        ACCESS_VECTORS.iter().map(|(label, _)| *label),
    )?;

    if ctx.roll(ACCESS_VECTORS[vector].1) {
        ctx.spin("Attempting initial access...", SpinEnd::Success("Initial foothold established on target system".into()))?;
        Ok(true)
    } else {
        ctx.spin("Attempting initial access...", SpinEnd::Failure("Access attempt failed - target hardened".into()))?;
        Ok(false)
    }
}

fn lateral_movement(ctx: &mut MissionContext<'_>) -> Result<bool> {
    if !ctx.has_tool(Tool::NetworkMapper) {
        return Ok(missing(ctx, Tool::NetworkMapper));
    }

    ctx.select(
        "Choose lateral movement technique:",
        [
            "Pass-the-Hash attack",
            "Golden Ticket (Kerberos)",
            "WMI remote execution",
            "PowerShell remoting",
        ],
    )?;
    let target = ctx.select(
        "Which systems do you target first?",
        LATERAL_TARGETS.iter().map(|(label, _)| *label),
    )?;

    if ctx.roll(LATERAL_TARGETS[target].1) {
        ctx.spin("Moving laterally through network...", SpinEnd::Success("Successfully compromised 3 additional systems".into()))?;
        Ok(true)
    } else {
        ctx.spin("Moving laterally through network...", SpinEnd::Failure("Lateral movement detected - access revoked".into()))?;
        Ok(false)
    }
}

fn privilege_escalation(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.select(
        "Choose privilege escalation method:",
        [
            "Kernel exploit (CVE-2021-34527)",
            "Service misconfiguration abuse",
            "Scheduled task hijacking",
            "DLL hijacking",
        ],
    )?;
    ctx.confirm("Prepare for persistence while escalating?", true)?;

    if ctx.has_tool(Tool::PrivilegeEscalator) || ctx.roll(0.6) {
        ctx.spin("Escalating privileges...", SpinEnd::Success("SYSTEM/root privileges obtained!".into()))?;
        Ok(true)
    } else {
        ctx.spin("Escalating privileges...", SpinEnd::Failure("Privilege escalation failed - access limited".into()))?;
        Ok(false)
    }
}

fn establish_persistence(ctx: &mut MissionContext<'_>) -> Result<bool> {
    let mechanisms = ctx.multi_select("Select persistence mechanisms:", PERSISTENCE_MECHANISMS)?;
    let stealth = ctx.select("Stealth level for persistence:", STEALTH_LEVELS)?;

    if ctx.roll(persistence_chance(mechanisms.len(), stealth == 0)) {
        ctx.spin(
            "Establishing persistence...",
            SpinEnd::Success(format!("Persistence established using {} mechanisms", mechanisms.len())),
        )?;
        Ok(true)
    } else {
        ctx.spin("Establishing persistence...", SpinEnd::Failure("Persistence mechanisms detected and removed".into()))?;
        Ok(false)
    }
}

pub const DOMINATION_PHASES: [(&str, Challenge); 5] = [
    ("Reconnaissance", network_recon),
    ("Initial Access", initial_access),
    ("Lateral Movement", lateral_movement),
    ("Privilege Escalation", privilege_escalation),
    ("Persistence", establish_persistence),
];

pub struct NetworkDomination;

impl Mission for NetworkDomination {
    fn title(&self) -> &'static str {
        "Network Domination"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        briefing(
            ctx,
            "🌐 MISSION 3: NETWORK DOMINATION",
            "Critical Infrastructure Network",
            "Gain persistent access across the network",
        );

        let mut passed = 0;
        for (name, challenge) in DOMINATION_PHASES {
            ctx.say(GameMessage::system(format!("🔄 Phase: {}", name)));
            if challenge(ctx)? {
                passed += 1;
                ctx.say(GameMessage::success(format!("{} completed successfully", name)));
            } else {
                ctx.say(GameMessage::failure(format!("{} failed", name)));
                // An early stumble burns the whole operation
                if passed < 2 {
                    break;
                }
            }
        }

        Ok(MissionReport::check(
            passed >= 4,
            Rewards::new()
                .score(500)
                .reputation(25)
                .tool(Tool::NetworkMapper)
                .tool(Tool::PrivilegeEscalator)
                .achievement(Achievement::NetworkDominator),
        ))
    }
}

// ---------------------------------------------------------------------------
// Final mission
// ---------------------------------------------------------------------------

pub const QUANTUM_PRINCIPLES: [&str; 4] = [
    "Quantum superposition",
    "Quantum entanglement",
    "Quantum tunneling",
    "Shor's algorithm",
];

pub const AI_STRATEGIES: [&str; 4] = [
    "Use completely random attack patterns",
    "Exploit the AI's training data biases",
    "Overwhelm with simultaneous attacks",
    "Feed it contradictory information",
];

pub const BIOMETRIC_BYPASSES: [&str; 5] = [
    "Fingerprint spoofing with silicone",
    "Iris pattern projection",
    "Voice synthesis from recordings",
    "Facial recognition deepfake",
    "Gait analysis mimicry",
];

fn quantum_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🌌 Quantum encryption detected - traditional methods useless"));
    let principle = ctx.select("Which quantum principle can break this encryption?", QUANTUM_PRINCIPLES)?;
    let qubits = ctx.ask("How many qubits needed to factor RSA-2048? (approximate)")?;

    let in_range = leading_integer(&qubits).is_some_and(|n| (4000..=6000).contains(&n));
    Ok(principle == 3 && in_range)
}

fn ai_defense_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("🤖 AI Defense System activated - learning your patterns"));
    let strategy = ctx.select("How do you defeat an adaptive AI defense?", AI_STRATEGIES)?;
    let approach = ctx.ask("Describe your specific approach in one sentence:")?;

    let approach = approach.to_lowercase();
    let shows_understanding = ["random", "bias", "contradictory", "poison"]
        .iter()
        .any(|concept| approach.contains(concept));
    Ok(strategy == 1 || shows_understanding)
}

fn biometric_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("👁 Multi-factor biometric authentication required"));
    let bypasses = ctx.multi_select("Select biometric bypass techniques:", BIOMETRIC_BYPASSES)?;
    let samples = ctx.confirm("Combine with social engineering to get biometric samples?", true)?;
    Ok(bypasses.len() >= 3 && samples)
}

fn core_access_challenge(ctx: &mut MissionContext<'_>) -> Result<bool> {
    ctx.say(GameMessage::intel("⚡ NEXUS CORE - Final authentication sequence"));
    let master_key = ctx.input(
        TextPrompt::new("Enter the master key (hint: what connects all hackers?):").masked(),
    )?;
    let motto = ctx.ask("Complete the hacker motto: 'Information wants to be...'")?;
    let responsible = ctx.confirm("Do you promise to use this power responsibly?", true)?;

    Ok(normalize(&master_key) == "curiosity" && motto.to_lowercase().contains("free") && responsible)
}

pub const NEXUS_STAGES: [(&str, Challenge); 4] = [
    ("Quantum Encryption", quantum_challenge),
    ("AI Defense System", ai_defense_challenge),
    ("Biometric Bypass", biometric_challenge),
    ("Core Access", core_access_challenge),
];

pub struct NexusCore;

impl Mission for NexusCore {
    fn title(&self) -> &'static str {
        "The Nexus Core"
    }

    fn play(&self, ctx: &mut MissionContext<'_>) -> Result<MissionReport> {
        briefing(
            ctx,
            "💀 FINAL MISSION: THE NEXUS CORE",
            "The Nexus - Global Surveillance Network",
            "Infiltrate the most secure system on Earth",
        );
        ctx.type_out(GameMessage::warning("This is a point of no return..."))?;
        ctx.type_out(GameMessage::warning("Success will mark you as a legend..."))?;
        ctx.type_out(GameMessage::warning("Failure means digital exile..."))?;

        if !ctx.confirm("Do you wish to proceed with the final hack?", false)? {
            ctx.say(GameMessage::info(
                "Mission aborted. Perhaps wisdom is the greatest hack of all.",
            ));
            return Ok(MissionReport::failure());
        }

        let mut breached = 0;
        for (name, challenge) in NEXUS_STAGES {
            ctx.say(GameMessage::new(Tone::Mission, format!("🔥 NEXUS STAGE: {}", name)));
            if !challenge(ctx)? {
                ctx.say(GameMessage::failure(format!("{} repelled the attack!", name)));
                break;
            }
            breached += 1;
            ctx.say(GameMessage::success(format!("{} breached!", name)));
            if breached < NEXUS_STAGES.len() {
                ctx.spin("Nexus adapting defenses...", SpinEnd::Success("Ready for next stage".into()))?;
            }
        }

        if breached == NEXUS_STAGES.len() {
            // The legendary payout is the campaign's victory bonus
            return Ok(MissionReport::success(Rewards::new()));
        }

        ctx.say(GameMessage::failure("THE NEXUS REMAINS UNBROKEN"));
        ctx.say(GameMessage::info("Your digital footprints have been traced..."));
        ctx.say(GameMessage::info("But legends are born from failure as much as success."));
        ctx.say(GameMessage::info("Your reputation in the underground has grown."));
        Ok(MissionReport::failure_with(
            Rewards::new()
                .score(200)
                .reputation(20)
                .achievement(Achievement::NexusChallenger),
        ))
    }
}
