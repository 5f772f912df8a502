//! Terminal User Interface
//!
//! Full-screen ratatui front end. [`App`] implements the game's
//! [`Console`](crate::game::Console), so every prompt is drawn here and
//! blocks on the keyboard.

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::{CampaignKind, Tone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            info: Color::Blue,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a transcript tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::System => Color::Cyan,
        Tone::Intel => Color::Magenta,
        Tone::Mission => Color::Red,
        Tone::Info => Color::Gray,
        Tone::Hint => Color::Yellow,
        Tone::Success => Color::Green,
        Tone::Failure => Color::Red,
        Tone::Warning => Color::Yellow,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo for Cyber Hack
pub const CYBER_LOGO: &str = r#"
  ██████╗██╗   ██╗██████╗ ███████╗██████╗     ██╗  ██╗ █████╗  ██████╗██╗  ██╗
 ██╔════╝╚██╗ ██╔╝██╔══██╗██╔════╝██╔══██╗    ██║  ██║██╔══██╗██╔════╝██║ ██╔╝
 ██║      ╚████╔╝ ██████╔╝█████╗  ██████╔╝    ███████║███████║██║     █████╔╝
 ██║       ╚██╔╝  ██╔══██╗██╔══╝  ██╔══██╗    ██╔══██║██╔══██║██║     ██╔═██╗
 ╚██████╗   ██║   ██████╔╝███████╗██║  ██║    ██║  ██║██║  ██║╚██████╗██║  ██╗
  ╚═════╝   ╚═╝   ╚═════╝ ╚══════╝╚═╝  ╚═╝    ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝
"#;

/// ASCII art logo for Nexus Hack
pub const NEXUS_LOGO: &str = r#"
 ███╗   ██╗███████╗██╗  ██╗██╗   ██╗███████╗    ██╗  ██╗ █████╗  ██████╗██╗  ██╗
 ████╗  ██║██╔════╝╚██╗██╔╝██║   ██║██╔════╝    ██║  ██║██╔══██╗██╔════╝██║ ██╔╝
 ██╔██╗ ██║█████╗   ╚███╔╝ ██║   ██║███████╗    ███████║███████║██║     █████╔╝
 ██║╚██╗██║██╔══╝   ██╔██╗ ██║   ██║╚════██║    ██╔══██║██╔══██║██║     ██╔═██╗
 ██║ ╚████║███████╗██╔╝ ██╗╚██████╔╝███████║    ██║  ██║██║  ██║╚██████╗██║  ██╗
 ╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝    ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝
"#;

pub fn logo(kind: CampaignKind) -> &'static str {
    match kind {
        CampaignKind::Classic => CYBER_LOGO,
        CampaignKind::Nexus => NEXUS_LOGO,
    }
}

/// Smaller logo for header
pub fn small_logo(kind: Option<CampaignKind>) -> String {
    match kind {
        Some(kind) => format!(" {} ", kind.title()),
        None => " TERMINAL ".to_string(),
    }
}

/// Help text for the footer
pub const HELP_TEXT: &str = "↑/↓ navigate | Space toggle | Enter confirm | y/n answer | Esc quit";

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(1),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (left panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),  // Side panel
            Constraint::Percentage(75),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (transcript + prompt)
pub fn create_main_area_layout(area: Rect, prompt_height: u16) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Transcript
            Constraint::Length(prompt_height), // Prompt
        ])
        .split(area)
        .to_vec()
}

/// Centered rectangle inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
