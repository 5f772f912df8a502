//! Main application state and rendering

use crate::config::Config;
use crate::data::Tone;
use crate::game::{Banner, Console, GameMessage, SelectPrompt, SpinEnd, StatusSnapshot, TextPrompt};
use crate::tui::widgets::{AlertIndicator, DramaticBox, StatusBar};
use crate::tui::{
    centered, create_content_layout, create_main_area_layout, create_main_layout, small_logo,
    styled_block, tone_color, Theme, HELP_TEXT,
};
use crate::{GameError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Oldest transcript lines are dropped past this
const TRANSCRIPT_LIMIT: usize = 500;

/// Rows a list prompt shows before it scrolls
const LIST_ROWS: u16 = 8;

/// What the prompt panel is showing
#[derive(Debug, Clone)]
pub enum PromptView {
    Text {
        message: String,
        buffer: String,
        masked: bool,
        default: Option<String>,
        hint: Option<&'static str>,
    },
    Select {
        message: String,
        choices: Vec<String>,
        state: ListState,
    },
    Multi {
        message: String,
        choices: Vec<String>,
        checked: Vec<bool>,
        state: ListState,
    },
    Confirm {
        message: String,
        value: bool,
    },
    Spinner {
        label: String,
        frame: usize,
    },
    /// "Press Enter" under a banner
    Continue,
}

/// Result of feeding one key to a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Pending,
    Submit,
    Quit,
}

fn first_selected() -> ListState {
    let mut state = ListState::default();
    state.select(Some(0));
    state
}

/// Move a list cursor, wrapping at both ends
fn step(state: &mut ListState, len: usize, down: bool) {
    if len == 0 {
        return;
    }
    let i = state.selected().unwrap_or(0).min(len - 1);
    let next = if down { (i + 1) % len } else { (i + len - 1) % len };
    state.select(Some(next));
}

impl PromptView {
    pub fn text(prompt: &TextPrompt, hint: Option<&'static str>) -> Self {
        PromptView::Text {
            message: prompt.message.clone(),
            buffer: String::new(),
            masked: prompt.masked,
            default: prompt.default.clone(),
            hint,
        }
    }

    pub fn select(prompt: &SelectPrompt) -> Self {
        PromptView::Select {
            message: prompt.message.clone(),
            choices: prompt.choices.clone(),
            state: first_selected(),
        }
    }

    pub fn multi(prompt: &SelectPrompt) -> Self {
        PromptView::Multi {
            message: prompt.message.clone(),
            choices: prompt.choices.clone(),
            checked: vec![false; prompt.choices.len()],
            state: first_selected(),
        }
    }

    pub fn confirm(message: &str, default: bool) -> Self {
        PromptView::Confirm {
            message: message.to_string(),
            value: default,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            return KeyOutcome::Quit;
        }

        match self {
            PromptView::Text { buffer, hint, .. } => match key.code {
                KeyCode::Enter => return KeyOutcome::Submit,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    *hint = None;
                }
                _ => {}
            },
            PromptView::Select { choices, state, .. } => match key.code {
                KeyCode::Enter => return KeyOutcome::Submit,
                KeyCode::Up => step(state, choices.len(), false),
                KeyCode::Down | KeyCode::Tab => step(state, choices.len(), true),
                _ => {}
            },
            PromptView::Multi { choices, checked, state, .. } => match key.code {
                KeyCode::Enter => return KeyOutcome::Submit,
                KeyCode::Up => step(state, choices.len(), false),
                KeyCode::Down | KeyCode::Tab => step(state, choices.len(), true),
                KeyCode::Char(' ') => {
                    if let Some(box_) = state.selected().and_then(|i| checked.get_mut(i)) {
                        *box_ = !*box_;
                    }
                }
                _ => {}
            },
            PromptView::Confirm { value, .. } => match key.code {
                KeyCode::Enter => return KeyOutcome::Submit,
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    *value = true;
                    return KeyOutcome::Submit;
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    *value = false;
                    return KeyOutcome::Submit;
                }
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => *value = !*value,
                _ => {}
            },
            PromptView::Spinner { .. } => {}
            PromptView::Continue => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    return KeyOutcome::Submit;
                }
            }
        }
        KeyOutcome::Pending
    }

    /// Rows the prompt panel needs, borders included
    pub fn height(&self) -> u16 {
        match self {
            PromptView::Text { .. } => 5,
            PromptView::Select { choices, .. } | PromptView::Multi { choices, .. } => {
                (choices.len() as u16).clamp(1, LIST_ROWS) + 2
            }
            PromptView::Confirm { .. } | PromptView::Spinner { .. } | PromptView::Continue => 3,
        }
    }
}

/// Break a line into chunks of at most `width` characters
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

/// Application state
pub struct App<B: Backend> {
    terminal: Terminal<B>,
    config: Config,
    pub theme: Theme,
    pub transcript: Vec<GameMessage>,
    pub status: Option<StatusSnapshot>,
    pub banner: Option<Banner>,
    pub prompt: Option<PromptView>,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>, config: Config) -> Self {
        Self {
            terminal,
            config,
            theme: Theme::default(),
            transcript: Vec::new(),
            status: None,
            banner: None,
            prompt: None,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            theme,
            transcript,
            status,
            banner,
            prompt,
            ..
        } = self;
        terminal.draw(|frame| {
            render(
                frame,
                View {
                    theme,
                    transcript,
                    status: status.as_ref(),
                    banner: banner.as_ref(),
                    prompt: prompt.as_mut(),
                },
            )
        })?;
        Ok(())
    }

    fn pause(&self, millis: u64) {
        let delay = self.config.delay(millis);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    fn animated(&self) -> bool {
        self.config.pace > 0.0
    }

    fn push(&mut self, message: GameMessage) {
        self.transcript.push(message);
        if self.transcript.len() > TRANSCRIPT_LIMIT {
            let excess = self.transcript.len() - TRANSCRIPT_LIMIT;
            self.transcript.drain(..excess);
        }
    }

    /// Keep the question and answer in the transcript
    fn echo(&mut self, question: &str, answer: &str) {
        self.push(GameMessage::info(format!("? {} › {}", question, answer)));
    }

    /// Next key press, or `None` for anything else (resize, mouse)
    fn next_key(&self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    /// Show `view` and block until the player submits it
    fn ask(&mut self, view: PromptView) -> Result<PromptView> {
        self.prompt = Some(view);
        loop {
            self.draw()?;
            let Some(key) = self.next_key()? else {
                continue;
            };
            let outcome = match self.prompt.as_mut() {
                Some(prompt) => prompt.on_key(key),
                None => KeyOutcome::Pending,
            };
            match outcome {
                KeyOutcome::Pending => {}
                KeyOutcome::Quit => {
                    self.prompt = None;
                    return Err(GameError::Aborted.into());
                }
                KeyOutcome::Submit => {
                    return self
                        .prompt
                        .take()
                        .ok_or_else(|| GameError::InvalidState("prompt vanished".into()).into());
                }
            }
        }
    }
}

fn unexpected(view: &PromptView) -> anyhow::Error {
    GameError::InvalidState(format!("unexpected prompt {:?}", view)).into()
}

impl<B: Backend> Console for App<B> {
    fn say(&mut self, message: GameMessage) {
        self.push(message);
    }

    fn type_out(&mut self, message: GameMessage) -> Result<()> {
        if !self.animated() {
            self.push(message);
            return Ok(());
        }
        let full = message.text.clone();
        self.push(GameMessage {
            text: String::new(),
            ..message
        });
        for c in full.chars() {
            if let Some(last) = self.transcript.last_mut() {
                last.text.push(c);
            }
            self.draw()?;
            self.pause(25);
        }
        Ok(())
    }

    fn spin(&mut self, label: &str, end: SpinEnd) -> Result<()> {
        if self.animated() {
            for frame in 0..15 {
                self.prompt = Some(PromptView::Spinner {
                    label: label.to_string(),
                    frame,
                });
                self.draw()?;
                self.pause(100);
            }
            self.prompt = None;
        }
        self.push(GameMessage::system(label));
        self.push(match end {
            SpinEnd::Success(text) => GameMessage::success(text),
            SpinEnd::Failure(text) => GameMessage::failure(text),
        });
        Ok(())
    }

    fn banner(&mut self, banner: &Banner) -> Result<()> {
        self.banner = Some(banner.clone());
        let answered = self.ask(PromptView::Continue);
        self.banner = None;
        answered?;
        self.push(GameMessage::new(banner.tone, banner.title.clone()));
        Ok(())
    }

    fn status(&mut self, status: StatusSnapshot) {
        self.status = Some(status);
    }

    fn clear(&mut self) {
        self.transcript.clear();
    }

    fn input(&mut self, prompt: &TextPrompt) -> Result<String> {
        let mut hint = None;
        loop {
            let raw = match self.ask(PromptView::text(prompt, hint))? {
                PromptView::Text { buffer, .. } => buffer,
                other => return Err(unexpected(&other)),
            };
            match prompt.resolve(&raw) {
                Ok(answer) => {
                    let shown = if prompt.masked {
                        "*".repeat(answer.chars().count())
                    } else {
                        answer.clone()
                    };
                    self.echo(&prompt.message, &shown);
                    return Ok(answer);
                }
                Err(rejected) => hint = Some(rejected),
            }
        }
    }

    fn select(&mut self, prompt: &SelectPrompt) -> Result<usize> {
        if prompt.choices.is_empty() {
            return Err(GameError::InvalidState(format!("no choices for {:?}", prompt.message)).into());
        }
        let picked = match self.ask(PromptView::select(prompt))? {
            PromptView::Select { state, .. } => state.selected().unwrap_or(0),
            other => return Err(unexpected(&other)),
        };
        self.echo(&prompt.message, &prompt.choices[picked]);
        Ok(picked)
    }

    fn multi_select(&mut self, prompt: &SelectPrompt) -> Result<Vec<usize>> {
        let picked: Vec<usize> = match self.ask(PromptView::multi(prompt))? {
            PromptView::Multi { checked, .. } => checked
                .iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(|(i, _)| i)
                .collect(),
            other => return Err(unexpected(&other)),
        };
        let names: Vec<&str> = picked.iter().map(|&i| prompt.choices[i].as_str()).collect();
        self.echo(&prompt.message, &names.join(", "));
        Ok(picked)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let value = match self.ask(PromptView::confirm(message, default))? {
            PromptView::Confirm { value, .. } => value,
            other => return Err(unexpected(&other)),
        };
        self.echo(message, if value { "Yes" } else { "No" });
        Ok(value)
    }
}

/// Borrowed state for one frame
struct View<'a> {
    theme: &'a Theme,
    transcript: &'a [GameMessage],
    status: Option<&'a StatusSnapshot>,
    banner: Option<&'a Banner>,
    prompt: Option<&'a mut PromptView>,
}

fn render(frame: &mut Frame, view: View<'_>) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    if let Some(banner) = view.banner {
        render_banner(frame, view.theme, banner);
        return;
    }

    let layout = create_main_layout(area);
    render_header(frame, view.theme, view.status, layout[0]);

    let content = create_content_layout(layout[1]);
    render_side_panel(frame, view.theme, view.status, content[0]);

    let prompt_height = view.prompt.as_ref().map(|p| p.height()).unwrap_or(3);
    let main = create_main_area_layout(content[1], prompt_height);
    render_transcript(frame, view.theme, view.transcript, main[0]);
    render_prompt(frame, view.theme, view.prompt, main[1]);

    render_status_bar(frame, view.theme, layout[2]);
}

fn render_header(frame: &mut Frame, theme: &Theme, status: Option<&StatusSnapshot>, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(30),
        ])
        .split(area);
    let bordered = || Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border));

    let logo = Paragraph::new(small_logo(status.map(|s| s.campaign)))
        .style(Style::default().fg(theme.header).add_modifier(Modifier::BOLD))
        .block(bordered());
    frame.render_widget(logo, header_layout[0]);

    let who = match status {
        Some(s) => match &s.background {
            Some(background) => format!("[{}] ({})", s.name, background),
            None => format!("[{}]", s.name),
        },
        None => "Not connected".to_string(),
    };
    let title = Paragraph::new(who)
        .style(Style::default().fg(theme.accent))
        .alignment(Alignment::Center)
        .block(bordered());
    frame.render_widget(title, header_layout[1]);

    let progress = match status {
        Some(s) => format!(" Level {}/{} | Score {} ", s.level, s.max_level, s.score),
        None => String::new(),
    };
    let progress = Paragraph::new(progress)
        .style(Style::default().fg(theme.fg))
        .alignment(Alignment::Right)
        .block(bordered());
    frame.render_widget(progress, header_layout[2]);
}

fn render_side_panel(frame: &mut Frame, theme: &Theme, status: Option<&StatusSnapshot>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Lives
            Constraint::Min(6),    // Stats
        ])
        .split(area);

    let Some(s) = status else {
        frame.render_widget(styled_block("Hacker", theme), area);
        return;
    };

    let lives_block = styled_block("Lives", theme);
    let inner = lives_block.inner(chunks[0]);
    frame.render_widget(lives_block, chunks[0]);
    frame.render_widget(
        StatusBar::new("❤", s.lives, s.max_lives)
            .color(theme.success)
            .warning_threshold(s.max_lives / 2)
            .danger_threshold(1),
        inner,
    );

    let stat = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::raw(label),
            Span::styled(value, Style::default().fg(color)),
        ])
    };
    let reputation_color = if s.reputation < 0 { theme.alert } else { theme.info };
    let stats = vec![
        stat("Score: ", s.score.to_string(), theme.warning),
        stat("Level: ", format!("{}/{}", s.level, s.max_level), theme.header),
        stat("Reputation: ", s.reputation.to_string(), reputation_color),
        stat("Tools: ", s.tools.to_string(), theme.alert),
        stat("Achievements: ", s.achievements.to_string(), theme.accent),
    ];
    let stats = Paragraph::new(stats).block(styled_block("Hacker", theme));
    frame.render_widget(stats, chunks[1]);
}

fn render_transcript(frame: &mut Frame, theme: &Theme, transcript: &[GameMessage], area: Rect) {
    let block = styled_block("Terminal", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let visible = inner.height as usize;
    if width == 0 || visible == 0 {
        return;
    }

    // Wrap from the newest message backwards until the panel is full
    let mut lines: Vec<Line> = Vec::new();
    for message in transcript.iter().rev() {
        let color = tone_color(message.tone);
        let style = match message.tone {
            Tone::Success | Tone::Failure | Tone::Mission => Style::default().fg(color).add_modifier(Modifier::BOLD),
            _ => Style::default().fg(color),
        };
        let mut wrapped = wrap_line(&message.display(), width);
        while let Some(row) = wrapped.pop() {
            lines.push(Line::from(Span::styled(row, style)));
        }
        if lines.len() >= visible {
            break;
        }
    }
    lines.truncate(visible);
    lines.reverse();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_prompt(frame: &mut Frame, theme: &Theme, prompt: Option<&mut PromptView>, area: Rect) {
    let Some(prompt) = prompt else {
        frame.render_widget(styled_block("Prompt", theme), area);
        return;
    };

    match prompt {
        PromptView::Text {
            message,
            buffer,
            masked,
            default,
            hint,
        } => {
            let typed = if *masked {
                "*".repeat(buffer.chars().count())
            } else {
                buffer.clone()
            };
            let footer = match (hint, default) {
                (Some(hint), _) => Line::from(Span::styled(*hint, Style::default().fg(theme.warning))),
                (None, Some(default)) => Line::from(Span::styled(
                    format!("(default: {})", default),
                    Style::default().fg(Color::DarkGray),
                )),
                (None, None) => Line::from(""),
            };
            let text = vec![
                Line::from(Span::styled(
                    message.as_str(),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("> {}_", typed), Style::default().fg(theme.success))),
                footer,
            ];
            let input = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.success))
                    .title(" Input "),
            );
            frame.render_widget(input, area);
        }
        PromptView::Select { message, choices, state } => {
            let items: Vec<ListItem> = choices.iter().map(|c| ListItem::new(c.as_str())).collect();
            let menu = List::new(items)
                .block(styled_block(message, theme))
                .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
                .highlight_symbol("→ ");
            frame.render_stateful_widget(menu, area, state);
        }
        PromptView::Multi {
            message,
            choices,
            checked,
            state,
        } => {
            let items: Vec<ListItem> = choices
                .iter()
                .zip(checked.iter())
                .map(|(choice, &on)| {
                    let mark = if on { "[x]" } else { "[ ]" };
                    ListItem::new(format!("{} {}", mark, choice))
                })
                .collect();
            let menu = List::new(items)
                .block(styled_block(message, theme))
                .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                .highlight_symbol("→ ");
            frame.render_stateful_widget(menu, area, state);
        }
        PromptView::Confirm { message, value } => {
            let chosen = Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD);
            let plain = Style::default().fg(theme.fg);
            let line = Line::from(vec![
                Span::styled(format!("{}  ", message), Style::default().fg(theme.accent)),
                Span::styled(" Yes ", if *value { chosen } else { plain }),
                Span::raw(" "),
                Span::styled(" No ", if *value { plain } else { chosen }),
            ]);
            frame.render_widget(Paragraph::new(line).block(styled_block("Confirm", theme)), area);
        }
        PromptView::Spinner { label, frame: tick } => {
            let block = styled_block("Working", theme);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let spinner = SPINNER_FRAMES[*tick % SPINNER_FRAMES.len()];
            frame.render_widget(
                Paragraph::new(format!("{} {}", spinner, label)).style(Style::default().fg(theme.accent)),
                inner,
            );
        }
        PromptView::Continue => {
            frame.render_widget(
                AlertIndicator::new("Press Enter to continue", Tone::System),
                area,
            );
        }
    }
}

fn render_banner(frame: &mut Frame, theme: &Theme, banner: &Banner) {
    let area = frame.area();
    let art_height = banner.art.map(|art| art.lines().count() as u16).unwrap_or(0);
    let box_height = banner.lines.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(art_height),
            Constraint::Min(box_height),
            Constraint::Length(1),
        ])
        .split(area);

    if let Some(art) = banner.art {
        let logo = Paragraph::new(art)
            .style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);
    }

    let widest = banner
        .lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(banner.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let box_area = centered(chunks[1], widest + 6, box_height);
    frame.render_widget(
        DramaticBox::new(&banner.title)
            .content(banner.lines.clone())
            .border_color(tone_color(banner.tone)),
        box_area,
    );

    let footer = Paragraph::new("Press Enter to continue")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

fn render_status_bar(frame: &mut Frame, theme: &Theme, area: Rect) {
    let status = Paragraph::new(format!(" {} ", HELP_TEXT))
        .style(Style::default().fg(theme.fg).bg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CampaignKind, Difficulty, Profile};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let config = Config {
            pace: 0.0,
            ..Config::default()
        };
        App::new(terminal, config)
    }

    fn screen(app: &App<TestBackend>) -> String {
        app.backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_text_prompt_editing() {
        let mut view = PromptView::text(&TextPrompt::new("Enter the password:"), Some("try again"));
        for c in "applx".chars() {
            assert_eq!(view.on_key(key(KeyCode::Char(c))), KeyOutcome::Pending);
        }
        view.on_key(key(KeyCode::Backspace));
        view.on_key(key(KeyCode::Char('e')));
        assert_eq!(view.on_key(key(KeyCode::Enter)), KeyOutcome::Submit);

        match view {
            PromptView::Text { buffer, hint, .. } => {
                assert_eq!(buffer, "apple");
                // Typing clears the rejection hint
                assert_eq!(hint, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_select_wraps_around() {
        let mut view = PromptView::select(&SelectPrompt::new("port", ["21", "22", "23"]));
        view.on_key(key(KeyCode::Up));
        let PromptView::Select { state, .. } = &view else {
            panic!("not a select");
        };
        assert_eq!(state.selected(), Some(2));

        view.on_key(key(KeyCode::Down));
        view.on_key(key(KeyCode::Down));
        let PromptView::Select { state, .. } = &view else {
            panic!("not a select");
        };
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_multi_select_toggles_with_space() {
        let mut view = PromptView::multi(&SelectPrompt::new("mechanisms", ["a", "b", "c"]));
        view.on_key(key(KeyCode::Char(' ')));
        view.on_key(key(KeyCode::Down));
        view.on_key(key(KeyCode::Down));
        view.on_key(key(KeyCode::Char(' ')));
        view.on_key(key(KeyCode::Up));
        view.on_key(key(KeyCode::Up));
        view.on_key(key(KeyCode::Char(' ')));
        view.on_key(key(KeyCode::Char(' ')));

        let PromptView::Multi { checked, .. } = view else {
            panic!("not a multi select");
        };
        assert_eq!(checked, vec![true, false, true]);
    }

    #[test]
    fn test_confirm_keys() {
        let mut view = PromptView::confirm("Ready?", true);
        assert_eq!(view.on_key(key(KeyCode::Char('n'))), KeyOutcome::Submit);
        assert!(matches!(view, PromptView::Confirm { value: false, .. }));

        let mut view = PromptView::confirm("Ready?", false);
        view.on_key(key(KeyCode::Left));
        assert_eq!(view.on_key(key(KeyCode::Enter)), KeyOutcome::Submit);
        assert!(matches!(view, PromptView::Confirm { value: true, .. }));
    }

    #[test]
    fn test_escape_and_ctrl_c_quit_any_prompt() {
        let mut view = PromptView::text(&TextPrompt::new("alias"), None);
        assert_eq!(view.on_key(key(KeyCode::Esc)), KeyOutcome::Quit);

        let mut view = PromptView::Continue;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(view.on_key(ctrl_c), KeyOutcome::Quit);
    }

    #[test]
    fn test_wrap_line() {
        assert_eq!(wrap_line("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_line("", 4), vec![""]);
        assert!(wrap_line("abc", 0).is_empty());
    }

    #[test]
    fn test_fast_spinner_and_typewriter_just_record() {
        let mut app = app();
        app.spin("Cracking password...", SpinEnd::Success("ACCESS GRANTED!".into()))
            .unwrap();
        app.type_out(GameMessage::intel("MegaCorp has recently updated their security..."))
            .unwrap();

        assert_eq!(app.transcript.len(), 3);
        assert_eq!(app.transcript[1].tone, Tone::Success);
        assert!(app.prompt.is_none());
    }

    #[test]
    fn test_game_screen_renders_status_transcript_and_prompt() {
        let mut app = app();
        let profile = Profile::new("neo", CampaignKind::Nexus, Difficulty::Hard, None);
        app.status(StatusSnapshot::new(&profile, 4));
        app.say(GameMessage::success("ACCESS GRANTED!"));
        app.prompt = Some(PromptView::select(&SelectPrompt::new(
            "Select the correct port:",
            ["21", "22", "23"],
        )));
        app.draw().unwrap();

        let screen = screen(&app);
        assert!(screen.contains("NEXUS HACK"));
        assert!(screen.contains("[neo]"));
        assert!(screen.contains("[SUCCESS] ACCESS GRANTED!"));
        assert!(screen.contains("Select the correct port:"));
        assert!(screen.contains("Lives"));
        assert!(screen.contains("Level 1/4"));
    }

    #[test]
    fn test_banner_takes_the_whole_screen() {
        let mut app = app();
        app.say(GameMessage::info("hidden behind the banner"));
        app.banner = Some(
            Banner::new("GAME OVER", Tone::Failure)
                .line("You have been traced and captured...")
                .line("Final Score: 250"),
        );
        app.draw().unwrap();

        let screen = screen(&app);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Final Score: 250"));
        assert!(screen.contains("Press Enter to continue"));
        assert!(!screen.contains("hidden behind the banner"));
    }

    #[test]
    fn test_masked_input_is_starred_on_screen() {
        let mut app = app();
        let mut view = PromptView::text(&TextPrompt::new("Enter the master key:").masked(), None);
        for c in "curiosity".chars() {
            view.on_key(key(KeyCode::Char(c)));
        }
        app.prompt = Some(view);
        app.draw().unwrap();

        let screen = screen(&app);
        assert!(screen.contains("> *********_"));
        assert!(!screen.contains("curiosity"));
    }

    #[test]
    fn test_transcript_is_capped() {
        let mut app = app();
        for i in 0..(TRANSCRIPT_LIMIT + 20) {
            app.say(GameMessage::info(format!("line {}", i)));
        }
        assert_eq!(app.transcript.len(), TRANSCRIPT_LIMIT);
        assert_eq!(app.transcript[0].text, "line 20");
    }
}
