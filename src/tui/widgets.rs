//! Custom widgets for the game UI

use crate::data::Tone;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// A gauge for lives: full is healthy, empty is danger
pub struct StatusBar {
    value: u32,
    max: u32,
    label: String,
    color: Color,
    warning_threshold: u32,
    danger_threshold: u32,
}

impl StatusBar {
    pub fn new(label: &str, value: u32, max: u32) -> Self {
        Self {
            value,
            max: max.max(1),
            label: label.to_string(),
            color: Color::Green,
            warning_threshold: 2,
            danger_threshold: 1,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// At or below this the bar turns yellow
    pub fn warning_threshold(mut self, threshold: u32) -> Self {
        self.warning_threshold = threshold;
        self
    }

    /// At or below this the bar turns red
    pub fn danger_threshold(mut self, threshold: u32) -> Self {
        self.danger_threshold = threshold;
        self
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.value <= self.danger_threshold {
            Color::Red
        } else if self.value <= self.warning_threshold {
            Color::Yellow
        } else {
            self.color
        };

        let inner = (area.width - 2) as u32;
        let filled = (self.value.min(self.max) * inner / self.max) as u16;

        let label = format!("{}: {}/{}", self.label, self.value, self.max);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..(area.width - 2) {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// One tagged line: symbol plus message in the tone's color
pub struct AlertIndicator {
    message: String,
    tone: Tone,
    bold: bool,
}

impl AlertIndicator {
    pub fn new(message: &str, tone: Tone) -> Self {
        Self {
            message: message.to_string(),
            tone,
            bold: false,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Widget for AlertIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut style = Style::default().fg(crate::tui::tone_color(self.tone));
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        let text = format!("{} {}", self.tone.symbol(), self.message);
        buf.set_stringn(area.x, area.y, &text, area.width as usize, style);
    }
}

/// ASCII art box for dramatic moments
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let bottom = area.y + area.height - 1;
        let right = area.x + area.width - 1;

        buf.set_string(area.x, area.y, "╔", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);

        // Title sits between the corners, clipped if it has to be
        let title = format!(" {} ", self.title);
        let room = area.width - 2;
        let shown = (title.chars().count() as u16).min(room);
        buf.set_stringn(
            area.x + 1 + (room - shown) / 2,
            area.y,
            &title,
            shown as usize,
            style.add_modifier(Modifier::BOLD),
        );

        for y in 1..area.height - 1 {
            buf.set_string(area.x, area.y + y, "║", style);
            buf.set_string(right, area.y + y, "║", style);
        }

        buf.set_string(area.x, bottom, "╚", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, bottom, "═", style);
        }
        buf.set_string(right, bottom, "╝", style);

        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x + 2,
                y,
                line,
                area.width.saturating_sub(4) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_lives_bar_fills_proportionally() {
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        StatusBar::new("Lives", 3, 5).warning_threshold(2).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with("Lives: 3/5"));
        assert_eq!(row(&buf, 1), "[██████░░░░]");
    }

    #[test]
    fn test_empty_lives_bar_is_red() {
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        StatusBar::new("Lives", 0, 3).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Red);
        assert_eq!(row(&buf, 1), "[░░░░░░░░░░]");
    }

    #[test]
    fn test_dramatic_box_survives_long_titles() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        DramaticBox::new("A TITLE FAR TOO LONG FOR THE BOX")
            .content(vec!["one".into(), "two".into(), "three".into()])
            .render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "╔");
        assert_eq!(buf[(9, 3)].symbol(), "╝");
        assert!(row(&buf, 1).contains("one"));
        assert!(row(&buf, 2).contains("two"));
    }

    #[test]
    fn test_alert_indicator_uses_tone_symbol() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        AlertIndicator::new("ACCESS GRANTED!", Tone::Success).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("✔ ACCESS GRANTED!"));
        assert_eq!(buf[(0, 0)].fg, Color::Green);
    }
}
