use crate::constants::{MESSAGE_CLASS, PLACEHOLDER_TEXT};
use crate::models::Role;
use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// One entry of the transcript.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    role: Role,
    text: String,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `["message", "user"]` or `["message", "assistant"]`.
    pub fn classes(&self) -> [&'static str; 2] {
        [MESSAGE_CLASS, self.role.class()]
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    pub fn is_placeholder(&self) -> bool {
        self.role == Role::Assistant && self.text == PLACEHOLDER_TEXT
    }

    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.get_base_style();

        self.render_header(&mut lines, base_style);
        self.render_content(&mut lines, width, base_style);
        self.render_footer(&mut lines, base_style);

        lines
    }

    /// Number of terminal rows this message occupies at `width`.
    pub fn height(&self, width: u16) -> usize {
        self.render(width).len()
    }

    fn indent(&self) -> &'static str {
        match self.role {
            Role::User => "  ",
            Role::Assistant => "",
        }
    }

    fn get_base_style(&self) -> Style {
        let style = Style::default().fg(match self.role {
            Role::User => Color::Rgb(255, 223, 128),
            Role::Assistant => Color::Rgb(144, 238, 144),
        });

        if self.is_placeholder() {
            style.add_modifier(Modifier::DIM | Modifier::ITALIC)
        } else {
            style
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = self.timestamp.format("%H:%M").to_string();
        let label = match self.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };

        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
            Span::styled(" ", style),
            Span::styled(label.to_string(), style.add_modifier(Modifier::BOLD)),
        ]));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style) {
        let indent = self.indent();
        let prefix_width = indent.width() + "│ ".width();
        let wrap_width = (width as usize).saturating_sub(prefix_width).max(1);

        for raw_line in self.text.lines() {
            let wrapped = wrap(raw_line, wrap_width);
            if wrapped.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                ]));
                continue;
            }
            for wrapped_line in wrapped {
                lines.push(Line::from(vec![
                    Span::styled(indent.to_string(), style),
                    Span::styled("│ ".to_string(), style),
                    Span::styled(wrapped_line.to_string(), style),
                ]));
            }
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}
