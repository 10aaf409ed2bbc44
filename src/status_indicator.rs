use crate::constants::PLACEHOLDER_TEXT;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[derive(Debug, Default)]
pub struct StatusIndicator {
    thinking: bool,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        if !thinking {
            self.spinner_idx = 0;
        }
        self.thinking = thinking;
    }

    pub fn update_spinner(&mut self) {
        if self.thinking {
            self.spinner_idx = self.spinner_idx.wrapping_add(1);
        }
    }

    pub fn line(&self) -> Line<'static> {
        if !self.thinking {
            return Line::from("");
        }

        Line::from(vec![
            Span::styled(
                SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()],
                Style::default().fg(Color::Gray),
            ),
            Span::raw(" "),
            Span::styled(PLACEHOLDER_TEXT, Style::default().fg(Color::DarkGray)),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.line()).alignment(ratatui::layout::Alignment::Left),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_only_while_thinking() {
        let mut status = StatusIndicator::new();
        status.update_spinner();
        assert_eq!(status.line().width(), 0);

        status.set_thinking(true);
        let first = status.line().spans[0].content.to_string();
        status.update_spinner();
        let second = status.line().spans[0].content.to_string();
        assert_ne!(first, second);

        status.set_thinking(false);
        assert_eq!(status.line().width(), 0);
    }
}
