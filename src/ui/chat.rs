use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::constants::SEND_BUTTON_LABEL;
use crate::controller::ChatWidget;
use crate::document::ElementId;

/// Draws the transcript and records its inner area so scroll math uses the
/// real viewport.
pub fn draw_chat_box(f: &mut Frame<'_>, area: Rect, widget: &mut ChatWidget) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Chat")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let document = &mut widget.document;
    document.place(ElementId::ChatBox, inner);
    document.chat_box.set_viewport(inner.width, inner.height);

    let chat_box = &document.chat_box;
    let transcript = Paragraph::new(chat_box.render_lines()).scroll((chat_box.scroll_top(), 0));
    f.render_widget(transcript, inner);
}

pub fn draw_input(f: &mut Frame<'_>, area: Rect, widget: &mut ChatWidget) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Input")
        .style(Style::default().fg(Color::LightYellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let button_width = SEND_BUTTON_LABEL.width() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(button_width)])
        .split(inner);
    let (field_area, button_area) = (chunks[0], chunks[1]);

    let document = &mut widget.document;
    document.place(ElementId::UserInput, area);
    document.place(ElementId::SendButton, button_area);

    let value = document.user_input.value();
    let prompt = "→ ";
    let prompt_width = prompt.width() as u16;
    let visible_width = field_area.width.saturating_sub(prompt_width + 1) as usize;
    let text_width = value.width();
    let scroll_offset = text_width
        .saturating_sub(visible_width)
        .min(u16::MAX as usize) as u16;
    let cursor_offset = (text_width - scroll_offset as usize).min(u16::MAX as usize) as u16;

    let input = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(input).scroll((0, scroll_offset)), field_area);

    let button = Paragraph::new(Span::styled(
        SEND_BUTTON_LABEL,
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(button, button_area);

    let cursor_x = field_area
        .x
        .saturating_add(prompt_width)
        .saturating_add(cursor_offset)
        .min(field_area.right().saturating_sub(1));
    f.set_cursor_position((cursor_x, field_area.y));
}
