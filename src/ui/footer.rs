use crate::{App, AppState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn footer_text(state: AppState) -> &'static str {
    match state {
        AppState::Chat => {
            "Type a question, Enter or click [ Send ] to ask. PgUp/PgDn scroll. Esc to quit."
        }
        AppState::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        AppState::Quit => "",
    }
}

/// Draws the footer with instructions for the current state
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let footer = Paragraph::new(footer_text(app.state))
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
