// src/ui.rs

pub mod chat;
pub mod footer;
pub mod logs;
pub mod quit_confirm;

use crate::{App, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Renders one frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(size);

    let chat_vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Transcript
            Constraint::Length(1), // Status
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .split(horizontal_chunks[0]);

    chat::draw_chat_box(f, chat_vertical_chunks[0], &mut app.widget);
    app.status_indicator.render(f, chat_vertical_chunks[1]);
    chat::draw_input(f, chat_vertical_chunks[2], &mut app.widget);
    footer::draw_footer(f, chat_vertical_chunks[3], app);
    logs::draw_logs(f, horizontal_chunks[1], &app.widget.logs);

    if app.state == AppState::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, size);
    }
}
