use crate::controller::WidgetEvent;
use crate::document::ElementId;
use crate::{App, AppState};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

const SCROLL_STEP: u16 = 3;

pub fn handle_terminal_event(event: Event, app: &mut App) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match app.state {
            AppState::Chat => handle_chat_input(key, app),
            AppState::QuitConfirm => handle_quit_confirm_input(key, app),
            AppState::Quit => {}
        },
        Event::Mouse(mouse) if app.state == AppState::Chat => handle_mouse(mouse, app),
        Event::Paste(text) if app.state == AppState::Chat => {
            for c in text.chars().filter(|c| !c.is_control()) {
                app.widget.document.user_input.insert_char(c);
            }
        }
        _ => {}
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    let widget = &mut app.widget;
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            widget.handle_event(&WidgetEvent::KeyDown {
                target: ElementId::UserInput,
                key: KeyCode::Enter,
            });
        }
        KeyCode::PageUp => widget.document.chat_box.scroll_up(SCROLL_STEP),
        KeyCode::PageDown => widget.document.chat_box.scroll_down(SCROLL_STEP),
        KeyCode::Backspace => {
            widget.document.user_input.delete_char();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = AppState::QuitConfirm,
                    'u' => widget.document.chat_box.scroll_up(SCROLL_STEP),
                    'd' => widget.document.chat_box.scroll_down(SCROLL_STEP),
                    _ => {}
                }
            } else {
                widget.document.user_input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    let widget = &mut app.widget;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = widget.document.element_at(mouse.column, mouse.row) {
                widget.handle_event(&WidgetEvent::Click(target));
            }
        }
        MouseEventKind::ScrollUp => widget.document.chat_box.scroll_up(1),
        MouseEventKind::ScrollDown => widget.document.chat_box.scroll_down(1),
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}
