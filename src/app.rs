use crate::controller::ChatWidget;
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub widget: ChatWidget,
    pub status_indicator: StatusIndicator,
}

impl App {
    pub fn new(widget: ChatWidget) -> App {
        App {
            state: AppState::Chat,
            widget,
            status_indicator: StatusIndicator::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    /// Periodic refresh: keeps the spinner in step with the transcript.
    pub fn on_tick(&mut self) {
        self.status_indicator
            .set_thinking(self.widget.is_awaiting_reply());
        self.status_indicator.update_spinner();
    }
}
