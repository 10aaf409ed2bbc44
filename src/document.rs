//! The identified elements the widget binds to, and where each one was last
//! drawn on screen so pointer events can be routed back to it.

use crate::chat_box::ChatBox;
use crate::constants::{CHAT_BOX_ID, SEND_BUTTON_ID, USER_INPUT_ID};
use ratatui::layout::{Position, Rect};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    SendButton,
    UserInput,
    ChatBox,
}

impl ElementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::SendButton => SEND_BUTTON_ID,
            ElementId::UserInput => USER_INPUT_ID,
            ElementId::ChatBox => CHAT_BOX_ID,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-line text field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn delete_char(&mut self) {
        self.value.pop();
    }
}

#[derive(Debug, Default)]
pub struct Document {
    pub user_input: InputField,
    pub chat_box: ChatBox,
    layout: HashMap<ElementId, Rect>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where `id` was drawn in the latest frame.
    pub fn place(&mut self, id: ElementId, area: Rect) {
        self.layout.insert(id, area);
    }

    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.layout.get(&id).copied()
    }

    /// Topmost element under the given cell. The send button is checked
    /// first since it is drawn inside the input row.
    pub fn element_at(&self, column: u16, row: u16) -> Option<ElementId> {
        let position = Position::new(column, row);
        [ElementId::SendButton, ElementId::UserInput, ElementId::ChatBox]
            .into_iter()
            .find(|id| {
                self.bounds(*id)
                    .map(|area| area.contains(position))
                    .unwrap_or(false)
            })
    }
}
