use crate::chat_message::ChatMessage;
use ratatui::text::Line;

const DEFAULT_VIEWPORT: (u16, u16) = (80, 20);

/// The transcript container. Holds messages in arrival order and tracks a
/// vertical scroll offset measured in rendered rows.
#[derive(Debug)]
pub struct ChatBox {
    messages: Vec<ChatMessage>,
    scroll_top: u16,
    viewport_width: u16,
    viewport_height: u16,
}

impl ChatBox {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            scroll_top: 0,
            viewport_width: DEFAULT_VIEWPORT.0,
            viewport_height: DEFAULT_VIEWPORT.1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn append_child(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Messages carrying every class in `classes`, in transcript order.
    pub fn get_elements_by_class_name<'a>(
        &'a self,
        classes: &'a [&'a str],
    ) -> impl Iterator<Item = (usize, &'a ChatMessage)> + 'a {
        self.messages
            .iter()
            .enumerate()
            .filter(move |(_, message)| classes.iter().all(|class| message.has_class(class)))
    }

    pub fn remove_child(&mut self, index: usize) -> Option<ChatMessage> {
        if index < self.messages.len() {
            Some(self.messages.remove(index))
        } else {
            None
        }
    }

    /// Called by the renderer with the area the transcript occupies.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Total rendered rows at the current viewport width.
    pub fn scroll_height(&self) -> u16 {
        let rows: usize = self
            .messages
            .iter()
            .map(|message| message.height(self.viewport_width))
            .sum();
        let separators = self.messages.len().saturating_sub(1);
        (rows + separators).min(u16::MAX as usize) as u16
    }

    pub fn max_scroll(&self) -> u16 {
        self.scroll_height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_top(&self) -> u16 {
        self.scroll_top.min(self.max_scroll())
    }

    /// Out-of-range offsets are clamped to `[0, max_scroll]`.
    pub fn set_scroll_top(&mut self, offset: u16) {
        self.scroll_top = offset.min(self.max_scroll());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set_scroll_top(self.scroll_height());
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.set_scroll_top(self.scroll_top().saturating_sub(rows));
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.set_scroll_top(self.scroll_top().saturating_add(rows));
    }

    pub fn render_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in &self.messages {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.extend(message.render(self.viewport_width));
        }
        lines
    }
}

impl Default for ChatBox {
    fn default() -> Self {
        Self::new()
    }
}
