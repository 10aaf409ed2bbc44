use crate::{
    api::{ApiResponse, ChatClient},
    chat_message::ChatMessage,
    constants::{ASSISTANT_CLASS, FALLBACK_TEXT, MESSAGE_CLASS, PLACEHOLDER_TEXT},
    document::{Document, ElementId},
    errors::ChatResult,
    log_view::LogView,
    models::Role,
};
use crossterm::event::KeyCode;
use log::{debug, error, info};
use tokio::{sync::mpsc, task::JoinHandle};

/// Input events as seen by the widget, already routed to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    Click(ElementId),
    KeyDown { target: ElementId, key: KeyCode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Click,
    KeyDown(KeyCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Submit,
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    target: ElementId,
    kind: EventKind,
    action: Action,
}

impl Listener {
    fn matches(&self, event: &WidgetEvent) -> bool {
        match (*event, self.kind) {
            (WidgetEvent::Click(target), EventKind::Click) => target == self.target,
            (WidgetEvent::KeyDown { target, key }, EventKind::KeyDown(expected)) => {
                target == self.target && key == expected
            }
            _ => false,
        }
    }
}

/// Outcome of one outbound request, delivered back to the UI loop.
#[derive(Debug)]
pub struct Reply {
    pub question: String,
    pub result: ChatResult<ApiResponse>,
}

pub type ReplyReceiver = mpsc::UnboundedReceiver<Reply>;

pub struct ChatWidget {
    pub document: Document,
    pub logs: LogView,
    client: ChatClient,
    listeners: Vec<Listener>,
    replies: mpsc::UnboundedSender<Reply>,
}

impl ChatWidget {
    /// Builds the widget and registers its listeners: a click on the send
    /// button and Enter in the input field both submit. Replies from
    /// in-flight requests arrive on the returned receiver and must be fed
    /// back through [`ChatWidget::complete`].
    pub fn mount(client: ChatClient) -> (Self, ReplyReceiver) {
        let (replies, reply_rx) = mpsc::unbounded_channel();

        let listeners = vec![
            Listener {
                target: ElementId::SendButton,
                kind: EventKind::Click,
                action: Action::Submit,
            },
            Listener {
                target: ElementId::UserInput,
                kind: EventKind::KeyDown(KeyCode::Enter),
                action: Action::Submit,
            },
        ];

        let mut logs = LogView::new();
        logs.add(format!("Widget mounted, endpoint {}", client.endpoint()));
        info!("Chat widget mounted against {}", client.endpoint());

        let widget = Self {
            document: Document::new(),
            logs,
            client,
            listeners,
            replies,
        };

        (widget, reply_rx)
    }

    /// Runs every listener matching `event`. Returns whether any matched.
    pub fn handle_event(&mut self, event: &WidgetEvent) -> bool {
        let actions: Vec<Action> = self
            .listeners
            .iter()
            .filter(|listener| listener.matches(event))
            .map(|listener| listener.action)
            .collect();

        for action in &actions {
            match action {
                Action::Submit => {
                    self.submit();
                }
            }
        }

        !actions.is_empty()
    }

    /// Sends the current input. Whitespace-only input is ignored and leaves
    /// the field untouched.
    pub fn submit(&mut self) -> Option<JoinHandle<()>> {
        let question = self.document.user_input.value().trim().to_string();
        if question.is_empty() {
            return None;
        }

        self.append_message(Role::User, &question);
        self.append_message(Role::Assistant, PLACEHOLDER_TEXT);

        self.document.user_input.set_value("");

        Some(self.send_request(question))
    }

    fn send_request(&mut self, question: String) -> JoinHandle<()> {
        self.logs.add(format!("Sending question to {}", self.client.endpoint()));
        debug!("Posting question ({} chars)", question.chars().count());

        let client = self.client.clone();
        let replies = self.replies.clone();

        tokio::spawn(async move {
            let result = client.ask(&question).await;
            // Receiver gone means the UI has shut down.
            let _ = replies.send(Reply { question, result });
        })
    }

    /// Replaces the last assistant entry with the reply text, or with the
    /// fallback text when the request failed in any way.
    pub fn complete(&mut self, reply: Reply) {
        let text = match reply.result {
            Ok(response) => {
                self.logs.add(format!("Response Status: {}", response.status));
                response.content
            }
            Err(e) => {
                if let Some(status) = e.status() {
                    self.logs.add(format!("Response Status: {}", status));
                }
                error!("Request for {:?} failed: {}", reply.question, e);
                self.logs.add(format!("Error: {}", e));
                FALLBACK_TEXT.to_string()
            }
        };

        self.remove_last_assistant_message();
        self.append_message(Role::Assistant, text);
    }

    pub fn append_message(&mut self, role: Role, text: impl Into<String>) {
        let chat_box = &mut self.document.chat_box;
        chat_box.append_child(ChatMessage::new(role, text));
        chat_box.scroll_to_bottom();
    }

    pub fn remove_last_assistant_message(&mut self) {
        let chat_box = &mut self.document.chat_box;
        let last = chat_box
            .get_elements_by_class_name(&[MESSAGE_CLASS, ASSISTANT_CLASS])
            .map(|(index, _)| index)
            .last();

        if let Some(index) = last {
            chat_box.remove_child(index);
        }
    }

    /// True while any placeholder is present in the transcript.
    pub fn is_awaiting_reply(&self) -> bool {
        self.document
            .chat_box
            .messages()
            .iter()
            .any(ChatMessage::is_placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChatError;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn transcript(widget: &ChatWidget) -> Vec<(Role, String)> {
        widget
            .document
            .chat_box
            .messages()
            .iter()
            .map(|message| (message.role(), message.text().to_string()))
            .collect()
    }

    fn assistant_count(widget: &ChatWidget) -> usize {
        widget
            .document
            .chat_box
            .messages()
            .iter()
            .filter(|message| message.role() == Role::Assistant)
            .count()
    }

    async fn mock_chat(reply: serde_json::Value) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({ "question": "hello" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply))
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn mount_against(uri: &str) -> (ChatWidget, ReplyReceiver) {
        ChatWidget::mount(ChatClient::new(format!("{}/chat", uri), None).unwrap())
    }

    fn ok_reply(content: &str) -> Reply {
        Reply {
            question: "q".to_string(),
            result: Ok(ApiResponse {
                status: 200,
                content: content.to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_whitespace_input_is_ignored() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let (mut widget, mut replies) = mount_against(&mock_server.uri());
        widget.document.user_input.set_value("   \t ");

        assert!(widget.submit().is_none());
        assert!(widget.document.chat_box.is_empty());
        assert_eq!(widget.document.user_input.value(), "   \t ");
        assert!(replies.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submit_appends_user_and_placeholder() {
        let mock_server = mock_chat(json!({ "response": "Hi there" })).await;
        let (mut widget, mut replies) = mount_against(&mock_server.uri());
        widget.document.user_input.set_value("  hello  ");

        let handle = widget.submit().expect("request should be issued");

        assert_eq!(
            transcript(&widget),
            vec![
                (Role::User, "hello".to_string()),
                (Role::Assistant, "Thinking...".to_string()),
            ]
        );
        assert_eq!(widget.document.user_input.value(), "");
        assert!(widget.is_awaiting_reply());

        handle.await.unwrap();
        let reply = replies.recv().await.unwrap();
        assert_eq!(reply.question, "hello");
    }

    #[tokio::test]
    async fn test_successful_reply_replaces_placeholder() {
        let mock_server = mock_chat(json!({ "response": "Hi there" })).await;
        let (mut widget, mut replies) = mount_against(&mock_server.uri());
        widget.document.user_input.set_value("hello");

        widget.submit();
        let reply = replies.recv().await.unwrap();
        widget.complete(reply);

        assert_eq!(
            transcript(&widget),
            vec![
                (Role::User, "hello".to_string()),
                (Role::Assistant, "Hi there".to_string()),
            ]
        );
        assert_eq!(assistant_count(&widget), 1);
        assert!(!widget.is_awaiting_reply());
        assert!(widget.logs.last().unwrap().ends_with("Response Status: 200"));
    }

    #[tokio::test]
    async fn test_network_failure_shows_fallback() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let (mut widget, mut replies) = mount_against(&format!("http://127.0.0.1:{}", port));
        widget.document.user_input.set_value("hello");

        widget.submit();
        let reply = replies.recv().await.unwrap();
        assert!(reply.result.is_err());
        widget.complete(reply);

        assert_eq!(
            transcript(&widget),
            vec![
                (Role::User, "hello".to_string()),
                (Role::Assistant, "Sorry, something went wrong.".to_string()),
            ]
        );
        assert_eq!(widget.document.user_input.value(), "");
    }

    #[tokio::test]
    async fn test_undecodable_body_shows_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let (mut widget, mut replies) = mount_against(&mock_server.uri());
        widget.document.user_input.set_value("hello");
        widget.submit();
        widget.complete(replies.recv().await.unwrap());

        assert_eq!(
            transcript(&widget).last().unwrap(),
            &(Role::Assistant, "Sorry, something went wrong.".to_string())
        );
        assert_eq!(assistant_count(&widget), 1);

        let entries: Vec<&String> = widget.logs.entries.iter().rev().take(2).collect();
        assert!(entries[1].ends_with("Response Status: 500"));
        assert!(entries[0].contains("Error: Response decoding error (status 500)"));
    }

    #[tokio::test]
    async fn test_click_and_enter_listeners_submit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "ok" })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let (mut widget, mut replies) = mount_against(&mock_server.uri());

        widget.document.user_input.set_value("first");
        assert!(widget.handle_event(&WidgetEvent::Click(ElementId::SendButton)));

        widget.document.user_input.set_value("second");
        assert!(widget.handle_event(&WidgetEvent::KeyDown {
            target: ElementId::UserInput,
            key: KeyCode::Enter,
        }));

        assert_eq!(widget.document.chat_box.len(), 4);
        replies.recv().await.unwrap();
        replies.recv().await.unwrap();
    }

    #[tokio::test]
    async fn test_unregistered_events_are_ignored() {
        let (mut widget, _replies) = mount_against("http://127.0.0.1:9");
        widget.document.user_input.set_value("hello");

        assert!(!widget.handle_event(&WidgetEvent::Click(ElementId::ChatBox)));
        assert!(!widget.handle_event(&WidgetEvent::KeyDown {
            target: ElementId::UserInput,
            key: KeyCode::Tab,
        }));
        assert!(!widget.handle_event(&WidgetEvent::KeyDown {
            target: ElementId::SendButton,
            key: KeyCode::Enter,
        }));

        assert!(widget.document.chat_box.is_empty());
        assert_eq!(widget.document.user_input.value(), "hello");
    }

    #[tokio::test]
    async fn test_append_scrolls_to_newest() {
        let (mut widget, _replies) = mount_against("http://127.0.0.1:9");
        widget.document.chat_box.set_viewport(30, 5);

        for i in 0..10 {
            widget.append_message(Role::User, format!("line {}", i));
            let chat_box = &widget.document.chat_box;
            assert_eq!(chat_box.scroll_top(), chat_box.max_scroll());
        }
        assert!(widget.document.chat_box.max_scroll() > 0);
    }

    #[tokio::test]
    async fn test_remove_last_assistant_without_assistant_is_noop() {
        let (mut widget, _replies) = mount_against("http://127.0.0.1:9");
        widget.append_message(Role::User, "hello");

        widget.remove_last_assistant_message();

        assert_eq!(transcript(&widget), vec![(Role::User, "hello".to_string())]);
    }

    #[tokio::test]
    async fn test_remove_last_assistant_skips_trailing_user() {
        let (mut widget, _replies) = mount_against("http://127.0.0.1:9");
        widget.append_message(Role::Assistant, "a");
        widget.append_message(Role::User, "u");

        widget.remove_last_assistant_message();

        assert_eq!(transcript(&widget), vec![(Role::User, "u".to_string())]);
    }

    #[tokio::test]
    async fn test_overlapping_sends_leave_stale_placeholder() {
        let (mut widget, _replies) = mount_against("http://127.0.0.1:9");

        // Two exchanges in flight before either reply lands.
        widget.append_message(Role::User, "a");
        widget.append_message(Role::Assistant, PLACEHOLDER_TEXT);
        widget.append_message(Role::User, "b");
        widget.append_message(Role::Assistant, PLACEHOLDER_TEXT);

        widget.complete(ok_reply("reply a"));
        widget.complete(Reply {
            question: "b".to_string(),
            result: Err(ChatError::api_error("Request failed")),
        });

        assert_eq!(
            transcript(&widget),
            vec![
                (Role::User, "a".to_string()),
                (Role::Assistant, "Thinking...".to_string()),
                (Role::User, "b".to_string()),
                (Role::Assistant, "Sorry, something went wrong.".to_string()),
            ]
        );
        assert!(widget.is_awaiting_reply());
    }
}
