//! Message view: the state behind the board screen and the two flows that
//! change it.
//!
//! # Design
//! `MessageView` owns its `RequestClient` and a `ViewState`. `load` runs the
//! initial health-then-messages sequence once; `submit` posts the trimmed
//! draft. Both take `&mut self`, so the borrow checker serializes them for a
//! single view. Front ends drive the view and print `render()`; a submission
//! failure is handed back as `SubmitOutcome::Failed` for the front end to
//! show as a notification, leaving the state as it was.

use std::fmt;

use crate::client::RequestClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Health, Message, NewMessage};

pub const HEALTH_PATH: &str = "/api/health";
pub const MESSAGES_PATH: &str = "/api/messages";

const DRAFT_PLACEHOLDER: &str = "Type a message...";

/// Connection status shown above the message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Connecting,
    Ready { health: Health, base_url: String },
    Failed { reason: String },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Connecting => write!(f, "Connecting…"),
            Status::Ready { health, base_url } => {
                let status = health.status.as_deref().unwrap_or("unknown");
                write!(f, "API: {status} ({base_url})")
            }
            Status::Failed { reason } => write!(f, "Error: {reason}"),
        }
    }
}

/// Everything the screen shows. Lives as long as the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    messages: Vec<Message>,
    draft: String,
    status: Status,
}

impl ViewState {
    /// Messages in arrival order: the initial load, then each sent message.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn status(&self) -> &Status {
        &self.status
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            status: Status::Connecting,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Messages")?;
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        if self.draft.is_empty() {
            writeln!(f, "> {DRAFT_PLACEHOLDER}  [Send]")?;
        } else {
            writeln!(f, "> {}  [Send]", self.draft)?;
        }
        writeln!(f)?;
        for message in &self.messages {
            writeln!(f, "#{} — {}", message.id, message.text)?;
        }
        Ok(())
    }
}

/// Result of a `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed draft was empty; nothing was sent.
    Skipped,
    /// The backend accepted the message and it was appended.
    Sent(Message),
    /// The request failed; messages and draft are untouched.
    Failed(ApiError),
}

pub struct MessageView<T> {
    client: RequestClient<T>,
    state: ViewState,
    loaded: bool,
}

impl<T: Transport> MessageView<T> {
    pub fn new(client: RequestClient<T>) -> Self {
        Self {
            client,
            state: ViewState::default(),
            loaded: false,
        }
    }

    pub fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    /// Initial load: health, then the message list. Runs at most once; the
    /// first failure ends the sequence and becomes `Status::Failed`.
    pub async fn load(&mut self) {
        if self.loaded {
            tracing::debug!("initial load already ran");
            return;
        }
        self.loaded = true;

        if let Err(err) = self.fetch_initial().await {
            tracing::warn!(error = %err, "initial load failed");
            self.state.status = Status::Failed {
                reason: err.message().to_string(),
            };
        }
    }

    async fn fetch_initial(&mut self) -> Result<(), ApiError> {
        let health = self.client.get(HEALTH_PATH).await?;
        self.state.status = Status::Ready {
            health: Health::from_value(&health),
            base_url: self.client.base_url().to_string(),
        };

        let messages: Vec<Message> = self.client.get_as(MESSAGES_PATH).await?;
        tracing::debug!(count = messages.len(), "messages loaded");
        self.state.messages = messages;
        Ok(())
    }

    /// Send the trimmed draft. Blank drafts are skipped without a request.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let text = self.state.draft.trim();
        if text.is_empty() {
            return SubmitOutcome::Skipped;
        }
        let input = NewMessage {
            text: text.to_string(),
        };

        match self
            .client
            .post_as::<_, Message>(MESSAGES_PATH, &input)
            .await
        {
            Ok(created) => {
                tracing::info!(id = created.id, "message sent");
                self.state.messages.push(created.clone());
                self.state.draft.clear();
                SubmitOutcome::Sent(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "message submit failed");
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub fn render(&self) -> String {
        self.state.to_string()
    }
}
