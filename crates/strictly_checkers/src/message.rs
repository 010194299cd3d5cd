//! The user-visible result of an engine operation.

use super::action::{MoveError, Notice};
use serde::{Deserialize, Serialize};

/// Whether a message reports success or a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    /// The operation succeeded.
    Info,
    /// The operation was rejected.
    Error,
}

/// `{"type": "INFO" | "ERROR", "text": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Success or failure.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Text shown to the player.
    pub text: String,
}

impl Message {
    /// An informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Info,
            text: text.into(),
        }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Error,
            text: text.into(),
        }
    }

    /// True for informational messages.
    pub fn is_successful(&self) -> bool {
        self.kind == MessageType::Info
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text)
    }
}

impl From<Notice> for Message {
    fn from(notice: Notice) -> Self {
        Message::info(notice.to_string())
    }
}

impl From<MoveError> for Message {
    fn from(err: MoveError) -> Self {
        Message::error(err.to_string())
    }
}

impl From<Result<Notice, MoveError>> for Message {
    fn from(result: Result<Notice, MoveError>) -> Self {
        match result {
            Ok(notice) => notice.into(),
            Err(err) => err.into(),
        }
    }
}
