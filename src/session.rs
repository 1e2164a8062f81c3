use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One conversation turn, held in memory for the lifetime of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// The pending quiz awaiting an answer. At most one exists per session.
///
/// The counter variant stores only the generated question; the time-delay
/// variant also keeps the original query as the quiz topic so the examiner
/// prompt can reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveQuiz {
    pub question: String,
    pub topic: Option<String>,
}

impl ActiveQuiz {
    pub fn question_only(question: String) -> Self {
        Self {
            question,
            topic: None,
        }
    }

    pub fn with_topic(question: String, topic: String) -> Self {
        Self {
            question,
            topic: Some(topic),
        }
    }
}

/// Ephemeral conversation state for one session. Lost on restart.
#[derive(Debug, Default)]
pub struct SessionState {
    pub chat: Vec<ChatTurn>,
    pub active_quiz: Option<ActiveQuiz>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: String) {
        self.chat.push(ChatTurn {
            role: Role::User,
            content,
        });
    }

    pub fn push_assistant(&mut self, content: String) {
        self.chat.push(ChatTurn {
            role: Role::Assistant,
            content,
        });
    }
}
