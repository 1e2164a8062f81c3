use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::engine::CompletionClient;
use crate::error::AIError;

/// Scripted client for testing: hands out queued replies in order and
/// records every prompt it was asked. Clones share the same script and log,
/// so a test can keep a handle while a bot owns the client.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClient {
    replies: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue replies to hand out in call order
    pub fn with_replies(replies: &[&str]) -> Self {
        let client = Self::new();
        for reply in replies {
            client.push_reply(reply);
        }
        client
    }

    pub fn push_reply(&self, reply: &str) {
        self.replies.lock().unwrap().push_back(reply.to_string());
    }

    /// Every prompt seen so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn generate(&self, prompt: String) -> Result<String, AIError> {
        self.prompts.lock().unwrap().push(prompt);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AIError::Mock("Script exhausted".to_string()))
    }
}
