//! Conversation engine: owns the session state and the quiz ask/evaluate
//! round trips shared by every front-end variant.

use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{debug, info, instrument};

use crate::error::{AIError, EngineError};
use crate::prompts;
use crate::session::SessionState;

#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    /// Send one prompt to the model and return the generated text
    async fn generate(&self, prompt: String) -> Result<String, AIError>;
}

/// Chat engine that wraps a CompletionClient and the per-session
/// conversation state. One engine per session; nothing here is persisted.
#[derive(Debug)]
pub struct ChatEngine<C: CompletionClient> {
    client: C,
    session: SessionState,
}

impl<C: CompletionClient> ChatEngine<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            session: SessionState::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Record a user turn, fetch the model reply, record the assistant turn.
    ///
    /// Only the new input is sent to the model; the session transcript is
    /// display state, not model context. The user turn stays recorded even
    /// when the round trip fails.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub async fn send(&mut self, input: String) -> Result<String, AIError> {
        self.session.push_user(input.clone());

        let reply = self.client.generate(input).await?;
        debug!(reply_len = reply.len(), "Received model reply");

        self.session.push_assistant(reply.clone());
        Ok(reply)
    }

    /// Generate a quiz question about a previously asked topic
    #[instrument(skip(self, topic), fields(topic_len = topic.len()))]
    pub async fn quiz_question_for(&self, topic: &str) -> Result<String, AIError> {
        self.client.generate(prompts::quiz_prompt(topic)).await
    }

    /// Grade the submitted answer against the pending quiz.
    ///
    /// The verdict is returned verbatim; the `Correct:`/`Incorrect:` prefix
    /// convention is not enforced. The quiz is cleared only after a verdict
    /// was produced, so a failed round trip leaves it pending.
    #[instrument(skip(self, answer), fields(answer_len = answer.len()))]
    pub async fn evaluate_answer(&mut self, answer: &str) -> Result<String, EngineError> {
        let prompt = match &self.session.active_quiz {
            Some(quiz) => prompts::evaluation_prompt(quiz, answer),
            None => return Err(EngineError::NoActiveQuiz),
        };

        let verdict = self.client.generate(prompt).await?;
        info!(verdict_len = verdict.len(), "Quiz evaluated");

        self.session.active_quiz = None;
        Ok(verdict)
    }
}
