use chrono::Local;
use tracing::info;

use crate::engine::{ChatEngine, CompletionClient};
use crate::error::BotError;
use crate::scheduler::{first_due, quiz_delay};
use crate::session::{ActiveQuiz, SessionState};
use crate::store::InteractionStore;

/// Chat that quizzes a question back ten minutes after it was asked.
///
/// Queries are persisted without their replies; eligibility is re-checked
/// against the file on every refresh cycle.
#[derive(Debug)]
pub struct TimeBot<C: CompletionClient> {
    engine: ChatEngine<C>,
    store: InteractionStore,
}

impl<C: CompletionClient> TimeBot<C> {
    pub fn new(client: C, store: InteractionStore) -> Self {
        Self {
            engine: ChatEngine::new(client),
            store,
        }
    }

    pub fn session(&self) -> &SessionState {
        self.engine.session()
    }

    pub fn active_quiz(&self) -> Option<&ActiveQuiz> {
        self.engine.session().active_quiz.as_ref()
    }

    pub fn store(&self) -> &InteractionStore {
        &self.store
    }

    /// One chat round trip. The query alone is persisted once the reply
    /// arrived, stamped with the current time and not yet quizzed.
    pub async fn send(&mut self, input: String) -> Result<String, BotError> {
        let reply = self.engine.send(input.clone()).await?;
        self.store.append(input, None).await?;
        Ok(reply)
    }

    /// Scan the persisted log for the oldest query past the delay that has
    /// not been quizzed yet. At most one quiz fires per cycle; the consumed
    /// record is marked and persisted before the quiz goes live. A pending
    /// quiz left unanswered is replaced when the next record comes due.
    ///
    /// Returns whether a quiz fired this cycle.
    pub async fn check_due_quiz(&mut self) -> Result<bool, BotError> {
        let mut doc = self.store.load().await;
        let now = Local::now().naive_local();

        let index = match first_due(&doc, now, quiz_delay()) {
            Some(index) => index,
            None => return Ok(false),
        };

        let topic = doc.interactions[index].query.clone();
        let question = self.engine.quiz_question_for(&topic).await?;

        doc.interactions[index].quizzed = true;
        self.store.save(&doc).await?;
        info!(index, "Quiz fired after time delay");

        self.engine.session_mut().active_quiz = Some(ActiveQuiz::with_topic(question, topic));
        Ok(true)
    }

    /// Grade the pending quiz; the verdict comes back verbatim and the quiz
    /// is cleared.
    pub async fn answer_quiz(&mut self, answer: &str) -> Result<String, BotError> {
        Ok(self.engine.evaluate_answer(answer).await?)
    }
}
