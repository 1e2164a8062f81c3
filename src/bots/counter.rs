use tracing::info;

use crate::engine::{ChatEngine, CompletionClient};
use crate::error::BotError;
use crate::scheduler::CounterScheduler;
use crate::session::{ActiveQuiz, SessionState};

/// Chat that turns one of every five user questions into a quiz.
///
/// Nothing is persisted; the counter and the query buffer live and die with
/// the session.
#[derive(Debug)]
pub struct CounterBot<C: CompletionClient> {
    engine: ChatEngine<C>,
    scheduler: CounterScheduler,
}

impl<C: CompletionClient> CounterBot<C> {
    pub fn new(client: C) -> Self {
        Self {
            engine: ChatEngine::new(client),
            scheduler: CounterScheduler::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        self.engine.session()
    }

    pub fn active_quiz(&self) -> Option<&ActiveQuiz> {
        self.engine.session().active_quiz.as_ref()
    }

    pub fn scheduler(&self) -> &CounterScheduler {
        &self.scheduler
    }

    /// One chat round trip. The query counts toward the schedule before the
    /// reply is requested, so a failed reply still moves the counter. On the
    /// fifth message a quiz is generated from one of the five buffered
    /// queries, picked at random, and the schedule resets.
    pub async fn send(&mut self, input: String) -> Result<String, BotError> {
        self.scheduler.record_query(input.clone());
        let reply = self.engine.send(input).await?;

        if self.scheduler.is_due() {
            if let Some(topic) = self.scheduler.pick_topic() {
                let question = self.engine.quiz_question_for(&topic).await?;
                info!(counter = self.scheduler.counter(), "Quiz fired after message interval");
                self.engine.session_mut().active_quiz = Some(ActiveQuiz::question_only(question));
                self.scheduler.reset();
            }
        }

        Ok(reply)
    }

    /// Grade the pending quiz; the verdict comes back verbatim and the quiz
    /// is cleared.
    pub async fn answer_quiz(&mut self, answer: &str) -> Result<String, BotError> {
        Ok(self.engine.evaluate_answer(answer).await?)
    }
}
