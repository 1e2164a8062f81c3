use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;

use crate::store::HistoryDoc;

/// Number of user messages between counter-variant quizzes
pub const QUIZ_MESSAGE_INTERVAL: usize = 5;

/// Wall-clock age at which a stored query becomes quiz-eligible
pub fn quiz_delay() -> Duration {
    Duration::minutes(10)
}

/// Message-count quiz scheduler.
///
/// Fires when the counter sits at exactly [`QUIZ_MESSAGE_INTERVAL`]. The
/// caller resets it only after a quiz was generated, so a failed generation
/// leaves the scheduler due.
#[derive(Debug, Default)]
pub struct CounterScheduler {
    counter: usize,
    recent_queries: Vec<String>,
}

impl CounterScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a user query toward the next quiz
    pub fn record_query(&mut self, query: String) {
        self.counter += 1;
        self.recent_queries.push(query);
    }

    pub fn is_due(&self) -> bool {
        self.counter == QUIZ_MESSAGE_INTERVAL
    }

    /// Pick the quiz topic uniformly at random from the buffered queries
    pub fn pick_topic(&self) -> Option<String> {
        self.recent_queries
            .choose(&mut rand::thread_rng())
            .cloned()
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn recent_queries(&self) -> &[String] {
        &self.recent_queries
    }

    /// Clear the counter and buffer after a quiz fired
    pub fn reset(&mut self) {
        self.counter = 0;
        self.recent_queries.clear();
    }
}

/// Index of the first record that is not yet quizzed and at least `delay`
/// old, scanning in stored order. The oldest eligible record wins and one
/// call surfaces at most one candidate.
pub fn first_due(doc: &HistoryDoc, now: NaiveDateTime, delay: Duration) -> Option<usize> {
    doc.interactions
        .iter()
        .position(|item| !item.quizzed && now.signed_duration_since(item.time) >= delay)
}
