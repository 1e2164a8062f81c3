use crate::engine::{ChatEngine, CompletionClient};
use crate::error::BotError;
use crate::session::SessionState;
use crate::store::{HistoryDoc, InteractionStore};

/// Plain chat that persists every (query, response) pair to the on-disk log
#[derive(Debug)]
pub struct HistoryChat<C: CompletionClient> {
    engine: ChatEngine<C>,
    store: InteractionStore,
}

impl<C: CompletionClient> HistoryChat<C> {
    pub fn new(client: C, store: InteractionStore) -> Self {
        Self {
            engine: ChatEngine::new(client),
            store,
        }
    }

    pub fn session(&self) -> &SessionState {
        self.engine.session()
    }

    pub fn store(&self) -> &InteractionStore {
        &self.store
    }

    /// One chat round trip. The pair is persisted only once the reply
    /// arrived; a failed round trip stores nothing.
    pub async fn send(&mut self, input: String) -> Result<String, BotError> {
        let reply = self.engine.send(input.clone()).await?;
        self.store.append(input, Some(reply.clone())).await?;
        Ok(reply)
    }

    /// The persisted log, for the saved-history view
    pub async fn saved_history(&self) -> HistoryDoc {
        self.store.load().await
    }
}
