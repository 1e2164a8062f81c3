pub mod bots;
pub mod clients;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompts;
pub mod scheduler;
pub mod session;
pub mod store;

// Convenient re-exports
pub use bots::{CounterBot, HistoryChat, TimeBot};
pub use engine::{ChatEngine, CompletionClient};
pub use session::{ActiveQuiz, ChatTurn, Role, SessionState};
pub use store::{HistoryDoc, Interaction, InteractionStore};
