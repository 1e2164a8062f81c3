use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("AI error: {0}")]
    Ai(#[from] AIError),
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("AI error: {0}")]
    Ai(#[from] AIError),
    #[error("No active quiz to evaluate")]
    NoActiveQuiz,
}

#[derive(Error, Debug)]
pub enum AIError {
    #[error("Gemini API error: {0}")]
    Gemini(#[from] GeminiError),
    #[error("Mock error: {0}")]
    Mock(String),
}

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Authentication failed")]
    Authentication,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found. Check your .env file.")]
    MissingKey(&'static str),
}
