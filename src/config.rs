use std::env;

use crate::error::ConfigError;

/// Trait for types that can retrieve their configuration key from environment variables
pub trait KeyFromEnv {
    /// The environment variable name for this client's API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking the .env file first, then environment variables
    fn find_key() -> Option<String> {
        // First try to load .env file (silently fail if not found)
        let _ = dotenvy::dotenv();

        // Try to get from environment
        env::var(Self::KEY_NAME).ok()
    }

    /// Find the API key or fail with a user-visible startup error
    fn require_key() -> Result<String, ConfigError> {
        Self::find_key().ok_or(ConfigError::MissingKey(Self::KEY_NAME))
    }
}
