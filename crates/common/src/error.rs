use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Candle window is empty, too short, or contains malformed data.
    /// The caller skips the symbol for this cycle.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Exchange API error: {0}")]
    Exchange(String),

    #[error("News API error: {0}")]
    News(String),

    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Messaging error: {0}")]
    Messaging(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
