use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong talking to the chatbot endpoint.
#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("Chatbot request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chatbot returned {0}: {1}")]
    Status(StatusCode, String),

    #[error("Malformed chatbot payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please choose a preferred date")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
