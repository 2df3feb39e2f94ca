use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,
    #[error("request to the review model failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("review model responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode review model response: {0}")]
    Decode(String),
    #[error("review model returned no text")]
    EmptyResponse,
}
