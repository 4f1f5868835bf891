use reviewbot_aiapi_interface::AiError;

#[derive(Debug, thiserror::Error)]
pub enum GoogleAiError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Model returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid model response: {message}")]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for GoogleAiError {
    fn from(e: reqwest::Error) -> Self {
        GoogleAiError::HttpError { source: e }
    }
}

impl From<GoogleAiError> for AiError {
    fn from(e: GoogleAiError) -> Self {
        AiError::ImplementationError { source: e.into() }
    }
}
