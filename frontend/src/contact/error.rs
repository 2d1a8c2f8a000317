use thiserror::Error;

/// Everything that can go wrong between pressing "Send Message" and the
/// backend accepting it. The page shows all of these as the same error
/// banner; the variants only matter for the console log.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("required fields are missing or invalid: {0}")]
    Incomplete(#[from] validator::ValidationErrors),

    #[error("a submission is already in flight")]
    AlreadySending,

    #[error("could not build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("server did not accept the message")]
    Rejected,
}
