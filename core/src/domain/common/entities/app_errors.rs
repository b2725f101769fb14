use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Required input was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The third-party site could not be reached or answered with a non-success status.
    #[error("Failed to fetch from EWG website")]
    UpstreamFetch(String),

    #[error("No product found")]
    NotFound,

    /// The page had a listing but the expected fields were missing.
    #[error("Failed to parse product data")]
    Parse,

    #[error("Failed to process product data: {0}")]
    Internal(String),
}
