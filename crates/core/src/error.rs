#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Image could not be decoded: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
