use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("rating {0} is out of range (expected 1 through 5)")]
    RatingOutOfRange(u8),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),
}
