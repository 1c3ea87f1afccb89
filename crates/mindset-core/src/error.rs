use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid rating {value} for '{statement_id}': expected 1..=5")]
    InvalidRating { statement_id: String, value: i64 },

    #[error("malformed answer '{0}': expected <statement_id>=<rating>")]
    MalformedAnswer(String),
}

/// A raw value that cannot be turned into a [`Rating`](crate::models::answer::Rating).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside 1..=5")]
pub struct RatingOutOfRange(pub i64);
