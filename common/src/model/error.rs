use thiserror::Error;

/// Rejections raised while ingesting place data from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Neither the key nor the id matched a registry entry.
    #[error("unknown place category: {0}")]
    UnknownCategory(String),
    /// Popularity scores are limited to 1..=5.
    #[error("popularity score out of range: {0}")]
    ScoreOutOfRange(u8),
}
