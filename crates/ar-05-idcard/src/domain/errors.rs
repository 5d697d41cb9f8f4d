//! Error types for credential artifact issuance.

use crate::domain::card::CardStatus;
use ar_01_sequence::SequenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IssueError {
    /// No card with this id exists
    #[error("Card not found: {0}")]
    CardNotFound(String),

    /// The renderer is down. The card record is persisted; retry with
    /// `regenerate` once rendering is back.
    #[error("Rendering unavailable for card {card_id}")]
    RenderingUnavailable { card_id: String },

    /// The card's current status does not permit the requested transition
    #[error("Card {card_id} is {status} and cannot take this transition")]
    InvalidState { card_id: String, status: CardStatus },

    /// Sequence reservation failed, nothing was persisted
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Storage-layer fault, always surfaced
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Errors raised by a `CardStore` backend.
#[derive(Debug, Error)]
pub enum CardStoreError {
    #[error("Card id already exists: {0}")]
    DuplicateCardId(String),

    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl From<CardStoreError> for IssueError {
    fn from(err: CardStoreError) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Errors raised by a `RenderingService`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Renderer unavailable: {0}")]
    Unavailable(String),
}
