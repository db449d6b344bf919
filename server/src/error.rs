//! Request-level failures and their HTTP mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

/// Every way a game command can be rejected. Validation always runs before
/// mutation, so a rejected command leaves the state untouched.
///
/// A food search that comes back empty-handed is a normal outcome, not an
/// error; see [`crate::game::logic::FoodSearch`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Pet not found")]
    PetNotFound(u64),

    /// A request body that names no pet at all.
    #[error("Pet not found")]
    MissingPetId,

    #[error("Pet not found in shop")]
    UnknownType(String),

    #[error("Energy tidak cukup!")]
    InsufficientEnergy { have: u32, need: u32 },

    #[error("Coin tidak cukup!")]
    InsufficientFunds { have: u32, need: u32 },

    #[error("Pet tidak bisa melawan dirinya sendiri!")]
    InvalidPair(u64),

    /// Body that is not valid JSON or has wrongly-typed fields.
    #[error("{0}")]
    MalformedBody(String),

    #[error("game session is not running")]
    SessionClosed,
}

impl ResponseError for GameError {
    fn status_code(&self) -> StatusCode {
        match self {
            GameError::PetNotFound(_) | GameError::MissingPetId | GameError::UnknownType(_) => {
                StatusCode::NOT_FOUND
            }
            GameError::InsufficientEnergy { .. }
            | GameError::InsufficientFunds { .. }
            | GameError::InvalidPair(_)
            | GameError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GameError::SessionClosed => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::debug!("rejected: {self:?}");
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
