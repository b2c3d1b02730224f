use serde::{Deserialize, Serialize};
use thiserror::Error;
use warp::http::StatusCode;

use crate::engine::definitions::{Board, Player, Stores, Suggestion, Variant};

#[allow(unused_imports)]
pub use log::{debug, error, info, trace, warn};

pub const SERVICE_NAME: &str = "gebeta-hint-backend";
/// Reported with every suggestion, not derived from the score.
pub const CONFIDENCE: f64 = 0.8;
pub const MAX_BODY_BYTES: u64 = 16 * 1024;
pub const REQUIRED_FIELDS: [&str; 3] = ["board", "currentPlayer", "variant"];

/// Validated `/suggest-move` payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintRequest {
    pub board: Board,
    pub player: Player,
    pub variant: Variant,
    pub stores: Stores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub suggested_hole: usize,
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid board structure")]
    InvalidBoard,
    #[error("Invalid current player")]
    InvalidPlayer,
    #[error("Invalid game variant: {0}")]
    InvalidVariant(String),
    #[error("Invalid stores configuration")]
    InvalidStores,
    #[error("No valid moves available")]
    NoValidMoves,
    #[error("Internal server error: {0}")]
    Internal(String),
}

// ---
// Implementation block
// ---

impl HintError {
    pub fn status(&self) -> StatusCode {
        match self {
            HintError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<&HintError> for ErrorBody {
    fn from(value: &HintError) -> Self {
        ErrorBody {
            error: value.to_string(),
        }
    }
}

impl From<Suggestion> for HintResponse {
    fn from(value: Suggestion) -> Self {
        HintResponse {
            suggested_hole: value.hole,
            confidence: CONFIDENCE,
            reasoning: value.reasoning(),
        }
    }
}

impl HealthStatus {
    pub fn healthy() -> Self {
        HealthStatus {
            status: "healthy".to_owned(),
            service: SERVICE_NAME.to_owned(),
        }
    }
}
