//! Game result request/response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for submitting a game result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct SubmitResultRequest {
    /// Owner of the result; must match the authenticated subject
    pub user_id: i64,

    /// Final score of the play session
    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub total_score: i64,
}

/// A single stored game result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResultResponse {
    /// Unique result identifier
    pub result_id: i64,
    /// Owning user
    pub user_id: i64,
    /// Score
    pub total_score: i64,
    /// Submission timestamp (RFC 3339)
    pub created_at: String,
}

impl From<entity::game_results::Model> for GameResultResponse {
    fn from(result: entity::game_results::Model) -> Self {
        Self {
            result_id: result.result_id,
            user_id: result.user_id,
            total_score: result.total_score,
            created_at: result.created_at.to_rfc3339(),
        }
    }
}

/// Response for result listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResultListResponse {
    /// Indicates operation success
    pub success: bool,
    /// Stored results, newest first
    pub results: Vec<GameResultResponse>,
}

/// Response after storing a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResultResponse {
    /// Indicates operation success
    pub success: bool,
    /// The stored result
    pub result: GameResultResponse,
}
