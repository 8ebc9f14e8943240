//! # Game Result Handlers
//!
//! Public score listings and the ownership-gated submission path.

use auth::owns_resource;
use axum::{http::StatusCode, Json};
use entity::game_results::{ActiveModel, Column, Entity as GameResultsEntity};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::game_results::{
        GameResultListResponse, GameResultResponse, SubmitResultRequest, SubmitResultResponse,
    },
    middleware::auth::CurrentUser,
    AppState,
};

/// List all game results, newest first.
pub async fn list_results_handler(state: &AppState) -> Result<Json<GameResultListResponse>> {
    let results = GameResultsEntity::find()
        .order_by_desc(Column::CreatedAt)
        .all(&state.db)
        .await?
        .into_iter()
        .map(GameResultResponse::from)
        .collect();

    Ok(Json(GameResultListResponse {
        success: true,
        results,
    }))
}

/// List the authenticated user's own results, newest first.
pub async fn my_results_handler(
    state: &AppState,
    current: CurrentUser,
) -> Result<Json<GameResultListResponse>> {
    let results = GameResultsEntity::find()
        .filter(Column::UserId.eq(current.id))
        .order_by_desc(Column::CreatedAt)
        .all(&state.db)
        .await?
        .into_iter()
        .map(GameResultResponse::from)
        .collect();

    Ok(Json(GameResultListResponse {
        success: true,
        results,
    }))
}

/// Store a new game result for the authenticated user.
///
/// The declared owner must be the token subject; the check runs before any
/// store access so a forbidden request never touches the database.
pub async fn submit_result_handler(
    state: &AppState,
    current: CurrentUser,
    req: SubmitResultRequest,
) -> Result<(StatusCode, Json<SubmitResultResponse>)> {
    req.validate().map_err(|e| AppError::validation(e))?;

    if !owns_resource(current.id, req.user_id) {
        return Err(AppError::forbidden(
            "Cannot submit results for another user",
        ));
    }

    let result = ActiveModel {
        user_id: Set(req.user_id),
        total_score: Set(req.total_score),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(
        user_id = %result.user_id,
        result_id = %result.result_id,
        total_score = %result.total_score,
        "Game result saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResultResponse {
            success: true,
            result: GameResultResponse::from(result),
        }),
    ))
}
