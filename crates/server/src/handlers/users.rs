//! # User Handlers
//!
//! Listings, profile lookup and account deletion.

use auth::owns_resource;
use axum::Json;
use entity::users::Entity as UsersEntity;
use error::{AppError, Result};
use sea_orm::{EntityTrait, QueryOrder};
use tracing::info;

use crate::{
    dto::{
        auth::SuccessResponse,
        users::{UserListResponse, UserResponse},
    },
    middleware::auth::CurrentUser,
    AppState,
};

/// List all registered users. Password hashes never leave the entity layer.
pub async fn list_users_handler(state: &AppState) -> Result<Json<UserListResponse>> {
    let users = UsersEntity::find()
        .order_by_asc(entity::users::Column::UserId)
        .all(&state.db)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(UserListResponse {
        success: true,
        users,
    }))
}

/// Look up a single user by identifier.
pub async fn get_user_handler(state: &AppState, user_id: i64) -> Result<Json<UserResponse>> {
    let user = UsersEntity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user_id)))?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user account.
///
/// A client may only delete its own account: the path identifier must match
/// the token subject. The ownership check runs before any store access.
pub async fn delete_user_handler(
    state: &AppState,
    current: CurrentUser,
    user_id: i64,
) -> Result<Json<SuccessResponse>> {
    if !owns_resource(current.id, user_id) {
        return Err(AppError::forbidden("You can only delete your own account"));
    }

    let outcome = UsersEntity::delete_by_id(user_id).exec(&state.db).await?;
    if outcome.rows_affected == 0 {
        return Err(AppError::not_found(format!("User {} not found", user_id)));
    }

    info!(user_id = %user_id, "User deleted");

    Ok(Json(SuccessResponse {
        success: true,
        message: "User deleted".to_string(),
    }))
}
