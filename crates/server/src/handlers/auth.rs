//! # Authentication Handlers
//!
//! Registration and login.

use auth::{
    hash_password, issue_token, secrecy::ExposeSecret, secrecy::SecretString,
    validate_password_policy, verify_password,
};
use axum::{http::StatusCode, Json};
use entity::users::{ActiveModel, Column, Entity as UsersEntity};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::auth::{AuthSuccessResponse, LoginRequest, PublicUser, RegisterRequest},
    AppState,
};

/// Inner handler for user registration.
///
/// The password is checked against the complexity policy before anything is
/// hashed or persisted; a policy violation is a 400, a taken name a 409.
pub async fn register_handler_inner(
    state: &AppState,
    req: RegisterRequest,
) -> Result<(StatusCode, Json<AuthSuccessResponse>)> {
    req.validate().map_err(|e| AppError::validation(e))?;

    if let Err(violations) = validate_password_policy(&req.password) {
        let messages: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        return Err(AppError::validation(messages.join(", ")));
    }

    let existing = UsersEntity::find()
        .filter(Column::Name.eq(&req.name))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("Name already taken"));
    }

    let password = SecretString::from(req.password);
    let password_hash = hash_password(&password, None)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let user = ActiveModel {
        name: Set(req.name),
        password_hash: Set(password_hash.expose_secret().to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(user_id = %user.user_id, name = %user.name, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthSuccessResponse {
            success: true,
            token: None,
            user: PublicUser {
                id: user.user_id,
                name: user.name,
            },
        }),
    ))
}

/// Inner handler for login.
///
/// Unknown name and wrong password produce the identical 401 so a caller
/// cannot probe which of the two was wrong.
pub async fn login_handler_inner(
    state: &AppState,
    req: LoginRequest,
) -> Result<Json<AuthSuccessResponse>> {
    req.validate().map_err(|e| AppError::validation(e))?;

    let user = UsersEntity::find()
        .filter(Column::Name.eq(&req.name))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid name or password"))?;

    let password = SecretString::from(req.password);
    verify_password(&password, &user.password_hash)
        .map_err(|_| AppError::unauthorized("Invalid name or password"))?;

    let token = issue_token(&state.jwt_config, user.user_id, &user.name)
        .map_err(|e| AppError::internal(format!("Failed to issue token: {}", e)))?;

    info!(user_id = %user.user_id, name = %user.name, "User logged in");

    Ok(Json(AuthSuccessResponse {
        success: true,
        token: Some(token),
        user: PublicUser {
            id: user.user_id,
            name: user.name,
        },
    }))
}
