//! # API Router Configuration
//!
//! Route wiring: public endpoints (registration, login, read-only listings,
//! profile lookup, health) and protected endpoints behind the
//! authentication middleware.

use axum::{
    extract::{Extension, Path, State as AxumState},
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use error::Result;

use crate::{middleware::auth::CurrentUser, AppState};

/// Creates the API router with all routes.
pub fn create_router(state: AppState) -> Router {
    // Subject-scoped writes and listings require authentication
    let protected_routes = Router::new()
        .route("/game_results", post(submit_result_handler))
        .route("/game_results/mine", get(my_results_handler))
        .route("/user/{id}", delete(delete_user_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::require_auth,
        ));

    // Registration, login and read-only listings stay public
    let public_routes = Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/users/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/game_results", get(list_results_handler));

    public_routes.merge(protected_routes).with_state(state)
}

async fn register_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::auth::RegisterRequest>,
) -> Result<(StatusCode, Json<crate::dto::auth::AuthSuccessResponse>)> {
    crate::handlers::auth::register_handler_inner(&state, req).await
}

async fn login_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::auth::LoginRequest>,
) -> Result<Json<crate::dto::auth::AuthSuccessResponse>> {
    crate::handlers::auth::login_handler_inner(&state, req).await
}

async fn list_users_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::users::UserListResponse>> {
    crate::handlers::users::list_users_handler(&state).await
}

async fn get_user_handler(
    AxumState(state): AxumState<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<crate::dto::users::UserResponse>> {
    crate::handlers::users::get_user_handler(&state, user_id).await
}

async fn delete_user_handler(
    AxumState(state): AxumState<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<crate::dto::auth::SuccessResponse>> {
    crate::handlers::users::delete_user_handler(&state, current, user_id).await
}

async fn list_results_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::game_results::GameResultListResponse>> {
    crate::handlers::game_results::list_results_handler(&state).await
}

async fn my_results_handler(
    AxumState(state): AxumState<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<crate::dto::game_results::GameResultListResponse>> {
    crate::handlers::game_results::my_results_handler(&state, current).await
}

async fn submit_result_handler(
    AxumState(state): AxumState<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<crate::dto::game_results::SubmitResultRequest>,
) -> Result<(StatusCode, Json<crate::dto::game_results::SubmitResultResponse>)> {
    crate::handlers::game_results::submit_result_handler(&state, current, req).await
}

/// Creates the health check router
pub fn create_health_router() -> Router {
    Router::new().route("/health", axum::routing::get(|| async { "OK" }))
}

/// Creates the main application router: health checks plus the API.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
}
