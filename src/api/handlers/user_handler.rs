//! User handlers.
//!
//! Each handler forwards to [`UserService`](crate::services::UserService)
//! and maps the outcome to a status code. Update and delete answer 204
//! whether or not the user existed.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::USERS_PATH;
use crate::domain::{CreateUserDto, UpdateUserDto, User};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, NotFound};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user_by_id)
                .put(update_user_by_id)
                .delete(delete_user_by_id),
        )
}

/// Create a user
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created",
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Unreadable request body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> AppResult<Created> {
    let id = state.user_service.create_user(payload).await?;
    Ok(Created::at(format!("{}/{}", USERS_PATH, id)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found"),
        (status = 500, description = "Malformed user ID")
    )
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let response = match state.user_service.get_user_by_id(&id).await? {
        Some(user) => Json(user).into_response(),
        None => NotFound.into_response(),
    };
    Ok(response)
}

/// List all users
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Update user by ID
#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = "Users",
    request_body = UpdateUserDto,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User updated, or no such user"),
        (status = 400, description = "Unreadable request body"),
        (status = 500, description = "Malformed user ID")
    )
)]
pub async fn update_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> AppResult<NoContent> {
    state.user_service.update_user_by_id(&id, payload).await?;
    Ok(NoContent)
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted, or no such user"),
        (status = 500, description = "Malformed user ID")
    )
)]
pub async fn delete_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    state.user_service.delete_by_id(&id).await?;
    Ok(NoContent)
}
