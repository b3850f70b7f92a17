//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use utoipa::ToSchema;

use crate::api::extractors::UserFields;
use crate::api::AppState;
use crate::config::{MSG_RECORD_CREATED, MSG_RECORD_DELETED, MSG_RECORD_UPDATED};
use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::types::{MessageResponse, UserList};

/// Form fields for create and update.
///
/// Missing fields arrive as empty strings.
#[derive(Debug, Default, ToSchema)]
pub struct UserForm {
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "Doe")]
    pub surname: String,
    #[schema(example = "john@doe.com")]
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// Parse a path id. Anything that is not an `i32` matches no row.
fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users; `result` is null when there are none", body = UserList),
        (status = 500, description = "Query failed", body = MessageResponse),
        (status = 503, description = "Database unavailable", body = MessageResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let users = state.user_service.get_all().await?;
    Ok(Json(UserList::from(users)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_id(&id).ok_or_not_found()?;
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded", description = "Also accepted as multipart/form-data"),
    responses(
        (status = 200, description = "Record created", body = MessageResponse),
        (status = 500, description = "Insert failed", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    UserFields(form): UserFields,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .save(form.name, form.surname, form.email)
        .await?;

    Ok(Json(MessageResponse::new(MSG_RECORD_CREATED)))
}

/// Replace a user's fields
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded", description = "Also accepted as multipart/form-data"),
    responses(
        (status = 200, description = "Record updated (also when no user has this id)", body = MessageResponse),
        (status = 500, description = "Update failed", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    UserFields(form): UserFields,
) -> AppResult<Json<MessageResponse>> {
    if let Some(id) = parse_id(&id) {
        state
            .user_service
            .update(id, form.name, form.surname, form.email)
            .await?;
    }

    Ok(Json(MessageResponse::new(MSG_RECORD_UPDATED)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Record deleted (also when no user has this id)", body = MessageResponse),
        (status = 500, description = "Delete failed", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if let Some(id) = parse_id(&id) {
        state.user_service.delete(id).await?;
    }

    Ok(Json(MessageResponse::new(MSG_RECORD_DELETED)))
}
