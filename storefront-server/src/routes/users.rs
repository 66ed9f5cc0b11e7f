//! User routes

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::extractors::IdParam;
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserDto};
use crate::state::AppState;

pub const USER_NOT_FOUND: &str = "user does not exist";

/// Resolve an id to a stored user or the not-found error.
pub async fn find_user(db: &Database, id: i64) -> ApiResult<User> {
    db.get_user(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.into()))
}

/// POST /api/users - Create a user
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Json(req) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let user = state.db().create_user(&req).await?;
    info!(user_id = user.id, "user created");

    Ok(Json(user.into()))
}

/// GET /api/users - List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.db().list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /api/users/{id} - Get a single user
pub async fn get_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> ApiResult<Json<UserDto>> {
    let user = find_user(state.db(), id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/{id} - Overwrite a user's names
///
/// The user is resolved before the body is read, so a missing user wins over
/// a malformed body.
pub async fn update_user(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let mut user = find_user(state.db(), id).await?;

    let Json(update) = body.map_err(|e| ApiError::Deserialization(e.body_text()))?;

    user.first_name = update.first_name;
    user.last_name = update.last_name;

    state.db().save_user(&user).await?;
    info!(user_id = user.id, "user updated");

    Ok(Json(UserDto::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_user_on_empty_store() {
        let db = Database::open_in_memory().await.unwrap();

        let err = find_user(&db, 99999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "user does not exist");
    }

    #[tokio::test]
    async fn find_user_returns_stored_record() {
        let db = Database::open_in_memory().await.unwrap();
        let created = db
            .create_user(&CreateUserRequest {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await
            .unwrap();

        let found = find_user(&db, created.id).await.unwrap();
        assert_eq!(found, created);
    }
}
