/// User endpoints
///
/// This module provides the read side of the API:
/// - `GET /users` - list all users
/// - `GET /users/:user_id/tasks` - list a user's tasks
///
/// Both handlers catch storage failures and convert them to a 500 with a
/// generic, endpoint-specific message; the underlying error goes to the
/// log only.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use todolist_shared::models::user::User;

/// Body returned when a user has no tasks (or does not exist)
#[derive(Debug, Serialize)]
pub struct NoTasksResponse {
    /// Human-readable message carrying the queried user id
    pub message: String,
}

/// List users endpoint handler
///
/// # Endpoint
///
/// ```text
/// GET /users
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "userId": 1, "name": "Maria" },
///   { "userId": 2, "name": "John" }
/// ]
/// ```
///
/// # Errors
///
/// - 500 Internal Server Error: storage failure
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.service.get_all_users().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch users");
        ApiError::Internal("An error occurred while fetching users.".to_string())
    })?;

    Ok(Json(users))
}

/// List a user's tasks endpoint handler
///
/// An empty result (the user has no tasks, or no such user exists) is
/// not an error: it responds 200 with a message object instead of an empty
/// array. No existence check is made on the user id.
///
/// # Endpoint
///
/// ```text
/// GET /users/:user_id/tasks
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "taskId": 1, "userId": 1, "title": "Bug 1", "status": "Pending" }
/// ]
/// ```
///
/// or, with no tasks:
///
/// ```json
/// { "message": "No tasks found for this user id 99." }
/// ```
///
/// # Errors
///
/// - 500 Internal Server Error: storage failure
pub async fn list_tasks_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Response> {
    let tasks = state.service.get_tasks_for_user(user_id).await.map_err(|e| {
        tracing::error!(error = %e, user_id, "Failed to fetch tasks");
        ApiError::Internal("An error occurred while processing your request.".to_string())
    })?;

    if tasks.is_empty() {
        return Ok(Json(NoTasksResponse {
            message: format!("No tasks found for this user id {}.", user_id),
        })
        .into_response());
    }

    Ok(Json(tasks).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tasks_response_serialization() {
        let response = NoTasksResponse {
            message: format!("No tasks found for this user id {}.", 99),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "No tasks found for this user id 99.");
    }
}
