/// Task endpoints
///
/// This module provides the single write path of the API:
/// - `PUT /tasks/:task_id` - update a task's status
///
/// The transport layer only checks that a status value is present and
/// non-blank. All other validation happens inside the service, which
/// signals failure the same way for "unrecognized value" and "no such
/// task", so a non-blank but unrecognized status (e.g. `"done"`) comes
/// back as 404, not 400.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Status update request body
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// Raw status value; trimmed, lowercased, and mapped by the service
    pub status: Option<String>,
}

/// Status update success response
#[derive(Debug, Serialize)]
pub struct UpdateTaskResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Update task status endpoint handler
///
/// The only endpoint with a persistent side effect: a single-row status
/// write. Idempotent: re-applying a task's current status succeeds.
///
/// # Endpoint
///
/// ```text
/// PUT /tasks/:task_id
/// Content-Type: application/json
///
/// { "status": "completed" }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Status updated successfully." }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: status missing or blank
/// - 404 Not Found: unknown task id, or a status the service rejected
/// - 500 Internal Server Error: storage failure
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(body): Json<UpdateTaskRequest>,
) -> ApiResult<Json<UpdateTaskResponse>> {
    let raw_status = body.status.unwrap_or_default();

    if raw_status.trim().is_empty() {
        return Err(ApiError::BadRequest("Invalid status value.".to_string()));
    }

    // Storage failures propagate as a generic 500; there is no
    // endpoint-specific catch on the write path
    let updated = state.service.update_task_status(task_id, &raw_status).await?;

    if !updated {
        return Err(ApiError::NotFound("Task not found.".to_string()));
    }

    Ok(Json(UpdateTaskResponse {
        message: "Status updated successfully.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_with_status() {
        let request: UpdateTaskRequest =
            serde_json::from_str(r#"{"status": "completed"}"#).unwrap();
        assert_eq!(request.status.as_deref(), Some("completed"));
    }

    #[test]
    fn test_request_deserializes_without_status() {
        // A body with no status field binds to None and is rejected as blank
        let request: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(request.status.is_none());

        let request: UpdateTaskRequest =
            serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert!(request.status.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let response = UpdateTaskResponse {
            message: "Status updated successfully.".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Status updated successfully.");
    }
}
