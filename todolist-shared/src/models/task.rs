/// Task model and database operations
///
/// This module provides the Task model for to-do tasks and the two-value
/// status enumeration. Tasks are created by the seed migration; the only
/// mutable field after creation is `status`, updated exclusively through
/// [`TodoService::update_task_status`](crate::service::TodoService::update_task_status).
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todo_tasks (
///     task_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
///     title TEXT NOT NULL,
///     status TEXT NOT NULL
/// );
/// ```
///
/// The status column holds text for store compatibility, but only ever one
/// of the two canonical forms produced by [`TaskStatus::as_str`]. Arbitrary
/// input reaches the column through [`TaskStatus::normalize`] or not at all.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task status
///
/// A closed, two-value enumeration. The canonical persisted forms are the
/// capitalized strings `"Pending"` and `"Completed"`; free text never
/// reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task still needs doing
    Pending,

    /// Task is done
    Completed,
}

impl TaskStatus {
    /// Canonical string form for database storage and the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Normalizes raw client input into a canonical status
    ///
    /// Trims leading/trailing whitespace, lowercases, then maps the two
    /// recognized words. Anything else (empty input, other words, digits)
    /// is a normalization failure.
    ///
    /// ```
    /// use todolist_shared::models::task::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::normalize(" COMPLETED "), Some(TaskStatus::Completed));
    /// assert_eq!(TaskStatus::normalize("pending"), Some(TaskStatus::Pending));
    /// assert_eq!(TaskStatus::normalize("done"), None);
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "completed" => Some(TaskStatus::Completed),
            "pending" => Some(TaskStatus::Pending),
            _ => None,
        }
    }
}

/// Task model representing a single to-do item
///
/// Serializes with camelCase field names (`taskId`, `userId`, `title`,
/// `status`) to match the wire format consumed by the web client. The
/// owning user is reachable only through `user_id`; there is no
/// back-pointer, so payloads stay acyclic.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID (identity column)
    pub task_id: i32,

    /// Owning user (foreign key into `users`, cascade on delete)
    pub user_id: i32,

    /// Task title, immutable via the exposed operations
    pub title: String,

    /// Current status, always one of the canonical forms
    pub status: String,
}

impl Task {
    /// Lists tasks belonging to a user
    ///
    /// Returns tasks ordered by `task_id`. A user with no tasks, including
    /// a `user_id` that matches no user at all, yields an empty vector,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, user_id, title, status
            FROM todo_tasks
            WHERE user_id = $1
            ORDER BY task_id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(pool: &PgPool, task_id: i32) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, user_id, title, status
            FROM todo_tasks
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Persists a new status for a task
    ///
    /// A single-row atomic update; the store's row-level consistency is the
    /// only write coordination. Writing the status a row already holds is a
    /// valid no-op.
    ///
    /// # Returns
    ///
    /// True if a row was updated, false if the task doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn update_status(
        pool: &PgPool,
        task_id: i32,
        status: TaskStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE todo_tasks
            SET status = $2
            WHERE task_id = $1
            "#,
        )
        .bind(task_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Pending.as_str(), "Pending");
        assert_eq!(TaskStatus::Completed.as_str(), "Completed");
    }

    #[test]
    fn test_normalize_recognized_words() {
        assert_eq!(TaskStatus::normalize("completed"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::normalize("pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::normalize("Completed"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::normalize("PENDING"), Some(TaskStatus::Pending));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(TaskStatus::normalize(" COMPLETED "), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::normalize("\tpending\n"), Some(TaskStatus::Pending));
    }

    #[test]
    fn test_normalize_rejects_everything_else() {
        assert_eq!(TaskStatus::normalize("done"), None);
        assert_eq!(TaskStatus::normalize(""), None);
        assert_eq!(TaskStatus::normalize("   "), None);
        assert_eq!(TaskStatus::normalize("123"), None);
        assert_eq!(TaskStatus::normalize("archived"), None);
        assert_eq!(TaskStatus::normalize("completed pending"), None);
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task {
            task_id: 1,
            user_id: 2,
            title: "check emails".to_string(),
            status: TaskStatus::Pending.as_str().to_string(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["taskId"], 1);
        assert_eq!(json["userId"], 2);
        assert_eq!(json["title"], "check emails");
        assert_eq!(json["status"], "Pending");
    }
}
