/// Business rules layered over the store
///
/// This module provides the `TodoService`, the only place where status
/// values are validated and normalized. The service holds an injected
/// connection pool and no other state; it is constructed once at startup
/// and shared read-only across concurrent requests.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::service::TodoService;
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// let service = TodoService::new(pool);
///
/// let users = service.get_all_users().await?;
/// let tasks = service.get_tasks_for_user(users[0].user_id).await?;
///
/// if service.update_task_status(tasks[0].task_id, "completed").await? {
///     println!("Task completed");
/// }
/// # Ok(())
/// # }
/// ```

use crate::models::task::{Task, TaskStatus};
use crate::models::user::User;
use sqlx::PgPool;
use tracing::debug;

/// Task service holding the injected store handle
#[derive(Clone)]
pub struct TodoService {
    /// Database connection pool, shared across requests
    db: PgPool,
}

impl TodoService {
    /// Creates a new service over the given pool
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetches all users
    ///
    /// Delegates to the store with no filtering; storage errors propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn get_all_users(&self) -> Result<Vec<User>, sqlx::Error> {
        User::list_all(&self.db).await
    }

    /// Fetches the tasks owned by a user
    ///
    /// Does not check that the user exists: a non-existent user simply
    /// yields an empty vector. Existence checking is left to callers that
    /// want it; this service performs none.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn get_tasks_for_user(&self, user_id: i32) -> Result<Vec<Task>, sqlx::Error> {
        Task::list_by_user(&self.db, user_id).await
    }

    /// Validates, normalizes, and applies a status update
    ///
    /// The raw status is normalized through [`TaskStatus::normalize`]
    /// (trim, lowercase, map the two recognized words). On normalization
    /// failure the store is not touched and the result is `Ok(false)`, the
    /// same signal as an unknown task id. Re-applying a task's current
    /// status is a no-op write that still succeeds.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` - status was normalized and persisted
    /// - `Ok(false)` - unrecognized status value, or no task with this id
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the write fails at the store
    pub async fn update_task_status(
        &self,
        task_id: i32,
        raw_status: &str,
    ) -> Result<bool, sqlx::Error> {
        let status = match TaskStatus::normalize(raw_status) {
            Some(status) => status,
            None => {
                debug!(task_id, raw_status, "Rejected unrecognized status value");
                return Ok(false);
            }
        };

        if Task::find_by_id(&self.db, task_id).await?.is_none() {
            debug!(task_id, "Status update for unknown task");
            return Ok(false);
        }

        Task::update_status(&self.db, task_id, status).await?;

        debug!(task_id, status = status.as_str(), "Task status updated");
        Ok(true)
    }
}
