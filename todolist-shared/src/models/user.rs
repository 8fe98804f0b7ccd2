/// User model and database operations
///
/// This module provides the User model for the accounts that own to-do
/// tasks. Users are created by the seed migration; the API only reads them.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     user_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     name TEXT NOT NULL
/// );
/// ```
///
/// A user owns its tasks: deleting a user row cascade-deletes every
/// `todo_tasks` row referencing it. The task collection is never carried on
/// the struct; tasks are reached by foreign-key lookup through
/// [`Task::list_by_user`](crate::models::task::Task::list_by_user), which
/// keeps serialized payloads free of cycles.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::models::user::User;
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// for user in User::list_all(&pool).await? {
///     println!("{}: {}", user.user_id, user.name);
/// }
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User model representing a task owner
///
/// Serializes with camelCase field names (`userId`, `name`) to match the
/// wire format consumed by the web client.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (identity column, insertion order)
    pub user_id: i32,

    /// Display name
    pub name: String,
}

impl User {
    /// Lists all users
    ///
    /// Returns users ordered by `user_id`, which for identity keys equals
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name
            FROM users
            ORDER BY user_id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
