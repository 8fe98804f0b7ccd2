/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User listing and per-user task listing
/// - `tasks`: Task status updates

pub mod health;
pub mod tasks;
pub mod users;
