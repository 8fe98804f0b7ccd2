/// Database models
///
/// This module contains the database models and their operations:
///
/// - `user`: User accounts that own to-do tasks
/// - `task`: To-do tasks and the status enumeration

pub mod task;
pub mod user;
