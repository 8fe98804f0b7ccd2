//! # To-Do List Shared Library
//!
//! This crate contains the database layer and business logic shared by the
//! to-do list API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models (users and their to-do tasks)
//! - `db`: Connection pool and migration utilities
//! - `service`: Business rules layered over the store

pub mod db;
pub mod models;
pub mod service;

/// Current version of the to-do list shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
