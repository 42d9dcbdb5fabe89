//! HTTP request handlers.
//!
//! Each controller guards access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts DTOs to operation params, delegates to the matching service, and
//! maps the result back to a DTO response.

pub mod announcement;
pub mod auth;
pub mod avatar;
pub mod class;
pub mod curriculum;
pub mod daily_task;
pub mod map;
pub mod param;
pub mod question;
pub mod report;
pub mod shop;
pub mod stage;
