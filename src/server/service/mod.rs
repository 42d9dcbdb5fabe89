//! Business logic layer for all application domains.
//!
//! Services sit between controllers and the repository layer. They validate
//! requests, enforce ownership and game rules, and compose repository calls,
//! wrapping multi-step mutations (purchases, first-clear rewards, claims) in
//! database transactions.

pub mod announcement;
pub mod auth;
pub mod avatar;
pub mod class;
pub mod curriculum;
pub mod daily_task;
pub mod map;
pub mod question;
pub mod report;
pub mod shop;
pub mod stage;
