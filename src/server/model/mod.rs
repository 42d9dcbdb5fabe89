//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod announcement;
pub mod avatar;
pub mod class;
pub mod curriculum;
pub mod daily_task;
pub mod map;
pub mod question;
pub mod report;
pub mod shop;
pub mod stage;
pub mod user;
