//! API data transfer objects shared by every endpoint.
//!
//! These types define the JSON wire contract of the REST API. Controllers
//! convert between DTOs and the server-side domain models at the API boundary.

pub mod announcement;
pub mod api;
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
