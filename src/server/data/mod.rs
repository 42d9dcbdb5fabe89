//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories are generic over the connection so services can run them against the shared
//! connection or inside a transaction.

pub mod announcement;
pub mod avatar_equipment;
pub mod avatar_ownership;
pub mod avatar_part;
pub mod class;
pub mod daily_task;
pub mod game_map;
pub mod item;
pub mod map_object;
pub mod player_item;
pub mod question;
pub mod question_attempt;
pub mod stage;
pub mod stage_progress;
pub mod subject;
pub mod unit;
pub mod user;

#[cfg(test)]
mod test;
